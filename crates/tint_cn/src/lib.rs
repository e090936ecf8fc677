//! # Tint Component Library (tint_cn)
//!
//! A shadcn-inspired component library: each component resolves its options
//! through a static variant table and merges the result with the caller's
//! classes, producing a `tint_markup` element tree.
//!
//! - **Class merging**: `tint_merge` resolves conflicting utility classes
//! - **Variant tables**: `tint_variants` maps option axes to class fragments
//! - **Primitives**: `tint_markup` provides elements, events and node refs
//! - **Components**: `tint_cn` wires them into Button, Card and Spinner
//!
//! ## Example
//!
//! ```ignore
//! use tint_cn::prelude::*;
//!
//! // Button with variants
//! cn::button("Click me")
//!     .variant(ButtonVariant::Glass)
//!     .size(ButtonSize::Large)
//!
//! // Card with an icon and an action
//! cn::card("Notifications")
//!     .description("Stay in the loop.")
//!     .icon(icons::BELL)
//!     .action("Enable", |_| println!("enabled"))
//!
//! // Merge classes with the theme table
//! let class = cn!("shadow-lg", ("shadow-neumorphic", true));
//! assert_eq!(class, "shadow-neumorphic");
//! ```

pub mod components;
pub mod theme;

pub use components::*;
pub use tint_merge::ClassValue;

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::button::button;
    pub use crate::components::card::card;
    pub use crate::components::spinner::spinner;
}

/// Merge any mix of class inputs with the theme merger
///
/// Accepts the same inputs as `tint_merge::cn!`, but resolves conflicts with
/// the theme table so custom shadow presets override like built-in ones.
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::theme::merge([$($crate::ClassValue::from($value)),+])
    };
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::button::{button, ButtonBuilder, ButtonSize, ButtonVariant};
    pub use crate::components::card::{card, CardBuilder, CardVariant};
    pub use crate::components::spinner::{spinner, Spinner, SpinnerSize};
    // Re-export the primitives components are built from
    pub use tint_icons::{icons, Icon, LucideIcon};
    pub use tint_markup::{Element, EventContext, Node, NodeRef, RenderTree};
    pub use tint_variants::{AxisValue, VariantProps, VariantTable};
}
