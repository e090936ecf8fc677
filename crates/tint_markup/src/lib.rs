//! Tint Render Tree
//!
//! Element trees produced by Tint components, with GPUI-style builders,
//! event handlers, caller-owned node refs and HTML output.
//!
//! # Example
//!
//! ```rust
//! use tint_markup::prelude::*;
//!
//! let save = NodeRef::new();
//! let ui = div()
//!     .class("flex items-center gap-2")
//!     .child(button().node_ref(&save).attr("type", "button").child("Save"))
//!     .child(span().child("Unsaved changes"));
//!
//! let mut tree = RenderTree::mount(ui);
//! assert!(tree.focus(&save));
//! assert_eq!(
//!     tree.to_html(),
//!     r#"<div class="flex items-center gap-2"><button type="button">Save</button><span>Unsaved changes</span></div>"#
//! );
//! ```

pub mod element;
pub mod event;
pub mod html;
pub mod motion;
pub mod node_ref;
pub mod tree;

// Core types
pub use element::{AttrValue, Element, Node};
pub use event::{EventCallback, EventContext, EventHandlers, EventType};
pub use node_ref::NodeRef;
pub use tree::{NodeId, RenderTree};

// Builder API
pub use element::{button, div, h3, img, p, span, text};

// Motion presets
pub use motion::{HoverMotion, SpringConfig};

// Serialization
pub use html::to_html;

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::element::{button, div, h3, img, p, span, text, AttrValue, Element, Node};
    // Event handlers
    pub use crate::event::{EventCallback, EventContext, EventHandlers, EventType};
    // Motion presets
    pub use crate::motion::{HoverMotion, SpringConfig};
    // Reference binding for external element access
    pub use crate::node_ref::NodeRef;
    pub use crate::tree::{NodeId, RenderTree};
}
