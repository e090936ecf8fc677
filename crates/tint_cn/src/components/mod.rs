//! Components built on tint_markup primitives
//!
//! Each component follows a consistent pattern:
//! - Builder function (e.g., `button("Label")`)
//! - Variant enum implementing `AxisValue` (e.g., `ButtonVariant`)
//! - Static variant table resolved and merged on build
//! - `From<Builder>` for `Element` and `Node`

pub mod button;
pub mod card;
pub mod spinner;

pub use button::{button, button_variants, ButtonBuilder, ButtonSize, ButtonVariant};
pub use card::{card, card_variants, CardBuilder, CardVariant};
pub use spinner::{spinner, Spinner, SpinnerSize};
