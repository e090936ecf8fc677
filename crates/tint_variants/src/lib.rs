//! # Tint Variant Tables (tint_variants)
//!
//! Maps a component's option axes (variant, size, flags, ...) to class
//! fragments and merges them into the final class string.
//!
//! A [`VariantTable`] holds a base fragment plus one [`Axis`] per option,
//! each with a declared default. Resolving [`VariantProps`] against a table
//! yields the fragments in a fixed order: base, then each axis in
//! declaration order, then the caller's override class. Merging that list
//! with [`tint_merge`] lets later fragments (and the override) win.
//!
//! ## Example
//!
//! ```ignore
//! use tint_variants::{VariantProps, VariantTable};
//!
//! let table = VariantTable::builder("inline-flex items-center")
//!     .axis("size", [("sm", "h-8 px-3"), ("md", "h-10 px-4")])
//!     .default("size", "md")
//!     .build()?;
//!
//! let class = table.class(&VariantProps::new().class("px-8"));
//! assert_eq!(class, "inline-flex items-center h-10 px-8");
//! ```

pub mod error;
pub mod props;
pub mod table;

pub use error::{Result, VariantError};
pub use props::{AxisValue, VariantProps};
pub use table::{Axis, FragmentList, VariantTable, VariantTableBuilder};
