//! # Tint Class Merging (tint_merge)
//!
//! Builds a single class string out of conditional fragments, resolving
//! conflicts between utility classes that set the same style property.
//!
//! - **Flattening**: strings, `Option`s, `(class, bool)` pairs and nested
//!   lists are flattened in order, skipping everything that is switched off
//! - **Merging**: when two utility classes set the same property (with the
//!   same modifiers), the one that appears later wins
//! - **Configuration**: which classes conflict is a TOML table of class
//!   groups ([`MergeConfig`]), with an embedded default that applications can
//!   extend for their own theme names
//!
//! ## Example
//!
//! ```ignore
//! use tint_merge::cn;
//!
//! let is_active = true;
//! let class = cn!("px-2 py-1 bg-primary", ("bg-secondary", is_active), None::<&str>, "p-3");
//! assert_eq!(class, "bg-secondary p-3");
//! ```

pub mod config;
pub mod error;
pub mod merger;
pub mod parse;
pub mod value;

use std::sync::LazyLock;

pub use config::{ClassGroup, MergeConfig, ValueKind, ValueMatcher, DEFAULT_GROUPS_TOML};
pub use error::{MergeConfigError, Result};
pub use merger::{ClassGroupId, Merger};
pub use parse::ParsedClass;
pub use value::ClassValue;

static DEFAULT_MERGER: LazyLock<Merger> = LazyLock::new(Merger::default);

/// The merger built from the embedded default class group table
pub fn default_merger() -> &'static Merger {
    &DEFAULT_MERGER
}

/// Flatten class inputs and merge them with the default merger
///
/// Use the [`cn!`] macro to pass inputs of different types.
pub fn cn<'v, I, V>(values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<ClassValue<'v>>,
{
    default_merger().merge_values(values)
}

/// Flatten class inputs without resolving conflicts
pub fn cx<'v, I, V>(values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<ClassValue<'v>>,
{
    let value: ClassValue<'v> = values.into_iter().collect();
    value.tokens().join(" ")
}

/// Alias of [`cx`]
pub fn clsx<'v, I, V>(values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<ClassValue<'v>>,
{
    cx(values)
}

/// Merge any mix of class inputs with the default merger
///
/// Every argument is converted with `ClassValue::from`: strings, `String`s,
/// `Option`s, `(class, bool)` pairs, `bool`s (which contribute nothing),
/// vectors and arrays of those, or a [`ClassValue`] itself.
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::cn([$($crate::ClassValue::from($value)),+])
    };
}

/// Flatten any mix of class inputs without resolving conflicts
#[macro_export]
macro_rules! cx {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::cx([$($crate::ClassValue::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_macro_mixes_input_types() {
        let active = true;
        let disabled = false;
        let extra: Option<String> = Some("rounded-xl".to_string());
        let class = cn!(
            "px-2 py-1 bg-primary",
            ("bg-secondary", active),
            ("opacity-50", disabled),
            None::<&str>,
            extra,
            vec!["p-3"],
        );
        assert_eq!(class, "bg-secondary rounded-xl p-3");
    }

    #[test]
    fn test_cn_empty() {
        assert_eq!(cn!(), "");
        assert_eq!(cn!(false, None::<&str>, ("a", false)), "");
    }

    #[test]
    fn test_cx_keeps_conflicts() {
        assert_eq!(cx!("p-2", "p-4", ("m-1", true)), "p-2 p-4 m-1");
        assert_eq!(clsx(["p-2 p-2", "m-1"]), "p-2 p-2 m-1");
    }

    #[test]
    fn test_cn_function() {
        assert_eq!(cn(["p-2", "p-4"]), "p-4");
    }
}
