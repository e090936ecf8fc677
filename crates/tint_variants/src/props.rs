//! Caller-side variant selection

use indexmap::IndexMap;
use tracing::debug;

/// A typed value of one variant axis
///
/// Component enums implement this so props can be built without stringly
/// typed axis names:
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// enum Size { Sm, #[default] Md, Lg }
///
/// impl AxisValue for Size {
///     const AXIS: &'static str = "size";
///     const ALL: &'static [Self] = &[Size::Sm, Size::Md, Size::Lg];
///
///     fn as_str(self) -> &'static str {
///         match self { Size::Sm => "sm", Size::Md => "md", Size::Lg => "lg" }
///     }
/// }
///
/// let props = VariantProps::new().with(Size::Lg);
/// ```
pub trait AxisValue: Copy + Default + 'static {
    /// The axis name in the variant table
    const AXIS: &'static str;
    /// Every value of the axis
    const ALL: &'static [Self];

    /// The table key of this value
    fn as_str(self) -> &'static str;

    /// Look up a value by its table key, falling back to the default
    fn parse(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.as_str() == name)
            .unwrap_or_else(|| {
                let fallback = Self::default();
                debug!(
                    axis = Self::AXIS,
                    value = name,
                    default = fallback.as_str(),
                    "unrecognized axis value, using default"
                );
                fallback
            })
    }
}

/// Selected axis values plus an optional override class
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariantProps {
    values: IndexMap<String, String>,
    class: Option<String>,
}

impl VariantProps {
    /// Props that select every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Build props from `(axis, value)` pairs
    pub fn from_pairs<I, A, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, V)>,
        A: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |props, (axis, value)| props.set(axis, value))
    }

    /// Select a value for an axis by name
    pub fn set(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(axis.into(), value.into());
        self
    }

    /// Select a value on a boolean axis
    pub fn flag(self, axis: impl Into<String>, on: bool) -> Self {
        self.set(axis, if on { "true" } else { "false" })
    }

    /// Select a typed axis value
    pub fn with<V: AxisValue>(self, value: V) -> Self {
        self.set(V::AXIS, value.as_str())
    }

    /// Select a typed axis value if one is given; `None` leaves the default
    pub fn maybe<V: AxisValue>(self, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(value),
            None => self,
        }
    }

    /// Set the override class appended after every variant fragment
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set or clear the override class
    pub fn class_opt(mut self, class: Option<impl Into<String>>) -> Self {
        self.class = class.map(Into::into);
        self
    }

    /// Remove the selection for an axis
    pub fn unset(mut self, axis: &str) -> Self {
        self.values.shift_remove(axis);
        self
    }

    /// The selected value for an axis, if any
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values.get(axis).map(String::as_str)
    }

    /// The override class, if any
    pub fn override_class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Iterate over the selected `(axis, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    enum Tone {
        #[default]
        Neutral,
        Loud,
    }

    impl AxisValue for Tone {
        const AXIS: &'static str = "tone";
        const ALL: &'static [Self] = &[Tone::Neutral, Tone::Loud];

        fn as_str(self) -> &'static str {
            match self {
                Tone::Neutral => "neutral",
                Tone::Loud => "loud",
            }
        }
    }

    #[test]
    fn test_typed_values() {
        let props = VariantProps::new().with(Tone::Loud);
        assert_eq!(props.get("tone"), Some("loud"));
    }

    #[test]
    fn test_parse_falls_back_to_default() {
        assert_eq!(Tone::parse("loud"), Tone::Loud);
        assert_eq!(Tone::parse("shouting"), Tone::Neutral);
    }

    #[test]
    fn test_flag_and_override() {
        let props = VariantProps::new().flag("fullWidth", true).class("mt-4");
        assert_eq!(props.get("fullWidth"), Some("true"));
        assert_eq!(props.override_class(), Some("mt-4"));

        let props = props.flag("fullWidth", false).class_opt(None::<String>);
        assert_eq!(props.get("fullWidth"), Some("false"));
        assert_eq!(props.override_class(), None);
    }

    #[test]
    fn test_maybe_and_unset() {
        let props = VariantProps::new().maybe(None::<Tone>);
        assert_eq!(props.get("tone"), None);

        let props = VariantProps::from_pairs([("tone", "loud"), ("size", "lg")]).unset("tone");
        assert_eq!(props.iter().collect::<Vec<_>>(), vec![("size", "lg")]);
    }
}
