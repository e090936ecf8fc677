//! Conditional class inputs
//!
//! A [`ClassValue`] is one argument to [`cn!`](crate::cn!) or [`cx`](crate::cx):
//! a plain string, nothing at all, a set of conditional classes, or a nested
//! list of further values. Flattening walks the inputs in order and yields
//! every whitespace-separated token that is switched on.

use std::borrow::Cow;

/// One class-name input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClassValue<'a> {
    /// Contributes nothing (`None`, `false`, empty input)
    #[default]
    Empty,
    /// A string of whitespace-separated class tokens
    Str(Cow<'a, str>),
    /// Classes keyed by whether they are switched on
    Conditional(Vec<(Cow<'a, str>, bool)>),
    /// Nested inputs, flattened in order
    List(Vec<ClassValue<'a>>),
}

impl<'a> ClassValue<'a> {
    /// A single class string that is only present when `enabled` is true
    pub fn when(classes: impl Into<Cow<'a, str>>, enabled: bool) -> Self {
        ClassValue::Conditional(vec![(classes.into(), enabled)])
    }

    /// Build a conditional mapping from `(classes, enabled)` pairs
    pub fn conditional<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<Cow<'a, str>>,
    {
        ClassValue::Conditional(
            entries
                .into_iter()
                .map(|(classes, enabled)| (classes.into(), enabled))
                .collect(),
        )
    }

    /// Whether this value contributes no tokens
    pub fn is_empty(&self) -> bool {
        match self {
            ClassValue::Empty => true,
            ClassValue::Str(s) => s.trim().is_empty(),
            ClassValue::Conditional(entries) => entries
                .iter()
                .all(|(classes, enabled)| !enabled || classes.trim().is_empty()),
            ClassValue::List(values) => values.iter().all(ClassValue::is_empty),
        }
    }

    /// Append every active token, in order, to `out`
    pub fn push_tokens<'s>(&'s self, out: &mut Vec<&'s str>) {
        match self {
            ClassValue::Empty => {}
            ClassValue::Str(s) => out.extend(s.split_whitespace()),
            ClassValue::Conditional(entries) => {
                for (classes, enabled) in entries {
                    if *enabled {
                        out.extend(classes.split_whitespace());
                    }
                }
            }
            ClassValue::List(values) => {
                for value in values {
                    value.push_tokens(out);
                }
            }
        }
    }

    /// Collect the active tokens of this value
    pub fn tokens(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.push_tokens(&mut out);
        out
    }
}

impl<'a> From<&'a str> for ClassValue<'a> {
    fn from(s: &'a str) -> Self {
        ClassValue::Str(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for ClassValue<'a> {
    fn from(s: &'a String) -> Self {
        ClassValue::Str(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for ClassValue<'_> {
    fn from(s: String) -> Self {
        ClassValue::Str(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for ClassValue<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        ClassValue::Str(s)
    }
}

/// Booleans never contribute a class; `true` on its own names nothing.
impl From<bool> for ClassValue<'_> {
    fn from(_: bool) -> Self {
        ClassValue::Empty
    }
}

impl From<()> for ClassValue<'_> {
    fn from(_: ()) -> Self {
        ClassValue::Empty
    }
}

impl<'a, T: Into<ClassValue<'a>>> From<Option<T>> for ClassValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Empty, Into::into)
    }
}

impl<'a> From<(&'a str, bool)> for ClassValue<'a> {
    fn from((classes, enabled): (&'a str, bool)) -> Self {
        ClassValue::when(classes, enabled)
    }
}

impl<'a, T: Into<ClassValue<'a>>> From<Vec<T>> for ClassValue<'a> {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<ClassValue<'a>>, const N: usize> From<[T; N]> for ClassValue<'a> {
    fn from(values: [T; N]) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<ClassValue<'a>>> FromIterator<T> for ClassValue<'a> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ClassValue::List(iter.into_iter().map(Into::into).collect())
    }
}
