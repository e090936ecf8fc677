//! Class group tables
//!
//! Which utility classes target the same style property is configuration
//! data, not code. A table is a list of class groups written in TOML:
//!
//! ```toml
//! separator = ":"
//!
//! [[groups]]
//! name = "display"
//! classes = ["block", "flex", "grid", "hidden"]
//!
//! [[groups]]
//! name = "shadow"
//! prefixes = ["shadow"]
//! values = ["", "sm", "md", "lg"]    # "" admits the bare `shadow` class
//!
//! [[groups]]
//! name = "shadow-color"
//! prefixes = ["shadow"]
//! kinds = ["color"]
//!
//! [[groups]]
//! name = "p"
//! prefixes = ["p"]
//! kinds = ["length"]
//! conflicts = ["px", "py"]           # a later `p-*` also replaces these
//! ```
//!
//! The default table ships embedded in the crate. Applications with custom
//! theme names extend it with [`MergeConfig::extend_from_toml_str`]: groups
//! with a known name gain the new entries, unknown names are appended.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{MergeConfigError, Result};

/// Embedded default class group table
pub const DEFAULT_GROUPS_TOML: &str = include_str!("default_groups.toml");

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(\.\d+)?|\.\d+)$").expect("number pattern"));
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("integer pattern"));
static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+/\d+$").expect("fraction pattern"));
static COLOR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*(/(\d+(\.\d+)?|\[[^\]]+\]))?$")
        .expect("color name pattern")
});

const LENGTH_KEYWORDS: &[&str] = &[
    "px", "full", "screen", "auto", "min", "max", "fit", "svh", "lvh", "dvh", "svw", "lvw", "dvw",
];

const COLOR_FUNCTIONS: &[&str] = &["rgb", "hsl", "hwb", "lab", "lch", "oklab", "oklch", "color-mix"];
const LENGTH_FUNCTIONS: &[&str] = &["calc(", "min(", "max(", "clamp("];

/// Validator for the value part of a prefixed class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Spacing-scale numbers, fractions, size keywords and arbitrary lengths
    Length,
    /// Any decimal number
    Number,
    /// Whole numbers
    Integer,
    /// `n/m` fractions
    Fraction,
    /// Palette names (`primary`, `gray-100`, `white/20`) and arbitrary colors
    Color,
    /// Any `[...]` arbitrary value
    Arbitrary,
    /// Arbitrary values that look like lengths (`[14px]`, `[length:var(--x)]`)
    ArbitraryLength,
    /// Anything non-empty
    Any,
}

impl ValueKind {
    /// Look up a kind by its table name
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "length" => ValueKind::Length,
            "number" => ValueKind::Number,
            "integer" => ValueKind::Integer,
            "fraction" => ValueKind::Fraction,
            "color" => ValueKind::Color,
            "arbitrary" => ValueKind::Arbitrary,
            "arbitrary_length" => ValueKind::ArbitraryLength,
            "any" => ValueKind::Any,
            _ => return None,
        })
    }

    /// The table name of this kind
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Length => "length",
            ValueKind::Number => "number",
            ValueKind::Integer => "integer",
            ValueKind::Fraction => "fraction",
            ValueKind::Color => "color",
            ValueKind::Arbitrary => "arbitrary",
            ValueKind::ArbitraryLength => "arbitrary_length",
            ValueKind::Any => "any",
        }
    }

    /// Check whether `value` (the part after the prefix) satisfies this kind
    pub fn matches(self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        let arbitrary = ArbitraryValue::classify(value);
        match self {
            ValueKind::Length => {
                NUMBER.is_match(value)
                    || FRACTION.is_match(value)
                    || LENGTH_KEYWORDS.contains(&value)
                    || arbitrary == Some(ArbitraryValue::Length)
            }
            ValueKind::Number => {
                NUMBER.is_match(value) || arbitrary == Some(ArbitraryValue::Length)
            }
            ValueKind::Integer => {
                INTEGER.is_match(value) || arbitrary == Some(ArbitraryValue::Length)
            }
            ValueKind::Fraction => FRACTION.is_match(value),
            ValueKind::Color => match arbitrary {
                Some(kind) => kind == ArbitraryValue::Color,
                None => COLOR_NAME.is_match(value),
            },
            ValueKind::Arbitrary => arbitrary.is_some(),
            ValueKind::ArbitraryLength => arbitrary == Some(ArbitraryValue::Length),
            ValueKind::Any => true,
        }
    }
}

/// Shape of a `[...]` arbitrary value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArbitraryValue {
    Color,
    Length,
    Other,
}

impl ArbitraryValue {
    fn classify(value: &str) -> Option<Self> {
        let inner = value.strip_prefix('[')?.strip_suffix(']')?;
        if inner.is_empty() {
            return None;
        }

        if let Some((hint, _)) = inner.split_once(':') {
            match hint {
                "color" => return Some(ArbitraryValue::Color),
                "length" | "size" | "percentage" | "number" => {
                    return Some(ArbitraryValue::Length)
                }
                _ => {}
            }
        }

        if inner.starts_with('#') || COLOR_FUNCTIONS.iter().any(|f| inner.starts_with(f)) {
            return Some(ArbitraryValue::Color);
        }

        let first = inner.chars().next().unwrap_or_default();
        if first.is_ascii_digit()
            || first == '.'
            || first == '-'
            || LENGTH_FUNCTIONS.iter().any(|f| inner.starts_with(f))
        {
            return Some(ArbitraryValue::Length);
        }

        Some(ArbitraryValue::Other)
    }
}

/// One way a prefixed class can match a group
///
/// Explicit values are tried before kinds, kinds in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueMatcher<'a> {
    /// An exact value after the prefix; `""` is the bare prefix
    Value(&'a str),
    /// A value validator
    Kind(ValueKind),
}

impl ValueMatcher<'_> {
    /// Check whether `value` (the part after the prefix) matches
    pub fn matches(self, value: &str) -> bool {
        match self {
            ValueMatcher::Value(expected) => expected == value,
            ValueMatcher::Kind(kind) => kind.matches(value),
        }
    }
}

/// A set of classes that all set the same style property
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassGroup {
    /// Group name, also used in conflict lists
    pub name: String,
    /// Standalone classes (`flex`, `hidden`)
    pub classes: Vec<String>,
    /// Class prefixes before the value (`bg`, `ring-offset`)
    pub prefixes: Vec<String>,
    /// Explicit values accepted after a prefix; `""` admits the bare prefix
    pub values: Vec<String>,
    /// Value validators tried after the explicit values
    pub kinds: Vec<ValueKind>,
    /// Groups that a class of this group also overrides
    pub conflicts: Vec<String>,
}

impl ClassGroup {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add standalone classes
    pub fn classes<I: IntoIterator<Item = S>, S: Into<String>>(mut self, classes: I) -> Self {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Add prefixes
    pub fn prefixes<I: IntoIterator<Item = S>, S: Into<String>>(mut self, prefixes: I) -> Self {
        self.prefixes.extend(prefixes.into_iter().map(Into::into));
        self
    }

    /// Add explicit values
    pub fn values<I: IntoIterator<Item = S>, S: Into<String>>(mut self, values: I) -> Self {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Add a value validator
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Add groups this group overrides
    pub fn conflicts<I: IntoIterator<Item = S>, S: Into<String>>(mut self, groups: I) -> Self {
        self.conflicts.extend(groups.into_iter().map(Into::into));
        self
    }

    /// The value matchers of this group in lookup order
    pub fn matchers(&self) -> impl Iterator<Item = ValueMatcher<'_>> + '_ {
        self.values
            .iter()
            .map(|v| ValueMatcher::Value(v.as_str()))
            .chain(self.kinds.iter().copied().map(ValueMatcher::Kind))
    }

    fn absorb(&mut self, other: ClassGroup) {
        extend_unique(&mut self.classes, other.classes);
        extend_unique(&mut self.prefixes, other.prefixes);
        extend_unique(&mut self.values, other.values);
        extend_unique(&mut self.kinds, other.kinds);
        extend_unique(&mut self.conflicts, other.conflicts);
    }
}

fn extend_unique<T: PartialEq>(target: &mut Vec<T>, items: Vec<T>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

/// Complete merge configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeConfig {
    /// Optional class prefix; only prefixed classes take part in conflicts
    pub prefix: Option<String>,
    /// Modifier separator
    pub separator: char,
    /// Class groups in lookup order
    pub groups: Vec<ClassGroup>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self::from_toml_str(DEFAULT_GROUPS_TOML)
            .expect("embedded default class group table is valid")
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    prefix: Option<String>,
    separator: Option<String>,
    #[serde(default)]
    groups: Vec<RawGroup>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGroup {
    name: String,
    #[serde(default)]
    classes: Vec<String>,
    #[serde(default)]
    prefixes: Vec<String>,
    #[serde(default)]
    values: Vec<String>,
    #[serde(default)]
    kinds: Vec<String>,
    #[serde(default)]
    conflicts: Vec<String>,
}

impl RawGroup {
    fn into_group(self) -> Result<ClassGroup> {
        let kinds = self
            .kinds
            .into_iter()
            .map(|kind| {
                ValueKind::from_name(&kind).ok_or_else(|| MergeConfigError::UnknownKind {
                    group: self.name.clone(),
                    kind,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ClassGroup {
            name: self.name,
            classes: self.classes,
            prefixes: self.prefixes,
            values: self.values,
            kinds,
            conflicts: self.conflicts,
        })
    }
}

fn parse_separator(separator: String) -> Result<char> {
    let mut chars = separator.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(MergeConfigError::InvalidSeparator(separator)),
    }
}

impl MergeConfig {
    /// A configuration with no groups; every class is treated as unknown
    pub fn empty() -> Self {
        Self {
            prefix: None,
            separator: ':',
            groups: Vec::new(),
        }
    }

    /// Parse a complete table from TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut config = Self::empty();
        config.extend_from_toml_str(source)?;
        Ok(config)
    }

    /// Merge a TOML table into this configuration
    ///
    /// Groups whose name already exists gain the new classes, prefixes,
    /// values, kinds and conflicts; other groups are appended. A `prefix`
    /// or `separator` in the extension replaces the current one.
    pub fn extend_from_toml_str(&mut self, source: &str) -> Result<()> {
        let raw: RawConfig = toml::from_str(source)?;

        let separator = raw.separator.map(parse_separator).transpose()?;
        let groups = raw
            .groups
            .into_iter()
            .map(RawGroup::into_group)
            .collect::<Result<Vec<_>>>()?;

        let mut next = self.clone();
        if let Some(prefix) = raw.prefix {
            next.prefix = if prefix.is_empty() { None } else { Some(prefix) };
        }
        if let Some(separator) = separator {
            next.separator = separator;
        }
        for group in groups {
            next.add_group(group);
        }
        next.validate()?;

        *self = next;
        Ok(())
    }

    /// Add a group, absorbing it into an existing group with the same name
    pub fn add_group(&mut self, group: ClassGroup) {
        match self.groups.iter_mut().find(|g| g.name == group.name) {
            Some(existing) => existing.absorb(group),
            None => self.groups.push(group),
        }
    }

    /// Builder-style [`add_group`](Self::add_group)
    pub fn with_group(mut self, group: ClassGroup) -> Self {
        self.add_group(group);
        self
    }

    /// Set the class prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() { None } else { Some(prefix) };
        self
    }

    /// Set the modifier separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Find a group by name
    pub fn group(&self, name: &str) -> Option<&ClassGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Check the structural rules of the table
    pub fn validate(&self) -> Result<()> {
        for group in &self.groups {
            if group.classes.is_empty() && group.prefixes.is_empty() {
                return Err(MergeConfigError::EmptyGroup(group.name.clone()));
            }
            if !group.prefixes.is_empty() && group.matchers().next().is_none() {
                return Err(MergeConfigError::NoValueMatcher(group.name.clone()));
            }
            for target in &group.conflicts {
                if self.group(target).is_none() {
                    return Err(MergeConfigError::UnknownConflict {
                        group: group.name.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
