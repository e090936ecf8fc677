//! Variant tables and fragment resolution

use indexmap::IndexMap;
use serde::Deserialize;
use tint_merge::{ClassValue, Merger};
use tracing::debug;

use crate::error::{Result, VariantError};
use crate::props::VariantProps;

/// One option axis: its values, their fragments and the default
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Axis {
    name: String,
    values: IndexMap<String, String>,
    default: String,
}

impl Axis {
    /// The axis name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default value key
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Iterate over `(value, fragment)` pairs in declaration order
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The fragment mapped to a value, if the value is declared
    pub fn fragment(&self, value: &str) -> Option<&str> {
        self.values.get(value).map(String::as_str)
    }

    /// Pick the value to use for a requested value
    ///
    /// Missing or unrecognized requests select the default.
    pub fn select(&self, requested: Option<&str>) -> (&str, &str) {
        if let Some(value) = requested {
            if let Some((key, fragment)) = self.values.get_key_value(value) {
                return (key.as_str(), fragment.as_str());
            }
            debug!(
                axis = %self.name,
                value,
                default = %self.default,
                "unrecognized variant value, using default"
            );
        }

        let fragment = self.fragment(&self.default).unwrap_or_default();
        (self.default.as_str(), fragment)
    }
}

/// Ordered class fragments produced for one render
///
/// Base fragment first, then one entry per axis in declaration order, then
/// the override class if the props carry one. Empty fragments keep their
/// slot but contribute nothing when merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FragmentList<'a> {
    fragments: Vec<&'a str>,
}

impl<'a> FragmentList<'a> {
    /// An empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment
    pub fn push(&mut self, fragment: &'a str) {
        self.fragments.push(fragment);
    }

    /// The fragments in order
    pub fn as_slice(&self) -> &[&'a str] {
        &self.fragments
    }

    /// Number of fragments (including empty ones)
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the list holds no fragments at all
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Iterate over the fragments
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fragments.iter().copied()
    }

    /// Merge the fragments with the default merger
    pub fn merge(&self) -> String {
        self.merge_with(tint_merge::default_merger())
    }

    /// Merge the fragments with a specific merger
    pub fn merge_with(&self, merger: &Merger) -> String {
        merger.merge_values(self.fragments.iter().copied())
    }
}

impl<'a> IntoIterator for FragmentList<'a> {
    type Item = &'a str;
    type IntoIter = std::vec::IntoIter<&'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> From<FragmentList<'a>> for ClassValue<'a> {
    fn from(list: FragmentList<'a>) -> Self {
        list.fragments.into_iter().collect()
    }
}

/// A component's static option→fragment table
///
/// Built once per component type and immutable afterwards.
///
/// ```ignore
/// let table = VariantTable::builder("inline-flex items-center rounded-md")
///     .axis("variant", [("primary", "bg-primary text-white"), ("ghost", "bg-transparent")])
///     .axis("size", [("sm", "h-8 px-3"), ("md", "h-10 px-4")])
///     .flag("fullWidth", "w-full")
///     .default("variant", "primary")
///     .default("size", "md")
///     .build()?;
///
/// let class = table.class(&VariantProps::new().set("size", "sm"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantTable {
    base: String,
    axes: IndexMap<String, Axis>,
}

impl VariantTable {
    /// Start building a table with the axis-independent base fragment
    pub fn builder(base: impl Into<String>) -> VariantTableBuilder {
        VariantTableBuilder {
            base: base.into(),
            axes: Vec::new(),
            defaults: Vec::new(),
        }
    }

    /// Load a table from TOML
    ///
    /// ```toml
    /// base = "inline-flex items-center"
    ///
    /// [axes.variant]
    /// default = "primary"
    /// values = { primary = "bg-primary", ghost = ["bg-transparent", "shadow-none"] }
    ///
    /// [axes.fullWidth]
    /// default = false
    /// values = { true = "w-full" }
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let raw: RawTable = toml::from_str(source)?;

        let mut builder = Self::builder(raw.base.join());
        for (name, axis) in raw.axes {
            let values: Vec<(String, String)> = axis
                .values
                .into_iter()
                .map(|(value, fragments)| (value, fragments.join()))
                .collect();
            builder = builder.axis(name.clone(), values);
            if let Some(default) = axis.default {
                builder = builder.default(name, default.into_key());
            }
        }
        builder.build()
    }

    /// The axis-independent base fragment
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The axes in declaration order
    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.axes.values()
    }

    /// Look up an axis by name
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.get(name)
    }

    /// The `(axis, value)` pairs a render with `props` would use
    pub fn selection<'a>(&'a self, props: &VariantProps) -> Vec<(&'a str, &'a str)> {
        self.axes
            .values()
            .map(|axis| (axis.name(), axis.select(props.get(axis.name())).0))
            .collect()
    }

    /// Resolve props into the ordered fragment list
    ///
    /// Props naming axes the table does not declare are ignored.
    pub fn resolve<'a>(&'a self, props: &'a VariantProps) -> FragmentList<'a> {
        let mut list = FragmentList::new();
        list.push(&self.base);
        for axis in self.axes.values() {
            list.push(axis.select(props.get(axis.name())).1);
        }
        if let Some(class) = props.override_class() {
            list.push(class);
        }
        list
    }

    /// Resolve and merge with the default merger
    pub fn class(&self, props: &VariantProps) -> String {
        self.resolve(props).merge()
    }

    /// Resolve and merge with a specific merger
    pub fn class_with(&self, merger: &Merger, props: &VariantProps) -> String {
        self.resolve(props).merge_with(merger)
    }
}

/// Builder for [`VariantTable`]
#[derive(Clone, Debug)]
pub struct VariantTableBuilder {
    base: String,
    axes: Vec<(String, Vec<(String, String)>)>,
    defaults: Vec<(String, String)>,
}

impl VariantTableBuilder {
    /// Declare an axis with its `(value, fragment)` pairs
    pub fn axis<I, V, F>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (V, F)>,
        V: Into<String>,
        F: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(value, fragment)| (value.into(), fragment.into()))
            .collect();
        self.axes.push((name.into(), values));
        self
    }

    /// Declare a boolean axis whose `true` value maps to `fragment`
    pub fn flag(self, name: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.axis(name, [("true".to_string(), fragment.into())])
    }

    /// Set the default value of an axis
    pub fn default(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.push((axis.into(), value.into()));
        self
    }

    /// Set the default of a boolean axis
    pub fn default_flag(self, axis: impl Into<String>, on: bool) -> Self {
        self.default(axis, if on { "true" } else { "false" })
    }

    /// Validate and build the table
    pub fn build(self) -> Result<VariantTable> {
        let mut axes: IndexMap<String, Axis> = IndexMap::with_capacity(self.axes.len());

        for (name, declared) in self.axes {
            if axes.contains_key(&name) {
                return Err(VariantError::DuplicateAxis(name));
            }

            let mut values: IndexMap<String, String> = IndexMap::with_capacity(declared.len() + 1);
            for (value, fragment) in declared {
                if values.contains_key(&value) {
                    return Err(VariantError::DuplicateValue { axis: name, value });
                }
                values.insert(value, fragment);
            }
            if values.contains_key("true") && !values.contains_key("false") {
                values.insert("false".to_string(), String::new());
            }

            axes.insert(
                name.clone(),
                Axis {
                    name,
                    values,
                    default: String::new(),
                },
            );
        }

        let mut assigned: IndexMap<String, String> = IndexMap::new();
        for (axis_name, value) in self.defaults {
            let Some(axis) = axes.get_mut(&axis_name) else {
                return Err(VariantError::UnknownAxis(axis_name));
            };
            if let Some(first) = assigned.get(&axis_name) {
                return Err(VariantError::DuplicateDefault {
                    axis: axis_name,
                    first: first.clone(),
                    second: value,
                });
            }
            if !axis.values.contains_key(&value) {
                return Err(VariantError::UnknownDefault {
                    axis: axis_name,
                    value,
                });
            }
            axis.default = value.clone();
            assigned.insert(axis_name, value);
        }

        for axis in axes.values_mut() {
            if assigned.contains_key(&axis.name) {
                continue;
            }
            // Boolean axes default to off unless told otherwise.
            if axis.values.contains_key("false") && axis.values.len() == 2 {
                axis.default = "false".to_string();
            } else {
                return Err(VariantError::MissingDefault(axis.name.clone()));
            }
        }

        Ok(VariantTable {
            base: self.base,
            axes,
        })
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    #[serde(default)]
    base: RawFragments,
    #[serde(default)]
    axes: IndexMap<String, RawAxis>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAxis {
    default: Option<RawDefault>,
    values: IndexMap<String, RawFragments>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDefault {
    Flag(bool),
    Value(String),
}

impl RawDefault {
    fn into_key(self) -> String {
        match self {
            RawDefault::Flag(on) => on.to_string(),
            RawDefault::Value(value) => value,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFragments {
    One(String),
    Many(Vec<String>),
}

impl Default for RawFragments {
    fn default() -> Self {
        RawFragments::One(String::new())
    }
}

impl RawFragments {
    fn join(self) -> String {
        match self {
            RawFragments::One(fragment) => fragment,
            RawFragments::Many(fragments) => fragments.join(" "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_table() -> VariantTable {
        VariantTable::builder("inline-flex items-center rounded-xl")
            .axis(
                "variant",
                [
                    ("primary", "bg-primary text-white"),
                    ("secondary", "bg-secondary text-white"),
                    ("ghost", ""),
                ],
            )
            .axis("size", [("sm", "h-9 px-3"), ("md", "h-10 px-4"), ("lg", "h-12 px-6")])
            .flag("fullWidth", "w-full")
            .default("variant", "primary")
            .default("size", "md")
            .default_flag("fullWidth", false)
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve_selected_values_in_axis_order() {
        let table = button_table();
        let props = VariantProps::new().set("size", "lg").set("variant", "secondary");
        let list = table.resolve(&props);
        assert_eq!(
            list.as_slice(),
            &[
                "inline-flex items-center rounded-xl",
                "bg-secondary text-white",
                "h-12 px-6",
                "",
            ]
        );
    }

    #[test]
    fn test_missing_and_unknown_values_use_default() {
        let table = button_table();
        let props = VariantProps::new().set("variant", "neon");
        let list = table.resolve(&props);
        assert_eq!(list.as_slice()[1], "bg-primary text-white");
        assert_eq!(list.as_slice()[2], "h-10 px-4");
        assert_eq!(
            table.selection(&props),
            vec![("variant", "primary"), ("size", "md"), ("fullWidth", "false")]
        );
    }

    #[test]
    fn test_override_class_is_last() {
        let table = button_table();
        let props = VariantProps::new().flag("fullWidth", true).class("px-10 bg-black");
        let list = table.resolve(&props);
        assert_eq!(list.len(), 5);
        assert_eq!(list.as_slice()[3], "w-full");
        assert_eq!(list.as_slice()[4], "px-10 bg-black");

        let class = table.class(&props);
        assert!(class.contains("px-10"));
        assert!(class.contains("bg-black"));
        assert!(!class.contains("px-4"));
        assert!(!class.contains("bg-primary"));
    }

    #[test]
    fn test_unknown_axes_in_props_are_ignored() {
        let table = button_table();
        let props = VariantProps::new().set("shape", "pill");
        assert_eq!(table.resolve(&props).len(), 4);
    }

    #[test]
    fn test_every_combination_contains_exactly_the_mapped_fragments() {
        let table = button_table();
        for variant in ["primary", "secondary", "ghost"] {
            for size in ["sm", "md", "lg"] {
                for full in [false, true] {
                    let props = VariantProps::new()
                        .set("variant", variant)
                        .set("size", size)
                        .flag("fullWidth", full);
                    let class = table.class(&props);
                    let tokens: Vec<&str> = class.split_whitespace().collect();

                    let mut expected: Vec<&str> = table.base().split_whitespace().collect();
                    for axis in table.axes() {
                        let (_, fragment) = axis.select(props.get(axis.name()));
                        expected.extend(fragment.split_whitespace());
                    }
                    assert_eq!(tokens, expected, "{variant}/{size}/{full}");
                }
            }
        }
    }

    #[test]
    fn test_boolean_axis_gets_implicit_false() {
        let table = button_table();
        let axis = table.axis("fullWidth").unwrap();
        assert_eq!(axis.fragment("false"), Some(""));
        assert_eq!(axis.default_value(), "false");
    }

    #[test]
    fn test_missing_default_is_an_error() {
        let err = VariantTable::builder("")
            .axis("size", [("sm", "h-8"), ("md", "h-10")])
            .build()
            .unwrap_err();
        assert!(matches!(err, VariantError::MissingDefault(axis) if axis == "size"));
    }

    #[test]
    fn test_duplicate_default_is_an_error() {
        let err = VariantTable::builder("")
            .axis("size", [("sm", "h-8"), ("md", "h-10")])
            .default("size", "sm")
            .default("size", "md")
            .build()
            .unwrap_err();
        assert!(matches!(err, VariantError::DuplicateDefault { .. }));
    }

    #[test]
    fn test_undeclared_default_is_an_error() {
        let err = VariantTable::builder("")
            .axis("size", [("sm", "h-8")])
            .default("size", "xl")
            .build()
            .unwrap_err();
        assert!(matches!(err, VariantError::UnknownDefault { .. }));

        let err = VariantTable::builder("")
            .default("tone", "loud")
            .build()
            .unwrap_err();
        assert!(matches!(err, VariantError::UnknownAxis(_)));
    }

    #[test]
    fn test_duplicate_declarations_are_errors() {
        let err = VariantTable::builder("")
            .axis("size", [("sm", "h-8"), ("sm", "h-9")])
            .default("size", "sm")
            .build()
            .unwrap_err();
        assert!(matches!(err, VariantError::DuplicateValue { .. }));

        let err = VariantTable::builder("")
            .axis("size", [("sm", "h-8")])
            .axis("size", [("md", "h-10")])
            .build()
            .unwrap_err();
        assert!(matches!(err, VariantError::DuplicateAxis(_)));
    }

    #[test]
    fn test_from_toml() {
        let table = VariantTable::from_toml_str(
            r#"
            base = ["inline-flex", "items-center"]

            [axes.variant]
            default = "primary"
            values = { primary = "bg-primary", ghost = ["bg-transparent", "shadow-none"] }

            [axes.fullWidth]
            default = false
            values = { true = "w-full" }
            "#,
        )
        .unwrap();

        assert_eq!(table.base(), "inline-flex items-center");
        let names: Vec<&str> = table.axes().map(Axis::name).collect();
        assert_eq!(names, vec!["variant", "fullWidth"]);

        let props = VariantProps::new().set("variant", "ghost").flag("fullWidth", true);
        assert_eq!(
            table.class(&props),
            "inline-flex items-center bg-transparent shadow-none w-full"
        );
    }

    #[test]
    fn test_from_toml_missing_default() {
        let err = VariantTable::from_toml_str(
            r#"
            [axes.size]
            values = { sm = "h-8", md = "h-10" }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, VariantError::MissingDefault(_)));
    }
}
