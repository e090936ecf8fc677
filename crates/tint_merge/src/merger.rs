//! Conflict-resolving class merger
//!
//! The merger walks tokens from last to first. Each known utility class
//! claims a key made of its modifiers, importance and class group; a token
//! whose key is already claimed was overridden by a later token and is
//! dropped. Claiming a key also claims the keys of the groups it conflicts
//! with, so `p-4` after `px-2 py-1` removes both.
//!
//! Tokens that match no group never conflict. Exact duplicates still
//! collapse to their last occurrence, which keeps merging idempotent.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::config::{MergeConfig, ValueKind};
use crate::parse::{self, ParsedClass};
use crate::value::ClassValue;

type GroupIdx = usize;

#[derive(Debug)]
struct CompiledGroup {
    name: String,
    values: FxHashSet<String>,
    kinds: Vec<ValueKind>,
    conflicts: Vec<GroupIdx>,
}

/// Identity of the property a token sets
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassGroupId<'a> {
    /// A group from the table
    Group(&'a str),
    /// An arbitrary property class, keyed by the property name
    ArbitraryProperty(&'a str),
}

/// Internal lookup result; keeps the group index so conflicts need no search
#[derive(Clone, Copy)]
enum Resolved<'a> {
    Group(GroupIdx),
    Property(&'a str),
}

/// Merges class strings using a class group table
#[derive(Debug)]
pub struct Merger {
    config: MergeConfig,
    groups: Vec<CompiledGroup>,
    exact: FxHashMap<String, GroupIdx>,
    by_prefix: FxHashMap<String, Vec<GroupIdx>>,
}

impl Default for Merger {
    fn default() -> Self {
        Self::new(MergeConfig::default())
    }
}

impl Merger {
    /// Compile a merger from a configuration
    ///
    /// The configuration is expected to be valid (see
    /// [`MergeConfig::validate`]); conflicts naming unknown groups are skipped.
    pub fn new(config: MergeConfig) -> Self {
        let index: FxHashMap<&str, GroupIdx> = config
            .groups
            .iter()
            .enumerate()
            .map(|(idx, group)| (group.name.as_str(), idx))
            .collect();

        let mut exact = FxHashMap::default();
        let mut by_prefix: FxHashMap<String, Vec<GroupIdx>> = FxHashMap::default();
        let mut groups = Vec::with_capacity(config.groups.len());

        for (idx, group) in config.groups.iter().enumerate() {
            for class in &group.classes {
                exact.entry(class.clone()).or_insert(idx);
            }
            for prefix in &group.prefixes {
                by_prefix.entry(prefix.clone()).or_default().push(idx);
            }
            groups.push(CompiledGroup {
                name: group.name.clone(),
                values: group.values.iter().cloned().collect(),
                kinds: group.kinds.clone(),
                conflicts: group
                    .conflicts
                    .iter()
                    .filter_map(|name| index.get(name.as_str()).copied())
                    .collect(),
            });
        }

        Self {
            config,
            groups,
            exact,
            by_prefix,
        }
    }

    /// The configuration this merger was built from
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Find the class group of a single token
    ///
    /// Returns `None` for tokens that are not utility classes in the table.
    pub fn class_group<'a>(&'a self, token: &'a str) -> Option<ClassGroupId<'a>> {
        let parsed = ParsedClass::parse(token, self.config.separator);
        Some(match self.resolve(&parsed)? {
            Resolved::Group(idx) => ClassGroupId::Group(self.groups[idx].name.as_str()),
            Resolved::Property(property) => ClassGroupId::ArbitraryProperty(property),
        })
    }

    fn resolve<'a>(&self, parsed: &ParsedClass<'a>) -> Option<Resolved<'a>> {
        let base = match &self.config.prefix {
            Some(prefix) => parsed.base.strip_prefix(prefix.as_str())?,
            None => parsed.base,
        };

        if let Some(property) = parse::arbitrary_property(base) {
            return Some(Resolved::Property(property));
        }

        self.lookup(base).map(Resolved::Group)
    }

    fn lookup(&self, base: &str) -> Option<GroupIdx> {
        if let Some(&idx) = self.exact.get(base) {
            return Some(idx);
        }

        if let Some(idx) = self.match_prefix(base, "") {
            return Some(idx);
        }

        // Longest prefix first; dashes inside an arbitrary value never split.
        let search_end = base.find('[').unwrap_or(base.len());
        for (dash, _) in base[..search_end].rmatch_indices('-') {
            if dash == 0 {
                continue;
            }
            let (prefix, value) = (&base[..dash], &base[dash + 1..]);
            if let Some(idx) = self.match_prefix(prefix, value) {
                return Some(idx);
            }
        }

        None
    }

    fn match_prefix(&self, prefix: &str, value: &str) -> Option<GroupIdx> {
        let candidates = self.by_prefix.get(prefix)?;

        if let Some(&idx) = candidates
            .iter()
            .find(|&&idx| self.groups[idx].values.contains(value))
        {
            return Some(idx);
        }

        candidates
            .iter()
            .copied()
            .find(|&idx| self.groups[idx].kinds.iter().any(|kind| kind.matches(value)))
    }

    /// Merge a whitespace-separated class string
    pub fn merge(&self, classes: &str) -> String {
        let tokens: Vec<&str> = classes.split_whitespace().collect();
        self.merge_tokens(&tokens)
    }

    /// Flatten conditional inputs and merge the result
    pub fn merge_values<'v, I, V>(&self, values: I) -> String
    where
        I: IntoIterator<Item = V>,
        V: Into<ClassValue<'v>>,
    {
        let value: ClassValue<'v> = values.into_iter().collect();
        self.merge_tokens(&value.tokens())
    }

    /// Merge an ordered token list
    pub fn merge_tokens(&self, tokens: &[&str]) -> String {
        let mut claimed: FxHashSet<String> = FxHashSet::default();
        let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

        for &token in tokens.iter().rev() {
            let parsed = ParsedClass::parse(token, self.config.separator);

            let Some(resolved) = self.resolve(&parsed) else {
                // Unknown classes only collapse with identical tokens.
                if claimed.insert(format!("={token}")) {
                    kept.push(token);
                }
                continue;
            };

            let mut variant = parsed.modifier_key();
            if parsed.important {
                variant.push('!');
            }

            let key = match resolved {
                Resolved::Group(idx) => format!("{variant}|{}", self.groups[idx].name),
                Resolved::Property(property) => format!("{variant}|[{property}]"),
            };
            if claimed.contains(&key) {
                trace!(token, key = %key, "class overridden by a later class");
                continue;
            }

            if let Resolved::Group(idx) = resolved {
                for &conflict in &self.groups[idx].conflicts {
                    claimed.insert(format!("{variant}|{}", self.groups[conflict].name));
                }
            }

            claimed.insert(key);
            kept.push(token);
        }

        kept.reverse();
        kept.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassGroup;

    fn merge(classes: &str) -> String {
        Merger::default().merge(classes)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(merge(""), "");
        assert_eq!(merge("   "), "");
    }

    #[test]
    fn test_later_class_wins() {
        assert_eq!(merge("px-2 py-1 px-4"), "py-1 px-4");
        assert_eq!(merge("bg-primary bg-secondary"), "bg-secondary");
        assert_eq!(merge("h-10 px-4 h-12 px-6"), "h-12 px-6");
    }

    #[test]
    fn test_disjoint_properties_are_kept() {
        assert_eq!(
            merge("bg-primary text-white shadow-lg shadow-primary/20"),
            "bg-primary text-white shadow-lg shadow-primary/20"
        );
    }

    #[test]
    fn test_same_prefix_different_property() {
        assert_eq!(merge("text-sm text-white text-center"), "text-sm text-white text-center");
        assert_eq!(merge("text-sm text-base"), "text-base");
        assert_eq!(merge("text-white text-gray-700"), "text-gray-700");
        assert_eq!(merge("border border-primary/20 border-2"), "border-primary/20 border-2");
        assert_eq!(merge("ring-2 ring-offset-2 ring-primary/50 ring-4"), "ring-offset-2 ring-primary/50 ring-4");
    }

    #[test]
    fn test_modifiers_scope_conflicts() {
        assert_eq!(
            merge("bg-primary hover:bg-primary/90 bg-white hover:bg-white/20"),
            "bg-white hover:bg-white/20"
        );
        assert_eq!(merge("hover:focus:p-2 focus:hover:p-4"), "focus:hover:p-4");
        assert_eq!(merge("p-2 md:p-4"), "p-2 md:p-4");
    }

    #[test]
    fn test_important_scopes_conflicts() {
        assert_eq!(merge("!p-2 p-4"), "!p-2 p-4");
        assert_eq!(merge("!p-2 !p-4"), "!p-4");
    }

    #[test]
    fn test_broader_group_replaces_narrower() {
        assert_eq!(merge("px-2 py-1 p-4"), "p-4");
        assert_eq!(merge("p-4 px-2"), "p-4 px-2");
        assert_eq!(merge("rounded-tl-lg rounded-t-md rounded-xl"), "rounded-xl");
        assert_eq!(merge("w-4 h-4 size-6"), "size-6");
        assert_eq!(merge("text-sm leading-6 text-lg"), "text-lg");
    }

    #[test]
    fn test_negative_values_share_the_group() {
        assert_eq!(merge("-mt-6 mt-2"), "mt-2");
        assert_eq!(merge("mx-2 -mx-6"), "-mx-6");
    }

    #[test]
    fn test_arbitrary_values() {
        assert_eq!(merge("w-4 w-[42px]"), "w-[42px]");
        assert_eq!(merge("bg-white bg-[#0f0f0f]"), "bg-[#0f0f0f]");
        assert_eq!(merge("text-[14px] text-[#333]"), "text-[14px] text-[#333]");
        assert_eq!(merge("h-[calc(100%-2rem)] h-full"), "h-full");
    }

    #[test]
    fn test_arbitrary_properties() {
        assert_eq!(
            merge("[mask-type:luminance] [mask-type:alpha] [color:red]"),
            "[mask-type:alpha] [color:red]"
        );
    }

    #[test]
    fn test_unknown_classes_are_preserved() {
        assert_eq!(merge("rtl card-root px-2 card-root"), "rtl px-2 card-root");
        assert_eq!(merge("foo bar"), "foo bar");
    }

    #[test]
    fn test_standalone_classes() {
        assert_eq!(merge("block flex hidden"), "hidden");
        assert_eq!(merge("relative absolute"), "absolute");
        assert_eq!(merge("flex flex-col flex-1"), "flex flex-col flex-1");
        assert_eq!(merge("shrink-0 flex-shrink"), "flex-shrink");
    }

    #[test]
    fn test_class_group_lookup() {
        let merger = Merger::default();
        assert_eq!(merger.class_group("bg-primary/90"), Some(ClassGroupId::Group("bg-color")));
        assert_eq!(merger.class_group("bg-cover"), Some(ClassGroupId::Group("bg-size")));
        assert_eq!(merger.class_group("hover:shadow-lg"), Some(ClassGroupId::Group("shadow")));
        assert_eq!(merger.class_group("shadow-primary/20"), Some(ClassGroupId::Group("shadow-color")));
        assert_eq!(merger.class_group("translate-y-0.5"), Some(ClassGroupId::Group("translate-y")));
        assert_eq!(merger.class_group("ring-offset-2"), Some(ClassGroupId::Group("ring-offset-w")));
        assert_eq!(merger.class_group("direction-rtl"), None);
    }

    #[test]
    fn test_class_prefix() {
        let merger = Merger::new(MergeConfig::default().with_prefix("tw-"));
        assert_eq!(merger.merge("tw-p-2 tw-p-4"), "tw-p-4");
        // Unprefixed classes are not utilities under this configuration.
        assert_eq!(merger.merge("p-2 p-4"), "p-2 p-4");
    }

    #[test]
    fn test_class_prefix_arbitrary_properties() {
        let merger = Merger::new(MergeConfig::default().with_prefix("tw-"));
        assert_eq!(
            merger.merge("tw-[mask-type:alpha] tw-[mask-type:luminance]"),
            "tw-[mask-type:luminance]"
        );
        assert_eq!(
            merger.class_group("tw-[mask-type:alpha]"),
            Some(ClassGroupId::ArbitraryProperty("mask-type"))
        );
        assert_eq!(
            merger.merge("[mask-type:alpha] [mask-type:luminance]"),
            "[mask-type:alpha] [mask-type:luminance]"
        );
    }

    #[test]
    fn test_custom_group() {
        let config = MergeConfig::empty()
            .with_group(ClassGroup::new("elevation").prefixes(["elevation"]).kind(ValueKind::Integer));
        let merger = Merger::new(config);
        assert_eq!(merger.merge("elevation-1 p-2 elevation-3"), "p-2 elevation-3");
    }

    #[test]
    fn test_merge_values() {
        let merger = Merger::default();
        let merged = merger.merge_values([
            ClassValue::from("px-2 py-1 bg-red-500"),
            ClassValue::when("p-3", true),
            ClassValue::when("bg-blue-500", false),
            ClassValue::from(None::<&str>),
        ]);
        assert_eq!(merged, "bg-red-500 p-3");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let once = merge("px-2 bg-primary hover:bg-primary/90 foo px-4 shadow-lg");
        let twice = merge(&format!("{once} {once}"));
        assert_eq!(once, twice);
    }
}
