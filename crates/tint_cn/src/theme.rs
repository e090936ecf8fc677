//! Theme-aware class merging
//!
//! Components merge their fragments with a table that extends the default
//! class groups with Tint's custom shadow presets (see `theme.toml`).

use std::sync::LazyLock;

use tint_merge::{ClassValue, MergeConfig, Merger};

/// Class group additions for the Tint theme
pub const THEME_GROUPS_TOML: &str = include_str!("theme.toml");

static THEME_MERGER: LazyLock<Merger> = LazyLock::new(|| Merger::new(theme_config()));

/// The default class group table extended with the Tint theme
pub fn theme_config() -> MergeConfig {
    let mut config = MergeConfig::default();
    config
        .extend_from_toml_str(THEME_GROUPS_TOML)
        .expect("embedded theme table is valid");
    config
}

/// The merger every component uses
pub fn merger() -> &'static Merger {
    &THEME_MERGER
}

/// Flatten class inputs and merge them with the theme merger
///
/// Use the [`cn!`](crate::cn!) macro to pass inputs of different types.
pub fn merge<'v, I, V>(values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<ClassValue<'v>>,
{
    merger().merge_values(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_merge::ClassGroupId;

    #[test]
    fn test_theme_table_loads() {
        let config = theme_config();
        let shadow = config.group("shadow").unwrap();
        assert!(shadow.values.iter().any(|v| v == "neumorphic-button-active"));
        assert!(config.group("direction").is_some());
    }

    #[test]
    fn test_custom_shadows_join_shadow_group() {
        assert_eq!(
            merger().class_group("shadow-neumorphic"),
            Some(ClassGroupId::Group("shadow"))
        );
        assert_eq!(merge(["shadow-neumorphic", "shadow-none"]), "shadow-none");
        assert_eq!(merge(["shadow-lg", "shadow-glassmorphism"]), "shadow-glassmorphism");
        assert_eq!(
            merge(["shadow-neumorphic shadow-primary/20"]),
            "shadow-neumorphic shadow-primary/20"
        );
    }

    #[test]
    fn test_direction_classes() {
        assert_eq!(merge(["direction-ltr direction-rtl"]), "direction-rtl");
    }
}
