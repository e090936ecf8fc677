//! Utility class token anatomy
//!
//! A token has the shape `[modifier:]*[!][-]base[!]`:
//!
//! - modifiers (`hover:`, `md:`, `[&>*]:`) are split on the separator, but
//!   never inside square brackets or parentheses
//! - `!` before the base (or at the very end) marks the class important
//! - a leading `-` on the base is a negative value (`-mt-2`), which targets
//!   the same property as the positive form

use smallvec::SmallVec;

/// Modifiers of a single class token
pub type Modifiers<'a> = SmallVec<[&'a str; 4]>;

/// A class token split into its parts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    /// Variant modifiers in source order
    pub modifiers: Modifiers<'a>,
    /// Whether the class carries an important marker
    pub important: bool,
    /// Whether the base value is negated
    pub negative: bool,
    /// The class with modifiers and markers stripped
    pub base: &'a str,
}

impl<'a> ParsedClass<'a> {
    /// Split `token` into modifiers, markers and base class
    pub fn parse(token: &'a str, separator: char) -> Self {
        let mut modifiers = Modifiers::new();
        let mut depth: usize = 0;
        let mut start = 0;

        for (i, ch) in token.char_indices() {
            match ch {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                c if c == separator && depth == 0 => {
                    modifiers.push(&token[start..i]);
                    start = i + c.len_utf8();
                }
                _ => {}
            }
        }

        let mut base = &token[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }

        let mut negative = false;
        if let Some(rest) = base.strip_prefix('-') {
            if !rest.is_empty() {
                base = rest;
                negative = true;
            }
        }

        Self {
            modifiers,
            important,
            negative,
            base,
        }
    }

    /// Whether the base is an arbitrary property like `[mask-type:alpha]`
    pub fn arbitrary_property(&self) -> Option<&'a str> {
        arbitrary_property(self.base)
    }

    /// Canonical modifier key used for conflict detection
    ///
    /// Plain modifiers are order-insensitive (`hover:focus:` equals
    /// `focus:hover:`), so runs of them are sorted. Arbitrary variants like
    /// `[&>*]` depend on their position and stay where they are, splitting
    /// the runs that get sorted.
    pub fn modifier_key(&self) -> String {
        if self.modifiers.is_empty() {
            return String::new();
        }

        let mut ordered: Vec<&str> = Vec::with_capacity(self.modifiers.len());
        let mut run: Vec<&str> = Vec::new();
        for &modifier in &self.modifiers {
            if modifier.starts_with('[') {
                run.sort_unstable();
                ordered.append(&mut run);
                ordered.push(modifier);
            } else {
                run.push(modifier);
            }
        }
        run.sort_unstable();
        ordered.append(&mut run);

        ordered.join(":")
    }
}

/// The property of an arbitrary property class base (`[mask-type:alpha]`)
pub fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    if property.is_empty() || value.is_empty() {
        return None;
    }
    Some(property)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_class() {
        let parsed = ParsedClass::parse("px-4", ':');
        assert!(parsed.modifiers.is_empty());
        assert!(!parsed.important);
        assert!(!parsed.negative);
        assert_eq!(parsed.base, "px-4");
    }

    #[test]
    fn test_modifiers_and_markers() {
        let parsed = ParsedClass::parse("md:hover:!-mt-2", ':');
        assert_eq!(parsed.modifiers.as_slice(), &["md", "hover"]);
        assert!(parsed.important);
        assert!(parsed.negative);
        assert_eq!(parsed.base, "mt-2");
    }

    #[test]
    fn test_trailing_important() {
        let parsed = ParsedClass::parse("bg-white!", ':');
        assert!(parsed.important);
        assert_eq!(parsed.base, "bg-white");
    }

    #[test]
    fn test_separator_inside_brackets_is_not_a_modifier() {
        let parsed = ParsedClass::parse("[&:hover]:bg-[url(a:b)]", ':');
        assert_eq!(parsed.modifiers.as_slice(), &["[&:hover]"]);
        assert_eq!(parsed.base, "bg-[url(a:b)]");
    }

    #[test]
    fn test_arbitrary_property() {
        let parsed = ParsedClass::parse("hover:[mask-type:luminance]", ':');
        assert_eq!(parsed.arbitrary_property(), Some("mask-type"));
        assert_eq!(ParsedClass::parse("w-[3px]", ':').arbitrary_property(), None);
    }

    #[test]
    fn test_modifier_key_sorts_plain_runs() {
        let a = ParsedClass::parse("hover:focus:bg-red-500", ':');
        let b = ParsedClass::parse("focus:hover:bg-red-500", ':');
        assert_eq!(a.modifier_key(), b.modifier_key());
    }

    #[test]
    fn test_modifier_key_keeps_arbitrary_variant_position() {
        let a = ParsedClass::parse("hover:[&>*]:focus:p-2", ':');
        let b = ParsedClass::parse("focus:[&>*]:hover:p-2", ':');
        assert_ne!(a.modifier_key(), b.modifier_key());
    }

    #[test]
    fn test_custom_separator() {
        let parsed = ParsedClass::parse("hover_p-2", '_');
        assert_eq!(parsed.modifiers.as_slice(), &["hover"]);
        assert_eq!(parsed.base, "p-2");
    }
}
