//! # Tint Icons
//!
//! Small inline graphics for Tint components.
//!
//! Components accept any [`Icon`]: a bundled [`LucideIcon`] or a closure
//! that renders a node at a requested size.
//!
//! ```rust
//! use tint_icons::{icons, Icon};
//!
//! let svg = icons::STAR.render(24).to_html();
//! assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24""#));
//! ```

pub mod icons;

use tint_markup::{Element, Node};

/// Default stroke width for Lucide glyphs
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Anything that can draw itself as a small inline graphic
pub trait Icon {
    /// Render the icon at `size` pixels square
    fn render(&self, size: u32) -> Node;
}

impl<F> Icon for F
where
    F: Fn(u32) -> Node,
{
    fn render(&self, size: u32) -> Node {
        self(size)
    }
}

/// A Lucide glyph: its name plus the inner SVG elements
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LucideIcon {
    name: &'static str,
    body: &'static str,
}

impl LucideIcon {
    /// Create an icon from its name and inner SVG elements
    pub const fn new(name: &'static str, body: &'static str) -> Self {
        Self { name, body }
    }

    /// The Lucide name (kebab-case)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The inner SVG elements
    pub fn body(&self) -> &'static str {
        self.body
    }

    /// Look up a bundled icon by Lucide name
    pub fn by_name(name: &str) -> Option<LucideIcon> {
        icons::ALL
            .binary_search_by(|icon| icon.name.cmp(name))
            .ok()
            .map(|index| icons::ALL[index])
    }

    /// The `<svg>` element at `size` pixels with the default stroke width
    pub fn element(&self, size: u32) -> Element {
        svg_element(self.body, size, DEFAULT_STROKE_WIDTH)
    }
}

impl Icon for LucideIcon {
    fn render(&self, size: u32) -> Node {
        self.element(size).into()
    }
}

impl From<LucideIcon> for Node {
    fn from(icon: LucideIcon) -> Self {
        icon.render(24)
    }
}

/// Wrap Lucide inner elements in an `<svg>` element
pub fn svg_element(body: &str, size: u32, stroke_width: f32) -> Element {
    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", size.to_string())
        .attr("height", size.to_string())
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", stroke_width.to_string())
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .child(Node::raw(body))
}

/// Wrap Lucide inner elements in a complete SVG document string
pub fn to_svg(body: &str, size: u32) -> String {
    svg_element(body, size, DEFAULT_STROKE_WIDTH).to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_markup::span;

    #[test]
    fn test_to_svg() {
        assert_eq!(
            to_svg(icons::CHECK.body(), 16),
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M20 6 9 17l-5-5"/></svg>"#
        );
    }

    #[test]
    fn test_by_name() {
        assert_eq!(LucideIcon::by_name("loader-circle"), Some(icons::LOADER_CIRCLE));
        assert_eq!(LucideIcon::by_name("x"), Some(icons::X));
        assert_eq!(LucideIcon::by_name("unicorn"), None);
    }

    #[test]
    fn test_bundled_icons_are_sorted() {
        assert!(icons::ALL.windows(2).all(|w| w[0].name() < w[1].name()));
    }

    #[test]
    fn test_closure_icons() {
        let sized = |size: u32| Node::from(span().attr("data-size", size.to_string()));
        let html = sized.render(24).to_html();
        assert_eq!(html, r#"<span data-size="24"></span>"#);

        let fixed = Node::text("*");
        let prebuilt = move |_: u32| fixed.clone();
        assert_eq!(prebuilt.render(48).to_html(), "*");
    }

    #[test]
    fn test_element_size() {
        let el = icons::HEART.element(32);
        assert_eq!(el.get_attr("width"), Some("32"));
        assert_eq!(el.get_attr("height"), Some("32"));
    }
}
