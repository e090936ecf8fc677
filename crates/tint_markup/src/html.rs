//! HTML serialization

use crate::element::{AttrValue, Element, Node};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serialize a node and its descendants to HTML
///
/// Attribute values and text are escaped; [`Node::Raw`] markup is written
/// verbatim. Attributes come out as `class`, then the element's attributes
/// in insertion order, then `style`, then any motion preset as
/// `data-motion-*`.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

impl Node {
    /// Serialize to HTML
    pub fn to_html(&self) -> String {
        to_html(self)
    }
}

impl Element {
    /// Serialize to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(element) => write_element(element, out),
        Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
        Node::Raw(markup) => out.push_str(markup),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag());

    if !element.class_name().is_empty() {
        write_attr(out, "class", element.class_name());
    }
    for (name, value) in element.attributes() {
        match value {
            AttrValue::Text(value) => write_attr(out, name, value),
            AttrValue::Flag(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Flag(false) => {}
        }
    }
    let style = element.style_string();
    if !style.is_empty() {
        write_attr(out, "style", &style);
    }
    if let Some(motion) = element.motion() {
        for (name, value) in motion.data_attributes() {
            write_attr(out, name, &value);
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag()) {
        return;
    }
    for child in element.child_nodes() {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{button, div, img, p};
    use crate::motion::HoverMotion;

    #[test]
    fn test_attribute_order_and_flags() {
        let html = button()
            .class("px-4 h-10")
            .attr("type", "button")
            .flag("disabled", true)
            .flag("hidden", false)
            .attr("aria-busy", "true")
            .child("Save")
            .to_html();
        assert_eq!(
            html,
            r#"<button class="px-4 h-10" type="button" disabled aria-busy="true">Save</button>"#
        );
    }

    #[test]
    fn test_escaping() {
        let html = p()
            .attr("title", r#"say "hi" & <go>"#)
            .child("1 < 2 & 3 > 2")
            .to_html();
        assert_eq!(
            html,
            r#"<p title="say &quot;hi&quot; &amp; &lt;go&gt;">1 &lt; 2 &amp; 3 &gt; 2</p>"#
        );
    }

    #[test]
    fn test_void_elements_and_raw() {
        let html = div()
            .child(img("/a.png").attr("alt", "A"))
            .child(Node::raw(r#"<svg viewBox="0 0 24 24"></svg>"#))
            .to_html();
        assert_eq!(
            html,
            r#"<div><img src="/a.png" alt="A"><svg viewBox="0 0 24 24"></svg></div>"#
        );
    }

    #[test]
    fn test_style_and_motion() {
        let html = div()
            .style("width", "auto")
            .style("height", "auto")
            .hover_motion(HoverMotion::lift(5.0, 300.0))
            .to_html();
        assert_eq!(
            html,
            r#"<div style="width: auto; height: auto" data-motion="hover" data-motion-y="-5" data-motion-stiffness="300" data-motion-damping="10" data-motion-mass="1"></div>"#
        );
    }
}
