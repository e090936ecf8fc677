//! Element and node types for building render trees
//!
//! Elements are built with chained methods, in the same style as the
//! component builders that produce them:
//!
//! ```ignore
//! use tint_markup::prelude::*;
//!
//! let ui = div()
//!     .class("flex items-start gap-3")
//!     .style("width", "auto")
//!     .child(h3().class("text-xl font-bold").child("Title"))
//!     .child(p().child("Body"));
//! ```

use indexmap::IndexMap;

use crate::event::{EventContext, EventHandlers, EventType};
use crate::motion::HoverMotion;
use crate::node_ref::NodeRef;

/// A node in the render tree
#[derive(Clone, Debug)]
pub enum Node {
    /// An element with attributes and children
    Element(Element),
    /// Text content, escaped on output
    Text(String),
    /// Trusted markup emitted verbatim (inline SVG icons)
    Raw(String),
}

impl Node {
    /// A text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// A raw markup node
    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    /// The element, if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants
    ///
    /// Raw markup contributes nothing.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Text(text) => out.push_str(text),
            Node::Raw(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Attribute value: text, or a boolean attribute present only when set
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// `name="value"`
    Text(String),
    /// Bare `name`, written only when `true`
    Flag(bool),
}

impl AttrValue {
    /// The text value, if this is a text attribute
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(text) => Some(text),
            AttrValue::Flag(_) => None,
        }
    }
}

/// Tags that accept keyboard focus without a `tabindex`
const FOCUSABLE_TAGS: &[&str] = &["button", "input", "select", "textarea", "summary"];

/// An element: tag, attributes, class, inline style, children and behavior
#[derive(Clone, Debug)]
pub struct Element {
    tag: String,
    attrs: IndexMap<String, AttrValue>,
    class: String,
    style: IndexMap<String, String>,
    children: Vec<Node>,
    handlers: EventHandlers,
    node_ref: Option<NodeRef>,
    motion: Option<HoverMotion>,
}

impl Element {
    /// Create an empty element with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            class: String::new(),
            style: IndexMap::new(),
            children: Vec::new(),
            handlers: EventHandlers::new(),
            node_ref: None,
            motion: None,
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the class string
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Set a text attribute, replacing any previous value
    ///
    /// `class` replaces the class string and `style` replaces the inline
    /// style, so neither is ever written twice.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name.into(), AttrValue::Text(value.into()));
        self
    }

    /// Set a boolean attribute
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        self.set_attr(name.into(), AttrValue::Flag(on));
        self
    }

    /// Copy every attribute from an ordered list
    pub fn attrs<I, K>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, AttrValue)>,
        K: Into<String>,
    {
        for (name, value) in attrs {
            self.set_attr(name.into(), value);
        }
        self
    }

    fn set_attr(&mut self, name: String, value: AttrValue) {
        match (name.as_str(), value) {
            ("class", AttrValue::Text(class)) => self.class = class,
            ("style", AttrValue::Text(style)) => {
                self.style.clear();
                for declaration in style.split(';') {
                    if let Some((property, value)) = declaration.split_once(':') {
                        let (property, value) = (property.trim(), value.trim());
                        if !property.is_empty() {
                            self.style.insert(property.to_string(), value.to_string());
                        }
                    }
                }
            }
            ("class" | "style", AttrValue::Flag(_)) => {}
            (_, value) => {
                self.attrs.insert(name, value);
            }
        }
    }

    /// Set an inline style property
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child if one is given
    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Append several children
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Register a handler for an event type
    pub fn on<F>(mut self, event_type: EventType, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.handlers.on(event_type, handler);
        self
    }

    /// Add a set of handlers
    pub fn handlers(mut self, handlers: EventHandlers) -> Self {
        self.handlers.merge(handlers);
        self
    }

    /// Register a click handler
    pub fn on_click<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::Click, handler)
    }

    /// Register a focus handler
    pub fn on_focus<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::Focus, handler)
    }

    /// Register a blur handler
    pub fn on_blur<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::Blur, handler)
    }

    /// Register a key down handler
    pub fn on_key_down<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::KeyDown, handler)
    }

    /// Register a key up handler
    pub fn on_key_up<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::KeyUp, handler)
    }

    /// Register a hover enter handler
    pub fn on_hover_enter<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::HoverEnter, handler)
    }

    /// Register a hover leave handler
    pub fn on_hover_leave<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::HoverLeave, handler)
    }

    /// Bind a caller-owned reference to this element on mount
    pub fn node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    /// Bind a reference if one is given
    pub fn node_ref_opt(self, node_ref: Option<&NodeRef>) -> Self {
        match node_ref {
            Some(node_ref) => self.node_ref(node_ref),
            None => self,
        }
    }

    /// Attach a hover motion preset
    pub fn hover_motion(mut self, motion: HoverMotion) -> Self {
        self.motion = Some(motion);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The class string
    pub fn class_name(&self) -> &str {
        &self.class
    }

    /// Whether the class string contains a token
    pub fn has_class(&self, token: &str) -> bool {
        self.class.split_whitespace().any(|t| t == token)
    }

    /// A text attribute's value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(AttrValue::as_str)
    }

    /// Whether a boolean attribute is set
    pub fn has_flag(&self, name: &str) -> bool {
        matches!(self.attrs.get(name), Some(AttrValue::Flag(true)))
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// An inline style property
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// The inline style as a `prop: value; ...` string
    pub fn style_string(&self) -> String {
        self.style
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Child nodes
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text and raw nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Registered event handlers
    pub fn event_handlers(&self) -> &EventHandlers {
        &self.handlers
    }

    /// The bound reference, if any
    pub fn bound_ref(&self) -> Option<&NodeRef> {
        self.node_ref.as_ref()
    }

    /// The hover motion preset, if any
    pub fn motion(&self) -> Option<&HoverMotion> {
        self.motion.as_ref()
    }

    /// Whether the element carries the `disabled` flag
    pub fn is_disabled(&self) -> bool {
        self.has_flag("disabled")
    }

    /// Whether the element can receive keyboard focus
    pub fn is_focusable(&self) -> bool {
        if self.is_disabled() {
            return false;
        }
        if let Some(index) = self.get_attr("tabindex") {
            return index.trim().parse::<i32>().is_ok();
        }
        FOCUSABLE_TAGS.contains(&self.tag.as_str())
            || (self.tag == "a" && self.get_attr("href").is_some())
    }

    /// Concatenated text of the element's descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Descendant elements (including this one) with the given tag, in document order
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |element| {
            if element.tag == tag {
                found.push(element);
            }
        });
        found
    }

    /// First descendant element (including this one) with the given tag
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.find_all(tag).into_iter().next()
    }

    /// Visit this element and its descendant elements in document order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in self.child_elements() {
            child.walk(visit);
        }
    }
}

/// Create a `<div>`
pub fn div() -> Element {
    Element::new("div")
}

/// Create a `<span>`
pub fn span() -> Element {
    Element::new("span")
}

/// Create a `<button>`
pub fn button() -> Element {
    Element::new("button")
}

/// Create an `<img>`
pub fn img(src: impl Into<String>) -> Element {
    Element::new("img").attr("src", src)
}

/// Create an `<h3>`
pub fn h3() -> Element {
    Element::new("h3")
}

/// Create a `<p>`
pub fn p() -> Element {
    Element::new("p")
}

/// Create a text node
pub fn text(content: impl Into<String>) -> Node {
    Node::text(content)
}
