//! Button component with shadcn-style variants
//!
//! Classes come from a static variant table (`button_variants()`): a base
//! fragment, one fragment per `variant`, `size` and `fullWidth` value, and
//! the caller's override class last. Everything else the caller sets
//! (attributes, handlers, a `NodeRef`) passes through to the `<button>`.
//!
//! # Example
//!
//! ```ignore
//! use tint_cn::prelude::*;
//!
//! // Primary button (default)
//! cn::button("Click me")
//!
//! // Outline button with custom size
//! cn::button("Cancel")
//!     .variant(ButtonVariant::Outline)
//!     .size(ButtonSize::Small)
//!
//! // Loading state: disabled, spinner instead of icons
//! cn::button("Saving")
//!     .left_icon(icons::CHECK)
//!     .loading(true)
//!
//! // Button with click handler and an external ref
//! let submit = NodeRef::new();
//! cn::button("Submit")
//!     .attr("type", "submit")
//!     .node_ref(&submit)
//!     .on_click(|_| println!("Submitted!"))
//! ```

use std::sync::LazyLock;

use tint_markup::{AttrValue, Element, EventContext, EventHandlers, EventType, Node, NodeRef};
use tint_variants::{AxisValue, VariantProps, VariantTable};

use super::spinner::spinner;
use crate::theme;

/// Classes shared by every button
pub const BUTTON_BASE: &str = "relative inline-flex items-center justify-center gap-2 rounded-xl text-sm font-medium transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-primary/50 focus:ring-offset-2 disabled:pointer-events-none disabled:opacity-50 rtl:direction-rtl";

static BUTTON_VARIANTS: LazyLock<VariantTable> = LazyLock::new(|| {
    VariantTable::builder(BUTTON_BASE)
        .axis(
            ButtonVariant::AXIS,
            [
                (
                    "primary",
                    "bg-primary text-white shadow-lg shadow-primary/20 hover:bg-primary/90 active:translate-y-0.5 active:shadow-sm backdrop-blur-sm",
                ),
                (
                    "secondary",
                    "bg-secondary text-white shadow-lg shadow-secondary/20 hover:bg-secondary/90 active:translate-y-0.5 active:shadow-sm backdrop-blur-sm",
                ),
                (
                    "outline",
                    "border border-primary/20 bg-white/10 text-primary shadow-sm backdrop-filter backdrop-blur-sm hover:bg-primary/5 hover:border-primary/30 active:translate-y-0.5",
                ),
                (
                    "glass",
                    "bg-white/10 border border-white/20 backdrop-filter backdrop-blur-md text-primary shadow-lg hover:bg-white/20 active:translate-y-0.5",
                ),
                (
                    "neumorphic",
                    "bg-gray-100 text-primary shadow-neumorphic hover:shadow-neumorphic-hover active:shadow-neumorphic-pressed active:translate-y-0.5",
                ),
            ],
        )
        .axis(
            ButtonSize::AXIS,
            [("sm", "h-9 px-3 text-xs"), ("md", "h-10 px-4"), ("lg", "h-12 px-6 text-base")],
        )
        .flag(FULL_WIDTH, "w-full")
        .default(ButtonVariant::AXIS, ButtonVariant::default().as_str())
        .default(ButtonSize::AXIS, ButtonSize::default().as_str())
        .default_flag(FULL_WIDTH, false)
        .build()
        .expect("button variant table is valid")
});

/// Name of the full-width axis
const FULL_WIDTH: &str = "fullWidth";

/// The button's variant table
///
/// Exposed so other elements (links styled as buttons) can reuse it.
pub fn button_variants() -> &'static VariantTable {
    &BUTTON_VARIANTS
}

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the primary color
    #[default]
    Primary,
    /// Filled with the secondary color
    Secondary,
    /// Thin primary border over a translucent background
    Outline,
    /// Frosted glass
    Glass,
    /// Soft extruded surface
    Neumorphic,
}

impl AxisValue for ButtonVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Glass,
        ButtonVariant::Neumorphic,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Glass => "glass",
            ButtonVariant::Neumorphic => "neumorphic",
        }
    }
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Default size
    #[default]
    Medium,
    /// Large button
    Large,
}

impl AxisValue for ButtonSize {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Small => "sm",
            ButtonSize::Medium => "md",
            ButtonSize::Large => "lg",
        }
    }
}

/// Create a button with a label
///
/// An empty label adds no text; use `.child()` for richer content.
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    let label = label.into();
    let children = if label.is_empty() {
        Vec::new()
    } else {
        vec![Node::text(label)]
    };
    ButtonBuilder {
        variant: ButtonVariant::default(),
        size: ButtonSize::default(),
        full_width: false,
        loading: false,
        disabled: false,
        left_icon: None,
        right_icon: None,
        children,
        class: None,
        attrs: Vec::new(),
        handlers: EventHandlers::new(),
        node_ref: None,
    }
}

/// Button configuration for building buttons
#[derive(Clone, Debug)]
pub struct ButtonBuilder {
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    loading: bool,
    disabled: bool,
    left_icon: Option<Node>,
    right_icon: Option<Node>,
    children: Vec<Node>,
    class: Option<String>,
    attrs: Vec<(String, AttrValue)>,
    handlers: EventHandlers,
    node_ref: Option<NodeRef>,
}

impl ButtonBuilder {
    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Stretch the button to the full width of its container
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Show the loading state: disabled, spinner shown, icons hidden
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Make the button disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Content before the children (hidden while loading)
    pub fn left_icon(mut self, icon: impl Into<Node>) -> Self {
        self.left_icon = Some(icon.into());
        self
    }

    /// Content after the children (hidden while loading)
    pub fn right_icon(mut self, icon: impl Into<Node>) -> Self {
        self.right_icon = Some(icon.into());
        self
    }

    /// Append child content after the label
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Classes merged after the variant classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Pass an attribute through to the `<button>`
    ///
    /// `class` is merged after the variant classes and `disabled` disables
    /// the button.
    pub fn attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.pass(name.into(), AttrValue::Text(value.into()))
    }

    /// Pass a boolean attribute through to the `<button>`
    pub fn flag(self, name: impl Into<String>, on: bool) -> Self {
        self.pass(name.into(), AttrValue::Flag(on))
    }

    fn pass(mut self, name: String, value: AttrValue) -> Self {
        match (name.as_str(), value) {
            ("class", AttrValue::Text(class)) => {
                self.class = Some(match self.class.take() {
                    Some(existing) => format!("{existing} {class}"),
                    None => class,
                });
            }
            ("disabled", AttrValue::Flag(on)) => self.disabled |= on,
            ("disabled", AttrValue::Text(_)) => self.disabled = true,
            (_, value) => self.attrs.push((name, value)),
        }
        self
    }

    /// Set the `id` attribute
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set the `type` attribute (`button`, `submit`, `reset`)
    pub fn button_type(self, button_type: impl Into<String>) -> Self {
        self.attr("type", button_type)
    }

    /// Set an `aria-*` attribute
    pub fn aria(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("aria-{name}"), value)
    }

    /// Set a `data-*` attribute
    pub fn data(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{name}"), value)
    }

    /// Register a handler for an event type
    pub fn on<F>(mut self, event_type: EventType, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.handlers.on(event_type, handler);
        self
    }

    /// Set the click handler
    pub fn on_click<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::Click, handler)
    }

    /// Set a focus handler
    pub fn on_focus<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::Focus, handler)
    }

    /// Set a blur handler
    pub fn on_blur<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::Blur, handler)
    }

    /// Set a key down handler
    pub fn on_key_down<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::KeyDown, handler)
    }

    /// Set a key up handler
    pub fn on_key_up<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(EventType::KeyUp, handler)
    }

    /// Bind a caller-owned reference to the `<button>` element
    pub fn node_ref(mut self, node_ref: &NodeRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    /// The variant selection this button resolves against the table
    pub fn props(&self) -> VariantProps {
        VariantProps::new()
            .with(self.variant)
            .with(self.size)
            .flag(FULL_WIDTH, self.full_width)
            .class_opt(self.class.clone())
    }

    /// The merged class string
    pub fn class_name(&self) -> String {
        button_variants().class_with(theme::merger(), &self.props())
    }

    /// Whether the rendered button is disabled
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Build the `<button>` element
    pub fn build(self) -> Element {
        let class = self.class_name();
        let disabled = self.is_disabled();

        let mut el = tint_markup::button()
            .class(class)
            .attrs(self.attrs)
            .flag("disabled", disabled)
            .handlers(self.handlers)
            .node_ref_opt(self.node_ref.as_ref());
        if self.loading {
            el = el.attr("aria-busy", "true").child(spinner());
        } else if let Some(icon) = self.left_icon {
            el = el.child(icon);
        }
        el = el.children(self.children);
        if !self.loading {
            el = el.child_opt(self.right_icon);
        }
        el
    }
}

impl From<ButtonBuilder> for Element {
    fn from(builder: ButtonBuilder) -> Self {
        builder.build()
    }
}

impl From<ButtonBuilder> for Node {
    fn from(builder: ButtonBuilder) -> Self {
        Node::Element(builder.build())
    }
}
