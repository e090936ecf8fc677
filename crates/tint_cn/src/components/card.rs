//! Card component
//!
//! A content card with an optional cover image, leading icon, title,
//! description and action control. The variant picks the container, icon
//! badge and action classes from three independent tables.
//!
//! # Example
//!
//! ```ignore
//! use tint_cn::prelude::*;
//!
//! cn::card("Fast checkout")
//!     .description("Pay in one tap.")
//!     .icon(icons::SHOPPING_CART)
//!     .image("/img/checkout.png")
//!     .action("Try it", |_| println!("clicked"))
//!     .variant(CardVariant::Glassmorphism)
//!     .width("20rem")
//! ```

use std::fmt;
use std::rc::Rc;
use std::sync::LazyLock;

use tint_icons::Icon;
use tint_markup::{div, h3, img, p, Element, EventCallback, EventContext, HoverMotion, Node};
use tint_variants::{AxisValue, VariantProps, VariantTable};
use tracing::debug;

use crate::theme;

/// Pixels the card rises while hovered
const HOVER_LIFT: f32 = 5.0;
/// Stiffness of the hover spring
const HOVER_STIFFNESS: f32 = 300.0;
/// Icon size inside the badge
const ICON_SIZE: u32 = 24;

const IMAGE_WRAPPER_CLASS: &str = "mb-4 overflow-hidden rounded-lg -mx-6 -mt-6";
const IMAGE_CLASS: &str = "w-full h-48 object-cover";
const ROW_CLASS: &str = "flex items-start gap-3";
const BODY_CLASS: &str = "flex-1";
const TITLE_CLASS: &str = "text-xl font-bold mb-2";
const DESCRIPTION_CLASS: &str = "text-gray-700 mb-4";

static CARD_CONTAINER: LazyLock<VariantTable> = LazyLock::new(|| {
    VariantTable::builder("rtl overflow-hidden rounded-xl transition-all duration-300 p-6 flex flex-col")
        .axis(
            CardVariant::AXIS,
            [
                ("default", "bg-white shadow-md hover:shadow-lg"),
                ("neumorphic", "bg-gray-100 shadow-neumorphic hover:shadow-neumorphic-hover"),
                (
                    "glassmorphism",
                    "bg-white/20 backdrop-blur-md border border-white/30 shadow-glassmorphism",
                ),
            ],
        )
        .default(CardVariant::AXIS, CardVariant::default().as_str())
        .build()
        .expect("card container table is valid")
});

static CARD_ICON_BADGE: LazyLock<VariantTable> = LazyLock::new(|| {
    VariantTable::builder("flex-shrink-0 p-2 rounded-full")
        .axis(
            CardVariant::AXIS,
            [
                ("default", "bg-primary/10 text-primary"),
                ("neumorphic", "bg-primary/10 text-primary"),
                ("glassmorphism", "bg-white/30 text-primary backdrop-blur-sm"),
            ],
        )
        .default(CardVariant::AXIS, CardVariant::default().as_str())
        .build()
        .expect("card icon badge table is valid")
});

static CARD_ACTION: LazyLock<VariantTable> = LazyLock::new(|| {
    VariantTable::builder(
        "mt-auto py-2 px-4 rounded-lg font-medium transition-all duration-300 text-white text-center",
    )
    .axis(
        CardVariant::AXIS,
        [
            ("default", "bg-primary hover:bg-primary/90"),
            (
                "neumorphic",
                "bg-primary shadow-neumorphic-button hover:shadow-neumorphic-button-hover active:shadow-neumorphic-button-active",
            ),
            (
                "glassmorphism",
                "bg-primary/80 backdrop-blur-sm border border-white/30 hover:bg-primary/90",
            ),
        ],
    )
    .default(CardVariant::AXIS, CardVariant::default().as_str())
    .build()
    .expect("card action table is valid")
});

/// The container, icon badge and action tables
pub fn card_variants() -> [&'static VariantTable; 3] {
    [&CARD_CONTAINER, &CARD_ICON_BADGE, &CARD_ACTION]
}

/// Card visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    /// White surface with a drop shadow
    #[default]
    Default,
    /// Soft extruded surface
    Neumorphic,
    /// Frosted glass
    Glassmorphism,
}

impl AxisValue for CardVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[
        CardVariant::Default,
        CardVariant::Neumorphic,
        CardVariant::Glassmorphism,
    ];

    fn as_str(self) -> &'static str {
        match self {
            CardVariant::Default => "default",
            CardVariant::Neumorphic => "neumorphic",
            CardVariant::Glassmorphism => "glassmorphism",
        }
    }
}

/// Create a card with a title
pub fn card(title: impl Into<String>) -> CardBuilder {
    CardBuilder {
        title: title.into(),
        description: None,
        image_url: None,
        image_alt: None,
        icon: None,
        action_label: None,
        on_action: None,
        variant: CardVariant::default(),
        class: None,
        width: "auto".to_string(),
        height: "auto".to_string(),
    }
}

/// Card configuration
#[derive(Clone)]
pub struct CardBuilder {
    title: String,
    description: Option<String>,
    image_url: Option<String>,
    image_alt: Option<String>,
    icon: Option<Rc<dyn Icon>>,
    action_label: Option<String>,
    on_action: Option<EventCallback>,
    variant: CardVariant,
    class: Option<String>,
    width: String,
    height: String,
}

impl CardBuilder {
    /// Body text under the title
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Cover image shown above the content
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Alt text for the cover image (defaults to the title)
    pub fn image_alt(mut self, alt: impl Into<String>) -> Self {
        self.image_alt = Some(alt.into());
        self
    }

    /// Leading icon shown in a round badge next to the title
    pub fn icon(mut self, icon: impl Icon + 'static) -> Self {
        self.icon = Some(Rc::new(icon));
        self
    }

    /// Action control with a label and click callback
    pub fn action<F>(self, label: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.action_label(label).on_action(callback)
    }

    /// Label of the action control
    ///
    /// Without a callback the control still renders but does nothing.
    pub fn action_label(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    /// Callback of the action control
    ///
    /// Without a label no control is rendered.
    pub fn on_action<F>(mut self, callback: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on_action = Some(Rc::new(callback));
        self
    }

    /// Set the card variant
    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Classes merged after the container classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// CSS width (default `auto`)
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    /// CSS height (default `auto`)
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    /// Build the card element tree
    pub fn build(self) -> Element {
        let merger = theme::merger();
        let props = VariantProps::new().with(self.variant);
        let container_props = props.clone().class_opt(self.class);

        let mut root = div()
            .class(CARD_CONTAINER.class_with(merger, &container_props))
            .style("width", self.width)
            .style("height", self.height)
            .hover_motion(HoverMotion::lift(HOVER_LIFT, HOVER_STIFFNESS));

        if let Some(url) = self.image_url {
            let alt = self.image_alt.unwrap_or_else(|| self.title.clone());
            root = root.child(
                div()
                    .class(IMAGE_WRAPPER_CLASS)
                    .child(img(url).attr("alt", alt).class(IMAGE_CLASS)),
            );
        }

        let badge = self.icon.map(|icon| {
            div()
                .class(CARD_ICON_BADGE.class_with(merger, &props))
                .child(icon.render(ICON_SIZE))
        });
        let description = self
            .description
            .map(|text| p().class(DESCRIPTION_CLASS).child(text));
        root = root.child(
            div().class(ROW_CLASS).child_opt(badge).child(
                div()
                    .class(BODY_CLASS)
                    .child(h3().class(TITLE_CLASS).child(self.title))
                    .child_opt(description),
            ),
        );

        match (self.action_label, self.on_action) {
            (Some(label), callback) => {
                let mut action = tint_markup::button()
                    .class(CARD_ACTION.class_with(merger, &props))
                    .child(label);
                if let Some(callback) = callback {
                    action = action.on_click(move |ctx| callback(ctx));
                }
                root = root.child(action);
            }
            (None, Some(_)) => debug!("card action callback without a label, no control rendered"),
            (None, None) => {}
        }

        root
    }
}

impl fmt::Debug for CardBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardBuilder")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("image_url", &self.image_url)
            .field("image_alt", &self.image_alt)
            .field("icon", &self.icon.is_some())
            .field("action_label", &self.action_label)
            .field("on_action", &self.on_action.is_some())
            .field("variant", &self.variant)
            .field("class", &self.class)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl From<CardBuilder> for Element {
    fn from(builder: CardBuilder) -> Self {
        builder.build()
    }
}

impl From<CardBuilder> for Node {
    fn from(builder: CardBuilder) -> Self {
        Node::Element(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tint_icons::icons;
    use tint_markup::{span, RenderTree};

    #[test]
    fn test_minimal_card() {
        let el = card("Hello").build();

        assert_eq!(
            el.class_name(),
            "rtl overflow-hidden rounded-xl transition-all duration-300 p-6 flex flex-col bg-white shadow-md hover:shadow-lg"
        );
        assert_eq!(el.style_string(), "width: auto; height: auto");
        assert!(el.find("img").is_none());
        assert!(el.find("p").is_none());
        assert!(el.find("button").is_none());
        assert_eq!(el.find("h3").map(Element::text_content), Some("Hello".into()));

        let row = el.child_elements().next().unwrap();
        assert_eq!(row.class_name(), ROW_CLASS);
        assert_eq!(row.child_elements().count(), 1);
    }

    #[test]
    fn test_hover_motion() {
        let el = card("Hello").build();
        let motion = el.motion().unwrap();
        assert_eq!(motion.y, -5.0);
        assert_eq!(motion.spring.stiffness, 300.0);
    }

    #[test]
    fn test_full_card() {
        let el = card("Checkout")
            .description("Pay in one tap.")
            .image("/img/checkout.png")
            .icon(icons::SHOPPING_CART)
            .action("Try it", |_| {})
            .width("20rem")
            .height("30rem")
            .build();

        let regions: Vec<&str> = el.child_elements().map(Element::class_name).collect();
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0], IMAGE_WRAPPER_CLASS);
        assert_eq!(regions[1], ROW_CLASS);

        let image = el.find("img").unwrap();
        assert_eq!(image.get_attr("src"), Some("/img/checkout.png"));
        assert_eq!(image.get_attr("alt"), Some("Checkout"));
        assert_eq!(image.class_name(), IMAGE_CLASS);

        let badge = el.find_all("div")[3].clone();
        assert_eq!(badge.class_name(), "flex-shrink-0 p-2 rounded-full bg-primary/10 text-primary");
        assert_eq!(badge.find("svg").and_then(|svg| svg.get_attr("width")), Some("24"));

        assert_eq!(
            el.find("p").map(|p| (p.class_name().to_string(), p.text_content())),
            Some((DESCRIPTION_CLASS.to_string(), "Pay in one tap.".to_string()))
        );
        assert_eq!(el.style_value("width"), Some("20rem"));
        assert_eq!(el.style_value("height"), Some("30rem"));

        let action = el.find("button").unwrap();
        assert_eq!(action.text_content(), "Try it");
        assert_eq!(
            action.class_name(),
            "mt-auto py-2 px-4 rounded-lg font-medium transition-all duration-300 text-white text-center bg-primary hover:bg-primary/90"
        );
    }

    #[test]
    fn test_custom_alt_text() {
        let el = card("Checkout").image("/a.png").image_alt("A cart").build();
        assert_eq!(el.find("img").and_then(|i| i.get_attr("alt")), Some("A cart"));
    }

    #[test]
    fn test_variants_pick_independent_fragments() {
        let el = card("Glass")
            .icon(icons::STAR)
            .action_label("Open")
            .variant(CardVariant::Glassmorphism)
            .build();

        assert!(el.has_class("shadow-glassmorphism"));
        assert!(el.has_class("bg-white/20"));
        assert!(!el.has_class("bg-white"));

        let badge = el
            .find_all("div")
            .into_iter()
            .find(|d| d.has_class("rounded-full"))
            .unwrap();
        assert!(badge.has_class("bg-white/30"));
        assert!(badge.has_class("backdrop-blur-sm"));

        let action = el.find("button").unwrap();
        assert!(action.has_class("bg-primary/80"));
        assert!(action.has_class("border-white/30"));

        let neu = card("Soft").action_label("Go").variant(CardVariant::Neumorphic).build();
        assert!(neu.has_class("shadow-neumorphic"));
        assert!(neu
            .find("button")
            .unwrap()
            .has_class("active:shadow-neumorphic-button-active"));
    }

    #[test]
    fn test_override_class_is_merged_last() {
        let el = card("Hello").class("p-2 shadow-none bg-gray-50").build();
        assert!(el.class_name().ends_with("p-2 shadow-none bg-gray-50"));
        assert!(!el.has_class("p-6"));
        assert!(!el.has_class("shadow-md"));
        assert!(!el.has_class("bg-white"));
        assert!(el.has_class("hover:shadow-lg"));

        let neu = card("Soft").variant(CardVariant::Neumorphic).class("shadow-lg").build();
        assert!(!neu.has_class("shadow-neumorphic"));
        assert!(neu.has_class("shadow-lg"));
    }

    #[test]
    fn test_action_label_without_callback_renders_inert_control() {
        let el = card("Hello").action_label("Later").build();
        let tree = RenderTree::mount(el);
        let id = tree.find_by_tag("button")[0];
        assert_eq!(tree.click(id), 0);
        assert_eq!(
            tree.element(id).map(Element::text_content),
            Some("Later".to_string())
        );
    }

    #[test]
    fn test_callback_without_label_renders_nothing() {
        let el = card("Hello").on_action(|_| {}).build();
        assert!(el.find("button").is_none());
    }

    #[test]
    fn test_action_callback_runs_on_click() {
        let clicks = Rc::new(Cell::new(0));
        let count = Rc::clone(&clicks);
        let tree = RenderTree::mount(
            card("Hello").action("Go", move |_| count.set(count.get() + 1)),
        );
        let id = tree.find_by_tag("button")[0];
        assert_eq!(tree.click(id), 1);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_closure_icon() {
        let el = card("Custom")
            .icon(|size: u32| Node::from(span().class("emoji").attr("data-size", size.to_string())))
            .build();
        let icon = el.find("span").unwrap();
        assert_eq!(icon.get_attr("data-size"), Some("24"));
    }

    #[test]
    fn test_html_output() {
        let html = card("A & B").description("<none>").build().to_html();
        assert!(html.starts_with(r#"<div class="rtl overflow-hidden"#));
        assert!(html.contains(r#"style="width: auto; height: auto""#));
        assert!(html.contains(r#"data-motion-y="-5""#));
        assert!(html.contains("<h3 class=\"text-xl font-bold mb-2\">A &amp; B</h3>"));
        assert!(html.contains("&lt;none&gt;"));
    }
}
