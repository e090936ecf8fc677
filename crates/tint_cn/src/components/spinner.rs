//! Spinner component for loading indicators
//!
//! A spinning `loader-circle` glyph. Decorative only: it is hidden from
//! assistive technology, so pair it with text or `aria-busy` on the owner.
//!
//! # Example
//!
//! ```ignore
//! use tint_cn::prelude::*;
//!
//! cn::spinner()
//!
//! cn::spinner()
//!     .size(SpinnerSize::Large)
//!     .class("text-primary")
//! ```

use tint_icons::icons;
use tint_markup::{Element, Node};

use crate::theme;

/// Spinner size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    /// Small spinner (16px), sized for inline use in buttons
    #[default]
    Small,
    /// Medium spinner (24px)
    Medium,
    /// Large spinner (32px)
    Large,
}

impl SpinnerSize {
    fn diameter(&self) -> u32 {
        match self {
            SpinnerSize::Small => 16,
            SpinnerSize::Medium => 24,
            SpinnerSize::Large => 32,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "h-4 w-4",
            SpinnerSize::Medium => "h-6 w-6",
            SpinnerSize::Large => "h-8 w-8",
        }
    }
}

/// Spinner builder
#[derive(Clone, Debug, Default)]
pub struct Spinner {
    size: SpinnerSize,
    class: Option<String>,
}

impl Spinner {
    /// Create a small spinner
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spinner size
    pub fn size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }

    /// Add classes after the built-in ones
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Build the `<svg>` element
    pub fn build(self) -> Element {
        let class = theme::merge([
            Some(self.size.class()),
            Some("animate-spin"),
            self.class.as_deref(),
        ]);
        icons::LOADER_CIRCLE
            .element(self.size.diameter())
            .class(class)
            .attr("aria-hidden", "true")
    }
}

impl From<Spinner> for Element {
    fn from(spinner: Spinner) -> Self {
        spinner.build()
    }
}

impl From<Spinner> for Node {
    fn from(spinner: Spinner) -> Self {
        Node::Element(spinner.build())
    }
}

/// Create a spinner
pub fn spinner() -> Spinner {
    Spinner::new()
}
