//! Lucide icon data
//!
//! Each icon holds the inner SVG elements of a 24x24 Lucide glyph. The set
//! covers the glyphs Tint components and their callers use; add more by
//! copying the element data from the Lucide sources.

use crate::LucideIcon;

/// arrow left
pub const ARROW_LEFT: LucideIcon = LucideIcon::new("arrow-left", r#"<path d="m12 19-7-7 7-7"/><path d="M19 12H5"/>"#);

/// arrow right
pub const ARROW_RIGHT: LucideIcon = LucideIcon::new("arrow-right", r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#);

/// bell
pub const BELL: LucideIcon = LucideIcon::new("bell", r#"<path d="M10.268 21a2 2 0 0 0 3.464 0"/><path d="M3.262 15.326A1 1 0 0 0 4 17h16a1 1 0 0 0 .74-1.673C19.41 13.956 18 12.499 18 8A6 6 0 0 0 6 8c0 4.499-1.411 5.956-2.738 7.326"/>"#);

/// check
pub const CHECK: LucideIcon = LucideIcon::new("check", r#"<path d="M20 6 9 17l-5-5"/>"#);

/// circle check
pub const CIRCLE_CHECK: LucideIcon = LucideIcon::new("circle-check", r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#);

/// heart
pub const HEART: LucideIcon = LucideIcon::new("heart", r#"<path d="M2 9.5a5.5 5.5 0 0 1 9.591-3.676.56.56 0 0 0 .818 0A5.49 5.49 0 0 1 22 9.5c0 2.29-1.5 4-3 5.5l-5.492 5.313a2 2 0 0 1-3 .019L5 15c-1.5-1.5-3-3.2-3-5.5"/>"#);

/// info
pub const INFO: LucideIcon = LucideIcon::new("info", r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#);

/// loader circle
pub const LOADER_CIRCLE: LucideIcon = LucideIcon::new("loader-circle", r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#);

/// package
pub const PACKAGE: LucideIcon = LucideIcon::new("package", r#"<path d="M11 21.73a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73z"/><path d="M12 22V12"/><polyline points="3.29 7 12 12 20.71 7"/><path d="m7.5 4.27 9 5.15"/>"#);

/// plus
pub const PLUS: LucideIcon = LucideIcon::new("plus", r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#);

/// shopping cart
pub const SHOPPING_CART: LucideIcon = LucideIcon::new("shopping-cart", r#"<circle cx="8" cy="21" r="1"/><circle cx="19" cy="21" r="1"/><path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"/>"#);

/// sparkles
pub const SPARKLES: LucideIcon = LucideIcon::new("sparkles", r#"<path d="M11.017 2.814a1 1 0 0 1 1.966 0l1.051 5.558a2 2 0 0 0 1.594 1.594l5.558 1.051a1 1 0 0 1 0 1.966l-5.558 1.051a2 2 0 0 0-1.594 1.594l-1.051 5.558a1 1 0 0 1-1.966 0l-1.051-5.558a2 2 0 0 0-1.594-1.594l-5.558-1.051a1 1 0 0 1 0-1.966l5.558-1.051a2 2 0 0 0 1.594-1.594z"/><path d="M20 2v4"/><path d="M22 4h-4"/><circle cx="4" cy="20" r="2"/>"#);

/// star
pub const STAR: LucideIcon = LucideIcon::new("star", r#"<path d="M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.123 2.123 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.123 2.123 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.122 2.122 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.122 2.122 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.122 2.122 0 0 0 1.597-1.16z"/>"#);

/// x
pub const X: LucideIcon = LucideIcon::new("x", r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#);

/// zap
pub const ZAP: LucideIcon = LucideIcon::new("zap", r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#);

/// Every bundled icon, sorted by name
pub const ALL: &[LucideIcon] = &[
    ARROW_LEFT,
    ARROW_RIGHT,
    BELL,
    CHECK,
    CIRCLE_CHECK,
    HEART,
    INFO,
    LOADER_CIRCLE,
    PACKAGE,
    PLUS,
    SHOPPING_CART,
    SPARKLES,
    STAR,
    X,
    ZAP,
];
