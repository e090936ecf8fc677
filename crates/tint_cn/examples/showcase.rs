//! Component Showcase
//!
//! Renders every Button and Card variant to a standalone HTML page on
//! stdout, then simulates a few interactions against the mounted tree.
//!
//! Features demonstrated:
//! - Button variants, sizes, full width, loading and disabled states
//! - Card variants with images, icons and action controls
//! - NodeRef binding, focus and click dispatch
//!
//! Run with: cargo run -p tint_cn --example showcase > showcase.html
//! Set `RUST_LOG=tint=debug` to see variant fallbacks and merge decisions.

use std::cell::Cell;
use std::rc::Rc;

use tint_cn::prelude::*;
use tint_markup::div;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let clicks = Rc::new(Cell::new(0));
    let primary = NodeRef::new();

    let mut buttons = div().class("flex flex-wrap items-center gap-4 p-6");
    for &variant in ButtonVariant::ALL {
        for &size in ButtonSize::ALL {
            buttons = buttons.child(
                cn::button(format!("{} {}", variant.as_str(), size.as_str()))
                    .variant(variant)
                    .size(size),
            );
        }
    }

    let count = Rc::clone(&clicks);
    buttons = buttons
        .child(
            cn::button("Continue")
                .node_ref(&primary)
                .right_icon(icons::ARROW_RIGHT)
                .on_click(move |_| count.set(count.get() + 1)),
        )
        .child(cn::button("Saving").left_icon(icons::CHECK).loading(true))
        .child(cn::button("Unavailable").disabled(true))
        .child(cn::button("Full width").full_width(true).variant(ButtonVariant::Glass));

    let cards = div()
        .class("grid grid-cols-3 gap-6 p-6")
        .child(
            cn::card("Default")
                .description("White surface with a soft drop shadow.")
                .icon(icons::SPARKLES)
                .action("Learn more", |_| tracing::info!("learn more")),
        )
        .child(
            cn::card("Neumorphic")
                .description("Extruded from the page.")
                .icon(icons::PACKAGE)
                .variant(CardVariant::Neumorphic)
                .action_label("Coming soon"),
        )
        .child(
            cn::card("Glassmorphism")
                .description("Frosted glass over the backdrop.")
                .image("https://images.example.com/aurora.jpg")
                .icon(icons::ZAP)
                .variant(CardVariant::Glassmorphism)
                .width("20rem"),
        );

    let page = div().class("min-h-screen bg-gray-50").child(buttons).child(cards);
    let mut tree = RenderTree::mount(page);

    if tree.focus(&primary) {
        tracing::info!(focused = ?tree.focused(), "focused primary button");
    }
    if let Some(id) = primary.get() {
        tree.click(id);
    }
    for id in tree.find_by_tag("button") {
        if tree.element(id).is_some_and(Element::is_disabled) {
            tracing::info!(handled = tree.click(id), "clicked disabled button");
        }
    }
    tracing::info!(clicks = clicks.get(), "interaction summary");

    println!("<!doctype html>");
    println!("<html><head><meta charset=\"utf-8\"><title>Tint showcase</title></head>");
    println!("<body>{}</body></html>", tree.to_html());
}
