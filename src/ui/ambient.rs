//! Decorative effects: hero parallax, spots pulse, gallery press feedback and
//! the console banner

use leptos::ev::scroll;
use leptos::prelude::{set_interval, set_timeout, window_event_listener};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use crate::core::effects::{
    CONSOLE_BANNER, PRESS_DURATION, PRESS_TRANSFORM, PULSE_DURATION, PULSE_INTERVAL,
    PULSE_REST_TRANSFORM, PULSE_TRANSFORM, PULSE_TRANSITION, has_background_image,
    parallax_offset, parallax_transform,
};
use crate::ui::dom;

/// Move the hero background at half the scroll speed within the first viewport
pub fn install_parallax(window: Window, hero_bg: HtmlElement) {
    let handle = window_event_listener(scroll, move |_| {
        let offset = parallax_offset(dom::scroll_y(&window), dom::viewport_height(&window));
        if let Some(offset) = offset {
            let _ = hero_bg
                .style()
                .set_property("transform", &parallax_transform(offset));
        }
    });
    std::mem::forget(handle);
}

/// Pulse the spots label every 30 seconds
pub fn install_pulse(spots: HtmlElement) {
    set_interval(
        move || {
            let style = spots.style();
            let _ = style.set_property("transform", PULSE_TRANSFORM);
            let _ = style.set_property("transition", PULSE_TRANSITION);

            let spots = spots.clone();
            set_timeout(
                move || {
                    let _ = spots.style().set_property("transform", PULSE_REST_TRANSFORM);
                },
                PULSE_DURATION,
            );
        },
        PULSE_INTERVAL,
    );
}

/// Give gallery items a short press effect when they show an image
pub fn install_gallery(document: &Document, selector: &str) -> usize {
    let items = dom::query_all(document, selector);
    for item in &items {
        dom::set_style(item, "cursor", "pointer");

        let target = item.clone();
        dom::listen(item, "click", move |_| {
            if !has_background_image(&dom::style(&target, "background-image")) {
                return;
            }
            dom::set_style(&target, "transform", PRESS_TRANSFORM);
            let target = target.clone();
            set_timeout(
                move || dom::set_style(&target, "transform", ""),
                PRESS_DURATION,
            );
        });
    }
    items.len()
}

/// Print the styled console banner
pub fn print_banner() {
    for (text, css) in CONSOLE_BANNER {
        web_sys::console::log_2(&JsValue::from_str(text), &JsValue::from_str(css));
    }
}
