//! Navigation bar, mobile menu and in-page anchor scrolling

use std::cell::Cell;
use std::rc::Rc;

use leptos::ev::scroll;
use leptos::prelude::window_event_listener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::core::MobileMenu;
use crate::core::effects::{
    MENU_ACTIVE_CLASS, NAV_SCROLLED_CLASS, anchor_scroll_top, nav_is_scrolled,
};
use crate::ui::dom;

/// Toggle the scrolled style of the navigation bar on every scroll
pub fn install_scroll_style(window: Window, nav: Element) {
    let handle = window_event_listener(scroll, move |_| {
        dom::set_class(&nav, NAV_SCROLLED_CLASS, nav_is_scrolled(dom::scroll_y(&window)));
    });
    std::mem::forget(handle);
}

/// Open and close the mobile menu
pub fn install_mobile_menu(button: Element, links: Element) {
    let initial = MobileMenu::with_open(links.class_list().contains(MENU_ACTIVE_CLASS));
    let menu = Rc::new(Cell::new(initial));

    let sync = {
        let button = button.clone();
        let links = links.clone();
        move |state: MobileMenu| {
            dom::set_class(&links, MENU_ACTIVE_CLASS, state.is_open());
            dom::set_class(&button, MENU_ACTIVE_CLASS, state.is_open());
        }
    };
    sync(initial);

    {
        let menu = menu.clone();
        let sync = sync.clone();
        dom::listen(&button, "click", move |_| {
            let mut state = menu.get();
            state.toggle();
            menu.set(state);
            sync(state);
        });
    }

    // Following a link closes the menu
    for link in dom::query_all_in(&links, "a") {
        let menu = menu.clone();
        let sync = sync.clone();
        dom::listen(&link, "click", move |_| {
            let mut state = menu.get();
            state.close();
            menu.set(state);
            sync(state);
        });
    }
}

/// Replace the jump to an in-page anchor with a smooth scroll below the header
pub fn install_smooth_scroll(window: Window, document: Document, selector: &str) {
    for anchor in dom::query_all(&document, selector) {
        let window = window.clone();
        let document = document.clone();
        dom::listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            let Some(link) = ev.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector and has no target
            let Ok(Some(target)) = document.query_selector(&href) else {
                return;
            };

            let top = anchor_scroll_top(
                target.get_bounding_client_rect().top(),
                dom::scroll_y(&window),
            );
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
}
