//! Scroll reveal: fade cards in as they enter the viewport

use leptos::logging::log;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::core::ObserverPolicy;
use crate::core::reveal::{REVEAL_CLASS, hidden_styles, stylesheet};
use crate::ui::dom;
use crate::ui::viewport::ViewportObserver;

/// Hide every reveal target and fade it in on first visibility
pub fn install(document: &Document, selector: &str) -> Result<Option<ViewportObserver>, JsValue> {
    let targets = dom::query_all(document, selector);
    if targets.is_empty() {
        return Ok(None);
    }

    inject_stylesheet(document)?;

    let observer = ViewportObserver::new(ObserverPolicy::REVEAL, |element| {
        let _ = element.class_list().add_1(REVEAL_CLASS);
    })?;

    // Hidden state goes on before observing so nothing flashes in place
    for element in &targets {
        for (property, value) in hidden_styles() {
            dom::set_style(element, property, &value);
        }
        observer.observe(element);
    }

    log!("[landing] reveal: observing {} elements", targets.len());
    Ok(Some(observer))
}

fn inject_stylesheet(document: &Document) -> Result<(), JsValue> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_text_content(Some(&stylesheet()));
    head.append_child(&style)?;
    Ok(())
}
