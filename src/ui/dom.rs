//! DOM lookup and binding resolution
//!
//! Resolves the [`LandingConfig`] selector table against the live document and
//! wraps the small web-sys chores shared by every effect.

use leptos::logging::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlFormElement, NodeList, Window};

use crate::core::bindings::Binding;
use crate::core::{BindingError, LandingConfig};

/// Page elements resolved from the configured selectors
#[derive(Debug, Clone)]
pub struct DomBindings {
    pub window: Window,
    pub document: Document,
    pub nav: Element,
    pub menu_button: Element,
    pub nav_links: Element,
    pub form: Option<HtmlFormElement>,
    pub success_banner: Option<HtmlElement>,
    pub hero_bg: Option<HtmlElement>,
    pub spots: Option<HtmlElement>,
}

impl DomBindings {
    /// Look up every single-element binding.
    ///
    /// Fails on the first missing required element; missing optional ones are
    /// logged and left as `None`.
    pub fn resolve(window: Window, config: &LandingConfig) -> Result<Self, BindingError> {
        let document = window.document().ok_or(BindingError::Missing {
            name: "document",
            selector: String::new(),
        })?;
        let bindings = config.element_bindings();

        let required = |binding: &Binding| -> Result<Element, BindingError> {
            find(&document, binding)?.ok_or_else(|| binding.missing())
        };

        Ok(Self {
            nav: required(&bindings.nav)?,
            menu_button: required(&bindings.menu_button)?,
            nav_links: required(&bindings.nav_links)?,
            form: find_as::<HtmlFormElement>(&document, &bindings.form)?,
            success_banner: find_as::<HtmlElement>(&document, &bindings.success_banner)?,
            hero_bg: find_as::<HtmlElement>(&document, &bindings.hero_bg)?,
            spots: find_as::<HtmlElement>(&document, &bindings.spots)?,
            window,
            document,
        })
    }
}

/// Find a binding's element, applying its requirement
fn find(document: &Document, binding: &Binding) -> Result<Option<Element>, BindingError> {
    let found = document
        .query_selector(binding.selector)
        .map_err(|_| binding.invalid())?;
    if found.is_none() && !binding.is_required() {
        warn!(
            "[landing] optional element `{}` not found ({}), feature disabled",
            binding.name, binding.selector
        );
    }
    binding.resolve(found)
}

/// Find a binding's element and cast it to a concrete element type
fn find_as<T: JsCast>(document: &Document, binding: &Binding) -> Result<Option<T>, BindingError> {
    let Some(element) = find(document, binding)? else {
        return Ok(None);
    };
    match element.dyn_into::<T>() {
        Ok(element) => Ok(Some(element)),
        Err(_) => {
            warn!(
                "[landing] `{}` ({}) has an unexpected element type",
                binding.name, binding.selector
            );
            binding.resolve(None)
        }
    }
}

/// Collect the elements of a node list
pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`; an invalid selector matches nothing
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(list),
        Err(_) => {
            warn!("[landing] invalid selector `{}`", selector);
            Vec::new()
        }
    }
}

/// All descendants of `parent` matching `selector`
pub fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(list) => elements(list),
        Err(_) => {
            warn!("[landing] invalid selector `{}`", selector);
            Vec::new()
        }
    }
}

/// Set an inline style property; non-HTML elements are left alone
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

/// Read an inline style property
pub fn style(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|element| element.style().get_property_value(property).ok())
        .unwrap_or_default()
}

/// Add or remove a class
pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Attach an event listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        warn!("[landing] failed to attach `{}` listener", event);
    }
    // Leak the closure to keep it alive
    closure.forget();
}

/// Current vertical scroll offset of the page
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}

/// Height of the viewport
pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or_default()
}
