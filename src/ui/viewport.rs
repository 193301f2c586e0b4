//! IntersectionObserver adapter for [`ViewportRegistry`]

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::core::{ObserverPolicy, ViewportRegistry};

/// Calls a handler once per element, the first time it becomes visible
pub struct ViewportObserver {
    observer: IntersectionObserver,
    registry: Rc<RefCell<ViewportRegistry<Element>>>,
}

impl ViewportObserver {
    pub fn new<F>(policy: ObserverPolicy, mut on_visible: F) -> Result<Self, JsValue>
    where
        F: FnMut(&Element) + 'static,
    {
        let registry = Rc::new(RefCell::new(ViewportRegistry::new()));

        let callback_registry = registry.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let reports = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| (entry.target(), entry.is_intersecting()));

                // Release the borrow before running handlers
                let visible = callback_registry.borrow_mut().take_visible(reports);
                for element in visible {
                    observer.unobserve(&element);
                    on_visible(&element);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(policy.threshold));
        init.set_root_margin(policy.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        // The observer lives as long as the page
        callback.forget();

        Ok(Self { observer, registry })
    }

    /// Start watching an element; already watched elements are skipped
    pub fn observe(&self, element: &Element) {
        if self.registry.borrow_mut().register(element.clone()) {
            self.observer.observe(element);
        } else {
            warn!("[landing] element observed twice, ignoring");
        }
    }
}
