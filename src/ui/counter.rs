//! Stat counters that count up when their block becomes visible

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::core::counter::{self, CounterRamp, FRAME_INTERVAL};
use crate::core::ObserverPolicy;
use crate::ui::dom;
use crate::ui::viewport::ViewportObserver;

/// Count `element`'s text up from 0 to `target` over `duration`.
///
/// Does nothing when `target` is zero or not a whole number.
pub fn animate_counter(element: &Element, target: f64, duration: Duration) {
    let Some(ramp) = CounterRamp::from_value(target, duration) else {
        return;
    };
    run(element.clone(), ramp);
}

fn run(element: Element, ramp: CounterRamp) {
    spawn_local(async move {
        for value in ramp {
            TimeoutFuture::new(FRAME_INTERVAL.as_millis() as u32).await;
            element.set_text_content(Some(&value.to_string()));
        }
    });
}

/// Animate the plain-number stats of a container
fn animate_stats(container: &Element, stat_selector: &str) {
    for stat in dom::query_all_in(container, stat_selector) {
        let text = stat.text_content().unwrap_or_default();
        if let Some(target) = counter::stat_target(&text) {
            animate_counter(&stat, target as f64, counter::DEFAULT_DURATION);
        }
    }
}

/// Watch every stats container and animate it once when half visible
pub fn install(
    document: &Document,
    container_selector: &str,
    stat_selector: &str,
) -> Result<Option<ViewportObserver>, JsValue> {
    let containers = dom::query_all(document, container_selector);
    if containers.is_empty() {
        return Ok(None);
    }

    let stat_selector = stat_selector.to_string();
    let observer = ViewportObserver::new(ObserverPolicy::STATS, move |container| {
        animate_stats(container, &stat_selector);
    })?;
    for container in &containers {
        observer.observe(container);
    }

    log!("[landing] counters: observing {} stat blocks", containers.len());
    Ok(Some(observer))
}
