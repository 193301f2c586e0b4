//! Kolun - landing page behavior layer
//!
//! Navigation, smooth scrolling, FAQ accordion, waitlist form, scroll reveal,
//! stat counters and decorative effects for the Kolun retreat landing page,
//! compiled to WebAssembly and attached to static markup.

#[cfg(feature = "csr")]
pub mod app;
pub mod core;
#[cfg(feature = "csr")]
pub mod ui;

/// Attach all behaviors, reading overrides from the inline config element
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("No document"))?;
    let config = app::inline_config(&document).map_err(report)?;
    mount(&config)
}

/// Attach all behaviors with a config object passed from JavaScript
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start_with_config(config: wasm_bindgen::JsValue) -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();

    let config: core::LandingConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| report(core::ConfigError::Value(e.to_string())))?;
    mount(&config)
}

#[cfg(feature = "csr")]
fn mount(config: &core::LandingConfig) -> Result<(), wasm_bindgen::JsValue> {
    app::mount(config).map_err(report)
}

#[cfg(feature = "csr")]
fn report(err: impl std::fmt::Display) -> wasm_bindgen::JsValue {
    leptos::logging::error!("[landing] startup failed: {}", err);
    wasm_bindgen::JsValue::from_str(&err.to_string())
}
