//! Attaches every landing page behavior to the current document

use leptos::logging::log;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::core::bindings::INLINE_CONFIG_ID;
use crate::core::{BindingError, ConfigError, LandingConfig};
use crate::ui::{DomBindings, accordion, ambient, counter, navigation, reveal, waitlist};

/// Startup errors
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Browser API error: {0}")]
    Browser(String),
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        LandingError::Browser(format!("{:?}", value))
    }
}

/// Config from the inline JSON element, or defaults when there is none
pub fn inline_config(document: &Document) -> Result<LandingConfig, ConfigError> {
    match document
        .get_element_by_id(INLINE_CONFIG_ID)
        .and_then(|element| element.text_content())
    {
        Some(json) if !json.trim().is_empty() => LandingConfig::from_json(&json),
        _ => Ok(LandingConfig::default()),
    }
}

/// Resolve the page elements and start every behavior.
///
/// Fails before attaching anything if a required element is missing.
pub fn mount(config: &LandingConfig) -> Result<(), LandingError> {
    let window = web_sys::window().ok_or(LandingError::Browser("No window".to_string()))?;
    let bindings = DomBindings::resolve(window, config)?;
    let selectors = &config.selectors;
    let window = bindings.window.clone();
    let document = bindings.document.clone();

    navigation::install_scroll_style(window.clone(), bindings.nav.clone());
    navigation::install_mobile_menu(bindings.menu_button.clone(), bindings.nav_links.clone());
    navigation::install_smooth_scroll(window.clone(), document.clone(), &selectors.anchors);

    let faq = accordion::install(&document, &selectors.faq_item, &selectors.faq_question);

    let waitlist = bindings.form.clone().map(|form| {
        waitlist::install(
            window.clone(),
            form,
            bindings.success_banner.clone(),
            &config.form,
        )
    });

    let reveal = reveal::install(&document, &selectors.reveal)?;
    let stats = counter::install(&document, &selectors.stats, &selectors.stat_number)?;
    // Observers run for the lifetime of the page
    std::mem::forget((reveal, stats));

    let gallery = ambient::install_gallery(&document, &selectors.gallery_item);
    if let Some(hero_bg) = bindings.hero_bg.clone() {
        ambient::install_parallax(window.clone(), hero_bg);
    }
    if let Some(spots) = bindings.spots.clone() {
        ambient::install_pulse(spots);
    }

    ambient::print_banner();
    log!(
        "[landing] mounted: {} faq items, {} gallery items, waitlist form: {}",
        faq,
        gallery,
        waitlist.is_some()
    );

    Ok(())
}
