//! Landing page configuration and DOM binding table
//!
//! `LandingConfig` names every selector the behavior layer attaches to, plus the
//! user-facing strings of the waitlist form. Every field has a default matching
//! the production markup, so a page only needs to override what differs.
//!
//! Bindings are either required or optional. A missing required binding fails
//! startup with a [`BindingError`]; a missing optional one just disables the
//! feature that needs it.

use serde::{Deserialize, Serialize};

/// Id of the inline `<script type="application/json">` element holding config overrides
pub const INLINE_CONFIG_ID: &str = "landing-config";

/// Full configuration of the behavior layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// CSS selectors for every DOM binding
    pub selectors: Selectors,
    /// Waitlist form settings
    pub form: FormSettings,
}

/// CSS selectors used to find the page elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav: String,
    pub menu_button: String,
    pub nav_links: String,
    /// Links that scroll smoothly to an in-page target
    pub anchors: String,
    pub faq_item: String,
    /// Header inside a FAQ item, relative to the item
    pub faq_question: String,
    pub form: String,
    pub success_banner: String,
    /// Elements faded in when they scroll into view
    pub reveal: String,
    /// Containers whose stat numbers count up when visible
    pub stats: String,
    /// Number elements inside a stats container
    pub stat_number: String,
    pub hero_bg: String,
    pub spots: String,
    pub gallery_item: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav: ".nav".to_string(),
            menu_button: ".mobile-menu-btn".to_string(),
            nav_links: ".nav-links".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            faq_item: ".faq-item".to_string(),
            faq_question: ".faq-question".to_string(),
            form: "#waitlist-form".to_string(),
            success_banner: "#form-success".to_string(),
            reveal: ".problem-card, .benefit-card, .step, .for-whom-card".to_string(),
            stats: ".hero-stats".to_string(),
            stat_number: ".stat-number".to_string(),
            hero_bg: ".hero-bg".to_string(),
            spots: ".cta-spots strong".to_string(),
            gallery_item: ".gallery-item".to_string(),
        }
    }
}

/// Waitlist form settings and messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Overrides the form's own `action` attribute when set
    pub action: Option<String>,
    /// Name of the contact handle field
    pub contact_field: String,
    pub messages: FormMessages,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            action: None,
            contact_field: "telegram".to_string(),
            messages: FormMessages::default(),
        }
    }
}

/// Strings shown to the user across a submission attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormMessages {
    /// Blocking message for a missing or too short contact handle
    pub validation: String,
    /// Button label while the request is in flight
    pub submitting: String,
    /// Button label after a successful submission
    pub sent: String,
    /// Blocking message pointing to a manual contact channel
    pub fallback: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            validation: "Пожалуйста, укажи Telegram для связи".to_string(),
            submitting: "Отправляю...".to_string(),
            sent: "Отправлено ✓".to_string(),
            fallback: "Не удалось отправить. Напиши напрямую в Telegram: @Kolunpoleno"
                .to_string(),
        }
    }
}

/// Configuration parsing errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid landing config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid landing config value: {0}")]
    Value(String),
}

/// DOM binding resolution errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BindingError {
    #[error("Required element `{name}` not found (selector `{selector}`)")]
    Missing { name: &'static str, selector: String },

    #[error("Invalid selector `{selector}` for `{name}`")]
    InvalidSelector { name: &'static str, selector: String },
}

/// Whether the page must contain a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

/// A named selector and its requirement
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<'a> {
    pub name: &'static str,
    pub selector: &'a str,
    pub requirement: Requirement,
}

impl<'a> Binding<'a> {
    fn required(name: &'static str, selector: &'a str) -> Self {
        Self {
            name,
            selector,
            requirement: Requirement::Required,
        }
    }

    fn optional(name: &'static str, selector: &'a str) -> Self {
        Self {
            name,
            selector,
            requirement: Requirement::Optional,
        }
    }

    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    /// Turn a lookup result into the binding's element, failing only when required
    pub fn resolve<T>(&self, found: Option<T>) -> Result<Option<T>, BindingError> {
        match (found, self.requirement) {
            (Some(element), _) => Ok(Some(element)),
            (None, Requirement::Optional) => Ok(None),
            (None, Requirement::Required) => Err(self.missing()),
        }
    }

    pub fn missing(&self) -> BindingError {
        BindingError::Missing {
            name: self.name,
            selector: self.selector.to_string(),
        }
    }

    pub fn invalid(&self) -> BindingError {
        BindingError::InvalidSelector {
            name: self.name,
            selector: self.selector.to_string(),
        }
    }
}

impl LandingConfig {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Single-element bindings
    pub fn element_bindings(&self) -> ElementBindings<'_> {
        let s = &self.selectors;
        ElementBindings {
            nav: Binding::required("nav", &s.nav),
            menu_button: Binding::required("menu_button", &s.menu_button),
            nav_links: Binding::required("nav_links", &s.nav_links),
            form: Binding::optional("form", &s.form),
            success_banner: Binding::optional("success_banner", &s.success_banner),
            hero_bg: Binding::optional("hero_bg", &s.hero_bg),
            spots: Binding::optional("spots", &s.spots),
        }
    }
}

/// Named bindings that resolve to a single element
#[derive(Debug, Clone)]
pub struct ElementBindings<'a> {
    pub nav: Binding<'a>,
    pub menu_button: Binding<'a>,
    pub nav_links: Binding<'a>,
    pub form: Binding<'a>,
    pub success_banner: Binding<'a>,
    pub hero_bg: Binding<'a>,
    pub spots: Binding<'a>,
}

impl<'a> ElementBindings<'a> {
    #[cfg(test)]
    pub fn all(&self) -> [&Binding<'a>; 7] {
        [
            &self.nav,
            &self.menu_button,
            &self.nav_links,
            &self.form,
            &self.success_banner,
            &self.hero_bg,
            &self.spots,
        ]
    }
}
