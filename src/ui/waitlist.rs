//! Waitlist form bound to the page
//!
//! Implements the controller's surface, transport and clock on top of the DOM,
//! `gloo-net` and `gloo-timers`, then hooks the form's submit event.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::logging::{log, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, Window};

use crate::core::bindings::FormSettings;
use crate::core::waitlist::{
    Clock, FormView, SubmitError, WaitlistSurface, WaitlistTransport, check_status,
};
use crate::core::{WaitlistController, WaitlistError};
use crate::ui::dom;

const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

/// The waitlist form's elements
pub struct DomSurface {
    window: Window,
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
    banner: Option<HtmlElement>,
    contact_field: String,
}

impl DomSurface {
    pub fn new(
        window: Window,
        form: HtmlFormElement,
        banner: Option<HtmlElement>,
        contact_field: String,
    ) -> Self {
        let button = form
            .query_selector(SUBMIT_BUTTON_SELECTOR)
            .ok()
            .flatten()
            .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok());
        if button.is_none() {
            warn!("[landing] waitlist form has no submit button");
        }
        Self {
            window,
            form,
            button,
            banner,
            contact_field,
        }
    }
}

impl WaitlistSurface for DomSurface {
    fn contact(&self) -> Option<String> {
        FormData::new_with_form(&self.form)
            .ok()?
            .get(&self.contact_field)
            .as_string()
    }

    fn original_label(&self) -> String {
        self.button
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default()
    }

    fn render(&self, view: &FormView) {
        if let Some(button) = &self.button {
            button.set_text_content(Some(&view.button_label));
            button.set_disabled(view.button_disabled);
        }
        if let Some(banner) = &self.banner {
            let display = if view.banner_visible { "block" } else { "none" };
            let _ = banner.style().set_property("display", display);
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

/// Posts the form's fields to its action URL
pub struct FetchTransport {
    form: HtmlFormElement,
    action: Option<String>,
}

impl FetchTransport {
    pub fn new(form: HtmlFormElement, action: Option<String>) -> Self {
        Self { form, action }
    }

    fn url(&self) -> String {
        self.action.clone().unwrap_or_else(|| self.form.action())
    }
}

impl WaitlistTransport for FetchTransport {
    async fn send(&self) -> Result<(), SubmitError> {
        let body = FormData::new_with_form(&self.form)
            .map_err(|e| SubmitError::Request(format!("{:?}", e)))?;

        let request = gloo_net::http::Request::post(&self.url())
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| SubmitError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        check_status(response.status())
    }
}

/// Browser timer
pub struct TimeoutClock;

impl Clock for TimeoutClock {
    async fn sleep(&self, duration: Duration) {
        TimeoutFuture::new(duration.as_millis() as u32).await;
    }
}

pub type DomWaitlist = WaitlistController<DomSurface, FetchTransport, TimeoutClock>;

/// Take over submission of the waitlist form
pub fn install(
    window: Window,
    form: HtmlFormElement,
    banner: Option<HtmlElement>,
    settings: &FormSettings,
) -> Rc<DomWaitlist> {
    let controller = Rc::new(WaitlistController::new(
        DomSurface::new(
            window,
            form.clone(),
            banner,
            settings.contact_field.clone(),
        ),
        FetchTransport::new(form.clone(), settings.action.clone()),
        TimeoutClock,
        settings.messages.clone(),
    ));

    let handler_controller = controller.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let controller = handler_controller.clone();
        spawn_local(async move {
            match controller.submit().await {
                Ok(()) => log!("[landing] waitlist: submitted"),
                Err(WaitlistError::Busy) => log!("[landing] waitlist: already submitting"),
                Err(WaitlistError::Validation(e)) => log!("[landing] waitlist: {}", e),
                Err(WaitlistError::Submission(e)) => {
                    warn!("[landing] waitlist submission failed: {}", e)
                }
            }
        });
    });

    controller
}
