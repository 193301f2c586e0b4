//! Waitlist form submission
//!
//! The controller owns the attempt state and drives one submission at a time:
//!
//! ```text
//! Idle -> Submitting -> Success -> (5s) -> Idle
//!                    \-> Failure -> (acknowledged) -> Idle
//! ```
//!
//! The page is only a rendering of [`FormAttempt`]. The DOM, the network and
//! the clock sit behind the [`WaitlistSurface`], [`WaitlistTransport`] and
//! [`Clock`] traits so the state machine runs the same in the browser and in
//! tests.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::core::bindings::FormMessages;

/// Minimum length of the contact handle, in characters, after trimming
pub const MIN_CONTACT_LENGTH: usize = 3;

/// How long the success state stays on screen
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(5000);

/// Contact field validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Contact handle is required")]
    MissingContact,

    #[error("Contact handle too short ({actual} < {min} characters)")]
    ContactTooShort { min: usize, actual: usize },
}

/// Submission errors. The user sees the same fallback message for all of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Server rejected submission with status {status}")]
    Rejected { status: u16 },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Could not build request: {0}")]
    Request(String),
}

/// Outcome of a single submit call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaitlistError {
    #[error("A submission is already in progress")]
    Busy,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmitError),
}

/// Validate the contact handle, returning it trimmed
pub fn validate_contact(value: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingContact);
    }
    let actual = trimmed.chars().count();
    if actual < MIN_CONTACT_LENGTH {
        return Err(ValidationError::ContactTooShort {
            min: MIN_CONTACT_LENGTH,
            actual,
        });
    }
    Ok(trimmed.to_string())
}

/// Map an HTTP status to the submission result
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

/// State of the current submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormAttempt {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

/// What the submit button and success banner should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub button_label: String,
    pub button_disabled: bool,
    pub banner_visible: bool,
}

impl FormAttempt {
    /// Render the state. `original_label` is the button text before any attempt.
    pub fn view(self, original_label: &str, messages: &FormMessages) -> FormView {
        match self {
            // Failure restores the button as soon as it is entered
            FormAttempt::Idle | FormAttempt::Failure => FormView {
                button_label: original_label.to_string(),
                button_disabled: false,
                banner_visible: false,
            },
            FormAttempt::Submitting => FormView {
                button_label: messages.submitting.clone(),
                button_disabled: true,
                banner_visible: false,
            },
            FormAttempt::Success => FormView {
                button_label: messages.sent.clone(),
                button_disabled: true,
                banner_visible: true,
            },
        }
    }
}

/// The form as seen by the controller
pub trait WaitlistSurface {
    /// Current value of the contact field, if the field exists
    fn contact(&self) -> Option<String>;

    /// Button label before any submission
    fn original_label(&self) -> String;

    fn render(&self, view: &FormView);

    /// Clear all form fields
    fn reset_fields(&self);

    /// Show a blocking message and wait for the user to acknowledge it
    fn alert(&self, message: &str);
}

/// Sends the form to its destination
#[allow(async_fn_in_trait)]
pub trait WaitlistTransport {
    async fn send(&self) -> Result<(), SubmitError>;
}

/// Async sleep source
#[allow(async_fn_in_trait)]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

/// Drives submissions of one waitlist form
pub struct WaitlistController<S, T, C> {
    surface: S,
    transport: T,
    clock: C,
    messages: FormMessages,
    state: Cell<FormAttempt>,
    original_label: RefCell<Option<String>>,
}

impl<S, T, C> WaitlistController<S, T, C>
where
    S: WaitlistSurface,
    T: WaitlistTransport,
    C: Clock,
{
    pub fn new(surface: S, transport: T, clock: C, messages: FormMessages) -> Self {
        Self {
            surface,
            transport,
            clock,
            messages,
            state: Cell::new(FormAttempt::Idle),
            original_label: RefCell::new(None),
        }
    }

    pub fn state(&self) -> FormAttempt {
        self.state.get()
    }

    fn transition(&self, next: FormAttempt) {
        self.state.set(next);
        let label = self
            .original_label
            .borrow()
            .clone()
            .unwrap_or_default();
        self.surface.render(&next.view(&label, &self.messages));
    }

    /// Run one submission attempt to completion.
    ///
    /// Resolves once the form is back to `Idle`, which on success is after the
    /// confirmation has been shown for [`SUCCESS_DISPLAY`].
    pub async fn submit(&self) -> Result<(), WaitlistError> {
        if self.state.get() != FormAttempt::Idle {
            return Err(WaitlistError::Busy);
        }

        if let Err(err) = validate_contact(self.surface.contact().as_deref()) {
            self.surface.alert(&self.messages.validation);
            return Err(err.into());
        }

        // The label can change between attempts only while idle
        *self.original_label.borrow_mut() = Some(self.surface.original_label());
        self.transition(FormAttempt::Submitting);

        match self.transport.send().await {
            Ok(()) => {
                self.surface.reset_fields();
                self.transition(FormAttempt::Success);
                self.clock.sleep(SUCCESS_DISPLAY).await;
                self.transition(FormAttempt::Idle);
                Ok(())
            }
            Err(err) => {
                self.state.set(FormAttempt::Failure);
                self.surface.alert(&self.messages.fallback);
                self.transition(FormAttempt::Idle);
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    // ========================================================================
    // Fakes
    // ========================================================================

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Render(FormView),
        Reset,
        Alert(String),
        Send,
        Sleep(Duration),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct FakeSurface {
        log: Log,
        contact: Option<String>,
        label: String,
    }

    impl WaitlistSurface for FakeSurface {
        fn contact(&self) -> Option<String> {
            self.contact.clone()
        }

        fn original_label(&self) -> String {
            self.label.clone()
        }

        fn render(&self, view: &FormView) {
            self.log.borrow_mut().push(Event::Render(view.clone()));
        }

        fn reset_fields(&self) {
            self.log.borrow_mut().push(Event::Reset);
        }

        fn alert(&self, message: &str) {
            self.log.borrow_mut().push(Event::Alert(message.to_string()));
        }
    }

    struct FakeTransport {
        log: Log,
        result: Result<(), SubmitError>,
    }

    impl WaitlistTransport for FakeTransport {
        async fn send(&self) -> Result<(), SubmitError> {
            self.log.borrow_mut().push(Event::Send);
            self.result.clone()
        }
    }

    struct FakeClock {
        log: Log,
    }

    impl Clock for FakeClock {
        async fn sleep(&self, duration: Duration) {
            self.log.borrow_mut().push(Event::Sleep(duration));
        }
    }

    fn controller(
        contact: Option<&str>,
        result: Result<(), SubmitError>,
    ) -> (WaitlistController<FakeSurface, FakeTransport, FakeClock>, Log) {
        let log: Log = Rc::default();
        let controller = WaitlistController::new(
            FakeSurface {
                log: log.clone(),
                contact: contact.map(str::to_string),
                label: "Записаться".to_string(),
            },
            FakeTransport {
                log: log.clone(),
                result,
            },
            FakeClock { log: log.clone() },
            FormMessages::default(),
        );
        (controller, log)
    }

    fn idle_view() -> FormView {
        FormView {
            button_label: "Записаться".to_string(),
            button_disabled: false,
            banner_visible: false,
        }
    }

    fn submitting_view() -> FormView {
        FormView {
            button_label: "Отправляю...".to_string(),
            button_disabled: true,
            banner_visible: false,
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    #[test]
    fn test_validate_contact() {
        assert_eq!(validate_contact(None), Err(ValidationError::MissingContact));
        assert_eq!(validate_contact(Some("")), Err(ValidationError::MissingContact));
        assert_eq!(
            validate_contact(Some("   ")),
            Err(ValidationError::MissingContact)
        );
        assert_eq!(
            validate_contact(Some("ab")),
            Err(ValidationError::ContactTooShort { min: 3, actual: 2 })
        );
        assert_eq!(
            validate_contact(Some("  ab  ")),
            Err(ValidationError::ContactTooShort { min: 3, actual: 2 })
        );
        assert_eq!(validate_contact(Some("abc")), Ok("abc".to_string()));
        assert_eq!(validate_contact(Some(" @ivan ")), Ok("@ivan".to_string()));
    }

    #[test]
    fn test_validate_contact_counts_characters() {
        // Two Cyrillic letters are four bytes but still too short
        assert!(validate_contact(Some("ив")).is_err());
        assert!(validate_contact(Some("иван")).is_ok());
        // An emoji is one character, not two UTF-16 units
        assert!(validate_contact(Some("a😀")).is_err());
        assert!(validate_contact(Some("a😀b")).is_ok());
    }

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(299), Ok(()));
        assert_eq!(check_status(302), Err(SubmitError::Rejected { status: 302 }));
        assert_eq!(check_status(422), Err(SubmitError::Rejected { status: 422 }));
        assert_eq!(check_status(500), Err(SubmitError::Rejected { status: 500 }));
    }

    #[test]
    fn test_views() {
        let messages = FormMessages::default();

        assert_eq!(FormAttempt::Idle.view("Записаться", &messages), idle_view());
        assert_eq!(FormAttempt::Failure.view("Записаться", &messages), idle_view());
        assert_eq!(
            FormAttempt::Submitting.view("Записаться", &messages),
            submitting_view()
        );

        let success = FormAttempt::Success.view("Записаться", &messages);
        assert_eq!(success.button_label, "Отправлено ✓");
        assert!(success.button_disabled);
        assert!(success.banner_visible);
    }

    // ========================================================================
    // Controller
    // ========================================================================

    #[tokio::test]
    async fn test_empty_contact_blocks_without_network() {
        let (controller, log) = controller(Some(""), Ok(()));

        let result = controller.submit().await;

        assert_eq!(
            result,
            Err(WaitlistError::Validation(ValidationError::MissingContact))
        );
        assert_eq!(
            *log.borrow(),
            vec![Event::Alert("Пожалуйста, укажи Telegram для связи".to_string())]
        );
        assert_eq!(controller.state(), FormAttempt::Idle);
    }

    #[tokio::test]
    async fn test_missing_contact_field_blocks() {
        let (controller, log) = controller(None, Ok(()));

        assert!(controller.submit().await.is_err());
        assert!(!log.borrow().contains(&Event::Send));
    }

    #[tokio::test]
    async fn test_two_characters_rejected() {
        let (controller, log) = controller(Some("ab"), Ok(()));

        let result = controller.submit().await;

        assert!(matches!(result, Err(WaitlistError::Validation(_))));
        assert!(!log.borrow().contains(&Event::Send));
    }

    #[tokio::test]
    async fn test_three_characters_submitted() {
        let (controller, log) = controller(Some("abc"), Ok(()));

        assert_eq!(controller.submit().await, Ok(()));
        assert!(log.borrow().contains(&Event::Send));
    }

    #[tokio::test]
    async fn test_success_flow() {
        let (controller, log) = controller(Some("@ivan"), Ok(()));

        assert_eq!(controller.submit().await, Ok(()));

        let messages = FormMessages::default();
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Render(submitting_view()),
                Event::Send,
                Event::Reset,
                Event::Render(FormView {
                    button_label: messages.sent.clone(),
                    button_disabled: true,
                    banner_visible: true,
                }),
                Event::Sleep(Duration::from_millis(5000)),
                Event::Render(idle_view()),
            ]
        );
        assert_eq!(controller.state(), FormAttempt::Idle);
    }

    #[tokio::test]
    async fn test_rejected_response_restores_immediately() {
        let (controller, log) = controller(
            Some("@ivan"),
            Err(SubmitError::Rejected { status: 500 }),
        );

        let result = controller.submit().await;

        assert_eq!(
            result,
            Err(WaitlistError::Submission(SubmitError::Rejected { status: 500 }))
        );
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Render(submitting_view()),
                Event::Send,
                Event::Alert(FormMessages::default().fallback),
                Event::Render(idle_view()),
            ]
        );
        assert_eq!(controller.state(), FormAttempt::Idle);
    }

    #[tokio::test]
    async fn test_transport_error_restores_immediately() {
        let (controller, log) = controller(
            Some("@ivan"),
            Err(SubmitError::Transport("Failed to fetch".to_string())),
        );

        assert!(controller.submit().await.is_err());

        let log = log.borrow();
        assert!(!log.contains(&Event::Reset));
        assert!(!log.iter().any(|e| matches!(e, Event::Sleep(_))));
        assert_eq!(log.last(), Some(&Event::Render(idle_view())));
        assert!(log.contains(&Event::Alert(
            "Не удалось отправить. Напиши напрямую в Telegram: @Kolunpoleno".to_string()
        )));
    }

    #[tokio::test]
    async fn test_submit_while_busy_is_ignored() {
        let (controller, log) = controller(Some("@ivan"), Ok(()));
        controller.state.set(FormAttempt::Submitting);

        assert_eq!(controller.submit().await, Err(WaitlistError::Busy));
        assert!(log.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_can_resubmit_after_failure() {
        let (controller, log) = controller(
            Some("@ivan"),
            Err(SubmitError::Rejected { status: 503 }),
        );

        assert!(controller.submit().await.is_err());
        assert!(controller.submit().await.is_err());

        let sends = log.borrow().iter().filter(|e| **e == Event::Send).count();
        assert_eq!(sends, 2);
    }
}
