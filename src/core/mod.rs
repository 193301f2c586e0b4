//! Target-independent landing page behavior: configuration, visibility
//! tracking, animations and the waitlist form state machine

pub mod accordion;
pub mod bindings;
#[cfg(feature = "ssr")]
pub mod config;
pub mod counter;
pub mod effects;
pub mod reveal;
#[cfg(test)]
mod tests;
pub mod viewport;
pub mod waitlist;

pub use accordion::Accordion;
pub use bindings::{BindingError, ConfigError, FormMessages, LandingConfig, Selectors};
pub use counter::CounterRamp;
pub use effects::MobileMenu;
pub use viewport::{ObserverPolicy, ViewportRegistry};
pub use waitlist::{
    FormAttempt, FormView, SubmitError, ValidationError, WaitlistController, WaitlistError,
};
