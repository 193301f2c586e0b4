//! Browser bindings for the landing page behavior

pub mod accordion;
pub mod ambient;
pub mod counter;
pub mod dom;
pub mod navigation;
pub mod reveal;
pub mod viewport;
pub mod waitlist;

pub use counter::animate_counter;
pub use dom::DomBindings;
pub use viewport::ViewportObserver;
