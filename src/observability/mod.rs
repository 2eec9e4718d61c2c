//! Observability for the form controller and its collaborators
//!
//! Structured JSON-line logs on stderr, one typed `Event` per line.
//! The catalog and resolver never log; logging happens where state
//! changes or I/O is attempted.
//!
//! # Usage
//!
//! ```ignore
//! use sitecheck::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::AnswersPruned, &[("count", "2")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
