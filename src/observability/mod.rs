//! Observability for sfhb
//!
//! Structured, synchronous JSON logging keyed by typed events.
//!
//! # Usage
//!
//! ```ignore
//! use sfhb::observability::{Event, Logger};
//!
//! Logger::emit(Event::ArticleCreated, &[("id", "6f1c2f9e-...")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
