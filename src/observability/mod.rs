//! Observability for schema compilation
//!
//! - Structured logging (JSON lines on stderr)
//! - Counters for compiled and rejected classes
//! - `SCHEMA_BATCH_BEGIN`/`SCHEMA_BATCH_COMPLETE` scope around a batch
//!
//! The classification core itself never logs; only the compiler and the
//! command line do.
//!
//! ```ignore
//! use objschema::observability::{Logger, Event, log_event_with_fields};
//!
//! log_event_with_fields(Event::ClassRejected, &[("class", "com.example.Dog")]);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::{ObservationScope, Timer};

/// Log a lifecycle event with fields
///
/// Fatal events go out at FATAL, rejected classes at WARN, the rest at INFO.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else if event == Event::ClassRejected {
        Severity::Warn
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
