//! Observable events of a compilation run
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,
    /// Class model files loaded
    ModelLoaded,

    // Per class
    /// Class classified and validated, ready for emission
    ClassCompiled,
    /// Class rejected; it must not reach emission
    ClassRejected,

    /// Unrecoverable startup failure
    StartupFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ModelLoaded => "MODEL_LOADED",
            Event::ClassCompiled => "CLASS_COMPILED",
            Event::ClassRejected => "CLASS_REJECTED",
            Event::StartupFailed => "STARTUP_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    ///
    /// A rejected class is fatal for that class only, not for the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::StartupFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
