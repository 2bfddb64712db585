// =============================================================================
// Lifecycle trace: events and the sinks that observe them
// =============================================================================

use crate::config::DemoConfig;
use colored::Colorize;
use std::cell::RefCell;
use std::fmt;

/// One observable step of a demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Start(&'static str),
    Constructed,
    Field { name: String, value: i32 },
    Destructed,
    End(&'static str),
}

impl TraceEvent {
    pub fn field(name: impl Into<String>, value: i32) -> Self {
        Self::Field {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Start(driver) => write!(f, "+{}", driver),
            TraceEvent::Constructed => write!(f, "Object: constructor"),
            TraceEvent::Field { name, value } => write!(f, "Object: {}={}", name, value),
            TraceEvent::Destructed => write!(f, "Object: destructor"),
            TraceEvent::End(driver) => write!(f, "-{}", driver),
        }
    }
}

/// Receives every lifecycle event in emission order.
pub trait TraceSink {
    fn emit(&self, event: TraceEvent);
}

/// Prints each event as one line on stdout.
#[derive(Debug)]
pub struct ConsoleSink {
    color: bool,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        ConsoleSink { color: true }
    }
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain() -> Self {
        ConsoleSink { color: false }
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        ConsoleSink {
            color: config.color,
        }
    }

    fn styled(&self, event: &TraceEvent) -> String {
        let line = event.to_string();
        if !self.color {
            return line;
        }
        match event {
            TraceEvent::Start(_) | TraceEvent::End(_) => line.bold().to_string(),
            TraceEvent::Constructed => line.green().to_string(),
            TraceEvent::Destructed => line.red().to_string(),
            TraceEvent::Field { .. } => line,
        }
    }
}

impl TraceSink for ConsoleSink {
    fn emit(&self, event: TraceEvent) {
        println!("{}", self.styled(&event));
    }
}

/// Keeps events in memory so tests can assert on the exact sequence.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<TraceEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events.borrow().iter().map(ToString::to_string).collect()
    }

    pub fn count(&self, event: &TraceEvent) -> usize {
        self.events.borrow().iter().filter(|e| *e == event).count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl TraceSink for RecordingSink {
    fn emit(&self, event: TraceEvent) {
        self.events.borrow_mut().push(event);
    }
}
