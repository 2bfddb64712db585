use crate::trace::{TraceEvent, TraceSink};
use std::fmt;
use std::rc::Rc;

/// A named, valued object whose construction and destruction are traced.
///
/// Both fields are fixed at construction. Dropping the record emits
/// [`TraceEvent::Destructed`] on the sink it was created with; since `Drop`
/// runs once per value, that event is emitted exactly once.
pub struct Record {
    name: String,
    value: i32,
    sink: Rc<dyn TraceSink>,
}

impl Record {
    pub fn new(name: impl Into<String>, value: i32, sink: Rc<dyn TraceSink>) -> Self {
        let record = Record {
            name: name.into(),
            value,
            sink,
        };
        record.sink.emit(TraceEvent::Constructed);
        record
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Emits the `name=value` readout line.
    pub fn report(&self) {
        self.sink.emit(TraceEvent::field(self.name.as_str(), self.value));
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

impl Drop for Record {
    fn drop(&mut self) {
        self.sink.emit(TraceEvent::Destructed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::RecordingSink;

    #[test]
    fn test_new_emits_constructed() {
        let sink = Rc::new(RecordingSink::new());
        let record = Record::new("test", 123, sink.clone());
        assert_eq!(sink.events(), vec![TraceEvent::Constructed]);
        drop(record);
    }

    #[test]
    fn test_drop_emits_destructed_once() {
        let sink = Rc::new(RecordingSink::new());
        {
            let _record = Record::new("test", 123, sink.clone());
        }
        assert_eq!(sink.events(), vec![TraceEvent::Constructed, TraceEvent::Destructed]);
        assert_eq!(sink.count(&TraceEvent::Destructed), 1);
    }

    #[test]
    fn test_accessors_do_not_emit_or_mutate() {
        let sink = Rc::new(RecordingSink::new());
        let record = Record::new("alpha", -42, sink.clone());
        for _ in 0..10 {
            assert_eq!(record.name(), "alpha");
            assert_eq!(record.value(), -42);
        }
        assert_eq!(sink.events(), vec![TraceEvent::Constructed]);
        drop(record);
    }

    #[test]
    fn test_report_emits_field_line() {
        let sink = Rc::new(RecordingSink::new());
        let record = Record::new("test", 123, sink.clone());
        record.report();
        record.report();
        drop(record);
        assert_eq!(
            sink.lines(),
            vec![
                "Object: constructor",
                "Object: test=123",
                "Object: test=123",
                "Object: destructor",
            ]
        );
    }

    #[test]
    fn test_debug_omits_sink() {
        let sink = Rc::new(RecordingSink::new());
        let record = Record::new("test", 123, sink);
        assert_eq!(format!("{:?}", record), r#"Record { name: "test", value: 123 }"#);
    }
}
