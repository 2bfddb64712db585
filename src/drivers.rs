// =============================================================================
// Driver routines: one record per ownership discipline
// =============================================================================

use crate::config::DemoConfig;
use crate::error::OwnershipError;
use crate::raw::RawSlot;
use crate::record::Record;
use crate::trace::{TraceEvent, TraceSink};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Stack,
    Heap,
    HeapRaw,
    SharedSingle,
    SharedMulti,
}

impl Driver {
    /// The drivers the binary runs, in order.
    pub const ALL: [Driver; 4] = [
        Driver::Stack,
        Driver::Heap,
        Driver::SharedSingle,
        Driver::SharedMulti,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Driver::Stack => "createObjectOnStack",
            Driver::Heap => "createObjectOnHeap",
            Driver::HeapRaw => "createObjectOnHeapRaw",
            Driver::SharedSingle => "createObjectOnHeapWithSharedPtr1",
            Driver::SharedMulti => "createObjectOnHeapWithSharedPtr2",
        }
    }

    pub fn run(self, config: &DemoConfig, sink: &Rc<dyn TraceSink>) -> Result<(), OwnershipError> {
        match self {
            Driver::Stack => create_object_on_stack(config, sink),
            Driver::Heap => create_object_on_heap(config, sink),
            Driver::HeapRaw => create_object_on_heap_raw(config, sink)?,
            Driver::SharedSingle => create_object_on_heap_with_rc_1(config, sink),
            Driver::SharedMulti => create_object_on_heap_with_rc_2(config, sink),
        }
        Ok(())
    }
}

pub fn run_all(config: &DemoConfig, sink: &Rc<dyn TraceSink>) -> Result<(), OwnershipError> {
    for driver in Driver::ALL {
        driver.run(config, sink)?;
    }
    Ok(())
}

fn new_record(config: &DemoConfig, sink: &Rc<dyn TraceSink>) -> Record {
    Record::new(config.name.as_str(), config.value, Rc::clone(sink))
}

/// The record lives in a local and is dropped when the inner block ends.
pub fn create_object_on_stack(config: &DemoConfig, sink: &Rc<dyn TraceSink>) {
    sink.emit(TraceEvent::Start(Driver::Stack.name()));

    {
        let record = new_record(config, sink);
        record.report();
    } // dropped here

    sink.emit(TraceEvent::End(Driver::Stack.name()));
}

/// Exclusive heap ownership moved out of the inner block and released by hand.
///
/// Reading through the box after its release does not compile:
///
/// ```compile_fail
/// use object_lifetime::{Record, RecordingSink, TraceSink};
/// use std::rc::Rc;
///
/// let sink: Rc<dyn TraceSink> = Rc::new(RecordingSink::new());
/// let record = Box::new(Record::new("test", 123, sink));
/// drop(record);
/// record.report();
/// ```
pub fn create_object_on_heap(config: &DemoConfig, sink: &Rc<dyn TraceSink>) {
    let mut slot: Option<Box<Record>> = None;

    sink.emit(TraceEvent::Start(Driver::Heap.name()));

    {
        let local = Box::new(new_record(config, sink));
        local.report();
        debug_assert!(slot.is_none());
        slot = Some(local);
    } // moved out, nothing dropped

    if let Some(record) = slot.as_deref() {
        record.report();
    }
    release(&mut slot);

    sink.emit(TraceEvent::End(Driver::Heap.name()));
}

/// Drops the boxed record held by `slot`, if any, and leaves it empty.
pub fn release(slot: &mut Option<Box<Record>>) {
    drop(slot.take());
}

/// Same sequence as [`create_object_on_heap`] through a [`RawSlot`], which
/// leaks unless `release` is called.
pub fn create_object_on_heap_raw(
    config: &DemoConfig,
    sink: &Rc<dyn TraceSink>,
) -> Result<(), OwnershipError> {
    let mut slot = RawSlot::empty();

    sink.emit(TraceEvent::Start(Driver::HeapRaw.name()));

    {
        let mut local = RawSlot::allocate(new_record(config, sink));
        local.record()?.report();
        std::mem::swap(&mut slot, &mut local);
    } // `local` is empty now, nothing to leak

    slot.record()?.report();
    slot.release()?;

    sink.emit(TraceEvent::End(Driver::HeapRaw.name()));
    Ok(())
}

/// A single `Rc` owner; the count hits zero when the inner block ends.
pub fn create_object_on_heap_with_rc_1(config: &DemoConfig, sink: &Rc<dyn TraceSink>) {
    sink.emit(TraceEvent::Start(Driver::SharedSingle.name()));

    {
        let local = Rc::new(new_record(config, sink));
        local.report();
    }

    sink.emit(TraceEvent::End(Driver::SharedSingle.name()));
}

/// Two `Rc` owners; the record survives the inner block and is destroyed
/// when the outer handle is released.
pub fn create_object_on_heap_with_rc_2(config: &DemoConfig, sink: &Rc<dyn TraceSink>) {
    sink.emit(TraceEvent::Start(Driver::SharedMulti.name()));

    let shared: Rc<Record> = {
        let local = Rc::new(new_record(config, sink));
        local.report();
        Rc::clone(&local)
    }; // count back to one

    shared.report();
    drop(shared);

    sink.emit(TraceEvent::End(Driver::SharedMulti.name()));
}
