// =============================================================================
// Manual ownership: a raw heap slot that must be released by hand
// =============================================================================
//
// The slot owns its record through a pointer taken from `Box::into_raw` and
// has no `Drop` impl. Forgetting `release` leaks the record and no destructor
// event is ever emitted. Misuse on an empty slot is reported as an
// `OwnershipError` instead of touching freed memory.

use crate::error::OwnershipError;
use crate::record::Record;
use std::ptr::NonNull;

#[derive(Debug, Default)]
pub struct RawSlot {
    ptr: Option<NonNull<Record>>,
    released: bool,
}

impl RawSlot {
    /// A slot that owns nothing yet.
    pub const fn empty() -> Self {
        RawSlot {
            ptr: None,
            released: false,
        }
    }

    #[must_use = "a raw slot leaks its record unless `release` is called"]
    pub fn allocate(record: Record) -> Self {
        let ptr = NonNull::from(Box::leak(Box::new(record)));
        RawSlot {
            ptr: Some(ptr),
            released: false,
        }
    }

    /// Moves ownership into a new slot, leaving this one empty.
    pub fn take(&mut self) -> RawSlot {
        RawSlot {
            ptr: self.ptr.take(),
            released: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ptr.is_none()
    }

    pub fn record(&self) -> Result<&Record, OwnershipError> {
        match self.ptr {
            // SAFETY: the pointer came from a leaked Box, only this slot holds
            // it, and it stays valid until `release` which needs `&mut self`.
            Some(ptr) => Ok(unsafe { ptr.as_ref() }),
            None if self.released => Err(OwnershipError::AlreadyReleased),
            None => Err(OwnershipError::Empty),
        }
    }

    /// Destroys the owned record and clears the slot.
    pub fn release(&mut self) -> Result<(), OwnershipError> {
        match self.ptr.take() {
            Some(ptr) => {
                // SAFETY: `ptr` was produced by `Box::leak` and has just been
                // removed from the slot, so it is reclaimed exactly once.
                drop(unsafe { Box::from_raw(ptr.as_ptr()) });
                self.released = true;
                Ok(())
            }
            None if self.released => Err(OwnershipError::AlreadyReleased),
            None => Err(OwnershipError::Empty),
        }
    }

    /// Hands the record over to automatic ownership.
    pub fn into_box(mut self) -> Result<Box<Record>, OwnershipError> {
        match self.ptr.take() {
            // SAFETY: same provenance as in `release`; the slot is consumed.
            Some(ptr) => Ok(unsafe { Box::from_raw(ptr.as_ptr()) }),
            None if self.released => Err(OwnershipError::AlreadyReleased),
            None => Err(OwnershipError::Empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{RecordingSink, TraceEvent};
    use std::rc::Rc;

    fn allocate(sink: &Rc<RecordingSink>) -> RawSlot {
        RawSlot::allocate(Record::new("test", 123, sink.clone()))
    }

    #[test]
    fn test_release_destroys_record() {
        let sink = Rc::new(RecordingSink::new());
        let mut slot = allocate(&sink);
        assert_eq!(slot.record().map(|r| r.value()), Ok(123));

        slot.release().unwrap();
        assert!(slot.is_empty());
        assert_eq!(sink.events(), vec![TraceEvent::Constructed, TraceEvent::Destructed]);
    }

    #[test]
    fn test_forgotten_release_never_destroys() {
        let sink = Rc::new(RecordingSink::new());
        {
            let slot = allocate(&sink);
            assert_eq!(slot.record().unwrap().name(), "test");
        }
        assert_eq!(sink.events(), vec![TraceEvent::Constructed]);
        assert_eq!(sink.count(&TraceEvent::Destructed), 0);
    }

    #[test]
    fn test_take_moves_ownership_without_destruction() {
        let sink = Rc::new(RecordingSink::new());
        let mut outer = RawSlot::empty();
        assert!(outer.is_empty());
        {
            let mut inner = allocate(&sink);
            outer = inner.take();
            assert!(inner.is_empty());
            assert_eq!(inner.record().unwrap_err(), OwnershipError::Empty);
        }
        assert_eq!(outer.record().unwrap().value(), 123);
        assert_eq!(sink.events(), vec![TraceEvent::Constructed]);

        outer.release().unwrap();
        assert_eq!(sink.count(&TraceEvent::Destructed), 1);
    }

    #[test]
    fn test_double_release_is_reported() {
        let sink = Rc::new(RecordingSink::new());
        let mut slot = allocate(&sink);
        slot.release().unwrap();

        assert_eq!(slot.release(), Err(OwnershipError::AlreadyReleased));
        assert_eq!(slot.record().unwrap_err(), OwnershipError::AlreadyReleased);
        assert_eq!(sink.count(&TraceEvent::Destructed), 1);
    }

    #[test]
    fn test_empty_slot_misuse() {
        let mut slot = RawSlot::empty();
        assert!(slot.is_empty());
        assert_eq!(slot.release(), Err(OwnershipError::Empty));
        assert_eq!(RawSlot::default().into_box().unwrap_err(), OwnershipError::Empty);
    }

    #[test]
    fn test_into_box_restores_automatic_drop() {
        let sink = Rc::new(RecordingSink::new());
        let boxed = allocate(&sink).into_box().unwrap();
        assert_eq!(boxed.name(), "test");
        drop(boxed);
        assert_eq!(sink.events(), vec![TraceEvent::Constructed, TraceEvent::Destructed]);
    }
}
