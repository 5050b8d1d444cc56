//! Bounded heap accountant fronting the global allocator.
//!
//! Ported from `hal_malloc`/`hal_free`. The original's 20 ms mutex-acquire
//! timeout guarded a real OS mutex; the bookkeeping here is O(1) integer
//! arithmetic, so a `critical-section` token (which cannot itself block)
//! replaces it rather than an async timed mutex — see SPEC_FULL.md §4.2.

use core::cell::Cell;

use alloc::sync::Arc;
use alloc::vec;

use critical_section::Mutex;

use crate::protocol::{FrameBuffer, MemoryAccount};

/// Largest allocation the accountant will hand out in one call.
pub const MAX_SINGLE_ALLOC: usize = 2048;
/// Largest total outstanding allocation across the whole driver.
pub const MAX_TOTAL_ALLOC: usize = 32768;

/// The sole owner of the driver's dynamic-memory budget.
///
/// Shared via `Arc` with every [`FrameBuffer`] it hands out so that
/// dropping a buffer releases its reservation without the dropper needing
/// a reference back to the orchestrator.
pub struct Accountant {
    allocated: Mutex<Cell<usize>>,
}

impl Accountant {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            allocated: Mutex::new(Cell::new(0)),
        })
    }

    /// Reserves `size` bytes and returns a zero-filled buffer, or `None` if
    /// the per-allocation or total cap would be exceeded.
    pub fn try_alloc(self: &Arc<Self>, size: usize) -> Option<FrameBuffer> {
        if size > MAX_SINGLE_ALLOC {
            return None;
        }
        let admitted = critical_section::with(|cs| {
            let cell = self.allocated.borrow(cs);
            let current = cell.get();
            if current + size > MAX_TOTAL_ALLOC {
                false
            } else {
                cell.set(current + size);
                true
            }
        });
        if !admitted {
            return None;
        }
        let accountant: Arc<dyn MemoryAccount + Send + Sync> = self.clone();
        Some(FrameBuffer::new(vec![0u8; size], accountant))
    }

    pub fn currently_allocated(&self) -> usize {
        critical_section::with(|cs| self.allocated.borrow(cs).get())
    }
}

impl MemoryAccount for Accountant {
    fn release(&self, size: usize) {
        critical_section::with(|cs| {
            let cell = self.allocated.borrow(cs);
            cell.set(cell.get().saturating_sub(size));
        });
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn rejects_single_allocation_over_cap() {
        let acc = Accountant::new();
        assert!(acc.try_alloc(MAX_SINGLE_ALLOC + 1).is_none());
    }

    #[test]
    fn rejects_once_total_cap_exceeded() {
        let acc = Accountant::new();
        let mut held = alloc::vec::Vec::new();
        while acc.currently_allocated() + MAX_SINGLE_ALLOC <= MAX_TOTAL_ALLOC {
            held.push(acc.try_alloc(MAX_SINGLE_ALLOC).expect("should admit"));
        }
        assert!(acc.try_alloc(1).is_none());
    }

    #[test]
    fn freeing_restores_capacity() {
        let acc = Accountant::new();
        let buf = acc.try_alloc(1024).expect("should admit");
        assert_eq!(acc.currently_allocated(), 1024);
        drop(buf);
        assert_eq!(acc.currently_allocated(), 0);
    }

    #[test]
    fn release_never_underflows() {
        let acc = Accountant::new();
        acc.release(100);
        assert_eq!(acc.currently_allocated(), 0);
    }
}
