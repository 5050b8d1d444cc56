//! The codec↔HAL ownership boundary.
//!
//! The original C core held three raw function pointers (`alloc_mem`,
//! `free_mem`, `mmwave_save_frame`) bound once via `mmwave_core_bind_callbacks`.
//! Here that boundary is a single trait the HAL implements and the parser
//! and builder borrow per call, and "free_mem" is replaced entirely by
//! [`FrameBuffer`]'s `Drop` impl — there is no reachable state where a
//! buffer is allocated but nobody is responsible for freeing it.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Deref;

/// Anything that can account for a released allocation. Implemented by
/// `hal::memory::Accountant`; kept as a trait here so the protocol layer
/// does not need to depend on the HAL layer.
pub trait MemoryAccount {
    fn release(&self, size: usize);
}

/// An owned, length-accounted frame buffer.
///
/// Moves along the pipeline (codec → HAL queue → decoder task) exactly
/// once; there is never more than one owner. Dropping it releases its
/// reservation against the accountant it was allocated from.
pub struct FrameBuffer {
    data: Vec<u8>,
    accountant: Arc<dyn MemoryAccount + Send + Sync>,
}

impl FrameBuffer {
    pub fn new(data: Vec<u8>, accountant: Arc<dyn MemoryAccount + Send + Sync>) -> Self {
        Self { data, accountant }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Deref for FrameBuffer {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl Drop for FrameBuffer {
    fn drop(&mut self) {
        self.accountant.release(self.data.len());
    }
}

/// The codec's allocation and frame-delivery boundary, implemented by the
/// HAL orchestrator.
pub trait FrameSink {
    /// Reserves `size` bytes against the accountant and returns an owned
    /// buffer of that length, zero-filled. `None` means the accountant
    /// refused the allocation (per-allocation cap or total cap exceeded).
    fn alloc(&self, size: usize) -> Option<FrameBuffer>;

    /// Hands a fully parsed frame to the HAL. Ownership of `frame` passes
    /// in; `false` means the HAL's queue was full, in which case the HAL
    /// has already dropped `frame` (releasing its accounting) before
    /// returning.
    async fn save_frame(&self, frame: FrameBuffer) -> bool;
}
