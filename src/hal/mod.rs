//! HAL orchestration layer: lifecycle state machine, RX/TX worker tasks,
//! and the bounded memory accountant. The sole caller of the protocol
//! codec and the sole owner of dynamic memory (besides `app`'s transient
//! deep copies).

pub mod memory;
mod orchestrator;

pub use memory::Accountant;
pub use orchestrator::{HalOrchestrator, HalState};

/// Capacity of both the frame queue and the TX queue.
pub const MAX_FRAMES_IN_QUEUE: usize = 40;

/// Convenience alias for the channel type board crates must allocate
/// `'static` storage for (e.g. via `static_cell::StaticCell`) and pass to
/// [`HalOrchestrator::new`].
pub type FrameChannel = embassy_sync::channel::Channel<
    embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex,
    crate::protocol::FrameBuffer,
    MAX_FRAMES_IN_QUEUE,
>;
