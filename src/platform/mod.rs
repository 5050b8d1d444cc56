//! The platform facade contract: everything the HAL orchestrator needs from
//! the embedding board crate, collapsed into one trait plus the standard
//! embassy primitives (queues, mutexes, tasks, clock) used directly rather
//! than wrapped, since those already have idiomatic `no_std` APIs.
//!
//! Implementing this trait and wiring board-specific UART peripherals is
//! explicitly out of scope for this crate.

/// One event surfaced by the platform's UART dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum PlatformEvent {
    /// `len` bytes are ready to be read from the RX buffer.
    RxData(usize),
    /// The RX FIFO overflowed; bytes were lost.
    FifoOverflow,
    /// The platform's RX buffer is full.
    BufferFull,
}

/// The UART + event-pump boundary the HAL orchestrator consumes.
///
/// A single `RadarUart` implementation is shared between the RX and TX
/// tasks behind `&'d embassy_sync::mutex::Mutex<_, U>`; every method here
/// therefore takes `&mut self` rather than requiring interior mutability
/// of its own.
pub trait RadarUart {
    type Error: defmt::Format;

    /// Writes `data` to the UART TX line in full.
    async fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Reads up to `buf.len()` bytes already available in the RX buffer.
    /// Returns the number of bytes actually read.
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Suspends until the platform's dispatcher delivers the next event.
    async fn wait_event(&mut self) -> Option<PlatformEvent>;

    /// Enables the RX-full interrupt that feeds `wait_event`.
    fn enable_isr(&mut self) -> Result<(), Self::Error>;

    /// Disables the RX-full interrupt.
    fn disable_isr(&mut self) -> Result<(), Self::Error>;

    /// True once the platform's own event-pump task has drained and ended.
    /// Polled by the HAL's worker tasks as part of the shutdown handshake.
    fn dispatcher_ended(&self) -> bool;

    /// Number of events still queued but not yet delivered through
    /// `wait_event`. Polled by `HalOrchestrator::rx_task_loop` so it does
    /// not exit with events still buffered on shutdown.
    fn pending_events(&self) -> usize;
}
