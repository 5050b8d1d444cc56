//! Driver-wide error taxonomy.

/// Every fallible public entry point in this crate returns `Result<T, DriverError>`.
///
/// Protocol-level faults (bad checksum, bad footer, length mismatch) never
/// reach this type: they are recovered locally by the parser and surface
/// only as absence of a decoded frame. See `protocol::ParseOutcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum DriverError {
    /// Lifecycle guard rejected the call from the current state.
    InvalidState,
    /// Value outside its declared domain.
    BadArgument,
    /// Operation forbidden in the current operating mode.
    BadMode,
    /// Allocation refused by the memory accountant or the platform.
    MemoryFault,
    /// A bounded queue refused the item within its timeout.
    QueueFull,
    /// A bounded wait elapsed without the expected event.
    Timeout,
    /// The underlying UART or task API reported a failure.
    PlatformFault,
}
