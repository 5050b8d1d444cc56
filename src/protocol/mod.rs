//! Streaming byte-level frame codec for the module's wire protocol.
//!
//! Not thread-safe: a `FrameParser` is meant to live as a local variable of
//! the single task that owns the UART RX path (see
//! [`crate::hal::HalOrchestrator::rx_task_loop`]). Ownership of a decoded
//! frame passes to the [`FrameSink`] on completion.

mod builder;
mod frame;
mod parser;
mod sink;

pub use builder::build_frame;
pub use frame::{F1, F2, H1, H2};
pub use parser::{FrameParser, ParseOutcome};
pub use sink::{FrameBuffer, FrameSink, MemoryAccount};

/// Starting size of the parser's adaptive building buffer.
pub const STARTING_PARSER_BUFFER_SIZE: usize = 20;
/// Hard ceiling on the parser's adaptive building buffer.
pub const MAX_PARSER_BUFFER_SIZE: usize = 65535 + 9;
