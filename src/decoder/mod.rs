//! Semantic decoding of wire frames into reports and inquiry responses.
//! Pure, synchronous, and stateless — unlike `protocol` and `hal`, nothing
//! here touches the memory accountant or any queue.

mod dispatch;
mod reports;
mod responses;

pub use dispatch::process_frame;
pub use reports::{Report, UofReport};
pub use responses::{Response, ResponseKind, MAX_RESPONSE_DATA_LEN};
