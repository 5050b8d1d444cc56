//! Frame construction for outbound inquiries.

use super::frame::{checksum, F1, F2, H1, H2};
use super::sink::{FrameBuffer, FrameSink};

/// Builds a complete on-wire frame for `(ctrl, cmd, payload)` using memory
/// reserved from `sink`. Mirrors `mmwave_build_frame` byte-for-byte.
pub fn build_frame<S: FrameSink>(
    sink: &S,
    payload: &[u8],
    ctrl: u8,
    cmd: u8,
) -> Option<FrameBuffer> {
    let mut frame = sink.alloc(payload.len() + 9)?;
    let len_hi = ((payload.len() >> 8) & 0xFF) as u8;
    let len_lo = (payload.len() & 0xFF) as u8;
    {
        let buf = frame.as_mut_slice();
        buf[0] = H1;
        buf[1] = H2;
        buf[2] = ctrl;
        buf[3] = cmd;
        buf[4] = len_hi;
        buf[5] = len_lo;
        buf[6..6 + payload.len()].copy_from_slice(payload);
        buf[6 + payload.len()] = checksum(&buf[..6], payload);
        buf[7 + payload.len()] = F1;
        buf[8 + payload.len()] = F2;
    }
    Some(frame)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::protocol::MemoryAccount;
    use alloc::sync::Arc;
    use alloc::vec;

    struct NullAccount;
    impl MemoryAccount for NullAccount {
        fn release(&self, _size: usize) {}
    }

    struct TestSink;
    impl FrameSink for TestSink {
        fn alloc(&self, size: usize) -> Option<FrameBuffer> {
            Some(FrameBuffer::new(vec![0u8; size], Arc::new(NullAccount)))
        }
        async fn save_frame(&self, _frame: FrameBuffer) -> bool {
            true
        }
    }

    #[test]
    fn heartbeat_frame_matches_known_bytes() {
        let sink = TestSink;
        let frame = build_frame(&sink, &[0x0F], 0x01, 0x01).expect("alloc");
        assert_eq!(
            frame.as_slice(),
            &[0x53, 0x59, 0x01, 0x01, 0x00, 0x01, 0x0F, 0xBE, 0x54, 0x43]
        );
    }

    #[test]
    fn zero_length_payload_builds_nine_byte_frame() {
        let sink = TestSink;
        let frame = build_frame(&sink, &[], 0x01, 0x01).expect("alloc");
        assert_eq!(frame.len(), 9);
    }
}
