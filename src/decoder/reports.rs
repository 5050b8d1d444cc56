//! Autonomous status reports pushed by the module, ported from
//! `DecodedReport` and the `ctrl==0x80`/`ctrl==UOF_REPORT_CTRL` branches of
//! `app_mmwave_decoder_process_frame`.

use crate::constants::{MotionInfo, PresenceInfo, ProximityInfo};

/// One autonomous report decoded from an inbound frame.
#[derive(Debug, Clone, Copy, PartialEq, defmt::Format)]
pub enum Report {
    /// The module finished its own boot-time initialization.
    InitCompleted,
    Presence(PresenceInfo),
    Motion(MotionInfo),
    /// Raw body-movement-parameter byte; the original never decoded this
    /// further than a pass-through value.
    BodyMovementParameter(u8),
    Proximity(ProximityInfo),
    /// The combined existence/motion report emitted under the UOF profile.
    Uof(UofReport),
}

/// Existence/motion energies and ranging figures carried by a
/// `UOF_REPORT_CTRL` frame. Distance and speed fields are `None` when the
/// module reports a code this decoder does not recognize, matching the
/// original's switch statements leaving the corresponding float unset.
#[derive(Debug, Clone, Copy, PartialEq, defmt::Format)]
pub struct UofReport {
    pub existence_energy: u8,
    pub static_distance_m: Option<f32>,
    pub motion_energy: u8,
    pub motion_distance_m: Option<f32>,
    pub motion_speed_m_per_s: Option<f32>,
}

/// `data[3]` of a UOF report -> static distance in metres. Ported from the
/// `switch` in `app_mmwave_decoder_process_frame` (codes `0x01..=0x06`,
/// 0.5 m steps starting at 0.5 m).
pub(super) fn static_distance_m(code: u8) -> Option<f32> {
    match code {
        0x01..=0x06 => Some(code as f32 * 0.5),
        _ => None,
    }
}

/// `data[5]` of a UOF report -> motion distance in metres. Codes
/// `0x01..=0x08`, 0.5 m steps starting at 0.5 m.
pub(super) fn motion_distance_m(code: u8) -> Option<f32> {
    match code {
        0x01..=0x08 => Some(code as f32 * 0.5),
        _ => None,
    }
}

/// `data[6]` of a UOF report -> motion speed in m/s. Codes `0x01..=0x14`
/// span -4.5 m/s to +5.0 m/s in 0.5 m/s steps, centred so that `0x0a` is
/// 0 m/s.
pub(super) fn motion_speed_m_per_s(code: u8) -> Option<f32> {
    match code {
        0x01..=0x14 => Some((code as f32 - 10.0) * 0.5),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_distance_steps_by_half_metre() {
        assert_eq!(static_distance_m(0x01), Some(0.5));
        assert_eq!(static_distance_m(0x06), Some(3.0));
        assert_eq!(static_distance_m(0x07), None);
    }

    #[test]
    fn motion_speed_centres_on_zero_at_0x0a() {
        assert_eq!(motion_speed_m_per_s(0x0a), Some(0.0));
        assert_eq!(motion_speed_m_per_s(0x01), Some(-4.5));
        assert_eq!(motion_speed_m_per_s(0x14), Some(5.0));
        assert_eq!(motion_speed_m_per_s(0x15), None);
    }
}
