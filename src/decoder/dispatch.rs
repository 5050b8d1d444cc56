//! Semantic frame dispatch, ported from `app_mmwave_decoder_process_frame`.
//!
//! A decoded frame is `[ctrl, cmd, payload...]`, exactly what
//! [`crate::protocol::FrameParser`] hands to its sink. A frame may in
//! principle decode to both a report and a response, though no (CTRL, CMD)
//! pair the module actually emits does both.

use crate::constants::*;

use super::reports::{motion_distance_m, motion_speed_m_per_s, static_distance_m, Report, UofReport};
use super::responses::{Response, ResponseKind};

/// Decodes one semantic frame into at most one autonomous report and at
/// most one inquiry response. Frames shorter than 2 bytes (missing CTRL or
/// CMD) decode to nothing, matching the original's `data_len >= 2` guard.
pub fn process_frame(frame: &[u8]) -> (Option<Report>, Option<Response>) {
    if frame.len() < 2 {
        return (None, None);
    }
    let ctrl = frame[0];
    let cmd = frame[1];
    let payload = &frame[2..];
    (
        decode_report(ctrl, cmd, payload),
        decode_response(ctrl, cmd, payload),
    )
}

fn decode_report(ctrl: u8, cmd: u8, payload: &[u8]) -> Option<Report> {
    let payload_len = payload.len();
    if ctrl == INIT_COMPL_INFO_CTRL && cmd == INIT_COMPL_INFO_CMD {
        return Some(Report::InitCompleted);
    }
    if ctrl == PRESENCE_INFO_CTRL && cmd == PRESENCE_INFO_CMD && payload_len == 1 {
        return PresenceInfo::from_u8(payload[0]).map(Report::Presence);
    }
    if ctrl == MOTION_INFO_CTRL && cmd == MOTION_INFO_CMD && payload_len == 1 {
        return MotionInfo::from_u8(payload[0]).map(Report::Motion);
    }
    if ctrl == BMP_INFO_CTRL && cmd == BMP_INFO_CMD && payload_len == 1 {
        return Some(Report::BodyMovementParameter(payload[0]));
    }
    if ctrl == PROXIMITY_INFO_CTRL && cmd == PROXIMITY_INFO_CMD && payload_len == 1 {
        return ProximityInfo::from_u8(payload[0]).map(Report::Proximity);
    }
    if ctrl == UOF_REPORT_CTRL && cmd == UOF_REPORT_CMD && payload_len == UOF_REPORT_LEN {
        return Some(Report::Uof(UofReport {
            existence_energy: payload[0],
            static_distance_m: static_distance_m(payload[1]),
            motion_energy: payload[2],
            motion_distance_m: motion_distance_m(payload[3]),
            motion_speed_m_per_s: motion_speed_m_per_s(payload[4]),
        }));
    }
    None
}

/// `(CTRL, CMD) -> (response tag, expected payload length)`. Every entry
/// here mirrors one independent `if` block in the original decoder; the
/// pairs are unique across the whole wire protocol so collapsing them into
/// one match changes nothing observable.
fn decode_response(ctrl: u8, cmd: u8, payload: &[u8]) -> Option<Response> {
    let (kind, expected_len) = match (ctrl, cmd) {
        (HEARTBEAT_CTRL, HEARTBEAT_CMD) => (ResponseKind::Heartbeat, 1),
        (MODULE_RESET_CTRL, MODULE_RESET_CMD) => (ResponseKind::ModuleReset, 1),
        (PR_MODEL_CTRL, PR_MODEL_CMD) => (ResponseKind::ProductModel, 1),
        (PR_ID_CTRL, PR_ID_CMD) => (ResponseKind::ProductId, 1),
        (HW_MODEL_CTRL, HW_MODEL_CMD) => (ResponseKind::HardwareModel, 1),
        (FW_VERSION_CTRL, FW_VERSION_CMD) => (ResponseKind::FirmwareVersion, 1),
        (SCENE_SETTINGS_CTRL, SCENE_SETTINGS_CMD) => (ResponseKind::SceneSettings, 1),
        (SCENE_SETTINGS_I_CTRL, SCENE_SETTINGS_I_CMD) => (ResponseKind::SceneSettingsI, 1),
        (SENSITIVITY_SETTINGS_I_CTRL, SENSITIVITY_SETTINGS_I_CMD) => (ResponseKind::SensitivityI, 1),
        (SENSITIVITY_SETTINGS_CTRL, SENSITIVITY_SETTINGS_CMD) => (ResponseKind::Sensitivity, 1),
        (PRESENCE_INFO_I_CTRL, PRESENCE_INFO_I_CMD) => (ResponseKind::Presence, 1),
        (MOTION_INFO_I_CTRL, MOTION_INFO_I_CMD) => (ResponseKind::Motion, 1),
        (BMP_INFO_I_CTRL, BMP_INFO_I_CMD) => (ResponseKind::Bmp, 1),
        (TIME_FOR_NO_PERSON_I_CTRL, TIME_FOR_NO_PERSON_I_CMD) => (ResponseKind::TimeForNoPersonI, 1),
        (TIME_FOR_NO_PERSON_SETTING_CTRL, TIME_FOR_NO_PERSON_SETTING_CMD) => {
            (ResponseKind::TimeForNoPerson, 1)
        }
        (PROXIMITY_INFO_I_CTRL, PROXIMITY_INFO_I_CMD) => (ResponseKind::Proximity, 1),
        (UOF_OUTPUT_SWITCH_CTRL, UOF_OUTPUT_SWITCH_CMD) => (ResponseKind::OutputSwitch, 1),
        (UOF_OUTPUT_SWITCH_I_CTRL, UOF_OUTPUT_SWITCH_I_CMD) => (ResponseKind::OutputSwitchI, 1),
        (UOF_EXISTENCE_ENERGY_I_CTRL, UOF_EXISTENCE_ENERGY_I_CMD) => (ResponseKind::ExistenceEnergy, 1),
        (UOF_MOTION_ENERGY_I_CTRL, UOF_MOTION_ENERGY_I_CMD) => (ResponseKind::MotionEnergy, 1),
        (UOF_STATIC_DISTANCE_I_CTRL, UOF_STATIC_DISTANCE_I_CMD) => (ResponseKind::StaticDistance, 1),
        (UOF_MOTION_DISTANCE_I_CTRL, UOF_MOTION_DISTANCE_I_CMD) => (ResponseKind::MotionDistance, 1),
        (UOF_MOTION_SPEED_I_CTRL, UOF_MOTION_SPEED_I_CMD) => (ResponseKind::MotionSpeed, 1),
        (CM_SETTING_CTRL, CM_SETTING_CMD) => (ResponseKind::CustomMode, 1),
        (CM_SETTING_END_CTRL, CM_SETTING_END_CMD) => (ResponseKind::CustomModeEnd, 1),
        (CM_Q_CTRL, CM_Q_CMD) => (ResponseKind::CustomModeI, 1),
        (CM_UOF_EXISTENCE_JUDGMENT_THRESH_I_CTRL, CM_UOF_EXISTENCE_JUDGMENT_THRESH_I_CMD) => {
            (ResponseKind::ExistenceJudgmentThreshI, 1)
        }
        (CM_UOF_MOTION_TRIGGER_THRESH_I_CTRL, CM_UOF_MOTION_TRIGGER_THRESH_I_CMD) => {
            (ResponseKind::MotionTriggerThreshI, 1)
        }
        (CM_UOF_EXISTENCE_PERCEPTION_BOUND_I_CTRL, CM_UOF_EXISTENCE_PERCEPTION_BOUND_I_CMD) => {
            (ResponseKind::ExistencePerceptionBoundI, 1)
        }
        (CM_UOF_MOTION_TRIGGER_BOUND_I_CTRL, CM_UOF_MOTION_TRIGGER_BOUND_I_CMD) => {
            (ResponseKind::MotionTriggerBoundI, 1)
        }
        (CM_UOF_MOTION_TRIGGER_TIME_I_CTRL, CM_UOF_MOTION_TRIGGER_TIME_I_CMD) => {
            (ResponseKind::MotionTriggerTimeI, 1)
        }
        (CM_UOF_MOTION_TO_STILL_TIME_I_CTRL, CM_UOF_MOTION_TO_STILL_TIME_I_CMD) => {
            (ResponseKind::MotionToStillTimeI, 1)
        }
        (CM_UOF_TIME_FOR_NO_PERSON_I_CTRL, CM_UOF_TIME_FOR_NO_PERSON_I_CMD) => {
            (ResponseKind::CmTimeForNoPersonI, 1)
        }
        (CM_EXISTENCE_JUDGMENT_THRESH_CTRL, CM_EXISTENCE_JUDGMENT_THRESH_CMD) => {
            (ResponseKind::ExistenceJudgmentThresh, 1)
        }
        (CM_MOTION_TRIGGER_THRESH_CTRL, CM_MOTION_TRIGGER_THRESH_CMD) => {
            (ResponseKind::MotionTriggerThresh, 1)
        }
        (CM_EXISTENCE_PERCEPTION_BOUND_CTRL, CM_EXISTENCE_PERCEPTION_BOUND_CMD) => {
            (ResponseKind::ExistencePerceptionBound, 1)
        }
        (CM_MOTION_TRIGGER_BOUND_CTRL, CM_MOTION_TRIGGER_BOUND_CMD) => {
            (ResponseKind::MotionTriggerBound, 1)
        }
        // These three carry a 4-byte little/big-endian time value rather
        // than a single status byte; everything else on the wire is 1 byte.
        (CM_MOTION_TRIGGER_TIME_CTRL, CM_MOTION_TRIGGER_TIME_CMD) => (ResponseKind::MotionTriggerTime, 4),
        (CM_MOTION_TO_STILL_TIME_CTRL, CM_MOTION_TO_STILL_TIME_CMD) => {
            (ResponseKind::MotionToStillTime, 4)
        }
        (CM_TIME_FOR_NO_PERSON_CTRL, CM_TIME_FOR_NO_PERSON_CMD) => {
            (ResponseKind::CmTimeForNoPerson, 4)
        }
        _ => return None,
    };
    if payload.len() != expected_len {
        return None;
    }
    Response::new(kind, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heartbeat_decodes_to_response_only() {
        let (report, response) = process_frame(&[HEARTBEAT_CTRL, HEARTBEAT_CMD, INQUIRY_SENTINEL]);
        assert!(report.is_none());
        let response = response.expect("heartbeat should decode");
        assert_eq!(response.kind, ResponseKind::Heartbeat);
        assert_eq!(response.data.as_slice(), &[INQUIRY_SENTINEL]);
    }

    #[test]
    fn presence_occupied_decodes_to_report_only() {
        let (report, response) = process_frame(&[PRESENCE_INFO_CTRL, PRESENCE_INFO_CMD, 0x01]);
        assert_eq!(report, Some(Report::Presence(PresenceInfo::Occupied)));
        assert!(response.is_none());
    }

    #[test]
    fn uof_report_decodes_energies_and_distances() {
        let frame = [UOF_REPORT_CTRL, UOF_REPORT_CMD, 0x55, 0x02, 0x2A, 0x04, 0x0a];
        let (report, _) = process_frame(&frame);
        match report {
            Some(Report::Uof(uof)) => {
                assert_eq!(uof.existence_energy, 0x55);
                assert_eq!(uof.static_distance_m, Some(1.0));
                assert_eq!(uof.motion_energy, 0x2A);
                assert_eq!(uof.motion_distance_m, Some(2.0));
                assert_eq!(uof.motion_speed_m_per_s, Some(0.0));
            }
            other => panic!("expected UOF report, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_ctrl_cmd_decodes_to_nothing() {
        let (report, response) = process_frame(&[0xFF, 0xFF, 0x00]);
        assert!(report.is_none());
        assert!(response.is_none());
    }

    #[test]
    fn oversized_response_payload_is_dropped() {
        let mut frame = alloc::vec![CM_MOTION_TRIGGER_TIME_CTRL, CM_MOTION_TRIGGER_TIME_CMD];
        frame.extend_from_slice(&[0u8; 5]); // one byte too many for the 4-byte field
        let (_, response) = process_frame(&frame);
        assert!(response.is_none());
    }
}
