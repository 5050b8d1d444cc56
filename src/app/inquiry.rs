//! Host-initiated inquiry surface, ported function-for-function from
//! `app_mmwave.c`. Every argument-less inquiry sends a single
//! [`INQUIRY_SENTINEL`] byte, matching the original's `*_DATA` constants
//! (all `0x0F`).
//!
//! Enum-typed arguments (`SceneMode`, `SensitivityLevel`, ...) replace the
//! original's runtime `if (x != 0x01 && x != 0x02 && ...)` domain checks —
//! an invalid discriminant simply cannot be constructed, so only inquiries
//! that take a plain integer still validate a range here.

use crate::constants::*;
use crate::error::DriverError;
use crate::platform::RadarUart;

use super::manager::ApplicationManager;
use super::Mode;

impl<U: RadarUart> ApplicationManager<U> {
    fn reject_in_uof(&self) -> Result<(), DriverError> {
        if self.get_mode() == Mode::UnderlyingOpen {
            return Err(DriverError::BadMode);
        }
        Ok(())
    }

    fn reject_in_standard(&self) -> Result<(), DriverError> {
        if self.get_mode() == Mode::Standard {
            return Err(DriverError::BadMode);
        }
        Ok(())
    }

    pub async fn inquiry_heartbeat(&self) -> Result<(), DriverError> {
        self.send_inquiry(&[INQUIRY_SENTINEL], HEARTBEAT_CTRL, HEARTBEAT_CMD).await
    }

    pub async fn inquiry_module_reset(&self) -> Result<(), DriverError> {
        self.send_inquiry(&[INQUIRY_SENTINEL], MODULE_RESET_CTRL, MODULE_RESET_CMD).await
    }

    pub async fn inquiry_product_model(&self) -> Result<(), DriverError> {
        self.send_inquiry(&[INQUIRY_SENTINEL], PR_MODEL_CTRL, PR_MODEL_CMD).await
    }

    pub async fn inquiry_product_id(&self) -> Result<(), DriverError> {
        self.send_inquiry(&[INQUIRY_SENTINEL], PR_ID_CTRL, PR_ID_CMD).await
    }

    pub async fn inquiry_hardware_model(&self) -> Result<(), DriverError> {
        self.send_inquiry(&[INQUIRY_SENTINEL], HW_MODEL_CTRL, HW_MODEL_CMD).await
    }

    pub async fn inquiry_firmware_version(&self) -> Result<(), DriverError> {
        self.send_inquiry(&[INQUIRY_SENTINEL], FW_VERSION_CTRL, FW_VERSION_CMD).await
    }

    pub async fn inquiry_scene_settings_set(&self, scene: SceneMode) -> Result<(), DriverError> {
        self.send_inquiry(&[scene as u8], SCENE_SETTINGS_CTRL, SCENE_SETTINGS_CMD).await
    }

    pub async fn inquiry_scene_settings_get(&self) -> Result<(), DriverError> {
        self.send_inquiry(&[INQUIRY_SENTINEL], SCENE_SETTINGS_CTRL, SCENE_SETTINGS_I_CMD).await
    }

    pub async fn inquiry_sensitivity_settings_set(
        &self,
        sensitivity: SensitivityLevel,
    ) -> Result<(), DriverError> {
        self.send_inquiry(
            &[sensitivity as u8],
            SENSITIVITY_SETTINGS_CTRL,
            SENSITIVITY_SETTINGS_CMD,
        )
        .await
    }

    pub async fn inquiry_sensitivity_settings_get(&self) -> Result<(), DriverError> {
        self.send_inquiry(
            &[INQUIRY_SENTINEL],
            SENSITIVITY_SETTINGS_I_CTRL,
            SENSITIVITY_SETTINGS_I_CMD,
        )
        .await
    }

    pub async fn inquiry_presence(&self) -> Result<(), DriverError> {
        self.reject_in_uof()?;
        self.send_inquiry(&[INQUIRY_SENTINEL], PRESENCE_INFO_I_CTRL, PRESENCE_INFO_I_CMD).await
    }

    pub async fn inquiry_motion(&self) -> Result<(), DriverError> {
        self.reject_in_uof()?;
        self.send_inquiry(&[INQUIRY_SENTINEL], MOTION_INFO_I_CTRL, MOTION_INFO_I_CMD).await
    }

    pub async fn inquiry_bmp(&self) -> Result<(), DriverError> {
        self.reject_in_uof()?;
        self.send_inquiry(&[INQUIRY_SENTINEL], BMP_INFO_I_CTRL, BMP_INFO_I_CMD).await
    }

    /// Carries the original's `CM_TIME_FOR_NO_PERSON_CTRL` /
    /// `TIME_FOR_NO_PERSON_SETTING_CMD` pairing forward unchanged even
    /// though every sibling "set" inquiry keeps CTRL and CMD on the same
    /// defined pair — see SPEC_FULL.md Design Notes (left as-is, treated as
    /// a genuine wire quirk rather than a typo, since the original's
    /// `TIME_FOR_NO_PERSON_SETTING_CTRL` constant is never used elsewhere).
    pub async fn inquiry_time_for_no_person_set(
        &self,
        time: TimeForNoPerson,
    ) -> Result<(), DriverError> {
        self.reject_in_uof()?;
        self.send_inquiry(&[time as u8], CM_TIME_FOR_NO_PERSON_CTRL, TIME_FOR_NO_PERSON_SETTING_CMD)
            .await
    }

    pub async fn inquiry_time_for_no_person_get(&self) -> Result<(), DriverError> {
        self.reject_in_uof()?;
        self.send_inquiry(&[INQUIRY_SENTINEL], TIME_FOR_NO_PERSON_I_CTRL, TIME_FOR_NO_PERSON_I_CMD)
            .await
    }

    pub async fn inquiry_proximity(&self) -> Result<(), DriverError> {
        self.reject_in_uof()?;
        self.send_inquiry(&[INQUIRY_SENTINEL], PROXIMITY_INFO_I_CTRL, PROXIMITY_INFO_I_CMD).await
    }

    /// Also switches [`Mode`] the same way the original calls `app_set_mode`
    /// as a side effect of toggling the output switch: `Off` selects
    /// Standard, `On` selects UOF.
    pub async fn inquiry_uof_output_switch_set(&self, option: OutputSwitch) -> Result<(), DriverError> {
        let mode = match option {
            OutputSwitch::Off => Mode::Standard,
            OutputSwitch::On => Mode::UnderlyingOpen,
        };
        let _ = self.set_mode(mode);
        self.send_inquiry(&[option as u8], UOF_OUTPUT_SWITCH_CTRL, UOF_OUTPUT_SWITCH_CMD).await
    }

    pub async fn inquiry_uof_output_switch_get(&self) -> Result<(), DriverError> {
        self.send_inquiry(&[INQUIRY_SENTINEL], UOF_OUTPUT_SWITCH_I_CTRL, UOF_OUTPUT_SWITCH_I_CMD)
            .await
    }

    pub async fn inquiry_existence_energy(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(
            &[INQUIRY_SENTINEL],
            UOF_EXISTENCE_ENERGY_I_CTRL,
            UOF_EXISTENCE_ENERGY_I_CMD,
        )
        .await
    }

    pub async fn inquiry_motion_energy(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(&[INQUIRY_SENTINEL], UOF_MOTION_ENERGY_I_CTRL, UOF_MOTION_ENERGY_I_CMD)
            .await
    }

    pub async fn inquiry_static_distance(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(
            &[INQUIRY_SENTINEL],
            UOF_STATIC_DISTANCE_I_CTRL,
            UOF_STATIC_DISTANCE_I_CMD,
        )
        .await
    }

    pub async fn inquiry_motion_distance(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(
            &[INQUIRY_SENTINEL],
            UOF_MOTION_DISTANCE_I_CTRL,
            UOF_MOTION_DISTANCE_I_CMD,
        )
        .await
    }

    pub async fn inquiry_motion_speed(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(&[INQUIRY_SENTINEL], UOF_MOTION_SPEED_I_CTRL, UOF_MOTION_SPEED_I_CMD)
            .await
    }

    pub async fn inquiry_cm_set(&self, mode_num: CustomMode) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(&[mode_num as u8], CM_SETTING_CTRL, CM_SETTING_CMD).await
    }

    pub async fn inquiry_cm_get(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(&[INQUIRY_SENTINEL], CM_Q_CTRL, CM_Q_CMD).await
    }

    pub async fn inquiry_cm_end(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(&[INQUIRY_SENTINEL], CM_SETTING_END_CTRL, CM_SETTING_END_CMD).await
    }

    pub async fn inquiry_cm_existence_judgment_thresh_set(
        &self,
        thresh: u8,
    ) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        if thresh > 250 {
            return Err(DriverError::BadArgument);
        }
        self.send_inquiry(
            &[thresh],
            CM_EXISTENCE_JUDGMENT_THRESH_CTRL,
            CM_EXISTENCE_JUDGMENT_THRESH_CMD,
        )
        .await
    }

    pub async fn inquiry_cm_existence_judgment_thresh_get(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(
            &[INQUIRY_SENTINEL],
            CM_UOF_EXISTENCE_JUDGMENT_THRESH_I_CTRL,
            CM_UOF_EXISTENCE_JUDGMENT_THRESH_I_CMD,
        )
        .await
    }

    pub async fn inquiry_cm_motion_trigger_thresh_set(&self, thresh: u8) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        if thresh > 250 {
            return Err(DriverError::BadArgument);
        }
        self.send_inquiry(&[thresh], CM_MOTION_TRIGGER_THRESH_CTRL, CM_MOTION_TRIGGER_THRESH_CMD)
            .await
    }

    pub async fn inquiry_cm_motion_trigger_thresh_get(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(
            &[INQUIRY_SENTINEL],
            CM_UOF_MOTION_TRIGGER_THRESH_I_CTRL,
            CM_UOF_MOTION_TRIGGER_THRESH_I_CMD,
        )
        .await
    }

    pub async fn inquiry_cm_existence_perception_bound_set(
        &self,
        bound: ExistencePerceptionBound,
    ) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(
            &[bound as u8],
            CM_EXISTENCE_PERCEPTION_BOUND_CTRL,
            CM_EXISTENCE_PERCEPTION_BOUND_CMD,
        )
        .await
    }

    pub async fn inquiry_cm_existence_perception_bound_get(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(
            &[INQUIRY_SENTINEL],
            CM_UOF_EXISTENCE_PERCEPTION_BOUND_I_CTRL,
            CM_UOF_EXISTENCE_PERCEPTION_BOUND_I_CMD,
        )
        .await
    }

    pub async fn inquiry_cm_motion_trigger_bound_set(
        &self,
        bound: MotionTriggerBound,
    ) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(&[bound as u8], CM_MOTION_TRIGGER_BOUND_CTRL, CM_MOTION_TRIGGER_BOUND_CMD)
            .await
    }

    pub async fn inquiry_cm_motion_trigger_bound_get(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(
            &[INQUIRY_SENTINEL],
            CM_UOF_MOTION_TRIGGER_BOUND_I_CTRL,
            CM_UOF_MOTION_TRIGGER_BOUND_I_CMD,
        )
        .await
    }

    pub async fn inquiry_cm_motion_trigger_time_set(&self, time_in_ms: i32) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        if !(0..=1000).contains(&time_in_ms) {
            return Err(DriverError::BadArgument);
        }
        self.send_inquiry(
            &time_in_ms.to_be_bytes(),
            CM_MOTION_TRIGGER_TIME_CTRL,
            CM_MOTION_TRIGGER_TIME_CMD,
        )
        .await
    }

    pub async fn inquiry_cm_motion_trigger_time_get(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(
            &[INQUIRY_SENTINEL],
            CM_UOF_MOTION_TRIGGER_TIME_I_CTRL,
            CM_UOF_MOTION_TRIGGER_TIME_I_CMD,
        )
        .await
    }

    pub async fn inquiry_cm_motion_to_still_time_set(&self, time_in_ms: i32) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        if !(1000..=60000).contains(&time_in_ms) {
            return Err(DriverError::BadArgument);
        }
        self.send_inquiry(
            &time_in_ms.to_be_bytes(),
            CM_MOTION_TO_STILL_TIME_CTRL,
            CM_MOTION_TO_STILL_TIME_CMD,
        )
        .await
    }

    pub async fn inquiry_cm_motion_to_still_time_get(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(
            &[INQUIRY_SENTINEL],
            CM_UOF_MOTION_TO_STILL_TIME_I_CTRL,
            CM_UOF_MOTION_TO_STILL_TIME_I_CMD,
        )
        .await
    }

    pub async fn inquiry_cm_time_for_no_person_set(&self, time_in_ms: i32) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        if !(0..=3_600_000).contains(&time_in_ms) {
            return Err(DriverError::BadArgument);
        }
        self.send_inquiry(
            &time_in_ms.to_be_bytes(),
            CM_TIME_FOR_NO_PERSON_CTRL,
            CM_TIME_FOR_NO_PERSON_CMD,
        )
        .await
    }

    pub async fn inquiry_cm_time_for_no_person_get(&self) -> Result<(), DriverError> {
        self.reject_in_standard()?;
        self.send_inquiry(
            &[INQUIRY_SENTINEL],
            CM_UOF_TIME_FOR_NO_PERSON_I_CTRL,
            CM_UOF_TIME_FOR_NO_PERSON_I_CMD,
        )
        .await
    }
}
