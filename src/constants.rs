//! Wire-level CTRL/CMD/LEN table and the value enumerations carried in
//! frame payloads, ported in full from the original firmware's constants
//! header. This is the single source of truth both the inquiry dispatcher
//! (`app::inquiry`) and the semantic decoder (`decoder::dispatch`) build on.

/// Fixed sentinel byte used as the payload of every argument-less inquiry.
pub const INQUIRY_SENTINEL: u8 = 0x0F;

pub const HEARTBEAT_CTRL: u8 = 0x01;
pub const HEARTBEAT_CMD: u8 = 0x01;

pub const MODULE_RESET_CTRL: u8 = 0x01;
pub const MODULE_RESET_CMD: u8 = 0x02;

pub const PR_MODEL_CTRL: u8 = 0x02;
pub const PR_MODEL_CMD: u8 = 0xA1;

pub const PR_ID_CTRL: u8 = 0x02;
pub const PR_ID_CMD: u8 = 0xA2;

pub const HW_MODEL_CTRL: u8 = 0x02;
pub const HW_MODEL_CMD: u8 = 0xA3;

pub const FW_VERSION_CTRL: u8 = 0x02;
pub const FW_VERSION_CMD: u8 = 0xA4;

pub const INIT_COMPL_INFO_CTRL: u8 = 0x05;
pub const INIT_COMPL_INFO_CMD: u8 = 0x01;

pub const SCENE_SETTINGS_CTRL: u8 = 0x05;
pub const SCENE_SETTINGS_CMD: u8 = 0x07;

pub const SENSITIVITY_SETTINGS_CTRL: u8 = 0x05;
pub const SENSITIVITY_SETTINGS_CMD: u8 = 0x08;

pub const INIT_STATUS_I_CTRL: u8 = 0x05;
pub const INIT_STATUS_I_CMD: u8 = 0x81;

pub const SCENE_SETTINGS_I_CTRL: u8 = 0x05;
pub const SCENE_SETTINGS_I_CMD: u8 = 0x87;

pub const SENSITIVITY_SETTINGS_I_CTRL: u8 = 0x05;
pub const SENSITIVITY_SETTINGS_I_CMD: u8 = 0x88;

pub const PRESENCE_INFO_CTRL: u8 = 0x80;
pub const PRESENCE_INFO_CMD: u8 = 0x01;

pub const MOTION_INFO_CTRL: u8 = 0x80;
pub const MOTION_INFO_CMD: u8 = 0x02;

pub const BMP_INFO_CTRL: u8 = 0x80;
pub const BMP_INFO_CMD: u8 = 0x03;

pub const TIME_FOR_NO_PERSON_SETTING_CTRL: u8 = 0x80;
pub const TIME_FOR_NO_PERSON_SETTING_CMD: u8 = 0x0A;

pub const PROXIMITY_INFO_CTRL: u8 = 0x80;
pub const PROXIMITY_INFO_CMD: u8 = 0x0B;

pub const PRESENCE_INFO_I_CTRL: u8 = 0x80;
pub const PRESENCE_INFO_I_CMD: u8 = 0x81;

pub const MOTION_INFO_I_CTRL: u8 = 0x80;
pub const MOTION_INFO_I_CMD: u8 = 0x82;

pub const BMP_INFO_I_CTRL: u8 = 0x80;
pub const BMP_INFO_I_CMD: u8 = 0x83;

pub const TIME_FOR_NO_PERSON_I_CTRL: u8 = 0x80;
pub const TIME_FOR_NO_PERSON_I_CMD: u8 = 0x8A;

pub const PROXIMITY_INFO_I_CTRL: u8 = 0x80;
pub const PROXIMITY_INFO_I_CMD: u8 = 0x8B;

/// Reserved, unimplemented per spec Non-goals: no handler dispatches on
/// these, they exist only so the wire constants are documented in one place.
pub const START_UART_UPGRADE_CTRL: u8 = 0x03;
pub const START_UART_UPGRADE_CMD: u8 = 0x01;
pub const UPGRADE_PACKAGE_TRANSMISSION_CTRL: u8 = 0x03;
pub const UPGRADE_PACKAGE_TRANSMISSION_CMD: u8 = 0x02;
pub const ENDING_UART_UPGRADE_CTRL: u8 = 0x03;
pub const ENDING_UART_UPGRADE_CMD: u8 = 0x03;

pub const UOF_OUTPUT_SWITCH_CTRL: u8 = 0x08;
pub const UOF_OUTPUT_SWITCH_CMD: u8 = 0x00;

pub const UOF_OUTPUT_SWITCH_I_CTRL: u8 = 0x08;
pub const UOF_OUTPUT_SWITCH_I_CMD: u8 = 0x80;

pub const UOF_REPORT_CTRL: u8 = 0x08;
pub const UOF_REPORT_CMD: u8 = 0x01;
pub const UOF_REPORT_LEN: usize = 5;

pub const UOF_EXISTENCE_ENERGY_I_CTRL: u8 = 0x08;
pub const UOF_EXISTENCE_ENERGY_I_CMD: u8 = 0x81;

pub const UOF_MOTION_ENERGY_I_CTRL: u8 = 0x08;
pub const UOF_MOTION_ENERGY_I_CMD: u8 = 0x82;

pub const UOF_STATIC_DISTANCE_I_CTRL: u8 = 0x08;
pub const UOF_STATIC_DISTANCE_I_CMD: u8 = 0x83;

pub const UOF_MOTION_DISTANCE_I_CTRL: u8 = 0x08;
pub const UOF_MOTION_DISTANCE_I_CMD: u8 = 0x84;

/// Original firmware sent this inquiry with `CTRL = 0x05`, inconsistent with
/// every other UOF inquiry. Treated as a typo and corrected to `0x08` here
/// (see SPEC_FULL.md Design Notes, resolved open question).
pub const UOF_MOTION_SPEED_I_CTRL: u8 = 0x08;
pub const UOF_MOTION_SPEED_I_CMD: u8 = 0x85;

pub const CM_SETTING_CTRL: u8 = 0x05;
pub const CM_SETTING_CMD: u8 = 0x09;

pub const CM_SETTING_END_CTRL: u8 = 0x05;
pub const CM_SETTING_END_CMD: u8 = 0x0A;

pub const CM_Q_CTRL: u8 = 0x05;
pub const CM_Q_CMD: u8 = 0x89;

pub const CM_EXISTENCE_JUDGMENT_THRESH_CTRL: u8 = 0x08;
pub const CM_EXISTENCE_JUDGMENT_THRESH_CMD: u8 = 0x08;

pub const CM_MOTION_TRIGGER_THRESH_CTRL: u8 = 0x08;
pub const CM_MOTION_TRIGGER_THRESH_CMD: u8 = 0x09;

pub const CM_EXISTENCE_PERCEPTION_BOUND_CTRL: u8 = 0x08;
pub const CM_EXISTENCE_PERCEPTION_BOUND_CMD: u8 = 0x0A;

pub const CM_MOTION_TRIGGER_BOUND_CTRL: u8 = 0x08;
pub const CM_MOTION_TRIGGER_BOUND_CMD: u8 = 0x0B;

pub const CM_MOTION_TRIGGER_TIME_CTRL: u8 = 0x08;
pub const CM_MOTION_TRIGGER_TIME_CMD: u8 = 0x0C;

pub const CM_MOTION_TO_STILL_TIME_CTRL: u8 = 0x08;
pub const CM_MOTION_TO_STILL_TIME_CMD: u8 = 0x0D;

pub const CM_TIME_FOR_NO_PERSON_CTRL: u8 = 0x08;
pub const CM_TIME_FOR_NO_PERSON_CMD: u8 = 0x0E;

pub const CM_UOF_EXISTENCE_JUDGMENT_THRESH_I_CTRL: u8 = 0x08;
pub const CM_UOF_EXISTENCE_JUDGMENT_THRESH_I_CMD: u8 = 0x88;

pub const CM_UOF_MOTION_TRIGGER_THRESH_I_CTRL: u8 = 0x08;
pub const CM_UOF_MOTION_TRIGGER_THRESH_I_CMD: u8 = 0x89;

pub const CM_UOF_EXISTENCE_PERCEPTION_BOUND_I_CTRL: u8 = 0x08;
pub const CM_UOF_EXISTENCE_PERCEPTION_BOUND_I_CMD: u8 = 0x8A;

pub const CM_UOF_MOTION_TRIGGER_BOUND_I_CTRL: u8 = 0x08;
pub const CM_UOF_MOTION_TRIGGER_BOUND_I_CMD: u8 = 0x8B;

pub const CM_UOF_MOTION_TRIGGER_TIME_I_CTRL: u8 = 0x08;
pub const CM_UOF_MOTION_TRIGGER_TIME_I_CMD: u8 = 0x8C;

pub const CM_UOF_MOTION_TO_STILL_TIME_I_CTRL: u8 = 0x08;
pub const CM_UOF_MOTION_TO_STILL_TIME_I_CMD: u8 = 0x8D;

pub const CM_UOF_TIME_FOR_NO_PERSON_I_CTRL: u8 = 0x08;
pub const CM_UOF_TIME_FOR_NO_PERSON_I_CMD: u8 = 0x8E;

/// Scene mode, set/reported on the `SCENE_SETTINGS_*` wire entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum SceneMode {
    NoSet = 0x00,
    LivingRoom = 0x01,
    Bedroom = 0x02,
    Bathroom = 0x03,
    AreaDetection = 0x04,
}

impl SceneMode {
    pub fn from_u8(v: u8) -> Option<Self> {
        Some(match v {
            0x00 => Self::NoSet,
            0x01 => Self::LivingRoom,
            0x02 => Self::Bedroom,
            0x03 => Self::Bathroom,
            0x04 => Self::AreaDetection,
            _ => return None,
        })
    }
}

/// Sensitivity level. `0x00` is report-only ("not set"), never a valid
/// argument to a *set* inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum SensitivityLevel {
    Level1 = 0x01,
    Level2 = 0x02,
    Level3 = 0x03,
}

impl SensitivityLevel {
    pub fn from_u8(v: u8) -> Option<Self> {
        Some(match v {
            0x01 => Self::Level1,
            0x02 => Self::Level2,
            0x03 => Self::Level3,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum TimeForNoPerson {
    None = 0x00,
    TenSec = 0x01,
    ThirtySec = 0x02,
    OneMin = 0x03,
    TwoMin = 0x04,
    FiveMin = 0x05,
    TenMin = 0x06,
    ThirtyMin = 0x07,
    SixtyMin = 0x08,
}

impl TimeForNoPerson {
    pub fn from_u8(v: u8) -> Option<Self> {
        Some(match v {
            0x00 => Self::None,
            0x01 => Self::TenSec,
            0x02 => Self::ThirtySec,
            0x03 => Self::OneMin,
            0x04 => Self::TwoMin,
            0x05 => Self::FiveMin,
            0x06 => Self::TenMin,
            0x07 => Self::ThirtyMin,
            0x08 => Self::SixtyMin,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum OutputSwitch {
    Off = 0x00,
    On = 0x01,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum CustomMode {
    Mode1 = 0x01,
    Mode2 = 0x02,
    Mode3 = 0x03,
    Mode4 = 0x04,
}

impl CustomMode {
    pub fn from_u8(v: u8) -> Option<Self> {
        Some(match v {
            0x01 => Self::Mode1,
            0x02 => Self::Mode2,
            0x03 => Self::Mode3,
            0x04 => Self::Mode4,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum PresenceInfo {
    Unoccupied = 0x00,
    Occupied = 0x01,
}

impl PresenceInfo {
    pub fn from_u8(v: u8) -> Option<Self> {
        Some(match v {
            0x00 => Self::Unoccupied,
            0x01 => Self::Occupied,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum MotionInfo {
    None = 0x00,
    Motionless = 0x01,
    Active = 0x02,
}

impl MotionInfo {
    pub fn from_u8(v: u8) -> Option<Self> {
        Some(match v {
            0x00 => Self::None,
            0x01 => Self::Motionless,
            0x02 => Self::Active,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ProximityInfo {
    NoState = 0x00,
    Near = 0x01,
    Far = 0x02,
}

impl ProximityInfo {
    pub fn from_u8(v: u8) -> Option<Self> {
        Some(match v {
            0x00 => Self::NoState,
            0x01 => Self::Near,
            0x02 => Self::Far,
            _ => return None,
        })
    }
}

/// Existence perception boundary, in half-metre steps from 0.5 m to 5 m.
///
/// Kept as a distinct type from [`MotionTriggerBound`] even though the two
/// share discriminants and real-world distances: they gate different
/// inquiries and a mix-up would be a silent protocol bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ExistencePerceptionBound {
    EpHalfM = 0x01,
    EpOneM = 0x02,
    EpOneAndHalfM = 0x03,
    EpTwoM = 0x04,
    EpTwoAndHalfM = 0x05,
    EpThreeM = 0x06,
    EpThreeAndHalfM = 0x07,
    EpFourM = 0x08,
    EpFourAndHalfM = 0x09,
    EpFiveM = 0x0A,
}

impl ExistencePerceptionBound {
    pub fn from_u8(v: u8) -> Option<Self> {
        Some(match v {
            0x01 => Self::EpHalfM,
            0x02 => Self::EpOneM,
            0x03 => Self::EpOneAndHalfM,
            0x04 => Self::EpTwoM,
            0x05 => Self::EpTwoAndHalfM,
            0x06 => Self::EpThreeM,
            0x07 => Self::EpThreeAndHalfM,
            0x08 => Self::EpFourM,
            0x09 => Self::EpFourAndHalfM,
            0x0A => Self::EpFiveM,
            _ => return None,
        })
    }
}

/// Motion trigger boundary, in half-metre steps from 0.5 m to 5 m.
/// See [`ExistencePerceptionBound`] for why this is a separate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum MotionTriggerBound {
    MtHalfM = 0x01,
    MtOneM = 0x02,
    MtOneAndHalfM = 0x03,
    MtTwoM = 0x04,
    MtTwoAndHalfM = 0x05,
    MtThreeM = 0x06,
    MtThreeAndHalfM = 0x07,
    MtFourM = 0x08,
    MtFourAndHalfM = 0x09,
    MtFiveM = 0x0A,
}

impl MotionTriggerBound {
    pub fn from_u8(v: u8) -> Option<Self> {
        Some(match v {
            0x01 => Self::MtHalfM,
            0x02 => Self::MtOneM,
            0x03 => Self::MtOneAndHalfM,
            0x04 => Self::MtTwoM,
            0x05 => Self::MtTwoAndHalfM,
            0x06 => Self::MtThreeM,
            0x07 => Self::MtThreeAndHalfM,
            0x08 => Self::MtFourM,
            0x09 => Self::MtFourAndHalfM,
            0x0A => Self::MtFiveM,
            _ => return None,
        })
    }
}
