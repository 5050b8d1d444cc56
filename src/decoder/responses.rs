//! Inquiry-reply sum type, ported from the original's `AppInquiryType` tag
//! plus its `DecodedResponse{type, data, data_l}` payload struct.

use heapless::Vec as HVec;

/// Largest payload a `Response` may carry; enforced by [`Response::new`]
/// exactly as `send_response_safe` enforced it against `MAX_RESPONSE_DATA_LEN`.
pub const MAX_RESPONSE_DATA_LEN: usize = 64;

/// One reply to a host-initiated inquiry. The variant identifies which
/// inquiry it answers; `data` carries the raw payload bytes the module
/// replied with.
#[derive(Debug, Clone, defmt::Format)]
pub struct Response {
    pub kind: ResponseKind,
    pub data: HVec<u8, MAX_RESPONSE_DATA_LEN>,
}

impl Response {
    /// Builds a response, returning `None` if `payload` exceeds
    /// `MAX_RESPONSE_DATA_LEN` (the strict check-and-drop policy from
    /// SPEC_FULL.md §3 invariant 7, rather than the original's silent
    /// per-call-site check).
    pub fn new(kind: ResponseKind, payload: &[u8]) -> Option<Self> {
        let mut data = HVec::new();
        data.extend_from_slice(payload).ok()?;
        Some(Self { kind, data })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ResponseKind {
    Heartbeat,
    ModuleReset,
    ProductModel,
    ProductId,
    HardwareModel,
    FirmwareVersion,
    SceneSettings,
    SceneSettingsI,
    Sensitivity,
    SensitivityI,
    Presence,
    Motion,
    Bmp,
    TimeForNoPerson,
    TimeForNoPersonI,
    Proximity,
    OutputSwitch,
    OutputSwitchI,
    ExistenceEnergy,
    MotionEnergy,
    StaticDistance,
    MotionDistance,
    MotionSpeed,
    CustomMode,
    CustomModeEnd,
    CustomModeI,
    ExistenceJudgmentThresh,
    ExistenceJudgmentThreshI,
    MotionTriggerThresh,
    MotionTriggerThreshI,
    ExistencePerceptionBound,
    ExistencePerceptionBoundI,
    MotionTriggerBound,
    MotionTriggerBoundI,
    MotionTriggerTime,
    MotionTriggerTimeI,
    MotionToStillTime,
    MotionToStillTimeI,
    CmTimeForNoPerson,
    CmTimeForNoPersonI,
}
