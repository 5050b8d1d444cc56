//! Lifecycle state machine and event plumbing, ported from
//! `app_init_sys/app_start_sys/app_stop_sys/app_deinit_sys/app_get_mode/
//! app_set_mode/app_get_report/app_get_response/onReport/onResponse/
//! app_send_inquiry` and the `decoder_task` loop in `mmWave_manager.c`.

use core::cell::Cell;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{with_timeout, Duration, Timer};

use critical_section::Mutex as CsMutex;

use crate::config::Config;
use crate::decoder::{process_frame, Report, Response};
use crate::error::DriverError;
use crate::hal::HalOrchestrator;
use crate::platform::RadarUart;

use super::Mode;

/// Capacity of both the report and response event queues.
pub const APP_EVENT_QUEUE_LEN: usize = 20;

/// Convenience alias for the `'static` storage a board crate allocates
/// (e.g. via `static_cell::StaticCell`) for the report/response queues.
pub type AppEventChannel<T> =
    embassy_sync::channel::Channel<CriticalSectionRawMutex, T, APP_EVENT_QUEUE_LEN>;

/// Application lifecycle states, mirroring `AppSensorState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum AppState {
    Uninit,
    Init,
    Running,
    Stopped,
}

/// Ties the HAL to the semantic decoder and exposes the public inquiry
/// surface's lifecycle/mode/event-queue primitives. Generic over the same
/// `RadarUart` the underlying [`HalOrchestrator`] is generic over.
pub struct ApplicationManager<U: RadarUart + 'static> {
    state: CsMutex<Cell<AppState>>,
    mode: CsMutex<Cell<Mode>>,
    hal: &'static HalOrchestrator<U>,
    report_queue: &'static AppEventChannel<Report>,
    response_queue: &'static AppEventChannel<Response>,
    report_cb: CsMutex<Cell<Option<fn(&Report)>>>,
    response_cb: CsMutex<Cell<Option<fn(&Response)>>>,
    shutdown: AtomicBool,
    decoder_done: AtomicBool,
}

impl<U: RadarUart> ApplicationManager<U> {
    pub fn new(
        hal: &'static HalOrchestrator<U>,
        report_queue: &'static AppEventChannel<Report>,
        response_queue: &'static AppEventChannel<Response>,
    ) -> Self {
        Self {
            state: CsMutex::new(Cell::new(AppState::Uninit)),
            mode: CsMutex::new(Cell::new(Mode::default())),
            hal,
            report_queue,
            response_queue,
            report_cb: CsMutex::new(Cell::new(None)),
            response_cb: CsMutex::new(Cell::new(None)),
            shutdown: AtomicBool::new(false),
            decoder_done: AtomicBool::new(false),
        }
    }

    fn state(&self) -> AppState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    fn set_state(&self, new: AppState) {
        critical_section::with(|cs| self.state.borrow(cs).set(new));
    }

    /// `UNINIT -> INIT`.
    pub fn init_sys(&self, config: Config) -> Result<(), DriverError> {
        if self.state() != AppState::Uninit {
            return Err(DriverError::InvalidState);
        }
        self.hal.init(config)?;
        self.shutdown.store(false, Ordering::SeqCst);
        self.decoder_done.store(false, Ordering::SeqCst);
        self.set_state(AppState::Init);
        Ok(())
    }

    /// `INIT|STOPPED -> RUNNING`. The embedding board crate spawns
    /// [`Self::decoder_task_loop`] (wrapped in its own concrete
    /// `#[embassy_executor::task]`, same constraint as the HAL's RX/TX
    /// loops) once this returns `Ok`.
    pub async fn start_sys(&self) -> Result<(), DriverError> {
        match self.state() {
            AppState::Init | AppState::Stopped => {}
            _ => return Err(DriverError::InvalidState),
        }
        self.hal.start().await?;
        self.shutdown.store(false, Ordering::SeqCst);
        self.decoder_done.store(false, Ordering::SeqCst);
        self.set_state(AppState::Running);
        Ok(())
    }

    /// `RUNNING -> STOPPED`. Signals the decoder loop to exit and waits for
    /// it, then stops the HAL.
    pub async fn stop_sys(&self) -> Result<(), DriverError> {
        if self.state() != AppState::Running {
            return Err(DriverError::InvalidState);
        }
        self.hal.stop().await?;
        self.shutdown.store(true, Ordering::SeqCst);
        while !self.decoder_done.load(Ordering::SeqCst) {
            Timer::after_millis(10).await;
        }
        self.set_state(AppState::Stopped);
        Ok(())
    }

    /// `STOPPED -> UNINIT`. Drains both event queues.
    pub fn deinit_sys(&self) -> Result<(), DriverError> {
        if self.state() != AppState::Stopped {
            return Err(DriverError::InvalidState);
        }
        self.hal.deinit()?;
        while self.report_queue.try_receive().is_ok() {}
        while self.response_queue.try_receive().is_ok() {}
        self.shutdown.store(false, Ordering::SeqCst);
        self.decoder_done.store(false, Ordering::SeqCst);
        self.set_state(AppState::Uninit);
        Ok(())
    }

    pub fn get_mode(&self) -> Mode {
        critical_section::with(|cs| self.mode.borrow(cs).get())
    }

    /// `RUNNING` only; `mode` is always one of [`Mode`]'s two variants so
    /// unlike the original there is no `APP_SENSOR_ERROR` "bad mode value"
    /// case to reject.
    pub fn set_mode(&self, mode: Mode) -> Result<(), DriverError> {
        if self.state() != AppState::Running {
            return Err(DriverError::InvalidState);
        }
        critical_section::with(|cs| self.mode.borrow(cs).set(mode));
        Ok(())
    }

    pub fn register_event_callbacks(
        &self,
        report_cb: Option<fn(&Report)>,
        response_cb: Option<fn(&Response)>,
    ) {
        critical_section::with(|cs| {
            self.report_cb.borrow(cs).set(report_cb);
            self.response_cb.borrow(cs).set(response_cb);
        });
    }

    /// Dequeues one report, bounded by `timeout_ms`.
    pub async fn poll_report(&self, timeout_ms: u64) -> Result<Report, DriverError> {
        with_timeout(Duration::from_millis(timeout_ms), self.report_queue.receive())
            .await
            .map_err(|_| DriverError::Timeout)
    }

    /// Dequeues one response, bounded by `timeout_ms`.
    pub async fn poll_response(&self, timeout_ms: u64) -> Result<Response, DriverError> {
        with_timeout(Duration::from_millis(timeout_ms), self.response_queue.receive())
            .await
            .map_err(|_| DriverError::Timeout)
    }

    /// Builds and enqueues an outbound inquiry frame. `RUNNING` only.
    pub async fn send_inquiry(&self, payload: &[u8], ctrl: u8, cmd: u8) -> Result<(), DriverError> {
        if self.state() != AppState::Running {
            return Err(DriverError::InvalidState);
        }
        self.hal.send_frame(payload, ctrl, cmd).await
    }

    /// Enqueues before firing the registered callback, matching `onReport`'s
    /// `platform_queue_send(..., 10)` followed by the user callback.
    async fn emit_report(&self, report: Report) {
        let _ = with_timeout(Duration::from_millis(10), self.report_queue.send(report)).await;
        let cb = critical_section::with(|cs| self.report_cb.borrow(cs).get());
        if let Some(cb) = cb {
            cb(&report);
        }
    }

    /// Enqueues before firing the registered callback, matching `onResponse`'s
    /// `platform_queue_send(..., 10)` followed by the user callback.
    async fn emit_response(&self, response: Response) {
        let cb = critical_section::with(|cs| self.response_cb.borrow(cs).get());
        let queued = response.clone();
        let _ = with_timeout(Duration::from_millis(10), self.response_queue.send(queued)).await;
        if let Some(cb) = cb {
            cb(&response);
        }
    }

    /// Decode-and-dispatch loop. Ported from `decoder_task`; the original's
    /// deep copy of each frame into an app-owned buffer existed only to
    /// work around C's lack of move semantics across the HAL/app boundary —
    /// here the [`crate::protocol::FrameBuffer`] is simply moved in and
    /// dropped after decoding, so no copy is needed.
    pub async fn decoder_task_loop(&self) {
        loop {
            match self.hal.get_frame_from_queue(20).await {
                Ok(frame) => {
                    let (report, response) = process_frame(frame.as_slice());
                    drop(frame);
                    if let Some(report) = report {
                        self.emit_report(report).await;
                    }
                    if let Some(response) = response {
                        self.emit_response(response).await;
                    }
                }
                Err(_) => {
                    if self.shutdown.load(Ordering::SeqCst) {
                        self.decoder_done.store(true, Ordering::SeqCst);
                        return;
                    }
                    Timer::after_millis(20).await;
                }
            }
        }
    }
}
