//! Lifecycle state machine and public HAL API, ported from
//! `hal_mmwave_init/start/stop/deinit/send_frame/get_frame_from_queue/
//! release_frame_memory/flush_frames`.
//!
//! `embassy_executor::task` functions cannot be generic, so unlike the
//! original (which spawns `hal_receive_task`/`hal_send_task` itself from
//! `hal_mmwave_start`), this orchestrator exposes [`HalOrchestrator::rx_task_loop`]
//! and [`HalOrchestrator::tx_task_loop`] as plain async methods. The
//! embedding board crate wraps each in its own concrete, monomorphized
//! `#[embassy_executor::task]` function and spawns those after `start()`
//! returns — consistent with board wiring being out of this crate's scope.

use core::cell::Cell;
use core::sync::atomic::{AtomicBool, Ordering};

use alloc::sync::Arc;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex as AsyncMutex;
use embassy_time::{with_timeout, Duration, Timer};

use critical_section::Mutex as CsMutex;

use crate::config::Config;
use crate::error::DriverError;
use crate::platform::{PlatformEvent, RadarUart};
use crate::protocol::{build_frame, FrameBuffer, FrameParser, FrameSink};

use super::memory::Accountant;
use super::FrameChannel;

/// HAL lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum HalState {
    Uninit,
    Init,
    Running,
    Stopped,
}

/// The codec's view of the orchestrator: implements [`FrameSink`] by
/// reserving memory from the accountant and posting completed frames to
/// `frame_queue` with a 10 ms bound, matching `_saveFrame`.
struct CoreSink<'o, U: RadarUart + 'static> {
    orchestrator: &'o HalOrchestrator<U>,
}

impl<'o, U: RadarUart + 'static> FrameSink for CoreSink<'o, U> {
    fn alloc(&self, size: usize) -> Option<FrameBuffer> {
        self.orchestrator.accountant.try_alloc(size)
    }

    async fn save_frame(&self, frame: FrameBuffer) -> bool {
        with_timeout(Duration::from_millis(10), self.orchestrator.frame_queue.send(frame))
            .await
            .is_ok()
    }
}

/// Orchestrates the UART link for one radar module. Generic over the
/// platform's concrete `RadarUart` implementation.
pub struct HalOrchestrator<U: RadarUart + 'static> {
    state: CsMutex<Cell<HalState>>,
    config: CsMutex<Cell<Option<Config>>>,
    uart: &'static AsyncMutex<CriticalSectionRawMutex, U>,
    accountant: Arc<Accountant>,
    frame_queue: &'static FrameChannel,
    tx_queue: &'static FrameChannel,
    rx_done: AtomicBool,
    tx_done: AtomicBool,
}

impl<U: RadarUart> HalOrchestrator<U> {
    /// Constructs an orchestrator in `Uninit`. `uart`, `frame_queue` and
    /// `tx_queue` are `'static` because the RX/TX task loops (spawned by
    /// the embedding board crate) must be able to reach them for the
    /// program's lifetime — typically obtained via `static_cell::StaticCell`
    /// the same way the teacher crate sizes its `cyw43::State` singleton.
    pub fn new(
        uart: &'static AsyncMutex<CriticalSectionRawMutex, U>,
        frame_queue: &'static FrameChannel,
        tx_queue: &'static FrameChannel,
    ) -> Self {
        Self {
            state: CsMutex::new(Cell::new(HalState::Uninit)),
            config: CsMutex::new(Cell::new(None)),
            uart,
            accountant: Accountant::new(),
            frame_queue,
            tx_queue,
            rx_done: AtomicBool::new(false),
            tx_done: AtomicBool::new(false),
        }
    }

    fn state(&self) -> HalState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    fn set_state(&self, new: HalState) {
        critical_section::with(|cs| self.state.borrow(cs).set(new));
    }

    /// `UNINIT -> INIT`. UART bring-up itself is the caller's
    /// responsibility (board wiring is out of scope); this validates the
    /// lifecycle guard, records `config` for later inspection, and resets
    /// shutdown-handshake flags.
    pub fn init(&self, config: Config) -> Result<(), DriverError> {
        if self.state() != HalState::Uninit {
            return Err(DriverError::InvalidState);
        }
        if config.event_queue_len == 0 {
            return Err(DriverError::BadArgument);
        }
        critical_section::with(|cs| self.config.borrow(cs).set(Some(config)));
        self.rx_done.store(false, Ordering::SeqCst);
        self.tx_done.store(false, Ordering::SeqCst);
        self.set_state(HalState::Init);
        Ok(())
    }

    /// The `Config` passed to the last successful [`Self::init`], if any.
    pub fn config(&self) -> Option<Config> {
        critical_section::with(|cs| self.config.borrow(cs).get())
    }

    /// `INIT|STOPPED -> RUNNING`. Enables the RX interrupt and clears the
    /// shutdown-handshake flags so the worker loops run; the board crate
    /// spawns `rx_task_loop`/`tx_task_loop` after this returns `Ok`.
    pub async fn start(&self) -> Result<(), DriverError> {
        match self.state() {
            HalState::Init | HalState::Stopped => {}
            _ => return Err(DriverError::InvalidState),
        }
        self.rx_done.store(false, Ordering::SeqCst);
        self.tx_done.store(false, Ordering::SeqCst);
        {
            let mut uart = self.uart.lock().await;
            uart.enable_isr().map_err(|_| DriverError::PlatformFault)?;
        }
        self.set_state(HalState::Running);
        Ok(())
    }

    /// `RUNNING -> STOPPED`. Disables the RX interrupt, then polls the
    /// shutdown handshake at 10 ms granularity until both worker loops and
    /// the platform dispatcher have drained (see SPEC_FULL.md §5).
    pub async fn stop(&self) -> Result<(), DriverError> {
        if self.state() != HalState::Running {
            return Err(DriverError::InvalidState);
        }
        {
            let mut uart = self.uart.lock().await;
            uart.disable_isr().map_err(|_| DriverError::PlatformFault)?;
        }
        loop {
            let dispatcher_ended = self.uart.lock().await.dispatcher_ended();
            let rx_done = self.rx_done.load(Ordering::SeqCst);
            let tx_done = self.tx_done.load(Ordering::SeqCst);
            if dispatcher_ended && rx_done && tx_done {
                break;
            }
            Timer::after_millis(10).await;
        }
        self.set_state(HalState::Stopped);
        Ok(())
    }

    /// `INIT|STOPPED -> UNINIT`. Drains both queues, releasing every
    /// buffer they still hold.
    pub fn deinit(&self) -> Result<(), DriverError> {
        match self.state() {
            HalState::Init | HalState::Stopped => {}
            _ => return Err(DriverError::InvalidState),
        }
        while let Ok(buf) = self.frame_queue.try_receive() {
            drop(buf);
        }
        while let Ok(buf) = self.tx_queue.try_receive() {
            drop(buf);
        }
        critical_section::with(|cs| self.config.borrow(cs).set(None));
        self.set_state(HalState::Uninit);
        Ok(())
    }

    /// Builds and enqueues an outbound frame. `RUNNING` only.
    pub async fn send_frame(&self, payload: &[u8], ctrl: u8, cmd: u8) -> Result<(), DriverError> {
        if self.state() != HalState::Running {
            return Err(DriverError::InvalidState);
        }
        let sink = CoreSink { orchestrator: self };
        let frame = build_frame(&sink, payload, ctrl, cmd).ok_or(DriverError::MemoryFault)?;
        match with_timeout(Duration::from_millis(20), self.tx_queue.send(frame)).await {
            Ok(()) => Ok(()),
            Err(_) => Err(DriverError::QueueFull),
        }
    }

    /// Dequeues one decoded frame, bounded by `timeout_ms`. `RUNNING` only.
    pub async fn get_frame_from_queue(&self, timeout_ms: u64) -> Result<FrameBuffer, DriverError> {
        if self.state() != HalState::Running {
            return Err(DriverError::InvalidState);
        }
        match with_timeout(Duration::from_millis(timeout_ms), self.frame_queue.receive()).await {
            Ok(frame) => Ok(frame),
            Err(_) => Err(DriverError::Timeout),
        }
    }

    /// Drains and releases everything currently queued in the frame queue.
    pub fn flush_frames(&self) {
        while let Ok(buf) = self.frame_queue.try_receive() {
            drop(buf);
        }
    }

    pub fn currently_allocated(&self) -> usize {
        self.accountant.currently_allocated()
    }

    /// Receive-path loop: waits for platform UART events, reads available
    /// bytes, and feeds them to the codec. Exits once the platform
    /// dispatcher has ended and `pending_events() == 0`, matching
    /// `hal_receive_task`'s `hal_dispatcher_ended_flag &&
    /// platform_get_num_of_queue_elements(event_queue) == 0` guard.
    pub async fn rx_task_loop(&self) {
        let mut parser = FrameParser::new();
        let sink = CoreSink { orchestrator: self };
        let mut rx_buf = [0u8; 512];
        loop {
            if self.state() != HalState::Running {
                Timer::after_millis(20).await;
                continue;
            }
            let event = {
                let mut uart = self.uart.lock().await;
                with_timeout(Duration::from_millis(200), uart.wait_event()).await
            };
            match event {
                Ok(Some(PlatformEvent::RxData(len))) => {
                    let mut uart = self.uart.lock().await;
                    let to_read = len.min(rx_buf.len());
                    if let Ok(n) = uart.read(&mut rx_buf[..to_read]).await {
                        drop(uart);
                        if n > 0 {
                            let _ = parser.parse_data(&sink, &rx_buf[..n]).await;
                        }
                    }
                }
                Ok(Some(PlatformEvent::FifoOverflow | PlatformEvent::BufferFull)) => {
                    defmt::warn!("rx overflow, dropping buffered bytes");
                }
                Ok(None) | Err(_) => {
                    Timer::after_millis(20).await;
                }
            }
            let (dispatcher_ended, pending_events) = {
                let uart = self.uart.lock().await;
                (uart.dispatcher_ended(), uart.pending_events())
            };
            if dispatcher_ended && pending_events == 0 {
                self.rx_done.store(true, Ordering::SeqCst);
                return;
            }
        }
    }

    /// Transmit-path loop: drains `tx_queue` into the UART. Ported from
    /// `hal_send_task`.
    pub async fn tx_task_loop(&self) {
        loop {
            if self.state() != HalState::Running {
                Timer::after_millis(20).await;
                continue;
            }
            match with_timeout(Duration::from_millis(20), self.tx_queue.receive()).await {
                Ok(frame) => {
                    let mut uart = self.uart.lock().await;
                    let _ = uart.write(frame.as_slice()).await;
                    drop(frame);
                }
                Err(_) => {
                    Timer::after_millis(20).await;
                }
            }
            let dispatcher_ended = self.uart.lock().await.dispatcher_ended();
            if dispatcher_ended && self.tx_queue.is_empty() {
                self.tx_done.store(true, Ordering::SeqCst);
                return;
            }
        }
    }
}
