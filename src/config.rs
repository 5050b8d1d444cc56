//! Driver configuration, mirroring `hal_mmwave_config` from the original
//! ESP-IDF implementation. Board bring-up (clock trees, pin muxing) stays
//! with the embedding application; this struct only carries the parameters
//! the HAL orchestrator itself needs.

/// Number of data bits per UART word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum DataBits {
    Seven,
    Eight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Parity {
    None,
    Even,
    Odd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum StopBits {
    One,
    Two,
}

/// Parameters the HAL orchestrator needs to bring the link up.
#[derive(Debug, Clone, Copy, defmt::Format)]
pub struct Config {
    pub uart_id: u8,
    pub baudrate: u32,
    pub data_bits: DataBits,
    pub parity: Parity,
    pub stop_bits: StopBits,
    /// Capacity hint for the platform's RX byte buffer.
    pub rx_buf_size: usize,
    /// Capacity hint for the platform's TX byte buffer.
    pub tx_buf_size: usize,
    /// RX-FIFO-full interrupt threshold.
    pub rx_threshold: usize,
    /// Capacity of the HAL frame queue and TX queue.
    pub event_queue_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uart_id: 0,
            baudrate: 115_200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            rx_buf_size: 256,
            tx_buf_size: 256,
            rx_threshold: 32,
            event_queue_len: 20,
        }
    }
}
