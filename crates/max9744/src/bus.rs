//! I²C master bus abstraction
//!
//! The driver talks to the bus through [`I2cMaster`], modelled on a
//! "command link" master: the caller prepares a [`Transaction`] (START,
//! address byte, data bytes, STOP) and hands it to the bus, which runs it
//! synchronously within a timeout.
//!
//! Implementations:
//! - [`HalBus`](crate::HalBus) — any blocking `embedded_hal::i2c::I2c`
//! - [`MockBus`](crate::mock::MockBus) — host tests (`std` feature)

use embassy_time::Duration;

use crate::config::{BusConfig, Port};
use crate::registers::address_frame;

/// Raw status codes used by [`BusError::code`].
///
/// Values follow the ESP-IDF `esp_err_t` convention the amplifier is most
/// often wired to, so codes read the same in logs on either side.
pub mod status {
    /// Generic failure (e.g. address or data byte not acknowledged).
    pub const FAIL: i32 = -1;
    /// Invalid argument (malformed transaction).
    pub const INVALID_ARG: i32 = 0x102;
    /// Bus in an invalid state (arbitration lost, bus error).
    pub const INVALID_STATE: i32 = 0x103;
    /// Transaction did not finish within the timeout.
    pub const TIMEOUT: i32 = 0x107;
}

/// Maximum number of frames in one [`Transaction`].
pub const MAX_FRAMES: usize = 8;

/// One step of an I²C transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// START condition
    Start,
    /// Write one byte
    Write {
        /// Byte to clock out
        byte: u8,
        /// Fail the transaction if the byte is not acknowledged
        ack_check: bool,
    },
    /// STOP condition
    Stop,
}

/// Returned by [`Transaction::push`] when the frame list is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionFull;

/// An ordered list of frames executed as one bus transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transaction {
    frames: [Frame; MAX_FRAMES],
    len: usize,
}

impl Transaction {
    /// Empty transaction.
    pub const fn new() -> Self {
        Self {
            frames: [Frame::Stop; MAX_FRAMES],
            len: 0,
        }
    }

    /// START, address+W, one data byte, STOP; both bytes ack-checked.
    pub const fn write_byte(address: u8, data: u8) -> Self {
        let mut frames = [Frame::Stop; MAX_FRAMES];
        frames[0] = Frame::Start;
        frames[1] = Frame::Write {
            byte: address_frame(address),
            ack_check: true,
        };
        frames[2] = Frame::Write {
            byte: data,
            ack_check: true,
        };
        frames[3] = Frame::Stop;
        Self { frames, len: 4 }
    }

    /// Append a frame.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionFull`] once [`MAX_FRAMES`] frames are queued.
    pub fn push(&mut self, frame: Frame) -> Result<&mut Self, TransactionFull> {
        let slot = self.frames.get_mut(self.len).ok_or(TransactionFull)?;
        *slot = frame;
        self.len = self.len.saturating_add(1);
        Ok(self)
    }

    /// Frames in execution order.
    pub fn frames(&self) -> &[Frame] {
        self.frames.get(..self.len).unwrap_or(&[])
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if no frame has been queued.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

/// Classification of a failed bus transaction.
pub trait BusError: core::fmt::Debug {
    /// `true` if the transaction ran out of time.
    fn is_timeout(&self) -> bool;

    /// Raw status code reported by the bus layer.
    fn code(&self) -> i32;
}

/// I²C master bus the amplifier is attached to.
///
/// All methods block. Exclusive access is guaranteed by `&mut self`; if the
/// bus is shared between execution contexts the caller wraps it in a mutex.
pub trait I2cMaster {
    /// Error type returned by bus operations.
    type Error: BusError;

    /// Configure master role, pins, pull-ups and clock speed.
    fn configure(&mut self, config: &BusConfig) -> Result<(), Self::Error>;

    /// Activate the bus driver with the configured buffer lengths.
    fn install(&mut self, config: &BusConfig) -> Result<(), Self::Error>;

    /// Run `transaction` on `port`, giving up after `timeout`.
    fn execute(
        &mut self,
        port: Port,
        transaction: &Transaction,
        timeout: Duration,
    ) -> Result<(), Self::Error>;
}

impl<M: I2cMaster + ?Sized> I2cMaster for &mut M {
    type Error = M::Error;

    fn configure(&mut self, config: &BusConfig) -> Result<(), Self::Error> {
        M::configure(self, config)
    }

    fn install(&mut self, config: &BusConfig) -> Result<(), Self::Error> {
        M::install(self, config)
    }

    fn execute(
        &mut self,
        port: Port,
        transaction: &Transaction,
        timeout: Duration,
    ) -> Result<(), Self::Error> {
        M::execute(self, port, transaction, timeout)
    }
}
