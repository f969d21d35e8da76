//! Driver error types
//!
//! Command transactions return the bus's own error unchanged, so callers see
//! exactly what the bus reported. The types here cover what sits around
//! that: bringing the bus up, and the embedded-hal adapter.

use thiserror_no_std::Error;

use crate::bus::{status, BusError};

/// Failure while bringing up the bus in [`Max9744::init`](crate::Max9744::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError<E> {
    /// Master configuration (pins, pull-ups, clock) was rejected.
    #[error("I2C bus configuration failed")]
    Configure(E),
    /// Bus driver installation failed.
    #[error("I2C driver install failed")]
    Install(E),
}

impl<E> InitError<E> {
    /// The underlying bus error.
    pub fn into_inner(self) -> E {
        match self {
            InitError::Configure(e) | InitError::Install(e) => e,
        }
    }
}

/// Error from [`HalBus`](crate::HalBus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HalBusError<E> {
    /// The HAL reported a bus error.
    #[error("I2C bus error")]
    Bus(E),
    /// The transaction was not START, address+W, data..., STOP.
    #[error("unsupported I2C transaction shape")]
    Malformed,
}

impl<E: embedded_hal::i2c::Error> BusError for HalBusError<E> {
    fn is_timeout(&self) -> bool {
        // embedded-hal has no timeout kind; the HAL bounds its own transfers.
        false
    }

    fn code(&self) -> i32 {
        use embedded_hal::i2c::ErrorKind;

        match self {
            HalBusError::Malformed => status::INVALID_ARG,
            HalBusError::Bus(e) => match e.kind() {
                ErrorKind::Bus | ErrorKind::ArbitrationLoss => status::INVALID_STATE,
                _ => status::FAIL,
            },
        }
    }
}
