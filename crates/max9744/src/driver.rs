//! MAX9744 amplifier driver
//!
//! Each operation encodes one command byte and sends it in its own blocking
//! transaction: START, `0x4B << 1 | W`, command, STOP, both bytes
//! ack-checked. No state is kept between calls and nothing is retried: a
//! failed command is logged once and the bus error is handed back unchanged
//! for the caller to retry or escalate.

use crate::bus::{BusError, I2cMaster, Transaction};
use crate::command::{Command, ModulationMode, StepDirection};
use crate::config::BusConfig;
use crate::error::InitError;
use crate::registers::MAX9744_I2C_ADDR;

/// MAX9744 driver.
///
/// Holds ownership of the I²C master and the configuration it was set up
/// with.
pub struct Max9744<M> {
    bus: M,
    config: BusConfig,
}

impl<M: I2cMaster> Max9744<M> {
    /// Create a driver using the build-time [`BusConfig::DEFAULT`].
    pub fn new(bus: M) -> Self {
        Self::with_config(bus, BusConfig::DEFAULT)
    }

    /// Create a driver for a bus wired differently from the default.
    pub fn with_config(bus: M, config: BusConfig) -> Self {
        Self { bus, config }
    }

    /// Bus configuration in use.
    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Give the bus back.
    pub fn release(self) -> M {
        self.bus
    }

    /// Configure the I²C master and install the bus driver.
    ///
    /// Installation is skipped if configuration fails. Calling this twice
    /// without tearing the bus down in between is up to the bus layer; the
    /// driver does not guard against it.
    pub fn init(&mut self) -> Result<(), InitError<M::Error>> {
        log_trace!("[max9744] initializing I2C");

        self.bus
            .configure(&self.config)
            .map_err(InitError::Configure)?;
        self.bus.install(&self.config).map_err(InitError::Install)?;

        log_trace!("[max9744] initialization done");
        Ok(())
    }

    /// Send one raw command byte.
    pub fn send_command(&mut self, command: u8) -> Result<(), M::Error> {
        log_trace!("[max9744] sending command {}", command);

        let result = {
            let transaction = Transaction::write_byte(MAX9744_I2C_ADDR, command);
            self.bus
                .execute(self.config.port, &transaction, self.config.timeout)
        };

        match &result {
            Ok(()) => log_trace!("[max9744] MAX9744 command succeeded"),
            Err(e) if e.is_timeout() => log_error!("[max9744] I2C timeout"),
            Err(e) => log_error!("[max9744] MAX9744 not connected: {}", e.code()),
        }
        result
    }

    fn dispatch(&mut self, command: Command) -> Result<(), M::Error> {
        log_debug!("[max9744] {}", command.name());
        self.send_command(command.encode())
    }

    /// Select the output modulation scheme.
    pub fn set_modulation(&mut self, mode: ModulationMode) -> Result<(), M::Error> {
        self.dispatch(Command::Modulation(mode))
    }

    /// Switch to filterless modulation.
    pub fn set_filterless_modulation(&mut self) -> Result<(), M::Error> {
        self.set_modulation(ModulationMode::Filterless)
    }

    /// Switch to classic PWM modulation.
    pub fn set_classic_pwm_modulation(&mut self) -> Result<(), M::Error> {
        self.set_modulation(ModulationMode::ClassicPwm)
    }

    /// One volume step up (step size chosen by the chip).
    pub fn increase_volume(&mut self) -> Result<(), M::Error> {
        self.dispatch(Command::Step(StepDirection::Up))
    }

    /// One volume step down (step size chosen by the chip).
    pub fn decrease_volume(&mut self) -> Result<(), M::Error> {
        self.dispatch(Command::Step(StepDirection::Down))
    }

    /// Set the absolute volume level.
    ///
    /// `level` must be in `0..=63`. It is sent as the command byte without
    /// any range check; a larger value sets the register-select bits and is
    /// interpreted by the chip as a different command.
    pub fn set_volume(&mut self, level: u8) -> Result<(), M::Error> {
        self.dispatch(Command::Volume(level))
    }
}
