//! Mock I²C master for host-side testing
//!
//! Implements [`I2cMaster`] without any hardware dependency. Records every
//! call for assertion in tests and answers `execute` from a script of
//! results, falling back to [`MockBus::default_response`] once the script
//! runs dry.

#![cfg(any(test, feature = "std"))]

use std::vec::Vec;

use embassy_time::Duration;

use crate::bus::{status, BusError, I2cMaster, Transaction};
use crate::config::{BusConfig, Port};

/// Error reported by [`MockBus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBusError {
    /// The transaction did not finish within its timeout.
    Timeout,
    /// Any other failure, with its raw status code.
    Status(i32),
}

impl BusError for MockBusError {
    fn is_timeout(&self) -> bool {
        matches!(self, MockBusError::Timeout)
    }

    fn code(&self) -> i32 {
        match self {
            MockBusError::Timeout => status::TIMEOUT,
            MockBusError::Status(code) => *code,
        }
    }
}

/// One recorded [`I2cMaster::execute`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executed {
    /// Port the transaction was sent on
    pub port: Port,
    /// The transaction itself
    pub transaction: Transaction,
    /// Timeout the caller asked for
    pub timeout: Duration,
}

/// Mock bus — records all calls for test assertions.
pub struct MockBus {
    /// Configurations passed to [`I2cMaster::configure`], in call order.
    pub configured: Vec<BusConfig>,
    /// Configurations passed to [`I2cMaster::install`], in call order.
    pub installed: Vec<BusConfig>,
    /// Every executed transaction, in call order.
    pub executed: Vec<Executed>,
    /// Result returned by `configure`.
    pub configure_result: Result<(), MockBusError>,
    /// Result returned by `install`.
    pub install_result: Result<(), MockBusError>,
    /// Result returned by `execute` when the script is empty.
    pub default_response: Result<(), MockBusError>,
    /// How long the simulated device takes to answer. A stall longer than
    /// the transaction timeout ends at the timeout with
    /// [`MockBusError::Timeout`].
    pub stall: Option<core::time::Duration>,
    script: heapless::Deque<Result<(), MockBusError>, 16>,
}

impl MockBus {
    /// Create a new mock bus where every operation succeeds.
    pub fn new() -> Self {
        Self {
            configured: Vec::new(),
            installed: Vec::new(),
            executed: Vec::new(),
            configure_result: Ok(()),
            install_result: Ok(()),
            default_response: Ok(()),
            stall: None,
            script: heapless::Deque::new(),
        }
    }

    /// Mock bus whose every transaction fails with `error`.
    pub fn failing(error: MockBusError) -> Self {
        Self {
            default_response: Err(error),
            ..Self::new()
        }
    }

    /// Mock bus with a device that never answers in time.
    pub fn stalled(stall: core::time::Duration) -> Self {
        Self {
            stall: Some(stall),
            ..Self::new()
        }
    }

    /// Queue the result of the next `execute` call.
    pub fn respond(&mut self, response: Result<(), MockBusError>) -> Result<(), Result<(), MockBusError>> {
        self.script.push_back(response)
    }

    /// Data bytes (everything after the address frame) of each executed
    /// transaction, flattened in call order.
    pub fn sent_bytes(&self) -> Vec<u8> {
        use crate::bus::Frame;

        self.executed
            .iter()
            .flat_map(|e| e.transaction.frames().iter().skip(2))
            .filter_map(|frame| match frame {
                Frame::Write { byte, .. } => Some(*byte),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl I2cMaster for MockBus {
    type Error = MockBusError;

    fn configure(&mut self, config: &BusConfig) -> Result<(), Self::Error> {
        self.configured.push(*config);
        self.configure_result
    }

    fn install(&mut self, config: &BusConfig) -> Result<(), Self::Error> {
        self.installed.push(*config);
        self.install_result
    }

    fn execute(
        &mut self,
        port: Port,
        transaction: &Transaction,
        timeout: Duration,
    ) -> Result<(), Self::Error> {
        self.executed.push(Executed {
            port,
            transaction: transaction.clone(),
            timeout,
        });

        if let Some(stall) = self.stall {
            let limit = core::time::Duration::from_micros(timeout.as_micros());
            std::thread::sleep(stall.min(limit));
            if stall > limit {
                return Err(MockBusError::Timeout);
            }
        }

        self.script.pop_front().unwrap_or(self.default_response)
    }
}
