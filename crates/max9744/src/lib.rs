//! Driver for the Maxim MAX9744 class-D audio amplifier
//!
//! The MAX9744 is controlled over I²C with single-byte commands: there are no
//! registers to read back, every operation is one write to address `0x4B`.
//!
//! # Layers
//!
//! ```text
//! Application code
//!         ↓
//! Max9744 driver (this crate - command encoding, outcome logging)
//!         ↓
//! I2cMaster (bus abstraction - configure / install / execute)
//!         ↓
//! HAL I²C peripheral (HalBus adapter over embedded-hal, or a board driver)
//! ```
//!
//! # Features
//!
//! - `std`: host-side [`mock::MockBus`] for tests
//! - `defmt`: defmt log backend and `defmt::Format` derives (hardware builds)
//! - `tracing`: tracing log backend (host builds)
//!
//! # Example
//!
//! ```no_run
//! use max9744::{HalBus, Max9744};
//!
//! fn bring_up<I: embedded_hal::i2c::I2c>(i2c: I) {
//!     let mut amp = Max9744::new(HalBus::new(i2c));
//!     if amp.init().is_ok() {
//!         let _ = amp.set_filterless_modulation();
//!         let _ = amp.set_volume(40);
//!     }
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::doc_markdown)] // chip and register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

#[macro_use]
mod log;

pub mod bus;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod hal;
pub mod mock;
pub mod registers;

pub use bus::{BusError, Frame, I2cMaster, Transaction};
pub use command::{Command, ModulationMode, StepDirection};
pub use config::{BusConfig, Port};
pub use driver::Max9744;
pub use error::{HalBusError, InitError};
pub use hal::HalBus;
pub use registers::MAX9744_I2C_ADDR;
