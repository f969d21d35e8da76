//! I²C master bus configuration
//!
//! [`BusConfig::DEFAULT`] is the board configuration baked in at build time:
//! the SCL/SDA GPIO numbers come from the `MAX9744_I2C_SCL_GPIO` and
//! `MAX9744_I2C_SDA_GPIO` environment variables (see `build.rs`), everything
//! else is a fixed constant below. Boards with a different wiring build their
//! own value with the `with_*` builders and hand it to
//! [`Max9744::with_config`](crate::Max9744::with_config).

use embassy_time::Duration;

mod pins {
    include!(concat!(env!("OUT_DIR"), "/pins.rs"));
}

pub use pins::{SCL_GPIO, SDA_GPIO};

/// Bus clock: standard mode.
pub const FREQUENCY_HZ: u32 = 100_000;
/// Receive buffer length handed to the bus driver (0 = unbuffered).
pub const RX_BUFFER_LEN: usize = 0;
/// Transmit buffer length handed to the bus driver (0 = unbuffered).
pub const TX_BUFFER_LEN: usize = 0;
/// Upper bound for one command transaction.
pub const TRANSACTION_TIMEOUT: Duration = Duration::from_millis(1000);

/// I²C controller index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Port(pub u8);

impl Port {
    /// First I²C controller.
    pub const I2C0: Port = Port(0);
    /// Second I²C controller.
    pub const I2C1: Port = Port(1);
}

/// Static attributes of the I²C master bus the amplifier sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// Controller index
    pub port: Port,
    /// Clock line GPIO
    pub scl_gpio: u8,
    /// Data line GPIO
    pub sda_gpio: u8,
    /// Enable the internal pull-up on SCL
    pub scl_pullup: bool,
    /// Enable the internal pull-up on SDA
    pub sda_pullup: bool,
    /// Clock frequency in Hz
    pub frequency_hz: u32,
    /// Receive buffer length (0 = synchronous, unbuffered)
    pub rx_buffer_len: usize,
    /// Transmit buffer length (0 = synchronous, unbuffered)
    pub tx_buffer_len: usize,
    /// Timeout for each command transaction
    pub timeout: Duration,
}

impl BusConfig {
    /// Build-time board configuration.
    pub const DEFAULT: BusConfig = BusConfig {
        port: Port::I2C0,
        scl_gpio: SCL_GPIO,
        sda_gpio: SDA_GPIO,
        scl_pullup: true,
        sda_pullup: true,
        frequency_hz: FREQUENCY_HZ,
        rx_buffer_len: RX_BUFFER_LEN,
        tx_buffer_len: TX_BUFFER_LEN,
        timeout: TRANSACTION_TIMEOUT,
    };

    /// Use a different controller.
    #[must_use]
    pub const fn with_port(mut self, port: Port) -> Self {
        self.port = port;
        self
    }

    /// Use different clock/data pins.
    #[must_use]
    pub const fn with_pins(mut self, scl_gpio: u8, sda_gpio: u8) -> Self {
        self.scl_gpio = scl_gpio;
        self.sda_gpio = sda_gpio;
        self
    }

    /// Use a different clock frequency.
    #[must_use]
    pub const fn with_frequency(mut self, frequency_hz: u32) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }

    /// Use a different transaction timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_mode_on_port_zero() {
        let config = BusConfig::default();
        assert_eq!(config.port, Port::I2C0);
        assert_eq!(config.frequency_hz, 100_000);
    }

    #[test]
    fn default_is_unbuffered_with_pullups() {
        let config = BusConfig::DEFAULT;
        assert_eq!(config.rx_buffer_len, 0);
        assert_eq!(config.tx_buffer_len, 0);
        assert!(config.scl_pullup);
        assert!(config.sda_pullup);
    }

    #[test]
    fn default_timeout_is_one_second() {
        assert_eq!(BusConfig::DEFAULT.timeout.as_millis(), 1000);
    }

    #[test]
    fn default_pins_come_from_build_config() {
        assert_eq!(BusConfig::DEFAULT.scl_gpio, SCL_GPIO);
        assert_eq!(BusConfig::DEFAULT.sda_gpio, SDA_GPIO);
        assert_ne!(SCL_GPIO, SDA_GPIO);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = BusConfig::DEFAULT
            .with_port(Port::I2C1)
            .with_pins(5, 4)
            .with_frequency(400_000)
            .with_timeout(Duration::from_millis(20));
        assert_eq!(config.port, Port::I2C1);
        assert_eq!((config.scl_gpio, config.sda_gpio), (5, 4));
        assert_eq!(config.frequency_hz, 400_000);
        assert_eq!(config.timeout.as_millis(), 20);
        assert!(config.scl_pullup);
    }
}
