//! [`I2cMaster`] adapter over a blocking embedded-hal 1.0 I²C bus.
//!
//! The HAL peripheral arrives already configured (pins, pull-ups and clock
//! speed are set when the board code constructs it) so `configure` and
//! `install` only record the requested configuration as a debug trace.
//! `execute` flattens the transaction into a single `I2c::write`, which
//! issues the START, address, data and STOP frames itself and fails on a
//! missing acknowledge.

use embassy_time::Duration;
use embedded_hal::i2c::I2c;

use crate::bus::{Frame, I2cMaster, Transaction, MAX_FRAMES};
use crate::config::{BusConfig, Port};
use crate::error::HalBusError;

/// embedded-hal I²C bus wrapped as an [`I2cMaster`].
///
/// Limits of this path, inherited from embedded-hal 1.0:
///
/// - The `timeout` passed to [`I2cMaster::execute`] is not enforced here.
///   How long a transfer may block is decided by the HAL peripheral, so the
///   [`BusConfig::timeout`] bound does not apply.
/// - Errors are never classified as timeouts
///   ([`BusError::is_timeout`](crate::BusError::is_timeout) is always
///   `false`); a HAL-side timeout surfaces as a plain bus error.
/// - Every byte is acknowledge-checked by the HAL. `ack_check: false` on a
///   [`Frame::Write`] has no effect.
pub struct HalBus<I> {
    i2c: I,
}

impl<I: I2c> HalBus<I> {
    /// Wrap a configured I²C peripheral.
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give the peripheral back.
    pub fn release(self) -> I {
        self.i2c
    }
}

/// Split a START, address+W, data..., STOP transaction into the 7-bit
/// address and the data bytes. Returns the number of data bytes copied.
#[allow(clippy::arithmetic_side_effects)] // address byte >> 1 cannot overflow
fn flatten(transaction: &Transaction, data: &mut [u8; MAX_FRAMES]) -> Option<(u8, usize)> {
    let (first, rest) = transaction.frames().split_first()?;
    let (last, middle) = rest.split_last()?;
    if *first != Frame::Start || *last != Frame::Stop {
        return None;
    }

    let (address_frame, payload) = middle.split_first()?;
    let address_byte = match *address_frame {
        Frame::Write { byte, .. } if byte & 0x01 == 0 => byte,
        _ => return None,
    };

    let mut len = 0usize;
    for frame in payload {
        let Frame::Write { byte, .. } = *frame else {
            return None;
        };
        *data.get_mut(len)? = byte;
        len = len.saturating_add(1);
    }
    Some((address_byte >> 1, len))
}

impl<I: I2c> I2cMaster for HalBus<I> {
    type Error = HalBusError<I::Error>;

    fn configure(&mut self, config: &BusConfig) -> Result<(), Self::Error> {
        log_trace!(
            "[max9744] HAL bus owns setup: scl={} sda={} freq={}",
            config.scl_gpio,
            config.sda_gpio,
            config.frequency_hz
        );
        Ok(())
    }

    fn install(&mut self, _config: &BusConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    fn execute(
        &mut self,
        _port: Port,
        transaction: &Transaction,
        timeout: Duration,
    ) -> Result<(), Self::Error> {
        log_trace!(
            "[max9744] HAL bus: {} ms timeout left to the HAL",
            timeout.as_millis()
        );
        let mut data = [0u8; MAX_FRAMES];
        let (address, len) = flatten(transaction, &mut data).ok_or(HalBusError::Malformed)?;
        let bytes = data.get(..len).ok_or(HalBusError::Malformed)?;
        self.i2c.write(address, bytes).map_err(HalBusError::Bus)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const TIMEOUT: Duration = Duration::from_millis(1000);

    #[test]
    fn single_byte_command_becomes_one_write() {
        let expectations = [I2cTransaction::write(0x4B, std::vec![0x88])];
        let mut bus = HalBus::new(I2cMock::new(&expectations));
        bus.execute(Port::I2C0, &Transaction::write_byte(0x4B, 0x88), TIMEOUT)
            .unwrap();
        bus.release().done();
    }

    #[test]
    fn nack_is_wrapped() {
        let expectations = [I2cTransaction::write(0x4B, std::vec![0x80])
            .with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))];
        let mut bus = HalBus::new(I2cMock::new(&expectations));
        let err = bus
            .execute(Port::I2C0, &Transaction::write_byte(0x4B, 0x80), TIMEOUT)
            .unwrap_err();
        assert_eq!(
            err,
            HalBusError::Bus(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
        );
        bus.release().done();
    }

    #[test]
    fn configure_and_install_do_not_touch_the_bus() {
        let mut bus = HalBus::new(I2cMock::new(&[] as &[I2cTransaction]));
        bus.configure(&BusConfig::DEFAULT).unwrap();
        bus.install(&BusConfig::DEFAULT).unwrap();
        bus.release().done();
    }

    #[test]
    fn transaction_without_stop_is_rejected() {
        let mut txn = Transaction::new();
        txn.push(Frame::Start).unwrap();
        txn.push(Frame::Write { byte: 0x96, ack_check: true }).unwrap();
        txn.push(Frame::Write { byte: 0x10, ack_check: true }).unwrap();

        let mut bus = HalBus::new(I2cMock::new(&[] as &[I2cTransaction]));
        assert_eq!(
            bus.execute(Port::I2C0, &txn, TIMEOUT),
            Err(HalBusError::Malformed)
        );
        bus.release().done();
    }

    #[test]
    fn read_address_frame_is_rejected() {
        let mut txn = Transaction::new();
        txn.push(Frame::Start).unwrap();
        txn.push(Frame::Write { byte: 0x97, ack_check: true }).unwrap();
        txn.push(Frame::Stop).unwrap();

        let mut bus = HalBus::new(I2cMock::new(&[] as &[I2cTransaction]));
        assert_eq!(
            bus.execute(Port::I2C0, &txn, TIMEOUT),
            Err(HalBusError::Malformed)
        );
        bus.release().done();
    }

    #[test]
    fn timeout_argument_does_not_change_the_write() {
        let expectations = [
            I2cTransaction::write(0x4B, std::vec![0x20]),
            I2cTransaction::write(0x4B, std::vec![0x20]),
        ];
        let mut bus = HalBus::new(I2cMock::new(&expectations));
        let txn = Transaction::write_byte(0x4B, 0x20);
        bus.execute(Port::I2C0, &txn, Duration::from_millis(0)).unwrap();
        bus.execute(Port::I2C0, &txn, Duration::from_secs(60)).unwrap();
        bus.release().done();
    }

    #[test]
    fn hal_errors_are_never_timeouts() {
        use crate::bus::BusError;

        let expectations =
            [I2cTransaction::write(0x4B, std::vec![0x88]).with_error(ErrorKind::Other)];
        let mut bus = HalBus::new(I2cMock::new(&expectations));
        let err = bus
            .execute(Port::I2C0, &Transaction::write_byte(0x4B, 0x88), TIMEOUT)
            .unwrap_err();
        assert!(!err.is_timeout());
        bus.release().done();
    }

    #[test]
    fn multi_byte_payload_is_kept_in_order() {
        let mut txn = Transaction::new();
        txn.push(Frame::Start).unwrap();
        txn.push(Frame::Write { byte: 0x96, ack_check: true }).unwrap();
        txn.push(Frame::Write { byte: 0x01, ack_check: true }).unwrap();
        txn.push(Frame::Write { byte: 0x02, ack_check: false }).unwrap();
        txn.push(Frame::Stop).unwrap();

        let expectations = [I2cTransaction::write(0x4B, std::vec![0x01, 0x02])];
        let mut bus = HalBus::new(I2cMock::new(&expectations));
        bus.execute(Port::I2C0, &txn, TIMEOUT).unwrap();
        bus.release().done();
    }
}
