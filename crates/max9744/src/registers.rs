//! MAX9744 I²C address and command-byte bit fields.
//!
//! Reference: Maxim MAX9744 datasheet, "I²C Interface" / "Volume Control".
//!
//! Every command is a single byte. Bits 7:6 select what the remaining bits
//! mean:
//!
//! ```text
//! 00vv_vvvv  absolute volume, v = 0..=63
//! 1000_0s00  modulation select, s = 0 filterless / 1 classic PWM
//! 1000_1d00  volume step, d = 0 up / 1 down
//! ```

/// 7-bit I²C device address (fixed in silicon for the default ADDR strapping).
pub const MAX9744_I2C_ADDR: u8 = 0x4B;

/// R/W bit appended to the address frame for a write transfer.
pub const WRITE_BIT: u8 = 0;

/// Bit 7: control command (modulation or volume step) instead of absolute volume.
pub const CONTROL_SELECT: u8 = 0b1000_0000;
/// Bit 3: volume step command.
pub const STEP_COMMAND: u8 = 0b0000_1000;
/// Bit 1: modulation selector (classic PWM) or step direction (down).
pub const SELECTOR: u8 = 0b0000_0010;

/// Bits 7:6 of an absolute-volume byte. Must be zero.
pub const VOLUME_SELECT_MASK: u8 = 0b1100_0000;
/// Highest absolute volume level.
pub const MAX_VOLUME: u8 = 63;

/// Address frame sent after START: `address << 1 | R/W`.
#[inline]
#[must_use]
#[allow(clippy::arithmetic_side_effects)] // 7-bit address: the shift cannot overflow
pub const fn address_frame(address: u8) -> u8 {
    (address << 1) | WRITE_BIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i2c_addr_matches_datasheet() {
        assert_eq!(MAX9744_I2C_ADDR, 0x4B);
    }

    #[test]
    fn address_frame_is_shifted_write() {
        assert_eq!(address_frame(MAX9744_I2C_ADDR), 0x96);
    }

    #[test]
    fn max_volume_fits_below_select_bits() {
        assert_eq!(MAX_VOLUME & VOLUME_SELECT_MASK, 0);
        assert_eq!(64 & VOLUME_SELECT_MASK, 0b0100_0000);
    }

    #[test]
    fn control_bits_are_distinct() {
        assert_eq!(CONTROL_SELECT & STEP_COMMAND, 0);
        assert_eq!(CONTROL_SELECT & SELECTOR, 0);
        assert_eq!(STEP_COMMAND & SELECTOR, 0);
    }
}
