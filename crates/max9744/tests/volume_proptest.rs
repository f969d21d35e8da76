//! Property tests for absolute-volume encoding.
// Integration test file: unwrap/expect are intentional test mechanisms.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use max9744::command::Command;
use max9744::mock::MockBus;
use max9744::registers::{MAX_VOLUME, VOLUME_SELECT_MASK};
use max9744::Max9744;
use proptest::prelude::*;

proptest! {
    /// In-range levels leave the register-select bits clear.
    #[test]
    fn in_range_levels_select_volume_register(level in 0u8..=MAX_VOLUME) {
        prop_assert_eq!(Command::Volume(level).encode() & VOLUME_SELECT_MASK, 0);
    }

    /// The driver sends exactly the byte it was given, in range or not.
    #[test]
    fn set_volume_sends_level_verbatim(level in any::<u8>()) {
        let mut amp = Max9744::new(MockBus::new());
        prop_assert!(amp.set_volume(level).is_ok());
        prop_assert_eq!(amp.release().sent_bytes(), vec![level]);
    }

    /// Any sequence of levels is sent in order, one transaction each.
    #[test]
    fn volume_sequence_is_sent_in_order(levels in proptest::collection::vec(0u8..=MAX_VOLUME, 0..16)) {
        let mut amp = Max9744::new(MockBus::new());
        for &level in &levels {
            amp.set_volume(level).unwrap();
        }
        let bus = amp.release();
        prop_assert_eq!(bus.executed.len(), levels.len());
        prop_assert_eq!(bus.sent_bytes(), levels);
    }
}
