//! Semantic commands and their single-byte encoding.

use crate::registers::{CONTROL_SELECT, SELECTOR, STEP_COMMAND};

/// Output modulation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModulationMode {
    /// Filterless modulation (power-on default of the chip).
    #[default]
    Filterless,
    /// Classic PWM modulation.
    ClassicPwm,
}

/// Direction of a volume step. The step size is fixed by the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepDirection {
    /// One step louder.
    Up,
    /// One step quieter.
    Down,
}

/// A MAX9744 command, before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Select the output modulation scheme.
    Modulation(ModulationMode),
    /// Step the volume up or down.
    Step(StepDirection),
    /// Absolute volume level.
    ///
    /// The level is sent as-is: values above
    /// [`MAX_VOLUME`](crate::registers::MAX_VOLUME) set bits 7:6 and the chip
    /// reads the byte as a different command.
    Volume(u8),
}

impl Command {
    /// Encode to the byte written on the bus.
    #[must_use]
    pub const fn encode(self) -> u8 {
        match self {
            Command::Modulation(ModulationMode::Filterless) => CONTROL_SELECT,
            Command::Modulation(ModulationMode::ClassicPwm) => CONTROL_SELECT | SELECTOR,
            Command::Step(StepDirection::Up) => CONTROL_SELECT | STEP_COMMAND,
            Command::Step(StepDirection::Down) => CONTROL_SELECT | STEP_COMMAND | SELECTOR,
            Command::Volume(level) => level,
        }
    }

    /// Short name for log messages.
    pub const fn name(self) -> &'static str {
        match self {
            Command::Modulation(ModulationMode::Filterless) => "set filterless modulation",
            Command::Modulation(ModulationMode::ClassicPwm) => "set classic pwm modulation",
            Command::Step(StepDirection::Up) => "increase volume",
            Command::Step(StepDirection::Down) => "decrease volume",
            Command::Volume(_) => "set volume",
        }
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> u8 {
        command.encode()
    }
}
