//! Log facade shared by the driver.
//!
//! Each macro forwards to `defmt` (hardware builds, `defmt` feature) and/or
//! `tracing` (host builds, `tracing` feature). With neither backend enabled the
//! arguments are still type-checked through `format_args!` and then discarded,
//! so both backends must accept every format string used here: stick to
//! plain `{}` placeholders over integers and `&str`.
//!
//! ```ignore
//! log_error!("[max9744] MAX9744 not connected: {}", code);
//! ```

/// Verbose-level message (initialization steps, per-command outcome).
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        {
            let _ = core::format_args!($($arg)*);
        }
    }};
}

/// Debug-level message (which command is being issued).
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        {
            let _ = core::format_args!($($arg)*);
        }
    }};
}

/// Error-level message (bus timeout, device not responding).
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::error!($($arg)*);
        #[cfg(feature = "tracing")]
        tracing::error!($($arg)*);
        #[cfg(not(any(feature = "defmt", feature = "tracing")))]
        {
            let _ = core::format_args!($($arg)*);
        }
    }};
}
