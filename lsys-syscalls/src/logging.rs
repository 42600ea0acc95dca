//! Logging support for lsys-syscalls
//!
//! Crate-internal macros that forward to the `log` crate when the `log`
//! feature is on, and only mark their arguments as used when it is off, so
//! call sites need no `#[cfg]` of their own.

/// Trace-level logging
macro_rules! lsys_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
        #[cfg(not(feature = "log"))]
        { let _ = format_args!($($arg)*); }
    }
}

/// Debug-level logging
macro_rules! lsys_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
        #[cfg(not(feature = "log"))]
        { let _ = format_args!($($arg)*); }
    }
}

/// Warn-level logging
macro_rules! lsys_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::warn!($($arg)*);
        #[cfg(not(feature = "log"))]
        { let _ = format_args!($($arg)*); }
    }
}

#[allow(unused_imports)]
pub(crate) use {lsys_debug, lsys_trace, lsys_warn};
