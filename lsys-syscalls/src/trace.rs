//! Diagnostic trace of path connects
//!
//! `connect_by_path` reports every attempt to a [`TraceSink`]. The report is
//! observability only: the value returned to the caller never depends on the
//! sink, and the sink cannot change it.

use lsys_api::{Errno, RawFd, SockAddrUn};

use crate::logging::{lsys_debug, lsys_warn};

/// One `connect_by_path` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectTrace {
    pub fd: RawFd,
    /// Address exactly as handed to the kernel
    pub address: SockAddrUn,
    /// The caller's path did not fit and was cut to 107 bytes
    pub truncated: bool,
    pub outcome: Result<(), Errno>,
}

impl ConnectTrace {
    /// Outcome flattened to the C convention: 0 or `-errno`.
    pub fn outcome_code(&self) -> i32 {
        match self.outcome {
            Ok(()) => 0,
            Err(errno) => errno.as_neg(),
        }
    }
}

/// Receiver for connect diagnostics.
#[cfg_attr(test, mockall::automock)]
pub trait TraceSink {
    fn on_connect(&self, event: &ConnectTrace);
}

/// Forwards to the `log` crate: debug on success, warn on failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn on_connect(&self, event: &ConnectTrace) {
        let path = core::str::from_utf8(event.address.path()).unwrap_or("<non-utf8 path>");
        match event.outcome {
            Ok(()) => {
                lsys_debug!("connect fd={} path={} truncated={}: ok", event.fd, path, event.truncated);
            }
            Err(errno) => {
                lsys_warn!("connect fd={} path={} truncated={}: {}", event.fd, path, event.truncated, errno);
            }
        }
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn on_connect(&self, _event: &ConnectTrace) {}
}

/// Adapts a closure.
pub struct FnSink<F>(pub F);

impl<F: Fn(&ConnectTrace)> TraceSink for FnSink<F> {
    fn on_connect(&self, event: &ConnectTrace) {
        (self.0)(event)
    }
}

impl<T: TraceSink + ?Sized> TraceSink for &T {
    fn on_connect(&self, event: &ConnectTrace) {
        (**self).on_connect(event)
    }
}
