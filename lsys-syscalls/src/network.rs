//! Socket operations
//!
//! `socket` and `connect` travel through the multiplexer; `connect_by_path`
//! builds the Unix-domain address itself and reports the attempt to a
//! [`TraceSink`].

use lsys_api::{Errno, RawFd, SockAddrUn, SocketAddress};

use crate::socketcall::{self, ConnectArgs, SocketArgs};
use crate::trace::{ConnectTrace, LogSink, TraceSink};

/// Create a socket, returning a descriptor the caller now owns
pub fn socket(domain: i32, ty: i32, protocol: i32) -> Result<RawFd, Errno> {
    socketcall::dispatch(&SocketArgs { domain, ty, protocol })
        .into_result()
        .map(|fd| fd as RawFd)
}

/// Connect a socket to `address`
pub fn connect(fd: RawFd, address: &dyn SocketAddress) -> Result<(), Errno> {
    socketcall::dispatch(&ConnectArgs { fd, address })
        .into_result()
        .map(drop)
}

/// Connect a Unix-domain socket to the filesystem path `path`.
///
/// Paths longer than 107 bytes are cut to 107 bytes; the address is always
/// NUL-terminated. The attempt is logged through [`LogSink`].
pub fn connect_by_path(fd: RawFd, path: impl AsRef<[u8]>) -> Result<(), Errno> {
    connect_by_path_with(fd, path, &LogSink)
}

/// [`connect_by_path`] reporting to `sink` instead of the log.
pub fn connect_by_path_with(
    fd: RawFd,
    path: impl AsRef<[u8]>,
    sink: &dyn TraceSink,
) -> Result<(), Errno> {
    let (address, truncated) = SockAddrUn::from_path(path.as_ref());
    let outcome = connect(fd, &address);
    sink.on_connect(&ConnectTrace { fd, address, truncated, outcome });
    outcome
}
