//! lsys System Calls
//!
//! A bridge that exposes a fixed catalog of Linux system calls to a process
//! whose host traps the 32-bit x86 `int 0x80` gate.
//!
//! # Architecture
//!
//! - **arch**: the trap itself, one backend per target
//! - **raw**: one primitive per kernel entry point, result passed through
//! - **socketcall**: the multiplexed socket entry point and its argument vectors
//! - **fs**, **process**, **network**: safe façade, one error policy
//! - **trace**: injectable diagnostics for `connect_by_path`
//! - **stream**: owned-descriptor Unix stream client (`std` feature)
//!
//! # Error policy
//!
//! The kernel returns `-errno` in the result register. That value is the only
//! error source: [`RawReturn`](lsys_api::RawReturn) carries it with an explicit
//! error slot and every safe wrapper decodes it into `Result<_, Errno>`. No
//! per-thread error state is read, so there is no ordering hazard between a
//! failing call and the code that inspects it.
//!
//! # Usage
//!
//! ```no_run
//! use lsys_syscalls::network;
//! use lsys_api::{AF_UNIX, SOCK_STREAM};
//!
//! let fd = network::socket(AF_UNIX, SOCK_STREAM, 0)?;
//! network::connect_by_path(fd, "/run/user/1000/bus")?;
//! # Ok::<(), lsys_api::Errno>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod logging;

pub(crate) mod arch;
pub mod fs;
pub mod network;
pub mod process;
pub mod raw;
pub mod socketcall;
#[cfg(feature = "std")]
pub mod stream;
pub mod trace;

pub use fs::{close, fcntl, mkdir, open, read, rmdir, write, write_with_error_translation};
pub use network::{connect, connect_by_path, connect_by_path_with, socket};
pub use process::{getpid, getuid};
pub use trace::{ConnectTrace, FnSink, LogSink, NullSink, TraceSink};
