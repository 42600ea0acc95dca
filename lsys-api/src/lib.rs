//! lsys API
//!
//! Vocabulary shared by every lsys crate: the i386 Linux system call and
//! socketcall numbering, kernel error codes, the raw trap result and the
//! address structures handed to the kernel.
//!
//! # Architecture
//!
//! - **numbers**: `Sysno` and `SocketCall`, reproduced bit-for-bit from the
//!   32-bit x86 kernel ABI
//! - **errno**: `Errno`, a typed Linux error number
//! - **result**: `RawReturn` (trap value plus error slot) and `SyscallResult`
//! - **addr**: `SockAddrUn`, `SockAddrIn` and the `SocketAddress` trait
//! - **flags**: open flags, fcntl commands, address families, socket types
//!
//! The crate only needs `core` and never allocates.

#![no_std]

pub mod addr;
pub mod errno;
pub mod flags;
pub mod numbers;
pub mod result;

pub use addr::{SockAddrIn, SockAddrUn, SocketAddress, UNIX_PATH_CAPACITY, UNIX_PATH_MAX};
pub use errno::{Errno, ErrnoConversionError};
pub use flags::*;
pub use numbers::{SocketCall, Sysno};
pub use result::{RawReturn, SyscallResult};

/// A file descriptor as the kernel hands it out.
pub type RawFd = i32;
