//! Constants handed to the kernel unchanged (i386 values)

use bitflags::bitflags;

// ============================================================================
// Address families and socket types
// ============================================================================

/// Local communication domain
pub const AF_UNIX: i32 = 1;
/// IPv4
pub const AF_INET: i32 = 2;

/// Byte stream type
pub const SOCK_STREAM: i32 = 1;
/// Datagram type
pub const SOCK_DGRAM: i32 = 2;
pub const SOCK_NONBLOCK: i32 = 0o4000;
pub const SOCK_CLOEXEC: i32 = 0o2000000;

// ============================================================================
// fcntl commands
// ============================================================================

/// `fcntl` commands whose argument is a plain integer.
///
/// Commands taking a pointer (record locks, owner queries) are only reachable
/// through the raw primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum FcntlCmd {
    /// Duplicate onto the lowest free descriptor >= arg
    DupFd = 0,
    /// Read descriptor flags
    GetFd = 1,
    /// Set descriptor flags
    SetFd = 2,
    /// Read file status flags
    GetFl = 3,
    /// Set file status flags
    SetFl = 4,
}

impl FcntlCmd {
    pub const fn number(self) -> u32 {
        self as u32
    }
}

/// Descriptor flag for [`FcntlCmd::SetFd`]
pub const FD_CLOEXEC: usize = 1;

bitflags! {
    /// Flags for `open`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenFlags: i32 {
        const RDONLY = 0;
        const WRONLY = 1;
        const RDWR = 2;
        const CREAT = 0o100;
        const EXCL = 0o200;
        const TRUNC = 0o1000;
        const APPEND = 0o2000;
        const NONBLOCK = 0o4000;
        const DIRECTORY = 0o200000;
        const CLOEXEC = 0o2000000;
    }
}
