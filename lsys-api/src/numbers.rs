//! i386 Linux system call numbering
//!
//! These values are the wire protocol of the bridge: they are placed in `eax`
//! before `int 0x80` and must match the 32-bit x86 kernel exactly.

/// System calls exposed by the bridge, numbered as on 32-bit x86 Linux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Sysno {
    /// Read from file descriptor
    Read = 3,
    /// Write to file descriptor
    Write = 4,
    /// Open file
    Open = 5,
    /// Close file descriptor
    Close = 6,
    /// Get process ID
    Getpid = 20,
    /// Get real user ID (legacy 16-bit entry point)
    Getuid = 24,
    /// Create directory
    Mkdir = 39,
    /// Remove directory
    Rmdir = 40,
    /// File descriptor control
    Fcntl = 55,
    /// Multiplexed socket operations
    Socketcall = 102,
}

impl Sysno {
    /// Every system call in the catalog.
    pub const ALL: [Sysno; 10] = [
        Sysno::Read,
        Sysno::Write,
        Sysno::Open,
        Sysno::Close,
        Sysno::Getpid,
        Sysno::Getuid,
        Sysno::Mkdir,
        Sysno::Rmdir,
        Sysno::Fcntl,
        Sysno::Socketcall,
    ];

    /// The value loaded into `eax`.
    pub const fn number(self) -> usize {
        self as usize
    }

    /// Reverse lookup from an i386 number.
    pub fn from_number(number: usize) -> Option<Sysno> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }
}

/// Sub-operations dispatched through [`Sysno::Socketcall`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum SocketCall {
    /// `socket(domain, type, protocol)`
    Socket = 1,
    /// `connect(fd, addr, addrlen)`
    Connect = 3,
}

impl SocketCall {
    /// The sub-operation code passed in `ebx`.
    pub const fn number(self) -> usize {
        self as usize
    }

    /// Number of words the kernel reads from the argument vector.
    pub const fn arity(self) -> usize {
        match self {
            SocketCall::Socket | SocketCall::Connect => 3,
        }
    }

    pub fn from_number(number: usize) -> Option<SocketCall> {
        match number {
            1 => Some(SocketCall::Socket),
            3 => Some(SocketCall::Connect),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i386_numbering() {
        assert_eq!(Sysno::Write.number(), 4);
        assert_eq!(Sysno::Read.number(), 3);
        assert_eq!(Sysno::Open.number(), 5);
        assert_eq!(Sysno::Close.number(), 6);
        assert_eq!(Sysno::Getpid.number(), 20);
        assert_eq!(Sysno::Getuid.number(), 24);
        assert_eq!(Sysno::Mkdir.number(), 39);
        assert_eq!(Sysno::Rmdir.number(), 40);
        assert_eq!(Sysno::Fcntl.number(), 55);
        assert_eq!(Sysno::Socketcall.number(), 102);
    }

    #[test]
    fn test_socketcall_numbering() {
        assert_eq!(SocketCall::Socket.number(), 1);
        assert_eq!(SocketCall::Connect.number(), 3);
        assert_eq!(SocketCall::from_number(2), None);
        assert_eq!(SocketCall::from_number(3), Some(SocketCall::Connect));
    }

    #[test]
    fn test_from_number() {
        for sysno in Sysno::ALL {
            assert_eq!(Sysno::from_number(sysno.number()), Some(sysno));
        }
        assert_eq!(Sysno::from_number(1), None);
    }
}
