//! Socket address structures in the layout the kernel reads

use core::mem::size_of;
use core::net::SocketAddrV4;

use static_assertions::const_assert_eq;

use crate::flags::{AF_INET, AF_UNIX};

/// Size of the `sun_path` field.
pub const UNIX_PATH_CAPACITY: usize = 108;
/// Longest path that still leaves room for the terminator.
pub const UNIX_PATH_MAX: usize = UNIX_PATH_CAPACITY - 1;

mod sealed {
    pub trait Sealed {}
}

/// An address `connect` can hand to the kernel.
///
/// Sealed: only the `#[repr(C)]`, padding-free structures of this module can
/// be viewed as bytes.
pub trait SocketAddress: sealed::Sealed {
    /// The structure exactly as it sits in memory.
    fn as_bytes(&self) -> &[u8];

    /// Length passed as `addrlen`.
    fn socklen(&self) -> u32;
}

/// Unix-domain socket address (`struct sockaddr_un`)
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SockAddrUn {
    pub sun_family: u16,
    pub sun_path: [u8; UNIX_PATH_CAPACITY],
}

const_assert_eq!(size_of::<SockAddrUn>(), 110);

impl SockAddrUn {
    /// Offset of `sun_path`.
    pub const PATH_OFFSET: usize = 2;

    /// Build an address from a path.
    ///
    /// At most [`UNIX_PATH_MAX`] bytes are copied and the byte after them is
    /// always NUL. The flag reports whether the kernel will see fewer bytes
    /// than the caller passed: the path was longer than [`UNIX_PATH_MAX`] or
    /// holds a NUL before its end. A single trailing NUL is not counted.
    pub fn from_path(path: &[u8]) -> (Self, bool) {
        let path = path.strip_suffix(&[0]).unwrap_or(path);
        let visible = path.iter().position(|&b| b == 0).unwrap_or(path.len());
        let copied = visible.min(UNIX_PATH_MAX);
        let mut sun_path = [0u8; UNIX_PATH_CAPACITY];
        sun_path[..copied].copy_from_slice(&path[..copied]);
        sun_path[copied] = 0;
        let addr = SockAddrUn {
            sun_family: AF_UNIX as u16,
            sun_path,
        };
        (addr, copied < path.len())
    }

    /// Path bytes up to the first NUL.
    pub fn path(&self) -> &[u8] {
        let end = self
            .sun_path
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(UNIX_PATH_CAPACITY);
        &self.sun_path[..end]
    }
}

impl sealed::Sealed for SockAddrUn {}

impl SocketAddress for SockAddrUn {
    fn as_bytes(&self) -> &[u8] {
        // SAFETY: `SockAddrUn` is `repr(C)` with no padding (asserted above),
        // so every byte of it is initialized.
        unsafe {
            core::slice::from_raw_parts((self as *const Self).cast::<u8>(), size_of::<Self>())
        }
    }

    /// Family, path and terminator.
    fn socklen(&self) -> u32 {
        (Self::PATH_OFFSET + self.path().len() + 1) as u32
    }
}

impl core::fmt::Debug for SockAddrUn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("SockAddrUn");
        s.field("sun_family", &self.sun_family);
        match core::str::from_utf8(self.path()) {
            Ok(path) => s.field("sun_path", &path),
            Err(_) => s.field("sun_path", &self.path()),
        };
        s.finish()
    }
}

/// IPv4 socket address (`struct sockaddr_in`)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SockAddrIn {
    pub sin_family: u16,
    /// Port in network byte order
    pub sin_port: u16,
    pub sin_addr: [u8; 4],
    pub sin_zero: [u8; 8],
}

const_assert_eq!(size_of::<SockAddrIn>(), 16);

impl SockAddrIn {
    pub const fn new(addr: [u8; 4], port: u16) -> Self {
        SockAddrIn {
            sin_family: AF_INET as u16,
            sin_port: port.to_be(),
            sin_addr: addr,
            sin_zero: [0; 8],
        }
    }

    /// Port in host byte order.
    pub const fn port(&self) -> u16 {
        u16::from_be(self.sin_port)
    }
}

impl From<SocketAddrV4> for SockAddrIn {
    fn from(addr: SocketAddrV4) -> Self {
        SockAddrIn::new(addr.ip().octets(), addr.port())
    }
}

impl sealed::Sealed for SockAddrIn {}

impl SocketAddress for SockAddrIn {
    fn as_bytes(&self) -> &[u8] {
        // SAFETY: `repr(C)`, 16 bytes, no padding (asserted above).
        unsafe {
            core::slice::from_raw_parts((self as *const Self).cast::<u8>(), size_of::<Self>())
        }
    }

    fn socklen(&self) -> u32 {
        size_of::<Self>() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path() {
        let (addr, truncated) = SockAddrUn::from_path(b"/tmp/sock");
        assert!(!truncated);
        assert_eq!(addr.sun_family, 1);
        assert_eq!(addr.path(), b"/tmp/sock");
        assert_eq!(addr.sun_path[9], 0);
        assert_eq!(addr.socklen(), 2 + 9 + 1);
    }

    #[test]
    fn test_interior_nul_reported_as_truncated() {
        let (addr, truncated) = SockAddrUn::from_path(b"/tmp\0/zzzz");
        assert!(truncated);
        assert_eq!(addr.path(), b"/tmp");
        assert_eq!(addr.socklen(), 2 + 4 + 1);
    }

    #[test]
    fn test_trailing_nul_not_truncated() {
        let (addr, truncated) = SockAddrUn::from_path(b"/tmp/sock\0");
        assert!(!truncated);
        assert_eq!(addr.path(), b"/tmp/sock");
    }

    #[test]
    fn test_layout_bytes() {
        let (addr, _) = SockAddrUn::from_path(b"/a");
        let bytes = addr.as_bytes();
        assert_eq!(bytes.len(), 110);
        assert_eq!(&bytes[..2], &1u16.to_ne_bytes());
        assert_eq!(&bytes[2..5], b"/a\0");
    }

    #[test]
    fn test_inet_port_order() {
        let addr = SockAddrIn::new([127, 0, 0, 1], 8080);
        assert_eq!(addr.port(), 8080);
        let bytes = addr.as_bytes();
        assert_eq!(&bytes[2..4], &[0x1f, 0x90]);
        assert_eq!(&bytes[4..8], &[127, 0, 0, 1]);
        assert_eq!(addr.socklen(), 16);
    }
}
