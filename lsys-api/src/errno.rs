//! Linux error numbers. See [`Errno`].

use core::num::NonZeroU16;
use thiserror::Error;

/// Linux error number
///
/// A transparent wrapper around the positive error code the kernel encodes as
/// `-errno` in its return register. Conversions to and from `i32` are
/// explicit so that a success value is never mistaken for an error.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Error)]
pub struct Errno {
    value: NonZeroU16,
}

/// Errors when converting to an [`Errno`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ErrnoConversionError {
    #[error("Expected positive error number")]
    ExpectedPositive,
    #[error("Error number cannot be zero")]
    ExpectedNonZero,
    #[error("Error number is larger than the kernel error range")]
    ExpectedSmallEnough,
}

macro_rules! errno_consts {
    ($($name:ident = $value:literal => $text:literal,)*) => {
        impl Errno {
            $(
                #[doc = $text]
                pub const $name: Errno = Errno::from_const($value);
            )*

            /// Human-readable name and description.
            pub const fn as_str(self) -> &'static str {
                match self.value.get() {
                    $($value => concat!(stringify!($name), ": ", $text),)*
                    _ => "UNKNOWN",
                }
            }
        }
    };
}

errno_consts! {
    EPERM = 1 => "Operation not permitted",
    ENOENT = 2 => "No such file or directory",
    ESRCH = 3 => "No such process",
    EINTR = 4 => "Interrupted system call",
    EIO = 5 => "Input/output error",
    ENXIO = 6 => "No such device or address",
    E2BIG = 7 => "Argument list too long",
    ENOEXEC = 8 => "Exec format error",
    EBADF = 9 => "Bad file descriptor",
    ECHILD = 10 => "No child processes",
    EAGAIN = 11 => "Resource temporarily unavailable",
    ENOMEM = 12 => "Cannot allocate memory",
    EACCES = 13 => "Permission denied",
    EFAULT = 14 => "Bad address",
    EBUSY = 16 => "Device or resource busy",
    EEXIST = 17 => "File exists",
    EXDEV = 18 => "Invalid cross-device link",
    ENODEV = 19 => "No such device",
    ENOTDIR = 20 => "Not a directory",
    EISDIR = 21 => "Is a directory",
    EINVAL = 22 => "Invalid argument",
    ENFILE = 23 => "Too many open files in system",
    EMFILE = 24 => "Too many open files",
    ENOTTY = 25 => "Inappropriate ioctl for device",
    EFBIG = 27 => "File too large",
    ENOSPC = 28 => "No space left on device",
    ESPIPE = 29 => "Illegal seek",
    EROFS = 30 => "Read-only file system",
    EMLINK = 31 => "Too many links",
    EPIPE = 32 => "Broken pipe",
    ENAMETOOLONG = 36 => "File name too long",
    ENOSYS = 38 => "Function not implemented",
    ENOTEMPTY = 39 => "Directory not empty",
    ELOOP = 40 => "Too many levels of symbolic links",
    ENOTSOCK = 88 => "Socket operation on non-socket",
    EDESTADDRREQ = 89 => "Destination address required",
    EPROTOTYPE = 91 => "Protocol wrong type for socket",
    EPROTONOSUPPORT = 93 => "Protocol not supported",
    EAFNOSUPPORT = 97 => "Address family not supported by protocol",
    EADDRINUSE = 98 => "Address already in use",
    EADDRNOTAVAIL = 99 => "Cannot assign requested address",
    ENETUNREACH = 101 => "Network is unreachable",
    ECONNRESET = 104 => "Connection reset by peer",
    EISCONN = 106 => "Transport endpoint is already connected",
    ENOTCONN = 107 => "Transport endpoint is not connected",
    ETIMEDOUT = 110 => "Connection timed out",
    ECONNREFUSED = 111 => "Connection refused",
    EALREADY = 114 => "Operation already in progress",
    EINPROGRESS = 115 => "Operation now in progress",
}

impl Errno {
    /// Largest value the kernel reports as an error (`MAX_ERRNO`).
    pub const MAX: u16 = 4095;

    /// Negative integer representation, as the trap returns it.
    ///
    /// ```
    /// # use lsys_api::Errno;
    /// assert_eq!(-17, Errno::EEXIST.as_neg());
    /// assert_eq!(17, i32::from(Errno::EEXIST));
    /// ```
    pub const fn as_neg(self) -> i32 {
        -(self.value.get() as i32)
    }

    /// Raw positive error code.
    pub const fn code(self) -> u16 {
        self.value.get()
    }

    /// Decode a raw trap value, `None` unless it lies in `-4095..=-1`.
    pub const fn from_raw_return(ret: isize) -> Option<Errno> {
        if ret < 0 && ret >= -(Self::MAX as isize) {
            match NonZeroU16::new((-ret) as u16) {
                Some(value) => Some(Errno { value }),
                None => None,
            }
        } else {
            None
        }
    }

    const fn from_const(v: u16) -> Self {
        match NonZeroU16::new(v) {
            Some(value) => Self { value },
            None => panic!("errno constants are non-zero"),
        }
    }
}

impl From<Errno> for i32 {
    fn from(e: Errno) -> Self {
        e.value.get().into()
    }
}

impl TryFrom<i32> for Errno {
    type Error = ErrnoConversionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(ErrnoConversionError::ExpectedPositive);
        }
        if value > i32::from(Self::MAX) {
            return Err(ErrnoConversionError::ExpectedSmallEnough);
        }
        NonZeroU16::new(value as u16)
            .map(|value| Errno { value })
            .ok_or(ErrnoConversionError::ExpectedNonZero)
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_str() {
            "UNKNOWN" => write!(f, "E{}: Unknown error", self.value.get()),
            s => f.write_str(s),
        }
    }
}

impl core::fmt::Debug for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Errno({} = {})", self.value.get(), self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from() {
        assert_eq!(Errno::try_from(9), Ok(Errno::EBADF));
        assert_eq!(Errno::try_from(0), Err(ErrnoConversionError::ExpectedNonZero));
        assert_eq!(Errno::try_from(-2), Err(ErrnoConversionError::ExpectedPositive));
        assert_eq!(
            Errno::try_from(4096),
            Err(ErrnoConversionError::ExpectedSmallEnough)
        );
    }

    #[test]
    fn test_from_raw_return() {
        assert_eq!(Errno::from_raw_return(-2), Some(Errno::ENOENT));
        assert_eq!(Errno::from_raw_return(-4095).map(Errno::code), Some(4095));
        assert_eq!(Errno::from_raw_return(-4096), None);
        assert_eq!(Errno::from_raw_return(0), None);
        assert_eq!(Errno::from_raw_return(3), None);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Errno::EEXIST.as_str(), "EEXIST: File exists");
        assert_eq!(Errno::try_from(200).unwrap().as_str(), "UNKNOWN");
    }
}
