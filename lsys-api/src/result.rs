//! Trap results
//!
//! The kernel reports failure by leaving `-errno` in the result register.
//! [`RawReturn`] carries that value untouched and exposes the error slot
//! explicitly, so no caller has to consult a per-thread "last error" after the
//! fact. [`SyscallResult`] is the decoded form.

use crate::errno::Errno;

/// Untranslated value left in the result register by the trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct RawReturn(isize);

impl RawReturn {
    pub const fn new(value: isize) -> Self {
        RawReturn(value)
    }

    /// Build the return a failing trap would have produced.
    pub const fn from_errno(errno: Errno) -> Self {
        RawReturn(errno.as_neg() as isize)
    }

    /// The register value, unmodified.
    pub const fn value(self) -> isize {
        self.0
    }

    /// Error slot: `Some` exactly when the kernel signalled failure.
    pub const fn errno(self) -> Option<Errno> {
        Errno::from_raw_return(self.0)
    }

    pub const fn is_error(self) -> bool {
        self.errno().is_some()
    }

    /// Flatten to the `int` of the C calling convention.
    ///
    /// Failures come back as `-errno` taken from the error slot; successes
    /// are truncated to 32 bits the same way the i386 `eax` register is.
    pub const fn to_c_int(self) -> i32 {
        match self.errno() {
            Some(errno) => errno.as_neg(),
            None => self.0 as i32,
        }
    }

    /// Decode into a `Result`.
    pub const fn into_result(self) -> Result<usize, Errno> {
        match self.errno() {
            Some(errno) => Err(errno),
            None => Ok(self.0 as usize),
        }
    }
}

impl From<RawReturn> for SyscallResult {
    fn from(ret: RawReturn) -> Self {
        SyscallResult::from_isize(ret.value())
    }
}

/// System call result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyscallResult {
    /// Success with return value
    Success(usize),
    /// Error with error code
    Error(Errno),
}

impl SyscallResult {
    /// Decode a raw return value.
    pub fn from_isize(value: isize) -> Self {
        match Errno::from_raw_return(value) {
            Some(errno) => SyscallResult::Error(errno),
            None => SyscallResult::Success(value as usize),
        }
    }

    /// Encode back into the register convention.
    pub fn to_isize(self) -> isize {
        match self {
            SyscallResult::Success(value) => value as isize,
            SyscallResult::Error(errno) => errno.as_neg() as isize,
        }
    }

    /// Returns true if result is success
    pub fn is_success(&self) -> bool {
        matches!(self, SyscallResult::Success(_))
    }

    /// Returns success value if successful
    pub fn success_value(&self) -> Option<usize> {
        match self {
            SyscallResult::Success(value) => Some(*value),
            SyscallResult::Error(_) => None,
        }
    }

    /// Returns error if failed
    pub fn error_value(&self) -> Option<Errno> {
        match self {
            SyscallResult::Error(errno) => Some(*errno),
            SyscallResult::Success(_) => None,
        }
    }
}

impl From<SyscallResult> for Result<usize, Errno> {
    fn from(result: SyscallResult) -> Self {
        match result {
            SyscallResult::Success(value) => Ok(value),
            SyscallResult::Error(errno) => Err(errno),
        }
    }
}
