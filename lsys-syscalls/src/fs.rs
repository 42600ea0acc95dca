//! File and descriptor operations
//!
//! Safe wrappers over the raw primitives. Paths are `&CStr` and buffers are
//! slices, so no raw pointer crosses this boundary. Every wrapper decodes the
//! trap value the same way: negative is `Err(errno)` taken from the error slot
//! of [`RawReturn`](lsys_api::RawReturn), anything else is the success value.

use core::ffi::CStr;

use lsys_api::{Errno, FcntlCmd, OpenFlags, RawFd};

use crate::raw;

/// Create a directory
pub fn mkdir(path: &CStr, mode: u32) -> Result<(), Errno> {
    // SAFETY: `path` is NUL-terminated and borrowed for the call.
    unsafe { raw::mkdir(path.as_ptr(), mode) }.into_result().map(drop)
}

/// Remove an empty directory
pub fn rmdir(path: &CStr) -> Result<(), Errno> {
    // SAFETY: `path` is NUL-terminated and borrowed for the call.
    unsafe { raw::rmdir(path.as_ptr()) }.into_result().map(drop)
}

/// Open a file, returning a descriptor the caller now owns
pub fn open(path: &CStr, flags: OpenFlags, mode: u32) -> Result<RawFd, Errno> {
    // SAFETY: `path` is NUL-terminated and borrowed for the call.
    unsafe { raw::open(path.as_ptr(), flags.bits(), mode) }
        .into_result()
        .map(|fd| fd as RawFd)
}

/// Close a file descriptor
///
/// The bridge never closes anything on its own; this is the only way a
/// descriptor leaves the caller's hands.
///
/// Closing is memory-safe, but the bridge cannot check ownership: closing a
/// descriptor that a `stream::Descriptor` or other owner still holds frees
/// its number for reuse by the next `open` or `socket`, and that owner will
/// then act on the wrong file.
pub fn close(fd: RawFd) -> Result<(), Errno> {
    // SAFETY: `close` reads no caller memory; a stale `fd` fails with EBADF.
    unsafe { raw::close(fd) }.into_result().map(drop)
}

/// Read from file descriptor
pub fn read(fd: RawFd, buf: &mut [u8]) -> Result<usize, Errno> {
    // SAFETY: `buf` is valid for writes of `buf.len()` bytes.
    unsafe { raw::read(fd as u32, buf.as_mut_ptr(), buf.len()) }.into_result()
}

/// Write to file descriptor
pub fn write(fd: RawFd, buf: &[u8]) -> Result<usize, Errno> {
    // SAFETY: `buf` is valid for reads of `buf.len()` bytes.
    unsafe { raw::write(fd as u32, buf.as_ptr(), buf.len()) }.into_result()
}

/// Write, reporting failure as the kernel's error code.
///
/// Kept as its own entry point for callers of the C surface, which exports
/// it separately. The error comes from the trap's own return value, the same
/// source every other wrapper uses, so it is identical to [`write`].
pub fn write_with_error_translation(fd: RawFd, buf: &[u8]) -> Result<usize, Errno> {
    write(fd, buf)
}

/// File descriptor control for commands with an integer argument
pub fn fcntl(fd: RawFd, cmd: FcntlCmd, arg: usize) -> Result<i32, Errno> {
    // SAFETY: every `FcntlCmd` takes an integer, never a pointer.
    unsafe { raw::fcntl(fd as u32, cmd.number(), arg) }
        .into_result()
        .map(|v| v as i32)
}
