//! Raw syscall primitives
//!
//! One function per kernel entry point. Each loads its fixed i386 number and
//! the caller's words into the trap registers and returns whatever the kernel
//! left in the result register. Nothing is validated and nothing is
//! translated: failure is only ever the negative value in [`RawReturn`].
//!
//! Everything taking a pointer is `unsafe`; the safe wrappers live in
//! [`crate::fs`], [`crate::process`] and [`crate::network`].

use core::ffi::c_char;

use lsys_api::{RawReturn, Sysno};

use crate::arch::{syscall0, syscall1, syscall2, syscall3};

/// Create a directory
///
/// # Safety
///
/// `path` must point at a NUL-terminated string readable by the kernel.
pub unsafe fn mkdir(path: *const c_char, mode: u32) -> RawReturn {
    RawReturn::new(unsafe { syscall2(Sysno::Mkdir, path as usize, mode as usize) })
}

/// Remove an empty directory
///
/// # Safety
///
/// `path` must point at a NUL-terminated string readable by the kernel.
pub unsafe fn rmdir(path: *const c_char) -> RawReturn {
    RawReturn::new(unsafe { syscall1(Sysno::Rmdir, path as usize) })
}

/// Get process ID
pub fn getpid() -> RawReturn {
    // SAFETY: no arguments, no memory is touched.
    RawReturn::new(unsafe { syscall0(Sysno::Getpid) })
}

/// Get real user ID
pub fn getuid() -> RawReturn {
    // SAFETY: no arguments, no memory is touched.
    RawReturn::new(unsafe { syscall0(Sysno::Getuid) })
}

/// Close a file descriptor
///
/// # Safety
///
/// The caller must own `fd`; any other holder is left with a dangling
/// descriptor number.
pub unsafe fn close(fd: i32) -> RawReturn {
    RawReturn::new(unsafe { syscall1(Sysno::Close, fd as usize) })
}

/// Open a file
///
/// # Safety
///
/// `path` must point at a NUL-terminated string readable by the kernel.
pub unsafe fn open(path: *const c_char, flags: i32, mode: u32) -> RawReturn {
    RawReturn::new(unsafe { syscall3(Sysno::Open, path as usize, flags as usize, mode as usize) })
}

/// Read from file descriptor
///
/// # Safety
///
/// `buf` must be valid for writes of `count` bytes.
pub unsafe fn read(fd: u32, buf: *mut u8, count: usize) -> RawReturn {
    RawReturn::new(unsafe { syscall3(Sysno::Read, fd as usize, buf as usize, count) })
}

/// Write to file descriptor
///
/// # Safety
///
/// `buf` must be valid for reads of `count` bytes.
pub unsafe fn write(fd: u32, buf: *const u8, count: usize) -> RawReturn {
    RawReturn::new(unsafe { syscall3(Sysno::Write, fd as usize, buf as usize, count) })
}

/// File descriptor control
///
/// # Safety
///
/// For commands whose argument is a pointer, `arg` must point at the
/// structure that command expects.
pub unsafe fn fcntl(fd: u32, cmd: u32, arg: usize) -> RawReturn {
    RawReturn::new(unsafe { syscall3(Sysno::Fcntl, fd as usize, cmd as usize, arg) })
}

/// Multiplexed socket entry point
///
/// # Safety
///
/// `args` must point at an argument vector whose length and order match
/// sub-operation `call`, including any pointers stored in it.
pub unsafe fn socketcall(call: usize, args: *const usize) -> RawReturn {
    RawReturn::new(unsafe { syscall2(Sysno::Socketcall, call, args as usize) })
}
