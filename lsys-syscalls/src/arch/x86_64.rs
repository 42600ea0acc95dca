//! x86-64 Linux host backend
//!
//! Lets the bridge run against the development host's kernel. Each i386 call
//! is reissued through `syscall` under its x86-64 number. x86-64 has no
//! `socketcall`, so the argument vector is unpacked here and sent to
//! `socket`/`connect` directly, the way the i386 kernel unpacks it.
//!
//! # Calling Convention
//! - Syscall number in RAX
//! - Arguments in RDI, RSI, RDX
//! - Return value in RAX
//! - RCX and R11 are clobbered by the syscall instruction

use core::arch::asm;

use lsys_api::{Errno, SocketCall, Sysno};

const SYS_READ: usize = 0;
const SYS_WRITE: usize = 1;
const SYS_OPEN: usize = 2;
const SYS_CLOSE: usize = 3;
const SYS_GETPID: usize = 39;
const SYS_SOCKET: usize = 41;
const SYS_CONNECT: usize = 42;
const SYS_FCNTL: usize = 72;
const SYS_MKDIR: usize = 83;
const SYS_RMDIR: usize = 84;
const SYS_GETUID: usize = 102;

/// Native number for everything except `socketcall`.
const fn native(nr: Sysno) -> Option<usize> {
    match nr {
        Sysno::Read => Some(SYS_READ),
        Sysno::Write => Some(SYS_WRITE),
        Sysno::Open => Some(SYS_OPEN),
        Sysno::Close => Some(SYS_CLOSE),
        Sysno::Getpid => Some(SYS_GETPID),
        Sysno::Getuid => Some(SYS_GETUID),
        Sysno::Mkdir => Some(SYS_MKDIR),
        Sysno::Rmdir => Some(SYS_RMDIR),
        Sysno::Fcntl => Some(SYS_FCNTL),
        Sysno::Socketcall => None,
    }
}

#[inline(always)]
unsafe fn native3(num: usize, arg0: usize, arg1: usize, arg2: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") num => ret,
            in("rdi") arg0,
            in("rsi") arg1,
            in("rdx") arg2,
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack, preserves_flags),
        );
    }
    ret
}

/// Unpack a socketcall argument vector the way the i386 kernel does.
unsafe fn socketcall(call: usize, args: *const usize) -> isize {
    let num = match SocketCall::from_number(call) {
        Some(SocketCall::Socket) => SYS_SOCKET,
        Some(SocketCall::Connect) => SYS_CONNECT,
        None => return Errno::EINVAL.as_neg() as isize,
    };
    if args.is_null() {
        return Errno::EFAULT.as_neg() as isize;
    }
    // SAFETY: the caller guarantees `args` points at the vector the
    // sub-operation expects; both implemented sub-operations take three words.
    let words = unsafe { core::slice::from_raw_parts(args, 3) };
    unsafe { native3(num, words[0], words[1], words[2]) }
}

#[inline]
unsafe fn route(nr: Sysno, arg0: usize, arg1: usize, arg2: usize) -> isize {
    match native(nr) {
        Some(num) => unsafe { native3(num, arg0, arg1, arg2) },
        None => unsafe { socketcall(arg0, arg1 as *const usize) },
    }
}

#[inline(always)]
pub unsafe fn syscall0(nr: Sysno) -> isize {
    unsafe { route(nr, 0, 0, 0) }
}

#[inline(always)]
pub unsafe fn syscall1(nr: Sysno, arg0: usize) -> isize {
    unsafe { route(nr, arg0, 0, 0) }
}

#[inline(always)]
pub unsafe fn syscall2(nr: Sysno, arg0: usize, arg1: usize) -> isize {
    unsafe { route(nr, arg0, arg1, 0) }
}

#[inline(always)]
pub unsafe fn syscall3(nr: Sysno, arg0: usize, arg1: usize, arg2: usize) -> isize {
    unsafe { route(nr, arg0, arg1, arg2) }
}
