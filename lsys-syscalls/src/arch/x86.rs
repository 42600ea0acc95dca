//! 32-bit x86 gate
//!
//! # Calling Convention
//! - Syscall number in EAX
//! - Arguments in EBX, ECX, EDX
//! - Return value in EAX, `-errno` on failure
//!
//! ESI cannot be named as an operand on x86-32, which is why the catalog
//! stops at three arguments: every call fits in EBX/ECX/EDX.

use core::arch::asm;

use lsys_api::Sysno;

#[inline(always)]
pub unsafe fn syscall0(nr: Sysno) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "int 0x80",
            inlateout("eax") nr.number() => ret,
            options(preserves_flags),
        );
    }
    ret
}

#[inline(always)]
pub unsafe fn syscall1(nr: Sysno, arg0: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "int 0x80",
            inlateout("eax") nr.number() => ret,
            in("ebx") arg0,
            options(preserves_flags),
        );
    }
    ret
}

#[inline(always)]
pub unsafe fn syscall2(nr: Sysno, arg0: usize, arg1: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "int 0x80",
            inlateout("eax") nr.number() => ret,
            in("ebx") arg0,
            in("ecx") arg1,
            options(preserves_flags),
        );
    }
    ret
}

#[inline(always)]
pub unsafe fn syscall3(nr: Sysno, arg0: usize, arg1: usize, arg2: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "int 0x80",
            inlateout("eax") nr.number() => ret,
            in("ebx") arg0,
            in("ecx") arg1,
            in("edx") arg2,
            options(preserves_flags),
        );
    }
    ret
}
