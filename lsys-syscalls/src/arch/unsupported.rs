//! Fallback for targets without a Linux gate: nothing reaches a kernel.

use lsys_api::{Errno, Sysno};

const NOSYS: isize = Errno::ENOSYS.as_neg() as isize;

pub unsafe fn syscall0(_nr: Sysno) -> isize {
    NOSYS
}

pub unsafe fn syscall1(_nr: Sysno, _arg0: usize) -> isize {
    NOSYS
}

pub unsafe fn syscall2(_nr: Sysno, _arg0: usize, _arg1: usize) -> isize {
    NOSYS
}

pub unsafe fn syscall3(_nr: Sysno, _arg0: usize, _arg1: usize, _arg2: usize) -> isize {
    NOSYS
}
