//! Trap backends
//!
//! Exactly one backend is compiled. Each exposes `syscall0` .. `syscall3`
//! taking an i386 [`Sysno`](lsys_api::Sysno) and up to three words, and
//! returns the result register untouched.
//!
//! - `x86`: `int 0x80`, the gate the hosting system traps
//! - `x86_64` on Linux: host backend that reissues the same calls through
//!   the native `syscall` instruction
//! - anything else: every call fails with `ENOSYS`
//!
//! Crate-private: only [`raw`](crate::raw) issues traps, and it carries the
//! safety contract of each call.

#[cfg(target_arch = "x86")]
mod x86;
#[cfg(target_arch = "x86")]
pub use x86::*;

#[cfg(all(target_arch = "x86_64", target_os = "linux"))]
mod x86_64;
#[cfg(all(target_arch = "x86_64", target_os = "linux"))]
pub use x86_64::*;

#[cfg(not(any(target_arch = "x86", all(target_arch = "x86_64", target_os = "linux"))))]
mod unsupported;
#[cfg(not(any(target_arch = "x86", all(target_arch = "x86_64", target_os = "linux"))))]
pub use unsupported::*;

