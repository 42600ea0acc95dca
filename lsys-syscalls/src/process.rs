//! Process identity

use crate::raw;

/// Get process ID
pub fn getpid() -> u32 {
    raw::getpid().value() as u32
}

/// Get real user ID
///
/// On 32-bit x86 this is the legacy entry point, which reports IDs above
/// 65535 as the overflow ID.
pub fn getuid() -> u32 {
    raw::getuid().value() as u32
}
