//! lsys FFI
//!
//! The bridge as a flat C ABI, for a host that loads it as a shared library.
//! Every export returns an `int` in the kernel's own convention: zero or
//! positive on success, `-errno` on failure. No export keeps, duplicates or
//! closes a descriptor it did not get told to close.
//!
//! | Export | Kernel call |
//! |--------|-------------|
//! | `l_mkdir`, `l_rmdir` | mkdir (39), rmdir (40) |
//! | `l_getpid`, `l_getuid` | getpid (20), getuid (24) |
//! | `l_open`, `l_close` | open (5), close (6) |
//! | `l_read`, `l_write`, `l_write_errno` | read (3), write (4) |
//! | `l_fcntl` | fcntl (55) |
//! | `l_socketcall`, `l_socket`, `l_connect`, `l_connect_path` | socketcall (102) |

use core::ffi::{CStr, c_char, c_int, c_uint, c_ulong, c_void};

use lsys_api::Errno;
use lsys_syscalls::socketcall::{self, SocketArgs};
use lsys_syscalls::{ConnectTrace, LogSink, TraceSink, network, process, raw};
use spin::RwLock;

/// Receives one report per `l_connect_path` call: the descriptor, the result
/// (0 or `-errno`) and the NUL-terminated path actually used.
pub type TraceCallback = extern "C" fn(fd: c_int, outcome: c_int, path: *const c_char);

static TRACE_CALLBACK: RwLock<Option<TraceCallback>> = RwLock::new(None);

/// Sends connect diagnostics to the installed callback, or to the log when
/// none is installed.
struct CallbackSink;

impl TraceSink for CallbackSink {
    fn on_connect(&self, event: &ConnectTrace) {
        let callback = *TRACE_CALLBACK.read();
        match callback {
            Some(callback) => callback(
                event.fd,
                event.outcome_code(),
                event.address.sun_path.as_ptr().cast::<c_char>(),
            ),
            None => LogSink.on_connect(event),
        }
    }
}

/// Install the diagnostic callback for `l_connect_path`; null removes it.
#[unsafe(no_mangle)]
pub extern "C" fn l_set_trace_callback(callback: Option<TraceCallback>) {
    *TRACE_CALLBACK.write() = callback;
}

/// # Safety
///
/// `pathname` must be a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn l_mkdir(pathname: *const c_char, mode: c_uint) -> c_int {
    unsafe { raw::mkdir(pathname, mode) }.to_c_int()
}

/// # Safety
///
/// `pathname` must be a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn l_rmdir(pathname: *const c_char) -> c_int {
    unsafe { raw::rmdir(pathname) }.to_c_int()
}

#[unsafe(no_mangle)]
pub extern "C" fn l_getpid() -> c_uint {
    process::getpid()
}

#[unsafe(no_mangle)]
pub extern "C" fn l_getuid() -> c_uint {
    process::getuid()
}

/// # Safety
///
/// The caller must own `fd`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn l_close(fd: c_int) -> c_int {
    unsafe { raw::close(fd) }.to_c_int()
}

/// # Safety
///
/// `args` must point at the argument vector sub-operation `call` expects.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn l_socketcall(call: c_int, args: *mut c_void) -> c_int {
    unsafe { raw::socketcall(call as usize, args.cast::<usize>()) }.to_c_int()
}

/// # Safety
///
/// For pointer-taking commands, `arg` must point at the expected structure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn l_fcntl(fd: c_uint, cmd: c_uint, arg: c_ulong) -> c_int {
    unsafe { raw::fcntl(fd, cmd, arg as usize) }.to_c_int()
}

/// # Safety
///
/// `filename` must be a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn l_open(filename: *const c_char, flags: c_int, mode: c_int) -> c_int {
    unsafe { raw::open(filename, flags, mode as u32) }.to_c_int()
}

/// # Safety
///
/// `buf` must be valid for reads of `count` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn l_write(fd: c_uint, buf: *const c_char, count: c_uint) -> c_int {
    unsafe { raw::write(fd, buf.cast::<u8>(), count as usize) }.to_c_int()
}

/// # Safety
///
/// `buf` must be valid for writes of `count` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn l_read(fd: c_uint, buf: *mut c_char, count: c_uint) -> c_int {
    unsafe { raw::read(fd, buf.cast::<u8>(), count as usize) }.to_c_int()
}

#[unsafe(no_mangle)]
pub extern "C" fn l_socket(domain: c_int, ty: c_int, protocol: c_int) -> c_int {
    socketcall::dispatch(&SocketArgs { domain, ty, protocol }).to_c_int()
}

/// # Safety
///
/// `addr` must be valid for reads of `addrlen` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn l_connect(sockfd: c_int, addr: *const c_void, addrlen: c_uint) -> c_int {
    unsafe { socketcall::connect_raw(sockfd, addr.cast::<u8>(), addrlen) }.to_c_int()
}

/// Connect to a Unix-domain socket by path. Paths over 107 bytes are cut.
///
/// # Safety
///
/// `path` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn l_connect_path(sockfd: c_int, path: *const c_char) -> c_int {
    if path.is_null() {
        return Errno::EFAULT.as_neg();
    }
    // SAFETY: non-null and NUL-terminated per the contract above.
    let path = unsafe { CStr::from_ptr(path) };
    match network::connect_by_path_with(sockfd, path.to_bytes(), &CallbackSink) {
        Ok(()) => 0,
        Err(errno) => errno.as_neg(),
    }
}

/// `l_write` for callers that branch on the sign of the result.
///
/// # Safety
///
/// `buf` must be valid for reads of `count` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn l_write_errno(fd: c_uint, buf: *const c_char, count: c_uint) -> c_int {
    unsafe { l_write(fd, buf, count) }
}
