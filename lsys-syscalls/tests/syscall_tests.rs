//! System call tests against the running kernel

#![cfg(all(target_os = "linux", any(target_arch = "x86", target_arch = "x86_64")))]

use std::cell::Cell;
use std::ffi::CString;

use lsys_api::{Errno, FcntlCmd, OpenFlags, SockAddrIn, AF_INET, AF_UNIX, FD_CLOEXEC, SOCK_STREAM};
use lsys_syscalls::*;

fn scratch_path(name: &str) -> CString {
    let dir = std::env::temp_dir();
    let path = format!("{}/lsys-{}-{}", dir.display(), std::process::id(), name);
    CString::new(path).unwrap()
}

#[test]
fn test_open_valid_path() {
    // A readable path yields a descriptor
    let fd = open(c"/dev/null", OpenFlags::RDONLY, 0).unwrap();
    assert!(fd >= 0);
    assert_eq!(close(fd), Ok(()));
}

#[test]
fn test_open_missing_path() {
    assert_eq!(open(c"/nonexistent/lsys/file", OpenFlags::RDONLY, 0), Err(Errno::ENOENT));
}

#[test]
fn test_mkdir_existing_directory() {
    let path = scratch_path("mkdir");
    assert_eq!(mkdir(&path, 0o755), Ok(()));
    assert_eq!(mkdir(&path, 0o755), Err(Errno::EEXIST));
    assert_eq!(rmdir(&path), Ok(()));
    assert_eq!(rmdir(&path), Err(Errno::ENOENT));
}

#[test]
fn test_raw_result_passes_through() {
    // The primitive hands back the kernel's -errno untouched
    let path = scratch_path("raw");
    assert_eq!(mkdir(&path, 0o700), Ok(()));
    let ret = unsafe { raw::mkdir(path.as_ptr(), 0o700) };
    assert_eq!(ret.value(), -17);
    assert_eq!(ret.errno(), Some(Errno::EEXIST));
    assert_eq!(rmdir(&path), Ok(()));
}

#[test]
fn test_write_bad_descriptor() {
    assert_eq!(write_with_error_translation(-1, b"data"), Err(Errno::EBADF));
    let ret = unsafe { raw::write(u32::MAX, b"data".as_ptr(), 4) };
    assert_eq!(ret.to_c_int(), -9);
}

#[test]
fn test_write_then_read_back() {
    let path = scratch_path("rw");
    let fd = open(&path, OpenFlags::RDWR | OpenFlags::CREAT | OpenFlags::TRUNC, 0o600).unwrap();
    assert_eq!(write_with_error_translation(fd, b"hello bridge"), Ok(12));
    assert_eq!(close(fd), Ok(()));

    let fd = open(&path, OpenFlags::RDONLY, 0).unwrap();
    let mut buf = [0u8; 32];
    let n = read(fd, &mut buf).unwrap();
    assert_eq!(&buf[..n], b"hello bridge");
    assert_eq!(read(fd, &mut buf), Ok(0));
    assert_eq!(close(fd), Ok(()));
    std::fs::remove_file(path.to_str().unwrap()).unwrap();
}

#[test]
fn test_fcntl_flags() {
    let fd = open(c"/dev/null", OpenFlags::WRONLY, 0).unwrap();
    let fl = fcntl(fd, FcntlCmd::GetFl, 0).unwrap();
    assert_eq!(fl & 0o3, OpenFlags::WRONLY.bits());

    assert_eq!(fcntl(fd, FcntlCmd::SetFd, FD_CLOEXEC), Ok(0));
    assert_eq!(fcntl(fd, FcntlCmd::GetFd, 0), Ok(FD_CLOEXEC as i32));
    assert_eq!(close(fd), Ok(()));
}

#[test]
fn test_socket_then_close() {
    let fd = socket(AF_UNIX, SOCK_STREAM, 0).unwrap();
    assert!(fd >= 0);
    assert_eq!(close(fd), Ok(()));

    // The freed number may come back; either way the call succeeds
    let again = socket(AF_UNIX, SOCK_STREAM, 0).unwrap();
    assert!(again >= 0);
    assert_eq!(close(again), Ok(()));
}

#[test]
fn test_socket_bad_family() {
    assert_eq!(socket(4242, SOCK_STREAM, 0), Err(Errno::EAFNOSUPPORT));
}

#[test]
fn test_process_identity_stable() {
    let pid = getpid();
    assert_eq!(pid, getpid());
    assert_eq!(pid, std::process::id());
    assert_eq!(getuid(), getuid());
}

#[test]
fn test_connect_by_path_missing_socket() {
    let fd = socket(AF_UNIX, SOCK_STREAM, 0).unwrap();
    assert_eq!(
        connect_by_path_with(fd, "/nonexistent/lsys.sock", &NullSink),
        Err(Errno::ENOENT)
    );
    assert_eq!(close(fd), Ok(()));
}

#[test]
fn test_connect_by_path_long_path_is_truncated() {
    let fd = socket(AF_UNIX, SOCK_STREAM, 0).unwrap();
    let long = format!("/nonexistent/{}", "s".repeat(187));
    assert_eq!(long.len(), 200);

    let truncated = Cell::new(false);
    let path_len = Cell::new(0);
    let sink = FnSink(|e: &ConnectTrace| {
        truncated.set(e.truncated);
        path_len.set(e.address.path().len());
    });
    assert_eq!(connect_by_path_with(fd, &long, &sink), Err(Errno::ENOENT));
    assert!(truncated.get());
    assert_eq!(path_len.get(), 107);
    assert_eq!(close(fd), Ok(()));
}

#[test]
fn test_connect_on_non_socket() {
    let fd = open(c"/dev/null", OpenFlags::RDONLY, 0).unwrap();
    assert_eq!(connect_by_path_with(fd, "/tmp/x", &NullSink), Err(Errno::ENOTSOCK));
    assert_eq!(close(fd), Ok(()));
}

#[test]
fn test_connect_inet_refused() {
    // Nothing listens on port 1 of the loopback address
    let fd = socket(AF_INET, SOCK_STREAM, 0).unwrap();
    assert_eq!(connect(fd, &SockAddrIn::new([127, 0, 0, 1], 1)), Err(Errno::ECONNREFUSED));
    assert_eq!(close(fd), Ok(()));
}

#[test]
fn test_connect_by_path_interior_nul() {
    // The kernel sees only the bytes before the NUL
    let fd = socket(AF_UNIX, SOCK_STREAM, 0).unwrap();
    let truncated = Cell::new(false);
    let sink = FnSink(|e: &ConnectTrace| truncated.set(e.truncated));
    assert_eq!(
        connect_by_path_with(fd, b"/nonexistent/lsys\0.sock", &sink),
        Err(Errno::ENOENT)
    );
    assert!(truncated.get());
    assert_eq!(close(fd), Ok(()));
}
