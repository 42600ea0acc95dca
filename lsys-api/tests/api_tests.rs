//! API tests

use lsys_api::*;
use proptest::prelude::*;

#[test]
fn test_unix_path_truncated_at_capacity() {
    // A 200-byte path keeps 107 bytes and the terminator
    let long = [b'x'; 200];
    let (addr, truncated) = SockAddrUn::from_path(&long);
    assert!(truncated);
    assert_eq!(addr.path().len(), UNIX_PATH_MAX);
    assert!(addr.sun_path[..UNIX_PATH_MAX].iter().all(|&b| b == b'x'));
    assert_eq!(addr.sun_path[UNIX_PATH_MAX], 0);
    assert_eq!(addr.socklen(), 110);
}

#[test]
fn test_unix_path_exactly_max() {
    // 107 bytes fit entirely; the terminator lands on byte 107
    let path = [b'p'; UNIX_PATH_MAX];
    let (addr, truncated) = SockAddrUn::from_path(&path);
    assert!(!truncated);
    assert_eq!(addr.path(), &path[..]);
    assert_eq!(addr.sun_path[107], 0);
}

#[test]
fn test_unix_path_one_over() {
    let path = [b'q'; UNIX_PATH_CAPACITY];
    let (addr, truncated) = SockAddrUn::from_path(&path);
    assert!(truncated);
    assert_eq!(addr.path().len(), UNIX_PATH_MAX);
}

#[test]
fn test_raw_return_policy() {
    // Every negative value in the kernel error range reads back as -errno
    for code in [Errno::EEXIST, Errno::ENOENT, Errno::EBADF] {
        let ret = RawReturn::from_errno(code);
        assert_eq!(ret.to_c_int(), code.as_neg());
        assert_eq!(SyscallResult::from(ret), SyscallResult::Error(code));
    }
}

proptest! {
    #[test]
    fn prop_unix_path_always_terminated(path in proptest::collection::vec(1u8..=255, 0..300)) {
        let (addr, truncated) = SockAddrUn::from_path(&path);
        let kept = path.len().min(UNIX_PATH_MAX);
        prop_assert_eq!(truncated, path.len() > UNIX_PATH_MAX);
        prop_assert_eq!(addr.path(), &path[..kept]);
        prop_assert_eq!(addr.sun_path[kept], 0);
        prop_assert!(addr.sun_path[kept..].iter().all(|&b| b == 0));
    }

    #[test]
    fn prop_raw_return_sign(value in any::<i32>()) {
        let ret = RawReturn::new(value as isize);
        if (-4095..0).contains(&value) {
            prop_assert_eq!(ret.to_c_int(), value);
            prop_assert!(ret.into_result().is_err());
        } else {
            prop_assert!(ret.errno().is_none());
        }
    }
}
