//! Socket call multiplexer
//!
//! 32-bit x86 Linux reaches every socket operation through one entry point:
//! `ebx` carries the sub-operation, `ecx` a pointer to its arguments laid out
//! as consecutive words. The kernel does not know how many words the caller
//! meant to pass, so the shape is pinned here: each sub-operation has its own
//! argument type and [`dispatch`] only accepts those.

use lsys_api::{RawFd, RawReturn, SocketAddress, SocketCall};

use crate::raw;

/// Ordered words read by the kernel for one sub-operation.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentVector<const N: usize>(pub [usize; N]);

impl<const N: usize> ArgumentVector<N> {
    pub fn as_ptr(&self) -> *const usize {
        self.0.as_ptr()
    }
}

/// Arguments of one socketcall sub-operation.
pub trait SocketCallArgs {
    /// Sub-operation these arguments belong to.
    const CALL: SocketCall;

    /// Words in the order the kernel reads them. Any pointer stored in the
    /// vector must stay valid for as long as `self` is borrowed.
    fn vector(&self) -> ArgumentVector<3>;
}

/// `socket(domain, type, protocol)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketArgs {
    pub domain: i32,
    pub ty: i32,
    pub protocol: i32,
}

impl SocketCallArgs for SocketArgs {
    const CALL: SocketCall = SocketCall::Socket;

    fn vector(&self) -> ArgumentVector<3> {
        ArgumentVector([self.domain as usize, self.ty as usize, self.protocol as usize])
    }
}

/// `connect(fd, addr, addrlen)`
pub struct ConnectArgs<'a> {
    pub fd: RawFd,
    pub address: &'a dyn SocketAddress,
}

impl SocketCallArgs for ConnectArgs<'_> {
    const CALL: SocketCall = SocketCall::Connect;

    fn vector(&self) -> ArgumentVector<3> {
        ArgumentVector([
            self.fd as usize,
            self.address.as_bytes().as_ptr() as usize,
            self.address.socklen() as usize,
        ])
    }
}

/// Issue a sub-operation with a vector of the right shape.
///
/// Returns the primitive's result unchanged.
pub fn dispatch<A: SocketCallArgs>(args: &A) -> RawReturn {
    let vector = args.vector();
    // SAFETY: `vector` has the arity `A::CALL` expects and any pointer in it
    // borrows from `args`, which outlives the call.
    unsafe { raw::socketcall(A::CALL.number(), vector.as_ptr()) }
}

/// `connect` with a caller-supplied address pointer and length.
///
/// # Safety
///
/// `addr` must be valid for reads of `addrlen` bytes.
pub unsafe fn connect_raw(fd: RawFd, addr: *const u8, addrlen: u32) -> RawReturn {
    let vector = ArgumentVector([fd as usize, addr as usize, addrlen as usize]);
    unsafe { raw::socketcall(SocketCall::Connect.number(), vector.as_ptr()) }
}
