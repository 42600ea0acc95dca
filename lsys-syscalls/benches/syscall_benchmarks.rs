//! Syscall benchmarks

use core::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};

use lsys_api::{SockAddrUn, SocketAddress};
use lsys_syscalls::{getpid, raw};

fn bench_trap_round_trip(c: &mut Criterion) {
    c.bench_function("getpid", |b| b.iter(|| black_box(getpid())));
    c.bench_function("raw_getuid", |b| b.iter(|| black_box(raw::getuid())));
}

fn bench_unix_address(c: &mut Criterion) {
    let short = b"/run/user/1000/bus";
    let long = [b'a'; 200];
    c.bench_function("sockaddr_un_short", |b| {
        b.iter(|| black_box(SockAddrUn::from_path(black_box(short)).0.socklen()))
    });
    c.bench_function("sockaddr_un_truncated", |b| {
        b.iter(|| black_box(SockAddrUn::from_path(black_box(&long)).1))
    });
}

criterion_group!(syscall_benchmarks, bench_trap_round_trip, bench_unix_address);

criterion_main!(syscall_benchmarks);
