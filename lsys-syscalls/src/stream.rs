//! Line-oriented Unix-domain stream client
//!
//! Built entirely from the façade: `socket` + `connect_by_path` to open,
//! `write_with_error_translation` to send, `read` to receive. Unlike the
//! façade, this layer owns its descriptor and closes it on drop.
//!
//! There is no timeout or retry: a read blocks the way the kernel's `read`
//! blocks, and end of stream is reported to the caller.

use std::collections::VecDeque;

use lsys_api::{Errno, RawFd, AF_UNIX, SOCK_STREAM};
use thiserror::Error;

use crate::logging::{lsys_trace, lsys_warn};
use crate::trace::{LogSink, TraceSink};
use crate::{fs, network};

/// Bytes requested per `read` while looking for a newline.
const CHUNK_SIZE: usize = 256;

/// Stream client errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StreamError {
    #[error("system call failed: {0}")]
    Sys(#[from] Errno),
    #[error("stream closed after {received} bytes without a line terminator")]
    Closed { received: usize },
    #[error("received bytes are not valid UTF-8")]
    Utf8,
}

pub type Result<T> = core::result::Result<T, StreamError>;

/// An owned descriptor, closed on drop.
#[derive(Debug)]
pub struct Descriptor(RawFd);

impl Descriptor {
    /// Take ownership of `fd`.
    ///
    /// # Safety
    ///
    /// `fd` must be open and owned by nobody else: it is closed when the
    /// `Descriptor` drops, and closing a descriptor another owner still uses
    /// lets a later `open` or `socket` silently reuse its number.
    pub unsafe fn from_raw(fd: RawFd) -> Self {
        Descriptor(fd)
    }

    pub fn as_raw_fd(&self) -> RawFd {
        self.0
    }

    /// Give up ownership without closing.
    pub fn into_raw(self) -> RawFd {
        let fd = self.0;
        core::mem::forget(self);
        fd
    }

    /// Close now and report the outcome.
    pub fn close(self) -> core::result::Result<(), Errno> {
        fs::close(self.into_raw())
    }
}

impl Drop for Descriptor {
    fn drop(&mut self) {
        if let Err(errno) = fs::close(self.0) {
            lsys_warn!("close fd={} on drop: {}", self.0, errno);
        }
    }
}

/// A connected `AF_UNIX`/`SOCK_STREAM` socket.
#[derive(Debug)]
pub struct UnixStream {
    fd: Descriptor,
    leftover: VecDeque<u8>,
}

impl UnixStream {
    /// Create a socket and connect it to `path`.
    pub fn connect(path: impl AsRef<[u8]>) -> Result<Self> {
        Self::connect_with(path, &LogSink)
    }

    /// [`UnixStream::connect`] reporting the connect to `sink`.
    pub fn connect_with(path: impl AsRef<[u8]>, sink: &dyn TraceSink) -> Result<Self> {
        // SAFETY: `socket` just returned this descriptor and nothing else holds it.
        let fd = unsafe { Descriptor::from_raw(network::socket(AF_UNIX, SOCK_STREAM, 0)?) };
        network::connect_by_path_with(fd.as_raw_fd(), path, sink)?;
        lsys_trace!("unix stream connected on fd={}", fd.as_raw_fd());
        Ok(Self::from_descriptor(fd))
    }

    /// Wrap an already connected descriptor.
    pub fn from_descriptor(fd: Descriptor) -> Self {
        UnixStream { fd, leftover: VecDeque::new() }
    }

    pub fn as_raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }

    /// Release the descriptor. Buffered bytes are discarded.
    pub fn into_descriptor(self) -> Descriptor {
        self.fd
    }

    /// Write every byte of `bytes`, looping over short writes.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        let mut written = 0;
        while written < bytes.len() {
            match fs::write_with_error_translation(self.as_raw_fd(), &bytes[written..]) {
                Ok(n) => written += n,
                Err(errno) => {
                    lsys_warn!("write failed after {} of {} bytes: {}", written, bytes.len(), errno);
                    return Err(errno.into());
                }
            }
        }
        Ok(())
    }

    /// Write `text` followed by `\n`.
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        let mut line = Vec::with_capacity(text.len() + 1);
        line.extend_from_slice(text.as_bytes());
        line.push(b'\n');
        self.write_all(&line)
    }

    /// Read up to `max` bytes, stopping early only at end of stream.
    ///
    /// Bytes left over from an earlier [`read_line`](Self::read_line) are
    /// returned first.
    pub fn read_string(&mut self, max: usize) -> Result<String> {
        let take = self.leftover.len().min(max);
        let mut buf: Vec<u8> = self.leftover.drain(..take).collect();
        buf.resize(max, 0);
        let mut filled = take;
        while filled < max {
            let n = fs::read(self.as_raw_fd(), &mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        buf.truncate(filled);
        String::from_utf8(buf).map_err(|_| StreamError::Utf8)
    }

    /// Read the next `\n`-terminated line, without the terminator.
    ///
    /// Bytes received after the terminator are kept for the next call.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = Vec::new();
        loop {
            while let Some(b) = self.leftover.pop_front() {
                if b == b'\n' {
                    return String::from_utf8(line).map_err(|_| StreamError::Utf8);
                }
                line.push(b);
            }

            let mut chunk = [0u8; CHUNK_SIZE];
            let n = fs::read(self.as_raw_fd(), &mut chunk)?;
            if n == 0 {
                return Err(StreamError::Closed { received: line.len() });
            }
            self.leftover.extend(&chunk[..n]);
        }
    }
}
