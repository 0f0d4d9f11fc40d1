//! Thread-local pool of read-ahead buffers.

use std::cell::RefCell;
use std::io::{self, Read};

/// Default buffer size for pooled buffers.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024; // 64 KiB

/// Maximum number of buffers to keep per thread.
pub const MAX_POOL_SIZE: usize = 4;

/// A reusable read-ahead buffer.
///
/// Works like a minimal [`std::io::BufReader`] that does not own its reader:
/// [`fill_buf`](Self::fill_buf) refills from the reader once everything has
/// been [`consume`](Self::consume)d.
pub struct Buffer {
    data: Vec<u8>,
    pos: usize,
    filled: usize,
}

impl Buffer {
    /// Takes a buffer from the thread-local pool or creates a new one.
    pub fn take() -> Self {
        let mut data = THREAD_BUFFER_POOL
            .with(|pool| pool.borrow_mut().pop())
            .unwrap_or_else(|| Vec::with_capacity(DEFAULT_BUFFER_SIZE));
        data.resize(DEFAULT_BUFFER_SIZE, 0);

        Self {
            data,
            pos: 0,
            filled: 0,
        }
    }

    /// Returns the unread bytes, reading more from `reader` if none are left.
    ///
    /// An empty slice means the reader is exhausted. Interrupted reads are
    /// retried.
    pub fn fill_buf<R: Read + ?Sized>(&mut self, reader: &mut R) -> io::Result<&[u8]> {
        if self.pos >= self.filled {
            let n = loop {
                match reader.read(&mut self.data) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            };
            self.pos = 0;
            self.filled = n;
        }
        Ok(&self.data[self.pos..self.filled])
    }

    /// Marks `n` bytes returned by [`fill_buf`](Self::fill_buf) as used.
    pub fn consume(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.filled);
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        // Return the buffer to the pool if it's not too large
        if self.data.capacity() <= DEFAULT_BUFFER_SIZE * 2 {
            self.data.clear();
            THREAD_BUFFER_POOL.with(|pool| {
                let mut pool = pool.borrow_mut();
                if pool.len() < MAX_POOL_SIZE {
                    pool.push(std::mem::take(&mut self.data));
                }
            });
        }
    }
}

// Thread-local buffer pool
thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}
