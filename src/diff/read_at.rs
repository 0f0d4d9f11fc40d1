//! Random-access byte sources.

use std::io::{self, Read, Seek, SeekFrom};

/// A byte source that supports reads at arbitrary offsets.
///
/// Implemented for every `Read + Seek` type, including [`std::fs::File`],
/// [`std::io::Cursor`] and mutable references to them.
pub trait ReadAt {
    /// Reads up to `buf.len()` bytes starting at `offset`.
    ///
    /// Returns the number of bytes read; 0 means `offset` is at or past the end.
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize>;

    /// Reads exactly `buf.len()` bytes starting at `offset`.
    ///
    /// Fails with [`io::ErrorKind::UnexpectedEof`] if the source ends first.
    fn read_exact_at(&mut self, offset: u64, mut buf: &mut [u8]) -> io::Result<()> {
        let mut offset = offset;
        while !buf.is_empty() {
            match self.read_at(offset, buf) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "source ended before the requested range",
                    ));
                }
                Ok(n) => {
                    buf = &mut buf[n..];
                    offset += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

impl<T: Read + Seek + ?Sized> ReadAt for T {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        self.seek(SeekFrom::Start(offset))?;
        self.read(buf)
    }

    fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        self.seek(SeekFrom::Start(offset))?;
        self.read_exact(buf)
    }
}

/// Sequential [`Read`] view over a [`ReadAt`] source, starting at offset 0.
pub(crate) struct ReadAtReader<'a, T: ?Sized> {
    inner: &'a mut T,
    pos: u64,
}

impl<'a, T: ReadAt + ?Sized> ReadAtReader<'a, T> {
    pub(crate) fn new(inner: &'a mut T) -> Self {
        Self { inner, pos: 0 }
    }
}

impl<T: ReadAt + ?Sized> Read for ReadAtReader<'_, T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read_at(self.pos, buf)?;
        self.pos += n as u64;
        Ok(n)
    }
}
