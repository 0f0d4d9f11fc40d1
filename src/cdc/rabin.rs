//! Polynomial rolling fingerprint.
//!
//! The fingerprint of a window `w` of length `n` is
//!
//! ```text
//! F(w) = w[0]·b^(n-1) + w[1]·b^(n-2) + … + w[n-1]
//! ```
//!
//! for a small base `b`. Dropping the oldest byte and appending a new one is
//! an O(1) update:
//!
//! ```text
//! F' = (F - out·b^(n-1))·b + in
//! ```
//!
//! # Overflow
//!
//! All arithmetic is fixed-width `i64` with two's-complement wraparound and no
//! modular reduction. Large windows or bases wrap; the result is still
//! deterministic and the incremental update stays consistent with the full
//! computation, so boundaries remain reproducible. Fingerprints may come out
//! negative after wrapping, and a negative fingerprint never satisfies the
//! breakpoint condition.

use std::collections::VecDeque;

use crate::config::ChunkConfig;

/// Computes the fingerprint of `window` from scratch.
///
/// # Example
///
/// ```
/// assert_eq!(chunkdelta::fingerprint(b"abc", 7), 5538);
/// ```
pub fn fingerprint(window: &[u8], base: i64) -> i64 {
    horner(window.iter().copied(), base)
}

/// Slides a fingerprint one byte to the right.
///
/// `prev` is the fingerprint of a `window_len`-byte window starting with
/// `outgoing`; the result is the fingerprint of that window without
/// `outgoing` and with `incoming` appended.
///
/// # Example
///
/// ```
/// use chunkdelta::{fingerprint, slide};
///
/// let abc = fingerprint(b"abc", 7);
/// assert_eq!(slide(abc, 7, b'a', b'a', 3), fingerprint(b"bca", 7));
/// ```
pub fn slide(prev: i64, base: i64, outgoing: u8, incoming: u8, window_len: usize) -> i64 {
    let factor = wrapping_pow(base, window_len.saturating_sub(1));
    roll(prev, base, factor, outgoing, incoming)
}

/// Returns true if `fingerprint` marks a chunk boundary.
///
/// Uses the truncated remainder, so only non-negative fingerprints can match.
/// A divisor below 2 never matches.
pub fn is_breakpoint(fingerprint: i64, divisor: i64) -> bool {
    divisor > 1 && fingerprint % divisor == divisor - 1
}

fn horner(bytes: impl Iterator<Item = u8>, base: i64) -> i64 {
    bytes.fold(0i64, |acc, byte| {
        acc.wrapping_mul(base).wrapping_add(i64::from(byte))
    })
}

fn roll(prev: i64, base: i64, factor: i64, outgoing: u8, incoming: u8) -> i64 {
    prev.wrapping_sub(i64::from(outgoing).wrapping_mul(factor))
        .wrapping_mul(base)
        .wrapping_add(i64::from(incoming))
}

fn wrapping_pow(mut base: i64, mut exp: usize) -> i64 {
    let mut acc = 1i64;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc.wrapping_mul(base);
        }
        exp >>= 1;
        base = base.wrapping_mul(base);
    }
    acc
}

/// A fingerprint window that tracks its bytes and current fingerprint.
///
/// Usage per chunk: [`reset`](Self::reset), [`fill`](Self::fill) until full
/// or the input ends, [`init`](Self::init), then [`roll`](Self::roll) one byte
/// at a time until a breakpoint.
#[derive(Debug, Clone)]
pub struct RabinWindow {
    bytes: VecDeque<u8>,
    capacity: usize,
    base: i64,
    divisor: i64,
    fingerprint: i64,
    /// `base^(len-1)`, fixed once the window is initialized.
    factor: i64,
}

impl RabinWindow {
    /// Creates an empty window.
    pub fn new(capacity: usize, divisor: i64, base: i64) -> Self {
        Self {
            bytes: VecDeque::with_capacity(capacity),
            capacity,
            base,
            divisor,
            fingerprint: 0,
            factor: 1,
        }
    }

    /// Creates an empty window sized and parameterized by `config`.
    pub fn from_config(config: &ChunkConfig) -> Self {
        Self::new(config.min_size(), config.divisor(), config.base())
    }

    /// Clears the window for a new chunk.
    pub fn reset(&mut self) {
        self.bytes.clear();
        self.fingerprint = 0;
        self.factor = 1;
    }

    /// Appends bytes until the window is full; returns how many were taken.
    pub fn fill(&mut self, data: &[u8]) -> usize {
        let take = self.remaining().min(data.len());
        self.bytes.extend(&data[..take]);
        take
    }

    /// Computes the fingerprint over the current window contents.
    pub fn init(&mut self) {
        self.fingerprint = horner(self.bytes.iter().copied(), self.base);
        self.factor = wrapping_pow(self.base, self.bytes.len().saturating_sub(1));
    }

    /// Drops the oldest byte, appends `incoming` and updates the fingerprint.
    ///
    /// Returns true if the new fingerprint is a breakpoint.
    pub fn roll(&mut self, incoming: u8) -> bool {
        let outgoing = self.bytes.pop_front().unwrap_or(0);
        self.bytes.push_back(incoming);
        self.fingerprint = roll(self.fingerprint, self.base, self.factor, outgoing, incoming);
        self.is_breakpoint()
    }

    /// Returns true if the current fingerprint is a breakpoint.
    pub fn is_breakpoint(&self) -> bool {
        is_breakpoint(self.fingerprint, self.divisor)
    }

    /// Returns the current fingerprint.
    pub fn fingerprint(&self) -> i64 {
        self.fingerprint
    }

    /// Returns the number of bytes in the window.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the window holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns true once the window holds `capacity` bytes.
    pub fn is_full(&self) -> bool {
        self.bytes.len() >= self.capacity
    }

    fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.bytes.len())
    }
}
