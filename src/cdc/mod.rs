//! Content-Defined Chunking (CDC) fingerprinting.
//!
//! This module contains the rolling hash used to place chunk boundaries based
//! on content rather than fixed sizes.
//!
//! - [`fingerprint`] / [`slide`] - Full and incremental polynomial fingerprint
//! - [`RabinWindow`] - Window state driven by the chunker

mod rabin;

pub use rabin::{RabinWindow, fingerprint, is_breakpoint, slide};
