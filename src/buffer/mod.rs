//! Internal read-ahead buffer management.
//!
//! This module provides a thread-local buffer pool so that chunking many
//! streams does not allocate a fresh read buffer each time. It is an
//! implementation detail and not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
