//! Chunk-level deltas between two chunk sequences.
//!
//! - [`Delta`] - A chunk removed from the original or added by the update
//! - [`DeltaKind`] - Remove or Add, ordered for patch application
//! - [`reconcile`] - Two-cursor reconciliation with shift detection

mod reconcile;

use std::fmt;

use crate::chunk::Chunk;

pub use reconcile::reconcile;

/// What happened to a chunk between the original and the updated sequence.
///
/// The ordering (`Remove < Add`) is the order in which deltas are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeltaKind {
    /// The chunk exists in the original sequence only.
    Remove,
    /// The chunk exists in the updated sequence only.
    Add,
}

impl DeltaKind {
    /// Returns the short label used in logs and listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeltaKind::Remove => "Rem",
            DeltaKind::Add => "Add",
        }
    }
}

impl fmt::Display for DeltaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chunk removal or addition.
///
/// `position` is the chunk's index in the original sequence for
/// [`DeltaKind::Remove`], and in the updated sequence for [`DeltaKind::Add`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delta {
    /// The chunk descriptor, copied from its sequence.
    pub chunk: Chunk,
    /// Whether the chunk was removed or added.
    pub kind: DeltaKind,
    /// Index of the chunk in the sequence it came from.
    pub position: usize,
}

impl Delta {
    /// Creates a removal of `chunk` found at `position` in the original sequence.
    pub fn remove(chunk: Chunk, position: usize) -> Self {
        Self {
            chunk,
            kind: DeltaKind::Remove,
            position,
        }
    }

    /// Creates an addition of `chunk` found at `position` in the updated sequence.
    pub fn add(chunk: Chunk, position: usize) -> Self {
        Self {
            chunk,
            kind: DeltaKind::Add,
            position,
        }
    }

    /// Returns true for a removal.
    pub fn is_remove(&self) -> bool {
        self.kind == DeltaKind::Remove
    }

    /// Returns true for an addition.
    pub fn is_add(&self) -> bool {
        self.kind == DeltaKind::Add
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.kind, self.position, self.chunk.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ChunkHash;

    #[test]
    fn test_kind_order() {
        assert!(DeltaKind::Remove < DeltaKind::Add);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(DeltaKind::Remove.to_string(), "Rem");
        assert_eq!(DeltaKind::Add.to_string(), "Add");
    }

    #[test]
    fn test_display() {
        let chunk = Chunk::new(0, 4, ChunkHash::new(vec![0xBE, 0xEF]));
        assert_eq!(Delta::remove(chunk.clone(), 3).to_string(), "Rem(3): beef");
        assert_eq!(Delta::add(chunk, 0).to_string(), "Add(0): beef");
    }

    #[test]
    fn test_constructors() {
        let chunk = Chunk::new(0, 4, ChunkHash::new(vec![1]));
        assert!(Delta::remove(chunk.clone(), 0).is_remove());
        assert!(Delta::add(chunk, 0).is_add());
    }
}
