//! Two-cursor delta reconciliation.
//!
//! Both sequences are walked in lockstep. While chunks diverge, unmatched
//! chunks are parked as *pending* removals and additions. Each step checks the
//! pending buffers for a chunk that reappears on the other side:
//!
//! - an updated chunk found among pending removals was shifted forward by
//!   insertions, so the original cursor jumps back to it;
//! - an original chunk found among pending additions was shifted backward by
//!   removals, so the updated cursor jumps back to it.
//!
//! When the cursors land on equal chunks, everything pending is confirmed.
//! This is a heuristic, not a longest-common-subsequence search: when a hash
//! repeats, the first pending occurrence wins.

use std::collections::HashMap;

use tracing::debug;

use super::{Delta, DeltaKind};
use crate::chunk::{Chunk, ChunkHash};

/// Computes the deltas that turn `original` into `updated`.
///
/// The result lists every removal (by descending original position) followed
/// by every addition (by ascending updated position). Applying removals from
/// the end backward, then additions from the start forward, keeps the offsets
/// of untouched regions valid while patching in place.
///
/// # Example
///
/// ```
/// use chunkdelta::{Chunk, ChunkHash, DeltaKind, reconcile};
///
/// let seq = |s: &str| -> Vec<Chunk> {
///     s.bytes()
///         .enumerate()
///         .map(|(i, b)| Chunk::new(i as u64, 1, ChunkHash::from_slice(&[b])))
///         .collect()
/// };
///
/// let deltas = reconcile(&seq("ABCB"), &seq("BABC"));
///
/// assert_eq!(deltas.len(), 2);
/// assert_eq!((deltas[0].kind, deltas[0].position), (DeltaKind::Remove, 3));
/// assert_eq!((deltas[1].kind, deltas[1].position), (DeltaKind::Add, 0));
/// ```
pub fn reconcile(original: &[Chunk], updated: &[Chunk]) -> Vec<Delta> {
    let mut deltas = Vec::new();
    let mut removals = Pending::default();
    let mut additions = Pending::default();

    let (mut o, mut u) = (0usize, 0usize);

    while o < original.len() || u < updated.len() {
        let orig = original.get(o);
        let upd = updated.get(u);

        // Converging point: everything pending so far is confirmed
        if let (Some(a), Some(b)) = (orig, upd) {
            if a.hash == b.hash {
                removals.flush_into(&mut deltas);
                additions.flush_into(&mut deltas);
                o += 1;
                u += 1;
                continue;
            }
        }

        if let Some(b) = upd {
            if let Some(k) = removals.find(&b.hash) {
                let resume = removals.flush_prefix_into(k, &mut deltas);
                debug!(from = o, to = resume, at = u, "forward shift detected");
                o = resume;
                continue;
            }
        }

        if let Some(a) = orig {
            if let Some(k) = additions.find(&a.hash) {
                let resume = additions.flush_prefix_into(k, &mut deltas);
                debug!(from = u, to = resume, at = o, "backward shift detected");
                u = resume;
                continue;
            }
        }

        if let Some(a) = orig {
            removals.push(Delta::remove(a.clone(), o));
            o += 1;
        }
        if let Some(b) = upd {
            additions.push(Delta::add(b.clone(), u));
            u += 1;
        }
    }

    removals.flush_into(&mut deltas);
    additions.flush_into(&mut deltas);

    deltas.sort_by(|a, b| {
        a.kind.cmp(&b.kind).then_with(|| match a.kind {
            DeltaKind::Remove => b.position.cmp(&a.position),
            DeltaKind::Add => a.position.cmp(&b.position),
        })
    });

    debug!(
        removals = deltas.iter().filter(|d| d.is_remove()).count(),
        additions = deltas.iter().filter(|d| d.is_add()).count(),
        "reconciled chunk sequences"
    );

    deltas
}

/// Unconfirmed deltas since the last converging point.
///
/// The index maps each hash to its first buffered occurrence.
#[derive(Debug, Default)]
struct Pending {
    deltas: Vec<Delta>,
    index: HashMap<ChunkHash, usize>,
}

impl Pending {
    fn push(&mut self, delta: Delta) {
        self.index
            .entry(delta.chunk.hash.clone())
            .or_insert(self.deltas.len());
        self.deltas.push(delta);
    }

    fn find(&self, hash: &ChunkHash) -> Option<usize> {
        self.index.get(hash).copied()
    }

    /// Confirms everything buffered.
    fn flush_into(&mut self, out: &mut Vec<Delta>) {
        out.append(&mut self.deltas);
        self.index.clear();
    }

    /// Confirms the deltas before `k`, discards the rest, and returns the
    /// sequence position of the delta at `k`.
    fn flush_prefix_into(&mut self, k: usize, out: &mut Vec<Delta>) -> usize {
        let position = self.deltas[k].position;
        out.extend(self.deltas.drain(..k));
        self.deltas.clear();
        self.index.clear();
        position
    }
}
