//! Post-hoc budget check over an emitted chunk sequence.
//!
//! This is a consistency check, not a correction step. The chunker keeps
//! every chunk within budget except in one degenerate configuration: a
//! budget under 4 bytes, where a single multi-byte character can be wider
//! than the budget itself.

use crate::{ByteBudget, Slab};

/// A chunk that is larger than the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OversizedChunk {
    /// Position of the chunk in the sequence.
    pub index: usize,
    /// Actual size in bytes.
    pub bytes: usize,
    /// The budget it exceeds.
    pub budget: usize,
}

/// Re-measure every slab and report those over `budget`.
///
/// Each finding is also logged as a warning.
///
/// ```rust
/// use pageslabs::{oversized_chunks, ByteBudget, Slab};
///
/// let slabs = vec![Slab::new("fits", 0), Slab::new("too large", 1)];
/// let found = oversized_chunks(&slabs, ByteBudget::new(5).unwrap());
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].index, 1);
/// assert_eq!(found[0].bytes, 9);
/// ```
pub fn oversized_chunks(slabs: &[Slab], budget: ByteBudget) -> Vec<OversizedChunk> {
    slabs
        .iter()
        .filter(|slab| !budget.fits(slab.len()))
        .map(|slab| {
            tracing::warn!(
                chunk = slab.index,
                bytes = slab.len(),
                budget = budget.get(),
                "chunk {} exceeds limit ({}/{} bytes)",
                slab.index,
                slab.len(),
                budget.get()
            );
            OversizedChunk {
                index: slab.index,
                bytes: slab.len(),
                budget: budget.get(),
            }
        })
        .collect()
}
