//! Word-level packing for sentences that exceed the budget.

use crate::{byte_size, ByteBudget, ChunkAccumulator, ForcedSlicer};

/// Greedily packs whitespace-delimited words into budget-bounded chunks.
///
/// Words are batched with the same accounting as [`ChunkAccumulator`]. A
/// word that is larger than the budget by itself is handed to the
/// [`ForcedSlicer`]: its full slices are emitted as standalone chunks and
/// its remainder starts the next batch.
///
/// ## Example
///
/// ```rust
/// use pageslabs::{ByteBudget, WordAccumulator};
///
/// let budget = ByteBudget::new(8).unwrap();
/// let chunks = WordAccumulator::split(budget, "to be abcdefghijkl or not");
///
/// assert_eq!(chunks, vec!["to be", "ab", "cd", "efghijkl", "or not"]);
/// ```
#[derive(Debug, Clone)]
pub struct WordAccumulator {
    budget: ByteBudget,
    slicer: ForcedSlicer,
    inner: ChunkAccumulator,
}

impl WordAccumulator {
    /// Create an empty word accumulator.
    #[must_use]
    pub fn new(budget: ByteBudget) -> Self {
        Self {
            budget,
            slicer: ForcedSlicer::new(budget),
            inner: ChunkAccumulator::new(budget),
        }
    }

    /// Split `text` at whitespace and pack the words.
    #[must_use]
    pub fn split(budget: ByteBudget, text: &str) -> Vec<String> {
        let mut acc = Self::new(budget);
        for word in text.split_whitespace() {
            acc.push(word);
        }
        acc.finish()
    }

    /// Add one word.
    pub fn push(&mut self, word: &str) {
        if self.budget.fits(byte_size(word)) {
            self.inner.add(word);
            return;
        }

        let forced = self.slicer.slice(word);
        for slice in forced.slices {
            self.inner.emit(slice);
        }
        if !forced.remainder.is_empty() {
            // Pending is empty after `emit`, so the remainder opens a new batch.
            self.inner.add(forced.remainder);
        }
    }

    /// Flush and return every chunk in order.
    #[must_use]
    pub fn finish(self) -> Vec<String> {
        self.inner.finish()
    }
}
