//! Greedy, budget-aware packing of text units into chunks.
//!
//! ## Accounting
//!
//! Units are joined with a single ASCII space, so the running total is the
//! exact byte length the pending chunk would have if flushed now:
//!
//! ```text
//! budget = 12
//!
//! add("alpha")  pending: ["alpha"]          total: 5
//! add("beta")   pending: ["alpha", "beta"]  total: 5 + 1 + 4 = 10
//! add("gamma")  10 + 1 + 5 = 16 > 12
//!               -> flush "alpha beta"
//!               pending: ["gamma"]          total: 5
//! ```
//!
//! A unit larger than the budget is never dropped: it flushes what is
//! pending and then sits alone in the accumulator. Splitting it further is
//! the caller's job.

use crate::{byte_size, ByteBudget};

/// Packs text units into chunks of at most `budget` bytes.
///
/// ## Example
///
/// ```rust
/// use pageslabs::{ByteBudget, ChunkAccumulator};
///
/// let mut acc = ChunkAccumulator::new(ByteBudget::new(12).unwrap());
/// acc.add("alpha");
/// acc.add("beta");
/// acc.add("gamma");
///
/// assert_eq!(acc.finish(), vec!["alpha beta", "gamma"]);
/// ```
#[derive(Debug, Clone)]
pub struct ChunkAccumulator {
    budget: ByteBudget,
    pending: Vec<String>,
    pending_bytes: usize,
    chunks: Vec<String>,
}

impl ChunkAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new(budget: ByteBudget) -> Self {
        Self::with_capacity(budget, 0)
    }

    /// Create an empty accumulator with room for `chunks` finished chunks.
    #[must_use]
    pub fn with_capacity(budget: ByteBudget, chunks: usize) -> Self {
        Self {
            budget,
            pending: Vec::new(),
            pending_bytes: 0,
            chunks: Vec::with_capacity(chunks),
        }
    }

    /// Append a unit, flushing the pending chunk first if the unit would
    /// push it over budget.
    pub fn add(&mut self, unit: impl Into<String>) {
        let unit = unit.into();
        let unit_bytes = byte_size(&unit);
        let mut separator = usize::from(!self.pending.is_empty());

        if separator == 1
            && self
                .budget
                .would_overflow(self.pending_bytes, unit_bytes + separator)
        {
            self.flush();
            separator = 0;
        }

        self.pending_bytes += unit_bytes + separator;
        self.pending.push(unit);
    }

    /// Emit the pending units as one chunk, if there are any.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        self.chunks.push(self.pending.join(" "));
        self.pending.clear();
        self.pending_bytes = 0;
    }

    /// Emit `chunk` as a standalone chunk.
    ///
    /// Pending units are flushed first so output order matches input order.
    pub fn emit(&mut self, chunk: impl Into<String>) {
        self.flush();
        self.chunks.push(chunk.into());
    }

    /// Byte length of the pending chunk, separators included.
    #[must_use]
    pub fn pending_bytes(&self) -> usize {
        self.pending_bytes
    }

    /// Completed chunks so far (pending units excluded).
    #[must_use]
    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    /// Whether nothing has been added or emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.chunks.is_empty()
    }

    /// Flush and return every chunk in order.
    #[must_use]
    pub fn finish(mut self) -> Vec<String> {
        self.flush();
        self.chunks
    }
}
