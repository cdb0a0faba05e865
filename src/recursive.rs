//! Hierarchical budget chunking: paragraph, then sentence, then word.
//!
//! ## The Algorithm
//!
//! Given paragraphs in document order and a byte budget:
//!
//! ```text
//! for each paragraph (trimmed):
//!   empty?                 -> skip
//!   fits the budget?       -> pack it whole
//!   otherwise, per sentence:
//!     fits the budget?     -> pack it whole
//!     otherwise            -> split into words, emit those chunks standalone
//!                             (words bigger than the budget are force-sliced)
//! flush what is left
//! ```
//!
//! "Pack" means greedy accumulation: units are joined with single spaces
//! until the next one would overflow, at which point the chunk is flushed.
//! Small paragraphs therefore share chunks, while a paragraph that had to
//! be broken up still shares chunks with its neighbours at sentence level.
//!
//! ## Why This Order?
//!
//! Coarser units keep more meaning together. The chunker only drops to a
//! finer granularity when the coarser unit cannot possibly fit, which keeps
//! fragmentation to a minimum. The packing is greedy, not optimal: it never
//! reorders or revisits units.

use crate::{
    byte_size, ByteBudget, ChunkAccumulator, Chunker, SentenceSegmenter, Slab, UnicodeSentences,
    WordAccumulator,
};

/// Budget-aware chunker with paragraph → sentence → word fallback.
///
/// ## Example
///
/// ```rust
/// use pageslabs::{BudgetChunker, ByteBudget, Chunker};
///
/// let chunker = BudgetChunker::new(ByteBudget::new(40).unwrap());
/// let paragraphs = [
///     "A short paragraph.",
///     "Another one.",
///     "This paragraph is long. It is split into sentences.",
/// ];
/// let slabs = chunker.chunk(&paragraphs);
///
/// assert_eq!(slabs[0].text, "A short paragraph. Another one.");
/// assert!(slabs.iter().all(|s| s.len() <= 40));
/// ```
#[derive(Debug, Clone)]
pub struct BudgetChunker<S = UnicodeSentences> {
    budget: ByteBudget,
    segmenter: S,
}

impl BudgetChunker {
    /// Create a chunker using UAX #29 sentence segmentation.
    #[must_use]
    pub fn new(budget: ByteBudget) -> Self {
        Self::with_segmenter(budget, UnicodeSentences)
    }
}

impl Default for BudgetChunker {
    fn default() -> Self {
        Self::new(ByteBudget::default())
    }
}

impl<S: SentenceSegmenter> BudgetChunker<S> {
    /// Create a chunker with an injected sentence segmenter.
    #[must_use]
    pub fn with_segmenter(budget: ByteBudget, segmenter: S) -> Self {
        Self { budget, segmenter }
    }

    /// The byte budget.
    #[must_use]
    pub fn budget(&self) -> ByteBudget {
        self.budget
    }

    /// Chunk any ordered sequence of paragraphs.
    pub fn chunk_paragraphs<I>(&self, paragraphs: I) -> Vec<Slab>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.pack(ChunkAccumulator::new(self.budget), paragraphs)
    }

    fn pack<I>(&self, mut acc: ChunkAccumulator, paragraphs: I) -> Vec<Slab>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for paragraph in paragraphs {
            self.add_paragraph(&mut acc, paragraph.as_ref());
        }

        acc.finish()
            .into_iter()
            .enumerate()
            .map(|(index, text)| Slab::new(text, index))
            .collect()
    }

    fn add_paragraph(&self, acc: &mut ChunkAccumulator, paragraph: &str) {
        let paragraph = paragraph.trim();
        let paragraph_bytes = byte_size(paragraph);
        if paragraph_bytes == 0 {
            return;
        }
        if self.budget.fits(paragraph_bytes) {
            acc.add(paragraph);
            return;
        }

        let mut sentences = self.segmenter.sentences(paragraph);
        if sentences.is_empty() {
            sentences.push(paragraph);
        }
        tracing::debug!(
            paragraph_bytes,
            sentences = sentences.len(),
            "paragraph exceeds budget, splitting into sentences"
        );

        for sentence in sentences {
            let sentence = sentence.trim();
            let sentence_bytes = byte_size(sentence);
            if sentence_bytes == 0 {
                continue;
            }
            if self.budget.fits(sentence_bytes) {
                acc.add(sentence);
                continue;
            }

            let pieces = WordAccumulator::split(self.budget, sentence);
            tracing::debug!(
                sentence_bytes,
                pieces = pieces.len(),
                "sentence exceeds budget, splitting into words"
            );
            for piece in pieces {
                acc.emit(piece);
            }
        }
    }
}

impl<S: SentenceSegmenter, P: AsRef<str>> Chunker<P> for BudgetChunker<S> {
    fn chunk(&self, paragraphs: &[P]) -> Vec<Slab> {
        let total: usize = paragraphs.iter().map(|p| byte_size(p.as_ref())).sum();
        let acc = ChunkAccumulator::with_capacity(self.budget, <Self as Chunker<P>>::estimate_chunks(self, total));
        self.pack(acc, paragraphs)
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        text_len.div_ceil(self.budget.get()).max(1)
    }
}
