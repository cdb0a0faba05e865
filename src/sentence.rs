//! Sentence segmentation.
//!
//! Paragraphs that do not fit the budget are broken into sentences before
//! falling back to words. Segmentation is a capability the chunker is
//! *given*, not one it builds on first use: construct a segmenter once at
//! startup and inject it with [`BudgetChunker::with_segmenter`].
//!
//! ## The Hard Part: Finding Sentences
//!
//! ```text
//! "Dr. Smith went to Washington D.C. on Jan. 15th."
//!     ^                          ^       ^
//!     Not a sentence end (abbreviation)
//! ```
//!
//! The default, [`UnicodeSentences`], uses Unicode Standard Annex #29
//! (UAX #29) sentence boundaries. Its tables are compiled in, so it needs
//! no data download and cannot fail to initialise. It handles decimal
//! numbers, ellipses, and closing quotes; abbreviations are only partly
//! covered. Plug in a domain-specific segmenter if that matters.
//!
//! [`BudgetChunker::with_segmenter`]: crate::BudgetChunker::with_segmenter

use unicode_segmentation::UnicodeSegmentation;

/// Splits a text block into an ordered sequence of sentences.
///
/// Implementations must return sentences in order and must not drop
/// non-whitespace content; surrounding whitespace may be trimmed.
///
/// ```rust
/// use pageslabs::SentenceSegmenter;
///
/// /// One sentence per line.
/// struct Lines;
///
/// impl SentenceSegmenter for Lines {
///     fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
///         text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
///     }
/// }
///
/// assert_eq!(Lines.sentences("a\nb\n"), vec!["a", "b"]);
/// ```
pub trait SentenceSegmenter: Send + Sync {
    /// Split `text` into sentences.
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

impl<T: SentenceSegmenter + ?Sized> SentenceSegmenter for &T {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).sentences(text)
    }
}

impl<T: SentenceSegmenter + ?Sized> SentenceSegmenter for Box<T> {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).sentences(text)
    }
}

/// UAX #29 sentence segmentation.
///
/// ## Example
///
/// ```rust
/// use pageslabs::{SentenceSegmenter, UnicodeSentences};
///
/// let sentences = UnicodeSentences.sentences("Hello world. How are you? Fine.");
/// assert_eq!(sentences, vec!["Hello world.", "How are you?", "Fine."]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentences;

impl SentenceSegmenter for UnicodeSentences {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        // `split_sentence_bounds` covers the whole input, including
        // segments without letters ("..."), which `unicode_sentences` skips.
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
