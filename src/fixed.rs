//! Forced slicing of words that exceed the budget on their own.
//!
//! The last resort. When a whitespace-free run of text (a URL, a base64
//! blob, a very long compound) is larger than the budget, no boundary is
//! left to respect, so it is cut into fixed-width slices.
//!
//! ## How It Works
//!
//! ```text
//! budget = 8, slice width = 8 / 4 = 2 chars
//!
//! Word: "abcdefghijkl"   (12 bytes > 8)
//!
//! Slice 0: "ab"          remaining "cdefghijkl" (10 bytes > 8)
//! Slice 1: "cd"          remaining "efghijkl"   (8 bytes, fits)
//! Remainder: "efghijkl"  <- handed back to the caller
//! ```
//!
//! ## Why a Quarter?
//!
//! Slices are measured in characters, the budget in bytes. A UTF-8 scalar
//! is at most 4 bytes, so `budget / 4` characters can never exceed the
//! budget, whatever the script. The price is more, smaller slices for ASCII
//! text. Slicing stops as soon as the remainder fits; the remainder is not
//! emitted here but returned so it can be packed with the words after it.

use crate::{byte_size, ByteBudget};

/// The result of slicing an oversized word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ForcedSlices {
    /// Fixed-width slices, in order. Each becomes a standalone chunk.
    pub slices: Vec<String>,
    /// The tail that fits within the budget.
    pub remainder: String,
}

/// Cuts oversized words into fixed-width slices.
///
/// ## Example
///
/// ```rust
/// use pageslabs::{ByteBudget, ForcedSlicer};
///
/// let slicer = ForcedSlicer::new(ByteBudget::new(8).unwrap());
/// let out = slicer.slice("abcdefghijkl");
///
/// assert_eq!(out.slices, vec!["ab", "cd"]);
/// assert_eq!(out.remainder, "efghijkl");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ForcedSlicer {
    budget: ByteBudget,
}

impl ForcedSlicer {
    /// Create a slicer for `budget`.
    #[must_use]
    pub fn new(budget: ByteBudget) -> Self {
        Self { budget }
    }

    /// Slice width in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.budget.slice_chars()
    }

    /// Cut slices off the front of `word` until the rest fits the budget.
    ///
    /// A word that already fits yields no slices and comes back whole as
    /// the remainder.
    #[must_use]
    pub fn slice(&self, word: &str) -> ForcedSlices {
        let width = self.width();
        let mut slices = Vec::new();
        let mut rest = word;

        while !self.budget.fits(byte_size(rest)) {
            let cut = rest
                .char_indices()
                .nth(width)
                .map_or(rest.len(), |(offset, _)| offset);
            slices.push(rest[..cut].to_string());
            rest = &rest[cut..];
        }

        if !slices.is_empty() {
            tracing::debug!(
                slices = slices.len(),
                width,
                remainder_bytes = byte_size(rest),
                "forced slicing of oversized word"
            );
        }

        ForcedSlices {
            slices,
            remainder: rest.to_string(),
        }
    }
}
