//! Byte budget configuration and measurement.
//!
//! ## Bytes, Not Characters
//!
//! The storage backend limits records by their serialized size. Text is
//! serialized as UTF-8, so a chunk's cost is its UTF-8 byte length:
//!
//! ```text
//! "hello"  -> 5 bytes (5 chars)
//! "héllo"  -> 6 bytes (5 chars)
//! "日本語" -> 9 bytes (3 chars)
//! ```
//!
//! Every size comparison in this crate goes through [`byte_size`] and a
//! [`ByteBudget`].

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Default maximum chunk size in bytes.
pub const DEFAULT_BYTE_BUDGET: usize = 2000;

/// The number of bytes `text` occupies when encoded as UTF-8.
///
/// ```rust
/// use pageslabs::byte_size;
///
/// assert_eq!(byte_size("hello"), 5);
/// assert_eq!(byte_size("日本語"), 9);
/// ```
#[must_use]
#[inline]
pub fn byte_size(text: &str) -> usize {
    text.len()
}

/// The maximum allowed byte length of any emitted chunk.
///
/// A budget is always positive and is fixed for the duration of a run.
///
/// # Examples
///
/// ```rust
/// use pageslabs::ByteBudget;
///
/// let budget = ByteBudget::new(1000).unwrap();
/// assert_eq!(budget.get(), 1000);
/// assert!(budget.fits(1000));
/// assert!(!budget.fits(1001));
///
/// assert!(ByteBudget::new(0).is_err());
/// assert_eq!(ByteBudget::default().get(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteBudget(usize);

impl ByteBudget {
    /// Create a budget of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidByteBudget`] if `bytes == 0`.
    pub fn new(bytes: usize) -> Result<Self, Error> {
        if bytes == 0 {
            Err(Error::InvalidByteBudget(bytes))
        } else {
            Ok(Self(bytes))
        }
    }

    /// The budget in bytes.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Whether a unit of `size` bytes fits on its own.
    #[must_use]
    pub const fn fits(self, size: usize) -> bool {
        size <= self.0
    }

    /// Check if adding `additional` bytes to `current` would exceed the budget.
    ///
    /// Useful for incremental chunk building.
    #[must_use]
    pub fn would_overflow(self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.0
    }

    /// Width, in characters, of one forced slice of an oversized word.
    ///
    /// A quarter of the budget, so that a slice of 4-byte scalars still
    /// fits. Never less than one character.
    #[must_use]
    pub const fn slice_chars(self) -> usize {
        let width = self.0 / 4;
        if width == 0 {
            1
        } else {
            width
        }
    }
}

impl Default for ByteBudget {
    fn default() -> Self {
        Self(DEFAULT_BYTE_BUDGET)
    }
}

impl TryFrom<usize> for ByteBudget {
    type Error = Error;

    fn try_from(bytes: usize) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl FromStr for ByteBudget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s
            .trim()
            .parse::<usize>()
            .map_err(|e| Error::UnparsableByteBudget {
                input: s.to_string(),
                reason: e.to_string(),
            })?;
        Self::new(bytes)
    }
}

impl fmt::Display for ByteBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}
