//! The Slab type: one emitted chunk and its position in the sequence.

/// A chunk of text ready for storage.
///
/// A slab is one or more text units (paragraphs, sentences, words, or forced
/// slices) joined by single spaces. Slabs are produced in input order and
/// `index` records that order; downstream it becomes the chunk id.
///
/// Unlike a plain substring, a slab's text is *rebuilt* from trimmed units,
/// so it carries no offsets into the source document:
///
/// ```rust
/// use pageslabs::Slab;
///
/// let slab = Slab::new("First paragraph. Second paragraph.", 0);
/// assert_eq!(slab.len(), 34);
/// assert_eq!(slab.index, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slab {
    /// The chunk text.
    pub text: String,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Slab {
    /// Create a new slab.
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        crate::byte_size(&self.text)
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Slab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slab {{ index: {}, len: {} }}", self.index, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_is_bytes() {
        let slab = Slab::new("日本", 3);
        assert_eq!(slab.len(), 6);
        assert!(!slab.is_empty());
        assert_eq!(slab.to_string(), "Slab { index: 3, len: 6 }");
    }
}
