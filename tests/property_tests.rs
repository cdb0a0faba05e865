//! Property-based tests for budget chunking.
//!
//! These tests verify that the chunker maintains key invariants:
//! - No loss: every non-whitespace character survives, in order
//! - Bounds: no chunk exceeds the budget
//! - Ordered: chunk indices are 0..n
//! - Stable: re-chunking the output never produces more chunks

use proptest::prelude::*;
use pageslabs::{BudgetChunker, ByteBudget, Chunker, Slab};

// =============================================================================
// Test Generators
// =============================================================================

/// Mostly short words, some long enough to need forced slicing, some multibyte.
fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[a-z]{1,10}",
        1 => "[A-Za-z0-9]{20,120}",
        2 => "[àéîõü日本語🦀]{1,12}",
    ]
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..15).prop_map(|words| format!("{}.", words.join(" ")))
}

fn paragraph() -> impl Strategy<Value = String> {
    prop_oneof![
        9 => prop::collection::vec(sentence(), 1..6).prop_map(|s| s.join(" ")),
        1 => "[ \t\n]{0,4}",
    ]
}

fn paragraphs() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(paragraph(), 0..8)
}

fn budget() -> impl Strategy<Value = ByteBudget> {
    (4usize..300).prop_map(|bytes| ByteBudget::new(bytes).unwrap())
}

// =============================================================================
// Invariant Helpers
// =============================================================================

fn non_whitespace<'a>(texts: impl IntoIterator<Item = &'a str>) -> String {
    texts
        .into_iter()
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn indices_sequential(slabs: &[Slab]) -> bool {
    slabs.iter().enumerate().all(|(i, slab)| slab.index == i)
}

// =============================================================================
// BudgetChunker Properties
// =============================================================================

proptest! {
    #[test]
    fn no_content_lost(paragraphs in paragraphs(), budget in budget()) {
        let slabs = BudgetChunker::new(budget).chunk(&paragraphs);

        let input = non_whitespace(paragraphs.iter().map(String::as_str));
        let output = non_whitespace(slabs.iter().map(|s| s.text.as_str()));
        prop_assert_eq!(input, output);
    }

    #[test]
    fn chunks_within_budget(paragraphs in paragraphs(), budget in budget()) {
        let slabs = BudgetChunker::new(budget).chunk(&paragraphs);

        for slab in &slabs {
            prop_assert!(
                slab.len() <= budget.get(),
                "Chunk {} size {} exceeds budget {}",
                slab.index,
                slab.len(),
                budget.get()
            );
        }
    }

    #[test]
    fn chunks_ordered_and_non_empty(paragraphs in paragraphs(), budget in budget()) {
        let slabs = BudgetChunker::new(budget).chunk(&paragraphs);

        prop_assert!(indices_sequential(&slabs));
        prop_assert!(slabs.iter().all(|s| !s.text.trim().is_empty()));
        prop_assert!(slabs.iter().all(|s| s.text == s.text.trim()));
    }

    #[test]
    fn rechunking_never_grows(paragraphs in paragraphs(), budget in budget()) {
        let chunker = BudgetChunker::new(budget);
        let first = chunker.chunk(&paragraphs);

        let texts: Vec<String> = first.iter().map(|s| s.text.clone()).collect();
        let second = chunker.chunk(&texts);

        prop_assert!(
            second.len() <= first.len(),
            "re-chunking grew {} -> {}",
            first.len(),
            second.len()
        );
    }

    #[test]
    fn small_input_is_one_chunk(paragraphs in prop::collection::vec("[a-z]{1,20}", 1..10)) {
        let total: usize = paragraphs.iter().map(|p| p.len() + 1).sum();
        let budget = ByteBudget::new(total).unwrap();
        let slabs = BudgetChunker::new(budget).chunk(&paragraphs);

        prop_assert_eq!(slabs.len(), 1);
        prop_assert_eq!(&slabs[0].text, &paragraphs.join(" "));
    }
}

// =============================================================================
// Consistency Tests
// =============================================================================

#[test]
fn chunking_is_deterministic() {
    let paragraphs = [
        "The quick brown fox jumps over the lazy dog. Pack my box.",
        "How vexingly quick daft zebras jump!",
    ];
    let chunker = BudgetChunker::new(ByteBudget::new(30).unwrap());

    assert_eq!(chunker.chunk(&paragraphs), chunker.chunk(&paragraphs));
}
