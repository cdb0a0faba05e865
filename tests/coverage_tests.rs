//! Scenario tests for each tier of the fallback ladder.
//!
//! Each test pins the exact chunk layout for a representative input so a
//! change in packing behavior shows up as a diff, not a silent drift.

use pageslabs::{
    oversized_chunks, BudgetChunker, ByteBudget, Chunker, SentenceSegmenter, Slab,
    UnicodeSentences,
};

fn chunker(bytes: usize) -> BudgetChunker {
    BudgetChunker::new(ByteBudget::new(bytes).unwrap())
}

fn assert_within(slabs: &[Slab], budget: usize) {
    for slab in slabs {
        assert!(
            slab.len() <= budget,
            "Chunk {} has size {} > max {}",
            slab.index,
            slab.len(),
            budget
        );
    }
}

/// Roughly `bytes` bytes of lowercase words with no sentence punctuation.
fn unpunctuated(bytes: usize) -> String {
    let mut text = "lorem ".repeat(bytes / 6 + 1);
    text.truncate(bytes);
    text.trim_end().to_string()
}

// =============================================================================
// Paragraph tier
// =============================================================================

#[test]
fn small_paragraphs_join_into_one_chunk() {
    let paragraphs = ["a".repeat(150), "b".repeat(200), "c".repeat(150)];
    let slabs = chunker(2000).chunk(&paragraphs);

    assert_eq!(slabs.len(), 1);
    assert_eq!(slabs[0].text, paragraphs.join(" "));
    assert_eq!(slabs[0].len(), 502);
}

#[test]
fn paragraphs_flush_at_budget() {
    let paragraphs = ["a".repeat(600), "b".repeat(600), "c".repeat(600)];
    let slabs = chunker(1201).chunk(&paragraphs);

    assert_eq!(slabs.len(), 2);
    assert_eq!(slabs[0].text, format!("{} {}", paragraphs[0], paragraphs[1]));
    assert_eq!(slabs[1].text, paragraphs[2]);
}

// =============================================================================
// Sentence tier
// =============================================================================

/// One capitalised sentence of exactly `bytes` bytes.
fn sentence(bytes: usize) -> String {
    format!("S{}.", "x".repeat(bytes - 2))
}

#[test]
fn long_paragraph_splits_on_sentences() {
    let sentence = sentence(300);
    let paragraph = vec![sentence.clone(); 5].join(" ");
    let slabs = chunker(1000).chunk(&[paragraph]);

    // Three 300-byte sentences need 902 bytes; a fourth would not fit.
    assert_eq!(slabs.len(), 2);
    assert_eq!(slabs[0].text, vec![sentence.as_str(); 3].join(" "));
    assert_eq!(slabs[1].text, vec![sentence.as_str(); 2].join(" "));
    assert_within(&slabs, 1000);
}

#[test]
fn sentences_keep_their_punctuation() {
    let text = "Dr. Smith went to Washington. He met Mr. Jones! Did they talk? Yes.";
    let sentences = UnicodeSentences.sentences(text);
    let slabs = chunker(40).chunk(&[text]);

    assert!(sentences.len() >= 3);
    assert!(slabs.len() >= 2);
    assert_within(&slabs, 40);

    // Every chunk is whole sentences, so the chunks rejoin to the input.
    let rejoined: Vec<&str> = slabs.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(rejoined.join(" "), text);
}

// =============================================================================
// Word tier
// =============================================================================

#[test]
fn unpunctuated_paragraph_falls_through_to_words() {
    let paragraph = unpunctuated(3000);
    assert!(paragraph.len() > 2990);

    let slabs = chunker(1000).chunk(&[paragraph.as_str()]);

    assert!(slabs.len() >= 3, "expected >= 3 chunks, got {}", slabs.len());
    assert_within(&slabs, 1000);
    let rebuilt: Vec<&str> = slabs.iter().flat_map(|s| s.text.split(' ')).collect();
    assert_eq!(rebuilt, paragraph.split(' ').collect::<Vec<_>>());
}

#[test]
fn word_chunks_do_not_merge_with_neighbours() {
    let paragraphs = ["intro".to_string(), unpunctuated(300), "outro".to_string()];
    let slabs = chunker(100).chunk(&paragraphs);

    assert_eq!(slabs.first().unwrap().text, "intro");
    assert_eq!(slabs.last().unwrap().text, "outro");
    assert_within(&slabs, 100);
}

// =============================================================================
// Forced slicing
// =============================================================================

#[test]
fn huge_word_is_force_sliced() {
    let word = "x".repeat(8000);
    let slabs = chunker(2000).chunk(&[word.as_str()]);

    // 500-char slices until 2000 bytes remain: 12 slices plus the remainder.
    assert_eq!(slabs.len(), 13);
    for slab in &slabs[..12] {
        assert_eq!(slab.len(), 500);
    }
    assert_eq!(slabs[12].len(), 2000);
    assert_eq!(slabs.iter().map(|s| s.text.as_str()).collect::<String>(), word);
}

#[test]
fn slice_remainder_joins_following_words() {
    let sentence = format!("{} ab cd", "y".repeat(22));
    let slabs = chunker(20).chunk(&[sentence]);

    // Width 5: one slice leaves a 17-byte remainder, which has room for "ab".
    let texts: Vec<&str> = slabs.iter().map(|s| s.text.as_str()).collect();
    let remainder = format!("{} ab", "y".repeat(17));
    assert_eq!(texts, vec!["yyyyy", remainder.as_str(), "cd"]);
}

#[test]
fn multibyte_word_slices_stay_within_budget() {
    let word = "日本語".repeat(100);
    let slabs = chunker(50).chunk(&[word.as_str()]);

    assert_within(&slabs, 50);
    assert!(oversized_chunks(&slabs, ByteBudget::new(50).unwrap()).is_empty());
    assert_eq!(slabs.iter().map(|s| s.text.as_str()).collect::<String>(), word);
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn empty_input_produces_no_chunks() {
    let none: Vec<String> = Vec::new();
    assert!(chunker(2000).chunk(&none).is_empty());
}

#[test]
fn whitespace_paragraph_contributes_nothing() {
    let slabs = chunker(2000).chunk(&["   ", "real", "\t\n"]);
    assert_eq!(slabs.len(), 1);
    assert_eq!(slabs[0].text, "real");
}

#[test]
fn rechunking_is_stable() {
    let paragraphs = [
        unpunctuated(450),
        "Short one.".to_string(),
        format!("{}. {}.", unpunctuated(120), unpunctuated(220)),
        "z".repeat(700),
    ];
    let chunker = chunker(256);
    let first = chunker.chunk(&paragraphs);
    let texts: Vec<String> = first.iter().map(|s| s.text.clone()).collect();
    let second = chunker.chunk(&texts);

    assert!(second.len() <= first.len());
    assert_within(&second, 256);
}
