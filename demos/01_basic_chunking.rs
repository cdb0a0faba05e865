//! Basic Budget Chunking
//!
//! The minimal example: pack paragraphs into chunks under a byte budget.
//!
//! ```bash
//! cargo run --example 01_basic_chunking
//! ```

use pageslabs::{BudgetChunker, ByteBudget, Chunker};

fn main() -> pageslabs::Result<()> {
    let paragraphs = [
        "Machine learning models learn patterns from data.",
        "They generalize these patterns to make predictions. \
         This is fundamentally different from traditional programming, \
         where every rule is written out by hand.",
        "Deep learning extends this with multiple hidden layers.",
        "https://example.com/a/very/long/path/that/does/not/fit/in/one/chunk/at/all",
    ];

    // 64 bytes per chunk: short paragraphs share a chunk, the long one
    // falls back to sentences, and the url is sliced.
    let chunker = BudgetChunker::new(ByteBudget::new(64)?);
    let slabs = chunker.chunk(&paragraphs);

    println!("Budget: {}", chunker.budget());
    println!("Chunks: {}\n", slabs.len());

    for slab in &slabs {
        println!("[{}] {} bytes: \"{}\"", slab.index, slab.len(), slab.text);
    }

    Ok(())
}
