//! Paragraph extraction from HTML.
//!
//! Pages carry navigation, footers, and sidebars around the text worth
//! storing. Extraction narrows to the main content area when the page marks
//! one, then takes every `<p>` inside it:
//!
//! ```text
//! content root = first <main> or <article>
//!             ?: element with id="content"
//!             ?: the whole document
//!
//! paragraphs   = text of each <p> under the root, trimmed, non-empty
//! ```

use scraper::{ElementRef, Html, Selector};

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Extract paragraph text from an HTML document, in document order.
///
/// Parsing is lenient; malformed markup yields whatever paragraphs the
/// parser recovers.
///
/// ```rust
/// use pageslabs::extract_paragraphs;
///
/// let html = r#"
///     <nav><p>Menu</p></nav>
///     <main><p>First.</p><p>  </p><p>Second <b>bold</b>.</p></main>
/// "#;
/// assert_eq!(extract_paragraphs(html), vec!["First.", "Second bold."]);
/// ```
#[must_use]
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let root = content_root(&document);
    let paragraph = selector("p");

    root.select(&paragraph)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

fn content_root(document: &Html) -> ElementRef<'_> {
    document
        .select(&selector("main, article"))
        .next()
        .or_else(|| document.select(&selector("#content")).next())
        .unwrap_or_else(|| document.root_element())
}
