//! Reassembly of parsed sections into document text.

use super::kinds::Delimiter;
use super::section::{ParseResult, Section};

/// Joins every section's raw text back into a single document.
///
/// Sections are joined with a bare separator line regardless of how they
/// were introduced in the source, the result is trimmed, and a single
/// trailing newline is appended. A section whose raw text itself starts
/// with a delimiter line (a frontmatter opener) is ambiguous with the
/// join separator on reparse; see the crate notes on round-trip limits.
pub fn stringify(result: &ParseResult) -> String {
    let separator = format!("\n{}\n", Delimiter::TOKEN);
    let joined = result
        .sections
        .iter()
        .map(|section| section.raw.as_str())
        .collect::<Vec<_>>()
        .join(&separator);
    format!("{}\n", joined.trim())
}

/// Rebuilds a section's derived `content` and `raw` with normalized
/// whitespace.
///
/// Non-empty content is wrapped in a single leading and trailing newline;
/// `raw` is regenerated from the trimmed frontmatter block and the new
/// content. Returns a new value; the input section is consumed.
pub fn prettify_section(section: Section) -> Section {
    let trimmed = section.content.trim();
    let content = if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{trimmed}\n")
    };

    let raw = match &section.frontmatter_raw {
        Some(block) => format!(
            "{token}\n{block}\n{token}\n{content}",
            token = Delimiter::TOKEN,
            block = block.trim(),
        ),
        None => content.clone(),
    };

    Section {
        content,
        raw,
        ..section
    }
}

/// Applies [`prettify_section`] to every section in source order.
pub fn prettify(result: ParseResult) -> ParseResult {
    ParseResult {
        sections: result.sections.into_iter().map(prettify_section).collect(),
        ..result
    }
}
