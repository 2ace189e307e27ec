//! Splitting composite MDX documents into sections and putting them back.
//!
//! A composite document mixes three uses of a `---` line: frontmatter
//! block delimiters, bare section separators, and look-alikes inside
//! fenced code. [`parse_mdx`] tells them apart in a single forward pass
//! and emits one [`Section`] per content unit, each carrying its exact
//! source line range.

pub mod compose;
pub mod frontmatter;
pub mod kinds;
pub mod section;
pub mod segment;

#[cfg(test)]
mod tests;

pub use compose::{prettify, prettify_section, stringify};
pub use section::{ParseResult, Section};

/// Options accepted by [`parse_mdx`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Keep `frontmatter_raw` but skip structured YAML decoding.
    pub no_parse_yaml: bool,
    /// Split lines on `\n` only, retaining any `\r`.
    pub preserve_cr: bool,
}

/// Non-fatal conditions recorded while parsing.
///
/// None of these abort a parse; they are collected on the
/// [`ParseResult`] so callers can surface them. Line numbers are
/// zero-based indices into the document's line array, matching
/// [`Section::start`] and [`Section::end`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWarning {
    /// A frontmatter opener was never closed; the rest of the document
    /// was swallowed into the final section.
    #[error("frontmatter block opened at line {line} is never closed")]
    UnterminatedFrontmatter { line: usize },
    /// A code fence was never closed; later separator-like lines inside
    /// it are treated as structural.
    #[error("code fence opened at line {line} is never closed")]
    UnterminatedFence { line: usize },
    /// A frontmatter block did not decode as a YAML mapping; the
    /// section's mapping is left empty and its raw text kept.
    #[error("section {section}: frontmatter is not a valid YAML mapping: {message}")]
    FrontmatterDecode { section: usize, message: String },
}

/// Parses a composite MDX document into ordered sections.
///
/// Pure and single-pass: the input is never mutated and nothing fallible
/// escapes this boundary. Malformed frontmatter degrades to an empty
/// mapping plus a [`ParseWarning`] for that section only.
pub fn parse_mdx(mdx: &str, options: &ParseOptions) -> ParseResult {
    let lines = segment::split_lines(mdx, options.preserve_cr);
    let mut warnings = Vec::new();
    let slices = segment::segment(&lines, &mut warnings);

    let sections = slices
        .into_iter()
        .enumerate()
        .map(|(index, slice)| {
            section::decorate(
                slice.text,
                index,
                slice.start,
                slice.end,
                options,
                &mut warnings,
            )
        })
        .collect();

    ParseResult {
        sections,
        raw: mdx.to_string(),
        warnings,
    }
}
