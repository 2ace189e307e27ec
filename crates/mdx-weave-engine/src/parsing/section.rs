use serde::Serialize;

use super::{ParseOptions, ParseWarning, frontmatter};

/// One content unit of a composite document, with exact line-range
/// provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Zero-based position among emitted sections, in source order.
    pub index: usize,
    /// Decoded frontmatter mapping; empty when absent, skipped, or
    /// malformed.
    pub frontmatter: serde_yaml::Mapping,
    /// Undecoded frontmatter text, preserved even when decoding fails.
    pub frontmatter_raw: Option<String>,
    /// Body with the frontmatter block and its delimiters removed,
    /// trimmed.
    pub content: String,
    /// Exact original slice text, used for lossless reassembly.
    pub raw: String,
    /// First line of the section in the original document.
    pub start: usize,
    /// One past the section's last line (half-open range).
    pub end: usize,
}

/// An ordered sequence of sections plus the original document text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub sections: Vec<Section>,
    pub raw: String,
    pub warnings: Vec<ParseWarning>,
}

/// Decorates a raw slice into a full [`Section`] record.
pub(crate) fn decorate(
    raw: String,
    index: usize,
    start: usize,
    end: usize,
    options: &ParseOptions,
    warnings: &mut Vec<ParseWarning>,
) -> Section {
    let (frontmatter_raw, candidate) = match frontmatter::split(&raw) {
        Some((block, rest)) => (Some(block), rest),
        None => (None, raw.clone()),
    };

    let mut mapping = serde_yaml::Mapping::new();
    if let Some(block) = &frontmatter_raw
        && !options.no_parse_yaml
    {
        match frontmatter::decode(block) {
            Ok(decoded) => mapping = decoded,
            Err(err) => {
                log::warn!("failed to parse YAML frontmatter in section {index}: {err}");
                warnings.push(ParseWarning::FrontmatterDecode {
                    section: index,
                    message: err.to_string(),
                });
            }
        }
    }

    Section {
        index,
        frontmatter: mapping,
        frontmatter_raw,
        content: candidate.trim().to_string(),
        raw,
        start,
        end,
    }
}
