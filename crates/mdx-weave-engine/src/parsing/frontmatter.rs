//! Frontmatter block extraction and decoding.

use super::kinds::Delimiter;

/// Splits a section slice into its frontmatter block and remaining body.
///
/// The block must open on the slice's first line (a bare delimiter after
/// right-trim) and close on the first bare-delimiter line at index two or
/// later; the lines strictly between form the undecoded block text.
/// Returns `None` when the slice carries no frontmatter, leaving the
/// whole slice as body.
///
/// This is an explicit linear scan, anchored at the slice start: a block
/// appearing mid-slice (possible inside fence-swallowed text) is body,
/// not frontmatter.
pub fn split(raw: &str) -> Option<(String, String)> {
    let lines: Vec<&str> = raw.split('\n').collect();
    if !Delimiter::is_bare(lines[0].trim_end()) {
        return None;
    }

    let close = (2..lines.len()).find(|&j| Delimiter::is_bare(lines[j].trim_end()))?;

    let mut block = lines[1..close].join("\n");
    if block.ends_with('\r') {
        block.pop();
    }
    let rest = if close + 1 < lines.len() {
        lines[close + 1..].join("\n")
    } else {
        String::new()
    };
    Some((block, rest))
}

/// Decodes a frontmatter block as a YAML mapping document.
pub fn decode(block: &str) -> Result<serde_yaml::Mapping, serde_yaml::Error> {
    serde_yaml::from_str(block)
}
