use super::ParseWarning;
use super::kinds::{CodeFence, Delimiter};

/// One contiguous run of source lines belonging to a single section.
///
/// `start`/`end` form a half-open range into the document's line array;
/// `text` is those lines rejoined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSlice {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Splits a document into lines.
///
/// With `preserve_cr` the document is split on `\n` alone and any `\r`
/// stays inside the line; otherwise both `\r\n` and `\n` terminate a line.
pub fn split_lines(mdx: &str, preserve_cr: bool) -> Vec<&str> {
    if preserve_cr {
        mdx.split('\n').collect()
    } else {
        mdx.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }
}

/// Walks the document's lines once and emits raw section slices.
///
/// Separator detection works on right-trimmed lines; the stored slice
/// text keeps the lines as split. Frontmatter blocks and fenced code are
/// skipped over so their interior lines never register as separators.
pub fn segment(lines: &[&str], warnings: &mut Vec<ParseWarning>) -> Vec<RawSlice> {
    Segmenter::new(lines).run(warnings)
}

struct Segmenter<'a> {
    lines: &'a [&'a str],
    /// First line not yet assigned to an emitted slice.
    start: usize,
    out: Vec<RawSlice>,
}

impl<'a> Segmenter<'a> {
    fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            start: 0,
            out: Vec::new(),
        }
    }

    fn run(mut self, warnings: &mut Vec<ParseWarning>) -> Vec<RawSlice> {
        let mut i = 0;
        while i < self.lines.len() {
            let line = self.lines[i].trim_end();

            if Delimiter::is_marker(line) {
                if i > 0 {
                    self.close(i);
                }

                if Delimiter::is_bare(line) && self.opens_frontmatter(i) {
                    // The opener belongs to the section it introduces.
                    self.start = i;
                    match self.find_frontmatter_close(i + 1) {
                        Some(close) => i = close + 1,
                        None => {
                            warnings.push(ParseWarning::UnterminatedFrontmatter { line: i });
                            i = self.lines.len();
                        }
                    }
                } else {
                    // Standalone separator: excluded from both sections.
                    self.start = i + 1;
                    i += 1;
                }
            } else if let Some(marker) = CodeFence::opens(line) {
                match self.find_fence_close(i + 1, marker) {
                    Some(close) => i = close + 1,
                    None => {
                        warnings.push(ParseWarning::UnterminatedFence { line: i });
                        i += 1;
                    }
                }
            } else {
                i += 1;
            }
        }

        // Unconsumed trailing content becomes the final slice.
        if self.start < self.lines.len() {
            self.close(self.lines.len());
        }
        self.out
    }

    /// Emits the pending slice ending at `end`, skipping empty ranges.
    fn close(&mut self, end: usize) {
        if self.start == end {
            return;
        }
        self.out.push(RawSlice {
            text: self.lines[self.start..end].join("\n"),
            start: self.start,
            end,
        });
        self.start = end + 1;
    }

    /// A bare delimiter opens frontmatter only when the next line exists
    /// and is non-blank; a blank line demotes it to a bare separator.
    fn opens_frontmatter(&self, i: usize) -> bool {
        self.lines
            .get(i + 1)
            .is_some_and(|next| !next.trim().is_empty())
    }

    fn find_frontmatter_close(&self, from: usize) -> Option<usize> {
        (from..self.lines.len()).find(|&j| Delimiter::is_bare(self.lines[j].trim_end()))
    }

    fn find_fence_close(&self, from: usize, marker: &str) -> Option<usize> {
        (from..self.lines.len()).find(|&j| CodeFence::closes(self.lines[j], marker))
    }
}
