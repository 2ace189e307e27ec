/// Fenced code block boundaries.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the fence marker when a right-trimmed line opens a fence.
    ///
    /// The marker is the line's leading whitespace plus its full backtick
    /// run, so a closer must sit at the same indent and carry at least as
    /// many backticks.
    pub fn opens(trimmed: &str) -> Option<&str> {
        let rest = trimmed.trim_start();
        if !rest.starts_with(Self::BACKTICKS) {
            return None;
        }
        let indent = trimmed.len() - rest.len();
        let run = rest.len() - rest.trim_start_matches('`').len();
        Some(&trimmed[..indent + run])
    }

    /// A fence closes at the first later line that starts with the
    /// opening marker.
    pub fn closes(line: &str, marker: &str) -> bool {
        line.starts_with(marker)
    }
}
