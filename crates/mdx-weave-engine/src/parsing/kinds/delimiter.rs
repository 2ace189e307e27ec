/// The three-dash separator token.
pub struct Delimiter;

impl Delimiter {
    pub const TOKEN: &'static str = "---";

    /// True when a right-trimmed line triggers separator handling at all.
    ///
    /// Any line that starts with the token closes the pending section;
    /// whether it then opens frontmatter is a separate, stricter check.
    pub fn is_marker(trimmed: &str) -> bool {
        trimmed.starts_with(Self::TOKEN)
    }

    /// True when a right-trimmed line is the token and nothing else,
    /// which is what frontmatter openers and closers require.
    pub fn is_bare(trimmed: &str) -> bool {
        trimmed == Self::TOKEN
    }
}
