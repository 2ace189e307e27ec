//! Integration tests for the parsing module.
//!
//! Every parsed document is run through `invariants::check` so the
//! line-range laws hold across all fixtures, not just the ones that
//! assert on ranges explicitly.


use pretty_assertions::assert_eq;

use crate::parsing::{ParseOptions, ParseResult, ParseWarning, parse_mdx};

fn parse(doc: &str) -> ParseResult {
    let result = parse_mdx(doc, &ParseOptions::default());
    invariants::check(&result);
    result
}

#[test]
fn single_frontmatter_section() {
    let result = parse("---\nkey: 1\n---\nbody");
    assert_eq!(result.sections.len(), 1);

    let section = &result.sections[0];
    let expected: serde_yaml::Mapping = serde_yaml::from_str("key: 1").unwrap();
    assert_eq!(section.frontmatter, expected);
    assert_eq!(section.content, "body");
    assert_eq!((section.start, section.end), (0, 4));
}

#[test]
fn delimiter_followed_by_blank_is_bare() {
    let result = parse("---\n\nbody");
    assert_eq!(result.sections.len(), 1);

    let section = &result.sections[0];
    assert_eq!(section.frontmatter_raw, None);
    assert_eq!(section.content, "body");
    assert_eq!((section.start, section.end), (1, 3));
}

#[test]
fn sections_are_contiguous_across_separators_and_frontmatter() {
    let result = parse("alpha\n\n---\n\nbeta\n\n---\ntitle: c\n---\n\ngamma\n");
    assert_eq!(result.sections.len(), 3);

    // Bare separators leave a one-line gap; the frontmatter opener is
    // reused as the start of its own section.
    assert_eq!(result.sections[1].start, result.sections[0].end + 1);
    assert_eq!(result.sections[2].start, result.sections[1].end);
}

#[test]
fn code_fence_hides_separator_lines() {
    let result = parse("intro\n\n```\n---\nnot a split\n---\n```\n\noutro");
    assert_eq!(result.sections.len(), 1);
    assert!(result.sections[0].content.contains("---"));
    assert!(result.warnings.is_empty());
}

#[test]
fn fence_info_string_still_opens_a_fence() {
    let result = parse("```yaml\n---\n```\ndone");
    assert_eq!(result.sections.len(), 1);
}

#[test]
fn empty_document_yields_one_empty_section() {
    let result = parse("");
    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].content, "");
    assert_eq!((result.sections[0].start, result.sections[0].end), (0, 1));
}

#[test]
fn crlf_documents_parse_like_lf() {
    let lf = parse("---\nkey: 1\n---\nbody\n---\nmore");
    let crlf = parse("---\r\nkey: 1\r\n---\r\nbody\r\n---\r\nmore");
    assert_eq!(lf.sections.len(), crlf.sections.len());
    for (a, b) in lf.sections.iter().zip(&crlf.sections) {
        assert_eq!(a.frontmatter, b.frontmatter);
        assert_eq!(a.content, b.content);
    }
}

#[test]
fn preserve_cr_keeps_carriage_returns_in_raw() {
    let options = ParseOptions {
        preserve_cr: true,
        ..Default::default()
    };
    let result = parse_mdx("line one\r\nline two\r\n", &options);
    invariants::check(&result);
    assert_eq!(result.sections.len(), 1);
    assert!(result.sections[0].raw.contains('\r'));
}

#[test]
fn unterminated_frontmatter_emits_remainder_and_warning() {
    let result = parse("---\ntitle: open\nbody keeps going");
    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].frontmatter_raw, None);
    assert_eq!(
        result.warnings,
        vec![ParseWarning::UnterminatedFrontmatter { line: 0 }]
    );
}

#[test]
fn malformed_yaml_does_not_abort_other_sections() {
    let result = parse("---\n[unbalanced\n---\nfirst\n---\n\nsecond");
    assert_eq!(result.sections.len(), 2);
    assert!(result.sections[0].frontmatter.is_empty());
    assert!(
        result.sections[0]
            .frontmatter_raw
            .as_deref()
            .is_some_and(|raw| raw.contains("[unbalanced"))
    );
    assert_eq!(result.sections[1].content, "second");
    assert!(matches!(
        result.warnings.as_slice(),
        [ParseWarning::FrontmatterDecode { section: 0, .. }]
    ));
}

#[test]
fn original_raw_text_is_kept_on_the_result() {
    let doc = "---\nkey: 1\n---\nbody";
    assert_eq!(parse(doc).raw, doc);
}
