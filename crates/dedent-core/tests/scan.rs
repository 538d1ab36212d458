// crates/dedent-core/tests/scan.rs

use dedent_core::{common_indent, common_indent_bounded, indent_size};
use rstest::rstest;

fn indent_of(text: &[u8]) -> Option<(usize, Vec<u8>)> {
    common_indent(text).map(|ci| (ci.offset(), ci.as_bytes().to_vec()))
}

#[rstest]
#[case(b"", 0)]
#[case(b"x", 0)]
#[case(b"  \tx", 3)]
#[case(b" \n  ", 1)]
#[case(b"\t\t", 2)]
fn indent_size_counts_leading_spaces_and_tabs(#[case] line: &[u8], #[case] expected: usize) {
    assert_eq!(indent_size(line), expected);
}

#[rstest]
#[case::empty(b"")]
#[case::nul_first(b"\0  a")]
#[case::only_blank_lines(b"  \n\t\n\n")]
#[case::only_whitespace(b"    ")]
#[case::unindented(b"text")]
#[case::unindented_first(b"line1\n  line2")]
#[case::unindented_last(b"  line1\nline2")]
#[case::space_then_tab(b"  line1\n\tline2")]
#[case::tab_then_space(b"\tline1\n  line2")]
#[case::nbsp_is_content("\u{a0}a\n  b".as_bytes())]
fn no_common_indent(#[case] text: &[u8]) {
    assert_eq!(common_indent(text), None);
}

#[test]
fn single_indented_line_without_newline() {
    assert_eq!(indent_of(b"    a"), Some((0, b"    ".to_vec())));
}

#[test]
fn indent_shrinks_to_shortest_line() {
    let (_, bytes) = indent_of(b"    a\n  b\n      c").unwrap();
    assert_eq!(bytes, b"  ");
}

#[test]
fn indent_is_anchored_on_last_non_blank_line() {
    let ci = common_indent(b"  a\n    b\n\n").unwrap();
    assert_eq!(ci.offset(), 4);
    assert_eq!(ci.len(), 2);
    assert_eq!(ci.range(), 4..6);
    assert!(!ci.is_empty());
}

#[test]
fn mixed_indent_keeps_shared_prefix_only() {
    let (_, bytes) = indent_of(b" \ta\n \tb\n \t c").unwrap();
    assert_eq!(bytes, b" \t");

    let (_, bytes) = indent_of(b"\t  a\n\t b").unwrap();
    assert_eq!(bytes, b"\t ");
}

#[test]
fn blank_lines_do_not_constrain() {
    let (_, bytes) = indent_of(b"  a\n\t\t\n\n \n  b").unwrap();
    assert_eq!(bytes, b"  ");
}

#[test]
fn whitespace_tail_does_not_constrain() {
    let (_, bytes) = indent_of(b"    a\n ").unwrap();
    assert_eq!(bytes, b"    ");
}

#[test]
fn crlf_lines() {
    let (_, bytes) = indent_of(b"  a\r\n\r\n  b\r\n").unwrap();
    assert_eq!(bytes, b"  ");
}

#[test]
fn scan_stops_at_nul() {
    let (_, bytes) = indent_of(b"  a\0b").unwrap();
    assert_eq!(bytes, b"  ");
}

#[test]
fn bounded_scan_ignores_bytes_past_the_bound() {
    let text = b"  a\nb";
    assert_eq!(common_indent(text), None);

    let ci = common_indent_bounded(text, 4).unwrap();
    assert_eq!(ci.as_bytes(), b"  ");

    assert_eq!(common_indent_bounded(text, 0), None);
    assert_eq!(common_indent_bounded(text, 1000), None);
}

#[test]
fn bound_can_cut_inside_the_indent() {
    let ci = common_indent_bounded(b"    a", 3);
    // "   " is a whitespace tail, so nothing constrains the indent
    assert_eq!(ci, None);
}
