//! Scenario tests cutting across modules, plus table-driven cases for the
//! clamping slice and trim semantics.

use core::cmp::Ordering;

use rstest::rstest;

use crate::{BinStr, TemplateArg, join, split_args, split_on};

#[test]
fn config_line_end_to_end() {
    // Parse a config line, rewrite one value, and re-encode it safely.
    let args = split_args(b"requirepass \"s3cret \\\"quoted\\\"\"\r\n").unwrap();
    assert_eq!(args.len(), 2);
    assert_eq!(args[0], "requirepass");
    assert_eq!(args[1], "s3cret \"quoted\"");

    let mut line = args[0].clone();
    line.push_byte(b' ');
    line.push_binstr(&args[1].quoted());
    let reparsed = split_args(&line).unwrap();
    assert_eq!(reparsed, args);
}

#[test]
fn length_resync_after_external_terminator_write() {
    let mut s = BinStr::from("foobar");
    assert_eq!(s.len(), 6);
    s.as_bytes_mut()[2] = 0;
    // Length is authoritative until the owner asks for a resync.
    assert_eq!(s.len(), 6);
    s.update_len();
    assert_eq!(s.len(), 2);
    assert_eq!(s, "fo");
}

#[test]
fn spare_never_shrinks_without_reallocation() {
    let mut s = BinStr::from("seed");
    s.reserve(64);
    let mut total = s.len() + s.spare();
    for chunk in [&b"aa"[..], b"bbb", b"c"] {
        s.push_bytes(chunk);
        assert!(s.len() + s.spare() >= total);
        total = s.len() + s.spare();
    }
}

#[test]
fn compare_is_memcmp_with_length_tiebreak() {
    let ab = BinStr::from("ab");
    let abc = BinStr::from("abc");
    assert_eq!(ab.cmp(&abc), Ordering::Less);
    assert_eq!(ab.cmp(&BinStr::from("ab")), Ordering::Equal);
    assert_eq!(BinStr::from("b").cmp(&BinStr::from("a")), Ordering::Greater);
    // Embedded zero bytes are ordinary bytes.
    assert!(BinStr::from_bytes(b"a\x00") > BinStr::from_bytes(b"a"));
    assert!(BinStr::from_bytes(b"a\x00") < BinStr::from_bytes(b"a\x01"));
}

#[test]
fn join_then_split_inverts() {
    let joined = join(["123", "456", "789"], b"$$");
    assert_eq!(joined, "123$$456$$789");
    let back = split_on(&joined, b"$$");
    assert_eq!(back, [b"123" as &[u8], b"456", b"789"]);
}

#[test]
fn template_and_fmt_build_the_same_line() {
    let mut a = BinStr::new();
    a.push_template(
        "%s %i %u%%",
        &[
            TemplateArg::Bytes(b"load"),
            TemplateArg::Int(-12),
            TemplateArg::Uint(98),
        ],
    );

    let mut b = BinStr::new();
    crate::cat_fmt!(b, "{} {} {}%", "load", -12, 98u64);

    assert_eq!(a, b);
    assert_eq!(a, "load -12 98%");
}

#[rstest]
#[case("Hello World", 0, 4, "Hello")]
#[case("Hello World", -5, -1, "World")]
#[case("Hello World", 1, -1, "ello World")]
#[case("Hello World", 0, -1, "Hello World")]
#[case("Hello World", 5, 3, "")]
#[case("Hello World", 20, 30, "")]
#[case("Hello World", -100, 100, "Hello World")]
#[case("", 0, 5, "")]
fn range_cases(
    #[case] input: &str,
    #[case] start: isize,
    #[case] end: isize,
    #[case] expected: &str,
) {
    let mut s = BinStr::from(input);
    s.range(start, end);
    assert_eq!(s, expected);
}

#[rstest]
#[case(" **hello**", "* ", "hello")]
#[case("xxabcxx", "x", "abc")]
#[case("aaaa", "a", "")]
#[case("hello", "xyz", "hello")]
#[case("", "x", "")]
fn trim_cases(#[case] input: &str, #[case] charset: &str, #[case] expected: &str) {
    let mut s = BinStr::from(input);
    s.trim(charset.as_bytes());
    assert_eq!(s, expected);
}
