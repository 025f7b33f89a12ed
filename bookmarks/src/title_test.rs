use super::*;

#[test]
fn plain_title_is_all_primary() {
    let seg = segment_title("Rust Programming Language");
    assert_eq!(seg.primary, "Rust Programming Language");
    assert!(seg.details.is_empty());
}

#[test]
fn every_delimiter_starts_a_detail() {
    let seg = segment_title("Docs: std - Rust | docs.rs");
    assert_eq!(seg.primary, "Docs");
    assert_eq!(seg.details, vec![" std ", " Rust ", " docs.rs"]);
}

#[test]
fn adjacent_delimiters_keep_empty_piece() {
    let seg = segment_title("a:-b");
    assert_eq!(seg.primary, "a");
    assert_eq!(seg.details, vec!["", "b"]);
}

#[test]
fn empty_title_has_empty_primary() {
    assert_eq!(segment_title(""), TitleSegments::default());
}

#[test]
fn folder_label_replaces_only_first_underscore() {
    assert_eq!(folder_label("my_work_stuff"), "my work_stuff");
    assert_eq!(folder_label("plain"), "plain");
}
