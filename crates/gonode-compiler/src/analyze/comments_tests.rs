use super::comments::{comment_lines, documentation, is_export_marker};

#[test]
fn export_marker_detection() {
    assert!(is_export_marker("//export Sum"));
    assert!(is_export_marker("  //export Sum  "));
    assert!(is_export_marker("//export anything at all"));

    assert!(!is_export_marker("// export Sum"));
    assert!(!is_export_marker("//export"));
    assert!(!is_export_marker("//exported Sum"));
    assert!(!is_export_marker("/*export Sum*/"));
    assert!(!is_export_marker("// Sum sums"));
}

#[test]
fn line_comment_syntax_stripped() {
    assert_eq!(comment_lines("// Sums up two numbers"), vec!["Sums up two numbers"]);
    assert_eq!(comment_lines("//tight"), vec!["tight"]);
    assert_eq!(comment_lines("//"), vec![""]);
}

#[test]
fn block_comment_syntax_stripped() {
    assert_eq!(comment_lines("/* one line */"), vec!["one line"]);
    assert_eq!(
        comment_lines("/*\n * first\n * second\n */"),
        vec!["", "first", "second", ""]
    );
}

#[test]
fn no_marker_means_not_exported() {
    assert_eq!(documentation(&["// Sums up two numbers"]), None);
    assert_eq!(documentation(&[]), None);
}

#[test]
fn marker_and_blank_lines_dropped() {
    let doc = documentation(&["// Sums up two numbers", "//", "//export Sum"]);
    assert_eq!(doc.as_deref(), Some("Sums up two numbers"));
}

#[test]
fn marker_only_gives_empty_doc() {
    assert_eq!(documentation(&["//export Sum"]).as_deref(), Some(""));
}

#[test]
fn multi_line_doc_joined_without_trailing_newline() {
    let doc = documentation(&[
        "// Divide x by y.",
        "//",
        "// Returns +Inf when y is zero.",
        "//export Divide",
    ]);
    assert_eq!(
        doc.as_deref(),
        Some("Divide x by y.\nReturns +Inf when y is zero.")
    );
}

#[test]
fn marker_position_does_not_matter() {
    let doc = documentation(&["//export Sum", "// Sums up two numbers"]);
    assert_eq!(doc.as_deref(), Some("Sums up two numbers"));
}
