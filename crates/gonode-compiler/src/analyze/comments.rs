//! Doc comment groups and the export marker.
//!
//! A declaration's comment group is the run of comments on consecutive lines
//! whose last comment sits on the line directly above the declaration.
//! The group qualifies for export if any of its comments is an export marker
//! (`//export Name`).

use arborium_tree_sitter::Node;

const EXPORT_MARKER: &str = "//export ";

/// Comments forming the doc group of `decl`, in source order.
pub(super) fn doc_group(decl: Node<'_>) -> Vec<Node<'_>> {
    let mut group = Vec::new();
    let mut next_row = decl.start_position().row;
    let mut current = decl.prev_named_sibling();

    while let Some(node) = current {
        if node.kind() != "comment" || node.end_position().row + 1 != next_row {
            break;
        }
        // A comment trailing another declaration on the same line.
        if let Some(before) = node.prev_named_sibling()
            && before.end_position().row == node.start_position().row
        {
            break;
        }
        group.push(node);
        next_row = node.start_position().row;
        current = node.prev_named_sibling();
    }

    group.reverse();
    group
}

pub(super) fn is_export_marker(comment: &str) -> bool {
    comment.trim().starts_with(EXPORT_MARKER)
}

/// Documentation of a comment group, or `None` if the group has no export marker.
///
/// Marker comments are dropped, the rest are stripped of comment syntax and
/// surrounding whitespace, blank lines are skipped, and the remaining lines
/// are joined with `\n`.
pub(super) fn documentation(comments: &[&str]) -> Option<String> {
    if !comments.iter().any(|c| is_export_marker(c)) {
        return None;
    }

    let lines: Vec<String> = comments
        .iter()
        .filter(|c| !is_export_marker(c))
        .flat_map(|c| comment_lines(c))
        .filter(|line| !line.is_empty())
        .collect();

    Some(lines.join("\n"))
}

/// Text lines of a single comment with comment syntax removed.
pub(super) fn comment_lines(comment: &str) -> Vec<String> {
    let comment = comment.trim();

    if let Some(line) = comment.strip_prefix("//") {
        return vec![line.trim().to_string()];
    }

    let body = comment.strip_prefix("/*").unwrap_or(comment);
    let body = body.strip_suffix("*/").unwrap_or(body);
    body.lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*').unwrap_or(line).trim().to_string()
        })
        .collect()
}
