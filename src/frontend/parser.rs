//! Line-oriented input parsing (spec.md §6.3).
//!
//! Each non-empty, non-comment line is `head token separator successor
//! successor ...`: the head is terminated by a colon or whitespace, and
//! successors are whitespace-separated labels. Lines starting with `#` are
//! comments; empty lines are skipped. A line with no head token (e.g. one
//! that is only whitespace) is treated as empty.

/// One parsed input line: a head label and its successor labels, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub head: &'a str,
    pub successors: Vec<&'a str>,
}

/// Parses a single line, returning `None` for comments, blank lines, and
/// lines with no extractable head token.
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut rest = line.trim_start_matches([' ', '\t']);
    let head_end = rest.find([':', ' ', '\t']).unwrap_or(rest.len());
    let head = &rest[..head_end];
    if head.is_empty() {
        return None;
    }
    rest = &rest[head_end..];
    // skip a single leading colon, if present, before the successor list
    if let Some(stripped) = rest.strip_prefix(':') {
        rest = stripped;
    }

    let successors = rest.split([' ', '\t']).filter(|s| !s.is_empty()).collect();

    Some(ParsedLine { head, successors })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_line_is_skipped() {
        assert_eq!(parse_line("# a comment"), None);
    }

    #[test]
    fn empty_line_is_skipped() {
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn whitespace_only_line_is_skipped() {
        assert_eq!(parse_line("   \t  "), None);
    }

    #[test]
    fn head_with_no_successors() {
        assert_eq!(
            parse_line("a:"),
            Some(ParsedLine {
                head: "a",
                successors: vec![],
            })
        );
    }

    #[test]
    fn head_with_colon_separator() {
        assert_eq!(
            parse_line("a: b c"),
            Some(ParsedLine {
                head: "a",
                successors: vec!["b", "c"],
            })
        );
    }

    #[test]
    fn head_with_whitespace_separator() {
        assert_eq!(
            parse_line("a b c"),
            Some(ParsedLine {
                head: "a",
                successors: vec!["b", "c"],
            })
        );
    }

    #[test]
    fn repeated_whitespace_between_successors() {
        assert_eq!(
            parse_line("a   b    c"),
            Some(ParsedLine {
                head: "a",
                successors: vec!["b", "c"],
            })
        );
    }

    #[test]
    fn leading_whitespace_before_head_is_skipped() {
        assert_eq!(
            parse_line("  a: b c"),
            Some(ParsedLine {
                head: "a",
                successors: vec!["b", "c"],
            })
        );
    }

    #[test]
    fn trailing_newline_is_trimmed() {
        assert_eq!(
            parse_line("a: b\n"),
            Some(ParsedLine {
                head: "a",
                successors: vec!["b"],
            })
        );
    }
}
