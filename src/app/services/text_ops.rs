use std::path::Path;

use crate::app::domain::{FormattingState, ListType};

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Character, word and line counts for the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditingSummary {
    pub characters: usize,
    pub words: usize,
    pub lines: usize,
}

pub fn summarize(text: &str) -> EditingSummary {
    let characters = text.chars().count();
    let words = text.split_whitespace().count();
    let lines = if text.is_empty() {
        0
    } else {
        text.matches('\n').count() + 1
    };

    EditingSummary {
        characters,
        words,
        lines,
    }
}

/// All match offsets for a query, in characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatches {
    pub query: String,
    pub positions: Vec<usize>,
}

impl SearchMatches {
    fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            positions: Vec::new(),
        }
    }

    /// Half-open `(start, end)` spans suitable for highlighting
    pub fn spans(&self) -> Vec<(usize, usize)> {
        let len = self.query.chars().count();
        self.positions.iter().map(|&start| (start, start + len)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }
}

/// Simple lowercase mapping that never changes the character count.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    if lower.len() == 1 { lower.next().unwrap_or(c) } else { c }
}

fn to_chars(text: &str, case_sensitive: bool) -> Vec<char> {
    if case_sensitive {
        text.chars().collect()
    } else {
        text.chars().map(fold_case).collect()
    }
}

/// Non-overlapping scan: after a match, searching resumes past its end.
fn scan(haystack: &[char], needle: &[char]) -> Vec<usize> {
    let mut positions = Vec::new();
    if needle.is_empty() {
        return positions;
    }

    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == *needle {
            positions.push(i);
            i += needle.len();
        } else {
            i += 1;
        }
    }
    positions
}

/// Find every non-overlapping occurrence of `query` in `text`
///
/// Positions are character offsets. An empty query never matches.
pub fn find_matches(text: &str, query: &str, case_sensitive: bool) -> SearchMatches {
    if query.is_empty() {
        return SearchMatches::empty(query);
    }

    let haystack = to_chars(text, case_sensitive);
    let needle = to_chars(query, case_sensitive);

    SearchMatches {
        query: query.to_string(),
        positions: scan(&haystack, &needle),
    }
}

/// Offset of the first match at or after `start`
///
/// With `wrap`, falls back to the first match in the document.
pub fn next_occurrence(text: &str, query: &str, start: usize, case_sensitive: bool, wrap: bool) -> Option<usize> {
    let matches = find_matches(text, query, case_sensitive);
    matches
        .positions
        .iter()
        .copied()
        .find(|&pos| pos >= start)
        .or_else(|| if wrap { matches.positions.first().copied() } else { None })
}

/// Outcome of a find & replace pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementSummary {
    pub text: String,
    pub replacements: usize,
    pub positions: Vec<usize>,
}

/// Replace occurrences of `query` with `replacement`
///
/// Positions refer to the original text. With `replace_all` off only the
/// first match is replaced.
pub fn replace(text: &str, query: &str, replacement: &str, case_sensitive: bool, replace_all: bool) -> ReplacementSummary {
    let mut positions = find_matches(text, query, case_sensitive).positions;
    if positions.is_empty() {
        return ReplacementSummary {
            text: text.to_string(),
            replacements: 0,
            positions,
        };
    }
    if !replace_all {
        positions.truncate(1);
    }

    let chars: Vec<char> = text.chars().collect();
    let query_len = query.chars().count();
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for &pos in &positions {
        result.extend(&chars[last..pos]);
        result.push_str(replacement);
        last = pos + query_len;
    }
    result.extend(&chars[last..]);

    ReplacementSummary {
        text: result,
        replacements: positions.len(),
        positions,
    }
}

/// Prefix each line with the list marker implied by `state`
///
/// Lines are left-trimmed and indented by four spaces per indent level.
/// `ListType::None` leaves the text untouched.
pub fn apply_list_formatting(text: &str, state: &FormattingState) -> String {
    if state.list_type == ListType::None {
        return text.to_string();
    }

    let indent = " ".repeat(state.indent as usize * 4);
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            let marker = match state.list_type {
                ListType::Numbered => format!("{}. ", i + 1),
                _ => "\u{2022} ".to_string(),
            };
            format!("{}{}{}", indent, marker, line.trim_start())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FISH: &str = "One fish two Fish red fish blue fish";

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename(Path::new("/home/user/test.rtf")), "test.rtf");
        assert_eq!(extract_filename(Path::new("test.txt")), "test.txt");
        assert_eq!(extract_filename(Path::new("")), "Unknown");
        assert_eq!(extract_filename(Path::new("/")), "Unknown");
    }

    #[test]
    fn test_summary_counts() {
        let summary = summarize("Hello world\nNext line");
        assert_eq!(summary.characters, 21);
        assert_eq!(summary.words, 4);
        assert_eq!(summary.lines, 2);
    }

    #[test]
    fn test_summary_empty_and_blank() {
        assert_eq!(summarize(""), EditingSummary { characters: 0, words: 0, lines: 0 });
        let blank = summarize("  \n\t ");
        assert_eq!(blank.words, 0);
        assert_eq!(blank.lines, 2);
        assert_eq!(blank.characters, 5);
    }

    #[test]
    fn test_summary_counts_code_points() {
        let summary = summarize("世界 café\n");
        assert_eq!(summary.characters, 8);
        assert_eq!(summary.words, 2);
        assert_eq!(summary.lines, 2);
    }

    #[test]
    fn test_lines_follow_newline_count() {
        for text in ["a", "\n", "a\nb\n", "\n\n\n"] {
            assert_eq!(summarize(text).lines, 1 + text.matches('\n').count());
        }
    }

    #[test]
    fn test_find_case_insensitive() {
        assert_eq!(find_matches(FISH, "fish", false).positions, vec![4, 13, 22, 32]);
    }

    #[test]
    fn test_find_case_sensitive() {
        assert_eq!(find_matches(FISH, "fish", true).positions, vec![4, 22, 32]);
        assert_eq!(find_matches(FISH, "Fish", true).positions, vec![13]);
    }

    #[test]
    fn test_find_empty_query() {
        let matches = find_matches(FISH, "", false);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_find_non_overlapping() {
        assert_eq!(find_matches("aaa", "aa", true).positions, vec![0]);
        assert_eq!(find_matches("aaaa", "aa", true).positions, vec![0, 2]);
    }

    #[test]
    fn test_find_unicode_offsets_are_characters() {
        let matches = find_matches("Hello 世界 world 世界", "世界", false);
        assert_eq!(matches.positions, vec![6, 15]);
        assert_eq!(matches.spans(), vec![(6, 8), (15, 17)]);
    }

    #[test]
    fn test_find_case_insensitive_non_ascii() {
        assert_eq!(find_matches("ÉCOLE école", "école", false).positions, vec![0, 6]);
    }

    #[test]
    fn test_next_occurrence() {
        assert_eq!(next_occurrence(FISH, "fish", 5, false, false), Some(13));
        assert_eq!(next_occurrence(FISH, "fish", 13, false, false), Some(13));
        assert_eq!(next_occurrence(FISH, "fish", 33, false, false), None);
        assert_eq!(next_occurrence(FISH, "fish", 33, false, true), Some(4));
        assert_eq!(next_occurrence(FISH, "whale", 0, false, true), None);
    }

    #[test]
    fn test_replace_first_only() {
        let summary = replace(FISH, "fish", "cat", false, false);
        assert_eq!(summary.replacements, 1);
        assert!(summary.text.starts_with("One cat"));
        assert_eq!(summary.text, "One cat two Fish red fish blue fish");
        assert_eq!(summary.positions, vec![4]);
    }

    #[test]
    fn test_replace_all_case_insensitive() {
        let summary = replace(FISH, "fish", "cat", false, true);
        assert_eq!(summary.text, "One cat two cat red cat blue cat");
        assert_eq!(summary.replacements, 4);
        assert_eq!(summary.positions, vec![4, 13, 22, 32]);
    }

    #[test]
    fn test_replace_all_case_sensitive() {
        let summary = replace("Cat cat CAT", "cat", "dog", true, true);
        assert_eq!(summary.text, "Cat dog CAT");
        assert_eq!(summary.replacements, 1);
    }

    #[test]
    fn test_replace_empty_query_is_noop() {
        let summary = replace("hello world", "", "X", false, true);
        assert_eq!(summary.text, "hello world");
        assert_eq!(summary.replacements, 0);
        assert!(summary.positions.is_empty());
    }

    #[test]
    fn test_replace_with_text_containing_query() {
        let summary = replace("a a", "a", "aa", true, true);
        assert_eq!(summary.text, "aa aa");
        assert_eq!(summary.replacements, 2);
    }

    #[test]
    fn test_replace_unicode() {
        let summary = replace("Hello 世界, 世界", "世界", "World", false, true);
        assert_eq!(summary.text, "Hello World, World");
        assert_eq!(summary.replacements, 2);
    }

    #[test]
    fn test_list_formatting_bullets() {
        let state = FormattingState {
            list_type: ListType::Bullet,
            indent: 1,
            ..Default::default()
        };
        assert_eq!(apply_list_formatting("alpha\n  beta", &state), "    \u{2022} alpha\n    \u{2022} beta");
    }

    #[test]
    fn test_list_formatting_numbered() {
        let state = FormattingState {
            list_type: ListType::Numbered,
            ..Default::default()
        };
        assert_eq!(apply_list_formatting("one\ntwo\nthree", &state), "1. one\n2. two\n3. three");
    }

    #[test]
    fn test_list_formatting_none_is_identity() {
        let state = FormattingState::default();
        assert_eq!(apply_list_formatting(" keep \n as is", &state), " keep \n as is");
    }
}
