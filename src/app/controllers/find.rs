//! Find & Replace session state.
//!
//! Tracks which match is current so repeated "Find Next" / "Find Previous"
//! walk the match list, wrapping at the ends when enabled. The session holds
//! no reference to the editing surface: every call receives the current text
//! and replacements hand back the new text for the caller to apply.

use crate::app::domain::EditorSettings;
use crate::app::services::text_ops::{self, ReplacementSummary, SearchMatches};

#[derive(Debug, Clone)]
pub struct FindSession {
    query: String,
    case_sensitive: bool,
    wrap: bool,
    matches: Option<SearchMatches>,
    current: Option<usize>,
    active_span: Option<(usize, usize)>,
    last_text: String,
    status: String,
}

impl FindSession {
    pub fn new(case_sensitive: bool, wrap: bool) -> Self {
        Self {
            query: String::new(),
            case_sensitive,
            wrap,
            matches: None,
            current: None,
            active_span: None,
            last_text: String::new(),
            status: "Enter search text.".to_string(),
        }
    }

    pub fn from_settings(settings: &EditorSettings) -> Self {
        Self::new(settings.case_sensitive_search, settings.wrap_search)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Last user-facing status line, e.g. "Match 2 of 5."
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Character span of the highlighted match, if any
    pub fn active_span(&self) -> Option<(usize, usize)> {
        self.active_span
    }

    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.reset();
        }
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        if self.case_sensitive != case_sensitive {
            self.case_sensitive = case_sensitive;
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.matches = None;
        self.current = None;
        self.active_span = None;
        self.last_text.clear();
        self.status = if self.query.is_empty() {
            "Enter search text.".to_string()
        } else {
            "Ready to search.".to_string()
        };
    }

    /// Recompute matches for `text`; false when there is nothing to visit
    fn prepare(&mut self, text: &str) -> bool {
        if self.query.is_empty() {
            self.reset();
            return false;
        }

        let matches = text_ops::find_matches(text, &self.query, self.case_sensitive);
        if matches.is_empty() {
            self.matches = Some(matches);
            self.current = None;
            self.active_span = None;
            self.status = "No matches found.".to_string();
            return false;
        }

        if text != self.last_text {
            self.current = None;
            self.active_span = None;
            self.last_text = text.to_string();
        }
        self.matches = Some(matches);
        true
    }

    fn goto_match(&mut self, index: usize) -> Option<(usize, usize)> {
        let matches = self.matches.as_ref()?;
        let total = matches.len();
        let span = *matches.spans().get(index)?;

        self.current = Some(index);
        self.active_span = Some(span);
        self.status = format!("Match {} of {}.", index + 1, total);
        Some(span)
    }

    fn at_end(&mut self) -> Option<(usize, usize)> {
        self.active_span = None;
        self.status = "No more matches.".to_string();
        None
    }

    /// Highlight the next match, wrapping to the start when enabled
    pub fn find_next(&mut self, text: &str) -> Option<(usize, usize)> {
        if !self.prepare(text) {
            return None;
        }
        let total = self.matches.as_ref().map_or(0, SearchMatches::len);

        let next = match self.current {
            None => 0,
            Some(i) if i + 1 < total => i + 1,
            Some(_) if self.wrap => 0,
            Some(_) => return self.at_end(),
        };
        self.goto_match(next)
    }

    /// Highlight the previous match, wrapping to the end when enabled
    pub fn find_previous(&mut self, text: &str) -> Option<(usize, usize)> {
        if !self.prepare(text) {
            return None;
        }
        let total = self.matches.as_ref().map_or(0, SearchMatches::len);

        let previous = match self.current {
            None => total - 1,
            Some(i) if i > 0 => i - 1,
            Some(_) if self.wrap => total - 1,
            Some(_) => return self.at_end(),
        };
        self.goto_match(previous)
    }

    /// Replace the highlighted match (highlighting one first if needed).
    ///
    /// Returns the edited text, or `None` when nothing was replaced. The
    /// next "Find Next" continues after the inserted replacement.
    pub fn replace_current(&mut self, text: &str, replacement: &str) -> Option<String> {
        if !self.prepare(text) {
            return None;
        }
        if self.active_span.is_none() {
            self.find_next(text)?;
        }
        let (start, end) = self.active_span?;

        let chars: Vec<char> = text.chars().collect();
        let mut edited: String = chars[..start].iter().collect();
        edited.push_str(replacement);
        edited.extend(&chars[end..]);

        let anchor = start + replacement.chars().count();
        self.reanchor(&edited, anchor);
        Some(edited)
    }

    /// Point the cursor just before the first match at or after `anchor`
    fn reanchor(&mut self, text: &str, anchor: usize) {
        let matches = text_ops::find_matches(text, &self.query, self.case_sensitive);
        self.last_text = text.to_string();
        self.active_span = None;

        if matches.is_empty() {
            self.matches = None;
            self.current = None;
            self.status = "Replaced 1 occurrence. No matches remain.".to_string();
            return;
        }

        let total = matches.len();
        let next = matches.positions.iter().position(|&p| p >= anchor).unwrap_or(0);
        self.current = Some((next + total - 1) % total);
        self.matches = Some(matches);
        self.status = "Replaced 1 occurrence.".to_string();
    }

    /// Replace the current match and immediately highlight the following one
    pub fn replace_and_find(&mut self, text: &str, replacement: &str) -> Option<String> {
        let edited = self.replace_current(text, replacement)?;
        if self.matches.is_some() {
            self.find_next(&edited);
        }
        Some(edited)
    }

    /// Replace every match at once
    pub fn replace_all(&mut self, text: &str, replacement: &str) -> ReplacementSummary {
        if self.query.is_empty() {
            self.status = "Enter search text before replacing.".to_string();
            return text_ops::replace(text, "", replacement, self.case_sensitive, true);
        }

        let summary = text_ops::replace(text, &self.query, replacement, self.case_sensitive, true);
        if summary.replacements == 0 {
            self.status = "No matches were replaced.".to_string();
            return summary;
        }

        self.matches = None;
        self.current = None;
        self.active_span = None;
        self.last_text = summary.text.clone();
        self.status = format!("Replaced {} occurrence(s).", summary.replacements);
        summary
    }
}
