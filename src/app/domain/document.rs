use std::collections::HashMap;
use std::path::PathBuf;

use super::formatting::ParagraphStyleSnapshot;

/// In-memory state of the document currently being edited.
///
/// `Clone` is a deep copy; the controller hands out clones, never references.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentMetadata {
    pub path: Option<PathBuf>,
    pub is_modified: bool,
    pub paragraph_styles: HashMap<usize, ParagraphStyleSnapshot>,
}

impl DocumentMetadata {
    /// Metadata for a document freshly loaded from `path`
    pub fn opened(path: PathBuf, paragraph_styles: HashMap<usize, ParagraphStyleSnapshot>) -> Self {
        Self {
            path: Some(path),
            is_modified: false,
            paragraph_styles,
        }
    }
}
