//! Document lifecycle: new, open, save and paragraph-style bookkeeping.
//!
//! The controller never exposes its metadata by reference. Accessors return
//! copies, so callers cannot mutate tracked state behind its back.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::app::domain::{Alignment, DocumentMetadata, ListType, ParagraphStyleSnapshot};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::file_service::{DocumentFormat, FileService};
use crate::app::services::text_ops::extract_filename;

pub struct DocumentController {
    file_service: FileService,
    metadata: DocumentMetadata,
}

impl DocumentController {
    pub fn new(file_service: FileService) -> Self {
        Self {
            file_service,
            metadata: DocumentMetadata::default(),
        }
    }

    /// Copy of the current document metadata
    pub fn metadata(&self) -> DocumentMetadata {
        self.metadata.clone()
    }

    pub fn is_modified(&self) -> bool {
        self.metadata.is_modified
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.metadata.path.clone()
    }

    pub fn mark_modified(&mut self) {
        self.metadata.is_modified = true;
    }

    pub fn mark_clean(&mut self) {
        self.metadata.is_modified = false;
    }

    /// Start tracking a brand-new, untitled and clean document
    pub fn new_document(&mut self) {
        self.metadata = DocumentMetadata::default();
    }

    /// Load `path` and return its text.
    ///
    /// Sidecar values that cannot be interpreted fall back to the default
    /// alignment, indent or list type; they never fail the open.
    pub fn open_document(&mut self, path: &Path) -> Result<String> {
        let (text, raw_styles) = self.file_service.read_with_styles(path)?;

        let paragraph_styles = raw_styles
            .iter()
            .map(|(&index, payload)| (index, coerce_style(payload)))
            .collect();

        self.metadata = DocumentMetadata::opened(path.to_path_buf(), paragraph_styles);
        tracing::info!(
            "Opened {} ({} paragraph styles)",
            path.display(),
            self.metadata.paragraph_styles.len()
        );
        Ok(text)
    }

    /// Persist `text` to `path`, or to the tracked path when `path` is `None`.
    ///
    /// Returns the destination actually written.
    pub fn save_document(&mut self, text: &str, path: Option<&Path>) -> Result<PathBuf> {
        let destination = match path {
            Some(p) => p.to_path_buf(),
            None => self.metadata.path.clone().ok_or(AppError::MissingDestination)?,
        };

        let styles = self.export_paragraph_styles();
        self.file_service.write_with_styles(&destination, text, &styles)?;

        self.metadata.path = Some(destination.clone());
        self.mark_clean();
        tracing::info!("Saved {}", destination.display());
        Ok(destination)
    }

    /// Remember the style of paragraph `index`; negative indices are rejected
    pub fn record_paragraph_style(&mut self, index: i64, style: ParagraphStyleSnapshot) -> Result<()> {
        let index = usize::try_from(index).map_err(|_| AppError::InvalidParagraphIndex(index))?;
        self.metadata.paragraph_styles.insert(index, style);
        Ok(())
    }

    pub fn paragraph_style(&self, index: usize) -> Option<ParagraphStyleSnapshot> {
        self.metadata.paragraph_styles.get(&index).copied()
    }

    pub fn export_paragraph_styles(&self) -> HashMap<usize, ParagraphStyleSnapshot> {
        self.metadata.paragraph_styles.clone()
    }

    pub fn clear_paragraph_styles(&mut self) {
        self.metadata.paragraph_styles.clear();
    }

    /// Human friendly document name for window titles
    pub fn document_title(&self) -> String {
        match &self.metadata.path {
            Some(path) => extract_filename(path),
            None => "Untitled".to_string(),
        }
    }

    /// `(description, pattern)` pairs for file dialogs
    pub fn supported_filetypes(&self) -> Vec<(&'static str, &'static str)> {
        DocumentFormat::all()
            .iter()
            .map(|f| (f.description(), f.pattern()))
            .collect()
    }
}

fn coerce_style(payload: &Map<String, Value>) -> ParagraphStyleSnapshot {
    ParagraphStyleSnapshot {
        alignment: payload
            .get("alignment")
            .and_then(Value::as_str)
            .and_then(Alignment::from_name)
            .unwrap_or_default(),
        indent: payload.get("indent").map(coerce_indent).unwrap_or(0),
        list_type: payload
            .get("list_type")
            .and_then(Value::as_str)
            .and_then(ListType::from_name)
            .unwrap_or_default(),
    }
}

/// Integers and integer strings are accepted; negatives clamp to zero, huge values to `u32::MAX`
fn coerce_indent(value: &Value) -> u32 {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed
        .map(|n| u32::try_from(n.max(0)).unwrap_or(u32::MAX))
        .unwrap_or(0)
}
