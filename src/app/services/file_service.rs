//! Format dispatch for document files plus the paragraph-style sidecar.
//!
//! The primary file only carries text. Paragraph styles live next to it in
//! `<document>.styles.json`, keyed by stringified paragraph index.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{docx, rtf};
use crate::app::domain::ParagraphStyleSnapshot;
use crate::app::infrastructure::error::{AppError, Result};

pub const SIDECAR_SUFFIX: &str = ".styles.json";

/// Raw sidecar entries, one JSON object per paragraph index
pub type RawParagraphStyles = BTreeMap<usize, Map<String, Value>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    RichText,
    PlainText,
    Word,
}

impl DocumentFormat {
    /// Resolve the format from the lowercased extension of `path`
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        match extension.to_lowercase().as_str() {
            "txt" => Ok(Self::PlainText),
            "rtf" => Ok(Self::RichText),
            "docx" => Ok(Self::Word),
            "" => Err(AppError::UnsupportedFormat(String::new())),
            _ => Err(AppError::UnsupportedFormat(format!(".{}", extension))),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::RichText => "Rich Text Format",
            Self::PlainText => "Plain Text",
            Self::Word => "Word Document",
        }
    }

    /// Glob pattern for file dialogs
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::RichText => "*.rtf",
            Self::PlainText => "*.txt",
            Self::Word => "*.docx",
        }
    }

    pub fn all() -> &'static [DocumentFormat] {
        &[Self::RichText, Self::PlainText, Self::Word]
    }
}

/// Location of the style sidecar for `path`: the suffix is appended, not substituted
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(SIDECAR_SUFFIX);
    PathBuf::from(name)
}

#[derive(Debug, Serialize)]
struct StyleRecord<'a> {
    alignment: &'a str,
    indent: u32,
    list_type: &'a str,
}

/// Pretty JSON for the sidecar, keys sorted as strings, trailing newline
fn sidecar_json(styles: &HashMap<usize, ParagraphStyleSnapshot>) -> Result<String> {
    let records: BTreeMap<String, StyleRecord<'_>> = styles
        .iter()
        .map(|(index, style)| {
            (
                index.to_string(),
                StyleRecord {
                    alignment: style.alignment.as_str(),
                    indent: style.indent,
                    list_type: style.list_type.as_str(),
                },
            )
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&records)?;
    json.push('\n');
    Ok(json)
}

/// Parse sidecar contents, skipping entries that are not `"<index>": {..}`
fn parse_sidecar(contents: &str) -> RawParagraphStyles {
    let mut styles = RawParagraphStyles::new();

    let root = match serde_json::from_str::<Value>(contents) {
        Ok(Value::Object(root)) => root,
        Ok(_) => {
            tracing::warn!("Ignoring style sidecar: top level is not an object");
            return styles;
        }
        Err(e) => {
            tracing::warn!("Ignoring unreadable style sidecar: {}", e);
            return styles;
        }
    };

    for (key, value) in root {
        let Ok(index) = key.trim().parse::<usize>() else {
            tracing::debug!("Skipping style entry with non-index key {:?}", key);
            continue;
        };
        match value {
            Value::Object(payload) => {
                styles.insert(index, payload);
            }
            _ => tracing::debug!("Skipping non-object style entry for paragraph {}", index),
        }
    }

    styles
}

/// Reads and writes documents in the supported formats
#[derive(Debug, Clone, Copy, Default)]
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        Self
    }

    /// Return the textual contents of `path`, decoded by extension
    pub fn read(&self, path: &Path) -> Result<String> {
        let format = DocumentFormat::from_path(path)?;
        tracing::debug!("Reading {} as {:?}", path.display(), format);

        match format {
            DocumentFormat::PlainText => Ok(fs::read_to_string(path)?),
            DocumentFormat::RichText => Ok(rtf::decode(&fs::read_to_string(path)?)),
            DocumentFormat::Word => docx::read(path),
        }
    }

    /// Persist `text` to `path` using the format implied by the extension
    pub fn write(&self, path: &Path, text: &str) -> Result<()> {
        let format = DocumentFormat::from_path(path)?;
        tracing::debug!("Writing {} as {:?}", path.display(), format);

        match format {
            DocumentFormat::PlainText => Ok(fs::write(path, text)?),
            DocumentFormat::RichText => Ok(fs::write(path, rtf::encode(text))?),
            DocumentFormat::Word => docx::write(path, text),
        }
    }

    /// Read the document and, when present, its style sidecar
    pub fn read_with_styles(&self, path: &Path) -> Result<(String, RawParagraphStyles)> {
        let text = self.read(path)?;

        let sidecar = sidecar_path(path);
        let styles = match fs::read_to_string(&sidecar) {
            Ok(contents) => parse_sidecar(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => RawParagraphStyles::new(),
            Err(e) => {
                tracing::warn!("Could not read style sidecar {}: {}", sidecar.display(), e);
                RawParagraphStyles::new()
            }
        };

        Ok((text, styles))
    }

    /// Write the document, then write or remove its style sidecar.
    ///
    /// An empty style map deletes any existing sidecar so cleared formatting
    /// does not come back on the next open.
    pub fn write_with_styles(
        &self,
        path: &Path,
        text: &str,
        styles: &HashMap<usize, ParagraphStyleSnapshot>,
    ) -> Result<()> {
        self.write(path, text)?;

        let sidecar = sidecar_path(path);
        if styles.is_empty() {
            match fs::remove_file(&sidecar) {
                Ok(()) => tracing::debug!("Removed style sidecar {}", sidecar.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
            return Ok(());
        }

        fs::write(&sidecar, sidecar_json(styles)?)?;
        tracing::debug!("Wrote {} paragraph styles to {}", styles.len(), sidecar.display());
        Ok(())
    }
}
