//! Persistence and formatting core of the WordImperfect word processor.
//!
//! Documents are plain text plus per-paragraph style metadata. Text is stored
//! as `.txt`, `.rtf` or `.docx`; paragraph styles go to a JSON sidecar next to
//! the document. Search and replace operate on character offsets.

pub mod app;
pub mod cli;

pub use app::*;
