//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Paragraph and inline formatting values
//! - Document metadata
//! - Editor settings

pub mod document;
pub mod formatting;
pub mod settings;

pub use document::DocumentMetadata;
pub use formatting::{Alignment, FormattingState, ListType, ParagraphStyleSnapshot};
pub use settings::EditorSettings;
