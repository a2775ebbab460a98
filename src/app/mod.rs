//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (formatting values, document metadata, settings)
//! - `controllers/` - Orchestration (DocumentController, FormattingController, FindSession)
//! - `services/` - Business operations (file formats, RTF, text_ops)
//! - `infrastructure/` - External integrations (error, logging)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::document::DocumentController;
pub use controllers::find::FindSession;
pub use controllers::formatting::FormattingController;
pub use controllers::objects::ObjectInsertionController;
pub use domain::{Alignment, DocumentMetadata, EditorSettings, FormattingState, ListType, ParagraphStyleSnapshot};
pub use infrastructure::error::{AppError, Result};
pub use services::file_service::{DocumentFormat, FileService};
