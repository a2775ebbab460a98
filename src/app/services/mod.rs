//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - File format dispatch and the style sidecar
//! - RTF and DOCX codecs
//! - Text statistics, search and replace

pub mod docx;
pub mod file_service;
pub mod rtf;
pub mod text_ops;
