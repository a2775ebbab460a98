//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the host UI:
//! - Document lifecycle and paragraph styles
//! - Formatting toolbar state
//! - Find & Replace sessions
//! - Object insertion hooks

pub mod document;
pub mod find;
pub mod formatting;
pub mod objects;
