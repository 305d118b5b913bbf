//! Catalog domain model.
//!
//! # Responsibility
//! - Define the records exchanged between services and repositories.
//! - Provide field validation shared by every write path.
//!
//! # Invariants
//! - Primary keys (`Isbn`, `AuthorId`) are supplied by callers, never generated.
//! - Records are immutable snapshots; this layer has no update/delete.

pub mod author;
pub mod book;
pub mod validation;
