//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Hold the small amount of business rules above persistence.
//!
//! # Invariants
//! - Services are generic over repository traits and never touch SQL.

pub mod author_service;
pub mod book_service;
