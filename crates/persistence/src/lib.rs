//! Persistence layer for the Customer service.
//!
//! This crate contains:
//! - Database connection management (the `Connector` capability)
//! - Entity definitions (database row mappings)
//! - Repository implementations for PostgreSQL and an in-memory test double
//! - Repository error classification

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;

pub use error::RepositoryError;
