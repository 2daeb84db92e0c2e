//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod customer;

pub use customer::CustomerEntity;
