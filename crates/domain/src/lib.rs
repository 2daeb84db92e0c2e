//! Domain layer for the Customer service.
//!
//! This crate contains the Customer model and the request payload used to
//! create or overwrite one.

pub mod models;
