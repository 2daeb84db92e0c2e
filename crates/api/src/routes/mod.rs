//! HTTP route handlers.

pub mod customers;
pub mod health;
