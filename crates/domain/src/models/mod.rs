//! Domain models for the Customer service.

pub mod customer;

pub use customer::{Customer, CustomerRequest};
