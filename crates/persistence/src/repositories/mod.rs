//! Repository implementations for database operations.

pub mod customer;
pub mod memory;

pub use customer::{CustomerRepository, PgCustomerRepository};
pub use memory::InMemoryCustomerRepository;
