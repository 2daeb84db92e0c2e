//! In-memory customer repository.
//!
//! Stands in for PostgreSQL in tests. It follows the same contract as
//! [`PgCustomerRepository`](super::PgCustomerRepository): ids start at 1 and
//! are never reused, listing is ordered by id, and updates or deletes of a
//! missing id succeed. Ids that are not numeric fail with
//! [`RepositoryError::InvalidId`], where PostgreSQL would fail the statement.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

use domain::models::{Customer, CustomerRequest};

use super::customer::CustomerRepository;
use crate::error::{parse_id, RepositoryError};

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Customer>,
}

/// Customer repository backed by an ordered map.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    table: Mutex<Table>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored customers.
    pub async fn len(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn create(&self, request: &CustomerRequest) -> Result<Customer, RepositoryError> {
        let mut table = self.table.lock().await;
        table.last_id += 1;
        let customer = request.clone().into_customer(table.last_id);
        table.rows.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Customer, RepositoryError> {
        let id = parse_id(id)?;
        let table = self.table.lock().await;
        table.rows.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn update(
        &self,
        id: &str,
        request: &CustomerRequest,
    ) -> Result<Customer, RepositoryError> {
        let id = parse_id(id)?;
        let customer = request.clone().into_customer(id);
        let mut table = self.table.lock().await;
        if let Some(row) = table.rows.get_mut(&id) {
            *row = customer.clone();
        }
        Ok(customer)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        let id = parse_id(id)?;
        self.table.lock().await.rows.remove(&id);
        Ok(())
    }
}
