//! Customer repository for database operations.
//!
//! Every operation opens its own connection through the injected
//! [`Connector`] and owns it until it returns. Dropping a `PgConnection`
//! closes it, so the connection is released on every exit path, including
//! `?` returns after a failed statement.

use async_trait::async_trait;
use sqlx::PgConnection;

use domain::models::{Customer, CustomerRequest};

use crate::db::{Connector, PgConnector};
use crate::entities::CustomerEntity;
use crate::error::{parse_id, RepositoryError};
use crate::metrics::QueryTimer;

/// CRUD operations on customers, plus schema bootstrap.
///
/// Ids arrive in their external string form. Lookups bind them as-is and
/// leave coercion to the store.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Creates the customer table if it does not exist yet.
    async fn ensure_schema(&self) -> Result<(), RepositoryError>;

    /// Inserts a customer and returns it with its store-assigned id.
    async fn create(&self, request: &CustomerRequest) -> Result<Customer, RepositoryError>;

    /// Lists all customers in ascending id order.
    async fn list(&self) -> Result<Vec<Customer>, RepositoryError>;

    /// Fetches one customer. Zero matching rows yields [`RepositoryError::NotFound`].
    async fn get_by_id(&self, id: &str) -> Result<Customer, RepositoryError>;

    /// Overwrites name, email and status of the customer with the given id.
    ///
    /// Updating an id that does not exist succeeds. The returned customer
    /// carries the parsed id, not a value re-read from the store.
    async fn update(
        &self,
        id: &str,
        request: &CustomerRequest,
    ) -> Result<Customer, RepositoryError>;

    /// Deletes the customer with the given id. Deleting a missing id succeeds.
    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError>;
}

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS customer (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        status TEXT NOT NULL
    )
"#;

/// PostgreSQL-backed customer repository.
#[derive(Clone)]
pub struct PgCustomerRepository<C = PgConnector> {
    connector: C,
}

impl<C: Connector> PgCustomerRepository<C> {
    /// Creates a new PgCustomerRepository using the given connector.
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    async fn acquire(&self) -> Result<PgConnection, RepositoryError> {
        self.connector
            .connect()
            .await
            .map_err(RepositoryError::Connection)
    }
}

#[async_trait]
impl<C: Connector> CustomerRepository for PgCustomerRepository<C> {
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        let timer = QueryTimer::new("ensure_customer_schema");
        let mut conn = self.acquire().await?;
        let result = sqlx::query(CREATE_TABLE).execute(&mut conn).await;
        timer.record();
        result?;
        Ok(())
    }

    async fn create(&self, request: &CustomerRequest) -> Result<Customer, RepositoryError> {
        let timer = QueryTimer::new("create_customer");
        let mut conn = self.acquire().await?;
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO customer (name, email, status)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.status)
        .fetch_one(&mut conn)
        .await;
        timer.record();

        let id = result?;
        Ok(request.clone().into_customer(id))
    }

    async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let timer = QueryTimer::new("list_customers");
        let mut conn = self.acquire().await?;
        let result = sqlx::query_as::<_, CustomerEntity>(
            r#"
            SELECT id, name, email, status FROM customer ORDER BY id
            "#,
        )
        .fetch_all(&mut conn)
        .await;
        timer.record();

        Ok(result?.into_iter().map(Customer::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Customer, RepositoryError> {
        let timer = QueryTimer::new("get_customer_by_id");
        let mut conn = self.acquire().await?;
        let result = sqlx::query_as::<_, CustomerEntity>(
            r#"
            SELECT id, name, email, status FROM customer WHERE id = $1::bigint
            "#,
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await;
        timer.record();

        result?.map(Customer::from).ok_or(RepositoryError::NotFound)
    }

    async fn update(
        &self,
        id: &str,
        request: &CustomerRequest,
    ) -> Result<Customer, RepositoryError> {
        let timer = QueryTimer::new("update_customer");
        let mut conn = self.acquire().await?;
        // A missing id updates zero rows, which is not an error.
        let result = sqlx::query(
            r#"
            UPDATE customer SET name = $2, email = $3, status = $4
            WHERE id = $1::bigint
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.status)
        .execute(&mut conn)
        .await;
        timer.record();
        result?;

        let id = parse_id(id)?;
        Ok(request.clone().into_customer(id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        let timer = QueryTimer::new("delete_customer");
        let mut conn = self.acquire().await?;
        let result = sqlx::query(
            r#"
            DELETE FROM customer WHERE id = $1::bigint
            "#,
        )
        .bind(id)
        .execute(&mut conn)
        .await;
        timer.record();
        result?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Connector whose database is unreachable.
    struct UnreachableConnector {
        attempts: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Connector for UnreachableConnector {
        async fn connect(&self) -> Result<PgConnection, sqlx::Error> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(sqlx::Error::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    fn unreachable_repository() -> (PgCustomerRepository<UnreachableConnector>, Arc<AtomicUsize>) {
        let attempts = Arc::new(AtomicUsize::new(0));
        let repo = PgCustomerRepository::new(UnreachableConnector {
            attempts: Arc::clone(&attempts),
        });
        (repo, attempts)
    }

    fn assert_connection_error<T: std::fmt::Debug>(result: Result<T, RepositoryError>) {
        match result {
            Err(RepositoryError::Connection(sqlx::Error::Io(e))) => {
                assert_eq!(e.kind(), io::ErrorKind::ConnectionRefused)
            }
            other => panic!("Expected Connection error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_every_operation_reports_connection_failure() {
        let (repo, attempts) = unreachable_repository();
        let request = CustomerRequest::new("Ann", "a@x.com", "active");

        assert_connection_error(repo.ensure_schema().await);
        assert_connection_error(repo.create(&request).await);
        assert_connection_error(repo.list().await);
        assert_connection_error(repo.get_by_id("1").await);
        assert_connection_error(repo.update("1", &request).await);
        assert_connection_error(repo.delete_by_id("1").await);

        // One connection attempt per operation.
        assert_eq!(attempts.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn test_connection_failure_is_not_not_found() {
        let (repo, _) = unreachable_repository();
        let err = repo.get_by_id("1").await.unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_create_table_is_idempotent_ddl() {
        assert!(CREATE_TABLE.contains("CREATE TABLE IF NOT EXISTS customer"));
        assert!(CREATE_TABLE.contains("id BIGSERIAL PRIMARY KEY"));
    }
}
