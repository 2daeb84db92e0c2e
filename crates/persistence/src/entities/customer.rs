//! Customer entity (database row mapping).

use sqlx::FromRow;

use domain::models::Customer;

/// Database row mapping for the customer table.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: String,
}

impl From<CustomerEntity> for Customer {
    fn from(entity: CustomerEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            status: entity.status,
        }
    }
}
