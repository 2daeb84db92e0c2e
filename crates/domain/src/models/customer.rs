//! Customer domain model.

use serde::{Deserialize, Serialize};

/// Represents a customer record.
///
/// `id` is assigned by the store when the customer is created and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: String,
}

/// Request payload for creating or overwriting a customer.
///
/// All fields are free-form text. Missing fields deserialize as empty
/// strings, and an `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerRequest {
    pub name: String,
    pub email: String,
    pub status: String,
}

impl CustomerRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            status: status.into(),
        }
    }

    /// Builds the customer this request describes under the given id.
    pub fn into_customer(self, id: i64) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            status: self.status,
        }
    }
}

impl From<Customer> for CustomerRequest {
    fn from(customer: Customer) -> Self {
        Self {
            name: customer.name,
            email: customer.email,
            status: customer.status,
        }
    }
}
