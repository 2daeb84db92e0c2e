//! Customer endpoint handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use persistence::RepositoryError;
use serde::Serialize;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{Customer, CustomerRequest};

/// Response payload for a deleted customer.
#[derive(Debug, Serialize)]
pub struct DeleteCustomerResponse {
    pub message: String,
}

/// Rejects path ids that are not integers before they reach the repository.
fn validate_id(id: &str) -> Result<(), ApiError> {
    id.parse::<i64>()
        .map(|_| ())
        .map_err(|_| ApiError::Validation("Invalid id format".to_string()))
}

/// Create a new customer.
///
/// POST /customers
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let Json(request) = payload?;

    let customer = state.customers.create(&request).await?;

    info!(customer_id = customer.id, "Customer created");

    Ok((StatusCode::CREATED, Json(customer)))
}

/// List all customers ordered by id.
///
/// GET /customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state.customers.list().await?;
    Ok(Json(customers))
}

/// Get a single customer by id.
///
/// GET /customers/:id
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    validate_id(&id)?;

    let customer = state
        .customers
        .get_by_id(&id)
        .await
        .map_err(|err| match err {
            RepositoryError::NotFound => ApiError::NotFound(format!("Customer id {} not found", id)),
            other => other.into(),
        })?;

    Ok(Json(customer))
}

/// Overwrite a customer's name, email and status.
///
/// PUT /customers/:id
///
/// An id with no matching row still returns 200 with the submitted customer.
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    validate_id(&id)?;
    let Json(request) = payload?;

    let customer = state.customers.update(&id, &request).await?;

    info!(customer_id = customer.id, "Customer updated");

    Ok(Json(customer))
}

/// Delete a customer.
///
/// DELETE /customers/:id
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteCustomerResponse>, ApiError> {
    validate_id(&id)?;

    state.customers.delete_by_id(&id).await?;

    info!(customer_id = %id, "Customer deleted");

    Ok(Json(DeleteCustomerResponse {
        message: "customer deleted".to_string(),
    }))
}
