use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use customer_service_api::{app, config, middleware};
use persistence::db::PgConnector;
use persistence::repositories::{CustomerRepository, PgCustomerRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics()?;

    info!("Starting Customer Service v{}", env!("CARGO_PKG_VERSION"));

    // One connector for the whole process; each repository call opens its own connection.
    let connector = PgConnector::new(&config.database).context("Invalid database URL")?;
    let customers = PgCustomerRepository::new(connector);

    // The service cannot serve anything without its table.
    info!("Ensuring customer table exists...");
    customers
        .ensure_schema()
        .await
        .context("Unable to create customer table")?;
    info!("Customer table ready");

    let addr = config.socket_addr()?;
    let app = app::create_app(config, Arc::new(customers));

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
