//! # Axum Helpers
//!
//! Utilities and middleware shared by the HTTP services in this
//! workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: structured error responses (`{"error": "..."}` envelope)
//! - **[`http`]**: HTTP middleware (CORS)
//! - **[`server`]**: server setup, health endpoint, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes).await?;
//!     let app = router.merge(health_router(app_info!()));
//!
//!     create_production_app(app, &ServerConfig::default(), Duration::from_secs(30), async {})
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod http;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export HTTP middleware
pub use http::create_permissive_cors_layer;

// Re-export server types
pub use server::{
    create_production_app, create_router, health_router, shutdown_signal, HealthResponse,
    ShutdownCoordinator,
};
