//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Tasks API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tasks API",
        version = "0.1.0",
        description = "Task list management API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/api/tasks", api = domain_tasks::ApiDoc)
    ),
    tags(
        (name = "tasks", description = "Task list endpoints")
    )
)]
pub struct ApiDoc;
