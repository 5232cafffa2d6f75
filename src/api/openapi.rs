//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::api::routes;
use crate::domain::User;
use crate::types::MessageResponse;

/// OpenAPI documentation for the orchestrator
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Telemetr-a orchestrator",
        version = "0.1.0",
        description = "User registry backed by a relational table",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        routes::root,
        routes::health,
        user_handler::list_users,
        user_handler::create_user,
    ),
    components(
        schemas(
            User,
            MessageResponse,
            routes::HealthResponse,
            routes::ServiceHealth,
            routes::ServiceStatus,
        )
    ),
    tags(
        (name = "Status", description = "Liveness and health"),
        (name = "Users", description = "User registry operations")
    )
)]
pub struct ApiDoc;
