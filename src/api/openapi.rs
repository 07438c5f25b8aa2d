//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, catalog, checkouts, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Checkout API",
        version = "0.1.0",
        description = "Patron login, catalog browsing, checkouts and returns"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::logout,
        auth::me,
        // Catalog
        catalog::list_titles,
        catalog::list_copies,
        // Checkouts
        checkouts::list_my_books,
        checkouts::check_out,
        checkouts::return_book,
    ),
    components(
        schemas(
            auth::LoginRequest,
            auth::LoginResponse,
            auth::SuccessResponse,
            auth::SessionInfo,
            checkouts::CheckoutRequest,
            crate::models::title::CatalogEntry,
            crate::models::title::CopyEntry,
            crate::models::checkout::MyBook,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Patron sessions"),
        (name = "catalog", description = "Titles and copies"),
        (name = "checkouts", description = "Checkouts and returns")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
