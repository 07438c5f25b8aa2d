//! Catalog endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::title::{CatalogEntry, CopyEntry},
    AppState,
};

use super::AppPath;

/// List every title with one of its copies and that copy's borrower
#[utoipa::path(
    get,
    path = "/titles",
    tag = "catalog",
    responses(
        (status = 200, description = "One entry per title", body = Vec<CatalogEntry>)
    )
)]
pub async fn list_titles(State(state): State<AppState>) -> AppResult<Json<Vec<CatalogEntry>>> {
    let titles = state.services.catalog.list_titles().await?;
    Ok(Json(titles))
}

/// List every copy of a title
#[utoipa::path(
    get,
    path = "/titles/{isbn}/copies",
    tag = "catalog",
    params(
        ("isbn" = String, Path, description = "Title ISBN")
    ),
    responses(
        (status = 200, description = "Copies of the title", body = Vec<CopyEntry>),
        (status = 404, description = "Unknown ISBN")
    )
)]
pub async fn list_copies(
    State(state): State<AppState>,
    AppPath(isbn): AppPath<String>,
) -> AppResult<Json<Vec<CopyEntry>>> {
    let copies = state.services.catalog.list_copies(&isbn).await?;
    Ok(Json(copies))
}
