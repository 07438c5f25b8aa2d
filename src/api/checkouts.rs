//! Checkout endpoints for the logged-in patron

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::checkout::MyBook, AppState};

use super::{auth::SuccessResponse, AppJson, AppPath, SessionUser};

/// Checkout request
#[derive(Deserialize, ToSchema)]
pub struct CheckoutRequest {
    /// Serial number of the copy
    pub serial: i64,
}

/// Books currently checked out by the logged-in patron
#[utoipa::path(
    get,
    path = "/checkouts",
    tag = "checkouts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Patron's books", body = Vec<MyBook>),
        (status = 401, description = "Not logged in"),
        (status = 500, description = "A checkout references a missing copy or title")
    )
)]
pub async fn list_my_books(
    State(state): State<AppState>,
    SessionUser(claims): SessionUser,
) -> AppResult<Json<Vec<MyBook>>> {
    let books = state.services.checkouts.list_for_card(claims.card_num).await?;
    Ok(Json(books))
}

/// Check a copy out to the logged-in patron
#[utoipa::path(
    post,
    path = "/checkouts",
    tag = "checkouts",
    security(("bearer_auth" = [])),
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Copy checked out", body = SuccessResponse),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Unknown copy"),
        (status = 409, description = "Copy already checked out")
    )
)]
pub async fn check_out(
    State(state): State<AppState>,
    SessionUser(claims): SessionUser,
    AppJson(request): AppJson<CheckoutRequest>,
) -> AppResult<Json<SuccessResponse>> {
    state
        .services
        .checkouts
        .check_out(request.serial, claims.card_num)
        .await?;
    Ok(SuccessResponse::ok())
}

/// Return a copy held by the logged-in patron
#[utoipa::path(
    post,
    path = "/checkouts/{serial}/return",
    tag = "checkouts",
    security(("bearer_auth" = [])),
    params(
        ("serial" = i64, Path, description = "Serial number of the copy")
    ),
    responses(
        (status = 200, description = "Copy returned", body = SuccessResponse),
        (status = 400, description = "Serial is not a number"),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Copy is not checked out by this patron")
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    SessionUser(claims): SessionUser,
    AppPath(serial): AppPath<i64>,
) -> AppResult<Json<SuccessResponse>> {
    state
        .services
        .checkouts
        .return_book(serial, claims.card_num)
        .await?;
    Ok(SuccessResponse::ok())
}
