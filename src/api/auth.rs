//! Login, logout and current-session endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

use super::{AppJson, SessionUser};

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Patron name, matched exactly
    pub name: String,
    /// Library card number
    #[serde(alias = "cardnum")]
    pub card_num: i64,
}

/// Login outcome. A rejected login is not an error: it reports `success: false`.
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    /// Bearer token for subsequent requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Plain outcome body
#[derive(Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

/// Identity of the current session
#[derive(Serialize, ToSchema)]
pub struct SessionInfo {
    pub name: String,
    pub card_num: i64,
}

/// Log a patron in by name and card number
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login outcome", body = LoginResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = match state
        .services
        .sessions
        .login(&request.name, request.card_num)
        .await?
    {
        Some((token, _patron)) => LoginResponse {
            success: true,
            token: Some(token),
            token_type: Some("Bearer".to_string()),
        },
        None => LoginResponse {
            success: false,
            token: None,
            token_type: None,
        },
    };

    Ok(Json(response))
}

/// End the current session, if any
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Always succeeds", body = SuccessResponse)
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Option<SessionUser>,
) -> Json<SuccessResponse> {
    if let Some(SessionUser(claims)) = session {
        state.services.sessions.logout(&claims);
    }
    SuccessResponse::ok()
}

/// Identity of the logged-in patron
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current patron", body = SessionInfo),
        (status = 401, description = "Not logged in")
    )
)]
pub async fn me(SessionUser(claims): SessionUser) -> Json<SessionInfo> {
    Json(SessionInfo {
        name: claims.sub,
        card_num: claims.card_num,
    })
}
