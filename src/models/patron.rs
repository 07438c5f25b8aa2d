//! Patron (library card holder) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Patron row. Patrons are seeded out of band and never modified by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Patron {
    pub card_num: i64,
    pub name: String,
}
