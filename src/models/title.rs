//! Catalog models: the per-title listing and per-copy shapes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One catalog line per title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CatalogEntry {
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// Serial of the copy shown for this title, null when the library owns none
    pub serial: Option<i64>,
    /// Borrower of that copy, empty when it is on the shelf
    pub name: String,
}

/// A physical copy of a title and its current borrower
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CopyEntry {
    pub serial: i64,
    pub name: String,
}
