//! Checkout models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the checked_out table: the copy `serial` is lent to `card_num`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CheckedOut {
    pub serial: i64,
    pub card_num: i64,
}

/// Checkout joined back to its title. Title columns are nullable because
/// the join is outer; a missing title is an integrity fault, not a value.
#[derive(Debug, Clone, FromRow)]
pub struct MyBookRow {
    pub serial: i64,
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Book currently held by the logged-in patron
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MyBook {
    pub title: String,
    pub author: String,
    pub serial: i64,
}

impl TryFrom<MyBookRow> for MyBook {
    type Error = crate::error::AppError;

    fn try_from(row: MyBookRow) -> Result<Self, Self::Error> {
        match (row.title, row.author) {
            (Some(title), Some(author)) => Ok(MyBook {
                title,
                author,
                serial: row.serial,
            }),
            _ => Err(crate::error::AppError::DataIntegrity(format!(
                "checked-out copy {} has no inventory or title record",
                row.serial
            ))),
        }
    }
}
