//! Patrons repository

use sqlx::{Pool, Sqlite};

use crate::{error::AppResult, models::patron::Patron};

#[derive(Clone)]
pub struct PatronsRepository {
    pool: Pool<Sqlite>,
}

impl PatronsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Find the patron holding exactly this (name, card number) pair
    pub async fn find_by_credentials(&self, name: &str, card_num: i64) -> AppResult<Option<Patron>> {
        let patron = sqlx::query_as::<_, Patron>(
            "SELECT card_num, name FROM patrons WHERE name = ? AND card_num = ?",
        )
        .bind(name)
        .bind(card_num)
        .fetch_optional(&self.pool)
        .await?;

        Ok(patron)
    }
}
