//! Checkouts repository: the checked_out join table

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::checkout::{CheckedOut, MyBookRow},
};

#[derive(Clone)]
pub struct CheckoutsRepository {
    pool: Pool<Sqlite>,
}

impl CheckoutsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Copies lent to a card, outer-joined to their titles
    pub async fn list_for_card(&self, card_num: i64) -> AppResult<Vec<MyBookRow>> {
        let rows = sqlx::query_as::<_, MyBookRow>(
            r#"
            SELECT c.serial, t.title, t.author
            FROM checked_out c
            LEFT JOIN inventory i ON i.serial = c.serial
            LEFT JOIN titles t ON t.isbn = i.isbn
            WHERE c.card_num = ?
            ORDER BY c.serial
            "#,
        )
        .bind(card_num)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Current checkout of a copy, if any
    pub async fn get_by_serial(&self, serial: i64) -> AppResult<Option<CheckedOut>> {
        let row = sqlx::query_as::<_, CheckedOut>(
            "SELECT serial, card_num FROM checked_out WHERE serial = ?",
        )
        .bind(serial)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Record that `serial` is lent to `card_num`.
    ///
    /// Constraint violations are reported as conflict (copy already lent) or
    /// not found (unknown copy or patron).
    pub async fn create(&self, serial: i64, card_num: i64) -> AppResult<()> {
        sqlx::query("INSERT INTO checked_out (serial, card_num) VALUES (?, ?)")
            .bind(serial)
            .bind(card_num)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    AppError::Conflict(format!("Copy {} is already checked out", serial))
                }
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    AppError::NotFound(format!("Copy {} or card {} not found", serial, card_num))
                }
                _ => AppError::Database(e),
            })?;

        Ok(())
    }

    /// Remove the checkout of `serial` by `card_num`
    pub async fn delete(&self, serial: i64, card_num: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM checked_out WHERE serial = ? AND card_num = ?")
            .bind(serial)
            .bind(card_num)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Copy {} is not checked out to card {}",
                serial, card_num
            )));
        }
        Ok(())
    }
}
