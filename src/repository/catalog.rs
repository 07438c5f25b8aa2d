//! Catalog repository: titles and their physical copies

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::title::{CatalogEntry, CopyEntry},
};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: Pool<Sqlite>,
}

impl CatalogRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List every title once, paired with one of its copies.
    ///
    /// The copy shown is the lowest serial still on the shelf, or the lowest
    /// serial overall when every copy is lent. Titles without copies get a
    /// null serial and an empty borrower name.
    pub async fn list_titles(&self) -> AppResult<Vec<CatalogEntry>> {
        let entries = sqlx::query_as::<_, CatalogEntry>(
            r#"
            SELECT t.isbn, t.title, t.author, i.serial,
                   COALESCE(p.name, '') AS name
            FROM titles t
            LEFT JOIN inventory i ON i.serial = (
                SELECT i2.serial
                FROM inventory i2
                LEFT JOIN checked_out c2 ON c2.serial = i2.serial
                WHERE i2.isbn = t.isbn
                ORDER BY c2.serial IS NOT NULL, i2.serial
                LIMIT 1
            )
            LEFT JOIN checked_out c ON c.serial = i.serial
            LEFT JOIN patrons p ON p.card_num = c.card_num
            ORDER BY t.isbn
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// List every copy of a title with its current borrower
    pub async fn list_copies(&self, isbn: &str) -> AppResult<Vec<CopyEntry>> {
        let copies = sqlx::query_as::<_, CopyEntry>(
            r#"
            SELECT i.serial, COALESCE(p.name, '') AS name
            FROM inventory i
            LEFT JOIN checked_out c ON c.serial = i.serial
            LEFT JOIN patrons p ON p.card_num = c.card_num
            WHERE i.isbn = ?
            ORDER BY i.serial
            "#,
        )
        .bind(isbn)
        .fetch_all(&self.pool)
        .await?;

        Ok(copies)
    }

    pub async fn title_exists(&self, isbn: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM titles WHERE isbn = ?)")
            .bind(isbn)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Whether the library owns a copy with this serial
    pub async fn copy_exists(&self, serial: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM inventory WHERE serial = ?)")
            .bind(serial)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
