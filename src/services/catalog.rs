//! Catalog service

use crate::{
    error::{AppError, AppResult},
    models::title::{CatalogEntry, CopyEntry},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All titles, one entry each
    pub async fn list_titles(&self) -> AppResult<Vec<CatalogEntry>> {
        self.repository.catalog.list_titles().await
    }

    /// All copies of a title
    pub async fn list_copies(&self, isbn: &str) -> AppResult<Vec<CopyEntry>> {
        if !self.repository.catalog.title_exists(isbn).await? {
            return Err(AppError::NotFound(format!("Title with ISBN {} not found", isbn)));
        }
        self.repository.catalog.list_copies(isbn).await
    }
}
