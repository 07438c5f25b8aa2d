//! Checkout and return service

use crate::{
    error::{AppError, AppResult},
    models::checkout::MyBook,
    repository::Repository,
};

#[derive(Clone)]
pub struct CheckoutsService {
    repository: Repository,
}

impl CheckoutsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Books currently lent to a card
    pub async fn list_for_card(&self, card_num: i64) -> AppResult<Vec<MyBook>> {
        self.repository
            .checkouts
            .list_for_card(card_num)
            .await?
            .into_iter()
            .map(MyBook::try_from)
            .collect()
    }

    /// Lend a copy to a card
    pub async fn check_out(&self, serial: i64, card_num: i64) -> AppResult<()> {
        if !self.repository.catalog.copy_exists(serial).await? {
            return Err(AppError::NotFound(format!("Copy {} not found", serial)));
        }

        if let Some(current) = self.repository.checkouts.get_by_serial(serial).await? {
            let holder = if current.card_num == card_num { "you" } else { "another patron" };
            return Err(AppError::Conflict(format!(
                "Copy {} is already checked out by {}",
                serial, holder
            )));
        }

        // The primary key still guards against a concurrent checkout
        // slipping in between the check above and the insert.
        self.repository.checkouts.create(serial, card_num).await?;

        tracing::info!(serial, card_num, "Copy checked out");
        Ok(())
    }

    /// Take back a copy lent to a card
    pub async fn return_book(&self, serial: i64, card_num: i64) -> AppResult<()> {
        self.repository.checkouts.delete(serial, card_num).await?;

        tracing::info!(serial, card_num, "Copy returned");
        Ok(())
    }
}
