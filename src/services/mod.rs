//! Business logic services

pub mod catalog;
pub mod checkouts;
pub mod sessions;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub sessions: sessions::SessionsService,
    pub catalog: catalog::CatalogService,
    pub checkouts: checkouts::CheckoutsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            sessions: sessions::SessionsService::new(repository.clone(), auth_config),
            catalog: catalog::CatalogService::new(repository.clone()),
            checkouts: checkouts::CheckoutsService::new(repository.clone()),
            repository,
        }
    }
}
