//! Business logic services

pub mod books;

use std::sync::Arc;

use crate::{config::BooksConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, books_config: BooksConfig) -> Self {
        Self {
            books: books::BooksService::new(Arc::new(repository.books), books_config),
        }
    }
}
