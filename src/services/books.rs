//! Book orchestration service
//!
//! Every operation answers with an [`ApiResponse`]. Invalid input, missing or
//! duplicate books are reported as plain failures; store faults additionally
//! carry the error detail. Nothing is returned as `Err`.

use std::sync::Arc;

use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::{
    config::{BooksConfig, SaveIdPolicy},
    error::{AppError, AppResult},
    models::{response::MSG_SUCCESS, ApiResponse, Book, BookInput, NewBook},
    repository::BookStore,
};

pub const MSG_DATA_NOT_FOUND: &str = "Book data not found";
pub const MSG_NOT_EXIST: &str = "Book not exist";
pub const MSG_ALREADY_EXIST: &str = "Book already exist";
pub const MSG_DATA_NULL: &str = "Book data is null";
pub const MSG_NAME_NULL: &str = "Book name is null";
pub const MSG_AUTHOR_NULL: &str = "Author name is null";

/// Input that passed validation
#[derive(Debug)]
struct ValidBook {
    id: Option<Uuid>,
    name: String,
    author_name: String,
}

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
    config: BooksConfig,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>, config: BooksConfig) -> Self {
        Self { store, config }
    }

    /// List all books. An empty table is a failure carrying an empty list.
    pub async fn list(&self) -> ApiResponse<Vec<Book>> {
        let books = self.store.list().await;
        if books.is_empty() {
            tracing::debug!("No book found");
            return ApiResponse::failure(MSG_DATA_NOT_FOUND).with_response(Vec::new());
        }
        ApiResponse::success(MSG_SUCCESS, books)
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: Uuid) -> ApiResponse<Book> {
        match self.store.get_by_id(id).await {
            // The store must hand back the row that was asked for
            Some(book) if book.id == id => ApiResponse::success(MSG_SUCCESS, book),
            Some(book) => {
                tracing::warn!("Store returned book {} when asked for {}", book.id, id);
                ApiResponse::failure(MSG_DATA_NOT_FOUND)
            }
            None => ApiResponse::failure(MSG_DATA_NOT_FOUND),
        }
    }

    /// Create a book, refusing a second book with the same name and author
    pub async fn create(&self, input: Option<BookInput>) -> ApiResponse<String> {
        self.try_create(input).await.unwrap_or_else(ApiResponse::from_error)
    }

    /// Delete a book by ID
    pub async fn delete(&self, id: Uuid) -> ApiResponse<String> {
        self.try_delete(id).await.unwrap_or_else(ApiResponse::from_error)
    }

    /// Overwrite name and author of an existing book
    pub async fn update(&self, input: Option<BookInput>) -> ApiResponse<String> {
        self.try_update(input).await.unwrap_or_else(ApiResponse::from_error)
    }

    /// Update the book if its ID exists, create it otherwise
    pub async fn save(&self, input: Option<BookInput>) -> ApiResponse<String> {
        self.try_save(input).await.unwrap_or_else(ApiResponse::from_error)
    }

    /// Check that the store answers
    pub async fn ready(&self) -> AppResult<()> {
        self.store.ping().await
    }

    async fn try_create(&self, input: Option<BookInput>) -> AppResult<ApiResponse<String>> {
        let book = validate_book(input.as_ref())?;

        if let Some(existing) = self.store.get_by_name(&book.name, &book.author_name).await {
            tracing::debug!("Book {:?} by {:?} already stored as {}", book.name, book.author_name, existing.id);
            return Err(AppError::Conflict(MSG_ALREADY_EXIST.to_string()));
        }

        let created = self
            .store
            .create(&NewBook {
                id: None,
                name: book.name,
                author_name: book.author_name,
            })
            .await;
        if created.is_success {
            tracing::info!("Book created: {:?}", created.response);
        }
        Ok(created)
    }

    async fn try_delete(&self, id: Uuid) -> AppResult<ApiResponse<String>> {
        let existing = self
            .store
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(MSG_NOT_EXIST.to_string()))?;

        let deleted = self.store.delete(&existing).await;
        if deleted.is_success {
            tracing::info!("Book deleted: {}", id);
        }
        Ok(deleted)
    }

    async fn try_update(&self, input: Option<BookInput>) -> AppResult<ApiResponse<String>> {
        let Some(data) = input.as_ref() else {
            return Err(AppError::Validation(MSG_DATA_NULL.to_string()));
        };

        let mut existing = match data.id {
            Some(id) => self.store.get_by_id(id).await,
            None => None,
        }
        .ok_or_else(|| AppError::NotFound(MSG_NOT_EXIST.to_string()))?;

        let book = validate_book(input.as_ref())?;
        existing.name = book.name;
        existing.author_name = book.author_name;

        Ok(self.store.update(&existing).await)
    }

    async fn try_save(&self, input: Option<BookInput>) -> AppResult<ApiResponse<String>> {
        let book = validate_book(input.as_ref())?;

        let found = match book.id {
            Some(id) => self.store.get_by_id(id).await,
            None => None,
        };

        match found {
            Some(mut existing) => {
                existing.name = book.name;
                existing.author_name = book.author_name;
                Ok(self.store.update(&existing).await)
            }
            None => {
                let id = match self.config.save_id_policy {
                    SaveIdPolicy::Honor => book.id,
                    SaveIdPolicy::Regenerate => None,
                };
                Ok(self
                    .store
                    .create(&NewBook {
                        id,
                        name: book.name,
                        author_name: book.author_name,
                    })
                    .await)
            }
        }
    }
}

/// Required fields first, in order, then the column width rules
fn validate_book(input: Option<&BookInput>) -> AppResult<ValidBook> {
    let data = input.ok_or_else(|| AppError::Validation(MSG_DATA_NULL.to_string()))?;

    let name = match data.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(AppError::Validation(MSG_NAME_NULL.to_string())),
    };
    let author_name = match data.author_name.as_deref() {
        Some(author_name) if !author_name.is_empty() => author_name,
        _ => return Err(AppError::Validation(MSG_AUTHOR_NULL.to_string())),
    };

    data.validate()
        .map_err(|e| AppError::Validation(first_message(&e)))?;

    Ok(ValidBook {
        id: data.id,
        name: name.to_string(),
        author_name: author_name.to_string(),
    })
}

fn first_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    ["name", "author_name"]
        .iter()
        .filter_map(|field| fields.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
