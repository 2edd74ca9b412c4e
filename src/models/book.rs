//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: Uuid,
    /// Book title
    pub name: String,
    pub author_name: String,
}

/// Create / update / save request body.
///
/// Fields are optional on the wire so that missing values are reported by the
/// book service with its own messages rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookInput {
    /// Required for update, optional for save, ignored by create
    pub id: Option<Uuid>,
    #[validate(length(max = 200, message = "Book name must be at most 200 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 200, message = "Author name must be at most 200 characters"))]
    pub author_name: Option<String>,
}

/// Row to insert. `id: None` lets the database generate the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub id: Option<Uuid>,
    pub name: String,
    pub author_name: String,
}

/// Query parameters for deleting a book
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookIdQuery {
    /// Book ID
    pub id: Uuid,
}
