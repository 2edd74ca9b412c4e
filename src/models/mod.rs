//! Data models for Bookshelf

pub mod book;
pub mod response;

// Re-export commonly used types
pub use book::{Book, BookIdQuery, BookInput, NewBook};
pub use response::ApiResponse;
