//! Data models for Libris

pub mod audit;
pub mod author;
pub mod book;
pub mod historical_book;
pub mod library;

// Re-export commonly used types
pub use audit::AuditEntry;
pub use author::Author;
pub use book::{Book, Publisher};
pub use historical_book::HistoricalBook;
pub use library::Library;
