//! API handlers for the Libris REST endpoints

pub mod audit;
pub mod authors;
pub mod books;
pub mod health;
pub mod libraries;
pub mod openapi;
