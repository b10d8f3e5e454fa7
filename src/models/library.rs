//! Library model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Library record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Library {
    pub id: i32,
    pub library_name: String,
}

/// Create library request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLibrary {
    pub library_name: String,
}
