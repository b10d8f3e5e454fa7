//! Audit recorder service

use sqlx::PgConnection;

use crate::{
    error::{AppError, AppResult},
    models::{
        audit::{AuditEntry, NewAuditEntry},
        book::Book,
    },
    repository::Repository,
};

/// Actor recorded for mutations performed by the service itself
pub const SYSTEM_ACTOR: &str = "system";

pub const ACTION_CREATE: &str = "Create";
pub const ACTION_UPDATE: &str = "Update";
pub const ACTION_DELETE: &str = "Delete";

#[derive(Clone)]
pub struct AuditService {
    repository: Repository,
}

impl AuditService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Record one mutation event against a book on an open transaction,
    /// so the entry commits or rolls back together with the mutation it
    /// describes.
    pub async fn record(
        &self,
        conn: &mut PgConnection,
        book: &Book,
        modified_by: &str,
        action_type: &str,
    ) -> AppResult<AuditEntry> {
        validate_audit_fields(modified_by, action_type)?;
        let entry = NewAuditEntry::from_book(book, modified_by, action_type);
        self.repository.audit.insert(conn, &entry).await
    }

    /// Audit trail for a book, ordered by creation time ascending.
    /// Never fails for any id; unknown ids yield an empty list.
    pub async fn history(&self, book_id: i32) -> AppResult<Vec<AuditEntry>> {
        self.repository.audit.find_by_book_id(book_id).await
    }
}

/// Reject blank actor or action strings before they reach the audit table
fn validate_audit_fields(modified_by: &str, action_type: &str) -> AppResult<()> {
    if modified_by.trim().is_empty() {
        return Err(AppError::Validation(
            "Audit actor cannot be blank".to_string(),
        ));
    }
    if action_type.trim().is_empty() {
        return Err(AppError::Validation(
            "Audit action type cannot be blank".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_actions() {
        for action in [ACTION_CREATE, ACTION_UPDATE, ACTION_DELETE] {
            assert!(validate_audit_fields(SYSTEM_ACTOR, action).is_ok());
        }
    }

    #[test]
    fn rejects_blank_actor() {
        assert!(validate_audit_fields("", ACTION_CREATE).is_err());
        assert!(validate_audit_fields("   ", ACTION_CREATE).is_err());
    }

    #[test]
    fn rejects_blank_action_type() {
        assert!(validate_audit_fields(SYSTEM_ACTOR, "").is_err());
        assert!(validate_audit_fields(SYSTEM_ACTOR, "\t").is_err());
    }
}
