//! Template catalog service.

use sea_orm::DatabaseConnection;

use crate::errors::domain::DomainError;
use crate::repos::templates::{self, Template};

/// Read-only catalog of game templates. No mutation operations are exposed;
/// templates are seeded once at store initialization.
pub struct TemplateCatalog {
    db: DatabaseConnection,
}

impl TemplateCatalog {
    pub(crate) fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All templates in seeding order.
    pub async fn list(&self) -> Result<Vec<Template>, DomainError> {
        templates::list(&self.db).await
    }

    pub async fn get(&self, template_id: i64) -> Result<Template, DomainError> {
        templates::require_template(&self.db, template_id).await
    }
}
