//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; the repos layer converts through
//! `map_db_err` so every operation reports failures in domain terms.

use tracing::error;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    match &e {
        sea_orm::DbErr::RecordNotFound(msg) => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), msg.clone())
        }
        sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
            error!(error = %e, "storage unavailable");
            DomainError::infra(InfraErrorKind::StorageUnavailable, e.to_string())
        }
        sea_orm::DbErr::TryIntoErr { .. } | sea_orm::DbErr::Type(_) | sea_orm::DbErr::Json(_) => {
            error!(error = %e, "stored data could not be decoded");
            DomainError::infra(InfraErrorKind::DataCorruption, e.to_string())
        }
        _ => {
            error!(error = %e, "database error");
            DomainError::infra(InfraErrorKind::Other("Db".into()), e.to_string())
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
