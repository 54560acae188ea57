//! Session repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::Date;

use crate::adapters::sessions_sea as sessions_adapter;
use crate::entities::sessions;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// Session domain model: one played instance of a template, scoped to a
/// calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: i64,
    pub template_id: i64,
    pub played_at: Date,
    pub is_finished: bool,
}

/// A session row denormalized with its template's display name, for the
/// by-date dashboard listing.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub session: Session,
    pub template_name: String,
}

pub async fn create_session(
    txn: &DatabaseTransaction,
    template_id: i64,
    played_at: Date,
) -> Result<Session, DomainError> {
    let dto = sessions_adapter::SessionInsert {
        template_id,
        played_at,
    };
    let session = sessions_adapter::insert_session(txn, dto).await?;
    Ok(Session::from(session))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Option<Session>, DomainError> {
    let session = sessions_adapter::find_by_id(conn, session_id).await?;
    Ok(session.map(Session::from))
}

/// Find session by ID or return error if not found.
pub async fn require_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Session, DomainError> {
    find_by_id(conn, session_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Session,
            format!("session {session_id} not found"),
        )
    })
}

pub async fn list_by_date<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    date: Date,
) -> Result<Vec<SessionSummary>, DomainError> {
    let rows = sessions_adapter::find_by_date_with_template(conn, date).await?;
    rows.into_iter()
        .map(|(session, template)| {
            let template = template.ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("session {} references a missing template", session.id),
                )
            })?;
            Ok(SessionSummary {
                session: Session::from(session),
                template_name: template.name,
            })
        })
        .collect()
}

// Conversions between SeaORM models and domain models

impl From<sessions::Model> for Session {
    fn from(model: sessions::Model) -> Self {
        Self {
            id: model.id,
            template_id: model.template_id,
            played_at: model.played_at,
            is_finished: model.is_finished,
        }
    }
}
