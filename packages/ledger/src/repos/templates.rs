//! Template repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::templates_sea as templates_adapter;
use crate::entities::templates;
use crate::entities::templates::{RoundStructure, WinCondition};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::round_names;

/// Template domain model.
///
/// Immutable once seeded: player-count bounds, win condition and round
/// layout policy. For FIXED templates `default_round_names` defines the
/// permanent round count.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: i64,
    pub name: String,
    pub min_players: u32,
    pub max_players: u32,
    pub win_condition: WinCondition,
    pub round_structure: RoundStructure,
    pub default_round_names: Vec<String>,
}

impl Template {
    /// Permanent round count for FIXED templates; DYNAMIC templates have no
    /// upper bound a priori.
    pub fn fixed_round_count(&self) -> Option<u32> {
        match self.round_structure {
            RoundStructure::Fixed => Some(self.default_round_names.len() as u32),
            RoundStructure::Dynamic => None,
        }
    }
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Template>, DomainError> {
    let models = templates_adapter::list_all(conn).await?;
    models.into_iter().map(Template::try_from).collect()
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: i64,
) -> Result<Option<Template>, DomainError> {
    let model = templates_adapter::find_by_id(conn, template_id).await?;
    model.map(Template::try_from).transpose()
}

/// Find template by ID or return error if not found.
pub async fn require_template<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: i64,
) -> Result<Template, DomainError> {
    find_by_id(conn, template_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Template,
            format!("template {template_id} not found"),
        )
    })
}

// Conversions between SeaORM models and domain models

impl TryFrom<templates::Model> for Template {
    type Error = DomainError;

    fn try_from(model: templates::Model) -> Result<Self, Self::Error> {
        let default_round_names = round_names::decode(&model.default_round_names)?;
        Ok(Self {
            id: model.id,
            name: model.name,
            min_players: model.min_players.max(0) as u32,
            max_players: model.max_players.max(0) as u32,
            win_condition: model.win_condition,
            round_structure: model.round_structure,
            default_round_names,
        })
    }
}
