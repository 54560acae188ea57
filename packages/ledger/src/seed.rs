//! Template seeding.
//!
//! Templates are created once at store initialization and are immutable
//! afterwards; seeding is skipped when the catalog already holds rows.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::adapters::templates_sea;
use crate::db::txn::with_txn;
use crate::entities::templates::{RoundStructure, WinCondition};
use crate::errors::domain::DomainError;
use crate::round_names;

/// Definition of one template to seed.
#[derive(Debug, Clone)]
pub struct TemplateSeed {
    pub name: String,
    pub min_players: u32,
    pub max_players: u32,
    pub win_condition: WinCondition,
    pub round_structure: RoundStructure,
    pub default_round_names: Vec<String>,
}

impl TemplateSeed {
    pub fn fixed(
        name: impl Into<String>,
        min_players: u32,
        max_players: u32,
        win_condition: WinCondition,
        round_names: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            min_players,
            max_players,
            win_condition,
            round_structure: RoundStructure::Fixed,
            default_round_names: round_names,
        }
    }

    pub fn dynamic(
        name: impl Into<String>,
        min_players: u32,
        max_players: u32,
        win_condition: WinCondition,
    ) -> Self {
        Self {
            name: name.into(),
            min_players,
            max_players,
            win_condition,
            round_structure: RoundStructure::Dynamic,
            default_round_names: Vec::new(),
        }
    }

    /// Load-time invariants; a violation is fatal and surfaced to the
    /// operator as a configuration error.
    fn validate(&self) -> Result<(), DomainError> {
        if self.min_players < 1 {
            return Err(DomainError::config(format!(
                "template '{}': min_players must be at least 1",
                self.name
            )));
        }
        if self.min_players > self.max_players {
            return Err(DomainError::config(format!(
                "template '{}': min_players {} exceeds max_players {}",
                self.name, self.min_players, self.max_players
            )));
        }
        if self.round_structure == RoundStructure::Fixed && self.default_round_names.is_empty() {
            return Err(DomainError::config(format!(
                "template '{}': FIXED round structure requires a non-empty round name list",
                self.name
            )));
        }
        Ok(())
    }
}

/// The built-in catalog: a generic open-ended scorepad and the Lórum card
/// game with its standard twelve rounds.
pub fn default_templates() -> Vec<TemplateSeed> {
    let lorum_rounds = [
        "Piros", "Felső", "Alsó", "Hátul", "Mente", "Lórum", "Piros", "Felső", "Alsó", "Hátul",
        "Mente", "Lórum",
    ]
    .iter()
    .map(|s| (*s).to_owned())
    .collect();

    vec![
        TemplateSeed::dynamic("Scrabble / Generic", 2, 8, WinCondition::HighestScore),
        TemplateSeed::fixed("Lórum", 4, 4, WinCondition::LowestScore, lorum_rounds),
    ]
}

/// Validate and seed the given templates unless the catalog is non-empty.
pub async fn seed_templates(
    db: &DatabaseConnection,
    seeds: &[TemplateSeed],
) -> Result<(), DomainError> {
    for seed in seeds {
        seed.validate()?;
    }

    if templates_sea::count(db).await? > 0 {
        return Ok(());
    }

    let mut inserts = Vec::with_capacity(seeds.len());
    for seed in seeds {
        inserts.push(templates_sea::TemplateInsert {
            name: seed.name.clone(),
            min_players: seed.min_players as i32,
            max_players: seed.max_players as i32,
            win_condition: seed.win_condition,
            round_structure: seed.round_structure,
            default_round_names: round_names::encode(&seed.default_round_names)?,
        });
    }

    let seeded = inserts.len();
    with_txn(db, |txn| {
        Box::pin(async move {
            for insert in inserts {
                templates_sea::insert_template(txn, insert).await?;
            }
            Ok(())
        })
    })
    .await?;

    info!(count = seeded, "template catalog seeded");
    Ok(())
}
