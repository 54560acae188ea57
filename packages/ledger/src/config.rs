//! Store configuration.

use std::path::PathBuf;

use crate::seed::{self, TemplateSeed};

/// Presentation-facing knobs for the dynamic round grid.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Empty rows kept open past the highest written round index. The
    /// default of 1 means writing at the visible tail grows the grid to
    /// `highest + 2`.
    pub extend_ahead: u32,
    /// Minimum number of rounds offered before anything is written; 1 for a
    /// bare grid, higher for richer presentations.
    pub min_visible_rounds: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            extend_ahead: 1,
            min_visible_rounds: 1,
        }
    }
}

/// Configuration handed to [`crate::Store::open`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// SQLite database file. `None` opens a transient in-memory store.
    pub database_path: Option<PathBuf>,
    /// Templates seeded at initialization when the catalog is empty.
    pub templates: Vec<TemplateSeed>,
    pub ledger: LedgerConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            templates: seed::default_templates(),
            ledger: LedgerConfig::default(),
        }
    }
}

impl StoreConfig {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }

    pub fn with_templates(mut self, templates: Vec<TemplateSeed>) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_ledger(mut self, ledger: LedgerConfig) -> Self {
        self.ledger = ledger;
        self
    }
}
