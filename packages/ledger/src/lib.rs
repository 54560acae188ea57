#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod export;
pub mod repos;
pub mod round_names;
pub mod seed;
pub mod services;
pub mod store;

// Re-exports for public API
pub use config::{LedgerConfig, StoreConfig};
pub use db::connect::StoreInitError;
pub use errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
pub use export::StoreSnapshot;
pub use seed::TemplateSeed;
pub use services::catalog::TemplateCatalog;
pub use services::ledger::ScoreLedger;
pub use services::roster::RosterManager;
pub use services::scoring::{PlayerTotal, ScoreAggregator};
pub use services::sessions::{today, SessionDetails, SessionStore, SessionSummary};
pub use store::Store;
