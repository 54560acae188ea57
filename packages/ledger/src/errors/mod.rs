//! Error handling for the score ledger core.

pub mod db;
pub mod domain;

pub use domain::{DomainError, InfraErrorKind, NotFoundKind};
