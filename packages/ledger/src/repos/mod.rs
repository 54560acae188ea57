//! Domain repositories: domain models plus free functions mapping adapter
//! results into `DomainError`.

pub mod players;
pub mod scores;
pub mod sessions;
pub mod templates;
