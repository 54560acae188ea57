//! SeaORM adapters.
//!
//! Adapter functions are generic over `ConnectionTrait` and return
//! `sea_orm::DbErr`; the repos layer maps into `DomainError`.

pub mod players_sea;
pub mod scores_sea;
pub mod sessions_sea;
pub mod templates_sea;
