//! The command/query surface exposed to presentation collaborators.

pub mod catalog;
pub mod ledger;
pub mod roster;
pub mod scoring;
pub mod sessions;
