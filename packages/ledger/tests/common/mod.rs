#![allow(dead_code)]

// tests/common/mod.rs

use scoreledger::entities::templates::WinCondition;
use scoreledger::{Store, StoreConfig, TemplateSeed};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// min = max = 4, LOWEST_SCORE, FIXED with 12 named rounds.
pub fn four_seat_fixed() -> TemplateSeed {
    let rounds = (1..=12).map(|i| format!("Round {i}")).collect();
    TemplateSeed::fixed("FourSeatFixed", 4, 4, WinCondition::LowestScore, rounds)
}

/// min = 2, HIGHEST_SCORE, DYNAMIC.
pub fn open_ended() -> TemplateSeed {
    TemplateSeed::dynamic("OpenEnded", 2, 8, WinCondition::HighestScore)
}

/// Fresh isolated in-memory store seeded with the two test templates.
pub async fn memory_store() -> Store {
    let config = StoreConfig::in_memory().with_templates(vec![four_seat_fixed(), open_ended()]);
    Store::open(config).await.expect("open in-memory store")
}

pub async fn template_id(store: &Store, name: &str) -> i64 {
    store
        .catalog()
        .list()
        .await
        .expect("list templates")
        .into_iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| panic!("template '{name}' not seeded"))
        .id
}

pub async fn create_session(store: &Store, template_name: &str, players: &[&str]) -> i64 {
    let tid = template_id(store, template_name).await;
    let names: Vec<String> = players.iter().map(|p| (*p).to_owned()).collect();
    store
        .sessions()
        .create(tid, &names)
        .await
        .expect("create session")
}

/// Player ids keyed by seat order.
pub async fn player_ids(store: &Store, session_id: i64) -> Vec<i64> {
    store
        .sessions()
        .details(session_id)
        .await
        .expect("session details")
        .players
        .into_iter()
        .map(|p| p.id)
        .collect()
}
