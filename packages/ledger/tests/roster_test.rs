//! Roster tests: append-only seats, mid-session additions.

mod common;

use scoreledger::DomainError;

#[tokio::test]
async fn add_player_appends_at_the_next_seat() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "OpenEnded", &["P1", "P2"]).await;

    let late = store
        .roster()
        .add_player(session_id, "Latecomer")
        .await
        .expect("add player");
    assert_eq!(late.seat_index, 2);
    assert_eq!(late.name, "Latecomer");

    let details = store.sessions().details(session_id).await.expect("details");
    let seats: Vec<u32> = details.players.iter().map(|p| p.seat_index).collect();
    assert_eq!(seats, vec![0, 1, 2]);
}

#[tokio::test]
async fn player_names_are_trimmed_on_append() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "OpenEnded", &["P1", "P2"]).await;

    let player = store
        .roster()
        .add_player(session_id, "  Spacey  ")
        .await
        .expect("add player");
    assert_eq!(player.name, "Spacey");
}

#[tokio::test]
async fn mid_session_seat_addition_leaves_existing_totals_alone() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "OpenEnded", &["P1", "P2"]).await;
    let players = common::player_ids(&store, session_id).await;

    let ledger = store.ledger();
    ledger
        .set_score(session_id, 0, players[0], "15")
        .await
        .expect("set score");
    ledger
        .set_score(session_id, 1, players[1], "9")
        .await
        .expect("set score");

    store
        .roster()
        .add_player(session_id, "P3")
        .await
        .expect("add player");

    let totals = store
        .aggregator()
        .totals(session_id)
        .await
        .expect("totals");
    let values: Vec<i64> = totals.iter().map(|t| t.total).collect();
    assert_eq!(values, vec![15, 9, 0]);
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "OpenEnded", &["P1", "P2"]).await;

    let err = store.roster().add_player(session_id, "   ").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn unknown_session_is_reported() {
    let store = common::memory_store().await;

    let err = store.roster().add_player(777, "Ghost").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(..)));
}
