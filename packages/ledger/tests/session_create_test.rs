//! Session creation tests: validation, atomicity, by-date listing and the
//! details snapshot.

mod common;

use scoreledger::entities::{SessionPlayers, Sessions};
use scoreledger::{today, DomainError};
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::test]
async fn create_seats_players_in_input_order() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "FourSeatFixed", &["A", "B", "C", "D"]).await;

    let details = store
        .sessions()
        .details(session_id)
        .await
        .expect("session details");

    assert_eq!(details.template.name, "FourSeatFixed");
    assert_eq!(details.session.played_at, today());
    assert!(!details.session.is_finished);
    assert!(details.scores.is_empty());

    let seats: Vec<(u32, &str)> = details
        .players
        .iter()
        .map(|p| (p.seat_index, p.name.as_str()))
        .collect();
    assert_eq!(seats, vec![(0, "A"), (1, "B"), (2, "C"), (3, "D")]);
}

#[tokio::test]
async fn created_session_shows_up_under_todays_date() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "OpenEnded", &["P1", "P2"]).await;

    let sessions = store.sessions().by_date(today()).await.expect("by_date");
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].session.id, session_id);
    assert_eq!(sessions[0].template_name, "OpenEnded");
}

#[tokio::test]
async fn too_few_players_fails_and_persists_nothing() {
    let store = common::memory_store().await;
    let tid = common::template_id(&store, "FourSeatFixed").await;

    let names: Vec<String> = ["A", "B", "C"].iter().map(|s| (*s).to_string()).collect();
    let err = store.sessions().create(tid, &names).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    // All-or-nothing: neither table gained a row.
    let session_rows = Sessions::find()
        .count(store.connection())
        .await
        .expect("count sessions");
    let player_rows = SessionPlayers::find()
        .count(store.connection())
        .await
        .expect("count players");
    assert_eq!(session_rows, 0);
    assert_eq!(player_rows, 0);

    let sessions = store.sessions().by_date(today()).await.expect("by_date");
    assert!(sessions.is_empty());
}

#[tokio::test]
async fn duplicate_names_do_not_count_towards_the_minimum() {
    let store = common::memory_store().await;
    let tid = common::template_id(&store, "FourSeatFixed").await;

    let names: Vec<String> = vec!["Anna".into(), "Anna".into(), "Anna".into(), "Anna".into()];
    let err = store.sessions().create(tid, &names).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn blank_names_do_not_count_towards_the_minimum() {
    let store = common::memory_store().await;
    let tid = common::template_id(&store, "OpenEnded").await;

    let names: Vec<String> = vec!["Solo".into(), "   ".into()];
    let err = store.sessions().create(tid, &names).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn roster_above_max_players_is_rejected() {
    let store = common::memory_store().await;
    let tid = common::template_id(&store, "FourSeatFixed").await;

    let names: Vec<String> = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    let err = store.sessions().create(tid, &names).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn unknown_template_is_reported_before_anything_is_written() {
    let store = common::memory_store().await;

    let names: Vec<String> = vec!["A".into(), "B".into()];
    let err = store.sessions().create(424242, &names).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(..)));
}

#[tokio::test]
async fn details_of_unknown_session_is_not_found() {
    let store = common::memory_store().await;

    let err = store.sessions().details(31337).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(..)));
}
