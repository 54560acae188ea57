//! Store lifecycle tests: snapshot export, on-disk persistence and the
//! in-memory fallback when the database file cannot be opened.

mod common;

use scoreledger::{Store, StoreConfig, StoreSnapshot};

#[tokio::test]
async fn snapshot_contains_all_written_rows() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "OpenEnded", &["P1", "P2"]).await;
    let players = common::player_ids(&store, session_id).await;

    store
        .ledger()
        .set_score(session_id, 0, players[0], "15")
        .await
        .expect("set score");

    let bytes = store.export_snapshot().await.expect("export");
    let snapshot: StoreSnapshot = serde_json::from_slice(&bytes).expect("valid JSON snapshot");

    assert_eq!(snapshot.templates.len(), 2);
    assert_eq!(snapshot.sessions.len(), 1);
    assert_eq!(snapshot.players.len(), 2);
    assert_eq!(snapshot.scores.len(), 1);
    assert_eq!(snapshot.scores[0].value, 15);
    assert_eq!(snapshot.scores[0].session_id, session_id);
}

#[tokio::test]
async fn data_survives_reopening_a_file_backed_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ledger.sqlite");

    let session_id = {
        let config = StoreConfig::default()
            .with_database_path(&path)
            .with_templates(vec![common::four_seat_fixed(), common::open_ended()]);
        let store = Store::open(config).await.expect("open store");
        assert!(store.is_persistent());

        let session_id = common::create_session(&store, "OpenEnded", &["P1", "P2"]).await;
        let players = common::player_ids(&store, session_id).await;
        store
            .ledger()
            .set_score(session_id, 0, players[0], "15")
            .await
            .expect("set score");
        session_id
    };

    let config = StoreConfig::default()
        .with_database_path(&path)
        .with_templates(vec![common::four_seat_fixed(), common::open_ended()]);
    let reopened = Store::open(config).await.expect("reopen store");

    // Seeding must not run again against a populated catalog.
    let templates = reopened.catalog().list().await.expect("list templates");
    assert_eq!(templates.len(), 2);

    let details = reopened
        .sessions()
        .details(session_id)
        .await
        .expect("details after reopen");
    assert_eq!(details.players.len(), 2);
    assert_eq!(details.scores.len(), 1);
    assert_eq!(details.scores[0].value, 15);
}

#[tokio::test]
async fn unopenable_file_falls_back_to_a_working_in_memory_store() {
    let config = StoreConfig::default()
        .with_database_path("/nonexistent-dir/deeper/ledger.sqlite")
        .with_templates(vec![common::open_ended()]);

    let store = Store::open(config).await.expect("fallback store opens");
    assert!(!store.is_persistent());

    // The degraded store is fully functional, it just will not survive.
    let session_id = common::create_session(&store, "OpenEnded", &["P1", "P2"]).await;
    let totals = store.aggregator().totals(session_id).await.expect("totals");
    assert_eq!(totals.len(), 2);
}
