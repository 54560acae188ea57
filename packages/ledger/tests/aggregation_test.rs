//! Aggregation tests: per-player totals and winner selection under both win
//! conditions.

mod common;

use scoreledger::DomainError;

#[tokio::test]
async fn unwritten_players_total_zero_and_lose_under_lowest_score() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "FourSeatFixed", &["A", "B", "C", "D"]).await;
    let players = common::player_ids(&store, session_id).await;

    store
        .ledger()
        .set_score(session_id, 0, players[0], "10")
        .await
        .expect("set score");

    let totals = store.aggregator().totals(session_id).await.expect("totals");
    let values: Vec<(&str, i64)> = totals.iter().map(|t| (t.name.as_str(), t.total)).collect();
    assert_eq!(values, vec![("A", 10), ("B", 0), ("C", 0), ("D", 0)]);

    // Lowest score wins, so everyone still on zero is tied for the lead.
    let winners = store
        .aggregator()
        .winners(session_id)
        .await
        .expect("winners");
    let names: Vec<&str> = winners.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["B", "C", "D"]);
}

#[tokio::test]
async fn highest_score_picks_the_single_leader() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "OpenEnded", &["P1", "P2"]).await;
    let players = common::player_ids(&store, session_id).await;

    store
        .ledger()
        .set_score(session_id, 0, players[0], "15")
        .await
        .expect("set score");

    let winners = store
        .aggregator()
        .winners(session_id)
        .await
        .expect("winners");
    assert_eq!(winners.len(), 1);
    assert_eq!(winners[0].name, "P1");
    assert_eq!(winners[0].total, 15);
}

#[tokio::test]
async fn totals_sum_across_rounds() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "OpenEnded", &["P1", "P2"]).await;
    let players = common::player_ids(&store, session_id).await;

    let ledger = store.ledger();
    ledger
        .set_score(session_id, 0, players[0], "7")
        .await
        .expect("set score");
    ledger
        .set_score(session_id, 1, players[0], "-3")
        .await
        .expect("set score");
    ledger
        .set_score(session_id, 2, players[0], "12")
        .await
        .expect("set score");
    ledger
        .set_score(session_id, 0, players[1], "20")
        .await
        .expect("set score");

    let totals = store.aggregator().totals(session_id).await.expect("totals");
    assert_eq!(totals[0].total, 16);
    assert_eq!(totals[1].total, 20);
}

#[tokio::test]
async fn overwriting_one_entry_shifts_only_that_players_total_by_the_delta() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "OpenEnded", &["P1", "P2"]).await;
    let players = common::player_ids(&store, session_id).await;

    let ledger = store.ledger();
    ledger
        .set_score(session_id, 0, players[0], "10")
        .await
        .expect("set score");
    ledger
        .set_score(session_id, 1, players[0], "5")
        .await
        .expect("set score");
    ledger
        .set_score(session_id, 0, players[1], "8")
        .await
        .expect("set score");

    let before = store.aggregator().totals(session_id).await.expect("totals");
    assert_eq!(before[0].total, 15);
    assert_eq!(before[1].total, 8);

    // 10 -> 17 at round 0 is a delta of +7 for the first player alone.
    ledger
        .set_score(session_id, 0, players[0], "17")
        .await
        .expect("overwrite");

    let after = store.aggregator().totals(session_id).await.expect("totals");
    assert_eq!(after[0].total, before[0].total + 7);
    assert_eq!(after[1].total, before[1].total);
}

#[tokio::test]
async fn totals_follow_seat_order() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "FourSeatFixed", &["D4", "C3", "B2", "A1"]).await;

    let totals = store.aggregator().totals(session_id).await.expect("totals");
    let seats: Vec<u32> = totals.iter().map(|t| t.seat_index).collect();
    let names: Vec<&str> = totals.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(seats, vec![0, 1, 2, 3]);
    assert_eq!(names, vec!["D4", "C3", "B2", "A1"]);
}

#[tokio::test]
async fn every_tied_leader_is_a_winner() {
    let store = common::memory_store().await;
    let session_id = common::create_session(&store, "OpenEnded", &["P1", "P2", "P3"]).await;
    let players = common::player_ids(&store, session_id).await;

    let ledger = store.ledger();
    ledger
        .set_score(session_id, 0, players[0], "30")
        .await
        .expect("set score");
    ledger
        .set_score(session_id, 0, players[1], "30")
        .await
        .expect("set score");
    ledger
        .set_score(session_id, 0, players[2], "12")
        .await
        .expect("set score");

    let winners = store
        .aggregator()
        .winners(session_id)
        .await
        .expect("winners");
    let names: Vec<&str> = winners.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["P1", "P2"]);
}

#[tokio::test]
async fn unknown_session_is_reported() {
    let store = common::memory_store().await;

    let err = store.aggregator().totals(9001).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(..)));
}
