use std::fs;

use holdem_engine::errors::SnapshotError;
use holdem_engine::game::Game;
use holdem_engine::player::Player;
use holdem_engine::snapshot::{self, GameSnapshot, SCHEMA_VERSION};
use holdem_engine::stats::StatsBook;

fn started_game() -> Game {
    let players = vec![
        Player::human("Ann", 1000),
        Player::human("Bob", 800),
        Player::human("Cy", 1200),
    ];
    let mut game = Game::new(players, 5, 10, Some(77)).unwrap();
    game.start_new_hand().unwrap();
    game.call();
    game
}

#[test]
fn restored_game_plays_on_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saves").join("table.json");

    let mut original = started_game();
    let mut book = StatsBook::new();
    for rec in original.round_actions() {
        book.observe_action(rec);
    }
    snapshot::save(&path, &GameSnapshot::new(&original, Some(book.clone()))).unwrap();

    let loaded = snapshot::load(&path).unwrap();
    assert_eq!(loaded.schema_version, SCHEMA_VERSION);
    assert!(loaded.saved_at.is_some());
    assert_eq!(loaded.stats, Some(book));
    let mut restored = Game::restore(loaded.table).unwrap();
    assert_eq!(restored.snapshot(), original.snapshot());

    for game in [&mut original, &mut restored] {
        while !game.is_hand_over() {
            game.call();
        }
        game.start_new_hand().unwrap();
    }
    assert_eq!(restored.snapshot(), original.snapshot());
    assert_eq!(restored.players()[0].hand(), original.players()[0].hand());
}

#[test]
fn unknown_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.json");
    let mut snap = GameSnapshot::new(&started_game(), None);
    snap.schema_version = 2;
    fs::write(&path, serde_json::to_string(&snap).unwrap()).unwrap();

    match snapshot::load(&path) {
        Err(SnapshotError::UnsupportedVersion { found, expected }) => {
            assert_eq!(found, 2);
            assert_eq!(expected, SCHEMA_VERSION);
        }
        other => panic!("expected UnsupportedVersion, got {other:?}"),
    }
}

#[test]
fn garbage_and_missing_files_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(snapshot::load(&path), Err(SnapshotError::Json(_))));
    assert!(matches!(
        snapshot::load(dir.path().join("missing.json")),
        Err(SnapshotError::Io(_))
    ));
}

#[test]
fn restore_rejects_out_of_range_seats() {
    let mut table = started_game().snapshot();
    table.actor = 9;
    assert!(matches!(
        Game::restore(table),
        Err(SnapshotError::Inconsistent(_))
    ));
}
