use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;

use volley_terminal::persist::{FileStore, KvStore, MemoryStore};
use volley_terminal::stats::StatKind;
use volley_terminal::store::{StatStore, GAMES_KEY, PLAYERS_KEY};

/// Test-only store whose contents stay visible after the `StatStore` takes
/// ownership of its box, so hydration can be checked against earlier writes.
#[derive(Clone, Default)]
struct SharedStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl KvStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "volley_terminal_test_{tag}_{}",
        uuid::Uuid::new_v4()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn state_round_trips_through_the_kv_store() {
    let shared = SharedStore::default();

    let mut store = StatStore::load(Box::new(shared.clone()));
    let ana = store
        .add_player("Ana", "7")
        .map(|p| p.id.clone())
        .expect("valid player");
    store.add_player("Ben", "3").expect("valid player");
    let g1 = store
        .create_game("2026-08-20", "Hawks")
        .map(|g| g.id.clone())
        .expect("valid game");
    store.create_game("2026-08-24", "Owls").expect("valid game");
    store.set_stat(&g1, &ana, StatKind::Kills, 6);
    store.set_stat(&g1, &ana, StatKind::Passes, 2);

    let rehydrated = StatStore::load(Box::new(shared));

    assert_eq!(rehydrated.players().len(), 2);
    assert_eq!(rehydrated.games().len(), 2);
    let player = rehydrated.player(&ana).expect("player survives");
    assert_eq!(player.name, "Ana");
    let game = rehydrated.game(&g1).expect("game survives");
    assert_eq!(game.opponent, "Hawks");
    assert_eq!(game.stats_for(&ana).kills, 6);
    assert_eq!(game.stats_for(&ana).passes, 2);
    // Insertion order is preserved through the encoding.
    let names: Vec<&str> = rehydrated
        .players()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Ana", "Ben"]);
}

#[test]
fn malformed_key_falls_back_to_empty_for_that_collection_only() {
    let mut shared = SharedStore::default();

    {
        let mut store = StatStore::load(Box::new(shared.clone()));
        store.add_player("Ana", "7").expect("valid player");
        store.create_game("2026-08-24", "Hawks").expect("valid game");
    }
    shared.set(GAMES_KEY, "{not json").expect("write garbage");

    let rehydrated = StatStore::load(Box::new(shared));

    assert_eq!(rehydrated.players().len(), 1);
    assert_eq!(rehydrated.games().len(), 0);
}

#[test]
fn absent_keys_hydrate_as_empty_collections() {
    let store = StatStore::load(Box::new(MemoryStore::new()));

    assert!(store.players().is_empty());
    assert!(store.games().is_empty());
}

#[test]
fn hydration_keeps_orphaned_stat_entries_in_games() {
    let shared = SharedStore::default();

    let mut store = StatStore::load(Box::new(shared.clone()));
    let ana = store
        .add_player("Ana", "7")
        .map(|p| p.id.clone())
        .expect("valid player");
    let game_id = store
        .create_game("2026-08-24", "Hawks")
        .map(|g| g.id.clone())
        .expect("valid game");
    store.set_stat(&game_id, &ana, StatKind::Kills, 3);
    store.delete_player(&ana);

    let rehydrated = StatStore::load(Box::new(shared));

    // The cascade scrubbed the entry before persisting, so nothing orphaned
    // survives a delete; an orphan written by an older revision still parses.
    assert!(rehydrated.players().is_empty());
    let game = rehydrated.game(&game_id).expect("game survives");
    assert!(!game.player_stats.contains_key(&ana));
    assert_eq!(rehydrated.player_totals(&ana).kills, 0);
}

#[test]
fn file_store_round_trips_per_key() {
    let dir = temp_dir("roundtrip");
    let mut store = FileStore::new(&dir);

    store.set(PLAYERS_KEY, "[1,2,3]").expect("write players");
    store.set(GAMES_KEY, "[]").expect("write games");

    assert_eq!(store.get(PLAYERS_KEY).as_deref(), Some("[1,2,3]"));
    assert_eq!(store.get(GAMES_KEY).as_deref(), Some("[]"));
    assert_eq!(store.get("unknownKey"), None);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn file_store_last_write_wins() {
    let dir = temp_dir("lww");
    let mut store = FileStore::new(&dir);

    store.set(PLAYERS_KEY, "first").expect("write");
    store.set(PLAYERS_KEY, "second").expect("overwrite");

    assert_eq!(store.get(PLAYERS_KEY).as_deref(), Some("second"));
    // No stray tmp file left behind after the rename.
    let leftovers: Vec<_> = fs::read_dir(&dir)
        .expect("read dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn file_backed_store_survives_a_full_restart() {
    let dir = temp_dir("restart");

    let ana = {
        let mut store = StatStore::load(Box::new(FileStore::new(&dir)));
        let ana = store
            .add_player("Ana", "7")
            .map(|p| p.id.clone())
            .expect("valid player");
        let game_id = store
            .create_game("2026-08-24", "Hawks")
            .map(|g| g.id.clone())
            .expect("valid game");
        store.set_stat(&game_id, &ana, StatKind::Sets, 9);
        ana
    };

    let rehydrated = StatStore::load(Box::new(FileStore::new(&dir)));
    assert_eq!(rehydrated.players().len(), 1);
    assert_eq!(rehydrated.player_totals(&ana).sets, 9);

    let _ = fs::remove_dir_all(&dir);
}
