use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::persist::KvStore;
use crate::stats::{StatKind, StatLine};

pub const PLAYERS_KEY: &str = "volleyballPlayers";
pub const GAMES_KEY: &str = "volleyballGames";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub date: String,
    pub opponent: String,
    #[serde(default)]
    pub player_stats: IndexMap<String, StatLine>,
}

impl Game {
    /// Stat line for one player in this game; absent entries read as zeros.
    pub fn stats_for(&self, player_id: &str) -> StatLine {
        self.player_stats
            .get(player_id)
            .cloned()
            .unwrap_or_default()
    }
}

/// The tracker's root state: the player roster, the game list, and the
/// key-value store both are mirrored to after every mutation.
///
/// Mutations follow a silent-no-op contract. Bad input (empty fields,
/// unknown ids) leaves the store untouched and reports failure through the
/// return value; nothing panics and nothing logs.
pub struct StatStore {
    players: Vec<Player>,
    games: Vec<Game>,
    kv: Box<dyn KvStore>,
}

impl StatStore {
    /// Hydrates both collections from the backing store. Each key falls back
    /// to an empty collection independently when missing or unparseable.
    pub fn load(kv: Box<dyn KvStore>) -> Self {
        let players = kv
            .get(PLAYERS_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<Player>>(&raw).ok())
            .unwrap_or_default();
        let games = kv
            .get(GAMES_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<Game>>(&raw).ok())
            .unwrap_or_default();
        Self { players, games, kv }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn game(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Registers a player. Both fields must be non-empty after trimming,
    /// otherwise nothing changes and `None` comes back.
    pub fn add_player(&mut self, name: &str, number: &str) -> Option<&Player> {
        let name = name.trim();
        let number = number.trim();
        if name.is_empty() || number.is_empty() {
            return None;
        }
        self.players.push(Player {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            number: number.to_string(),
        });
        self.persist_players();
        self.players.last()
    }

    /// Renames a player. The same non-empty rule as registration applies, so
    /// an edit can never blank a field.
    pub fn update_player(&mut self, id: &str, name: &str, number: &str) -> bool {
        let name = name.trim();
        let number = number.trim();
        if name.is_empty() || number.is_empty() {
            return false;
        }
        let Some(player) = self.players.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        player.name = name.to_string();
        player.number = number.to_string();
        self.persist_players();
        true
    }

    /// Removes a player and scrubs their entries from every game.
    pub fn delete_player(&mut self, id: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        if self.players.len() == before {
            return false;
        }
        for game in &mut self.games {
            game.player_stats.shift_remove(id);
        }
        self.persist_players();
        self.persist_games();
        true
    }

    /// Creates a game pre-populated with a zero stat line per registered
    /// player. Both fields must be non-empty after trimming.
    pub fn create_game(&mut self, date: &str, opponent: &str) -> Option<&Game> {
        let date = date.trim();
        let opponent = opponent.trim();
        if date.is_empty() || opponent.is_empty() {
            return None;
        }
        let player_stats = self
            .players
            .iter()
            .map(|p| (p.id.clone(), StatLine::default()))
            .collect();
        self.games.push(Game {
            id: Uuid::new_v4().to_string(),
            date: date.to_string(),
            opponent: opponent.to_string(),
            player_stats,
        });
        self.persist_games();
        self.games.last()
    }

    /// Removes a game. Any selection pointing at it is the view's problem.
    pub fn delete_game(&mut self, id: &str) -> bool {
        let before = self.games.len();
        self.games.retain(|g| g.id != id);
        if self.games.len() == before {
            return false;
        }
        self.persist_games();
        true
    }

    /// Writes one counter. Unknown game: no-op. A missing player entry is
    /// materialized as all zeros first. Values below zero store as zero.
    pub fn set_stat(&mut self, game_id: &str, player_id: &str, kind: StatKind, value: i64) -> bool {
        let Some(game) = self.games.iter_mut().find(|g| g.id == game_id) else {
            return false;
        };
        let clamped = value.clamp(0, i64::from(u32::MAX)) as u32;
        game.player_stats
            .entry(player_id.to_string())
            .or_default()
            .set(kind, clamped);
        self.persist_games();
        true
    }

    /// The +/- path: applies `delta` to the current value (zero when the
    /// entry is absent) and stores the clamped result.
    pub fn adjust_stat(
        &mut self,
        game_id: &str,
        player_id: &str,
        kind: StatKind,
        delta: i64,
    ) -> bool {
        let Some(game) = self.games.iter().find(|g| g.id == game_id) else {
            return false;
        };
        let current = game
            .player_stats
            .get(player_id)
            .map(|line| line.value(kind))
            .unwrap_or(0);
        self.set_stat(game_id, player_id, kind, i64::from(current) + delta)
    }

    /// Career totals for one player across every game. Missing entries count
    /// as zero. Always computed fresh.
    pub fn player_totals(&self, player_id: &str) -> StatLine {
        let mut totals = StatLine::default();
        for game in &self.games {
            if let Some(line) = game.player_stats.get(player_id) {
                totals.add(line);
            }
        }
        totals
    }

    // Mirror writes are best-effort: a failed write keeps the in-memory state.
    fn persist_players(&mut self) {
        if let Ok(raw) = serde_json::to_string(&self.players) {
            let _ = self.kv.set(PLAYERS_KEY, &raw);
        }
    }

    fn persist_games(&mut self) {
        if let Ok(raw) = serde_json::to_string(&self.games) {
            let _ = self.kv.set(GAMES_KEY, &raw);
        }
    }
}
