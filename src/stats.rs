use serde::{Deserialize, Serialize};

/// The nine stat categories tracked per player per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Kills,
    Errors,
    Assists,
    Digs,
    Blocks,
    Aces,
    Serves,
    Passes,
    Sets,
}

impl StatKind {
    /// Canonical display order; every stat table renders columns in this order.
    pub const ALL: [StatKind; 9] = [
        StatKind::Kills,
        StatKind::Errors,
        StatKind::Assists,
        StatKind::Digs,
        StatKind::Blocks,
        StatKind::Aces,
        StatKind::Serves,
        StatKind::Passes,
        StatKind::Sets,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Kills => "Kills",
            StatKind::Errors => "Errors",
            StatKind::Assists => "Assists",
            StatKind::Digs => "Digs",
            StatKind::Blocks => "Blocks",
            StatKind::Aces => "Aces",
            StatKind::Serves => "Serves",
            StatKind::Passes => "Passes",
            StatKind::Sets => "Sets",
        }
    }

    /// Three-letter code for narrow table columns.
    pub fn short_label(self) -> &'static str {
        match self {
            StatKind::Kills => "KIL",
            StatKind::Errors => "ERR",
            StatKind::Assists => "AST",
            StatKind::Digs => "DIG",
            StatKind::Blocks => "BLK",
            StatKind::Aces => "ACE",
            StatKind::Serves => "SRV",
            StatKind::Passes => "PAS",
            StatKind::Sets => "SET",
        }
    }
}

/// Per-player counters for a single game. Counters never go negative; the
/// store clamps on write and the fields are unsigned to begin with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatLine {
    pub kills: u32,
    pub errors: u32,
    pub assists: u32,
    pub digs: u32,
    pub blocks: u32,
    pub aces: u32,
    pub serves: u32,
    pub passes: u32,
    pub sets: u32,
}

impl StatLine {
    pub fn value(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Kills => self.kills,
            StatKind::Errors => self.errors,
            StatKind::Assists => self.assists,
            StatKind::Digs => self.digs,
            StatKind::Blocks => self.blocks,
            StatKind::Aces => self.aces,
            StatKind::Serves => self.serves,
            StatKind::Passes => self.passes,
            StatKind::Sets => self.sets,
        }
    }

    pub fn set(&mut self, kind: StatKind, value: u32) {
        match kind {
            StatKind::Kills => self.kills = value,
            StatKind::Errors => self.errors = value,
            StatKind::Assists => self.assists = value,
            StatKind::Digs => self.digs = value,
            StatKind::Blocks => self.blocks = value,
            StatKind::Aces => self.aces = value,
            StatKind::Serves => self.serves = value,
            StatKind::Passes => self.passes = value,
            StatKind::Sets => self.sets = value,
        }
    }

    /// Adds `other` into `self`, field by field. Saturates instead of
    /// overflowing; hydrated files may carry arbitrarily large counters.
    pub fn add(&mut self, other: &StatLine) {
        self.kills = self.kills.saturating_add(other.kills);
        self.errors = self.errors.saturating_add(other.errors);
        self.assists = self.assists.saturating_add(other.assists);
        self.digs = self.digs.saturating_add(other.digs);
        self.blocks = self.blocks.saturating_add(other.blocks);
        self.aces = self.aces.saturating_add(other.aces);
        self.serves = self.serves.saturating_add(other.serves);
        self.passes = self.passes.saturating_add(other.passes);
        self.sets = self.sets.saturating_add(other.sets);
    }
}
