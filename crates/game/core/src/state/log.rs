//! Append-only encounter log.
//!
//! Entries exist for the presentation layer; engine logic never reads them.

use std::fmt;

/// Category of a log entry, so presentation can style it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LogKind {
    Narration,
    PlayerAction,
    EnemyAction,
    EnemyDefeated,
    Victory,
    Defeat,
}

/// One resolved event, stamped with the turn it happened on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub turn: u32,
    pub kind: LogKind,
    pub message: String,
}

impl LogEntry {
    pub fn new(turn: u32, kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            turn,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
