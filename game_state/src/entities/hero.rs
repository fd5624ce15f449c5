//! Hero definitions.

use serde::{Deserialize, Serialize};

use super::{HeroId, Position};

/// A hero as reported in the server's roster.
///
/// Heroes are owned by the snapshot. Anything downstream indexes them by
/// shared reference and never edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: HeroId,
    pub name: String,

    /// Absent for bots that play without an account.
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub elo: Option<i32>,

    pub pos: Position,

    #[serde(default)]
    pub life: u32,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub mine_count: u32,

    /// Where the hero respawns after dying.
    #[serde(default)]
    pub spawn_pos: Option<Position>,

    /// Set by the server once the hero's client stops answering.
    #[serde(default)]
    pub crashed: bool,
}

impl Hero {
    /// Create a new hero standing at `pos` with full life.
    pub fn new(id: HeroId, name: impl Into<String>, pos: Position) -> Self {
        Self {
            id,
            name: name.into(),
            user_id: None,
            elo: None,
            pos,
            life: 100,
            gold: 0,
            mine_count: 0,
            spawn_pos: Some(pos),
            crashed: false,
        }
    }

    /// Set the life total.
    pub fn with_life(mut self, life: u32) -> Self {
        self.life = life;
        self
    }

    /// Set the gold total.
    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    /// Set the number of mines the server credits to this hero.
    pub fn with_mine_count(mut self, mine_count: u32) -> Self {
        self.mine_count = mine_count;
        self
    }

    /// Move the hero, keeping its spawn point.
    pub fn moved_to(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }

    /// Check if the hero is standing on its own spawn point.
    pub fn is_at_spawn(&self) -> bool {
        self.spawn_pos == Some(self.pos)
    }
}
