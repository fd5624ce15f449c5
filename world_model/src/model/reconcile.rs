//! Incremental reconciliation - carry a model forward to the next snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use game_state::GameState;

use super::{HeroIndex, WorldModel};
use crate::board::{check_tile_length, read_mine_owner, resolve_owner, Mine};
use crate::config::ControllerPolicy;
use crate::error::{Result, WorldModelError};

impl WorldModel {
    /// Produce the model for a newer snapshot of the same game.
    ///
    /// Barriers and pubs never move, so the graph and pub index are shared
    /// with `self` rather than rebuilt. Mines keep their positions; only the
    /// ownership character of each known mine is re-read. The roster is
    /// re-indexed from scratch before owners are resolved against it.
    ///
    /// A snapshot that adds or removes mines is outside what this detects.
    pub fn advance(&self, state: &GameState) -> Result<WorldModel> {
        let board = state.board();
        let _span = tracing::info_span!("world_model_advance", turn = state.game.turn).entered();

        if board.size != self.board_size {
            return Err(WorldModelError::BoardSizeChanged {
                expected: self.board_size,
                actual: board.size,
            });
        }
        check_tile_length(board)?;

        let heroes = HeroIndex::from_roster(state.heroes());

        let mut mines = HashMap::with_capacity(self.mines.len());
        let mut changed = 0usize;
        for (&position, previous) in &self.mines {
            let owner_id = read_mine_owner(board, position)?;
            let owner = resolve_owner(position, owner_id, &heroes, self.config.unknown_owner)?;
            let mine = Mine::new(position, owner);

            if mine.owner_id() != previous.owner_id() {
                tracing::trace!(
                    %position,
                    from = ?previous.owner_id(),
                    to = ?mine.owner_id(),
                    "mine changed hands"
                );
                changed += 1;
            }
            mines.insert(position, mine);
        }

        let me = match self.config.controller {
            ControllerPolicy::CarryForward => Arc::clone(&self.me),
            ControllerPolicy::Refresh => Arc::new(state.hero.clone()),
        };

        tracing::debug!(
            mines_changed = changed,
            heroes = heroes.len(),
            "world model advanced"
        );

        Ok(WorldModel {
            graph: Arc::clone(&self.graph),
            pubs: Arc::clone(&self.pubs),
            mines,
            heroes,
            me,
            board_size: self.board_size,
            turn: state.game.turn,
            max_turns: state.game.max_turns,
            finished: state.game.finished,
            config: self.config.clone(),
        })
    }
}
