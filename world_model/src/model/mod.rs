//! World model - the queryable view of one turn of the game.
//!
//! A model is built once from the first snapshot of a game and then carried
//! forward with [`WorldModel::advance`]:
//! 1. **Decode**: index the roster, then decode every tile (owners resolve through the roster)
//! 2. **Link**: connect diagonal neighbors among plain walkable cells
//! 3. **Advance**: each turn, share the graph and pubs, re-read mine owners, re-index heroes

mod heroes;
mod reconcile;

pub use heroes::*;

use std::collections::HashMap;
use std::sync::Arc;

use game_state::{GameState, Hero, HeroId, Position};

use crate::board::{decode_board, BoardGraph, Cell, Mine, Pub};
use crate::config::ModelConfig;
use crate::error::Result;

/// The world as seen at one turn.
///
/// Immutable once built. The graph and the pub index never change during a
/// game and are shared by reference between a model and every model advanced
/// from it; cloning a model is cheap for the same reason.
#[derive(Debug, Clone)]
pub struct WorldModel {
    graph: Arc<BoardGraph>,
    pubs: Arc<HashMap<Position, Pub>>,
    mines: HashMap<Position, Mine>,
    heroes: HeroIndex,
    me: Arc<Hero>,
    board_size: usize,
    turn: u32,
    max_turns: u32,
    finished: bool,
    config: ModelConfig,
}

impl WorldModel {
    /// Build a model from a snapshot with the default configuration.
    pub fn build(state: &GameState) -> Result<Self> {
        Self::build_with(state, &ModelConfig::default())
    }

    /// Build a model from a snapshot. The configuration is kept for later `advance` calls.
    pub fn build_with(state: &GameState, config: &ModelConfig) -> Result<Self> {
        let board = state.board();
        let _span = tracing::info_span!("world_model_build", size = board.size).entered();

        // Owners are resolved during decoding, so the roster goes first.
        let heroes = HeroIndex::from_roster(state.heroes());
        let decoded = decode_board(board, &heroes, config.unknown_owner)?;
        let graph = BoardGraph::build(&decoded);

        tracing::debug!(
            cells = graph.len(),
            edges = graph.edge_count(),
            mines = decoded.mines.len(),
            pubs = decoded.pubs.len(),
            heroes = heroes.len(),
            "world model built"
        );

        Ok(Self {
            graph: Arc::new(graph),
            pubs: Arc::new(decoded.pubs),
            mines: decoded.mines,
            heroes,
            me: Arc::new(state.hero.clone()),
            board_size: board.size,
            turn: state.game.turn,
            max_turns: state.game.max_turns,
            finished: state.game.finished,
            config: config.clone(),
        })
    }

    /// The board graph.
    pub fn graph(&self) -> &BoardGraph {
        &self.graph
    }

    /// Get the cell at a position.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.graph.get(position)
    }

    /// Neighbors of a position. Empty for barriers, mines, and pubs.
    pub fn neighbors(&self, position: Position) -> &[Position] {
        self.graph.neighbors(position)
    }

    /// Check if the position is a cell of the board (anything but a barrier).
    pub fn contains(&self, position: Position) -> bool {
        self.graph.contains(position)
    }

    /// Check if a hero can stand on the position: a cell that is neither a mine nor a pub.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.contains(position) && !self.is_mine(position) && !self.is_pub(position)
    }

    /// All mines, by position.
    pub fn mines(&self) -> &HashMap<Position, Mine> {
        &self.mines
    }

    /// Get the mine at a position.
    pub fn mine(&self, position: Position) -> Option<&Mine> {
        self.mines.get(&position)
    }

    /// Check if a mine sits at the position.
    pub fn is_mine(&self, position: Position) -> bool {
        self.mines.contains_key(&position)
    }

    /// Owner of the mine at a position. `None` if there is no mine or it is unclaimed.
    pub fn mine_owner(&self, position: Position) -> Option<&Arc<Hero>> {
        self.mines.get(&position)?.owner.as_ref()
    }

    /// Mines owned by the given hero.
    pub fn mines_owned_by(&self, id: HeroId) -> Vec<&Mine> {
        self.mines.values().filter(|mine| mine.is_owned_by(id)).collect()
    }

    /// Mines nobody owns.
    pub fn unclaimed_mines(&self) -> Vec<&Mine> {
        self.mines.values().filter(|mine| mine.is_unclaimed()).collect()
    }

    /// All pubs, by position.
    pub fn pubs(&self) -> &HashMap<Position, Pub> {
        &self.pubs
    }

    /// Get the pub at a position.
    pub fn pub_at(&self, position: Position) -> Option<&Pub> {
        self.pubs.get(&position)
    }

    /// Check if a pub sits at the position.
    pub fn is_pub(&self, position: Position) -> bool {
        self.pubs.contains_key(&position)
    }

    /// Heroes by position.
    pub fn heroes_by_position(&self) -> &HashMap<Position, Arc<Hero>> {
        self.heroes.by_position_map()
    }

    /// Heroes by id.
    pub fn heroes_by_id(&self) -> &HashMap<HeroId, Arc<Hero>> {
        self.heroes.by_id_map()
    }

    /// Get a hero by id.
    pub fn hero_by_id(&self, id: HeroId) -> Option<&Arc<Hero>> {
        self.heroes.by_id(id)
    }

    /// Get the hero standing at a position.
    pub fn hero_at(&self, position: Position) -> Option<&Arc<Hero>> {
        self.heroes.at(position)
    }

    /// Check if a hero stands at the position.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.heroes.at(position).is_some()
    }

    /// The controlling hero.
    ///
    /// Under [`crate::ControllerPolicy::CarryForward`] this is the record from
    /// the snapshot the model was first built from; use
    /// `hero_by_id(me().id)` for the current position and stats.
    pub fn me(&self) -> &Arc<Hero> {
        &self.me
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The configuration this model was built with.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Check if both models share the same graph and pub index instances.
    pub fn shares_topology_with(&self, other: &WorldModel) -> bool {
        Arc::ptr_eq(&self.graph, &other.graph) && Arc::ptr_eq(&self.pubs, &other.pubs)
    }
}
