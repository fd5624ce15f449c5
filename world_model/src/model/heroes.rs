//! Hero indices, rebuilt from the roster on every snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use game_state::{Hero, HeroId, Position};

/// The roster indexed by id and by position.
///
/// Both maps point at the same `Arc<Hero>`, so a hero found by position is
/// the very record found by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroIndex {
    by_position: HashMap<Position, Arc<Hero>>,
    by_id: HashMap<HeroId, Arc<Hero>>,
}

impl HeroIndex {
    /// Index a roster. Later entries win on a shared id or position.
    pub fn from_roster(heroes: &[Hero]) -> Self {
        let mut index = Self {
            by_position: HashMap::with_capacity(heroes.len()),
            by_id: HashMap::with_capacity(heroes.len()),
        };
        for hero in heroes {
            let hero = Arc::new(hero.clone());
            index.by_position.insert(hero.pos, Arc::clone(&hero));
            index.by_id.insert(hero.id, hero);
        }
        index
    }

    /// Get a hero by id.
    pub fn by_id(&self, id: HeroId) -> Option<&Arc<Hero>> {
        self.by_id.get(&id)
    }

    /// Get the hero standing at a position.
    pub fn at(&self, position: Position) -> Option<&Arc<Hero>> {
        self.by_position.get(&position)
    }

    /// Read-only view of the position index.
    pub fn by_position_map(&self) -> &HashMap<Position, Arc<Hero>> {
        &self.by_position
    }

    /// Read-only view of the id index.
    pub fn by_id_map(&self) -> &HashMap<HeroId, Arc<Hero>> {
        &self.by_id
    }

    /// Number of indexed heroes.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
