//! Property-based tests for building and advancing world models.
//!
//! Boards are generated from the full tile alphabet; heroes 1 and 2 are always
//! in the roster so every `$n` / `@n` code resolves. The owner-change property
//! relies on that: ids missing from the roster all decode as unclaimed under
//! the default policy, so a change between two unknown ids is not visible.

use proptest::prelude::*;

use game_state::{Board, GameState, Hero, Position, TileCode};
use world_model::WorldModel;

fn tile() -> impl Strategy<Value = TileCode> {
    prop_oneof![
        3 => Just(TileCode::Floor),
        2 => Just(TileCode::Barrier),
        1 => Just(TileCode::HeroOnFloor(1)),
        1 => Just(TileCode::Pub),
        1 => Just(TileCode::Mine(None)),
        1 => Just(TileCode::Mine(Some(1))),
        1 => Just(TileCode::Mine(Some(2))),
    ]
}

fn owner() -> impl Strategy<Value = Option<u32>> {
    prop_oneof![Just(None), Just(Some(1)), Just(Some(2))]
}

fn board() -> impl Strategy<Value = (usize, Vec<TileCode>)> {
    (1usize..9).prop_flat_map(|size| (Just(size), prop::collection::vec(tile(), size * size)))
}

fn snapshot(size: usize, tiles: &[TileCode], heroes: Vec<Hero>) -> GameState {
    let encoded: String = tiles.iter().map(ToString::to_string).collect();
    let me = heroes[0].clone();
    GameState::new(Board::new(size, encoded), heroes, me)
}

fn roster(size: usize) -> Vec<Hero> {
    let far = (size - 1) as i32;
    vec![
        Hero::new(1, "Alpha", Position::new(0, 0)),
        Hero::new(2, "Beta", Position::new(far, far)),
    ]
}

fn position(size: usize, index: usize) -> Position {
    Position::new((index % size) as i32, (index / size) as i32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Barriers leave no trace in the graph, mines, or pubs.
    #[test]
    fn prop_barriers_absent((size, tiles) in board()) {
        let model = WorldModel::build(&snapshot(size, &tiles, roster(size))).unwrap();

        for (index, tile) in tiles.iter().enumerate() {
            let pos = position(size, index);
            let barrier = *tile == TileCode::Barrier;
            prop_assert_eq!(model.contains(pos), !barrier);
            if barrier {
                prop_assert!(!model.is_mine(pos));
                prop_assert!(!model.is_pub(pos));
            }
        }
        prop_assert_eq!(
            model.graph().len(),
            tiles.iter().filter(|t| **t != TileCode::Barrier).count()
        );
    }

    /// Edges are diagonal and reciprocal, and never touch a mine or pub.
    #[test]
    fn prop_edges_symmetric_and_plain((size, tiles) in board()) {
        let model = WorldModel::build(&snapshot(size, &tiles, roster(size))).unwrap();

        for cell in model.graph().cells() {
            let from = cell.position();
            if model.is_mine(from) || model.is_pub(from) {
                prop_assert!(cell.neighbors().is_empty());
                continue;
            }
            for &to in cell.neighbors() {
                prop_assert_eq!((to.x - from.x).abs(), 1);
                prop_assert_eq!((to.y - from.y).abs(), 1);
                prop_assert!(!model.is_mine(to) && !model.is_pub(to));
                prop_assert!(model.neighbors(to).contains(&from));
            }
            for diagonal in from.diagonals() {
                if model.is_walkable(diagonal) {
                    prop_assert!(cell.is_adjacent_to(diagonal));
                }
            }
        }
    }

    /// Advancing to the same snapshot changes nothing but shares the topology.
    #[test]
    fn prop_advance_same_snapshot((size, tiles) in board()) {
        let state = snapshot(size, &tiles, roster(size));
        let model = WorldModel::build(&state).unwrap();
        let next = model.advance(&state).unwrap();

        prop_assert!(model.shares_topology_with(&next));
        prop_assert_eq!(next.mines(), model.mines());
        prop_assert_eq!(next.heroes_by_id(), model.heroes_by_id());
        prop_assert_eq!(next.heroes_by_position(), model.heroes_by_position());
    }

    /// A mine's owner changes exactly when its ownership character does,
    /// given every owner id is in the roster.
    #[test]
    fn prop_owner_changes_follow_tiles(
        (size, tiles) in board(),
        owners in prop::collection::vec(owner(), 64),
    ) {
        let first = snapshot(size, &tiles, roster(size));
        let model = WorldModel::build(&first).unwrap();

        let retagged: Vec<TileCode> = tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| match tile {
                TileCode::Mine(_) => TileCode::Mine(owners[index]),
                other => *other,
            })
            .collect();
        let next = model.advance(&snapshot(size, &retagged, roster(size))).unwrap();

        prop_assert!(model.shares_topology_with(&next));
        prop_assert_eq!(next.mines().len(), model.mines().len());
        for (index, (before, after)) in tiles.iter().zip(&retagged).enumerate() {
            let pos = position(size, index);
            if let (TileCode::Mine(old), TileCode::Mine(new)) = (before, after) {
                let old_owner = model.mine(pos).unwrap().owner_id();
                let new_owner = next.mine(pos).unwrap().owner_id();
                prop_assert_eq!(old_owner, *old);
                prop_assert_eq!(new_owner, *new);
                prop_assert_eq!(old_owner != new_owner, old != new);
            }
        }
    }
}
