//! Tile codes: the two-character cell encoding used in the board string.

use crate::entities::HeroId;

/// Width in bytes of one encoded cell.
pub const TILE_WIDTH: usize = 2;

/// A decoded tile code.
///
/// | code   | tile                          |
/// |--------|-------------------------------|
/// | `##`   | barrier (impassable wood)     |
/// | `  `   | open floor                    |
/// | `@n`   | open floor with hero `n` on it|
/// | `[]`   | pub (tavern)                  |
/// | `$-`   | unclaimed mine                |
/// | `$n`   | mine owned by hero `n`        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileCode {
    Barrier,
    Floor,
    HeroOnFloor(HeroId),
    Pub,
    /// `None` = unclaimed.
    Mine(Option<HeroId>),
}

impl TileCode {
    /// Parse a two-character code. Returns `None` for anything unrecognized.
    pub fn parse(code: &str) -> Option<Self> {
        match code.as_bytes() {
            [first, second] => Self::from_bytes([*first, *second]),
            _ => None,
        }
    }

    /// Parse a code from its two raw bytes.
    pub fn from_bytes(code: [u8; TILE_WIDTH]) -> Option<Self> {
        match code {
            [b'#', b'#'] => Some(TileCode::Barrier),
            [b'$', owner] => Self::parse_owner(owner).map(TileCode::Mine),
            [b'[', b']'] => Some(TileCode::Pub),
            [b' ', b' '] => Some(TileCode::Floor),
            [b'@', id] => parse_hero_digit(id).map(TileCode::HeroOnFloor),
            _ => None,
        }
    }

    /// Parse the ownership character of a mine code (its second byte).
    ///
    /// `Some(None)` is an unclaimed mine; `None` means the byte is not an
    /// ownership character at all.
    pub fn parse_owner(owner: u8) -> Option<Option<HeroId>> {
        match owner {
            b'-' => Some(None),
            _ => parse_hero_digit(owner).map(Some),
        }
    }

    /// Whether a cell exists for this tile in the board graph.
    pub fn is_walkable(self) -> bool {
        !matches!(self, TileCode::Barrier)
    }

    /// Mines and pubs are destinations, never thoroughfares.
    pub fn is_destination(self) -> bool {
        matches!(self, TileCode::Mine(_) | TileCode::Pub)
    }
}

fn parse_hero_digit(byte: u8) -> Option<HeroId> {
    char::from(byte).to_digit(10)
}

impl std::fmt::Display for TileCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileCode::Barrier => write!(f, "##"),
            TileCode::Floor => write!(f, "  "),
            TileCode::HeroOnFloor(id) => write!(f, "@{}", id),
            TileCode::Pub => write!(f, "[]"),
            TileCode::Mine(None) => write!(f, "$-"),
            TileCode::Mine(Some(id)) => write!(f, "${}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(TileCode::parse("##"), Some(TileCode::Barrier));
        assert_eq!(TileCode::parse("  "), Some(TileCode::Floor));
        assert_eq!(TileCode::parse("@4"), Some(TileCode::HeroOnFloor(4)));
        assert_eq!(TileCode::parse("[]"), Some(TileCode::Pub));
        assert_eq!(TileCode::parse("$-"), Some(TileCode::Mine(None)));
        assert_eq!(TileCode::parse("$3"), Some(TileCode::Mine(Some(3))));
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        assert_eq!(TileCode::parse("$x"), None);
        assert_eq!(TileCode::parse("@-"), None);
        assert_eq!(TileCode::parse("]["), None);
        assert_eq!(TileCode::parse("#"), None);
        assert_eq!(TileCode::parse("###"), None);
        assert_eq!(TileCode::parse("é"), None);
    }

    #[test]
    fn test_parse_owner() {
        assert_eq!(TileCode::parse_owner(b'-'), Some(None));
        assert_eq!(TileCode::parse_owner(b'2'), Some(Some(2)));
        assert_eq!(TileCode::parse_owner(b'?'), None);
    }

    #[test]
    fn test_display_matches_parse() {
        for code in ["##", "  ", "@1", "[]", "$-", "$2"] {
            assert_eq!(TileCode::parse(code).unwrap().to_string(), code);
        }
    }

    #[test]
    fn test_tile_classes() {
        assert!(!TileCode::Barrier.is_walkable());
        assert!(TileCode::Pub.is_walkable());
        assert!(TileCode::Pub.is_destination());
        assert!(TileCode::Mine(None).is_destination());
        assert!(!TileCode::HeroOnFloor(1).is_destination());
        assert!(!TileCode::Floor.is_destination());
    }
}
