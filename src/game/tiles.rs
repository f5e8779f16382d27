//! Letter tiles, id minting, and the shuffled starting pool

use rand::prelude::*;
use std::fmt;

/// Letter counts for the full pile (144 tiles).
pub const LETTER_DISTRIBUTION: [(char, usize); 26] = [
    ('A', 13),
    ('B', 3),
    ('C', 3),
    ('D', 6),
    ('E', 18),
    ('F', 3),
    ('G', 4),
    ('H', 3),
    ('I', 12),
    ('J', 2),
    ('K', 2),
    ('L', 5),
    ('M', 3),
    ('N', 8),
    ('O', 11),
    ('P', 3),
    ('Q', 2),
    ('R', 9),
    ('S', 6),
    ('T', 9),
    ('U', 6),
    ('V', 3),
    ('W', 3),
    ('X', 2),
    ('Y', 3),
    ('Z', 2),
];

/// Tiles dealt into a single-player game.
pub const DEFAULT_TOTAL_TILES: usize = 76;
/// Tiles that start in the rack.
pub const DEFAULT_RACK_SIZE: usize = 21;

/// Stable tile identity. Displayed as `tile-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile-{}", self.0)
    }
}

/// A single letter tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub letter: char,
    /// Freshly drawn; only used for highlighting
    pub is_new: bool,
}

/// Mints tile ids. Ids are never handed out twice by the same generator.
#[derive(Debug, Default)]
pub struct TileIdGenerator {
    last: u64,
}

impl TileIdGenerator {
    pub fn next_id(&mut self) -> TileId {
        self.last += 1;
        TileId(self.last)
    }

    /// Create a tile with a fresh id.
    pub fn tile(&mut self, letter: char) -> Tile {
        Tile {
            id: self.next_id(),
            letter: letter.to_ascii_uppercase(),
            is_new: false,
        }
    }

    /// Re-issue a drawn tile under a fresh id, flagged as new.
    pub fn redraw(&mut self, tile: Tile) -> Tile {
        Tile {
            id: self.next_id(),
            letter: tile.letter,
            is_new: true,
        }
    }
}

/// Starting tiles split into the player's rack and the reserve pool.
#[derive(Debug, Clone)]
pub struct Deal {
    pub rack: Vec<Tile>,
    pub reserve: Vec<Tile>,
}

/// Build a shuffled pool of `min(target, sum(counts))` tiles.
///
/// Every tile of the distribution is laid out, the whole bag is shuffled, and
/// the first `target` tiles are kept. Truncating a shuffled bag keeps the
/// letter mix random but not exactly proportional to the distribution.
pub fn generate_pool<R: Rng>(
    distribution: &[(char, usize)],
    target: usize,
    ids: &mut TileIdGenerator,
    rng: &mut R,
) -> Vec<Tile> {
    let mut letters: Vec<char> = distribution
        .iter()
        .flat_map(|&(letter, count)| std::iter::repeat_n(letter, count))
        .collect();

    letters.shuffle(rng);
    letters.truncate(target);

    letters.into_iter().map(|letter| ids.tile(letter)).collect()
}

/// Generate a pool and split off the first `rack_size` tiles as the rack.
pub fn deal<R: Rng>(
    distribution: &[(char, usize)],
    target: usize,
    rack_size: usize,
    ids: &mut TileIdGenerator,
    rng: &mut R,
) -> Deal {
    let mut reserve = generate_pool(distribution, target, ids, rng);
    let rack_len = rack_size.min(reserve.len());
    let rack: Vec<Tile> = reserve.drain(..rack_len).collect();
    Deal { rack, reserve }
}
