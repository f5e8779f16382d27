//! Board state: a bounded grid with at most one tile per cell

use super::error::GameError;
use super::tiles::Tile;
use std::collections::HashMap;
use std::fmt;

/// A cell on the board. `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: u16,
    pub y: u16,
}

impl Coordinate {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// The up to four orthogonal neighbours that lie inside a `width` x `height` grid.
    pub fn neighbors(self, width: u16, height: u16) -> impl Iterator<Item = Coordinate> {
        let Coordinate { x, y } = self;
        [
            x.checked_sub(1).map(|nx| Coordinate::new(nx, y)),
            (x + 1 < width).then(|| Coordinate::new(x + 1, y)),
            y.checked_sub(1).map(|ny| Coordinate::new(x, ny)),
            (y + 1 < height).then(|| Coordinate::new(x, y + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Sparse mapping from coordinate to placed tile.
#[derive(Debug, Clone)]
pub struct Board {
    width: u16,
    height: u16,
    tiles: HashMap<Coordinate, Tile>,
}

impl Board {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            tiles: HashMap::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        at.x < self.width && at.y < self.height
    }

    pub fn get(&self, at: Coordinate) -> Option<&Tile> {
        self.tiles.get(&at)
    }

    pub fn is_occupied(&self, at: Coordinate) -> bool {
        self.tiles.contains_key(&at)
    }

    /// Put a tile on an empty, in-bounds cell.
    pub fn place(&mut self, at: Coordinate, tile: Tile) -> Result<(), GameError> {
        if !self.contains(at) {
            return Err(GameError::OutOfBounds(at));
        }
        if self.is_occupied(at) {
            return Err(GameError::OccupiedCell(at));
        }
        self.tiles.insert(at, tile);
        Ok(())
    }

    /// Lift the tile off a cell, if any.
    pub fn take(&mut self, at: Coordinate) -> Option<Tile> {
        self.tiles.remove(&at)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Occupied cells and their tiles, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Tile)> {
        self.tiles.iter().map(|(at, tile)| (*at, tile))
    }

    pub fn occupied(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter().map(|(at, _)| at)
    }
}
