//! The player's rack of unplaced tiles

use super::tiles::{Tile, TileId};

/// Ordered tiles available to the player. Never holds two tiles with the same id.
#[derive(Debug, Clone, Default)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    pub fn new(tiles: Vec<Tile>) -> Self {
        let mut rack = Self::default();
        for tile in tiles {
            rack.push(tile);
        }
        rack
    }

    /// Append a tile. A tile whose id is already in the rack is ignored and
    /// `false` is returned.
    pub fn push(&mut self, tile: Tile) -> bool {
        if self.contains(tile.id) {
            tracing::warn!(id = %tile.id, "ignoring duplicate tile in rack");
            return false;
        }
        self.tiles.push(tile);
        true
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.iter().any(|t| t.id == id)
    }

    /// Remove a tile by id, keeping the order of the rest.
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let pos = self.tiles.iter().position(|t| t.id == id)?;
        Some(self.tiles.remove(pos))
    }

    /// Clear the "new" highlight on every tile.
    pub fn clear_new_flags(&mut self) {
        for tile in &mut self.tiles {
            tile.is_new = false;
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The rack letters as a string, in order.
    pub fn as_string(&self) -> String {
        self.tiles.iter().map(|t| t.letter).collect()
    }
}
