//! Map document: layers, tileset ranges, and gid resolution.

use crate::map::tileset::TileSet;

/// Map-wide projection mode. Selects which renderer draws the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Orthogonal,
    Isometric,
}

impl Orientation {
    /// Parse the descriptor attribute value.
    pub fn from_attr(value: &str) -> Option<Orientation> {
        match value {
            "orthogonal" => Some(Orientation::Orthogonal),
            "isometric" => Some(Orientation::Isometric),
            _ => None,
        }
    }
}

/// One drawable plane of a map: a width x height grid of gids, row-major.
/// Layers stack in document order, later layers on top.
#[derive(Debug, Default)]
pub struct Layer {
    pub width: u32,
    pub height: u32,
    /// Raw gids, `width * height` entries, row-major.
    pub data: Vec<u32>,
    /// Pixel offset applied uniformly to the layer.
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Layer {
    /// Gid at cell (x, y). Callers stay within the layer bounds.
    pub fn gid_at(&self, x: u32, y: u32) -> u32 {
        self.data[(y * self.width + x) as usize]
    }
}

/// A tileset together with the first gid of its contiguous id range.
#[derive(Debug)]
pub struct TileSetEntry {
    pub first_gid: u32,
    pub tileset: TileSet,
}

/// An immutable map: tilesets owning ascending gid ranges plus the ordered
/// layer stack. Built once by the loader, shared read-only with every
/// entity that draws it.
#[derive(Debug)]
pub struct MapDocument {
    pub orientation: Orientation,
    /// Nominal cell size; individual tilesets may differ.
    pub tile_width: u32,
    pub tile_height: u32,
    /// Sorted ascending by `first_gid`, ranges contiguous and disjoint.
    pub tilesets: Vec<TileSetEntry>,
    pub layers: Vec<Layer>,
}

impl MapDocument {
    /// Resolve a global id to its owning tileset and the tileset-local
    /// index. Returns `None` when the gid falls below the first range or
    /// past the owning tileset's declared tile count; that is a recoverable
    /// miss, not an error.
    pub fn find_tile_set(&self, global_id: u32) -> Option<(&TileSet, u32)> {
        let idx = self
            .tilesets
            .partition_point(|e| e.first_gid <= global_id)
            .checked_sub(1)?;
        let entry = &self.tilesets[idx];
        let local = global_id - entry.first_gid;
        if local >= entry.tileset.tile_count {
            return None;
        }
        Some((&entry.tileset, local))
    }
}
