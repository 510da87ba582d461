//! Tile atlas data model and grid packing.
//!
//! A [`TileSet`] is built once at load time and read-only afterwards. In
//! sheet mode every tile is a cell cut from one shared texture by
//! [`TileSet::pack_sheet`]; in collection mode each tile carries its own
//! independently-sized texture with a full-texture UV rectangle.

use std::path::PathBuf;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::MapError;
use crate::resources::texturestore::Texture;

/// Normalized texture-coordinate rectangle, top-left (u0,v0) to
/// bottom-right (u1,v1), both in [0,1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl UvRect {
    /// The whole texture.
    pub const FULL: UvRect = UvRect {
        u0: 0.0,
        v0: 0.0,
        u1: 1.0,
        v1: 1.0,
    };

    /// Copy with the U and/or V extents swapped for mirrored sampling.
    pub fn flipped(self, horizontal: bool, vertical: bool) -> UvRect {
        let mut uv = self;
        if horizontal {
            std::mem::swap(&mut uv.u0, &mut uv.u1);
        }
        if vertical {
            std::mem::swap(&mut uv.v0, &mut uv.v1);
        }
        uv
    }
}

/// One drawable tile: a shared texture and the sub-region to sample.
#[derive(Clone, Debug)]
pub struct Tile {
    pub texture: Arc<Texture>,
    pub uv: UvRect,
}

/// A named collection of tiles, either packed from one sheet or assembled
/// from independently-sized images.
#[derive(Debug, Default)]
pub struct TileSet {
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub tile_count: u32,
    pub columns: u32,
    pub spacing: u32,
    pub margin: u32,
    /// Directory the descriptor was loaded from; image paths resolve
    /// against it.
    pub base_dir: PathBuf,
    /// True when tiles are independently-sized images rather than cells of
    /// a shared sheet.
    pub collection: bool,
    tiles: FxHashMap<u32, Tile>,
}

impl TileSet {
    /// Create an empty tileset with the given geometry; spacing and margin
    /// default to 0.
    pub fn new(
        name: impl Into<String>,
        tile_width: u32,
        tile_height: u32,
        tile_count: u32,
        columns: u32,
    ) -> Self {
        TileSet {
            name: name.into(),
            tile_width,
            tile_height,
            tile_count,
            columns,
            ..Default::default()
        }
    }

    /// Check the declared geometry before any image region is computed.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.columns == 0 {
            return Err(MapError::Validation(format!(
                "tileset '{}': columns must be positive",
                self.name
            )));
        }
        if self.tile_count == 0 {
            return Err(MapError::Validation(format!(
                "tileset '{}': tilecount must be positive",
                self.name
            )));
        }
        Ok(())
    }

    /// Pre-size tile storage to the declared tile count.
    pub fn reserve(&mut self) {
        self.tiles.reserve(self.tile_count as usize);
    }

    /// Insert or overwrite the tile stored at a local id.
    pub fn set_tile(&mut self, id: u32, tile: Tile) {
        self.tiles.insert(id, tile);
    }

    /// Strict accessor: querying an id the loader never populated is a
    /// document inconsistency.
    pub fn tile(&self, id: u32) -> Result<&Tile, MapError> {
        self.tiles.get(&id).ok_or_else(|| {
            MapError::Lookup(format!("tileset '{}' has no tile {}", self.name, id))
        })
    }

    /// Render-time accessor: an unpopulated id is a recoverable miss.
    pub fn get(&self, id: u32) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Number of populated tiles. Never exceeds `tile_count` after packing.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Cut the shared sheet into `tile_count` cells, row-major, left to
    /// right. The cursor starts at `(margin, margin)`, advances by
    /// `tile_width + spacing` per column and `tile_height + spacing` per
    /// row. When a row completes, the cell must end exactly one margin
    /// short of the declared sheet edge; anything else means the declared
    /// geometry does not fit the sheet and the whole load fails.
    pub fn pack_sheet(
        &mut self,
        texture: Arc<Texture>,
        sheet_width: u32,
        sheet_height: u32,
    ) -> Result<(), MapError> {
        self.reserve();
        let w = sheet_width as f32;
        let h = sheet_height as f32;
        let mut x = self.margin;
        let mut y = self.margin;
        let mut column = 0u32;
        for id in 0..self.tile_count {
            let uv = UvRect {
                u0: x as f32 / w,
                v0: y as f32 / h,
                u1: (x + self.tile_width) as f32 / w,
                v1: (y + self.tile_height) as f32 / h,
            };
            self.set_tile(
                id,
                Tile {
                    texture: Arc::clone(&texture),
                    uv,
                },
            );
            column += 1;
            if column == self.columns {
                if x + self.tile_width + self.margin != sheet_width {
                    return Err(MapError::Validation(format!(
                        "tileset '{}': row ends at {} but sheet is {} wide",
                        self.name,
                        x + self.tile_width + self.margin,
                        sheet_width
                    )));
                }
                column = 0;
                x = self.margin;
                y += self.tile_height + self.spacing;
            } else {
                x += self.tile_width + self.spacing;
            }
        }
        Ok(())
    }
}
