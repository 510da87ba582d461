//! Tile-map data model and loaders.
//!
//! This module groups everything built at load time and read back each
//! frame by the renderers:
//!
//! - [`gid`] – global tile id decoding (flip bits, empty cells)
//! - [`tileset`] – tile atlas with per-tile UV rectangles and grid packing
//! - [`document`] – map document, layers, and gid→tileset resolution
//! - [`tileset_loader`] – parser for external tileset descriptors
//! - [`map_loader`] – parser for map documents referencing those tilesets

pub mod document;
pub mod gid;
pub mod map_loader;
pub mod tileset;
pub mod tileset_loader;
