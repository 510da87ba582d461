//! Tile map component.
//!
//! Attaches a loaded [`MapDocument`] to an entity. The document is shared:
//! several entities may draw the same map, and the document lives until the
//! last referencing component is dropped.

use std::sync::Arc;

use bevy_ecs::prelude::Component;

use crate::map::document::{MapDocument, Orientation};

/// Reference to a loaded map document. Entities carrying both this and a
/// [`MapPosition`](crate::components::mapposition::MapPosition) are picked
/// up by the renderer matching the document's orientation.
#[derive(Component, Clone)]
pub struct TileMap {
    pub document: Arc<MapDocument>,
}

impl TileMap {
    pub fn new(document: Arc<MapDocument>) -> Self {
        TileMap { document }
    }

    pub fn orientation(&self) -> Orientation {
        self.document.orientation
    }
}
