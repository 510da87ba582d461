//! Orthogonal tile-layer renderer, stub sibling of the isometric one.
//!
//! Shares the capability surface so the frame pipeline can already route
//! orthogonal maps here; the draw path itself is not implemented yet.

use bevy_ecs::prelude::*;
use log::debug;

use crate::map::document::Orientation;
use crate::resources::renderbatch::RenderBatch;
use crate::systems::maprenderer::MapRenderer;

/// Renderer for maps with [`Orientation::Orthogonal`].
pub struct OrthogonalRenderer;

impl MapRenderer for OrthogonalRenderer {
    fn orientation(&self) -> Orientation {
        Orientation::Orthogonal
    }

    fn submit(&self, _world: &mut World, _batch: &mut RenderBatch, entity: Entity) {
        debug!(
            "orthogonal draw path not implemented, entity {:?} skipped",
            entity
        );
    }
}
