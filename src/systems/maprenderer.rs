//! Map renderer capability trait.
//!
//! Each projection mode implements the same three-entry surface: one-time
//! `bootstrap`, the per-frame visibility query, and per-entity `submit`.
//! The frame pipeline selects the implementation by the map's orientation
//! tag, so adding a projection is one more variant, not a class hierarchy.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::tilemap::TileMap;
use crate::map::document::Orientation;
use crate::resources::framepacket::{FramePacket, VisibleMap};
use crate::resources::renderbatch::RenderBatch;
use crate::resources::texturestore::TextureStore;
use crate::systems::isometric::IsometricRenderer;
use crate::systems::orthogonal::OrthogonalRenderer;

/// Per-orientation renderer surface invoked by the owning pipeline.
pub trait MapRenderer {
    /// The orientation this renderer draws.
    fn orientation(&self) -> Orientation;

    /// One-time registration of the resources the pipeline shares.
    fn bootstrap(&self, world: &mut World) {
        world.init_resource::<FramePacket>();
        world.init_resource::<RenderBatch>();
        world.init_resource::<TextureStore>();
    }

    /// Select the map entities this renderer will draw this frame and
    /// publish them to the shared packet. Read-only over ECS state; the
    /// view's iteration order is kept as-is.
    fn query_visibles(&self, world: &mut World, packet: &mut FramePacket) {
        let mut query = world.query::<(Entity, &MapPosition, &TileMap)>();
        for (entity, position, map) in query.iter(world) {
            if map.orientation() == self.orientation() {
                packet.push(VisibleMap {
                    entity,
                    orientation: self.orientation(),
                    position: position.pos,
                });
            }
        }
    }

    /// Draw every layer of one published map entity into the batch.
    fn submit(&self, world: &mut World, batch: &mut RenderBatch, entity: Entity);
}

/// Tagged-variant dispatch from a map's orientation to its renderer.
pub fn renderer_for(orientation: Orientation) -> &'static dyn MapRenderer {
    match orientation {
        Orientation::Isometric => &IsometricRenderer,
        Orientation::Orthogonal => &OrthogonalRenderer,
    }
}
