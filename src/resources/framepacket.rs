//! Per-frame draw list of visible map entities.

use bevy_ecs::prelude::{Entity, Resource};
use glam::Vec2;

use crate::map::document::Orientation;

/// One map entity selected for drawing this frame. The orientation tag
/// doubles as the handle of the renderer that will submit it.
#[derive(Clone, Copy, Debug)]
pub struct VisibleMap {
    pub entity: Entity,
    pub orientation: Orientation,
    pub position: Vec2,
}

/// Shared per-frame list the visibility queries publish into. Cleared at
/// the top of every frame; entries keep the order the ECS views yielded
/// them in.
#[derive(Resource, Debug, Default)]
pub struct FramePacket {
    pub visibles: Vec<VisibleMap>,
}

impl FramePacket {
    pub fn clear(&mut self) {
        self.visibles.clear();
    }

    pub fn push(&mut self, visible: VisibleMap) {
        self.visibles.push(visible);
    }
}
