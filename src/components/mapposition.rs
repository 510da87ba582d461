use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition {
            pos: Vec2::new(x, y),
        }
    }
}
