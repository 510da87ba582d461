//! Batched quad accumulator.
//!
//! Renderers record textured quads here instead of issuing draw calls; the
//! display backend consumes the commands at the end of the frame. The batch
//! also owns the painter's-order depth counter: every recorded quad gets a
//! strictly larger depth than the one before it, across layers and across
//! the maps submitted within one frame. Single writer per frame.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::map::tileset::UvRect;
use crate::resources::texturestore::TextureHandle;

/// Depth added per recorded quad, a painter's-order proxy rather than true
/// depth buffering.
pub const DEPTH_STEP: f32 = 0.1;

/// RGBA color modulation applied to a quad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// No modulation; the texture's own colors.
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}

/// One textured quad to draw.
#[derive(Clone, Copy, Debug)]
pub struct QuadCommand {
    pub texture: TextureHandle,
    /// Top-left corner in screen space.
    pub position: Vec2,
    pub scale: Vec2,
    pub width: f32,
    pub height: f32,
    pub uv: UvRect,
    pub tint: Color,
    /// Assigned by the batch, strictly increasing within a frame.
    pub depth: f32,
}

/// Frame-local accumulator of quad commands.
#[derive(Resource, Debug, Default)]
pub struct RenderBatch {
    pub commands: Vec<QuadCommand>,
    next_depth: f32,
}

impl RenderBatch {
    /// Reset for a new frame: drop last frame's commands and rewind the
    /// depth counter.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.next_depth = 0.0;
    }

    /// Record a quad at the next depth slot.
    pub fn draw_quad(
        &mut self,
        texture: TextureHandle,
        position: Vec2,
        scale: Vec2,
        width: f32,
        height: f32,
        uv: UvRect,
        tint: Color,
    ) {
        self.next_depth += DEPTH_STEP;
        self.commands.push(QuadCommand {
            texture,
            position,
            scale,
            width,
            height,
            uv,
            tint,
            depth: self.next_depth,
        });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
