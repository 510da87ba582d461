//! Isometric tile-layer renderer.
//!
//! Draws every layer of a map entity in document order, each layer
//! cell-by-cell in row-major order, projecting grid cells onto the
//! isometric diamond lattice: within a row the cursor advances by half a
//! cell width and half a cell height per column, and each row starts half a
//! cell left of and below the previous row's start. Failure is always local
//! to a cell; a gid that does not resolve is logged and skipped, never
//! aborting the layer or the frame.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, warn};

use crate::components::mapposition::MapPosition;
use crate::components::tilemap::TileMap;
use crate::map::document::{MapDocument, Orientation};
use crate::map::gid;
use crate::resources::renderbatch::{Color, RenderBatch};
use crate::systems::maprenderer::MapRenderer;

/// Renderer for maps with [`Orientation::Isometric`].
pub struct IsometricRenderer;

impl MapRenderer for IsometricRenderer {
    fn orientation(&self) -> Orientation {
        Orientation::Isometric
    }

    fn submit(&self, world: &mut World, batch: &mut RenderBatch, entity: Entity) {
        let Some(map) = world.get::<TileMap>(entity) else {
            warn!("submit: entity {:?} has no TileMap", entity);
            return;
        };
        let document = std::sync::Arc::clone(&map.document);
        let origin = world
            .get::<MapPosition>(entity)
            .map(|p| p.pos)
            .unwrap_or(Vec2::ZERO);
        draw_document(&document, origin, batch);
    }
}

fn draw_document(document: &MapDocument, origin: Vec2, batch: &mut RenderBatch) {
    let nominal_w = document.tile_width as f32;
    let nominal_h = document.tile_height as f32;
    let step = Vec2::new(nominal_w / 2.0, nominal_h / 2.0);

    for layer in &document.layers {
        let layer_origin = origin + Vec2::new(layer.offset_x, layer.offset_y);
        for y in 0..layer.height {
            // Each row starts half a cell left of and below the previous
            // one, producing the diamond lattice.
            let mut cursor = layer_origin + Vec2::new(-step.x, step.y) * y as f32;
            for x in 0..layer.width {
                let cell = cursor;
                cursor += step;

                let decoded = gid::decode(layer.gid_at(x, y));
                if decoded.index == 0 {
                    continue;
                }
                if decoded.diagonal {
                    warn!(
                        "cell ({}, {}): diagonal flip is unsupported, skipping",
                        x, y
                    );
                    continue;
                }
                let Some((tileset, local)) = document.find_tile_set(decoded.index) else {
                    debug!(
                        "cell ({}, {}): gid {} owned by no tileset",
                        x, y, decoded.index
                    );
                    continue;
                };
                let Some(tile) = tileset.get(local) else {
                    debug!(
                        "cell ({}, {}): tileset '{}' never populated tile {}",
                        x, y, tileset.name, local
                    );
                    continue;
                };

                // Collection tiles draw at their own pixel size, anchored
                // so their bottom meets the nominal cell's bottom edge.
                let (width, height, position) = if tileset.collection {
                    let tex_w = tile.texture.width as f32;
                    let tex_h = tile.texture.height as f32;
                    (tex_w, tex_h, cell + Vec2::new(0.0, nominal_h - tex_h))
                } else {
                    (nominal_w, nominal_h, cell)
                };

                let uv = tile.uv.flipped(decoded.flip_h, decoded.flip_v);
                batch.draw_quad(
                    tile.texture.handle,
                    position,
                    Vec2::ONE,
                    width,
                    height,
                    uv,
                    Color::WHITE,
                );
            }
        }
    }
}
