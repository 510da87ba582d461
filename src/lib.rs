//! Isometric tile-map subsystem.
//!
//! Loads external tileset descriptors into tile atlases with per-tile UV
//! rectangles, aggregates them into map documents, and renders isometric
//! tile-grid layers each frame through the ECS query pipeline. The display
//! backend, the ECS core (bevy_ecs), and image decoding are external
//! collaborators.

pub mod components;
pub mod error;
pub mod map;
pub mod resources;
pub mod systems;

pub use error::MapError;
