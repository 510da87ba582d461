//! ECS resources made available to systems.
//!
//! Overview
//! - `framepacket` – per-frame list of visible map entities to draw
//! - `renderbatch` – quad-command accumulator consumed by the display backend
//! - `texturestore` – loaded textures keyed by path, plus the loading seam

pub mod framepacket;
pub mod renderbatch;
pub mod texturestore;
