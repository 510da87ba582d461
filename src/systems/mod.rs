//! Engine systems.
//!
//! Submodules overview
//! - [`maprenderer`] – the renderer capability trait and orientation dispatch
//! - [`isometric`] – diamond-projection tile-layer renderer
//! - [`orthogonal`] – stub sibling for orthogonal maps

pub mod isometric;
pub mod maprenderer;
pub mod orthogonal;
