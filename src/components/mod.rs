//! ECS components for entities.
//!
//! Submodules overview:
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`tilemap`] – attaches a shared map document to an entity

pub mod mapposition;
pub mod tilemap;
