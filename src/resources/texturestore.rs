//! Texture records and the loading collaborator.
//!
//! Decoding image files and uploading them to the GPU is the display
//! backend's job. This crate only needs the decoded pixel dimensions and an
//! opaque renderable handle, so the backend plugs in through the
//! [`TextureSource`] trait and the [`TextureStore`] caches what it returns,
//! keyed by path.

use std::path::Path;
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::error::MapError;

/// Opaque renderable handle issued by the display backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// A loaded texture: backend handle plus decoded pixel dimensions.
#[derive(Debug)]
pub struct Texture {
    pub handle: TextureHandle,
    pub width: u32,
    pub height: u32,
}

/// Resolves a file path to a loaded texture. Implemented by the display
/// backend; tests substitute a stub returning fixed dimensions.
pub trait TextureSource {
    fn load(&mut self, path: &Path) -> Result<Arc<Texture>, MapError>;
}

/// Loaded textures keyed by path. Many tiles alias one entry; entries stay
/// alive as long as any tile references them.
#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<String, Arc<Texture>>,
}

impl TextureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TextureStore {
            map: FxHashMap::default(),
        }
    }

    /// Fetch from the cache or pull through the backend source.
    pub fn load(
        &mut self,
        source: &mut dyn TextureSource,
        path: &Path,
    ) -> Result<Arc<Texture>, MapError> {
        let key = path.to_string_lossy().into_owned();
        if let Some(tex) = self.map.get(&key) {
            return Ok(Arc::clone(tex));
        }
        let tex = source.load(path)?;
        self.map.insert(key, Arc::clone(&tex));
        Ok(tex)
    }

    /// Get a cached texture by its path key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Arc<Texture>> {
        self.map.get(key.as_ref())
    }

    /// Drop all cached entries. Textures still referenced by tiles live on.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
