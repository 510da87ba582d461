//! Integration tests for map document loading.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test map_loading
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use isomap::MapError;
use isomap::map::document::Orientation;
use isomap::map::map_loader::{load_map, parse_map};
use isomap::resources::texturestore::{Texture, TextureHandle, TextureSource, TextureStore};

/// Texture collaborator stub returning 128x64 for any path.
struct AnySource(u64);

impl TextureSource for AnySource {
    fn load(&mut self, _path: &Path) -> Result<Arc<Texture>, MapError> {
        self.0 += 1;
        Ok(Arc::new(Texture {
            handle: TextureHandle(self.0),
            width: 128,
            height: 64,
        }))
    }
}

const TERRAIN_TSX: &str = r#"
<tileset name="terrain" tilewidth="32" tileheight="32" tilecount="8" columns="4">
    <image source="terrain.png" width="128" height="64"/>
</tileset>
"#;

/// Write map fixtures into a scratch directory unique to the test.
fn fixture_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("isomap_tests")
        .join(format!("{}_{}", test, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn map_file_loads_tilesets_and_layers() {
    let dir = fixture_dir("full_map");
    fs::write(dir.join("terrain.tsx"), TERRAIN_TSX).unwrap();
    fs::write(
        dir.join("level.tmx"),
        r#"
<map orientation="isometric" tilewidth="64" tileheight="32">
    <tileset firstgid="1" source="terrain.tsx"/>
    <layer width="2" height="2" offsetx="8" offsety="-4">
        <data encoding="csv">
            1,2,
            0,4
        </data>
    </layer>
</map>
"#,
    )
    .unwrap();

    let mut textures = TextureStore::new();
    let mut source = AnySource(0);
    let doc = load_map(&dir.join("level.tmx"), &mut textures, &mut source).unwrap();

    assert_eq!(doc.orientation, Orientation::Isometric);
    assert_eq!((doc.tile_width, doc.tile_height), (64, 32));
    assert_eq!(doc.tilesets.len(), 1);
    assert_eq!(doc.tilesets[0].first_gid, 1);
    assert_eq!(doc.tilesets[0].tileset.name, "terrain");
    assert_eq!(doc.layers.len(), 1);
    let layer = &doc.layers[0];
    assert_eq!((layer.width, layer.height), (2, 2));
    assert_eq!(layer.data, vec![1, 2, 0, 4]);
    assert_eq!((layer.offset_x, layer.offset_y), (8.0, -4.0));
}

#[test]
fn tilesets_are_sorted_by_first_gid() {
    let dir = fixture_dir("sorted_tilesets");
    fs::write(dir.join("a.tsx"), TERRAIN_TSX).unwrap();
    fs::write(dir.join("b.tsx"), TERRAIN_TSX).unwrap();
    fs::write(
        dir.join("level.tmx"),
        r#"
<map orientation="isometric" tilewidth="64" tileheight="32">
    <tileset firstgid="9" source="b.tsx"/>
    <tileset firstgid="1" source="a.tsx"/>
</map>
"#,
    )
    .unwrap();

    let mut textures = TextureStore::new();
    let mut source = AnySource(0);
    let doc = load_map(&dir.join("level.tmx"), &mut textures, &mut source).unwrap();
    assert_eq!(doc.tilesets[0].first_gid, 1);
    assert_eq!(doc.tilesets[1].first_gid, 9);
    // Resolution picks the right range after sorting.
    assert_eq!(doc.find_tile_set(9).map(|(_, l)| l), Some(0));
}

#[test]
fn layer_size_mismatch_is_rejected() {
    let xml = r#"
<map orientation="isometric" tilewidth="64" tileheight="32">
    <layer width="2" height="2">
        <data encoding="csv">1,2,3</data>
    </layer>
</map>
"#;
    let mut textures = TextureStore::new();
    let mut source = AnySource(0);
    let err = parse_map(Path::new("."), xml, &mut textures, &mut source).unwrap_err();
    assert!(matches!(err, MapError::Validation(_)), "got {}", err);
}

#[test]
fn unknown_orientation_is_a_parse_error() {
    let xml = r#"<map orientation="hexagonal" tilewidth="64" tileheight="32"/>"#;
    let mut textures = TextureStore::new();
    let mut source = AnySource(0);
    let err = parse_map(Path::new("."), xml, &mut textures, &mut source).unwrap_err();
    assert!(matches!(err, MapError::Parse(_)));
}

#[test]
fn missing_orientation_is_a_parse_error() {
    let xml = r#"<map tilewidth="64" tileheight="32"/>"#;
    let mut textures = TextureStore::new();
    let mut source = AnySource(0);
    let err = parse_map(Path::new("."), xml, &mut textures, &mut source).unwrap_err();
    assert!(matches!(err, MapError::Parse(_)));
}

#[test]
fn missing_map_file_is_an_io_error() {
    let mut textures = TextureStore::new();
    let mut source = AnySource(0);
    let err = load_map(
        Path::new("does/not/exist.tmx"),
        &mut textures,
        &mut source,
    )
    .unwrap_err();
    assert!(matches!(err, MapError::Io(_)));
}

#[test]
fn broken_tileset_reference_aborts_the_load() {
    let dir = fixture_dir("broken_ref");
    fs::write(
        dir.join("level.tmx"),
        r#"
<map orientation="isometric" tilewidth="64" tileheight="32">
    <tileset firstgid="1" source="missing.tsx"/>
</map>
"#,
    )
    .unwrap();
    let mut textures = TextureStore::new();
    let mut source = AnySource(0);
    let err = load_map(&dir.join("level.tmx"), &mut textures, &mut source).unwrap_err();
    assert!(matches!(err, MapError::Io(_)));
}
