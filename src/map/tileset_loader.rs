//! Tileset descriptor parser.
//!
//! Reads the external tileset format: a root `tileset` element with the
//! geometry attributes, then either one `image` child (sheet mode, cut by
//! grid packing) or per-id `tile` children whose nested `image` elements
//! each load their own texture (collection mode). A nested `animation`
//! element is recognized and skipped; playback is out of scope.
//!
//! Attributes are dispatched through declarative `(name, setter)` tables,
//! so supporting a new field is a single entry, and unknown attributes are
//! ignored. Parsing is pure given the descriptor text, the base directory,
//! and the texture collaborator.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::MapError;
use crate::map::tileset::{Tile, TileSet, UvRect};
use crate::resources::texturestore::{TextureSource, TextureStore};

/// Parse an integer attribute value, naming the field on failure.
pub(crate) fn parse_u32(field: &str, value: &str) -> Result<u32, MapError> {
    value
        .parse()
        .map_err(|_| MapError::Parse(format!("{}: invalid integer '{}'", field, value)))
}

pub(crate) fn parse_f32(field: &str, value: &str) -> Result<f32, MapError> {
    value
        .parse()
        .map_err(|_| MapError::Parse(format!("{}: invalid number '{}'", field, value)))
}

/// Run every recognized attribute of `element` through its setter.
/// Unrecognized attributes are ignored by contract.
pub(crate) fn scan_attrs<T>(
    element: &BytesStart,
    target: &mut T,
    table: &[(&str, fn(&mut T, &str) -> Result<(), MapError>)],
) -> Result<(), MapError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| MapError::Parse(format!("bad attribute: {}", e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|_| MapError::Parse("attribute name is not UTF-8".into()))?;
        if let Some((_, setter)) = table.iter().find(|(name, _)| *name == key) {
            let value = std::str::from_utf8(&attr.value)
                .map_err(|_| MapError::Parse(format!("{}: value is not UTF-8", key)))?;
            setter(target, value)?;
        }
    }
    Ok(())
}

const TILESET_ATTRS: &[(&str, fn(&mut TileSet, &str) -> Result<(), MapError>)] = &[
    ("name", |ts, v| {
        ts.name = v.to_string();
        Ok(())
    }),
    ("tilewidth", |ts, v| {
        ts.tile_width = parse_u32("tilewidth", v)?;
        Ok(())
    }),
    ("tileheight", |ts, v| {
        ts.tile_height = parse_u32("tileheight", v)?;
        Ok(())
    }),
    ("tilecount", |ts, v| {
        ts.tile_count = parse_u32("tilecount", v)?;
        Ok(())
    }),
    ("columns", |ts, v| {
        ts.columns = parse_u32("columns", v)?;
        Ok(())
    }),
    ("spacing", |ts, v| {
        ts.spacing = parse_u32("spacing", v)?;
        Ok(())
    }),
    ("margin", |ts, v| {
        ts.margin = parse_u32("margin", v)?;
        Ok(())
    }),
];

const TILE_ATTRS: &[(&str, fn(&mut Option<u32>, &str) -> Result<(), MapError>)] =
    &[("id", |id, v| {
        *id = Some(parse_u32("id", v)?);
        Ok(())
    })];

/// Attributes of an `image` element.
#[derive(Default)]
struct ImageRef {
    source: String,
    width: u32,
    height: u32,
}

const IMAGE_ATTRS: &[(&str, fn(&mut ImageRef, &str) -> Result<(), MapError>)] = &[
    ("source", |img, v| {
        img.source = v.to_string();
        Ok(())
    }),
    ("width", |img, v| {
        img.width = parse_u32("width", v)?;
        Ok(())
    }),
    ("height", |img, v| {
        img.height = parse_u32("height", v)?;
        Ok(())
    }),
];

impl ImageRef {
    fn parse(element: &BytesStart) -> Result<ImageRef, MapError> {
        let mut img = ImageRef::default();
        scan_attrs(element, &mut img, IMAGE_ATTRS)?;
        if img.source.is_empty() {
            return Err(MapError::Parse("image: missing source".into()));
        }
        if img.width == 0 || img.height == 0 {
            return Err(MapError::Parse(format!(
                "image '{}': missing or zero width/height",
                img.source
            )));
        }
        Ok(img)
    }
}

/// Read a tileset descriptor file and build the tile atlas.
pub fn load_tileset(
    path: &Path,
    textures: &mut TextureStore,
    source: &mut dyn TextureSource,
) -> Result<TileSet, MapError> {
    let text = std::fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    parse_tileset(base_dir, &text, textures, source)
}

/// Parse a tileset descriptor from text. `base_dir` resolves relative image
/// paths.
pub fn parse_tileset(
    base_dir: &Path,
    xml: &str,
    textures: &mut TextureStore,
    source: &mut dyn TextureSource,
) -> Result<TileSet, MapError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut tileset = TileSet::default();
    tileset.base_dir = base_dir.to_path_buf();
    let mut seen_root = false;
    // Id of the <tile> element being parsed, None at sheet level.
    let mut current_tile: Option<u32> = None;
    let mut in_animation = false;

    // Shared by the Start and Empty arms; an image child behaves the same
    // either way.
    fn handle_image(
        element: &BytesStart,
        tileset: &mut TileSet,
        current_tile: Option<u32>,
        textures: &mut TextureStore,
        source: &mut dyn TextureSource,
    ) -> Result<(), MapError> {
        let img = ImageRef::parse(element)?;
        match current_tile {
            // Sheet mode: one shared image cut into cells. The declared
            // geometry is checked before the image is even loaded.
            None => {
                tileset.validate()?;
                tileset.collection = false;
                let tex = textures.load(source, &tileset.base_dir.join(&img.source))?;
                tileset.pack_sheet(tex, img.width, img.height)?;
            }
            // Collection mode: this one id gets its own independently-sized
            // texture, full UV.
            Some(id) => {
                tileset.collection = true;
                let tex = textures.load(source, &tileset.base_dir.join(&img.source))?;
                tileset.set_tile(
                    id,
                    Tile {
                        texture: tex,
                        uv: UvRect::FULL,
                    },
                );
            }
        }
        Ok(())
    }

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if !in_animation => match e.name().as_ref() {
                b"tileset" => {
                    scan_attrs(&e, &mut tileset, TILESET_ATTRS)?;
                    seen_root = true;
                }
                b"tile" => {
                    if !seen_root {
                        return Err(MapError::Parse("tile element outside tileset".into()));
                    }
                    let mut id: Option<u32> = None;
                    scan_attrs(&e, &mut id, TILE_ATTRS)?;
                    let id = id.ok_or_else(|| MapError::Parse("tile: missing id".into()))?;
                    current_tile = Some(id);
                }
                // Recognized but not acted upon; skip everything inside.
                b"animation" => in_animation = true,
                b"image" => {
                    if !seen_root {
                        return Err(MapError::Parse("image element outside tileset".into()));
                    }
                    handle_image(&e, &mut tileset, current_tile, textures, source)?;
                }
                _ => {}
            },
            // Self-closing elements have no End event, so they never change
            // the nesting state.
            Ok(Event::Empty(e)) if !in_animation => match e.name().as_ref() {
                b"tileset" => {
                    scan_attrs(&e, &mut tileset, TILESET_ATTRS)?;
                    seen_root = true;
                }
                b"image" => {
                    if !seen_root {
                        return Err(MapError::Parse("image element outside tileset".into()));
                    }
                    handle_image(&e, &mut tileset, current_tile, textures, source)?;
                }
                _ => {}
            },
            Ok(Event::Start(_)) | Ok(Event::Empty(_)) => {}
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"tile" => current_tile = None,
                b"animation" => in_animation = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(e.into()),
        }
    }

    if !seen_root {
        return Err(MapError::Parse("no tileset element found".into()));
    }
    Ok(tileset)
}
