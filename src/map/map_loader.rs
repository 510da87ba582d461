//! Map document parser.
//!
//! Reads a map file referencing external tileset descriptors: a root `map`
//! element with `orientation`, `tilewidth`, `tileheight`; `tileset`
//! children carrying `firstgid` and the descriptor `source` path; `layer`
//! children whose `data` child holds the CSV-encoded gid grid. Referenced
//! descriptors are loaded through [`tileset_loader`](super::tileset_loader)
//! relative to the map's directory.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::MapError;
use crate::map::document::{Layer, MapDocument, Orientation, TileSetEntry};
use crate::map::tileset_loader::{load_tileset, parse_f32, parse_u32, scan_attrs};
use crate::resources::texturestore::{TextureSource, TextureStore};

#[derive(Default)]
struct MapHeader {
    orientation: Option<Orientation>,
    tile_width: u32,
    tile_height: u32,
}

const MAP_ATTRS: &[(&str, fn(&mut MapHeader, &str) -> Result<(), MapError>)] = &[
    ("orientation", |m, v| {
        m.orientation = Some(
            Orientation::from_attr(v)
                .ok_or_else(|| MapError::Parse(format!("unknown orientation '{}'", v)))?,
        );
        Ok(())
    }),
    ("tilewidth", |m, v| {
        m.tile_width = parse_u32("tilewidth", v)?;
        Ok(())
    }),
    ("tileheight", |m, v| {
        m.tile_height = parse_u32("tileheight", v)?;
        Ok(())
    }),
];

#[derive(Default)]
struct TileSetRef {
    first_gid: u32,
    source: String,
}

const TILESET_REF_ATTRS: &[(&str, fn(&mut TileSetRef, &str) -> Result<(), MapError>)] = &[
    ("firstgid", |t, v| {
        t.first_gid = parse_u32("firstgid", v)?;
        Ok(())
    }),
    ("source", |t, v| {
        t.source = v.to_string();
        Ok(())
    }),
];

const LAYER_ATTRS: &[(&str, fn(&mut Layer, &str) -> Result<(), MapError>)] = &[
    ("width", |l, v| {
        l.width = parse_u32("width", v)?;
        Ok(())
    }),
    ("height", |l, v| {
        l.height = parse_u32("height", v)?;
        Ok(())
    }),
    ("offsetx", |l, v| {
        l.offset_x = parse_f32("offsetx", v)?;
        Ok(())
    }),
    ("offsety", |l, v| {
        l.offset_y = parse_f32("offsety", v)?;
        Ok(())
    }),
];

/// Read a map file and build the document, loading every referenced
/// tileset descriptor along the way.
pub fn load_map(
    path: &Path,
    textures: &mut TextureStore,
    source: &mut dyn TextureSource,
) -> Result<MapDocument, MapError> {
    let text = std::fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    parse_map(base_dir, &text, textures, source)
}

/// Parse a map document from text. `base_dir` resolves tileset descriptor
/// paths.
pub fn parse_map(
    base_dir: &Path,
    xml: &str,
    textures: &mut TextureStore,
    source: &mut dyn TextureSource,
) -> Result<MapDocument, MapError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut header = MapHeader::default();
    let mut seen_root = false;
    let mut tilesets: Vec<TileSetEntry> = Vec::new();
    let mut layers: Vec<Layer> = Vec::new();
    let mut current_layer: Option<Layer> = None;
    let mut in_data = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e))
                if matches!(e.name().as_ref(), b"map") =>
            {
                scan_attrs(&e, &mut header, MAP_ATTRS)?;
                seen_root = true;
            }
            Ok(Event::Start(e)) | Ok(Event::Empty(e))
                if matches!(e.name().as_ref(), b"tileset") =>
            {
                if !seen_root {
                    return Err(MapError::Parse("tileset element outside map".into()));
                }
                let mut tsref = TileSetRef::default();
                scan_attrs(&e, &mut tsref, TILESET_REF_ATTRS)?;
                if tsref.source.is_empty() {
                    return Err(MapError::Parse("tileset: missing source".into()));
                }
                if tsref.first_gid == 0 {
                    return Err(MapError::Parse(format!(
                        "tileset '{}': firstgid must be positive",
                        tsref.source
                    )));
                }
                let tileset = load_tileset(&base_dir.join(&tsref.source), textures, source)?;
                tilesets.push(TileSetEntry {
                    first_gid: tsref.first_gid,
                    tileset,
                });
            }
            Ok(Event::Start(e)) if e.name().as_ref() == b"layer" => {
                if !seen_root {
                    return Err(MapError::Parse("layer element outside map".into()));
                }
                let mut layer = Layer::default();
                scan_attrs(&e, &mut layer, LAYER_ATTRS)?;
                current_layer = Some(layer);
            }
            Ok(Event::Start(e)) if e.name().as_ref() == b"data" => {
                if current_layer.is_none() {
                    return Err(MapError::Parse("data element outside layer".into()));
                }
                in_data = true;
            }
            Ok(Event::Text(t)) if in_data => {
                let text = t
                    .unescape()
                    .map_err(|e| MapError::Parse(format!("layer data: {}", e)))?;
                let Some(layer) = current_layer.as_mut() else {
                    continue;
                };
                for cell in text.split(',') {
                    let cell = cell.trim();
                    if cell.is_empty() {
                        continue;
                    }
                    layer.data.push(parse_u32("layer data", cell)?);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"data" => in_data = false,
                b"layer" => {
                    let layer = current_layer
                        .take()
                        .ok_or_else(|| MapError::Parse("unbalanced layer element".into()))?;
                    let expected = (layer.width * layer.height) as usize;
                    if layer.data.len() != expected {
                        return Err(MapError::Validation(format!(
                            "layer {}x{} holds {} cells, expected {}",
                            layer.width,
                            layer.height,
                            layer.data.len(),
                            expected
                        )));
                    }
                    layers.push(layer);
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(e.into()),
        }
    }

    if !seen_root {
        return Err(MapError::Parse("no map element found".into()));
    }
    let orientation = header
        .orientation
        .ok_or_else(|| MapError::Parse("map: missing orientation".into()))?;

    // Resolution relies on ascending first_gid order.
    tilesets.sort_unstable_by_key(|e| e.first_gid);

    Ok(MapDocument {
        orientation,
        tile_width: header.tile_width,
        tile_height: header.tile_height,
        tilesets,
        layers,
    })
}
