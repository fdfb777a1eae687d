//! Parsing of TileJSON documents into map and tiled layer configuration.
//!
//! The functions of this module use the process-wide [`Proj4Registry`](crate::projection::Proj4Registry).
//! Use a [`TileJsonReader`] to parse against a registry of your own.

mod context;
mod error;
mod field;
mod parser;
mod version;

pub use context::{CrsDefinition, ParseContext, Validation};
pub use error::{TileJsonError, TileJsonResult};
pub use field::{FIELD_NAMES, TileJsonField, scales_to_resolutions};
pub use parser::TileJsonReader;
pub use version::{SUPPORTED_MAJOR, SemVer, check_tilejson_version};

use serde_json::Value;

use crate::config::{MapConfig, ParseOptions, TileLayerConfig};
use crate::layer::{MapView, TiledLayer};

/// See [`TileJsonReader::parse`].
pub fn parse(document: &Value, options: &ParseOptions) -> TileJsonResult<ParseContext> {
    TileJsonReader::global().parse(document, options)
}

/// See [`TileJsonReader::parse_str`].
pub fn parse_str(document: &str, options: &ParseOptions) -> TileJsonResult<ParseContext> {
    TileJsonReader::global().parse_str(document, options)
}

pub fn create_map_config(document: &Value, config: MapConfig) -> TileJsonResult<MapConfig> {
    TileJsonReader::global().create_map_config(document, config)
}

pub fn create_tile_layer_config(
    document: &Value,
    config: TileLayerConfig,
) -> TileJsonResult<TileLayerConfig> {
    TileJsonReader::global().create_tile_layer_config(document, config)
}

pub fn create_tile_layer(document: &Value, options: &ParseOptions) -> TileJsonResult<TiledLayer> {
    TileJsonReader::global().create_tile_layer(document, options)
}

pub fn create_map(id: &str, document: &Value, options: &ParseOptions) -> TileJsonResult<MapView> {
    TileJsonReader::global().create_map(id, document, options)
}
