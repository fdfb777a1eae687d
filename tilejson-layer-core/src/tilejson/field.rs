//! The recognized TileJSON properties and what each of them does to a [`ParseContext`].

use serde::de::DeserializeOwned;
use serde_json::Value;
use tile_grid_utils::{Point, TileSize, Transformation};

use crate::config::Scheme;
use crate::tilejson::version::check_tilejson_version;
use crate::tilejson::{ParseContext, TileJsonError, TileJsonResult};

/// Names of all recognized TileJSON properties. Any other key of a document is ignored.
pub const FIELD_NAMES: [&str; 13] = [
    "name",
    "tilejson",
    "minzoom",
    "maxzoom",
    "center",
    "attribution",
    "projection",
    "transform",
    "crs",
    "scales",
    "scheme",
    "tilesize",
    "tiles",
];

/// A recognized TileJSON property with its decoded value.
#[derive(Debug, Clone, PartialEq)]
pub enum TileJsonField {
    Name(String),
    /// Raw version string, checked when applied.
    TileJson(String),
    MinZoom(u8),
    MaxZoom(u8),
    /// Geographic `(longitude, latitude)` and zoom level.
    Center(Point, u8),
    Attribution(String),
    /// PROJ-style definition of the projection named by [`Crs`](Self::Crs).
    Projection(String),
    Transform(Transformation),
    Crs(String),
    /// Scale denominators per zoom level, most detailed first.
    Scales(Vec<f64>),
    Scheme(Scheme),
    TileSize(TileSize),
    Tiles(Vec<String>),
}

fn decode<T: DeserializeOwned>(field: &'static str, value: &Value) -> TileJsonResult<T> {
    T::deserialize(value).map_err(|e| TileJsonError::InvalidField(field, e))
}

impl TileJsonField {
    /// Decodes a document entry. Returns `None` if `key` is not a recognized property.
    pub fn from_entry(key: &str, value: &Value) -> TileJsonResult<Option<Self>> {
        Ok(Some(match key {
            "name" => Self::Name(decode("name", value)?),
            "tilejson" => match value {
                Value::String(version) => Self::TileJson(version.clone()),
                other => return Err(TileJsonError::VersionError(other.to_string())),
            },
            "minzoom" => Self::MinZoom(decode("minzoom", value)?),
            "maxzoom" => Self::MaxZoom(decode("maxzoom", value)?),
            "center" => {
                let (lon, lat, zoom): (f64, f64, u8) = decode("center", value)?;
                Self::Center(Point::new(lon, lat), zoom)
            }
            "attribution" => Self::Attribution(decode("attribution", value)?),
            "projection" => Self::Projection(decode("projection", value)?),
            "transform" => Self::Transform(decode("transform", value)?),
            "crs" => Self::Crs(decode("crs", value)?),
            "scales" => Self::Scales(decode("scales", value)?),
            "scheme" => Self::Scheme(decode("scheme", value)?),
            "tilesize" => Self::TileSize(decode("tilesize", value)?),
            "tiles" => Self::Tiles(decode("tiles", value)?),
            _ => return Ok(None),
        }))
    }

    /// The TileJSON property name of this field.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::TileJson(_) => "tilejson",
            Self::MinZoom(_) => "minzoom",
            Self::MaxZoom(_) => "maxzoom",
            Self::Center(..) => "center",
            Self::Attribution(_) => "attribution",
            Self::Projection(_) => "projection",
            Self::Transform(_) => "transform",
            Self::Crs(_) => "crs",
            Self::Scales(_) => "scales",
            Self::Scheme(_) => "scheme",
            Self::TileSize(_) => "tilesize",
            Self::Tiles(_) => "tiles",
        }
    }

    /// Records the field in the context.
    ///
    /// Fields are independent of each other and may be applied in any order. Reprojecting the
    /// center into a declared projection is left to the parser, once all fields are applied.
    pub fn apply(self, ctx: &mut ParseContext) -> TileJsonResult<()> {
        match self {
            Self::Name(name) => ctx.name = Some(name),
            Self::TileJson(version) => {
                check_tilejson_version(&version)?;
                ctx.validation.version = true;
            }
            Self::MinZoom(zoom) => ctx.tile_layer.min_zoom = Some(zoom),
            Self::MaxZoom(zoom) => ctx.tile_layer.max_zoom = Some(zoom),
            Self::Center(center, zoom) => {
                ctx.center = Some(center);
                ctx.zoom = Some(zoom);
            }
            Self::Attribution(attribution) => ctx.tile_layer.attribution = Some(attribution),
            Self::Projection(definition) => ctx.crs.projection = Some(definition),
            Self::Transform(transformation) => {
                ctx.tile_layer.transformation = Some(transformation);
            }
            Self::Crs(code) => ctx.crs.code = Some(code),
            Self::Scales(scales) => ctx.tile_layer.resolutions = Some(scales_to_resolutions(&scales)),
            Self::Scheme(scheme) => ctx.tile_layer.scheme = Some(scheme),
            Self::TileSize(size) => ctx.tile_layer.tile_size = Some(size),
            Self::Tiles(urls) => ctx.tile_urls = urls,
        }
        Ok(())
    }
}

/// Inverts every scale into a resolution, keeping the index of each zoom level.
///
/// The ordering of `scales` is not checked; callers are expected to list the most detailed first.
#[must_use]
pub fn scales_to_resolutions(scales: &[f64]) -> Vec<f64> {
    scales.iter().map(|scale| 1.0 / scale).collect()
}
