use serde::Serialize;
use tile_grid_utils::Point;

use crate::config::{MapConfig, ParseOptions, TileLayerConfig};
use crate::tilejson::{TileJsonError, TileJsonResult};

/// The projection a document declares, as given by its `crs` and `projection` properties.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrsDefinition {
    pub code: Option<String>,
    /// PROJ-style definition string.
    pub projection: Option<String>,
}

/// Required properties seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validation {
    pub(crate) version: bool,
}

impl Validation {
    /// Whether a supported `tilejson` version was seen.
    #[must_use]
    pub fn version(&self) -> bool {
        self.version
    }

    /// Fails with the name of the first required property that was never supplied.
    pub fn check(&self) -> TileJsonResult<()> {
        if self.version {
            Ok(())
        } else {
            Err(TileJsonError::ValidationError("version"))
        }
    }
}

/// The result of parsing a TileJSON document.
///
/// Every parse starts from a fresh context seeded from the caller's [`ParseOptions`],
/// so nothing leaks from one parse into another.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseContext {
    pub name: Option<String>,
    pub tile_layer: TileLayerConfig,
    pub map: MapConfig,
    pub crs: CrsDefinition,
    /// Map center, in the layer projection once parsing is done.
    pub center: Option<Point>,
    pub zoom: Option<u8>,
    /// Tile URL templates, in the order the document lists them.
    pub tile_urls: Vec<String>,
    #[serde(skip)]
    pub(crate) validation: Validation,
}

impl ParseContext {
    pub(crate) fn new(options: &ParseOptions) -> Self {
        Self {
            name: None,
            tile_layer: options.seed_tile_layer_config(),
            map: options.seed_map_config(),
            crs: CrsDefinition::default(),
            center: None,
            zoom: None,
            tile_urls: Vec::new(),
            validation: Validation::default(),
        }
    }

    #[must_use]
    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// Center and zoom, if the document has a center.
    #[must_use]
    pub fn center_and_zoom(&self) -> Option<(Point, u8)> {
        self.center.zip(self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_version() {
        let err = Validation::default().check().unwrap_err();
        assert_eq!(err.to_string(), r#"Missing property "version"."#);
        assert!(Validation { version: true }.check().is_ok());
    }

    #[test]
    fn seeded_from_options() {
        let options = ParseOptions::with_tile_layer_config(TileLayerConfig {
            max_zoom: Some(12),
            ..TileLayerConfig::default()
        });
        let ctx = ParseContext::new(&options);
        assert_eq!(ctx.tile_layer.min_zoom, Some(0));
        assert_eq!(ctx.tile_layer.max_zoom, Some(12));
        assert_eq!(ctx.center_and_zoom(), None);
        assert!(ctx.tile_urls.is_empty());
    }
}
