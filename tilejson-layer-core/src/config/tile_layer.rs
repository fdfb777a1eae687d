use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tile_grid_utils::{Extent, TileSize, Transformation};

use crate::projection::Projection;

/// Lowest zoom level of a layer unless the caller or the document says otherwise.
pub const DEFAULT_MIN_ZOOM: u8 = 0;
/// Highest zoom level of a layer unless the caller or the document says otherwise.
pub const DEFAULT_MAX_ZOOM: u8 = 22;
/// Layer extent unless the caller says otherwise.
pub const DEFAULT_MAX_EXTENT: [f64; 4] = [0.0, 0.0, 16e9, 16e9];

/// Tile row numbering scheme of the tile server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Rows are numbered from the top.
    #[default]
    Xyz,
    /// Rows are numbered from the bottom.
    Tms,
}

impl Display for Scheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xyz => f.write_str("xyz"),
            Self::Tms => f.write_str("tms"),
        }
    }
}

/// Configuration of a tiled layer.
///
/// Built from [`TileLayerConfig::with_defaults`], then the caller's overrides, then the
/// properties of the TileJSON document. Keys the parser does not know about are kept in
/// [`extra`](Self::extra) and passed through to the layer unchanged.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerConfig {
    pub min_zoom: Option<u8>,
    pub max_zoom: Option<u8>,
    pub max_extent: Option<Extent>,
    pub attribution: Option<String>,
    /// Map units per pixel for each zoom level, most detailed first.
    pub resolutions: Option<Vec<f64>>,
    /// Resolutions the tile server supports, if they differ from [`resolutions`](Self::resolutions).
    pub server_resolutions: Option<Vec<f64>>,
    pub zoom_offset: Option<i32>,
    pub scheme: Option<Scheme>,
    pub tile_size: Option<TileSize>,
    /// Grid transformation, only used by projected layers.
    pub transformation: Option<Transformation>,
    /// Set when the document declares a custom projection.
    pub projection: Option<Projection>,
    /// Set when the document has no projection, and tiles are addressed on the spherical mercator grid.
    pub spherical_mercator: Option<bool>,
    pub wrap_date_line: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TileLayerConfig {
    /// The configuration every parse starts from.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            min_zoom: Some(DEFAULT_MIN_ZOOM),
            max_zoom: Some(DEFAULT_MAX_ZOOM),
            max_extent: Some(Extent::from(DEFAULT_MAX_EXTENT)),
            ..Self::default()
        }
    }

    /// Shallow merge: every value set in `overrides` replaces the one in `self`.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        let mut extra = self.extra;
        extra.extend(overrides.extra);
        Self {
            min_zoom: overrides.min_zoom.or(self.min_zoom),
            max_zoom: overrides.max_zoom.or(self.max_zoom),
            max_extent: overrides.max_extent.or(self.max_extent),
            attribution: overrides.attribution.or(self.attribution),
            resolutions: overrides.resolutions.or(self.resolutions),
            server_resolutions: overrides.server_resolutions.or(self.server_resolutions),
            zoom_offset: overrides.zoom_offset.or(self.zoom_offset),
            scheme: overrides.scheme.or(self.scheme),
            tile_size: overrides.tile_size.or(self.tile_size),
            transformation: overrides.transformation.or(self.transformation),
            projection: overrides.projection.or(self.projection),
            spherical_mercator: overrides.spherical_mercator.or(self.spherical_mercator),
            wrap_date_line: overrides.wrap_date_line.or(self.wrap_date_line),
            extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults() {
        let cfg = TileLayerConfig::with_defaults();
        assert_eq!(cfg.min_zoom, Some(0));
        assert_eq!(cfg.max_zoom, Some(22));
        assert_eq!(cfg.max_extent, Some(Extent::new(0.0, 0.0, 16e9, 16e9)));
        assert_eq!(cfg.spherical_mercator, None);
    }

    #[test]
    fn merge_override_wins() {
        let overrides: TileLayerConfig = serde_json::from_value(json!({
            "maxZoom": 18,
            "wrapDateLine": true,
            "opacity": 0.5,
        }))
        .unwrap();
        let cfg = TileLayerConfig::with_defaults().merge(overrides);
        assert_eq!(cfg.min_zoom, Some(0));
        assert_eq!(cfg.max_zoom, Some(18));
        assert_eq!(cfg.wrap_date_line, Some(true));
        assert_eq!(cfg.extra.get("opacity"), Some(&json!(0.5)));
    }

    #[test]
    fn merge_keeps_base_when_override_unset() {
        let base = TileLayerConfig {
            attribution: Some("base".to_string()),
            scheme: Some(Scheme::Tms),
            ..TileLayerConfig::default()
        };
        let cfg = base.clone().merge(TileLayerConfig::default());
        assert_eq!(cfg, base);
    }

    #[test]
    fn serializes_camel_case_without_nones() {
        let cfg = TileLayerConfig {
            min_zoom: Some(2),
            tile_size: Some(TileSize::square(512)),
            spherical_mercator: Some(true),
            ..TileLayerConfig::default()
        };
        insta::assert_json_snapshot!(cfg, @r#"
        {
          "minZoom": 2,
          "tileSize": [
            512,
            512
          ],
          "sphericalMercator": true
        }
        "#);
    }

    #[test]
    fn scheme_from_json() {
        let scheme: Scheme = serde_json::from_value(json!("tms")).unwrap();
        assert_eq!(scheme, Scheme::Tms);
        assert_eq!(scheme.to_string(), "tms");
        assert!(serde_json::from_value::<Scheme>(json!("wmts")).is_err());
    }
}
