use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tile_grid_utils::Extent;

use crate::projection::Projection;

/// Configuration of the map viewport a layer is attached to.
///
/// The parser never fills it from the document; it is the caller's configuration passed through,
/// so that a map and its layer can be created from a single call.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub projection: Option<Projection>,
    pub units: Option<String>,
    pub max_extent: Option<Extent>,
    pub max_resolution: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MapConfig {
    /// Shallow merge: every value set in `overrides` replaces the one in `self`.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        let mut extra = self.extra;
        extra.extend(overrides.extra);
        Self {
            projection: overrides.projection.or(self.projection),
            units: overrides.units.or(self.units),
            max_extent: overrides.max_extent.or(self.max_extent),
            max_resolution: overrides.max_resolution.or(self.max_resolution),
            extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn merge_extra_keys() {
        let base: MapConfig =
            serde_json::from_value(json!({"units": "m", "numZoomLevels": 10, "theme": null}))
                .unwrap();
        let overrides: MapConfig =
            serde_json::from_value(json!({"numZoomLevels": 12, "fractionalZoom": true})).unwrap();
        let merged = base.merge(overrides);

        assert_eq!(merged.units.as_deref(), Some("m"));
        assert_eq!(merged.extra.get("numZoomLevels"), Some(&json!(12)));
        assert_eq!(merged.extra.get("fractionalZoom"), Some(&json!(true)));
        assert_eq!(merged.extra.get("theme"), Some(&Value::Null));
    }

    #[test]
    fn empty_by_default() {
        assert_eq!(serde_json::to_value(MapConfig::default()).unwrap(), json!({}));
    }
}
