use serde::{Deserialize, Serialize};

use crate::config::{MapConfig, TileLayerConfig};

/// Caller-supplied options of a single parse.
///
/// Can be loaded from YAML or JSON; both `snake_case` and `camelCase` keys are accepted.
///
/// ```yaml
/// tile_layer_config:
///   maxZoom: 18
///   wrapDateLine: true
/// map_config:
///   units: m
/// set_center: false
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Overrides of the built-in layer defaults.
    #[serde(alias = "tileLayerConfig")]
    pub tile_layer_config: Option<TileLayerConfig>,
    /// Base map configuration.
    #[serde(alias = "mapConfig")]
    pub map_config: Option<MapConfig>,
    /// Whether a created map is centered on the document's center. Defaults to `true`.
    #[serde(alias = "setCenter")]
    pub set_center: Option<bool>,
}

impl ParseOptions {
    #[must_use]
    pub fn with_tile_layer_config(config: TileLayerConfig) -> Self {
        Self {
            tile_layer_config: Some(config),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_map_config(config: MapConfig) -> Self {
        Self {
            map_config: Some(config),
            ..Self::default()
        }
    }

    /// Layer configuration a parse starts from: built-in defaults overridden by the caller's config.
    #[must_use]
    pub fn seed_tile_layer_config(&self) -> TileLayerConfig {
        let defaults = TileLayerConfig::with_defaults();
        match &self.tile_layer_config {
            Some(overrides) => defaults.merge(overrides.clone()),
            None => defaults,
        }
    }

    /// Map configuration a parse starts from.
    #[must_use]
    pub fn seed_map_config(&self) -> MapConfig {
        MapConfig::default().merge(self.map_config.clone().unwrap_or_default())
    }

    #[must_use]
    pub fn centers_map(&self) -> bool {
        self.set_center.unwrap_or(true)
    }
}
