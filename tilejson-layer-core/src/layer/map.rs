use serde::Serialize;
use tile_grid_utils::Point;

use crate::config::MapConfig;
use crate::layer::TiledLayer;

/// Center and zoom level a map view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapCenter {
    /// In the projection of the map's layers.
    pub point: Point,
    pub zoom: u8,
}

/// A map viewport with its layers.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub id: String,
    pub config: MapConfig,
    pub layers: Vec<TiledLayer>,
    pub center: Option<MapCenter>,
}

impl MapView {
    #[must_use]
    pub fn new(id: impl Into<String>, config: MapConfig) -> Self {
        Self {
            id: id.into(),
            config,
            layers: Vec::new(),
            center: None,
        }
    }

    pub fn add_layer(&mut self, layer: TiledLayer) {
        self.layers.push(layer);
    }

    pub fn set_center(&mut self, point: Point, zoom: u8) {
        self.center = Some(MapCenter { point, zoom });
    }
}
