//! Tiled layers and map views built from parsed TileJSON.
//!
//! Nothing here renders or fetches tiles. A [`TiledLayer`] knows how to address the tile
//! covering a requested extent and which URL serves it.

use serde::Serialize;
use tile_grid_utils::{
    AddressingStrategy, Extent, TileAddress, TileGrid, ViewState, WEB_MERCATOR_EXTENT, expand_url,
};

use crate::config::TileLayerConfig;
use crate::tilejson::{ParseContext, TileJsonError, TileJsonResult};

mod map;
pub use map::{MapCenter, MapView};

/// A layer of tiles served from a single URL template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TiledLayer {
    pub name: Option<String>,
    /// URL template with `{x}`, `{y}` and `{z}` placeholders.
    pub url: String,
    pub config: TileLayerConfig,
    pub grid: TileGrid,
}

impl TiledLayer {
    /// Builds the layer and its tile grid.
    ///
    /// Layers in a custom projection address tiles through the configured transformation,
    /// or the default one flipping the y axis. All other layers count tiles from the top-left
    /// corner of their maximum extent.
    #[must_use]
    pub fn new(name: Option<String>, url: impl Into<String>, config: TileLayerConfig) -> Self {
        let strategy = if config.projection.is_some() {
            AddressingStrategy::Transform(config.transformation.unwrap_or_default())
        } else {
            AddressingStrategy::GlobalExtent(config.max_extent.unwrap_or(WEB_MERCATOR_EXTENT))
        };
        let grid = TileGrid::new(strategy)
            .with_tile_size(config.tile_size.unwrap_or_default())
            .with_server_resolutions(config.server_resolutions.clone())
            .with_zoom_offset(config.zoom_offset.unwrap_or_default())
            .with_wrap_date_line(config.wrap_date_line.unwrap_or_default());

        Self {
            name,
            url: url.into(),
            config,
            grid,
        }
    }

    /// A layer serving the first tile URL template of a parsed document.
    pub fn from_context(ctx: ParseContext) -> TileJsonResult<Self> {
        let url = ctx
            .tile_urls
            .into_iter()
            .next()
            .ok_or(TileJsonError::NoTileUrls)?;
        Ok(Self::new(ctx.name, url, ctx.tile_layer))
    }

    #[must_use]
    pub fn is_projected(&self) -> bool {
        matches!(self.grid.strategy, AddressingStrategy::Transform(_))
    }

    /// Address of the tile covering `extent` for the given view.
    #[must_use]
    pub fn tile_address(&self, extent: &Extent, view: ViewState) -> TileAddress {
        self.grid.resolve(extent, view)
    }

    /// URL of the tile covering `extent` for the given view.
    #[must_use]
    pub fn tile_url(&self, extent: &Extent, view: ViewState) -> String {
        expand_url(&self.url, &self.tile_address(extent, view))
    }
}
