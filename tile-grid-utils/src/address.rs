//! Tile address resolution.
//!
//! A tiled layer asks for the tile covering some map extent at the current view resolution.
//! The `(x, y)` column and row come either from the layer's [`Transformation`], or from the
//! offset to the top-left corner of a fixed global extent. The zoom comes from matching the view
//! resolution against the resolutions the tile server supports.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::{Extent, TileSize, Transformation};

/// How tile columns and rows are computed from map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressingStrategy {
    /// Offsets from the top-left corner of a fixed global extent (spherical mercator style grids).
    GlobalExtent(Extent),
    /// A custom affine transform from projected coordinates into grid space.
    Transform(Transformation),
}

/// Column, row and zoom of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileAddress {
    pub x: i64,
    pub y: i64,
    pub z: i32,
}

impl Display for TileAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}/{}/{}", self.z, self.x, self.y)
        } else {
            write!(f, "{},{},{}", self.z, self.x, self.y)
        }
    }
}

/// The part of the viewport state a tile request depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Map units per pixel.
    pub resolution: f64,
    /// Zoom level of the viewport.
    pub zoom: i32,
}

/// Computes the address of the tile whose top-left corner is the top-left corner of `extent`.
///
/// `resolution` must be positive and both tile dimensions non-zero.
/// Fractional grid positions are rounded half-up. With `wrap_date_line`,
/// the column is wrapped into `[0, 2^zoom)`.
#[must_use]
pub fn tile_address(
    extent: &Extent,
    resolution: f64,
    zoom: i32,
    strategy: &AddressingStrategy,
    tile_size: TileSize,
    wrap_date_line: bool,
) -> TileAddress {
    let tile_w = resolution * f64::from(tile_size.w);
    let tile_h = resolution * f64::from(tile_size.h);

    let (x, y) = match strategy {
        AddressingStrategy::Transform(t) => {
            let p = t.transform(extent.top_left());
            (round_half_up(p.x / tile_w), round_half_up(p.y / tile_h))
        }
        AddressingStrategy::GlobalExtent(global) => (
            round_half_up((extent.left - global.left) / tile_w),
            round_half_up((global.top - extent.top) / tile_h),
        ),
    };

    let x = if wrap_date_line {
        wrap_column(x, zoom)
    } else {
        x
    };

    TileAddress { x, y, z: zoom }
}

/// Wraps a tile column into `[0, 2^zoom)` so the grid repeats horizontally.
///
/// ```
/// # use tile_grid_utils::wrap_column;
/// assert_eq!(wrap_column(-1, 3), 7);
/// assert_eq!(wrap_column(9, 3), 1);
/// ```
#[must_use]
pub fn wrap_column(x: i64, zoom: i32) -> i64 {
    let limit = 1_i64 << zoom.clamp(0, 62);
    ((x % limit) + limit) % limit
}

/// Grid positions exactly halfway between two tiles belong to the higher one.
fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Everything a tiled layer needs to turn a requested extent into a [`TileAddress`].
///
/// Immutable once built, so it can be shared across threads and called per tile request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileGrid {
    pub strategy: AddressingStrategy,
    pub tile_size: TileSize,
    /// Resolutions supported by the tile server, indexed by server zoom level.
    pub server_resolutions: Option<Vec<f64>>,
    /// Added to the viewport zoom when no server resolutions are known.
    pub zoom_offset: i32,
    pub wrap_date_line: bool,
}

impl TileGrid {
    #[must_use]
    pub fn new(strategy: AddressingStrategy) -> Self {
        Self {
            strategy,
            tile_size: TileSize::default(),
            server_resolutions: None,
            zoom_offset: 0,
            wrap_date_line: false,
        }
    }

    #[must_use]
    pub fn with_tile_size(mut self, tile_size: TileSize) -> Self {
        self.tile_size = tile_size;
        self
    }

    #[must_use]
    pub fn with_server_resolutions(mut self, resolutions: Option<Vec<f64>>) -> Self {
        self.server_resolutions = resolutions;
        self
    }

    #[must_use]
    pub fn with_zoom_offset(mut self, zoom_offset: i32) -> Self {
        self.zoom_offset = zoom_offset;
        self
    }

    #[must_use]
    pub fn with_wrap_date_line(mut self, wrap_date_line: bool) -> Self {
        self.wrap_date_line = wrap_date_line;
        self
    }

    fn server_list(&self) -> Option<&[f64]> {
        self.server_resolutions
            .as_deref()
            .filter(|list| !list.is_empty())
    }

    /// The server resolution closest to the requested one.
    ///
    /// Returns `resolution` unchanged when no server resolutions are known, or when it is one of them.
    /// Otherwise the list is scanned from its last entry towards the first, stopping as soon as the
    /// distance to `resolution` starts growing.
    #[must_use]
    pub fn server_resolution(&self, resolution: f64) -> f64 {
        let Some(list) = self.server_list() else {
            return resolution;
        };
        if list.contains(&resolution) {
            return resolution;
        }

        let mut distance = f64::INFINITY;
        let mut closest = resolution;
        for &candidate in list.iter().rev() {
            let candidate_distance = (candidate - resolution).abs();
            if candidate_distance > distance {
                break;
            }
            distance = candidate_distance;
            closest = candidate;
        }
        closest
    }

    /// Zoom level of the tile server for the given view.
    ///
    /// With server resolutions, this is the index of the matched [`server_resolution`](Self::server_resolution).
    /// Without them, it is the view zoom plus the zoom offset.
    #[must_use]
    pub fn server_zoom(&self, view: ViewState) -> i32 {
        match self.server_list() {
            Some(list) => {
                let resolution = self.server_resolution(view.resolution);
                list.iter()
                    .position(|r| *r == resolution)
                    .and_then(|idx| i32::try_from(idx).ok())
                    .unwrap_or_default()
            }
            None => view.zoom + self.zoom_offset,
        }
    }

    /// Address of the tile covering `extent` for the given view.
    #[must_use]
    pub fn resolve(&self, extent: &Extent, view: ViewState) -> TileAddress {
        tile_address(
            extent,
            self.server_resolution(view.resolution),
            self.server_zoom(view),
            &self.strategy,
            self.tile_size,
            self.wrap_date_line,
        )
    }
}
