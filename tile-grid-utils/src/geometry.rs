//! Plain value types for map-space geometry.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Half the circumference of the spherical web mercator world, in meters.
const HALF_WORLD: f64 = 20_037_508.342_789_244;

/// Full extent of the spherical web mercator projection (`EPSG:3857`).
pub const WEB_MERCATOR_EXTENT: Extent = Extent {
    left: -HALF_WORLD,
    bottom: -HALF_WORLD,
    right: HALF_WORLD,
    top: HALF_WORLD,
};

/// A point in map coordinates. For geographic coordinates `x` is the longitude and `y` the latitude.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in map coordinates.
///
/// Serialized as `[left, bottom, right, top]`, the bounds array form used by layer configurations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Extent {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Extent {
    #[must_use]
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// The corner a tile grid is addressed from.
    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

impl From<[f64; 4]> for Extent {
    fn from([left, bottom, right, top]: [f64; 4]) -> Self {
        Self::new(left, bottom, right, top)
    }
}

impl From<Extent> for [f64; 4] {
    fn from(e: Extent) -> Self {
        [e.left, e.bottom, e.right, e.top]
    }
}

impl Display for Extent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.bottom, self.right, self.top)
    }
}

/// Errors returned when parsing an [`Extent`] from a `left,bottom,right,top` string.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ExtentParseError {
    #[error("Extent must have exactly 4 comma-separated values, got {0}: '{1}'")]
    WrongValueCount(usize, String),

    #[error("Extent value '{0}' is not a number")]
    InvalidNumber(String),
}

impl FromStr for Extent {
    type Err = ExtentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| {
                let v = v.trim();
                v.parse::<f64>()
                    .map_err(|_| ExtentParseError::InvalidNumber(v.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        match values.as_slice() {
            [left, bottom, right, top] => Ok(Self::new(*left, *bottom, *right, *top)),
            _ => Err(ExtentParseError::WrongValueCount(
                values.len(),
                s.to_string(),
            )),
        }
    }
}

/// Width and height of a single tile, in pixels.
///
/// Deserializes from either a single integer (square tiles) or a `[width, height]` pair,
/// and always serializes as the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TileSizeRepr", into = "[u32; 2]")]
pub struct TileSize {
    pub w: u32,
    pub h: u32,
}

impl TileSize {
    #[must_use]
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    #[must_use]
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::square(256)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TileSizeRepr {
    Square(u32),
    Pair([u32; 2]),
}

impl From<TileSizeRepr> for TileSize {
    fn from(value: TileSizeRepr) -> Self {
        match value {
            TileSizeRepr::Square(size) => Self::square(size),
            TileSizeRepr::Pair([w, h]) => Self::new(w, h),
        }
    }
}

impl From<TileSize> for [u32; 2] {
    fn from(size: TileSize) -> Self {
        [size.w, size.h]
    }
}
