//! Tile grid math shared by the TileJSON layer crates.
//!
//! - [`Transformation`]: the affine transform from projected map coordinates into tile-grid space
//! - [`TileGrid`] and [`tile_address`]: compute the `(x, y, z)` address of the tile covering an extent
//! - [`expand_url`]: fill a tile URL template with a resolved address

mod address;
pub use address::{
    AddressingStrategy, TileAddress, TileGrid, ViewState, tile_address, wrap_column,
};

mod geometry;
pub use geometry::{Extent, ExtentParseError, Point, TileSize, WEB_MERCATOR_EXTENT};

mod transformation;
pub use transformation::Transformation;

mod url;
pub use url::expand_url;
