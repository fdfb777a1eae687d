//! Configuration handed to the layer and map consumers, and the caller-supplied defaults.

mod map;
pub use map::MapConfig;

mod options;
pub use options::ParseOptions;

mod tile_layer;
pub use tile_layer::{DEFAULT_MAX_EXTENT, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, Scheme, TileLayerConfig};
