#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

/// Layer, map and parse option configuration
pub mod config;

/// Tiled layers and map views
pub mod layer;

pub mod projection;

pub mod tilejson;

pub use tile_grid_utils as grid;
