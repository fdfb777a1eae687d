#![forbid(unsafe_code)]

pub mod args;
pub mod commands;
pub mod config;
pub mod logging;

mod error;
pub use error::{TileJsonLayerError, TileJsonLayerResult};
