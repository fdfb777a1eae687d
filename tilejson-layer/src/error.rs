use std::io;
use std::path::PathBuf;

use tilejson_layer_core::tilejson::TileJsonError;

/// A convenience [`Result`] for the `tilejson-layer` crate.
pub type TileJsonLayerResult<T> = Result<T, TileJsonLayerError>;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum TileJsonLayerError {
    #[error("Unable to load config file {1}: {0}")]
    ConfigLoadError(#[source] io::Error, PathBuf),

    #[error("Unable to parse config file {1}: {0}")]
    ConfigParseError(#[source] subst::yaml::Error, PathBuf),

    #[error("Unable to read TileJSON file {1}: {0}")]
    TileJsonReadError(#[source] io::Error, PathBuf),

    #[error("Unable to parse TileJSON file {1}: {0}")]
    TileJsonParseError(#[source] TileJsonError, PathBuf),

    #[error("Resolution must be a positive number, but is {0}")]
    InvalidResolution(f64),

    #[error("Unable to serialize output: {0}")]
    OutputError(#[from] serde_json::Error),
}
