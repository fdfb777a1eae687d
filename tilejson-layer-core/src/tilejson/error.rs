use crate::projection::ProjectionError;

/// A convenience [`Result`] for TileJSON parsing.
pub type TileJsonResult<T> = Result<T, TileJsonError>;

/// Errors that abort parsing a TileJSON document.
///
/// No partial configuration is ever returned alongside one of these.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum TileJsonError {
    /// The `tilejson` property is not a version 2 string.
    #[error(r#"This parser supports version 2 of TileJSON. (Provided version: "{0}")"#)]
    VersionError(String),

    /// A required property was never supplied.
    #[error(r#"Missing property "{0}"."#)]
    ValidationError(&'static str),

    #[error("TileJSON document must be a JSON object, but it is {0}")]
    NotAnObject(&'static str),

    /// A recognized property has a value of the wrong shape.
    #[error(r#"Invalid value of TileJSON property "{0}": {1}"#)]
    InvalidField(&'static str, #[source] serde_json::Error),

    #[error(r#"TileJSON declares a "projection" without a "crs" code to register it under"#)]
    ProjectionWithoutCrs,

    #[error(r#"TileJSON has no tile URL templates in "tiles""#)]
    NoTileUrls,

    #[error("Unable to parse TileJSON document: {0}")]
    JsonError(#[source] serde_json::Error),

    #[error(transparent)]
    ProjectionError(#[from] ProjectionError),
}
