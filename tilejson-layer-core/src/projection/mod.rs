//! Projection handles and the registry of projection definitions.
//!
//! A TileJSON document may declare a custom projection as a PROJ-style definition string
//! together with the `crs` code it is known by. The parser registers that definition in a
//! [`ProjectionRegistry`] and refers to it by a [`Projection`] handle afterwards.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

mod error;
pub use error::{ProjectionError, ProjectionResult};

mod registry;
pub use registry::{Proj4Registry, ProjectionRegistry};

/// Code of the geographic reference system TileJSON centers are given in.
pub const WGS84_CODE: &str = "EPSG:4326";

/// A handle to a projection, identified by its code, e.g. `EPSG:3857`.
///
/// The definition behind the code lives in a [`ProjectionRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Projection {
    code: String,
}

impl Projection {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// The geographic longitude/latitude projection.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(WGS84_CODE)
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl Display for Projection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
