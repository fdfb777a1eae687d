use std::fmt::Debug;
use std::sync::LazyLock;

use dashmap::DashMap;
use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use tile_grid_utils::Point;
use tracing::debug;

use crate::projection::{Projection, ProjectionError, ProjectionResult};

const WGS84_DEFINITION: &str = "+proj=longlat +datum=WGS84 +no_defs";
const SPHERICAL_MERCATOR_DEFINITION: &str =
    "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs";

/// Definitions every [`Proj4Registry::new`] starts with.
const BUILTIN_DEFINITIONS: [(&str, &str); 4] = [
    ("EPSG:4326", WGS84_DEFINITION),
    ("CRS:84", WGS84_DEFINITION),
    ("EPSG:3857", SPHERICAL_MERCATOR_DEFINITION),
    ("EPSG:900913", SPHERICAL_MERCATOR_DEFINITION),
];

/// A registry mapping projection codes to their definitions, able to transform points between them.
///
/// Registration is last-writer-wins per code. Implementations must be usable from several threads.
pub trait ProjectionRegistry: Debug + Send + Sync {
    /// Stores `definition` under `code`, replacing any earlier definition.
    fn define(&self, code: &str, definition: &str);

    /// The definition registered under `code`, if any.
    fn definition(&self, code: &str) -> Option<String>;

    /// Transforms `point` from one projection into another.
    ///
    /// Geographic coordinates are in degrees, `x` being the longitude.
    fn transform(&self, point: Point, from: &Projection, to: &Projection)
    -> ProjectionResult<Point>;
}

/// [`ProjectionRegistry`] backed by PROJ-style definition strings, evaluated with `proj4rs`.
///
/// [`Proj4Registry::global`] is the process-wide instance used by the convenience functions of
/// [`tilejson`](crate::tilejson). Tests and embedders that need isolation create their own.
#[derive(Debug)]
pub struct Proj4Registry {
    definitions: DashMap<String, String>,
}

impl Default for Proj4Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Proj4Registry {
    /// A registry with the built-in geographic and spherical mercator definitions.
    #[must_use]
    pub fn new() -> Self {
        let registry = Self::empty();
        for (code, definition) in BUILTIN_DEFINITIONS {
            registry.define(code, definition);
        }
        registry
    }

    /// A registry without any definitions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            definitions: DashMap::new(),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Self {
        static GLOBAL: LazyLock<Proj4Registry> = LazyLock::new(Proj4Registry::new);
        &GLOBAL
    }

    fn load(&self, projection: &Projection) -> ProjectionResult<(Proj, bool)> {
        let code = projection.code();
        let definition = self
            .definition(code)
            .ok_or_else(|| ProjectionError::UnknownProjection(code.to_string()))?;
        let proj = Proj::from_proj_string(&definition)
            .map_err(|e| ProjectionError::InvalidDefinition(e.to_string(), code.to_string()))?;
        Ok((proj, is_geographic(&definition)))
    }
}

/// `proj4rs` works in radians for geographic systems.
fn is_geographic(definition: &str) -> bool {
    definition.split_whitespace().any(|param| {
        matches!(
            param,
            "+proj=longlat" | "+proj=latlong" | "+proj=lonlat" | "+proj=latlon"
        )
    })
}

impl ProjectionRegistry for Proj4Registry {
    fn define(&self, code: &str, definition: &str) {
        if let Some(previous) = self
            .definitions
            .insert(code.to_string(), definition.to_string())
            && previous != definition
        {
            debug!("Replacing definition of projection {code}: {previous}");
        }
    }

    fn definition(&self, code: &str) -> Option<String> {
        self.definitions.get(code).map(|d| d.value().clone())
    }

    fn transform(
        &self,
        point: Point,
        from: &Projection,
        to: &Projection,
    ) -> ProjectionResult<Point> {
        if from == to {
            return Ok(point);
        }
        let (src, src_geographic) = self.load(from)?;
        let (dst, dst_geographic) = self.load(to)?;

        let mut p = if src_geographic {
            (point.x.to_radians(), point.y.to_radians(), 0.0)
        } else {
            (point.x, point.y, 0.0)
        };
        transform(&src, &dst, &mut p).map_err(|e| {
            ProjectionError::TransformFailed(e.to_string(), from.to_string(), to.to_string())
        })?;

        Ok(if dst_geographic {
            Point::new(p.0.to_degrees(), p.1.to_degrees())
        } else {
            Point::new(p.0, p.1)
        })
    }
}
