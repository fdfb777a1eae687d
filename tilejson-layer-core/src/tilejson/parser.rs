use serde_json::{Map, Value};
use tracing::{debug, info, trace};

use crate::config::{MapConfig, ParseOptions, TileLayerConfig};
use crate::layer::{MapView, TiledLayer};
use crate::projection::{Proj4Registry, Projection, ProjectionRegistry};
use crate::tilejson::field::{FIELD_NAMES, TileJsonField};
use crate::tilejson::{ParseContext, TileJsonError, TileJsonResult};

const VERSION_FIELD: &str = "tilejson";

/// Parses TileJSON documents, registering declared projections with a [`ProjectionRegistry`].
///
/// The reader holds no state of its own: every call starts from a fresh [`ParseContext`].
#[derive(Debug, Clone, Copy)]
pub struct TileJsonReader<'r> {
    registry: &'r dyn ProjectionRegistry,
}

impl TileJsonReader<'static> {
    /// A reader backed by [`Proj4Registry::global`].
    #[must_use]
    pub fn global() -> Self {
        Self::new(Proj4Registry::global())
    }
}

impl<'r> TileJsonReader<'r> {
    #[must_use]
    pub fn new(registry: &'r dyn ProjectionRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &'r dyn ProjectionRegistry {
        self.registry
    }

    /// Parses a document into a [`ParseContext`].
    ///
    /// The `tilejson` version is checked before any other property, so a missing or
    /// unsupported version is reported even when other properties are invalid too.
    /// Otherwise fails on the first invalid property, and when a declared projection
    /// cannot be registered or used.
    pub fn parse(&self, document: &Value, options: &ParseOptions) -> TileJsonResult<ParseContext> {
        let Value::Object(document) = document else {
            return Err(TileJsonError::NotAnObject(json_kind(document)));
        };

        let mut ctx = ParseContext::new(options);
        Self::apply_field(&mut ctx, document, VERSION_FIELD)?;
        ctx.validation().check()?;

        for name in FIELD_NAMES.into_iter().filter(|name| *name != VERSION_FIELD) {
            Self::apply_field(&mut ctx, document, name)?;
        }
        for key in document.keys().filter(|k| !FIELD_NAMES.contains(&k.as_str())) {
            trace!("Ignoring unknown TileJSON property {key}");
        }

        self.resolve_projection(&mut ctx)?;
        Ok(ctx)
    }

    /// Decodes and applies one property, if the document has a non-null value for it.
    fn apply_field(
        ctx: &mut ParseContext,
        document: &Map<String, Value>,
        name: &str,
    ) -> TileJsonResult<()> {
        let Some(value) = document.get(name).filter(|v| !v.is_null()) else {
            return Ok(());
        };
        if let Some(field) = TileJsonField::from_entry(name, value)? {
            debug!("Applying TileJSON property {name}");
            field.apply(ctx)?;
        }
        Ok(())
    }

    /// Parses a document given as JSON text.
    pub fn parse_str(&self, document: &str, options: &ParseOptions) -> TileJsonResult<ParseContext> {
        let document: Value = serde_json::from_str(document).map_err(TileJsonError::JsonError)?;
        self.parse(&document, options)
    }

    /// Registers a declared projection and moves the center into it, or falls back to the
    /// spherical mercator grid when the document declares none.
    ///
    /// The document decides the addressing mode: without a `projection` property, a projection
    /// from the caller's layer config is cleared along with switching to spherical mercator.
    fn resolve_projection(&self, ctx: &mut ParseContext) -> TileJsonResult<()> {
        let Some(definition) = &ctx.crs.projection else {
            ctx.tile_layer.spherical_mercator = Some(true);
            ctx.tile_layer.projection = None;
            return Ok(());
        };
        let code = ctx.crs.code.as_deref().ok_or(TileJsonError::ProjectionWithoutCrs)?;

        info!("Registering projection {code}");
        self.registry.define(code, definition);
        let projection = Projection::new(code);

        if let Some(center) = ctx.center {
            let projected = self
                .registry
                .transform(center, &Projection::wgs84(), &projection)?;
            debug!(
                "Projected center ({}, {}) into {code}: ({}, {})",
                center.x, center.y, projected.x, projected.y
            );
            ctx.center = Some(projected);
        }
        ctx.tile_layer.projection = Some(projection);
        Ok(())
    }

    /// Map configuration derived from a document, starting from `config`.
    pub fn create_map_config(&self, document: &Value, config: MapConfig) -> TileJsonResult<MapConfig> {
        let options = ParseOptions::with_map_config(config);
        Ok(self.parse(document, &options)?.map)
    }

    /// Tiled layer configuration derived from a document, with `config` overriding the defaults.
    pub fn create_tile_layer_config(
        &self,
        document: &Value,
        config: TileLayerConfig,
    ) -> TileJsonResult<TileLayerConfig> {
        let options = ParseOptions::with_tile_layer_config(config);
        Ok(self.parse(document, &options)?.tile_layer)
    }

    /// A tiled layer serving the first tile URL template of a document.
    pub fn create_tile_layer(
        &self,
        document: &Value,
        options: &ParseOptions,
    ) -> TileJsonResult<TiledLayer> {
        TiledLayer::from_context(self.parse(document, options)?)
    }

    /// A map view showing the tiled layer of a document.
    ///
    /// The map is centered on the document's center unless `options` disable it.
    pub fn create_map(
        &self,
        id: &str,
        document: &Value,
        options: &ParseOptions,
    ) -> TileJsonResult<MapView> {
        let ctx = self.parse(document, options)?;
        let center = ctx.center_and_zoom();
        let mut map = MapView::new(id, ctx.map.clone());
        map.add_layer(TiledLayer::from_context(ctx)?);

        match center {
            Some((point, zoom)) if options.centers_map() => map.set_center(point, zoom),
            Some(_) => debug!("Not centering map {id}, centering is disabled"),
            None => {}
        }
        Ok(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use approx::assert_abs_diff_eq;
    use serde_json::json;
    use tile_grid_utils::Point;
    use tracing_test::traced_test;

    use super::*;
    use crate::projection::{ProjectionError, ProjectionResult};

    /// Records definitions and shifts points by a fixed offset.
    #[derive(Debug, Default)]
    struct ShiftRegistry {
        defined: Mutex<Vec<(String, String)>>,
    }

    impl ProjectionRegistry for ShiftRegistry {
        fn define(&self, code: &str, definition: &str) {
            self.defined
                .lock()
                .unwrap()
                .push((code.to_string(), definition.to_string()));
        }

        fn definition(&self, code: &str) -> Option<String> {
            self.defined
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|(c, _)| c == code)
                .map(|(_, d)| d.clone())
        }

        fn transform(
            &self,
            point: Point,
            _from: &Projection,
            to: &Projection,
        ) -> ProjectionResult<Point> {
            if self.definition(to.code()).is_none() {
                return Err(ProjectionError::UnknownProjection(to.code().to_string()));
            }
            Ok(Point::new(point.x + 1000.0, point.y + 2000.0))
        }
    }

    fn doc() -> Value {
        json!({
            "tilejson": "2.0.0",
            "name": "roads",
            "tiles": ["https://tiles.example.com/{z}/{x}/{y}.png"],
        })
    }

    #[test]
    fn minimal_document() {
        let registry = ShiftRegistry::default();
        let ctx = TileJsonReader::new(&registry)
            .parse(&doc(), &ParseOptions::default())
            .unwrap();
        assert_eq!(ctx.name.as_deref(), Some("roads"));
        assert_eq!(ctx.tile_layer.spherical_mercator, Some(true));
        assert_eq!(ctx.tile_layer.projection, None);
        assert_eq!(ctx.tile_urls.len(), 1);
        assert!(registry.defined.lock().unwrap().is_empty());
    }

    #[test]
    fn not_an_object() {
        let registry = ShiftRegistry::default();
        let reader = TileJsonReader::new(&registry);
        let err = reader
            .parse(&json!(["2.0.0"]), &ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, TileJsonError::NotAnObject("an array")));
        let err = reader.parse_str("{", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, TileJsonError::JsonError(_)));
    }

    #[test]
    fn null_and_unknown_keys_are_ignored() {
        let registry = ShiftRegistry::default();
        let reader = TileJsonReader::new(&registry);
        let mut with_noise = doc();
        with_noise["attribution"] = Value::Null;
        with_noise["bounds"] = json!([-180, -85, 180, 85]);
        with_noise["vector_layers"] = json!([]);
        let options = ParseOptions::default();
        assert_eq!(
            reader.parse(&with_noise, &options).unwrap(),
            reader.parse(&doc(), &options).unwrap()
        );
    }

    #[test]
    fn document_beats_caller_beats_defaults() {
        let registry = ShiftRegistry::default();
        let mut document = doc();
        document["maxzoom"] = json!(14);
        let config = TileLayerConfig {
            min_zoom: Some(3),
            max_zoom: Some(18),
            ..TileLayerConfig::default()
        };
        let cfg = TileJsonReader::new(&registry)
            .create_tile_layer_config(&document, config)
            .unwrap();
        assert_eq!(cfg.min_zoom, Some(3));
        assert_eq!(cfg.max_zoom, Some(14));
    }

    #[test]
    fn projection_is_registered_and_center_projected() {
        let registry = ShiftRegistry::default();
        let mut document = doc();
        document["crs"] = json!("EPSG:3006");
        document["projection"] = json!("+proj=utm +zone=33 +ellps=GRS80 +units=m +no_defs");
        document["center"] = json!([15, 60, 4]);

        let ctx = TileJsonReader::new(&registry)
            .parse(&document, &ParseOptions::default())
            .unwrap();
        assert_eq!(
            registry.definition("EPSG:3006").as_deref(),
            Some("+proj=utm +zone=33 +ellps=GRS80 +units=m +no_defs")
        );
        assert_eq!(ctx.tile_layer.projection, Some(Projection::new("EPSG:3006")));
        assert_eq!(ctx.tile_layer.spherical_mercator, None);
        let center = ctx.center.unwrap();
        assert_abs_diff_eq!(center.x, 1015.0);
        assert_abs_diff_eq!(center.y, 2060.0);
        assert_eq!(ctx.zoom, Some(4));
    }

    #[test]
    #[traced_test]
    fn logs_registration_and_ignored_keys() {
        let registry = ShiftRegistry::default();
        let mut document = doc();
        document["crs"] = json!("EPSG:3006");
        document["projection"] = json!("+proj=utm +zone=33");
        document["grids"] = json!([]);
        TileJsonReader::new(&registry)
            .parse(&document, &ParseOptions::default())
            .unwrap();
        assert!(logs_contain("Registering projection EPSG:3006"));
        assert!(logs_contain("Ignoring unknown TileJSON property grids"));
    }

    #[test]
    fn crs_without_projection_stays_spherical() {
        let registry = ShiftRegistry::default();
        let mut document = doc();
        document["crs"] = json!("EPSG:3857");
        document["center"] = json!([15, 60, 4]);
        let ctx = TileJsonReader::new(&registry)
            .parse(&document, &ParseOptions::default())
            .unwrap();
        assert_eq!(ctx.tile_layer.spherical_mercator, Some(true));
        assert_eq!(ctx.center, Some(Point::new(15.0, 60.0)));
    }

    #[test]
    fn spherical_mode_clears_caller_projection() {
        let registry = ShiftRegistry::default();
        let options = ParseOptions::with_tile_layer_config(TileLayerConfig {
            projection: Some(Projection::new("EPSG:3006")),
            ..TileLayerConfig::default()
        });
        let ctx = TileJsonReader::new(&registry).parse(&doc(), &options).unwrap();
        assert_eq!(ctx.tile_layer.projection, None);
        assert_eq!(ctx.tile_layer.spherical_mercator, Some(true));
    }

    #[test]
    fn version_is_checked_before_other_properties() {
        let registry = ShiftRegistry::default();
        let reader = TileJsonReader::new(&registry);
        let err = reader
            .parse(&json!({"name": 5, "minzoom": "low"}), &ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, TileJsonError::ValidationError("version")));

        let err = reader
            .parse(
                &json!({"tilejson": "3.0.0", "name": 5}),
                &ParseOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, TileJsonError::VersionError(v) if v == "3.0.0"));

        let err = reader
            .parse(
                &json!({"tilejson": "2.0.0", "name": 5}),
                &ParseOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, TileJsonError::InvalidField("name", _)));
    }

    #[test]
    fn projection_without_crs() {
        let registry = ShiftRegistry::default();
        let mut document = doc();
        document["projection"] = json!("+proj=utm +zone=33");
        let err = TileJsonReader::new(&registry)
            .parse(&document, &ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, TileJsonError::ProjectionWithoutCrs));
    }

    #[test]
    fn map_center_can_be_disabled() {
        let registry = ShiftRegistry::default();
        let reader = TileJsonReader::new(&registry);
        let mut document = doc();
        document["center"] = json!([1, 2, 3]);

        let map = reader
            .create_map("map", &document, &ParseOptions::default())
            .unwrap();
        assert_eq!(map.center.map(|c| c.zoom), Some(3));
        assert_eq!(map.layers.len(), 1);

        let options = ParseOptions {
            set_center: Some(false),
            ..ParseOptions::default()
        };
        let map = reader.create_map("map", &document, &options).unwrap();
        assert_eq!(map.center, None);
    }

    #[test]
    fn no_tiles() {
        let registry = ShiftRegistry::default();
        let err = TileJsonReader::new(&registry)
            .create_tile_layer(&json!({"tilejson": "2.2.0"}), &ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, TileJsonError::NoTileUrls));
    }
}
