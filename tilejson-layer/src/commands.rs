use std::fs;
use std::path::Path;

use serde::Serialize;
use subst::VariableMap;
use tile_grid_utils::{TileAddress, ViewState};
use tilejson_layer_core::config::ParseOptions;
use tilejson_layer_core::tilejson::{self, ParseContext};
use tracing::{debug, info};

use crate::args::{Command, LayerArgs, MapArgs, MetaArgs, TileArgs};
use crate::config::read_config;
use crate::{TileJsonLayerError, TileJsonLayerResult};

/// Address and URL of a resolved tile, as printed by the `tile` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTile {
    pub address: TileAddress,
    pub url: String,
}

/// Runs a command, returning the pretty-printed JSON it outputs.
pub fn run<'a, M>(command: &Command, env: &'a M) -> TileJsonLayerResult<String>
where
    M: VariableMap<'a>,
    M::Value: AsRef<str>,
{
    match command {
        Command::Layer(args) => layer(args, env),
        Command::Map(args) => map(args, env),
        Command::Tile(args) => tile(args, env),
    }
}

fn load_options<'a, M>(meta: &MetaArgs, env: &'a M) -> TileJsonLayerResult<ParseOptions>
where
    M: VariableMap<'a>,
    M::Value: AsRef<str>,
{
    if let Some(config) = &meta.config {
        info!("Using {}", config.display());
        read_config(config, env)
    } else {
        debug!("Options file is not specified, using defaults");
        Ok(ParseOptions::default())
    }
}

fn read_document(file: &Path) -> TileJsonLayerResult<serde_json::Value> {
    let contents = fs::read_to_string(file)
        .map_err(|e| TileJsonLayerError::TileJsonReadError(e, file.into()))?;
    serde_json::from_str(&contents).map_err(|e| {
        TileJsonLayerError::TileJsonParseError(tilejson::TileJsonError::JsonError(e), file.into())
    })
}

fn with_path<T>(result: tilejson::TileJsonResult<T>, file: &Path) -> TileJsonLayerResult<T> {
    result.map_err(|e| TileJsonLayerError::TileJsonParseError(e, file.into()))
}

fn layer<'a, M>(args: &LayerArgs, env: &'a M) -> TileJsonLayerResult<String>
where
    M: VariableMap<'a>,
    M::Value: AsRef<str>,
{
    let options = load_options(&args.meta, env)?;
    let document = read_document(&args.meta.file)?;
    let ctx: ParseContext = with_path(tilejson::parse(&document, &options), &args.meta.file)?;
    Ok(serde_json::to_string_pretty(&ctx.tile_layer)?)
}

fn map<'a, M>(args: &MapArgs, env: &'a M) -> TileJsonLayerResult<String>
where
    M: VariableMap<'a>,
    M::Value: AsRef<str>,
{
    let mut options = load_options(&args.meta, env)?;
    if args.no_center {
        options.set_center = Some(false);
    }
    let document = read_document(&args.meta.file)?;
    let map = with_path(
        tilejson::create_map(&args.id, &document, &options),
        &args.meta.file,
    )?;
    Ok(serde_json::to_string_pretty(&map)?)
}

fn tile<'a, M>(args: &TileArgs, env: &'a M) -> TileJsonLayerResult<String>
where
    M: VariableMap<'a>,
    M::Value: AsRef<str>,
{
    if !args.resolution.is_finite() || args.resolution <= 0.0 {
        return Err(TileJsonLayerError::InvalidResolution(args.resolution));
    }
    let options = load_options(&args.meta, env)?;
    let document = read_document(&args.meta.file)?;
    let layer = with_path(
        tilejson::create_tile_layer(&document, &options),
        &args.meta.file,
    )?;

    let view = ViewState {
        resolution: args.resolution,
        zoom: args.zoom,
    };
    let address = layer.tile_address(&args.bbox, view);
    info!("Resolved {} to tile {address:#}", args.bbox);
    let resolved = ResolvedTile {
        address,
        url: layer.tile_url(&args.bbox, view),
    };
    Ok(serde_json::to_string_pretty(&resolved)?)
}
