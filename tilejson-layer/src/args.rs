use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{Parser, Subcommand};
use tile_grid_utils::Extent;

/// Defines the styles used for the CLI help output.
const HELP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Blue.on_default().bold())
    .usage(AnsiColor::Blue.on_default().bold())
    .literal(AnsiColor::White.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug, PartialEq)]
#[command(
    about,
    version,
    after_help = "Use RUST_LOG environment variable to control logging level, e.g. RUST_LOG=debug or RUST_LOG=tilejson_layer=debug. Use TILEJSON_LAYER_FORMAT to pick the log format: compact, full, pretty or json.",
    styles = HELP_STYLES
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the tiled layer configuration derived from a TileJSON file.
    Layer(LayerArgs),
    /// Print the map view, with its tiled layer, derived from a TileJSON file.
    Map(MapArgs),
    /// Resolve the address and URL of the tile covering a bounding box.
    Tile(TileArgs),
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct MetaArgs {
    /// TileJSON file to read.
    pub file: PathBuf,
    /// YAML file with parse options: tile_layer_config, map_config and set_center.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct LayerArgs {
    #[command(flatten)]
    pub meta: MetaArgs,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct MapArgs {
    #[command(flatten)]
    pub meta: MetaArgs,
    /// Id of the map element.
    #[arg(long, default_value = "map")]
    pub id: String,
    /// Do not center the map on the document's center, regardless of the options file.
    #[arg(long)]
    pub no_center: bool,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TileArgs {
    #[command(flatten)]
    pub meta: MetaArgs,
    /// Requested extent as `left,bottom,right,top` in layer coordinates.
    #[arg(long, allow_hyphen_values = true)]
    pub bbox: Extent,
    /// Map units per pixel of the view.
    #[arg(long)]
    pub resolution: f64,
    /// Zoom level of the view.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub zoom: i32,
}
