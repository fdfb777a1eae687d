//! Loading of [`ParseOptions`] from YAML files.
//!
//! `${VAR}` and `${VAR:default}` references are substituted from the environment before parsing.

use std::fs::File;
use std::io::Read as _;
use std::path::Path;

use subst::VariableMap;
use tilejson_layer_core::config::ParseOptions;

use crate::{TileJsonLayerError, TileJsonLayerResult};

/// Reads parse options from a YAML file.
pub fn read_config<'a, M>(file_name: &Path, env: &'a M) -> TileJsonLayerResult<ParseOptions>
where
    M: VariableMap<'a>,
    M::Value: AsRef<str>,
{
    let mut file = File::open(file_name)
        .map_err(|e| TileJsonLayerError::ConfigLoadError(e, file_name.into()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| TileJsonLayerError::ConfigLoadError(e, file_name.into()))?;
    parse_config(&contents, env, file_name)
}

pub fn parse_config<'a, M>(
    contents: &str,
    env: &'a M,
    file_name: &Path,
) -> TileJsonLayerResult<ParseOptions>
where
    M: VariableMap<'a>,
    M::Value: AsRef<str>,
{
    subst::yaml::from_str(contents, env)
        .map_err(|e| TileJsonLayerError::ConfigParseError(e, file_name.into()))
}
