use std::env;

use clap::Parser;
use log::log_enabled;
use tilejson_layer::args::Args;
use tilejson_layer::commands::run;
use tilejson_layer::logging::{LOG_FORMAT_ENV, ensure_core_log_level_matches, init_tracing};
use tracing::error;

fn main() {
    let filter = ensure_core_log_level_matches(env::var("RUST_LOG").ok(), "tilejson_layer=");
    init_tracing(&filter, env::var(LOG_FORMAT_ENV).ok());

    let args = Args::parse();
    match run(&args.command, &subst::Env) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            // Ensure the message is printed, even if the logging is disabled
            if log_enabled!(log::Level::Error) {
                error!("{e}");
            } else {
                eprintln!("{e}");
            }
            std::process::exit(1);
        }
    }
}
