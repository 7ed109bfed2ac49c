use clap::Parser;
use std::io::{self, BufWriter};

use glyphgrid::cli::{handle_config_action, Args, Command};
use glyphgrid::config::Config;
use glyphgrid::glyph::DecoderRegistry;
use glyphgrid::pipeline;

fn main() {
    // Logs go to stderr; stdout carries only the glyph grid
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(Command::Config { action }) = &args.command {
        if let Err(e) = handle_config_action(action, args.config.as_deref()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // If --config is specified, require the file to exist
    // Otherwise, fall back to defaults if the default config is unusable
    let cfg = match &args.config {
        Some(path) => match Config::load_from_explicit(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config file: {}. Using default settings.", e);
            Config::default()
        }),
    };

    let pipeline_config = match args.pipeline_config(&cfg) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let registry = DecoderRegistry::default();
    let mut out = BufWriter::new(io::stdout().lock());

    match pipeline::run(&pipeline_config, &registry, &mut out) {
        Ok(grid) => log::info!("Rendered {}x{} glyphs", grid.width(), grid.height()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
