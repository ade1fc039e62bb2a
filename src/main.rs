use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use tangier_live::core::config::{self, ConfigNote, ResolvedConfig};
use tangier_live::core::language::Language;
use tangier_live::tui;

#[derive(Parser)]
#[command(name = "tangier-live", about = "Tangier travel companion for the terminal")]
struct Args {
    /// Starting language
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Start in dark mode
    #[arg(short, long)]
    dark: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // The logger needs the resolved config, so everything config has to
    // say is held as notes until it is up.
    let loaded = config::load_config();
    let resolved = match &loaded {
        Ok(loaded) => config::resolve(&loaded.config, args.language, args.dark),
        Err(_) => config::resolve(&Default::default(), args.language, args.dark),
    };

    init_logging(&resolved);

    match &loaded {
        Ok(loaded) => loaded.notes.iter().for_each(ConfigNote::log),
        Err(e) => log::warn!("Failed to load config, using defaults: {}", e),
    }
    resolved.notes.iter().for_each(ConfigNote::log);
    log::info!(
        "Tangier Live starting up (language: {}, dark_mode: {})",
        resolved.language.code(),
        resolved.dark_mode
    );

    tui::run(resolved)
}

fn init_logging(resolved: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
}
