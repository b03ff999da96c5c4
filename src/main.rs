use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use hexfetch::core::{config, deck};
use hexfetch::{cli, tui};

#[derive(Parser)]
#[command(name = "hexfetch", about = "Terminal hexagram oracle", version)]
struct Args {
    /// Run in text mode: cast once, print, exit
    #[arg(short, long)]
    text: bool,

    /// Temporarily use a specific deck (overrides the configured default)
    #[arg(short, long)]
    deck: Option<String>,

    /// Open the configuration view to pick a default deck
    #[arg(short, long)]
    options: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // File logger: stdout belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("hexfetch.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("hexfetch {} starting", hexfetch::VERSION);

    if args.options {
        return tui::run_options();
    }

    let deck_name = args.deck.or_else(|| config::load_config().default_deck);
    let deck = deck::load_deck(deck_name.as_deref());

    if args.text {
        cli::run(&deck);
        Ok(())
    } else {
        tui::run(&deck)
    }
}
