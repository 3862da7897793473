//! glyphmine binary entry point

use clap::Parser;
use glyphmine_cli::commands::Commands;

/// Mine glyph confusion patterns from partitioned name corpora
#[derive(Parser)]
#[command(name = "glyphmine", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Mine(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    };
    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
