//! Lua 5.3 chunk listing CLI
//!
//! Entry point for `luac-list`. Parses CLI arguments, installs logging and
//! prints the listing of the requested chunk.

use clap::Parser;
use luac_list::{list_file, Cli};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match list_file(&cli.file, cli.list_options()) {
        Ok(listing) => print!("{}", listing),
        Err(e) => {
            error!("{}", e);
            eprintln!("luac-list: {}", e);
            std::process::exit(1);
        }
    }
}
