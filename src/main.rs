use clap::Parser;
use tracing_subscriber::EnvFilter;

use evalbridge::app;
use evalbridge::cli::Cli;

fn main() {
    // Stdout belongs to the protocol (status lines the caller may read);
    // diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = app::run(&cli) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}
