//! Starlog - changelog generation from conventional commit history

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use starlog::{exit_codes, Cli};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = cli.execute() {
        eprintln!("error: {e}");
        std::process::exit(exit_codes::for_error(&e));
    }
}

/// Set up console tracing, controlled by RUST_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}
