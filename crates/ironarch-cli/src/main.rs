//! Iron Architect command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Rotate the reference fingerprint
//! ironarch fingerprint 'new passphrase'
//!
//! # Enter owner mode, passphrase read from stdin
//! ironarch login
//!
//! # Render the lab grid as the current mode sees it
//! ironarch render labs --filter Advanced --data-dir site/data
//! ```

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use ironarch_cli::{Cli, SystemEnv, run};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    tracing::debug!(state_dir = %cli.state_dir.display(), "ironarch starting");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match run(&cli, SystemEnv::new(), &mut input, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = writeln!(io::stderr(), "{e}");
            ExitCode::FAILURE
        },
    }
}
