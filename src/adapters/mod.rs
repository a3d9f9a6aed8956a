pub mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout stays parseable. `RUST_LOG` overrides the `warn` default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Fails only when a global subscriber is already installed; keep that one.
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_inputs};
    use crate::ph::calculator::{calculate_detailed, calculate_observations};

    init_tracing();

    let args = Args::parse();
    let (obs, cal) = parse_inputs(&args)?;

    if args.detailed {
        let rows = calculate_detailed(&obs, &cal)?;
        crate::adapters::cli::print_detailed(&obs, &rows, &args)?;
    } else {
        let out = calculate_observations(&obs, &cal)?;
        crate::adapters::cli::print_output(&obs, &out, &args)?;
    }

    Ok(())
}
