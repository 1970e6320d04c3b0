use std::env;

use anyhow::Result;
use jscomp_launcher::launcher::{Launcher, Mode};
use tracing_subscriber::EnvFilter;

/// Forwards all arguments to the stock compiler in the bundled archive and
/// relays its exit code.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = env::args_os().skip(1).collect();
    let code = Launcher::new(Mode::Compile, args).run()?;
    std::process::exit(code);
}
