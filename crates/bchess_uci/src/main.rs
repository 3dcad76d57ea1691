use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use bchess_core::EngineConfig;

mod protocol;

use protocol::{Flow, UciSession};

const CONFIG_ENV: &str = "BCHESS_CONFIG";

/// `--config <path>` or `--config=<path>`, else the environment variable.
fn config_path() -> Result<Option<PathBuf>> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().context("--config needs a path")?;
            return Ok(Some(PathBuf::from(path)));
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Ok(Some(PathBuf::from(path)));
        }
        bail!("unknown argument '{arg}'");
    }
    Ok(std::env::var_os(CONFIG_ENV).map(PathBuf::from))
}

fn main() -> Result<()> {
    let config = match config_path()? {
        Some(path) => EngineConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    // stdout carries the protocol, so logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(
        default_depth = config.default_depth,
        max_depth = config.max_depth,
        "bchess starting"
    );
    bchess_core::attacks::init();

    let mut session = UciSession::new(config);
    let mut stdout = io::stdout().lock();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let flow = session
            .handle_line(&line, &mut stdout)
            .context("failed to write to stdout")?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}
