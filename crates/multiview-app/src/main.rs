mod cli;
mod session;

use std::io::{Read, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use multiview_common::{new_id, Result};
use multiview_config::MultiviewConfig;

use session::{parse_script, Session};

fn run(args: &cli::Args, config: &MultiviewConfig) -> Result<()> {
    let text = match &args.script {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let commands = parse_script(&text)?;
    let session_id = new_id();
    tracing::info!(session = %session_id, commands = commands.len(), "replaying session");

    let mut session = Session::new(config, std::io::stdout().lock());
    session.run(&commands)?;
    tracing::info!(
        session = %session_id,
        audible = ?session.coordinator().unmuted_slot().map(|s| s.to_string()),
        "session finished"
    );
    session.into_output().flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config first: it supplies the default log level.
    let loaded = match &args.config {
        Some(path) => multiview_config::load_config_from(path),
        None => multiview_config::load_config(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (MultiviewConfig::default(), Some(e)),
    };

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    let filter = EnvFilter::builder()
        .parse(&directive)
        .unwrap_or_else(|_| EnvFilter::new("multiview=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Multiview v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
