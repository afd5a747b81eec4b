use anyhow::Context;
use clap::Parser;
use greeter::config::{Config, Revision, SessionStore};
use greeter::logging;
use greeter::shutdown::ShutdownCoordinator;
use greeter::ui::app::App;
use greeter::ui::runtime;
use std::path::PathBuf;

/// Onboarding screen followed by a list of expandable greetings.
#[derive(Debug, Parser)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Feature level to run; overrides the config file.
    #[arg(long, value_enum)]
    revision: Option<Revision>,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Forget the saved session and show onboarding again.
    #[arg(long)]
    fresh: bool,

    /// Log file to write instead of the default location.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    if let Err(err) = logging::init(&log_path) {
        eprintln!("Warning: logging disabled: {err:#}");
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(revision) = args.revision {
        config.revision = revision;
    }

    let session = config
        .revision
        .persists_onboarding()
        .then(|| SessionStore::new(SessionStore::default_path()));
    if args.fresh {
        if let Some(store) = &session {
            store.clear().context("Failed to clear saved session")?;
            tracing::info!(path = %store.path().display(), "Saved session cleared");
        }
    }

    let shutdown = ShutdownCoordinator::new();
    shutdown
        .install_signal_handlers()
        .context("Failed to install signal handlers")?;

    tracing::info!(revision = config.revision.label(), "Starting greeter");
    let app = App::new(&config, session);
    runtime::run(app, config.frame_interval(), shutdown.handle())
        .context("Terminal UI failed")?;
    tracing::info!("Exited cleanly");
    Ok(())
}
