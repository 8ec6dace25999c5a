use clap::Parser;
use pstore::cli::{self, Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if cli.debug || cli.trace { "debug" } else { "warn" })
    });
    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init(),
    }

    let cfg = cli.resolve_config()?;
    tracing::debug!(
        path = %cfg.source.path.display(),
        strategy = %cfg.loader.strategy,
        "config resolved"
    );

    let command = cli
        .command
        .clone()
        .unwrap_or(Command::Summary { json: false });
    cli::run(&command, &cfg, &mut std::io::stdout().lock())
}
