mod commands;
mod lookup;

use clap::Parser;
use commands::Mode;
use dearbabla_core::config;
use dearbabla_fetch::BablaFetcher;
use dearbabla_store::Store;
use lookup::Lookup;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "dearbabla",
    version,
    about = "Helps you learn and memorize English by providing translations and exercises."
)]
struct Cli {
    /// Words to operate on. Without any, shows a random learned word.
    words: Vec<String>,

    /// Show how many words were already collected.
    #[arg(long)]
    count: bool,

    /// Wait before revealing the quiz translation.
    #[arg(long)]
    delay: bool,

    /// Delete disappointing translations of the given words.
    #[arg(long)]
    delete: bool,

    /// Do not store fetched translations, just query bab.la.
    #[arg(long)]
    nostore: bool,

    /// Path to config file.
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.dearbabla.log_level)),
        )
        .init();

    // Refuse to do anything without a valid store location.
    let db_path = config::db_path_from_env()?;

    let store = Store::new(&db_path).await?;
    let fetcher = BablaFetcher::from_config(&cfg.fetch)?;
    let lookup = Lookup::new(Box::new(fetcher), store);

    let delay = cli
        .delay
        .then(|| Duration::from_secs(cfg.quiz.delay_secs));
    let mode = Mode::select(cli.words, cli.count, cli.delete, cli.nostore, delay);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&lookup, mode, &mut out).await
}
