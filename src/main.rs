//! Entry point: parse CLI, set up logging and run the prompt loop.

use std::io;

use anyhow::Context;
use clap::Parser;
use log::debug;
use nba_stats::{
    api::{balldontlie::BallDontLie, sportsdb::SportsDb, PlayerApi},
    cli::{resolve_base_url, Cli},
    session::Session,
    DataSource,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Cli::parse();

    let default_level = if app.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let base_url = resolve_base_url(app.base_url, app.source);
    debug!("Using {} source at {}", app.source, base_url);

    match app.source {
        DataSource::Stats => {
            let api = BallDontLie::new(base_url).context("failed to build HTTP client")?;
            run(&api).await
        }
        DataSource::Detail => {
            let api = SportsDb::new(base_url).context("failed to build HTTP client")?;
            run(&api).await
        }
    }
}

async fn run<A: PlayerApi>(api: &A) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(api, stdin.lock(), stdout.lock());
    session.run().await.context("console I/O failed")?;
    Ok(())
}
