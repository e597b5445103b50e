use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wiki::application::{Form, RouteUrls, Schema};
use wiki::infrastructure::web::{serve, AppState, HtmlTemplates};
use wiki::infrastructure::{InMemoryPageRepository, WikiConfig};

#[derive(Debug, Parser)]
#[command(name = "wiki", version, about = "A small form-driven wiki server")]
struct Cli {
    /// TOML config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Address to listen on, overrides config and WIKI_BIND
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = WikiConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    let seed = config.seed_pages().context("building seed pages")?;
    tracing::info!("Seeding store with {} pages", seed.len());
    let repository = InMemoryPageRepository::with_seed(seed);

    let routes = RouteUrls::new(config.base_url());
    let state = AppState::new(
        repository,
        Form::new(Schema::wiki_page()),
        routes.clone(),
        HtmlTemplates::new(routes),
    );

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("binding {}", config.server.bind))?;

    serve(listener, state, shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
