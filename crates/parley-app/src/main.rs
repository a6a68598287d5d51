//! Parley application binary - composition root.
//!
//! 1. Install tracing, then load configuration from TOML
//! 2. Train the intent model and build the entity extractor
//! 3. Build the weather, news, and knowledge clients
//! 4. Answer one `--message`, or start the axum API server

mod cli;

use std::sync::Arc;

use clap::Parser;
use parley_api::state::AppState;
use parley_chat::{ChatService, Dispatcher};
use parley_nlu::{EntityExtractor, TrainedModel};
use parley_services::{HeadlinesQuery, NewsApiClient, OpenWeatherClient, WikipediaClient};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing. RUST_LOG wins; otherwise --log-level, else "info" until the
    // config file has been read.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let override_filter = env_filter.is_some() || args.log_level.is_some();
    let initial = env_filter.unwrap_or_else(|| {
        EnvFilter::new(args.log_level.as_deref().unwrap_or("info"))
    });
    let (filter, filter_handle) = reload::Layer::new(initial);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Parley v{}", env!("CARGO_PKG_VERSION"));

    // Config.
    let resolved = match args.resolve_config() {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };
    if resolved.from_file {
        tracing::info!(path = %resolved.path.display(), "Configuration loaded");
    } else {
        tracing::info!(path = %resolved.path.display(), "No configuration file, using defaults");
    }
    let config = resolved.config;

    if !override_filter {
        filter_handle.reload(EnvFilter::new(&config.general.log_level))?;
    }

    // NLU.
    let model = TrainedModel::initialize(&config.nlu)?;
    let extractor = EntityExtractor::from_config(&config.entities)?;

    // Collaborators.
    let weather = OpenWeatherClient::new(&config.weather)?;
    if !weather.has_api_key() {
        tracing::warn!(
            env_var = %config.weather.api_key_env,
            "Weather API key not configured; weather requests will explain this to users"
        );
    }
    let news = NewsApiClient::new(&config.news)?;
    if !news.has_api_key() {
        tracing::warn!(
            env_var = %config.news.api_key_env,
            "News API key not configured; news requests will explain this to users"
        );
    }
    let knowledge = WikipediaClient::new(&config.knowledge)?;
    let dispatcher = Dispatcher::new(
        Arc::new(weather),
        Arc::new(news),
        Arc::new(knowledge),
        HeadlinesQuery::from_config(&config.news),
    );

    let chat = ChatService::new(
        Arc::new(model),
        Arc::new(extractor),
        Arc::new(dispatcher),
        &config.chat,
    );

    if let Some(message) = args.message.as_deref() {
        println!("{}", chat.respond(message).await);
        return Ok(());
    }

    let state = AppState::new(chat, config);
    parley_api::start_server(state).await?;

    Ok(())
}
