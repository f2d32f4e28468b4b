//! Reply Assistant server binary.

use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reply_assistant::adapters::ai::{OpenAIConfig, OpenAIProvider};
use reply_assistant::adapters::http::{app_router, ReplyHandlers, TemplateHandlers};
use reply_assistant::adapters::postgres::PostgresTemplateRepository;
use reply_assistant::application::{GenerateReplyHandler, ReplySettings};
use reply_assistant::config::{AiConfig, AppConfig};
use reply_assistant::ports::{AIProvider, TemplateRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config);
    config.validate().context("invalid configuration")?;

    tracing::info!(
        environment = ?config.server.environment,
        "Starting reply-assistant v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Database
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await
        .context("failed to connect to database")?;

    if config.database.run_migrations {
        sqlx::migrate!()
            .run(&pool)
            .await
            .context("failed to run migrations")?;
        tracing::info!("Database migrations applied");
    }

    let templates: Arc<dyn TemplateRepository> = Arc::new(PostgresTemplateRepository::new(pool));

    // Completion provider
    let provider = build_provider(&config.ai)?;
    if provider.is_none() {
        tracing::warn!("No OpenAI API key configured; reply generation will fail until one is set");
    }

    let generate_reply = GenerateReplyHandler::new(provider, templates.clone(), reply_settings(&config.ai));

    let app = app_router(
        TemplateHandlers::new(templates),
        ReplyHandlers::new(Arc::new(generate_reply)),
        &config.server,
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn build_provider(ai: &AiConfig) -> anyhow::Result<Option<Arc<dyn AIProvider>>> {
    let Some(key) = ai.api_key() else {
        return Ok(None);
    };

    let openai = OpenAIConfig::new(key)
        .with_base_url(ai.base_url.clone())
        .with_timeout(ai.timeout());
    let provider = OpenAIProvider::new(openai).context("failed to build OpenAI client")?;
    Ok(Some(Arc::new(provider)))
}

fn reply_settings(ai: &AiConfig) -> ReplySettings {
    ReplySettings {
        default_model: ai.default_model.clone(),
        default_token_limit: ai.default_token_limit,
        temperature: ai.temperature,
        reasoning_effort: ai.reasoning_effort,
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
