//! # Squash Scheduler Bot Main Entry Point
//!
//! Initializes logging and configuration, builds the in-memory poll state,
//! then runs the Telegram dispatcher and the health endpoint side by side.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use squash_scheduler_bot::bot::commands::Command;
use squash_scheduler_bot::bot::handlers::BotHandler;
use squash_scheduler_bot::config::Config;
use squash_scheduler_bot::services::health::HealthService;
use squash_scheduler_bot::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "squash_scheduler_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Arc::new(Config::from_env()?);

    info!("Starting Squash Scheduler Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - {} courts, {} time slots, HTTP port: {}",
        config.catalog.courts.len(),
        config.catalog.time_slots.len(),
        config.http_port
    );

    // In-memory session state; cleared on restart
    let state = AppState::new();

    // Initialize the bot and publish the command list
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    bot.set_my_commands(Command::bot_commands()).await?;
    let handler = BotHandler::new(state.clone(), config.clone());
    info!("Telegram bot initialized successfully");

    // Health check endpoint
    let health_service = HealthService::new(state.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run the dispatcher and the health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to finish, which means we are shutting down
    tokio::select! {
        result = bot_task => {
            if let Err(e) = result {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result = health_task => {
            if let Err(e) = result {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    info!("Application stopped");
    Ok(())
}
