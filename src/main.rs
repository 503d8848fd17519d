mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use serenity::all::Http;
use std::sync::Arc;

use crate::{
    bot::renderer::DiscordRenderer,
    config::Config,
    error::AppError,
    scheduler::antibot_rotation,
    service::{
        clock::SystemClock, game::RenderPolicy, game::SessionContext, manager::SessionManager,
        notification::TracingNotifier,
    },
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    // Sessions render through their own HTTP client so they keep running across gateway
    // reconnects
    let http = Arc::new(Http::new(&config.discord_bot_token));

    let manager = SessionManager::new(SessionContext {
        db,
        renderer: Arc::new(DiscordRenderer::new(http)),
        notifier: Arc::new(TracingNotifier),
        clock: Arc::new(SystemClock),
        policy: RenderPolicy::default(),
    });

    // Start antibot rotation scheduler
    let scheduler_manager = manager.clone();
    tokio::spawn(async move {
        if let Err(e) = antibot_rotation::start_scheduler(scheduler_manager).await {
            tracing::error!("Antibot rotation scheduler error: {}", e);
        }
    });

    tracing::info!("Starting The Button");

    bot::start::start_bot(&config, manager).await
}
