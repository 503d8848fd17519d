use chrono::Duration;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::service::manager::SessionManager;

pub mod command;
pub mod component;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub manager: SessionManager,
    pub min_member_age: Duration,
}

impl Handler {
    pub fn new(manager: SessionManager, min_member_age: Duration) -> Self {
        Self {
            manager,
            min_member_age,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.manager, ctx, ready).await;
    }

    /// Called for every button click and slash command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Component(component) => {
                component::handle_component(&self.manager, self.min_member_age, ctx, component)
                    .await;
            }
            Interaction::Command(command) => {
                command::handle_command(&self.manager, ctx, command).await;
            }
            _ => {}
        }
    }
}
