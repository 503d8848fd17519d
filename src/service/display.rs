//! Button display content and the renderer seam.
//!
//! The session builds a `Display` (message text plus button descriptors) and hands it to a
//! `Renderer`, which owns every Discord call. The content builders here are pure so the text
//! can be tested without a gateway.

use chrono::{DateTime, Utc};
use serenity::async_trait;
use std::collections::HashMap;

use crate::{
    error::AppError,
    model::{
        claim::{Claim, LeaderboardEntry, UserSummary},
        session::{GameState, RenderHandle},
    },
    service::antibot::ButtonDescriptor,
    util::format::{format_score, rank_to_ordinal},
};

/// Number of members listed on the live display.
pub const DISPLAY_LEADERBOARD_SIZE: usize = 10;

/// File name of the published leaderboard artifact.
pub const LEADERBOARD_FILE_NAME: &str = "scoreboard.txt";

/// Message content and buttons of the button display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pub content: String,
    pub buttons: Vec<ButtonDescriptor>,
}

/// Outbound side of the button display.
///
/// Implemented against the Discord HTTP API in production and by recording mocks in tests.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Edits the displayed message in place.
    async fn edit_display(&self, handle: RenderHandle, display: &Display) -> Result<(), AppError>;

    /// Posts a new display message in a channel.
    async fn create_display(&self, channel_id: u64, display: &Display)
        -> Result<RenderHandle, AppError>;

    /// Deletes a display message.
    async fn delete_display(&self, handle: RenderHandle) -> Result<(), AppError>;

    /// Posts a text file with a short message in a channel.
    async fn publish_artifact(
        &self,
        channel_id: u64,
        content: &str,
        file_name: &str,
        body: String,
    ) -> Result<(), AppError>;

    /// Resolves member display names; members that cannot be resolved are left out.
    async fn display_names(&self, guild_id: u64, user_ids: &[u64]) -> HashMap<u64, String>;
}

/// Content shown before the event starts.
pub fn waiting_content(start: DateTime<Utc>) -> String {
    format!(
        "The game has not started yet, come back <t:{}:R> :)",
        start.timestamp()
    )
}

/// Content shown while the event runs and after it ends.
///
/// # Arguments
/// - `top` - Leading members, already limited to the display size
/// - `last_claim` - Most recent claim, if any
pub fn scoreboard_content(top: &[LeaderboardEntry], last_claim: Option<&Claim>) -> String {
    let mut content = format!("Scoreboard (top {}):\n", DISPLAY_LEADERBOARD_SIZE);

    if top.is_empty() {
        content.push_str("No score yet");
    } else {
        for entry in top {
            content.push_str(&format!(
                "<@{}> - {}\n",
                entry.user_id,
                format_score(entry.total)
            ));
        }
    }

    if let Some(claim) = last_claim {
        content.push_str(&format!(
            "\n\nLast click: <@{}> - {}",
            claim.user_id,
            format_score(claim.amount)
        ));
    }

    content
}

/// Content of a freshly created display, before any claim exists.
pub fn initial_content(state: GameState, start: DateTime<Utc>) -> String {
    match state {
        GameState::Waiting => waiting_content(start),
        _ => scoreboard_content(&[], None),
    }
}

/// Full leaderboard as text, one ranked line per member.
///
/// # Arguments
/// - `entries` - Every member by descending total
/// - `names` - Display names by user ID; missing members fall back to their ID
///
/// # Returns
/// - `String` - Lines of `"<ordinal>: <name> - <amount> diamond(s)"`
pub fn leaderboard_artifact(entries: &[LeaderboardEntry], names: &HashMap<u64, String>) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let name = names
                .get(&entry.user_id)
                .cloned()
                .unwrap_or_else(|| entry.user_id.to_string());
            format!(
                "{}: {} - {}",
                rank_to_ordinal(index as u64),
                name,
                format_score(entry.total)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reply shown to a member reading their own score.
pub fn user_summary_content(summary: &UserSummary) -> String {
    let mut content = format!(
        "You have taken a total of {}!\nYou are currently ranked **{}** out of {} players\nHere are your claims:",
        format_score(summary.total),
        rank_to_ordinal(summary.rank.saturating_sub(1)),
        summary.player_count
    );

    for (index, slot) in summary.slots().into_iter().enumerate() {
        let amount = slot.map(format_score).unwrap_or_else(|| "N/A".to_string());
        content.push_str(&format!("\n{} - {}", index + 1, amount));
    }

    content
}
