//! Button click handling.
//!
//! Clicks are routed by custom id: the real claim button claims, the score button shows the
//! member's summary and the decoys answer with a hint. Every reply is ephemeral, and failures
//! are turned into a reply through `AppError::user_message`.

use chrono::{Duration, Utc};
use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    GuildId, Member,
};

use crate::{
    error::AppError,
    model::claim::ClaimOutcome,
    service::{
        antibot::{button_kind, ButtonKind},
        display::user_summary_content,
        eligibility::{is_booster, joined_recently},
        manager::SessionManager,
    },
    util::format::format_score,
};

/// Handles a component interaction.
///
/// # Arguments
/// - `manager` - Session manager owning the guild's button
/// - `min_member_age` - Minimum membership age required to claim
/// - `ctx` - Discord context
/// - `interaction` - The component interaction to answer
pub async fn handle_component(
    manager: &SessionManager,
    min_member_age: Duration,
    ctx: Context,
    interaction: ComponentInteraction,
) {
    let Some(kind) = button_kind(&interaction.data.custom_id) else {
        tracing::debug!("Ignoring unknown component {}", interaction.data.custom_id);
        return;
    };

    let content = match respond(manager, min_member_age, &ctx, &interaction, kind).await {
        Ok(content) => content,
        Err(e) => e.user_message(),
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );

    if let Err(e) = interaction.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to reply to {} from user {}: {}",
            interaction.data.custom_id,
            interaction.user.id,
            e
        );
    }
}

async fn respond(
    manager: &SessionManager,
    min_member_age: Duration,
    ctx: &Context,
    interaction: &ComponentInteraction,
    kind: ButtonKind,
) -> Result<String, AppError> {
    let guild_id = interaction
        .guild_id
        .ok_or_else(|| AppError::BadRequest("The button only works in a server.".to_string()))?;

    match kind {
        ButtonKind::Decoy => Ok("Not this one!".to_string()),
        ButtonKind::Claim => {
            let member = fetch_member(ctx, guild_id, interaction).await?;
            if joined_recently(&member, Utc::now(), min_member_age) {
                return Ok(recent_member_reply(min_member_age));
            }

            let outcome = manager
                .claim(guild_id.get(), interaction.user.id.get(), is_booster(&member))
                .await?;

            Ok(claim_reply(&outcome))
        }
        ButtonKind::ReadScore => {
            let member = fetch_member(ctx, guild_id, interaction).await?;
            let summary = manager
                .user_summary(guild_id.get(), interaction.user.id.get(), is_booster(&member))
                .await?;

            Ok(match summary {
                Some(summary) => user_summary_content(&summary),
                None => "You haven't taken any diamonds yet!".to_string(),
            })
        }
    }
}

/// Fetches the clicking member fresh so boost status and join date are current.
async fn fetch_member(
    ctx: &Context,
    guild_id: GuildId,
    interaction: &ComponentInteraction,
) -> Result<Member, AppError> {
    Ok(ctx.http.get_member(guild_id, interaction.user.id).await?)
}

fn claim_reply(outcome: &ClaimOutcome) -> String {
    format!(
        "You just took {} for a total of {}!",
        format_score(outcome.amount),
        format_score(outcome.total)
    )
}

fn recent_member_reply(min_member_age: Duration) -> String {
    format!(
        "You joined the server less than {} hours ago, you cannot use the button yet.",
        min_member_age.num_hours()
    )
}
