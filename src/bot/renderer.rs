//! Discord implementation of the display seam.

use serenity::all::{
    ButtonStyle, ChannelId, CreateActionRow, CreateAllowedMentions, CreateAttachment,
    CreateButton, CreateMessage, EditMessage, EmojiId, GuildId, Http, MessageId, ReactionType,
};
use serenity::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    error::AppError,
    model::session::RenderHandle,
    service::{
        antibot::{ButtonDescriptor, ButtonTone},
        display::{Display, Renderer},
    },
};

/// Maximum members returned by one member list request.
const MEMBERS_PER_REQUEST: u64 = 1000;

/// Renders button displays through the Discord HTTP API.
///
/// Mentions in the scoreboard are displayed but never ping anyone.
pub struct DiscordRenderer {
    http: Arc<Http>,
}

impl DiscordRenderer {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Renderer for DiscordRenderer {
    async fn edit_display(&self, handle: RenderHandle, display: &Display) -> Result<(), AppError> {
        let message = EditMessage::new()
            .content(&display.content)
            .components(components(&display.buttons))
            .allowed_mentions(CreateAllowedMentions::new());

        self.http
            .edit_message(
                ChannelId::new(handle.channel_id),
                MessageId::new(handle.message_id),
                &message,
                vec![],
            )
            .await?;

        Ok(())
    }

    async fn create_display(
        &self,
        channel_id: u64,
        display: &Display,
    ) -> Result<RenderHandle, AppError> {
        let message = CreateMessage::new()
            .content(&display.content)
            .components(components(&display.buttons))
            .allowed_mentions(CreateAllowedMentions::new());

        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(RenderHandle {
            channel_id,
            message_id: sent.id.get(),
        })
    }

    async fn delete_display(&self, handle: RenderHandle) -> Result<(), AppError> {
        self.http
            .delete_message(
                ChannelId::new(handle.channel_id),
                MessageId::new(handle.message_id),
                None,
            )
            .await?;

        Ok(())
    }

    async fn publish_artifact(
        &self,
        channel_id: u64,
        content: &str,
        file_name: &str,
        body: String,
    ) -> Result<(), AppError> {
        let message = CreateMessage::new()
            .content(content)
            .add_file(CreateAttachment::bytes(body.into_bytes(), file_name))
            .allowed_mentions(CreateAllowedMentions::new());

        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }

    /// Pages through the guild's member list until every requested member is found.
    ///
    /// A failed page stops the lookup; members not resolved by then are left out.
    async fn display_names(&self, guild_id: u64, user_ids: &[u64]) -> HashMap<u64, String> {
        let mut names = HashMap::new();
        let mut after: Option<u64> = None;

        while names.len() < user_ids.len() {
            let members = match self
                .http
                .get_guild_members(GuildId::new(guild_id), Some(MEMBERS_PER_REQUEST), after)
                .await
            {
                Ok(members) => members,
                Err(e) => {
                    tracing::error!("Failed to fetch guild {} members: {}", guild_id, e);
                    break;
                }
            };

            let fetched_count = members.len();
            after = members.last().map(|m| m.user.id.get());

            for member in members {
                let user_id = member.user.id.get();
                if user_ids.contains(&user_id) {
                    names.insert(user_id, member.display_name().to_string());
                }
            }

            if fetched_count < MEMBERS_PER_REQUEST as usize {
                break;
            }
        }

        names
    }
}

fn components(buttons: &[ButtonDescriptor]) -> Vec<CreateActionRow> {
    let buttons = buttons
        .iter()
        .map(|descriptor| {
            let mut button = CreateButton::new(&descriptor.custom_id)
                .label(&descriptor.label)
                .style(button_style(descriptor.tone))
                .disabled(descriptor.disabled);
            if let Some(emoji) = &descriptor.emoji {
                button = button.emoji(reaction(emoji));
            }
            button
        })
        .collect();

    vec![CreateActionRow::Buttons(buttons)]
}

fn button_style(tone: ButtonTone) -> ButtonStyle {
    match tone {
        ButtonTone::Danger => ButtonStyle::Danger,
        ButtonTone::Primary => ButtonStyle::Primary,
        ButtonTone::Secondary => ButtonStyle::Secondary,
        ButtonTone::Success => ButtonStyle::Success,
    }
}

/// Stored emojis are either a custom emoji id or a unicode emoji.
fn reaction(emoji: &str) -> ReactionType {
    match emoji.parse::<u64>() {
        Ok(id) if id != 0 => ReactionType::Custom {
            animated: false,
            id: EmojiId::new(id),
            name: None,
        },
        _ => ReactionType::Unicode(emoji.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::session::GameState, service::antibot::layout_buttons};

    #[test]
    fn custom_emoji_id_becomes_custom_reaction() {
        assert_eq!(
            reaction("1082801315832406016"),
            ReactionType::Custom {
                animated: false,
                id: EmojiId::new(1082801315832406016),
                name: None,
            }
        );
    }

    #[test]
    fn unicode_emoji_is_kept() {
        assert_eq!(reaction("💎"), ReactionType::Unicode("💎".to_string()));
    }

    #[test]
    fn tones_map_to_styles() {
        assert_eq!(button_style(ButtonTone::Danger), ButtonStyle::Danger);
        assert_eq!(button_style(ButtonTone::Success), ButtonStyle::Success);
    }

    #[test]
    fn display_fits_one_row() {
        let buttons = layout_buttons(2, GameState::Started, 12, "💎");

        assert_eq!(components(&buttons).len(), 1);
    }
}
