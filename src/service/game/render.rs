//! Display rendering and self-healing resends.
//!
//! While the session runs, the render loop edits the button message once per interval and
//! times each edit. Slow edits are logged; edits slower than the resend threshold mean the
//! message is no longer reliable, so a new message is posted, the old one deleted and the
//! stored message id replaced.

use std::sync::Arc;
use tokio::time::Instant;

use crate::{
    data::session::SessionRepository,
    error::AppError,
    model::session::{GameState, RenderHandle},
    service::{
        antibot::layout_buttons,
        clock::TimerHandle,
        display::{scoreboard_content, waiting_content, Display, DISPLAY_LEADERBOARD_SIZE},
    },
};

use super::GameSession;

impl GameSession {
    /// Builds the current display from the counter, the leaderboard and the antibot slot.
    pub async fn build_display(&self) -> Result<Display, AppError> {
        let state = self.state().await;

        let content = match state {
            GameState::Waiting => waiting_content(self.start_timestamp),
            GameState::Started | GameState::Ended => {
                let top = self
                    .counter
                    .leaderboard(Some(DISPLAY_LEADERBOARD_SIZE))
                    .await?;
                let last_claim = self.counter.latest_claim().await?;
                scoreboard_content(&top, last_claim.as_ref())
            }
        };

        let seconds = self.counter.seconds().await?;
        let buttons = layout_buttons(self.antibot.current(), state, seconds, &self.emoji);

        Ok(Display { content, buttons })
    }

    /// Renders the display once, replacing the message if the edit was too slow.
    ///
    /// A failed edit is logged and still timed, so an edit that hangs before failing also
    /// triggers the replacement.
    ///
    /// # Returns
    /// - `Ok(())` - Display rendered, possibly through a replacement message
    /// - `Err(AppError)` - Building the display or replacing the message failed
    pub async fn render_once(&self) -> Result<(), AppError> {
        let mut handle = self.display.lock().await;
        let display = self.build_display().await?;

        let started = Instant::now();
        if let Err(e) = self.renderer.edit_display(*handle, &display).await {
            tracing::error!(
                "Failed to edit button message {} for guild {}: {}",
                handle.message_id,
                self.guild_id,
                e
            );
        }
        let elapsed = started.elapsed();

        if elapsed > self.policy.slow_threshold {
            tracing::warn!(
                "Updated button message for guild {} in {}ms",
                self.guild_id,
                elapsed.as_millis()
            );
        }

        if elapsed > self.policy.resend_threshold {
            tracing::warn!(
                "Button message for guild {} took too long to update, resending",
                self.guild_id
            );
            self.replace_display(&mut handle, &display).await?;
        }

        Ok(())
    }

    /// Posts a fresh display message and retires the current one.
    ///
    /// # Returns
    /// - `Ok(RenderHandle)` - Handle of the new message
    /// - `Err(AppError)` - Building or posting the display failed; the old message is kept
    pub async fn force_resend_display(&self) -> Result<RenderHandle, AppError> {
        let mut handle = self.display.lock().await;
        let display = self.build_display().await?;

        self.replace_display(&mut handle, &display).await?;

        Ok(*handle)
    }

    /// Replaces the message behind `handle`. Caller holds the display lock.
    async fn replace_display(
        &self,
        handle: &mut RenderHandle,
        display: &Display,
    ) -> Result<(), AppError> {
        let fresh = self
            .renderer
            .create_display(handle.channel_id, display)
            .await?;
        let stale = std::mem::replace(handle, fresh);

        if let Err(e) = self.renderer.delete_display(stale).await {
            tracing::warn!(
                "Failed to delete old button message {} for guild {}: {}",
                stale.message_id,
                self.guild_id,
                e
            );
        }

        SessionRepository::new(&self.db)
            .update_message_id(self.guild_id, fresh.message_id)
            .await?;

        tracing::info!(
            "Resent button message for guild {}: {} -> {}",
            self.guild_id,
            stale.message_id,
            fresh.message_id
        );

        Ok(())
    }

    pub(super) fn spawn_render_loop(self: &Arc<Self>) -> TimerHandle {
        let weak = Arc::downgrade(self);
        let interval = self.policy.interval;

        TimerHandle::spawn(async move {
            loop {
                let Some(session) = weak.upgrade() else {
                    break;
                };
                if session.state().await != GameState::Started {
                    break;
                }

                if let Err(e) = session.render_once().await {
                    tracing::error!(
                        "Failed to render button for guild {}: {}",
                        session.guild_id,
                        e
                    );
                }

                let wake = session.render_wake.clone();
                drop(session);

                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = wake.notified() => {}
                }
            }
        })
    }
}
