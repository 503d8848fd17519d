//! Session lifecycle transitions.
//!
//! Transitions are driven by two one-shot timers, one at the start and one at the end of the
//! time window. Both transitions are guarded by the current state, so a late or repeated timer
//! has no effect.

use std::ops::ControlFlow;
use std::sync::Arc;

use crate::{
    model::session::GameState,
    service::{
        clock::{self, TimerHandle},
        display::LEADERBOARD_FILE_NAME,
    },
};

use super::GameSession;

impl GameSession {
    /// Schedules the session's transitions and starts its loops if it is already running.
    ///
    /// The state is recomputed from the time window here rather than trusted from before a
    /// restart. Nothing is scheduled when the end of the window has already passed, so a bot
    /// coming back after a long downtime does not replay stale transitions.
    pub async fn activate(self: &Arc<Self>) {
        let now = self.clock.now();
        let state = {
            let mut current = self.state.write().await;
            // never move backwards
            let derived = GameState::at(now, self.start_timestamp, self.end_timestamp);
            *current = (*current).max(derived);
            *current
        };

        if state == GameState::Ended {
            tracing::info!(
                "Button for guild {} ended at {}, not scheduling",
                self.guild_id,
                self.end_timestamp
            );
            return;
        }

        let start_delay = clock::until(now, self.start_timestamp);
        let end_delay = clock::until(now, self.end_timestamp);

        tracing::info!(
            "Button for guild {} is {:?}: starting in {:?}, ending in {:?}",
            self.guild_id,
            state,
            start_delay,
            end_delay
        );

        let mut tasks = self.tasks.lock().await;

        if state == GameState::Waiting {
            let weak = Arc::downgrade(self);
            tasks.start_timer = Some(clock::after(start_delay, move || async move {
                if let Some(session) = weak.upgrade() {
                    session.to_started().await;
                }
            }));
        }

        let weak = Arc::downgrade(self);
        tasks.end_timer = Some(clock::after(end_delay, move || async move {
            if let Some(session) = weak.upgrade() {
                session.to_ended().await;
            }
        }));

        drop(tasks);

        if state == GameState::Started {
            self.spawn_loops().await;
        }
    }

    /// Moves the session from waiting to started and begins the tick and render loops.
    ///
    /// # Returns
    /// - `true` - This call performed the transition
    /// - `false` - The session was not waiting; nothing changed
    pub async fn to_started(self: &Arc<Self>) -> bool {
        {
            let mut state = self.state.write().await;
            if *state != GameState::Waiting {
                return false;
            }
            *state = GameState::Started;
        }

        tracing::info!("Button started for guild {}", self.guild_id);

        self.spawn_loops().await;

        true
    }

    /// Ends the session.
    ///
    /// Stops the tick loop, waits for the render loop to notice the state change, performs a
    /// final render with every claim button disabled and publishes the full leaderboard in the
    /// button channel. Errors in the final render or the publication are logged.
    ///
    /// # Returns
    /// - `true` - This call performed the transition
    /// - `false` - The session had already ended; nothing changed
    pub async fn to_ended(self: &Arc<Self>) -> bool {
        {
            let mut state = self.state.write().await;
            if *state == GameState::Ended {
                return false;
            }
            *state = GameState::Ended;
        }

        tracing::info!("Button ended for guild {}", self.guild_id);

        let (start_timer, tick_loop, render_loop) = {
            let mut tasks = self.tasks.lock().await;
            (
                tasks.start_timer.take(),
                tasks.tick_loop.take(),
                tasks.render_loop.take(),
            )
        };

        if let Some(timer) = start_timer {
            timer.cancel();
        }
        if let Some(tick) = tick_loop {
            tick.cancel();
        }
        // the render loop exits on its own once it sees the ended state
        self.render_wake.notify_one();
        if let Some(render) = render_loop {
            render.join().await;
        }

        if let Err(e) = self.render_once().await {
            tracing::error!(
                "Failed final render of button for guild {}: {}",
                self.guild_id,
                e
            );
        }

        if let Err(e) = self.publish_final_leaderboard().await {
            tracing::error!(
                "Failed to publish final leaderboard for guild {}: {}",
                self.guild_id,
                e
            );
        }

        true
    }

    async fn publish_final_leaderboard(&self) -> Result<(), crate::error::AppError> {
        let artifact = self.leaderboard_artifact().await?;
        let channel_id = self.render_handle().await.channel_id;

        self.renderer
            .publish_artifact(
                channel_id,
                "Here is the final leaderboard:",
                LEADERBOARD_FILE_NAME,
                artifact,
            )
            .await
    }

    /// Starts the tick and render loops unless they already run.
    ///
    /// The state is checked again under the task lock: `to_ended` may have run since the
    /// caller saw the session as started, and it only cancels loops it finds in `tasks`.
    pub(crate) async fn spawn_loops(self: &Arc<Self>) {
        let mut tasks = self.tasks.lock().await;

        if *self.state.read().await != GameState::Started {
            return;
        }

        if tasks.tick_loop.is_none() {
            tasks.tick_loop = Some(self.spawn_tick_loop());
        }
        if tasks.render_loop.is_none() {
            tasks.render_loop = Some(self.spawn_render_loop());
        }
    }

    fn spawn_tick_loop(self: &Arc<Self>) -> TimerHandle {
        let weak = Arc::downgrade(self);

        clock::every(self.policy.tick_interval, move || {
            let weak = weak.clone();
            async move {
                let Some(session) = weak.upgrade() else {
                    return ControlFlow::Break(());
                };
                if session.state().await != GameState::Started {
                    return ControlFlow::Break(());
                }
                if let Err(e) = session.tick().await {
                    tracing::error!("Failed to tick counter for guild {}: {}", session.guild_id, e);
                }
                ControlFlow::Continue(())
            }
        })
    }
}
