//! Per-guild game session.
//!
//! This module provides `GameSession`, the live object behind one guild's button. It owns the
//! session state, the counter engine, the antibot selector and the handle of the displayed
//! message, and it drives the tick and render loops while the event runs.
//!
//! The implementation is split by concern:
//! - `lifecycle` - Time-driven transitions between waiting, started and ended
//! - `render` - Display rendering and latency-triggered message replacement
//! - `claim` - Claims and score queries

pub mod claim;
pub mod lifecycle;
pub mod render;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify, RwLock};

use crate::{
    model::session::{ButtonSession, GameState, RenderHandle},
    service::{
        antibot::AntibotSelector, clock::Clock, clock::TimerHandle, counter::CounterEngine,
        display::Renderer, notification::NotificationSink,
    },
};

/// Timing of the render loop and the thresholds of the resend heuristic.
#[derive(Debug, Clone, Copy)]
pub struct RenderPolicy {
    /// Pause between two renders.
    pub interval: Duration,
    /// Edits slower than this are logged.
    pub slow_threshold: Duration,
    /// Edits slower than this trigger a message replacement.
    pub resend_threshold: Duration,
    /// Period of the counter tick.
    pub tick_interval: Duration,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            slow_threshold: Duration::from_secs(1),
            resend_threshold: Duration::from_secs(3),
            tick_interval: Duration::from_secs(1),
        }
    }
}

/// Collaborators shared by every session.
#[derive(Clone)]
pub struct SessionContext {
    pub db: DatabaseConnection,
    pub renderer: Arc<dyn Renderer>,
    pub notifier: Arc<dyn NotificationSink>,
    pub clock: Arc<dyn Clock>,
    pub policy: RenderPolicy,
}

/// Tasks owned by a session, cancelled as the session moves on.
#[derive(Default)]
struct SessionTasks {
    start_timer: Option<TimerHandle>,
    end_timer: Option<TimerHandle>,
    tick_loop: Option<TimerHandle>,
    render_loop: Option<TimerHandle>,
}

/// Live button of a single guild.
pub struct GameSession {
    guild_id: u64,
    start_timestamp: DateTime<Utc>,
    end_timestamp: DateTime<Utc>,
    emoji: String,
    state: RwLock<GameState>,
    counter: CounterEngine,
    antibot: AntibotSelector,
    /// Displayed message. Locked for the whole of a render so renders and resends never
    /// overlap and the handle is only ever replaced in one place.
    display: Mutex<RenderHandle>,
    /// Cuts the render loop's pause short when the session ends.
    render_wake: Arc<Notify>,
    db: DatabaseConnection,
    renderer: Arc<dyn Renderer>,
    notifier: Arc<dyn NotificationSink>,
    clock: Arc<dyn Clock>,
    policy: RenderPolicy,
    tasks: Mutex<SessionTasks>,
}

impl GameSession {
    /// Creates a session from its stored record.
    ///
    /// The state is derived from the time window at construction; no timer or loop runs
    /// until `activate` is called.
    ///
    /// # Arguments
    /// - `ctx` - Shared collaborators
    /// - `session` - Stored session record
    /// - `antibot` - Selector whose slot the current display was rendered with
    ///
    /// # Returns
    /// - `Arc<GameSession>` - Inactive session
    pub fn new(ctx: &SessionContext, session: &ButtonSession, antibot: AntibotSelector) -> Arc<Self> {
        let state = GameState::at(
            ctx.clock.now(),
            session.start_timestamp,
            session.end_timestamp,
        );

        Arc::new(Self {
            guild_id: session.guild_id,
            start_timestamp: session.start_timestamp,
            end_timestamp: session.end_timestamp,
            emoji: session.emoji.clone(),
            state: RwLock::new(state),
            counter: CounterEngine::new(ctx.db.clone(), session.guild_id),
            antibot,
            display: Mutex::new(session.render_handle()),
            render_wake: Arc::new(Notify::new()),
            db: ctx.db.clone(),
            renderer: ctx.renderer.clone(),
            notifier: ctx.notifier.clone(),
            clock: ctx.clock.clone(),
            policy: ctx.policy,
            tasks: Mutex::new(SessionTasks::default()),
        })
    }

    pub fn guild_id(&self) -> u64 {
        self.guild_id
    }

    pub async fn state(&self) -> GameState {
        *self.state.read().await
    }

    /// Re-rolls the antibot slot, returning the new slot.
    pub fn reroll_antibot(&self) -> u8 {
        self.antibot.reroll()
    }

    /// Handle of the message currently displaying the button.
    pub async fn render_handle(&self) -> RenderHandle {
        *self.display.lock().await
    }
}
