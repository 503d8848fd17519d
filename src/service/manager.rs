//! Process-wide registry of live sessions.
//!
//! The `SessionManager` is created once in `main` and injected into the interaction handler
//! and the antibot scheduler. It owns every live `GameSession`, resumes stored sessions at
//! startup and lazily loads a guild's session on first use.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::{
    data::session::SessionRepository,
    error::AppError,
    model::{
        claim::{ClaimOutcome, UserSummary},
        session::{GameState, RenderHandle, SessionConfig, UpsertSessionParam},
    },
    service::{
        antibot::{layout_buttons, AntibotSelector, DEFAULT_EMOJI},
        display::{initial_content, Display},
        game::{GameSession, SessionContext},
    },
};

#[derive(Clone)]
pub struct SessionManager {
    ctx: SessionContext,
    sessions: Arc<RwLock<HashMap<u64, Arc<GameSession>>>>,
    /// Serializes `initialize` so concurrent `init` commands post a single message.
    init_lock: Arc<Mutex<()>>,
}

impl SessionManager {
    pub fn new(ctx: SessionContext) -> Self {
        Self {
            ctx,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            init_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a guild's button and starts its session.
    ///
    /// Posts the initial display in the configured channel, stores the session and schedules
    /// its transitions. A guild that already has a session keeps it unchanged.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `config` - Channel, emoji and time window chosen by the administrator
    ///
    /// # Returns
    /// - `Ok(Arc<GameSession>)` - The new session, or the existing one
    /// - `Err(AppError::BadRequest)` - The time window is empty or already over
    /// - `Err(AppError)` - Posting the display or storing the session failed
    pub async fn initialize(
        &self,
        guild_id: u64,
        config: SessionConfig,
    ) -> Result<Arc<GameSession>, AppError> {
        let _init = self.init_lock.lock().await;

        if let Some(existing) = self.get(guild_id).await? {
            tracing::info!("Guild {} already has a button, keeping it", guild_id);
            return Ok(existing);
        }

        if config.end_timestamp <= config.start_timestamp {
            return Err(AppError::BadRequest(
                "The end of the event must be after its start.".to_string(),
            ));
        }

        let now = self.ctx.clock.now();
        if config.end_timestamp <= now {
            return Err(AppError::BadRequest(
                "The end of the event is already in the past.".to_string(),
            ));
        }

        let emoji = config.emoji.unwrap_or_else(|| DEFAULT_EMOJI.to_string());
        let antibot = AntibotSelector::new();
        let state = GameState::at(
            now,
            config.start_timestamp,
            config.end_timestamp,
        );
        let display = Display {
            content: initial_content(state, config.start_timestamp),
            buttons: layout_buttons(antibot.current(), state, 0, &emoji),
        };

        let handle = self
            .ctx
            .renderer
            .create_display(config.button_channel_id, &display)
            .await?;

        let stored = SessionRepository::new(&self.ctx.db)
            .upsert(UpsertSessionParam {
                guild_id,
                category_id: config.category_id,
                button_channel_id: handle.channel_id,
                message_id: handle.message_id,
                emoji,
                start_timestamp: config.start_timestamp,
                end_timestamp: config.end_timestamp,
            })
            .await?;

        let session = GameSession::new(&self.ctx, &stored, antibot);
        let session = match self.insert_new(session).await {
            Ok(session) => session,
            // a lookup loaded the row we just stored
            Err(existing) => return Ok(existing),
        };
        session.activate().await;

        tracing::info!(
            "Initialized button for guild {} in channel {}",
            guild_id,
            handle.channel_id
        );

        Ok(session)
    }

    /// Recovers every stored session at startup.
    ///
    /// Sessions that are already live are left alone, so a gateway reconnect firing `ready`
    /// again does not duplicate timers.
    ///
    /// # Returns
    /// - `Ok(Vec<Arc<GameSession>>)` - Every live session after the resume
    /// - `Err(AppError)` - Stored sessions could not be read
    pub async fn resume_all(&self) -> Result<Vec<Arc<GameSession>>, AppError> {
        let stored = SessionRepository::new(&self.ctx.db).get_all().await?;
        let mut resumed = 0;

        let mut sessions = self.sessions.write().await;
        for record in stored {
            if sessions.contains_key(&record.guild_id) {
                continue;
            }

            let session = GameSession::new(&self.ctx, &record, AntibotSelector::new());
            session.activate().await;
            sessions.insert(record.guild_id, session);
            resumed += 1;
        }

        tracing::info!("Resumed {} button sessions", resumed);

        Ok(sessions.values().cloned().collect())
    }

    /// Gets a guild's live session, loading it from the store if needed.
    ///
    /// # Returns
    /// - `Ok(Some(Arc<GameSession>))` - The guild's session
    /// - `Ok(None)` - The guild has no session
    /// - `Err(AppError)` - The stored session could not be read
    pub async fn get(&self, guild_id: u64) -> Result<Option<Arc<GameSession>>, AppError> {
        if let Some(session) = self.sessions.read().await.get(&guild_id) {
            return Ok(Some(session.clone()));
        }

        let Some(record) = SessionRepository::new(&self.ctx.db)
            .find_by_guild_id(guild_id)
            .await?
        else {
            return Ok(None);
        };

        let session = GameSession::new(&self.ctx, &record, AntibotSelector::new());
        match self.insert_new(session).await {
            Ok(session) => {
                session.activate().await;
                Ok(Some(session))
            }
            Err(existing) => Ok(Some(existing)),
        }
    }

    /// Registers a session that has not been activated yet.
    ///
    /// # Returns
    /// - `Ok(Arc<GameSession>)` - `session`, now registered; the caller activates it
    /// - `Err(Arc<GameSession>)` - The session another caller registered first
    async fn insert_new(
        &self,
        session: Arc<GameSession>,
    ) -> Result<Arc<GameSession>, Arc<GameSession>> {
        let mut sessions = self.sessions.write().await;

        match sessions.entry(session.guild_id()) {
            Entry::Occupied(entry) => Err(entry.get().clone()),
            Entry::Vacant(entry) => Ok(entry.insert(session).clone()),
        }
    }

    async fn require(&self, guild_id: u64) -> Result<Arc<GameSession>, AppError> {
        self.get(guild_id)
            .await?
            .ok_or(AppError::SessionNotFound(guild_id))
    }

    pub async fn claim(
        &self,
        guild_id: u64,
        user_id: u64,
        is_booster: bool,
    ) -> Result<ClaimOutcome, AppError> {
        self.require(guild_id)
            .await?
            .claim(user_id, is_booster)
            .await
    }

    pub async fn user_summary(
        &self,
        guild_id: u64,
        user_id: u64,
        is_booster: bool,
    ) -> Result<Option<UserSummary>, AppError> {
        self.require(guild_id)
            .await?
            .user_summary(user_id, is_booster)
            .await
    }

    pub async fn leaderboard_artifact(&self, guild_id: u64) -> Result<String, AppError> {
        self.require(guild_id).await?.leaderboard_artifact().await
    }

    pub async fn force_resend_display(&self, guild_id: u64) -> Result<RenderHandle, AppError> {
        self.require(guild_id).await?.force_resend_display().await
    }

    /// Re-rolls the antibot slot of every session that has not ended.
    ///
    /// # Returns
    /// - `usize` - Number of sessions re-rolled
    pub async fn reroll_antibot(&self) -> usize {
        let sessions: Vec<Arc<GameSession>> =
            self.sessions.read().await.values().cloned().collect();
        let mut rerolled = 0;

        for session in sessions {
            if session.state().await == GameState::Ended {
                continue;
            }
            let slot = session.reroll_antibot();
            tracing::debug!("Antibot slot for guild {} is now {}", session.guild_id(), slot);
            rerolled += 1;
        }

        rerolled
    }
}
