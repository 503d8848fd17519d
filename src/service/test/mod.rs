//! Session scenario tests.
//!
//! Sessions run against an in-memory database with a recording renderer and notifier. Tick
//! and render intervals are set far in the future so tests drive the counter by hand.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use sea_orm::DatabaseConnection;
use serenity::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::{
    data::{claim::ClaimRepository, session::SessionRepository},
    error::{claim::ClaimError, AppError},
    model::session::{GameState, RenderHandle, SessionConfig},
    service::{
        antibot::{AntibotSelector, ButtonKind},
        clock::{Clock, SystemClock},
        display::{Display, Renderer},
        game::{GameSession, RenderPolicy, SessionContext},
        manager::SessionManager,
        notification::NotificationSink,
    },
};


/// Renderer that records every call and optionally slows down or fails.
///
/// Only successful calls are recorded; `edit_attempts` counts failed edits too.
#[derive(Default)]
pub struct MockRenderer {
    edit_delay: Duration,
    create_delay: Duration,
    next_message_id: AtomicU64,
    names: HashMap<u64, String>,
    fail_edits: AtomicBool,
    fail_creates: AtomicBool,
    fail_deletes: AtomicBool,
    pub edit_attempts: AtomicUsize,
    pub edits: Mutex<Vec<(RenderHandle, Display)>>,
    pub created: Mutex<Vec<(RenderHandle, Display)>>,
    pub deleted: Mutex<Vec<RenderHandle>>,
    pub artifacts: Mutex<Vec<(u64, String)>>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self {
            next_message_id: AtomicU64::new(10_000),
            ..Default::default()
        }
    }

    pub fn with_edit_delay(mut self, delay: Duration) -> Self {
        self.edit_delay = delay;
        self
    }

    pub fn with_create_delay(mut self, delay: Duration) -> Self {
        self.create_delay = delay;
        self
    }

    pub fn with_names(mut self, names: HashMap<u64, String>) -> Self {
        self.names = names;
        self
    }

    pub fn set_fail_edits(&self, fail: bool) {
        self.fail_edits.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_creates(&self, fail: bool) {
        self.fail_creates.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn edit_count(&self) -> usize {
        self.edits.lock().unwrap().len()
    }

    pub fn last_edit(&self) -> Option<Display> {
        self.edits.lock().unwrap().last().map(|(_, d)| d.clone())
    }

    pub fn artifact_count(&self) -> usize {
        self.artifacts.lock().unwrap().len()
    }
}

#[async_trait]
impl Renderer for MockRenderer {
    async fn edit_display(&self, handle: RenderHandle, display: &Display) -> Result<(), AppError> {
        if !self.edit_delay.is_zero() {
            tokio::time::sleep(self.edit_delay).await;
        }
        self.edit_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_edits.load(Ordering::SeqCst) {
            return Err(serenity::Error::Other("edit rejected").into());
        }
        self.edits.lock().unwrap().push((handle, display.clone()));
        Ok(())
    }

    async fn create_display(
        &self,
        channel_id: u64,
        display: &Display,
    ) -> Result<RenderHandle, AppError> {
        if !self.create_delay.is_zero() {
            tokio::time::sleep(self.create_delay).await;
        }
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(serenity::Error::Other("send rejected").into());
        }
        let handle = RenderHandle {
            channel_id,
            message_id: self.next_message_id.fetch_add(1, Ordering::SeqCst),
        };
        self.created.lock().unwrap().push((handle, display.clone()));
        Ok(handle)
    }

    async fn delete_display(&self, handle: RenderHandle) -> Result<(), AppError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(serenity::Error::Other("delete rejected").into());
        }
        self.deleted.lock().unwrap().push(handle);
        Ok(())
    }

    async fn publish_artifact(
        &self,
        channel_id: u64,
        _content: &str,
        _file_name: &str,
        body: String,
    ) -> Result<(), AppError> {
        self.artifacts.lock().unwrap().push((channel_id, body));
        Ok(())
    }

    async fn display_names(&self, _guild_id: u64, user_ids: &[u64]) -> HashMap<u64, String> {
        user_ids
            .iter()
            .filter_map(|id| self.names.get(id).map(|name| (*id, name.clone())))
            .collect()
    }
}

/// Notifier that records every announcement.
#[derive(Default)]
pub struct RecordingNotifier {
    pub announcements: Mutex<Vec<(u64, u64, i64)>>,
}

#[async_trait]
impl NotificationSink for RecordingNotifier {
    async fn announce_claim(&self, guild_id: u64, user_id: u64, amount: i64) {
        self.announcements
            .lock()
            .unwrap()
            .push((guild_id, user_id, amount));
    }
}

/// Clock frozen at a given instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Policy under which loops never tick or re-render on their own during a test.
pub fn manual_policy() -> RenderPolicy {
    RenderPolicy {
        interval: Duration::from_secs(3600),
        slow_threshold: Duration::from_secs(3600),
        resend_threshold: Duration::from_secs(3600),
        tick_interval: Duration::from_secs(3600),
    }
}

/// Everything a session test needs; keep it alive for the duration of the test.
pub struct Harness {
    _test: TestContext,
    pub db: DatabaseConnection,
    pub renderer: Arc<MockRenderer>,
    pub notifier: Arc<RecordingNotifier>,
    pub ctx: SessionContext,
}

impl Harness {
    pub async fn new() -> Self {
        Self::build(MockRenderer::new(), manual_policy(), Arc::new(SystemClock)).await
    }

    pub async fn build(renderer: MockRenderer, policy: RenderPolicy, clock: Arc<dyn Clock>) -> Self {
        let test = TestBuilder::new()
            .with_button_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap().clone();
        let renderer = Arc::new(renderer);
        let notifier = Arc::new(RecordingNotifier::default());

        let ctx = SessionContext {
            db: db.clone(),
            renderer: renderer.clone(),
            notifier: notifier.clone(),
            clock,
            policy,
        };

        Self {
            _test: test,
            db,
            renderer,
            notifier,
            ctx,
        }
    }

    pub fn manager(&self) -> SessionManager {
        SessionManager::new(self.ctx.clone())
    }

    /// Stores a session for a new guild with the given window and counter.
    pub async fn stored_session(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        seconds: i64,
    ) -> u64 {
        let button = factory::button::ButtonFactory::new(&self.db)
            .window(start, end)
            .seconds(seconds)
            .build()
            .await
            .unwrap();
        button.guild_id.parse().unwrap()
    }

    /// Creates a session object without scheduling timers or loops.
    pub async fn inactive_session(&self, guild_id: u64, slot: u8) -> Arc<GameSession> {
        let record = SessionRepository::new(&self.db)
            .find_by_guild_id(guild_id)
            .await
            .unwrap()
            .unwrap();
        GameSession::new(&self.ctx, &record, AntibotSelector::with_slot(slot))
    }
}

/// A window that is currently open.
pub fn open_window() -> (DateTime<Utc>, DateTime<Utc>) {
    let now = Utc::now();
    (now - ChronoDuration::hours(1), now + ChronoDuration::hours(1))
}

/// Polls `check` until it holds or one second has passed.
pub async fn eventually<F: Fn() -> bool>(check: F) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
