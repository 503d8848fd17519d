use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::manager::SessionManager};

/// Starts the antibot rotation scheduler
///
/// This scheduler runs every minute and moves the real claim button of every live session to a
/// new random slot. The new slot shows up on the session's next render.
///
/// # Arguments
/// - `manager`: Session manager owning the live sessions
pub async fn start_scheduler(manager: SessionManager) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let manager = manager.clone();

        Box::pin(async move {
            let rerolled = manager.reroll_antibot().await;
            tracing::debug!("Re-rolled antibot slot of {} sessions", rerolled);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Antibot rotation scheduler started");

    Ok(())
}
