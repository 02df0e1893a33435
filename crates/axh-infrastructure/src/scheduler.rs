//! Scheduled price refresh
//!
//! Refreshes the in-memory price board once at startup, then on a
//! six-field cron schedule (every 15 minutes by default). Refresh failures
//! are logged by the refresher and leave the previous board in place.

use crate::config::JobsConfig;
use crate::error_ext::ErrorContext;
use axh_application::use_cases::PriceRefresher;
use axh_domain::error::Result;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::info;

/// Handle of the running price refresh schedule
pub struct PriceRefreshJob {
    scheduler: JobScheduler,
}

impl PriceRefreshJob {
    /// Run one refresh, then schedule the rest
    ///
    /// Fails when the cron expression does not parse or the scheduler
    /// cannot start.
    pub async fn start(refresher: Arc<PriceRefresher>, config: &JobsConfig) -> Result<Self> {
        let scheduler = JobScheduler::new()
            .await
            .job_context("Failed to create scheduler")?;

        let job_refresher = Arc::clone(&refresher);
        let job = Job::new_async(config.price_refresh_cron.as_str(), move |_uuid, _lock| {
            let refresher = Arc::clone(&job_refresher);
            Box::pin(async move {
                refresher.refresh().await;
            })
        })
        .job_context(format!(
            "Invalid price refresh schedule '{}'",
            config.price_refresh_cron
        ))?;

        refresher.refresh().await;

        scheduler
            .add(job)
            .await
            .job_context("Failed to add price refresh job")?;
        scheduler
            .start()
            .await
            .job_context("Failed to start scheduler")?;

        info!(schedule = %config.price_refresh_cron, "Price refresh job started");
        Ok(Self { scheduler })
    }

    /// Stop the schedule; a refresh already running finishes on its own
    pub async fn shutdown(mut self) -> Result<()> {
        self.scheduler
            .shutdown()
            .await
            .job_context("Failed to stop scheduler")?;
        info!("Price refresh job stopped");
        Ok(())
    }
}

impl std::fmt::Debug for PriceRefreshJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceRefreshJob").finish_non_exhaustive()
    }
}
