//! Cron scheduler for the periodic background tasks.

use std::sync::Arc;
use std::time::Duration;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};

use gensourei_core::error::AppError;
use gensourei_core::result::AppResult;

use crate::jobs::{AllowListRefreshJob, SessionPurgeJob};

/// Owns the process's scheduled jobs from startup until shutdown.
pub struct CronScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler
    pub async fn new() -> AppResult<Self> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {}", e)))?;

        Ok(Self { scheduler })
    }

    /// Start the scheduler
    pub async fn start(&self) -> AppResult<()> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {}", e)))?;

        tracing::info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&mut self) -> AppResult<()> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {}", e)))?;

        tracing::info!("Cron scheduler shut down");
        Ok(())
    }

    /// Allow-list refresh, repeating every `interval`
    pub async fn register_allowlist_refresh(
        &self,
        job: AllowListRefreshJob,
        interval: Duration,
    ) -> AppResult<()> {
        if interval.is_zero() {
            return Err(AppError::configuration(
                "Allow-list refresh interval must be positive",
            ));
        }

        let cron = CronJob::new_repeated_async(interval, move |_uuid, _lock| {
            let job = job.clone();
            Box::pin(async move {
                job.run().await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create allowlist_refresh schedule: {}", e))
        })?;

        self.scheduler.add(cron).await.map_err(|e| {
            AppError::internal(format!("Failed to add allowlist_refresh schedule: {}", e))
        })?;

        tracing::info!(
            interval_seconds = interval.as_secs(),
            "Registered: allowlist_refresh"
        );
        Ok(())
    }

    /// Expired session purge on `schedule` (six-field cron)
    pub async fn register_session_purge(
        &self,
        job: SessionPurgeJob,
        schedule: &str,
    ) -> AppResult<()> {
        let job = Arc::new(job);
        let cron = CronJob::new_async(schedule, move |_uuid, _lock| {
            let job = Arc::clone(&job);
            Box::pin(async move {
                if let Err(e) = job.run().await {
                    tracing::error!("Session purge failed: {}", e);
                }
            })
        })
        .map_err(|e| {
            AppError::configuration(format!(
                "Invalid session purge schedule '{}': {}",
                schedule, e
            ))
        })?;

        self.scheduler.add(cron).await.map_err(|e| {
            AppError::internal(format!("Failed to add session_purge schedule: {}", e))
        })?;

        tracing::info!(schedule, "Registered: session_purge");
        Ok(())
    }
}
