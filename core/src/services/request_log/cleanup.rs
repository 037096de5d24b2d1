//! Request log cleanup service
//!
//! Logs are kept for a fixed number of days and purged in the background.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

use kyc_shared::config::{RequestLogConfig, DEFAULT_RETENTION_DAYS};

use crate::errors::{KycError, KycResult};
use crate::repositories::RequestLogRepository;

/// Configuration for the request log cleanup service
#[derive(Debug, Clone)]
pub struct RequestLogCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Entries older than this many days are deleted
    pub retention_days: i64,
    pub enabled: bool,
}

impl Default for RequestLogCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 86_400,
            retention_days: DEFAULT_RETENTION_DAYS,
            enabled: true,
        }
    }
}

impl From<&RequestLogConfig> for RequestLogCleanupConfig {
    fn from(config: &RequestLogConfig) -> Self {
        Self {
            retention_days: config.retention_days,
            ..Default::default()
        }
    }
}

/// The instant `retention_days` before now
///
/// Negative or unrepresentable windows are a configuration error.
pub fn retention_cutoff(retention_days: i64) -> KycResult<DateTime<Utc>> {
    Duration::try_days(retention_days)
        .filter(|window| *window >= Duration::zero())
        .and_then(|window| Utc::now().checked_sub_signed(window))
        .ok_or_else(|| KycError::Configuration {
            message: format!("Invalid request log retention: {} days", retention_days),
        })
}

/// Delete logs older than `retention_days`, returning how many went
pub async fn purge_expired_logs<R: RequestLogRepository + ?Sized>(
    repository: &R,
    retention_days: i64,
) -> KycResult<u64> {
    let cutoff = retention_cutoff(retention_days)?;
    repository.delete_older_than(cutoff).await
}

/// Periodically removes expired request logs
pub struct RequestLogCleanupService<R: RequestLogRepository + ?Sized + 'static> {
    repository: Arc<R>,
    config: RequestLogCleanupConfig,
}

impl<R: RequestLogRepository + ?Sized + 'static> RequestLogCleanupService<R> {
    pub fn new(repository: Arc<R>, config: RequestLogCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    ///
    /// Repository failures are collected in the result rather than returned.
    pub async fn run_cleanup(&self) -> CleanupResult {
        let mut result = CleanupResult::default();

        if !self.config.enabled {
            return result;
        }

        match retention_cutoff(self.config.retention_days) {
            Ok(cutoff) => result.cutoff = Some(cutoff),
            Err(e) => {
                error!(
                    retention_days = self.config.retention_days,
                    error = %e,
                    event = "request_log_cleanup_misconfigured",
                    "Skipping request log cleanup"
                );
                result.errors.push(e.to_string());
                return result;
            }
        }

        info!(
            retention_days = self.config.retention_days,
            "Starting request log cleanup cycle"
        );

        match purge_expired_logs(self.repository.as_ref(), self.config.retention_days).await {
            Ok(count) => {
                result.logs_deleted = count;
                info!(deleted = count, event = "request_logs_purged", "Deleted expired request logs");
            }
            Err(e) => {
                error!("Failed to cleanup request logs: {}", e);
                result.errors.push(format!("Request log cleanup error: {}", e));
            }
        }

        result
    }

    /// Start the cleanup service as a background task
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Request log cleanup service is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Request log cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                let result = self.run_cleanup().await;
                if !result.errors.is_empty() {
                    warn!("Cleanup completed with errors: {:?}", result.errors);
                }
            }
        });
    }
}

/// Result of a cleanup operation
#[derive(Debug, Default)]
pub struct CleanupResult {
    pub logs_deleted: u64,
    /// Entries created before this instant were eligible for deletion
    pub cutoff: Option<DateTime<Utc>>,
    pub errors: Vec<String>,
}

impl CleanupResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
