//! Request log repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::RequestLog;
use crate::errors::KycResult;

/// Persistence of outbound call logs
///
/// Writes happen on every service call, so implementations should keep
/// `create` cheap.
#[async_trait]
pub trait RequestLogRepository: Send + Sync {
    /// Persist one log entry
    async fn create(&self, log: &RequestLog) -> KycResult<()>;

    /// Most recent entries first, at most `limit`
    async fn find_recent(&self, limit: usize) -> KycResult<Vec<RequestLog>>;

    /// Delete entries created before `cutoff`, returning how many went
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> KycResult<u64>;
}
