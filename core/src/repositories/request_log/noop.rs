//! No-op request log repository for hosts that do not keep call logs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::RequestLogRepository;
use crate::domain::entities::RequestLog;
use crate::errors::KycResult;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpRequestLogRepository;

impl NoOpRequestLogRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RequestLogRepository for NoOpRequestLogRepository {
    async fn create(&self, _log: &RequestLog) -> KycResult<()> {
        Ok(())
    }

    async fn find_recent(&self, _limit: usize) -> KycResult<Vec<RequestLog>> {
        Ok(Vec::new())
    }

    async fn delete_older_than(&self, _cutoff: DateTime<Utc>) -> KycResult<u64> {
        Ok(0)
    }
}
