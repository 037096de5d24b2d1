//! In-memory request log repository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use super::RequestLogRepository;
use crate::domain::entities::RequestLog;
use crate::errors::{KycError, KycResult};

/// Stores logs in memory and can be told to fail
#[derive(Clone, Default)]
pub struct MockRequestLogRepository {
    logs: Arc<Mutex<Vec<RequestLog>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockRequestLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// All stored logs in insertion order
    pub fn get_all_logs(&self) -> Vec<RequestLog> {
        self.logs.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.logs.lock().unwrap().clear();
    }

    fn check_failure(&self) -> KycResult<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(KycError::Internal {
                message: "Mock repository error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RequestLogRepository for MockRequestLogRepository {
    async fn create(&self, log: &RequestLog) -> KycResult<()> {
        self.check_failure()?;
        self.logs.lock().unwrap().push(log.clone());
        Ok(())
    }

    async fn find_recent(&self, limit: usize) -> KycResult<Vec<RequestLog>> {
        self.check_failure()?;
        let mut logs = self.logs.lock().unwrap().clone();
        logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        logs.truncate(limit);
        Ok(logs)
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> KycResult<u64> {
        self.check_failure()?;
        let mut logs = self.logs.lock().unwrap();
        let before = logs.len();
        logs.retain(|log| log.created_at >= cutoff);
        Ok((before - logs.len()) as u64)
    }
}
