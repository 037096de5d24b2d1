//! Retention of outbound call logs

mod cleanup;

pub use cleanup::{
    purge_expired_logs, retention_cutoff, CleanupResult, RequestLogCleanupConfig,
    RequestLogCleanupService,
};
