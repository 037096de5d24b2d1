//! MySQL implementation of the RequestLogRepository trait.
//!
//! Entries live in the `kyc_api_request_log` table (see
//! `infra/migrations`). Queries are checked at runtime so the crate builds
//! without a live database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kyc_core::domain::entities::RequestLog;
use kyc_core::errors::{KycError, KycResult};
use kyc_core::repositories::RequestLogRepository;

const SELECT_COLUMNS: &str =
    "SELECT id, api_method, url, header, payload, response, status_code, created_at FROM kyc_api_request_log";

pub struct MySqlRequestLogRepository {
    pool: MySqlPool,
}

impl MySqlRequestLogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_request_log(row: &sqlx::mysql::MySqlRow) -> KycResult<RequestLog> {
        fn column<'r, T>(row: &'r sqlx::mysql::MySqlRow, name: &str) -> KycResult<T>
        where
            T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
        {
            row.try_get(name).map_err(|e| KycError::Internal {
                message: format!("Failed to get {}: {}", name, e),
            })
        }

        let id: String = column(row, "id")?;
        Ok(RequestLog {
            id: Uuid::parse_str(&id).map_err(|e| KycError::Internal {
                message: format!("Invalid UUID: {}", e),
            })?,
            api_method: column(row, "api_method")?,
            url: column(row, "url")?,
            header: column(row, "header")?,
            payload: column(row, "payload")?,
            response: column(row, "response")?,
            status_code: column(row, "status_code")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
        })
    }
}

#[async_trait]
impl RequestLogRepository for MySqlRequestLogRepository {
    async fn create(&self, log: &RequestLog) -> KycResult<()> {
        let query = r#"
            INSERT INTO kyc_api_request_log (
                id, api_method, url, header, payload, response, status_code, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(log.id.to_string())
            .bind(&log.api_method)
            .bind(&log.url)
            .bind(&log.header)
            .bind(&log.payload)
            .bind(&log.response)
            .bind(log.status_code)
            .bind(log.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| KycError::Internal {
                message: format!("Failed to create request log: {}", e),
            })?;

        Ok(())
    }

    async fn find_recent(&self, limit: usize) -> KycResult<Vec<RequestLog>> {
        let query = format!("{} ORDER BY created_at DESC LIMIT ?", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .bind(limit as u64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| KycError::Internal {
                message: format!("Failed to find recent request logs: {}", e),
            })?;

        rows.iter().map(Self::row_to_request_log).collect()
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> KycResult<u64> {
        let result = sqlx::query("DELETE FROM kyc_api_request_log WHERE created_at < ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| KycError::Internal {
                message: format!("Failed to delete request logs: {}", e),
            })?;

        tracing::info!(
            deleted = result.rows_affected(),
            cutoff = %cutoff,
            "Deleted request logs older than cutoff"
        );

        Ok(result.rows_affected())
    }
}
