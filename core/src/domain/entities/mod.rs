//! Domain entities: host record snapshots and outbound request logs.

mod records;
mod request_log;

// Re-export commonly used types
pub use records::{BankAccountRecord, DriverRecord, EmployeeRecord, Record, VerifiableRecord};
pub use request_log::{RequestLog, REDACTED};
