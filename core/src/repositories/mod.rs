pub mod request_log;

pub use request_log::{MockRequestLogRepository, NoOpRequestLogRepository, RequestLogRepository};
