//! MySQL repository implementations

mod request_log_repository_impl;

pub use request_log_repository_impl::MySqlRequestLogRepository;
