//! Request log repository module.

mod r#trait;
pub use r#trait::RequestLogRepository;

mod noop;
pub use noop::NoOpRequestLogRepository;

mod mock;
pub use mock::MockRequestLogRepository;
