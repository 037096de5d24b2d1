//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Request log repository implementation

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::MySqlRequestLogRepository;
