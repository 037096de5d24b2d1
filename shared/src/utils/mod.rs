//! Common utility functions

pub mod date;
pub mod phone;
pub mod url;
pub mod validation;

// Re-export commonly used utilities
pub use date::*;
pub use phone::*;
pub use url::*;
pub use validation::*;
