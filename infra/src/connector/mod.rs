//! HTTP connector for the verification service
//!
//! Every call is a single JSON POST. There is no retry; each call, failed or
//! not, is written to the request log.

mod signzy;

#[cfg(test)]
mod tests;

pub use signzy::{error_message, SignzyClient, UNKNOWN_ERROR};
