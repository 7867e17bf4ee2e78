//! Shared connection utilities.

mod retry;

pub use retry::{retry, retry_with_backoff, RetryConfig};
