//! MongoDB connector and utilities for the todo API.
//!
//! Provides configuration loading, connection management with startup retry,
//! and health checks.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry};
//!
//! let config = MongoConfig::from_env()?;
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! let collection = db.collection::<Task>("tasks");
//! ```

pub mod common;
pub mod mongodb;

pub use common::{retry, retry_with_backoff, RetryConfig};
pub use mongodb::{MongoConfig, MongoError};
