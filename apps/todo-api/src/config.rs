use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};

use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Directory the client application is served from
    pub assets_dir: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let assets_dir = env_or_default("ASSETS_DIR", "assets");

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            assets_dir,
        })
    }
}
