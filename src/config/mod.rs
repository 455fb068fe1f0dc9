pub mod log;
pub mod pipeline;
pub mod render;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

pub use log::LoggingConfig;
pub use pipeline::EdgeMetricsConfig;
pub use pipeline::PipelineConfig;
pub use render::ExportConfig;
pub use render::LayoutConfig;
pub use render::RenderConfig;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub metrics:  EdgeMetricsConfig,
    pub render:   RenderConfig,
    pub layout:   LayoutConfig,
    pub logging:  LoggingConfig,
}

impl Config {
    pub fn from_toml_str(
        source: &str,
        path: &str,
    ) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(source).map_err(|source| ConfigError::ParseError {
            path: path.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.metrics.validate()?;
        self.render.validate()?;
        Ok(())
    }
}

pub async fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let config_str = tokio::fs::read_to_string(path).await.map_err(|source| ConfigError::OpenFileError {
        path: display.clone(),
        source,
    })?;
    let config = Config::from_toml_str(&config_str, &display)?;
    Ok(config)
}
