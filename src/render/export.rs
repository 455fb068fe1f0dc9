use serde::Serialize;

use crate::config::ExportConfig;
use crate::model::Network;
use crate::utils::abbreviate_address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageExportOptions {
    pub format:     ImageFormat,
    pub scale:      f64,
    pub background: String,
    pub full:       bool,
}

impl From<&ExportConfig> for ImageExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            format:     ImageFormat::Png,
            scale:      config.scale,
            background: config.background.clone(),
            full:       config.full,
        }
    }
}

impl Default for ImageExportOptions {
    fn default() -> Self { Self::from(&ExportConfig::default()) }
}

/// Encoded image handed to the host for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub filename: String,
    pub bytes:    Vec<u8>,
}

/// `{network}-{first6}...{last4}-graph.{ext}`
pub fn export_filename(
    network: Network,
    address: &str,
    format: ImageFormat,
) -> String {
    format!("{}-{}-graph.{}", network, abbreviate_address(address), format.extension())
}
