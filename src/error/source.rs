use thiserror::Error;

use crate::model::Network;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("[Source] No data for {address} on {network}")]
    NotFound { network: Network, address: String },
    #[error("[Source] Failed to read data file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("[Source] Failed to deserialize address data: {0}")]
    DeserializeError(#[from] serde_json::Error),
}
