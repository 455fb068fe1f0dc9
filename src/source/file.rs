use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::DataSource;
use crate::error::SourceError;
use crate::model::AddressData;
use crate::model::Network;
use crate::model::Transaction;

#[derive(Deserialize)]
#[serde(untagged)]
enum FileContents {
    // Arrays must be tried first: a derived struct also accepts sequences.
    Transactions(Vec<Transaction>),
    Full(AddressData),
}

/// Reads a JSON file holding either a full `AddressData` object or a bare
/// transaction array. The same file answers for every address.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &PathBuf { &self.path }
}

#[async_trait]
impl DataSource for JsonFileSource {
    async fn fetch(
        &self,
        address: &str,
        network: Network,
    ) -> Result<AddressData, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let data = match serde_json::from_str::<FileContents>(&raw)? {
            FileContents::Full(data) => data,
            FileContents::Transactions(transactions) => AddressData {
                transactions,
                ..AddressData::default()
            },
        };

        debug!(
            "source::file_loaded::path::{}::address::{}::network::{}::transactions::{}",
            self.path.display(),
            address,
            network,
            data.transactions.len()
        );

        Ok(data)
    }
}
