use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::DataSource;
use crate::error::SourceError;
use crate::model::AddressData;
use crate::model::Network;

/// Fixed data keyed by `(network, address)`.
#[derive(Debug, Default)]
pub struct InMemorySource {
    entries: RwLock<HashMap<(Network, String), AddressData>>,
}

impl InMemorySource {
    pub fn new() -> Self { Self::default() }

    pub fn with_entry(
        mut self,
        network: Network,
        address: impl Into<String>,
        data: AddressData,
    ) -> Self {
        self.entries.get_mut().insert((network, address.into()), data);
        self
    }

    pub async fn insert(
        &self,
        network: Network,
        address: impl Into<String>,
        data: AddressData,
    ) {
        self.entries.write().await.insert((network, address.into()), data);
    }
}

#[async_trait]
impl DataSource for InMemorySource {
    async fn fetch(
        &self,
        address: &str,
        network: Network,
    ) -> Result<AddressData, SourceError> {
        self.entries
            .read()
            .await
            .get(&(network, address.to_string()))
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                network,
                address: address.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Transaction;

    #[tokio::test]
    async fn returns_stored_entry() {
        let data = AddressData {
            transactions: vec![Transaction::new("h", "a", "b", "1", 1)],
            ..AddressData::default()
        };
        let source = InMemorySource::new().with_entry(Network::Bitcoin, "bc1q", data.clone());
        assert_eq!(source.fetch("bc1q", Network::Bitcoin).await.unwrap(), data);
    }

    #[tokio::test]
    async fn network_is_part_of_the_key() {
        let source = InMemorySource::new();
        source.insert(Network::Ethereum, "0x1", AddressData::default()).await;
        let err = source.fetch("0x1", Network::Solana).await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound { network: Network::Solana, .. }));
    }
}
