pub mod file;
pub mod memory;

use async_trait::async_trait;

pub use file::JsonFileSource;
pub use memory::InMemorySource;

use crate::error::SourceError;
use crate::model::AddressData;
use crate::model::Network;

/// Upstream provider of balance, assets and history for an address.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(
        &self,
        address: &str,
        network: Network,
    ) -> Result<AddressData, SourceError>;
}
