use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::error::Context;
use crate::error::Result;
use crate::model::AddressData;
use crate::model::FilterState;
use crate::model::Network;
use crate::model::ProcessedGraph;
use crate::model::Transaction;
use crate::pipeline::EdgeMetrics;
use crate::pipeline::GraphProcessor;
use crate::render::SceneDescription;
use crate::render::build_scene;
use crate::source::DataSource;

/// One address on one network: fetched data, current filters and the graph
/// derived from them.
pub struct GraphSession {
    source:    Arc<dyn DataSource>,
    address:   String,
    network:   Network,
    filters:   FilterState,
    processor: GraphProcessor,
    metrics:   EdgeMetrics,
    data:      Option<AddressData>,
}

impl GraphSession {
    pub fn new(
        source: Arc<dyn DataSource>,
        address: impl Into<String>,
        network: Network,
        config: &Config,
    ) -> Self {
        Self {
            source,
            address: address.into(),
            network,
            filters: FilterState::default(),
            processor: GraphProcessor::new(&config.pipeline),
            metrics: EdgeMetrics::new(config.metrics.clone()),
            data: None,
        }
    }

    pub fn address(&self) -> &str { &self.address }

    pub fn network(&self) -> Network { self.network }

    pub fn filters(&self) -> &FilterState { &self.filters }

    pub fn data(&self) -> Option<&AddressData> { self.data.as_ref() }

    pub fn is_loaded(&self) -> bool { self.data.is_some() }

    pub fn transactions(&self) -> &[Transaction] {
        self.data.as_ref().map(|data| data.transactions.as_slice()).unwrap_or_default()
    }

    /// Fetches the address from the source and rebuilds the graph.
    pub async fn load(&mut self) -> Result<Arc<ProcessedGraph>> {
        let data = self
            .source
            .fetch(&self.address, self.network)
            .await
            .with_context(|| format!("Failed to fetch {} on {}", self.address, self.network))?;

        info!(
            "session::loaded::address::{}::network::{}::transactions::{}",
            self.address,
            self.network,
            data.transactions.len()
        );

        self.data = Some(data);
        self.processor.invalidate();
        Ok(self.graph())
    }

    pub fn set_filters(
        &mut self,
        filters: FilterState,
    ) -> Arc<ProcessedGraph> {
        self.filters = filters;
        self.graph()
    }

    /// Current graph. Before the first load this is just the target node.
    pub fn graph(&mut self) -> Arc<ProcessedGraph> {
        let transactions = self.data.as_ref().map(|data| data.transactions.as_slice()).unwrap_or_default();
        self.processor.process(&self.address, transactions, &self.filters)
    }

    pub fn scene(&mut self) -> SceneDescription {
        let graph = self.graph();
        build_scene(&graph, &self.metrics)
    }

    pub fn total_transactions(&self) -> usize { self.transactions().len() }

    pub fn max_transactions(&self) -> usize { self.processor.pipeline().max_transactions() }

    /// Whether the raw history is longer than what the graph can show.
    pub fn is_truncated(&self) -> bool { self.total_transactions() > self.max_transactions() }

    /// "Showing N of M" counts, `None` when nothing is cut.
    pub fn truncation(&self) -> Option<(usize, usize)> {
        self.is_truncated().then(|| (self.max_transactions(), self.total_transactions()))
    }
}
