use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use tracing::warn;

use crate::config::Config;
use crate::engine::session::GraphSession;
use crate::error::Result;
use crate::model::FilterState;
use crate::model::Network;
use crate::model::ProcessedGraph;
use crate::render::Legend;
use crate::render::SceneDescription;
use crate::source::JsonFileSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Graph,
    Scene,
}

#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub input:   PathBuf,
    pub address: String,
    pub network: Network,
    pub filters: FilterState,
    pub kind:    ReportKind,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Truncation {
    pub shown: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphReport {
    pub address:            String,
    pub network:            Network,
    pub total_transactions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation:         Option<Truncation>,
    pub graph:              ProcessedGraph,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene:              Option<SceneDescription>,
    pub legend:             Legend,
}

/// Loads the input file for one address and assembles the report.
pub async fn build_report(
    config: &Config,
    request: ReportRequest,
) -> Result<GraphReport> {
    let source = Arc::new(JsonFileSource::new(&request.input));
    let mut session = GraphSession::new(source, &request.address, request.network, config);

    session.load().await?;
    let graph = session.set_filters(request.filters);

    let truncation = session.truncation().map(|(shown, total)| {
        warn!("report::truncated::showing::{}::of::{}::transactions", shown, total);
        Truncation { shown, total }
    });

    let scene = match request.kind {
        ReportKind::Graph => None,
        ReportKind::Scene => Some(session.scene()),
    };

    info!(
        "report::built::address::{}::nodes::{}::edges::{}",
        request.address,
        graph.nodes.len(),
        graph.edges.len()
    );

    Ok(GraphReport {
        address: request.address,
        network: request.network,
        total_transactions: session.total_transactions(),
        truncation,
        graph: ProcessedGraph::clone(&graph),
        scene,
        legend: Legend::default(),
    })
}
