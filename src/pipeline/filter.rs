use tracing::debug;

use crate::model::CategoryFilter;
use crate::model::CategoryFilters;
use crate::model::FilterState;
use crate::model::FlowDirection;
use crate::model::GraphEdge;
use crate::model::GraphNode;
use crate::model::ProcessedGraph;
use crate::model::TransactionGraph;

/// Category and flow filters over built nodes and edges. Nodes go first; an
/// edge needs both endpoints to survive and both endpoint filters to pass.
pub fn apply_filters(
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    filters: &FilterState,
) -> ProcessedGraph {
    filter_graph(&TransactionGraph::from_parts(nodes, edges), filters)
}

pub fn filter_graph(
    graph: &TransactionGraph,
    filters: &FilterState,
) -> ProcessedGraph {
    let categories = &filters.category_filters;
    let mut filtered = TransactionGraph::new();

    for node in graph.nodes().filter(|node| node_passes(node, categories)) {
        filtered.add_node(node.clone());
    }

    let self_visible = categories.any_self_only();

    for (source, target, edge) in graph.edges() {
        if !filtered.contains(&source.id) || !filtered.contains(&target.id) {
            continue;
        }
        if edge_passes(edge, source, target, categories, self_visible) {
            filtered.add_edge(edge.clone());
        }
    }

    debug!(
        "filter::graph_filtered::nodes::{}/{}::edges::{}/{}",
        filtered.node_count(),
        graph.node_count(),
        filtered.edge_count(),
        graph.edge_count()
    );

    filtered.into_processed()
}

pub fn node_passes(
    node: &GraphNode,
    categories: &CategoryFilters,
) -> bool {
    if node.is_target {
        return true;
    }

    let filter = categories.get(node.filter_category());
    if !filter.enabled {
        return false;
    }

    match filter.flow {
        FlowDirection::In => node.is_incoming,
        FlowDirection::Out => node.is_outgoing,
        FlowDirection::All | FlowDirection::SelfTransfer => true,
    }
}

fn edge_passes(
    edge: &GraphEdge,
    source: &GraphNode,
    target: &GraphNode,
    categories: &CategoryFilters,
    self_visible: bool,
) -> bool {
    let source_filter = categories.get(source.filter_category());
    let target_filter = categories.get(target.filter_category());

    if !source_filter.enabled || !target_filter.enabled {
        return false;
    }

    if edge.is_self_transfer {
        return self_visible;
    }

    flow_admits(source_filter, edge) && flow_admits(target_filter, edge)
}

fn flow_admits(
    filter: &CategoryFilter,
    edge: &GraphEdge,
) -> bool {
    match filter.flow {
        FlowDirection::In => edge.is_incoming,
        FlowDirection::Out => !edge.is_incoming,
        FlowDirection::All | FlowDirection::SelfTransfer => true,
    }
}
