use std::collections::HashMap;

use petgraph::Graph;
use petgraph::prelude::*;
use serde::Deserialize;
use serde::Serialize;

use crate::model::category::AddressCategory;
use crate::model::category::categorize;
use crate::utils::shorten_address;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id:          String,
    pub label:       String,
    pub is_target:   bool,
    pub is_incoming: bool,
    pub is_outgoing: bool,
    /// `None` only for the target node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category:    Option<AddressCategory>,
}

impl GraphNode {
    pub fn target(address: &str) -> Self {
        Self {
            id:          address.to_string(),
            label:       shorten_address(address),
            is_target:   true,
            is_incoming: false,
            is_outgoing: false,
            category:    None,
        }
    }

    pub fn counterparty(
        address: &str,
        is_incoming: bool,
        is_outgoing: bool,
    ) -> Self {
        Self {
            id: address.to_string(),
            label: shorten_address(address),
            is_target: false,
            is_incoming,
            is_outgoing,
            category: Some(categorize(address)),
        }
    }

    /// Category whose filter governs this node. The target has none of its
    /// own and falls under `Uncategorized`.
    pub fn filter_category(&self) -> AddressCategory { self.category.unwrap_or(AddressCategory::Uncategorized) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    /// `e{index}-{first 8 chars of hash}`; unique within one build.
    pub id:               String,
    pub source:           String,
    pub target:           String,
    /// Raw value string, shown verbatim.
    pub label:            String,
    pub value:            f64,
    pub is_incoming:      bool,
    pub is_self_transfer: bool,
    pub hash:             String,
    pub timestamp:        i64,
}

/// Output of the pipeline: plain node and edge lists in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessedGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl ProcessedGraph {
    pub fn new(
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
    ) -> Self {
        Self { nodes, edges }
    }

    /// No edges means nothing worth drawing, even if the target node exists.
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    pub fn target(&self) -> Option<&GraphNode> { self.nodes.iter().find(|node| node.is_target) }

    pub fn node(
        &self,
        id: &str,
    ) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn edges_with_hash<'a>(
        &'a self,
        hash: &'a str,
    ) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |edge| edge.hash == hash)
    }
}

/// Directed multigraph keyed by address. Insertion order of nodes and edges
/// is preserved, which keeps output lists stable.
#[derive(Debug, Clone, Default)]
pub struct TransactionGraph {
    graph:        Graph<GraphNode, GraphEdge>,
    node_indices: HashMap<String, NodeIndex>,
}

impl TransactionGraph {
    pub fn new() -> Self {
        Self {
            graph:        Graph::new(),
            node_indices: HashMap::new(),
        }
    }

    /// Rebuilds a graph from flat lists. Edges whose endpoints are not in
    /// `nodes` are dropped.
    pub fn from_parts(
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
    ) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Adds `node` unless one with the same id exists; returns the index
    /// either way.
    pub fn add_node(
        &mut self,
        node: GraphNode,
    ) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(&node.id) {
            return idx;
        }

        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_indices.insert(id, idx);
        idx
    }

    pub fn node(
        &self,
        id: &str,
    ) -> Option<&GraphNode> {
        let idx = *self.node_indices.get(id)?;
        self.graph.node_weight(idx)
    }

    pub fn contains(
        &self,
        id: &str,
    ) -> bool {
        self.node_indices.contains_key(id)
    }

    pub fn add_edge(
        &mut self,
        edge: GraphEdge,
    ) -> Option<EdgeIndex> {
        let source = *self.node_indices.get(&edge.source)?;
        let target = *self.node_indices.get(&edge.target)?;
        Some(self.graph.add_edge(source, target, edge))
    }

    pub fn node_count(&self) -> usize { self.graph.node_count() }

    pub fn edge_count(&self) -> usize { self.graph.edge_count() }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> { self.graph.node_weights() }

    /// Edges in insertion order together with their endpoint nodes.
    pub fn edges(&self) -> impl Iterator<Item = (&GraphNode, &GraphNode, &GraphEdge)> {
        self.graph
            .edge_references()
            .map(|edge| (&self.graph[edge.source()], &self.graph[edge.target()], edge.weight()))
    }

    pub fn into_processed(self) -> ProcessedGraph {
        let (nodes, edges) = self.graph.into_nodes_edges();
        ProcessedGraph {
            nodes: nodes.into_iter().map(|node| node.weight).collect(),
            edges: edges.into_iter().map(|edge| edge.weight).collect(),
        }
    }
}
