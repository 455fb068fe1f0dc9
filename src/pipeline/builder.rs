use std::collections::HashSet;

use tracing::warn;

use crate::model::GraphEdge;
use crate::model::GraphNode;
use crate::model::Transaction;
use crate::model::TransactionGraph;

/// Target node first, then every counterparty in first-seen order. A node's
/// flags come from the first transaction that mentions it.
pub fn build_nodes(
    address: &str,
    transactions: &[Transaction],
) -> Vec<GraphNode> {
    let mut nodes = vec![GraphNode::target(address)];
    let mut seen: HashSet<&str> = HashSet::from([address]);

    for tx in transactions {
        if !tx.has_endpoints() {
            warn!("builder::skip_node::missing_endpoints::hash::{:?}", tx.hash);
            continue;
        }

        let from_is_target = tx.from == address;
        let to_is_target = tx.to == address;

        if seen.insert(tx.from.as_str()) {
            nodes.push(GraphNode::counterparty(&tx.from, !from_is_target && to_is_target, from_is_target));
        }

        if seen.insert(tx.to.as_str()) {
            nodes.push(GraphNode::counterparty(&tx.to, to_is_target, to_is_target && !from_is_target));
        }
    }

    nodes
}

/// One edge per transaction. The index in the id is the position in
/// `transactions`, so skipped entries leave gaps rather than renumbering.
pub fn build_edges(
    address: &str,
    transactions: &[Transaction],
) -> Vec<GraphEdge> {
    transactions
        .iter()
        .enumerate()
        .filter_map(|(index, tx)| {
            if !tx.is_complete() {
                warn!("builder::skip_edge::missing_fields::index::{}::hash::{:?}", index, tx.hash);
                return None;
            }
            Some(edge_for(index, tx, address))
        })
        .collect()
}

/// Nodes and edges assembled into one graph.
pub fn build_graph(
    address: &str,
    transactions: &[Transaction],
) -> TransactionGraph {
    TransactionGraph::from_parts(build_nodes(address, transactions), build_edges(address, transactions))
}

fn edge_for(
    index: usize,
    tx: &Transaction,
    address: &str,
) -> GraphEdge {
    let hash_prefix: String = tx.hash.chars().take(8).collect();

    GraphEdge {
        id:               format!("e{index}-{hash_prefix}"),
        source:           tx.from.clone(),
        target:           tx.to.clone(),
        label:            tx.value.clone(),
        value:            tx.amount(),
        is_incoming:      tx.is_incoming_to(address),
        is_self_transfer: tx.is_self_transfer(),
        hash:             tx.hash.clone(),
        timestamp:        tx.timestamp,
    }
}
