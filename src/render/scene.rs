use std::collections::HashMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::model::AddressCategory;
use crate::model::GraphEdge;
use crate::model::GraphNode;
use crate::model::ProcessedGraph;
use crate::pipeline::EdgeMetrics;
use crate::render::layout::LayoutSpec;
use crate::render::style::StyleRule;
use crate::render::style::style_rules;
use crate::utils::stable_seed;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub id:          String,
    pub label:       String,
    pub is_target:   bool,
    pub is_incoming: bool,
    pub is_outgoing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category:    Option<AddressCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeData {
    pub id:               String,
    pub source:           String,
    pub target:           String,
    pub label:            String,
    pub value:            f64,
    pub width:            f64,
    pub highlight_width:  f64,
    /// Perpendicular shift separating parallel edges between the same pair.
    pub offset:           f64,
    pub is_incoming:      bool,
    pub is_self_transfer: bool,
    pub hash:             String,
    pub timestamp:        i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "group")]
pub enum SceneElement {
    #[serde(rename = "nodes")]
    Node { data: NodeData, position: Position },
    #[serde(rename = "edges")]
    Edge { data: EdgeData },
}

impl SceneElement {
    pub fn id(&self) -> &str {
        match self {
            Self::Node { data, .. } => &data.id,
            Self::Edge { data } => &data.id,
        }
    }
}

/// Everything a backend needs to mount a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescription {
    pub elements: Vec<SceneElement>,
    pub style:    Vec<StyleRule>,
    pub layout:   LayoutSpec,
}

impl SceneDescription {
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeData, &Position)> {
        self.elements.iter().filter_map(|element| match element {
            SceneElement::Node { data, position } => Some((data, position)),
            SceneElement::Edge { .. } => None,
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeData> {
        self.elements.iter().filter_map(|element| match element {
            SceneElement::Edge { data } => Some(data),
            SceneElement::Node { .. } => None,
        })
    }
}

/// Nodes first, then edges, in graph order. Initial positions are jittered
/// from a seed derived from the node id, so the same graph always yields the
/// same scene.
pub fn build_scene(
    graph: &ProcessedGraph,
    metrics: &EdgeMetrics,
) -> SceneDescription {
    let mut elements = Vec::with_capacity(graph.nodes.len() + graph.edges.len());

    elements.extend(graph.nodes.iter().map(|node| SceneElement::Node {
        data:     node_data(node),
        position: initial_position(node),
    }));

    let mut totals: HashMap<(&str, &str), usize> = HashMap::new();
    for edge in &graph.edges {
        *totals.entry((edge.source.as_str(), edge.target.as_str())).or_default() += 1;
    }

    let mut seen: HashMap<(&str, &str), usize> = HashMap::new();
    for edge in &graph.edges {
        let key = (edge.source.as_str(), edge.target.as_str());
        let index = seen.entry(key).or_default();
        let total = totals.get(&key).copied().unwrap_or(1);
        elements.push(SceneElement::Edge {
            data: edge_data(edge, metrics, *index, total),
        });
        *index += 1;
    }

    SceneDescription {
        elements,
        style: style_rules(graph.edges.len()),
        layout: LayoutSpec::preset(),
    }
}

pub fn initial_position(node: &GraphNode) -> Position {
    if node.is_target {
        return Position::ORIGIN;
    }

    let mut rng = StdRng::seed_from_u64(stable_seed(&node.id));
    let x = if node.is_incoming {
        -250.0 + rng.random_range(0.0..50.0)
    } else {
        250.0 - rng.random_range(0.0..50.0)
    };
    let y = -100.0 + rng.random_range(0.0..200.0);

    Position { x, y }
}

fn node_data(node: &GraphNode) -> NodeData {
    NodeData {
        id:          node.id.clone(),
        label:       node.label.clone(),
        is_target:   node.is_target,
        is_incoming: node.is_incoming,
        is_outgoing: node.is_outgoing,
        category:    node.category,
    }
}

fn edge_data(
    edge: &GraphEdge,
    metrics: &EdgeMetrics,
    index: usize,
    total: usize,
) -> EdgeData {
    let width = metrics.width(edge.value);

    EdgeData {
        id: edge.id.clone(),
        source: edge.source.clone(),
        target: edge.target.clone(),
        label: edge.label.clone(),
        value: edge.value,
        width,
        highlight_width: width + 2.0,
        offset: metrics.offset(index, total),
        is_incoming: edge.is_incoming,
        is_self_transfer: edge.is_self_transfer,
        hash: edge.hash.clone(),
        timestamp: edge.timestamp,
    }
}
