use serde::Serialize;

use crate::config::LayoutConfig;
use crate::render::scene::Position;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedNode {
    pub node_id:  String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceLayout {
    #[serde(flatten)]
    pub params:                         LayoutConfig,
    pub node_dimensions_include_labels: bool,
    pub fixed_node_constraint:          Vec<FixedNode>,
}

/// Layout instructions for the backend. Scenes mount with `Preset`, which keeps
/// the precomputed positions, and then run `Force`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutSpec {
    Preset { name: &'static str, fit: bool },
    Force(ForceLayout),
}

impl LayoutSpec {
    pub fn preset() -> Self { Self::Preset { name: "preset", fit: true } }

    pub fn force(
        config: &LayoutConfig,
        target_id: &str,
    ) -> Self {
        let fixed_node_constraint = if config.pin_target {
            vec![FixedNode {
                node_id:  target_id.to_string(),
                position: Position::ORIGIN,
            }]
        } else {
            Vec::new()
        };

        Self::Force(ForceLayout {
            params: config.clone(),
            node_dimensions_include_labels: true,
            fixed_node_constraint,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Preset { name, .. } => name,
            Self::Force(force) => &force.params.name,
        }
    }
}
