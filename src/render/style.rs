use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::model::AddressCategory;

pub const INCOMING_COLOR: &str = "#00FF41";
pub const OUTGOING_COLOR: &str = "#FF3864";
pub const SELF_TRANSFER_COLOR: &str = "#AAAAAA";
pub const HIGHLIGHT_COLOR: &str = "#FFFFFF";
pub const TARGET_BORDER_COLOR: &str = "#9b87f5";
pub const BACKGROUND_COLOR: &str = "#131118";

/// Class the backend toggles on selected edges.
pub const HIGHLIGHTED_CLASS: &str = "highlighted";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRule {
    pub selector: String,
    pub style:    Map<String, Value>,
}

impl StyleRule {
    fn new(
        selector: impl Into<String>,
        style: Value,
    ) -> Self {
        let style = match style {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            selector: selector.into(),
            style,
        }
    }
}

/// Straight lines above 500 edges, unbundled curves above 200, bezier below.
pub fn curve_style(edge_count: usize) -> &'static str {
    if edge_count > 500 {
        "straight"
    } else if edge_count > 200 {
        "unbundled-bezier"
    } else {
        "bezier"
    }
}

/// Declarative style sheet. Later rules override earlier ones.
pub fn style_rules(edge_count: usize) -> Vec<StyleRule> {
    let mut rules = vec![
        StyleRule::new(
            "node",
            json!({
                "background-color": "#000000",
                "border-color": "#454560",
                "border-width": 1,
                "width": 42,
                "height": 42,
                "label": "data(label)",
                "color": "#FFFFFF",
                "text-background-color": "#1A1A25",
                "text-background-opacity": 0.7,
                "text-valign": "bottom",
                "text-halign": "center",
                "font-size": "11px",
                "text-margin-y": 6,
                "text-outline-width": 1,
                "text-outline-color": BACKGROUND_COLOR,
            }),
        ),
        StyleRule::new(
            "node[?isTarget]",
            json!({
                "border-color": TARGET_BORDER_COLOR,
                "border-width": 2,
                "width": 55,
                "height": 55,
                "font-weight": "bold",
                "font-size": "12px",
                "text-background-color": "#4C1D95",
                "z-index": 10,
            }),
        ),
    ];

    rules.extend(AddressCategory::ALL.into_iter().map(|category| {
        StyleRule::new(format!("node[category=\"{}\"]", category), json!({ "border-color": category.color() }))
    }));

    rules.extend([
        StyleRule::new(
            "edge",
            json!({
                "width": "data(width)",
                "line-color": OUTGOING_COLOR,
                "target-arrow-color": OUTGOING_COLOR,
                "target-arrow-shape": "triangle",
                "curve-style": curve_style(edge_count),
                "control-point-distance": "data(offset)",
                "control-point-step-size": 40,
                "arrow-scale": 1.3,
                "line-style": "solid",
                "z-index": 1,
            }),
        ),
        StyleRule::new(
            "edge[?isIncoming]",
            json!({ "line-color": INCOMING_COLOR, "target-arrow-color": INCOMING_COLOR }),
        ),
        StyleRule::new(
            "edge[?isSelfTransfer]",
            json!({
                "line-color": SELF_TRANSFER_COLOR,
                "target-arrow-color": SELF_TRANSFER_COLOR,
                "line-style": "dashed",
            }),
        ),
        StyleRule::new(
            format!("edge.{HIGHLIGHTED_CLASS}"),
            json!({
                "line-color": HIGHLIGHT_COLOR,
                "target-arrow-color": HIGHLIGHT_COLOR,
                "line-style": "solid",
                "width": "data(highlightWidth)",
                "z-index": 999,
                "opacity": 1,
            }),
        ),
        StyleRule::new("node[?isIncoming]", json!({ "border-color": INCOMING_COLOR })),
        StyleRule::new("node[?isOutgoing]", json!({ "border-color": OUTGOING_COLOR })),
    ]);

    rules
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub flows:      Vec<LegendEntry>,
    pub categories: Vec<LegendEntry>,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            flows:      vec![
                LegendEntry {
                    label: "Incoming",
                    color: INCOMING_COLOR,
                },
                LegendEntry {
                    label: "Outgoing",
                    color: OUTGOING_COLOR,
                },
                LegendEntry {
                    label: "Self",
                    color: SELF_TRANSFER_COLOR,
                },
            ],
            categories: AddressCategory::ALL
                .into_iter()
                .map(|category| LegendEntry {
                    label: category.label(),
                    color: category.color(),
                })
                .collect(),
        }
    }
}
