// src/io/sankey.rs

use crate::error::ProjectionError;
use crate::model::graph::FlowGraph;
use serde::Serialize;

pub const DIAGRAM_TITLE: &str = "The Leaking Bucket: 5-Year Insurance Workforce Attrition";

// Plotly reads the figure out of this shell at load time; the rendering
// itself happens client-side against the CDN bundle.
const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>__TITLE__</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
</head>
<body>
<div id="sankey" style="width:100%;height:700px;"></div>
<script>
    var figure = __FIGURE__;
    Plotly.newPlot("sankey", figure.data, figure.layout, {responsive: true});
</script>
</body>
</html>
"#;

/// A Plotly figure holding a single Sankey trace.
///
/// These structs serialize straight into the JSON shape Plotly.js expects,
/// so the field names below are Plotly's, not ours.
#[derive(Debug, Serialize)]
pub struct SankeyFigure {
    data: [SankeyTrace; 1],
    layout: Layout,
}

#[derive(Debug, Serialize)]
struct SankeyTrace {
    #[serde(rename = "type")]
    trace_type: &'static str,
    arrangement: &'static str,
    node: NodeStyle,
    link: LinkData,
}

#[derive(Debug, Serialize)]
struct NodeStyle {
    pad: u32,
    thickness: u32,
    line: LineStyle,
    label: Vec<String>,
    color: &'static str,
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct LineStyle {
    color: &'static str,
    width: f64,
}

#[derive(Debug, Serialize)]
struct LinkData {
    source: Vec<usize>,
    target: Vec<usize>,
    value: Vec<u64>,
    color: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct Layout {
    title: Title,
    font: Font,
    paper_bgcolor: &'static str,
    plot_bgcolor: &'static str,
    height: u32,
    margin: Margin,
}

#[derive(Debug, Serialize)]
struct Title {
    text: &'static str,
    font: Font,
    x: f64,
    xanchor: &'static str,
}

#[derive(Debug, Serialize)]
struct Font {
    size: u32,
}

#[derive(Debug, Serialize)]
struct Margin {
    t: u32,
    b: u32,
    l: u32,
    r: u32,
}

impl SankeyFigure {
    /// Flattens the record graph into Plotly's lockstep parallel arrays.
    /// This is the only place the parallel-array representation exists.
    pub fn from_graph(graph: &FlowGraph) -> Self {
        let mut label = Vec::with_capacity(graph.nodes.len());
        let mut x = Vec::with_capacity(graph.nodes.len());
        let mut y = Vec::with_capacity(graph.nodes.len());
        for node in &graph.nodes {
            label.push(node.label.clone());
            x.push(node.x);
            y.push(node.y);
        }

        let mut source = Vec::with_capacity(graph.edges.len());
        let mut target = Vec::with_capacity(graph.edges.len());
        let mut value = Vec::with_capacity(graph.edges.len());
        let mut color = Vec::with_capacity(graph.edges.len());
        for edge in &graph.edges {
            source.push(edge.source);
            target.push(edge.target);
            value.push(edge.value);
            color.push(edge.category.color());
        }

        Self {
            data: [SankeyTrace {
                trace_type: "sankey",
                arrangement: "snap",
                node: NodeStyle {
                    pad: 25,
                    thickness: 25,
                    line: LineStyle {
                        color: "black",
                        width: 0.5,
                    },
                    label,
                    color: "rgba(100, 149, 237, 0.4)",
                    x,
                    y,
                },
                link: LinkData {
                    source,
                    target,
                    value,
                    color,
                },
            }],
            layout: Layout {
                title: Title {
                    text: DIAGRAM_TITLE,
                    font: Font { size: 20 },
                    x: 0.5,
                    xanchor: "center",
                },
                font: Font { size: 14 },
                paper_bgcolor: "white",
                plot_bgcolor: "white",
                height: 700,
                margin: Margin {
                    t: 80,
                    b: 60,
                    l: 80,
                    r: 80,
                },
            },
        }
    }

    /// Embeds the serialized figure in the standalone HTML shell.
    pub fn to_html(&self) -> Result<String, ProjectionError> {
        let figure_json = serde_json::to_string(self)?;
        Ok(HTML_TEMPLATE
            .replace("__TITLE__", DIAGRAM_TITLE)
            .replace("__FIGURE__", &figure_json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::build_flow_graph;
    use crate::simulation::config::SimulationParameters;
    use crate::simulation::engine::project;
    use serde_json::Value;

    fn canonical_figure() -> SankeyFigure {
        let flows = project(SimulationParameters::default()).unwrap();
        SankeyFigure::from_graph(&build_flow_graph(&flows))
    }

    #[test]
    fn parallel_arrays_stay_in_lockstep() {
        let figure = canonical_figure();
        let trace = &figure.data[0];
        assert_eq!(trace.node.label.len(), 16);
        assert_eq!(trace.node.x.len(), trace.node.label.len());
        assert_eq!(trace.node.y.len(), trace.node.label.len());
        assert_eq!(trace.link.source.len(), 15);
        assert_eq!(trace.link.target.len(), 15);
        assert_eq!(trace.link.value.len(), 15);
        assert_eq!(trace.link.color.len(), 15);
    }

    #[test]
    fn figure_serializes_into_plotly_shape() {
        let json: Value = serde_json::to_value(canonical_figure()).unwrap();
        assert_eq!(json["data"][0]["type"], "sankey");
        assert_eq!(json["data"][0]["arrangement"], "snap");
        assert_eq!(json["data"][0]["link"]["value"][0], 2_851_860);
        assert_eq!(json["data"][0]["node"]["label"][0], "Workforce (2.98M)");
        assert_eq!(json["layout"]["height"], 700);
        assert_eq!(json["layout"]["title"]["text"], DIAGRAM_TITLE);
    }

    #[test]
    fn link_colors_follow_the_category_palette() {
        let figure = canonical_figure();
        let colors = &figure.data[0].link.color;
        // Year pattern repeats: green, red, orange.
        assert_eq!(colors[0], "rgba(44, 160, 44, 0.6)");
        assert_eq!(colors[1], "rgba(214, 39, 40, 0.6)");
        assert_eq!(colors[2], "rgba(255, 127, 14, 0.6)");
        assert_eq!(colors[12], colors[0]);
    }

    #[test]
    fn html_document_is_self_contained() {
        let html = canonical_figure().to_html().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("cdn.plot.ly"));
        assert!(html.contains(DIAGRAM_TITLE));
        assert!(html.contains("Plotly.newPlot"));
        assert!(html.contains("\"Retirements Y5\""));
        assert!(!html.contains("__FIGURE__"));
        assert!(!html.contains("__TITLE__"));
    }
}
