use crate::simulation::engine::YearlyFlow;

// Horizontal band the node columns are spread across (the start node sits
// at the left margin, year N at the right edge).
const X_MARGIN: f64 = 0.01;
const X_SPAN: f64 = 0.98;

/// The three outcomes a start-of-year workforce can flow into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowCategory {
    Retained,
    Retirements,
    Quits,
}

impl FlowCategory {
    pub const ALL: [FlowCategory; 3] = [
        FlowCategory::Retained,
        FlowCategory::Retirements,
        FlowCategory::Quits,
    ];

    /// Link color: green (retained), red (retirements), orange (quits).
    pub fn color(self) -> &'static str {
        match self {
            FlowCategory::Retained => "rgba(44, 160, 44, 0.6)",
            FlowCategory::Retirements => "rgba(214, 39, 40, 0.6)",
            FlowCategory::Quits => "rgba(255, 127, 14, 0.6)",
        }
    }

    /// Fixed vertical slot, so like categories line up across years.
    pub fn slot_y(self) -> f64 {
        match self {
            FlowCategory::Retained => 0.15,
            FlowCategory::Retirements => 0.5,
            FlowCategory::Quits => 0.85,
        }
    }

    pub fn label(self, year: usize) -> String {
        match self {
            FlowCategory::Retained => format!("Retained Y{year}"),
            FlowCategory::Retirements => format!("Retirements Y{year}"),
            FlowCategory::Quits => format!("Quits Y{year}"),
        }
    }

    fn volume(self, flow: &YearlyFlow) -> u64 {
        match self {
            FlowCategory::Retained => flow.retained,
            FlowCategory::Retirements => flow.retirements,
            FlowCategory::Quits => flow.quits,
        }
    }
}

/// A labeled, positioned node. Node identity is its index in
/// `FlowGraph::nodes`; edges refer to nodes by that index.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// A weighted directed link from one node to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowEdge {
    pub source: usize,
    pub target: usize,
    pub value: u64,
    pub category: FlowCategory,
}

/// The full multi-stage flow graph: one start node, then three outcome
/// nodes per projected year. A year's retained node doubles as the next
/// year's source, so every node except the start has exactly one
/// incoming edge and no edge ever skips a year.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

/// Lays the yearly flows out as a Sankey-ready graph.
///
/// # Arguments
/// * `flows` - The ordered per-year records from the simulation engine.
pub fn build_flow_graph(flows: &[YearlyFlow]) -> FlowGraph {
    let years = flows.len();
    let initial_workforce = flows.first().map_or(0, |f| f.starting_workforce);

    let mut nodes = Vec::with_capacity(1 + 3 * years);
    let mut edges = Vec::with_capacity(3 * years);

    // Node 0: the whole starting workforce, labelled in millions.
    nodes.push(FlowNode {
        label: format!("Workforce ({:.2}M)", initial_workforce as f64 / 1_000_000.0),
        x: X_MARGIN,
        y: FlowCategory::Retained.slot_y(), // same level as the green flow
    });

    let mut source = 0; // start node feeds year 1
    for flow in flows {
        // Columns are spread evenly; year N lands at the right edge.
        let x = X_MARGIN + (flow.year as f64 / years as f64) * X_SPAN;

        // Retained is pushed first, so it sits at the column's base index.
        let retained_index = nodes.len();
        for category in FlowCategory::ALL {
            let target = nodes.len();
            nodes.push(FlowNode {
                label: category.label(flow.year),
                x,
                y: category.slot_y(),
            });
            edges.push(FlowEdge {
                source,
                target,
                value: category.volume(flow),
                category,
            });
        }

        // Next year's flows fan out of this year's retained block.
        source = retained_index;
    }

    FlowGraph { nodes, edges }
}
