// src/io/reporting.rs

use crate::error::ProjectionError;
use crate::io::sankey::SankeyFigure;
use crate::model::graph::FlowGraph;
use crate::simulation::engine::YearlyFlow;
use std::fs;
use std::path::Path;

/// Renders the flow graph and writes the standalone HTML document.
///
/// A single attempt: any existing file at the path is overwritten, and a
/// failed write surfaces as an `Io` error naming the path.
///
/// # Arguments
/// * `file_path` - Destination of the HTML artifact.
/// * `graph` - The flow graph produced by `build_flow_graph`.
pub fn write_sankey_html(file_path: &str, graph: &FlowGraph) -> Result<(), ProjectionError> {
    let html = SankeyFigure::from_graph(graph).to_html()?;

    fs::write(file_path, html).map_err(|source| ProjectionError::Io {
        path: Path::new(file_path).to_path_buf(),
        source,
    })
}

/// Writes the per-year flow history to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/flows.csv").
/// * `data` - The vector of yearly flows from the simulation engine.
pub fn write_flow_log(file_path: &str, data: &[YearlyFlow]) -> Result<(), ProjectionError> {
    let mut wtr = csv::Writer::from_path(file_path)?;

    // Serialize and write each record
    for record in data {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush().map_err(|source| ProjectionError::Io {
        path: Path::new(file_path).to_path_buf(),
        source,
    })?;

    println!(
        "Successfully exported {} rows to '{}'",
        data.len(),
        file_path
    );
    Ok(())
}
