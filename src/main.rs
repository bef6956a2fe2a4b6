mod error;
mod io;
mod model;
mod simulation;

use crate::error::ProjectionError;
use crate::io::reporting;
use crate::model::graph::build_flow_graph;
use crate::simulation::config::SimulationParameters;
use crate::simulation::engine::AttritionSimulation;

const SANKEY_OUTPUT: &str = "insurance_workforce_attrition_sankey.html";
const FLOW_LOG_OUTPUT: &str = "insurance_workforce_attrition_flows.csv";

fn run() -> Result<(), ProjectionError> {
    println!("=== Insurance Workforce Attrition Projection ===");

    // 1. SETUP PARAMETERS
    // The canonical scenario: 2.98M workers, 3.3% retirements and 1% quits
    // per year, over a five-year horizon.
    let params = SimulationParameters::default();

    // 2. RUN PROJECTION
    let mut sim = AttritionSimulation::new(params)?;
    sim.run();

    // 3. PRINT YEARLY BREAKDOWN
    println!("\n=== Yearly Flows ===");
    for flow in &sim.history {
        println!(
            "Year {}: {} -> retained {}, retirements {}, quits {}",
            flow.year, flow.starting_workforce, flow.retained, flow.retirements, flow.quits
        );
    }
    println!(
        "Workforce after {} years: {} of {}",
        params.years,
        sim.final_workforce(),
        params.initial_workforce
    );

    // 4. BUILD FLOW GRAPH
    let graph = build_flow_graph(&sim.history);

    // 5. RENDER AND EXPORT
    reporting::write_sankey_html(SANKEY_OUTPUT, &graph)?;
    println!("\nSankey diagram saved to: {SANKEY_OUTPUT}");

    reporting::write_flow_log(FLOW_LOG_OUTPUT, &sim.history)?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
