use crate::error::ProjectionError;
use crate::simulation::config::SimulationParameters;
use serde::Serialize;

// We make this Serialize so we can write it to CSV later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearlyFlow {
    pub year: usize,
    pub starting_workforce: u64,
    pub retained: u64,
    pub retirements: u64,
    pub quits: u64,
}

/// Steps a workforce through the fixed annual attrition rates.
///
/// Each step splits the start-of-year population into three flows
/// (retained, retirements, quits) and carries the retained count into the
/// next year. Everything is integer persons; the two rate-derived counts
/// truncate toward zero and the rounding remainder stays retained.
pub struct AttritionSimulation {
    params: SimulationParameters,

    // Running state
    workforce: u64,
    current_year: usize,

    // One record per completed year
    pub history: Vec<YearlyFlow>,
}

impl AttritionSimulation {
    pub fn new(params: SimulationParameters) -> Result<Self, ProjectionError> {
        params.validate()?;

        Ok(Self {
            workforce: params.initial_workforce,
            current_year: 1, // Year 1 is the first projected year
            history: Vec::with_capacity(params.years),
            params,
        })
    }

    pub fn run(&mut self) {
        while self.current_year <= self.params.years {
            self.step();
        }
    }

    fn step(&mut self) {
        let starting_workforce = self.workforce;

        // Truncation toward zero on both attrition counts; the remainder
        // is assigned to retained, so the year always sums exactly.
        let retirements = (starting_workforce as f64 * self.params.retirement_rate) as u64;
        let quits = (starting_workforce as f64 * self.params.quit_rate) as u64;
        let retained = starting_workforce - retirements - quits;

        self.history.push(YearlyFlow {
            year: self.current_year,
            starting_workforce,
            retained,
            retirements,
            quits,
        });

        // Survivors become next year's starting population
        self.workforce = retained;
        self.current_year += 1;
    }

    /// The population left standing after the last completed year.
    pub fn final_workforce(&self) -> u64 {
        self.workforce
    }

    pub fn into_history(self) -> Vec<YearlyFlow> {
        self.history
    }
}

/// One-shot entry point: validate, run the full horizon, hand back the flows.
///
/// Pure apart from the validation check: identical parameters always produce
/// an identical sequence.
pub fn project(params: SimulationParameters) -> Result<Vec<YearlyFlow>, ProjectionError> {
    let mut sim = AttritionSimulation::new(params)?;
    sim.run();
    Ok(sim.into_history())
}
