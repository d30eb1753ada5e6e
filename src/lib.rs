//! # sat-planner
//! Schedules meetings between participants by reduction to SAT.
//!
//! A problem with `n` participants, `d` days and `h` hourly slots is encoded as a DIMACS CNF
//! instance over the pairing variables `x[i, j, day, hour]`, "participant `i` meets
//! participant `j` on `day`, starting at `hour`". The instance is then handed to an external
//! SAT solver, which is supervised until it produces its solution file.
//!
//! ```no_run
//! # use std::path::Path;
//! # use sat_planner::model::ProblemParameters;
//! # use sat_planner::supervisor::Indefinite;
//! # use sat_planner::supervisor::Supervisor;
//! let parameters = ProblemParameters::new(4, 2, 3, "league.json");
//!
//! let mut supervisor = Supervisor::new("minisat");
//! let outcome = sat_planner::plan(
//!     &parameters,
//!     Path::new(".tmp_sat-planner"),
//!     &mut supervisor,
//!     &mut Indefinite,
//! )?;
//!
//! println!("solution written to {}", outcome.solution_path.display());
//! # Ok::<(), sat_planner::PlannerError>(())
//! ```
pub mod asserts;
pub mod dimacs;
pub mod encodings;
pub mod model;
pub mod runner;
pub mod supervisor;

mod basic_types;
#[cfg(test)]
mod tests;

use std::path::Path;

pub use basic_types::Clause;
pub use basic_types::ConfigurationError;
pub use basic_types::Lit;
pub use basic_types::PlannerError;

use crate::model::ProblemParameters;
use crate::supervisor::SolveOutcome;
use crate::supervisor::Supervisor;
use crate::supervisor::TerminationCondition;

/// Translate `parameters` into a CNF file under `working_dir` and run the solver on it.
pub fn plan(
    parameters: &ProblemParameters,
    working_dir: &Path,
    supervisor: &mut Supervisor,
    termination: &mut impl TerminationCondition,
) -> Result<SolveOutcome, PlannerError> {
    let cnf_path = dimacs::translate_to_cnf(parameters, working_dir)?;
    supervisor.solve(&cnf_path, termination)
}
