use std::path::PathBuf;
use std::time::Duration;

use crate::dimacs;
use crate::model::ProblemParameters;
use crate::print_planner_assert_warning_message;
use crate::supervisor::OsSignal;
use crate::supervisor::Supervisor;
use crate::PlannerError;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// The number of participants. Should be at least 2.
    pub participants: u32,

    /// The number of days to schedule.
    pub days: u32,

    /// The number of hourly slots per day. The last slot is reserved, so at least 3 are needed.
    pub hours: u32,

    /// The file the problem was read from; its base name names the generated files.
    pub source: PathBuf,

    /// The SAT solver executable, invoked as `<solver> <cnf> <solution>`.
    #[arg(long, default_value = "minisat")]
    pub solver: PathBuf,

    /// The directory in which the translation and solution files are placed.
    #[arg(long, default_value = dimacs::DEFAULT_WORKING_DIR)]
    pub working_dir: PathBuf,

    /// How often to check whether the solver finished, in milliseconds.
    #[arg(long, default_value_t = 100)]
    pub poll_interval_ms: u64,

    /// Only write the CNF translation, do not run the solver.
    #[arg(long)]
    pub translate_only: bool,
}

/// The exit code used when the run was interrupted.
pub const INTERRUPTED_EXIT_CODE: i32 = 1;

pub fn run() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;

    let args = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
    print_planner_assert_warning_message!();

    let parameters = ProblemParameters::new(args.participants, args.days, args.hours, &args.source);

    let cnf_path = dimacs::translate_to_cnf(&parameters, &args.working_dir).with_context(|| {
        format!(
            "Failed to translate {} into {}",
            args.source.display(),
            args.working_dir.display()
        )
    })?;

    if args.translate_only {
        println!("{}", cnf_path.display());
        return Ok(());
    }

    // Only now take over SIGINT, so that interrupting the translation still kills the process.
    let mut termination = OsSignal::install().context("Failed to install signal handlers")?;
    let mut supervisor =
        Supervisor::new(args.solver).with_poll_interval(Duration::from_millis(args.poll_interval_ms));

    match supervisor.solve(&cnf_path, &mut termination) {
        Ok(outcome) => {
            println!("{}", outcome.solution_path.display());
            Ok(())
        }
        Err(PlannerError::Interrupted) => {
            eprintln!("Interrupted! The solution file may be missing or incomplete.");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
        Err(error) => Err(anyhow::Error::from(error).context("Failed to solve the translated problem")),
    }
}
