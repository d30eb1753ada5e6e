//! Running the external SAT solver on a translated problem.
//!
//! The solver runs as a separate process and is invoked as
//! `<solver> <cnf-path> <solution-path>`. The only things the supervisor relies on are whether
//! that process is still alive and the solution file it leaves behind; its output is discarded.
//!
//! Waiting is a cooperative poll loop: check whether the child exited, check the
//! [`TerminationCondition`], draw a progress frame, sleep for the poll interval, repeat. There
//! is no timeout. A termination request is therefore noticed within one poll interval.
mod progress;
pub mod termination;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::Child;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;
use std::time::Instant;

use log::debug;
use log::info;
use log::warn;
use progress::Spinner;
pub use termination::Indefinite;
pub use termination::OsSignal;
pub use termination::TerminationCondition;

use crate::basic_types::PlannerError;
use crate::dimacs;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The result of a solver run that was not interrupted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Where the solver was asked to write its answer. Whether the file exists, and what it
    /// says, is up to the solver.
    pub solution_path: PathBuf,
    pub elapsed: Duration,
    /// Informational only. Solvers commonly report SAT and UNSAT through non-zero codes.
    pub status: ExitStatus,
}

/// Launches the solver executable and waits for it.
pub struct Supervisor {
    solver: PathBuf,
    poll_interval: Duration,
    progress: Spinner,
}

impl std::fmt::Debug for Supervisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Supervisor")
            .field("solver", &self.solver)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

impl Supervisor {
    /// Supervise the executable at `solver`, drawing progress on stdout.
    pub fn new(solver: impl Into<PathBuf>) -> Self {
        Supervisor {
            solver: solver.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            progress: Spinner::new(Box::new(std::io::stdout())),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Draw the progress indicator and the final message on `out` instead of stdout.
    pub fn with_progress(mut self, out: impl Write + 'static) -> Self {
        self.progress = Spinner::new(Box::new(out));
        self
    }

    /// Run the solver on `cnf_path` until it exits or `termination` asks to stop.
    ///
    /// On a stop request the solver is sent a kill request and [`PlannerError::Interrupted`] is
    /// returned right away, without waiting for the process to disappear. The solution file
    /// may then be missing or incomplete.
    pub fn solve(
        &mut self,
        cnf_path: &Path,
        termination: &mut impl TerminationCondition,
    ) -> Result<SolveOutcome, PlannerError> {
        let solution_path = dimacs::solution_path(cnf_path);
        let start = Instant::now();

        let process = SolverProcess::spawn(&self.solver, cnf_path, &solution_path)?;
        info!(
            "started {} (pid {}) on {}",
            self.solver.display(),
            process.id(),
            cnf_path.display()
        );

        self.watch(process, solution_path, start, termination)
    }

    fn watch(
        &mut self,
        mut process: impl Supervised,
        solution_path: PathBuf,
        start: Instant,
        termination: &mut impl TerminationCondition,
    ) -> Result<SolveOutcome, PlannerError> {
        loop {
            let state = match process.try_wait() {
                Ok(state) => state,
                Err(error) => {
                    process.terminate();
                    return Err(error.into());
                }
            };

            if let ChildState::Exited(status) = state {
                let elapsed = start.elapsed();

                self.progress.finish(&format!(
                    "Finished in {:.2} seconds, solution in {}",
                    elapsed.as_secs_f64(),
                    solution_path.display()
                ));
                info!("solver exited with {status} after {elapsed:?}");

                return Ok(SolveOutcome {
                    solution_path,
                    elapsed,
                    status,
                });
            }

            if termination.should_stop() {
                self.progress.finish("Interrupted!");
                process.terminate();

                return Err(PlannerError::Interrupted);
            }

            self.progress.tick();
            std::thread::sleep(self.poll_interval);
        }
    }
}

/// The view the poll loop has of a running solver.
trait Supervised {
    fn try_wait(&mut self) -> std::io::Result<ChildState>;

    fn terminate(self);
}

/// What a non-blocking look at the solver process revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildState {
    Running,
    Exited(ExitStatus),
}

/// A spawned solver. Never reused for a second run.
#[derive(Debug)]
pub struct SolverProcess {
    child: Child,
}

impl SolverProcess {
    /// Start `executable <cnf_path> <solution_path>` with all standard streams detached.
    pub fn spawn(
        executable: &Path,
        cnf_path: &Path,
        solution_path: &Path,
    ) -> Result<SolverProcess, PlannerError> {
        Command::new(executable)
            .arg(cnf_path)
            .arg(solution_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|child| SolverProcess { child })
            .map_err(|source| PlannerError::SolverLaunch {
                executable: executable.to_path_buf(),
                source,
            })
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }

    pub fn try_wait(&mut self) -> std::io::Result<ChildState> {
        Ok(match self.child.try_wait()? {
            Some(status) => ChildState::Exited(status),
            None => ChildState::Running,
        })
    }

    /// Ask the process to terminate. Whether and when it does is not checked.
    pub fn terminate(mut self) {
        match self.child.kill() {
            Ok(()) => debug!("sent kill request to solver (pid {})", self.child.id()),
            Err(error) => warn!(
                "could not terminate solver (pid {}): {error}",
                self.child.id()
            ),
        }
    }
}

impl Supervised for SolverProcess {
    fn try_wait(&mut self) -> std::io::Result<ChildState> {
        SolverProcess::try_wait(self)
    }

    fn terminate(self) {
        SolverProcess::terminate(self)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::time::Instant;

    use super::ChildState;
    use super::Supervised;
    use super::Supervisor;
    use crate::basic_types::PlannerError;
    use crate::supervisor::Indefinite;

    struct UnreachableChild {
        terminated: Rc<Cell<bool>>,
    }

    impl Supervised for UnreachableChild {
        fn try_wait(&mut self) -> io::Result<ChildState> {
            Err(io::Error::new(io::ErrorKind::Other, "lost track of the child"))
        }

        fn terminate(self) {
            self.terminated.set(true);
        }
    }

    #[test]
    fn failing_status_check_terminates_the_solver() {
        let terminated = Rc::new(Cell::new(false));
        let child = UnreachableChild {
            terminated: Rc::clone(&terminated),
        };

        let result = Supervisor::new("solver")
            .with_progress(io::sink())
            .watch(
                child,
                PathBuf::from("league_translation_solution.cnf"),
                Instant::now(),
                &mut Indefinite,
            );

        assert!(matches!(result, Err(PlannerError::Filesystem(_))));
        assert!(terminated.get());
    }
}
