//! Conditions under which the supervisor gives up on the solver.
//!
//! A condition is only consulted at poll boundaries, so it does not need to be fast to react;
//! it only needs to be cheap to check.
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use signal_hook::consts::SIGINT;
use signal_hook::consts::SIGTERM;

pub trait TerminationCondition {
    /// Returns `true` when the supervised solver should be terminated.
    fn should_stop(&mut self) -> bool;
}

/// Never stops; the supervisor waits for the solver for as long as it takes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Stops once the process received SIGINT or SIGTERM.
///
/// Installing the handlers replaces the default behaviour of these signals for the whole
/// process: they no longer terminate it, they only raise the flag.
#[derive(Clone, Debug)]
pub struct OsSignal {
    signal_received: Arc<AtomicBool>,
}

impl OsSignal {
    pub fn install() -> std::io::Result<OsSignal> {
        let signal_received = Arc::new(AtomicBool::new(false));

        for signal in [SIGINT, SIGTERM] {
            let _ = signal_hook::flag::register(signal, Arc::clone(&signal_received))?;
        }

        Ok(OsSignal { signal_received })
    }

    /// Use an externally managed flag instead of signal handlers.
    pub fn from_flag(signal_received: Arc<AtomicBool>) -> OsSignal {
        OsSignal { signal_received }
    }
}

impl TerminationCondition for OsSignal {
    fn should_stop(&mut self) -> bool {
        self.signal_received.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use super::Indefinite;
    use super::OsSignal;
    use super::TerminationCondition;

    #[test]
    fn indefinite_never_stops() {
        assert!(!Indefinite.should_stop());
    }

    #[test]
    fn flag_is_observed_on_the_next_check() {
        let flag = Arc::new(AtomicBool::new(false));
        let mut condition = OsSignal::from_flag(Arc::clone(&flag));

        assert!(!condition.should_stop());
        flag.store(true, Ordering::Relaxed);
        assert!(condition.should_stop());
    }
}
