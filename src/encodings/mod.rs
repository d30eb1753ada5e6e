//! The five clause families of the pairing encoding.
//!
//! Every family knows its clause count in closed form and how to emit its clauses. Both the
//! CNF header and the emission driver read the same [`CLAUSE_FAMILIES`] table, so the declared
//! and the written clause counts cannot drift apart.
mod consecutive_days;
mod daily_exclusivity;
mod intraday_ordering;
mod pairing_coverage;
mod participant_slots;

use std::fmt::Display;

use log::debug;
pub use consecutive_days::ConsecutiveDays;
pub use daily_exclusivity::DailyExclusivity;
pub use intraday_ordering::IntradayOrdering;
pub use pairing_coverage::PairingCoverage;
pub use participant_slots::ParticipantSlots;

use crate::basic_types::Clause;
use crate::basic_types::ConfigurationError;
use crate::basic_types::Lit;
use crate::model::Dimensions;
use crate::model::VariableMap;
use crate::planner_assert_eq_simple;

/// The families in emission order.
pub const CLAUSE_FAMILIES: [&dyn ClauseFamily; 5] = [
    &ParticipantSlots,
    &PairingCoverage,
    &DailyExclusivity,
    &IntradayOrdering,
    &ConsecutiveDays,
];

/// Something clauses can be streamed into.
pub trait ClauseSink {
    fn add_clause(&mut self, literals: &[Lit]) -> std::io::Result<()>;
}

impl ClauseSink for Vec<Clause> {
    fn add_clause(&mut self, literals: &[Lit]) -> std::io::Result<()> {
        self.push(literals.to_vec());
        Ok(())
    }
}

/// A named group of clauses whose size is a closed-form function of the [`Dimensions`].
pub trait ClauseFamily {
    fn name(&self) -> &'static str;

    /// The exact number of clauses [`ClauseFamily::emit`] produces for `dimensions`.
    fn count(&self, dimensions: &Dimensions) -> u128;

    /// Stream the clauses of this family into `sink`.
    fn emit(&self, map: &VariableMap, sink: &mut dyn ClauseSink) -> std::io::Result<()>;
}

/// The number of clauses of each family, known before a single clause is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClauseCounts {
    per_family: [u64; 5],
    total: u64,
}

impl ClauseCounts {
    pub fn new(dimensions: &Dimensions) -> Result<ClauseCounts, ConfigurationError> {
        let mut per_family = [0; 5];
        let mut total: u128 = 0;

        for (slot, family) in per_family.iter_mut().zip(CLAUSE_FAMILIES) {
            let count = family.count(dimensions);
            *slot = u64::try_from(count).map_err(|_| ConfigurationError::TooLarge)?;
            total += count;
        }

        let total = u64::try_from(total).map_err(|_| ConfigurationError::TooLarge)?;

        Ok(ClauseCounts { per_family, total })
    }

    /// Validate the raw sizes and count the clauses for them.
    pub fn compute(
        participants: u32,
        days: u32,
        hours: u32,
    ) -> Result<ClauseCounts, ConfigurationError> {
        ClauseCounts::new(&Dimensions::new(participants, days, hours)?)
    }

    pub fn per_family(&self) -> &[u64; 5] {
        &self.per_family
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Display for ClauseCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (family, count) in CLAUSE_FAMILIES.iter().zip(self.per_family) {
            write!(f, "{}={count} ", family.name())?;
        }
        write!(f, "total={}", self.total)
    }
}

/// Emit every family, in table order, into `sink`.
///
/// `counts` must have been computed for the dimensions of `map`; a family that emits a
/// different number of clauses than counted is a bug and aborts.
pub fn emit_all<Sink: ClauseSink + ?Sized>(
    map: &VariableMap,
    counts: &ClauseCounts,
    sink: &mut Sink,
) -> std::io::Result<()> {
    for (family, &expected) in CLAUSE_FAMILIES.iter().zip(counts.per_family()) {
        let mut counted = CountingSink {
            inner: &mut *sink,
            written: 0,
        };
        family.emit(map, &mut counted)?;

        debug!("emitted {} clauses for '{}'", counted.written, family.name());
        planner_assert_eq_simple!(
            counted.written,
            expected,
            "clause family '{}' does not match its closed-form count",
            family.name()
        );
    }

    Ok(())
}

struct CountingSink<'sink, Sink: ?Sized> {
    inner: &'sink mut Sink,
    written: u64,
}

impl<Sink: ClauseSink + ?Sized> ClauseSink for CountingSink<'_, Sink> {
    fn add_clause(&mut self, literals: &[Lit]) -> std::io::Result<()> {
        self.written += 1;
        self.inner.add_clause(literals)
    }
}
