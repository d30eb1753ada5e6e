//! The scheduling problem as handed over by the problem loader, and the numbering of its
//! pairing variables.
mod variable_map;

use std::path::Path;
use std::path::PathBuf;

pub use variable_map::PairingVariable;
pub use variable_map::VariableMap;

use crate::basic_types::ConfigurationError;
use crate::basic_types::Lit;

/// The raw problem definition: how many participants have to be paired over how many days,
/// with how many hourly slots per day.
///
/// The last hour of every day is reserved (a meeting started in it could not end on the same
/// day), so only `n_hours - 1` slots are available for starting a meeting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemParameters {
    pub n_participants: u32,
    pub n_days: u32,
    pub n_hours: u32,
    /// The file the problem was read from. Only its base name ends up in artifact names.
    pub source: PathBuf,
}

impl ProblemParameters {
    pub fn new(n_participants: u32, n_days: u32, n_hours: u32, source: impl AsRef<Path>) -> Self {
        ProblemParameters {
            n_participants,
            n_days,
            n_hours,
            source: source.as_ref().to_path_buf(),
        }
    }

    /// Validate the sizes and turn them into [`Dimensions`].
    pub fn dimensions(&self) -> Result<Dimensions, ConfigurationError> {
        Dimensions::new(self.n_participants, self.n_days, self.n_hours)
    }
}

/// Validated problem sizes. Every [`Dimensions`] describes an instance with a positive number
/// of variables that can all be addressed by a [`Lit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    participants: u32,
    days: u32,
    hours: u32,
}

impl Dimensions {
    pub fn new(participants: u32, days: u32, hours: u32) -> Result<Dimensions, ConfigurationError> {
        if participants < 2 {
            return Err(ConfigurationError::TooFewParticipants(participants));
        }
        if days < 1 {
            return Err(ConfigurationError::TooFewDays(days));
        }
        if hours < 3 {
            return Err(ConfigurationError::TooFewHours(hours));
        }

        let variables = u64::from(participants)
            .checked_mul(u64::from(participants))
            .and_then(|count| count.checked_mul(u64::from(days)))
            .and_then(|count| count.checked_mul(u64::from(hours - 1)));

        if variables.map_or(true, |count| count > Lit::MAX as u64) {
            return Err(ConfigurationError::TooLarge);
        }

        Ok(Dimensions {
            participants,
            days,
            hours,
        })
    }

    pub fn participants(&self) -> u32 {
        self.participants
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// The number of slots in which a meeting can start.
    pub fn available_hours(&self) -> u32 {
        self.hours - 1
    }

    /// n² · d · (h − 1)
    pub fn variable_count(&self) -> u64 {
        let n = u64::from(self.participants);
        n * n * u64::from(self.days) * u64::from(self.available_hours())
    }

    /// The ordered pairs `(i, j)` of distinct participants, in lexicographic order.
    pub fn ordered_pairs(&self) -> impl Iterator<Item = (u32, u32)> + Clone {
        let n = self.participants;
        (0..n).flat_map(move |i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
    }
}

#[cfg(test)]
mod tests {
    use super::Dimensions;
    use super::ProblemParameters;
    use crate::basic_types::ConfigurationError;

    #[test]
    fn degenerate_sizes_are_rejected() {
        assert_eq!(
            Dimensions::new(1, 2, 3),
            Err(ConfigurationError::TooFewParticipants(1))
        );
        assert_eq!(
            Dimensions::new(3, 0, 3),
            Err(ConfigurationError::TooFewDays(0))
        );
        assert_eq!(
            Dimensions::new(3, 2, 2),
            Err(ConfigurationError::TooFewHours(2))
        );
    }

    #[test]
    fn oversized_instances_are_rejected() {
        assert_eq!(
            Dimensions::new(50_000, 1, 3),
            Err(ConfigurationError::TooLarge)
        );
    }

    #[test]
    fn one_hour_is_reserved() {
        let dimensions = ProblemParameters::new(4, 2, 3, "league.json")
            .dimensions()
            .expect("valid dimensions");

        assert_eq!(dimensions.available_hours(), 2);
        assert_eq!(dimensions.variable_count(), 64);
    }

    #[test]
    fn ordered_pairs_skip_self_pairings() {
        let dimensions = Dimensions::new(3, 1, 3).unwrap();
        let pairs: Vec<_> = dimensions.ordered_pairs().collect();

        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]);
    }
}
