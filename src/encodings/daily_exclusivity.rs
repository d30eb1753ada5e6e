use super::ClauseFamily;
use super::ClauseSink;
use crate::model::Dimensions;
use crate::model::VariableMap;

/// Two different pairings never overlap on the same day.
///
/// A meeting started at `hour` also occupies `hour + 1`, so for every two distinct ordered
/// pairs `(i, j)` and `(k, l)` the second may neither start at the same hour as the first nor
/// one hour later. Iterating over both orders of the two pairs covers the hour before as well.
#[derive(Clone, Copy, Debug, Default)]
pub struct DailyExclusivity;

impl ClauseFamily for DailyExclusivity {
    fn name(&self) -> &'static str {
        "daily cross-pair exclusivity"
    }

    /// n · (n − 1) · d · (n · (n − 1) − 1) · (2h − 3)
    fn count(&self, dimensions: &Dimensions) -> u128 {
        let n = u128::from(dimensions.participants());
        let d = u128::from(dimensions.days());
        let h = u128::from(dimensions.hours());

        n * (n - 1) * d * (n * (n - 1) - 1) * (2 * h - 3)
    }

    fn emit(&self, map: &VariableMap, sink: &mut dyn ClauseSink) -> std::io::Result<()> {
        let dimensions = map.dimensions();
        let available_hours = dimensions.available_hours();

        for (i, j) in dimensions.ordered_pairs() {
            for (k, l) in dimensions.ordered_pairs().filter(|&other| other != (i, j)) {
                for day in 0..dimensions.days() {
                    for hour in 0..available_hours {
                        sink.add_clause(&[-map.lit(i, j, day, hour), -map.lit(k, l, day, hour)])?;
                    }

                    for hour in 0..available_hours - 1 {
                        sink.add_clause(&[
                            -map.lit(i, j, day, hour),
                            -map.lit(k, l, day, hour + 1),
                        ])?;
                    }
                }
            }
        }

        Ok(())
    }
}
