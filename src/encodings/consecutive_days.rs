use super::ClauseFamily;
use super::ClauseSink;
use crate::model::Dimensions;
use crate::model::VariableMap;

/// A participant does not take the same seat of a pairing on two consecutive days.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsecutiveDays;

impl ClauseFamily for ConsecutiveDays {
    fn name(&self) -> &'static str {
        "cross-day duplication"
    }

    /// 2 · n² · (n − 1) · (d − 1) · (h − 1)²
    fn count(&self, dimensions: &Dimensions) -> u128 {
        let n = u128::from(dimensions.participants());
        let d = u128::from(dimensions.days());
        let h = u128::from(dimensions.hours());

        2 * n * n * (n - 1) * (d - 1) * (h - 1) * (h - 1)
    }

    fn emit(&self, map: &VariableMap, sink: &mut dyn ClauseSink) -> std::io::Result<()> {
        let dimensions = map.dimensions();
        let n = dimensions.participants();
        let available_hours = dimensions.available_hours();

        for (i, j) in dimensions.ordered_pairs() {
            for k in 0..n {
                for day in 1..dimensions.days() {
                    for hour in 0..available_hours {
                        for next_hour in 0..available_hours {
                            sink.add_clause(&[
                                -map.lit(i, j, day - 1, hour),
                                -map.lit(i, k, day, next_hour),
                            ])?;
                            sink.add_clause(&[
                                -map.lit(j, i, day - 1, hour),
                                -map.lit(k, i, day, next_hour),
                            ])?;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
