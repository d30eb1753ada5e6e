use super::ClauseFamily;
use super::ClauseSink;
use crate::model::Dimensions;
use crate::model::VariableMap;

/// Every participant takes part in a meeting in every slot: for each `(i, day, hour)`, one of
/// the pairings `(i, j)` or `(j, i)` with `j != i` holds.
///
/// Together with [`super::IntradayOrdering`] this leaves no model once `h >= 3`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParticipantSlots;

impl ClauseFamily for ParticipantSlots {
    fn name(&self) -> &'static str {
        "participant-slot existence"
    }

    /// n · d · (h − 1)
    fn count(&self, dimensions: &Dimensions) -> u128 {
        let n = u128::from(dimensions.participants());
        let d = u128::from(dimensions.days());
        let h = u128::from(dimensions.hours());

        n * d * (h - 1)
    }

    fn emit(&self, map: &VariableMap, sink: &mut dyn ClauseSink) -> std::io::Result<()> {
        let dimensions = map.dimensions();
        let n = dimensions.participants();

        let mut clause = Vec::with_capacity(2 * (n as usize - 1));

        for participant in 0..n {
            for day in 0..dimensions.days() {
                for hour in 0..dimensions.available_hours() {
                    clause.clear();

                    for partner in (0..n).filter(|&partner| partner != participant) {
                        clause.push(map.lit(participant, partner, day, hour));
                        clause.push(map.lit(partner, participant, day, hour));
                    }

                    sink.add_clause(&clause)?;
                }
            }
        }

        Ok(())
    }
}
