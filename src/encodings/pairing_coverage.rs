use super::ClauseFamily;
use super::ClauseSink;
use crate::model::Dimensions;
use crate::model::VariableMap;

/// Every ordered pair of distinct participants meets at least once during the schedule.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairingCoverage;

impl ClauseFamily for PairingCoverage {
    fn name(&self) -> &'static str {
        "pairing coverage"
    }

    /// n · (n − 1)
    fn count(&self, dimensions: &Dimensions) -> u128 {
        let n = u128::from(dimensions.participants());

        n * (n - 1)
    }

    fn emit(&self, map: &VariableMap, sink: &mut dyn ClauseSink) -> std::io::Result<()> {
        let dimensions = map.dimensions();
        let slots = dimensions.days() as usize * dimensions.available_hours() as usize;

        let mut clause = Vec::with_capacity(slots);

        for (first, second) in dimensions.ordered_pairs() {
            clause.clear();

            for day in 0..dimensions.days() {
                clause.extend(
                    (0..dimensions.available_hours()).map(|hour| map.lit(first, second, day, hour)),
                );
            }

            sink.add_clause(&clause)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PairingCoverage;
    use crate::basic_types::Clause;
    use crate::encodings::ClauseFamily;
    use crate::model::Dimensions;
    use crate::model::VariableMap;

    #[test]
    fn each_clause_spans_the_whole_schedule() {
        let map = VariableMap::new(Dimensions::new(2, 2, 4).unwrap());
        let mut clauses: Vec<Clause> = vec![];
        PairingCoverage.emit(&map, &mut clauses).unwrap();

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].len(), 6);

        let first = map.decode(clauses[1][0]).unwrap();
        assert_eq!((first.first, first.second), (1, 0));
        assert!(clauses[1]
            .iter()
            .map(|&literal| map.decode(literal).unwrap())
            .all(|variable| variable.first == 1 && variable.second == 0));
    }
}
