use super::ClauseFamily;
use super::ClauseSink;
use crate::model::Dimensions;
use crate::model::VariableMap;

/// A participant meets at most once per day.
///
/// For participant `i`, partner `j != i` and counterpart `k`, a meeting of `i` with `j` at
/// `hour` excludes a meeting of `i` with `k` at any other hour of the same day, whichever seat
/// `i` takes in either meeting.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntradayOrdering;

impl ClauseFamily for IntradayOrdering {
    fn name(&self) -> &'static str {
        "intra-day ordering"
    }

    /// 4 · n² · (n − 1) · d · (h − 1) · (h − 2)
    fn count(&self, dimensions: &Dimensions) -> u128 {
        let n = u128::from(dimensions.participants());
        let d = u128::from(dimensions.days());
        let h = u128::from(dimensions.hours());

        4 * n * n * (n - 1) * d * (h - 1) * (h - 2)
    }

    fn emit(&self, map: &VariableMap, sink: &mut dyn ClauseSink) -> std::io::Result<()> {
        let dimensions = map.dimensions();
        let n = dimensions.participants();
        let available_hours = dimensions.available_hours();

        for (i, j) in dimensions.ordered_pairs() {
            for k in 0..n {
                for day in 0..dimensions.days() {
                    for hour in 0..available_hours {
                        let as_first = -map.lit(i, j, day, hour);
                        let as_second = -map.lit(j, i, day, hour);

                        for other_hour in (0..available_hours).filter(|&other| other != hour) {
                            let later_first = -map.lit(i, k, day, other_hour);
                            let later_second = -map.lit(k, i, day, other_hour);

                            sink.add_clause(&[as_first, later_first])?;
                            sink.add_clause(&[as_first, later_second])?;
                            sink.add_clause(&[as_second, later_first])?;
                            sink.add_clause(&[as_second, later_second])?;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::IntradayOrdering;
    use crate::basic_types::Clause;
    use crate::encodings::ClauseFamily;
    use crate::model::Dimensions;
    use crate::model::VariableMap;

    #[test]
    fn all_seat_combinations_are_excluded() {
        let map = VariableMap::new(Dimensions::new(3, 1, 3).unwrap());
        let mut clauses: Vec<Clause> = vec![];
        IntradayOrdering.emit(&map, &mut clauses).unwrap();

        // Participant 0 meets 1 at hour 0, and 2 at hour 1.
        for clause in [
            vec![-map.lit(0, 1, 0, 0), -map.lit(0, 2, 0, 1)],
            vec![-map.lit(0, 1, 0, 0), -map.lit(2, 0, 0, 1)],
            vec![-map.lit(1, 0, 0, 0), -map.lit(0, 2, 0, 1)],
            vec![-map.lit(1, 0, 0, 0), -map.lit(2, 0, 0, 1)],
        ] {
            assert!(clauses.contains(&clause), "missing {clause:?}");
        }
    }

    #[test]
    fn clauses_stay_within_one_day() {
        let map = VariableMap::new(Dimensions::new(2, 3, 4).unwrap());
        let mut clauses: Vec<Clause> = vec![];
        IntradayOrdering.emit(&map, &mut clauses).unwrap();

        for clause in clauses {
            let first = map.decode(clause[0]).unwrap();
            let second = map.decode(clause[1]).unwrap();

            assert_eq!(first.day, second.day);
            assert_ne!(first.hour, second.hour);
        }
    }
}
