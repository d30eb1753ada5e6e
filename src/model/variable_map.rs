use std::fmt::Display;

use super::Dimensions;
use crate::basic_types::Lit;
use crate::planner_assert_extreme;
use crate::planner_assert_simple;

/// "Participant `first` meets participant `second` on `day`, starting at `hour`."
///
/// The pair is ordered: `first` takes the first seat of the meeting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairingVariable {
    pub first: u32,
    pub second: u32,
    pub day: u32,
    pub hour: u32,
}

impl PairingVariable {
    pub fn new(first: u32, second: u32, day: u32, hour: u32) -> Self {
        PairingVariable {
            first,
            second,
            day,
            hour,
        }
    }
}

impl Display for PairingVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "x[{}, {}, day {}, hour {}]",
            self.first, self.second, self.day, self.hour
        )
    }
}

/// Numbers the pairing variables of an instance with the consecutive ids `1..=n²·d·a`.
///
/// The id of `(i, j, day, hour)` is `((i·n + j)·d + day)·a + hour + 1`, so ids only depend on
/// the dimensions and two maps built from equal dimensions always agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariableMap {
    dimensions: Dimensions,
}

impl VariableMap {
    pub fn new(dimensions: Dimensions) -> Self {
        VariableMap { dimensions }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn variable_count(&self) -> u64 {
        self.dimensions.variable_count()
    }

    /// The positive literal of `variable`.
    ///
    /// Every coordinate has to lie within the dimensions of this map.
    pub fn literal(&self, variable: PairingVariable) -> Lit {
        let n = self.dimensions.participants();
        let d = self.dimensions.days();
        let a = self.dimensions.available_hours();

        planner_assert_simple!(
            variable.first < n && variable.second < n && variable.day < d && variable.hour < a,
            "{variable} is outside of the instance"
        );

        let index = ((u64::from(variable.first) * u64::from(n) + u64::from(variable.second))
            * u64::from(d)
            + u64::from(variable.day))
            * u64::from(a)
            + u64::from(variable.hour);

        // The dimensions guarantee that every id fits.
        let literal = (index + 1) as Lit;

        planner_assert_extreme!(self.decode(literal) == Some(variable));

        literal
    }

    /// Shorthand for the positive literal of `x[first, second, day, hour]`.
    pub fn lit(&self, first: u32, second: u32, day: u32, hour: u32) -> Lit {
        self.literal(PairingVariable::new(first, second, day, hour))
    }

    /// The variable behind a literal of either polarity, or `None` if the literal does not
    /// belong to this instance.
    pub fn decode(&self, literal: Lit) -> Option<PairingVariable> {
        let id = u64::from(literal.unsigned_abs());
        if id == 0 || id > self.variable_count() {
            return None;
        }

        let a = u64::from(self.dimensions.available_hours());
        let d = u64::from(self.dimensions.days());
        let n = u64::from(self.dimensions.participants());

        let mut index = id - 1;
        let hour = index % a;
        index /= a;
        let day = index % d;
        index /= d;
        let second = index % n;
        let first = index / n;

        Some(PairingVariable::new(
            first as u32,
            second as u32,
            day as u32,
            hour as u32,
        ))
    }

    /// Every variable of the instance, in id order.
    pub fn variables(&self) -> impl Iterator<Item = PairingVariable> {
        let n = self.dimensions.participants();
        let d = self.dimensions.days();
        let a = self.dimensions.available_hours();

        (0..n).flat_map(move |first| {
            (0..n).flat_map(move |second| {
                (0..d).flat_map(move |day| {
                    (0..a).map(move |hour| PairingVariable::new(first, second, day, hour))
                })
            })
        })
    }
}
