mod errors;

pub use errors::ConfigurationError;
pub use errors::PlannerError;

/// A DIMACS literal: a positive variable id or its negation. Zero is reserved as the clause
/// terminator and never denotes a variable.
pub type Lit = i32;

pub type Clause = Vec<Lit>;
