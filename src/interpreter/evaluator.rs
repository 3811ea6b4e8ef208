/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to two integers with overflow and division
/// checks.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the recursive tree walk and the evaluator's result type.
pub mod core;
