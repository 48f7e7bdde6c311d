/// Numeric safety predicates.
///
/// This module decides, for every pair of numeric shapes, whether a value
/// survives the conversion exactly, and provides the wrapping and rounding
/// helpers that produce the best-effort value when it does not.
///
/// All functions are pure and total: they return a `bool` (or the wrapped
/// value) and never fail.
pub mod num;
