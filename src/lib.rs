//! # exactcast
//!
//! exactcast converts dynamically typed scalars into every Rust numeric type
//! and tells you whether the conversion was exact. Unsafe conversions still
//! hand back a best-effort value (wrapped, truncated or rounded) next to the
//! error, so callers decide what "close enough" means.
//!
//! ```
//! use exactcast::{
//!     accessor::element::NullFloat32,
//!     convert::to_i8,
//!     value::core::Value,
//! };
//!
//! assert!(to_i8(&Value::Int64(100)).is_exact());
//! assert_eq!(to_i8(&Value::Int64(200)).value(), Some(&-56));
//!
//! let price = NullFloat32::from_value(&Value::from("0.1"));
//! assert!(price.valid());
//! assert_eq!(price.to_json().unwrap(), "0.1");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Typed accessors over conversion results.
///
/// An accessor pairs a typed value with the error of the conversion that
/// produced it, applies default values, and carries that state across the
/// JSON and SQL driver boundaries.
///
/// # Responsibilities
/// - Defines the generic accessor and its nullable and non-nullable flavours.
/// - Enforces the at-most-one default rule.
/// - Encodes and decodes accessors as JSON and as SQL driver scalars.
pub mod accessor;
/// Conversion dispatcher.
///
/// Routes a source value to the conversion rule for its shape and the
/// requested target, checks exactness with the predicates from
/// [`util::num`], and reports inexact results with a best-effort value.
///
/// # Responsibilities
/// - Converts any value to integers, floats, complex numbers, booleans and
///   strings.
/// - Provides typed wrappers for every Rust numeric type.
/// - Logs inexact conversions through `tracing`.
pub mod convert;
/// Provides the error types of the crate.
///
/// Conversion errors carry a coarse [`ErrorKind`](error::ErrorKind) so callers
/// can branch on the category without matching messages.
pub mod error;
/// Numeric text grammar.
///
/// Lexes, parses and formats integer, float and complex literals.
///
/// # Responsibilities
/// - Accepts prefixed, underscored and legacy octal integer literals.
/// - Accepts decimal, scientific and special float literals.
/// - Formats numbers in any base and in every float format.
pub mod grammar;
/// The carrier type of every conversion result.
pub mod outcome;
/// Safe numeric conversion predicates.
///
/// This module decides whether a value survives a conversion between two
/// numeric shapes without loss, and computes the best-effort value when it
/// does not.
pub mod util;
/// Dynamic values and their classification.
///
/// Defines the [`Value`](value::core::Value) enum handed to the dispatcher,
/// the [`NumericShape`](value::shape::NumericShape) taxonomy, and the complex
/// number types.
pub mod value;
