/// Complex number support.
///
/// Defines `Complex64` and `Complex128`, the two complex widths the engine
/// converts between, together with their textual form `(re±imi)`.
pub mod complex;
/// The dynamic value model.
///
/// Defines the closed `Value` enum that every conversion starts from, the
/// explicit reference-resolving pass, and imports from primitive Rust values
/// and decoded JSON documents.
pub mod core;
/// Shape classification.
///
/// Maps values onto `NumericShape`s and bit `Width`s and provides the
/// partition predicates (`is_int`, `is_float`, ...) the dispatcher branches on.
pub mod shape;
