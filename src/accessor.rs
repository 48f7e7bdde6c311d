/// The typed accessor.
///
/// Defines [`Accessor`](core::Accessor), its nullability markers, and the
/// default-substitution rules.
pub mod core;
/// At-most-one default values.
pub mod defaults;
/// Accessor element types.
///
/// Implements [`Element`](element::Element) for every supported Rust type and
/// names each accessor flavour with a type alias.
pub mod element;
/// JSON encoding and decoding of accessors through `serde`.
pub mod json;
/// SQL driver boundary.
///
/// Contains the driver scalar type and the [`Valuer`](sql::Valuer) and
/// [`Scanner`](sql::Scanner) traits.
pub mod sql;
