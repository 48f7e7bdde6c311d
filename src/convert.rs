/// Boolean conversion.
///
/// Defines the truthiness rules for every source shape and the
/// [`BoolOptions`] that tune them.
pub mod boolean;
/// Complex conversion.
pub mod complex;
/// Shared plumbing of the conversion functions.
///
/// Dereferencing the source, attaching errors to best-effort values and
/// logging every inexact conversion under one `tracing` target.
pub mod core;
/// Float conversion.
pub mod float;
/// Signed integer conversion.
///
/// Contains [`to_int`] and its typed wrappers. Unsafe conversions wrap the
/// source to the target width.
pub mod int;
/// String conversion.
pub mod string;
/// Unsigned integer conversion.
pub mod uint;

pub use self::{
    boolean::{BoolOptions, to_bool},
    complex::{to_complex, to_complex64, to_complex128},
    float::{to_f32, to_f64, to_float},
    int::{to_i8, to_i16, to_i32, to_i64, to_int, to_isize},
    string::to_string,
    uint::{to_u8, to_u16, to_u32, to_u64, to_uint, to_usize},
};
