use exactcast::{
    util::num::{
        int_max, int_min, is_safe_complex, is_safe_complex_to_float, is_safe_complex_to_int,
        is_safe_complex_to_uint, is_safe_float, is_safe_float_to_int, is_safe_float_to_uint,
        is_safe_int, is_safe_int_to_float, is_safe_int_to_uint, is_safe_uint,
        is_safe_uint_to_float, is_safe_uint_to_int, uint_max, wrap_int, wrap_uint,
        MAX_SAFE_F32_INT, MAX_SAFE_F64_INT,
    },
    value::{
        complex::Complex128,
        shape::{Width, WIDTHS},
    },
};
use proptest::prelude::*;

fn width() -> impl Strategy<Value = Width> {
    prop::sample::select(WIDTHS.to_vec())
}

#[test]
fn signed_bounds_for_every_width() {
    for bits in WIDTHS {
        assert!(is_safe_int(int_max(bits), bits), "max of int{bits}");
        assert!(is_safe_int(int_min(bits), bits), "min of int{bits}");

        if bits != Width::W64 {
            assert!(!is_safe_int(int_max(bits) + 1, bits), "max + 1 of int{bits}");
            assert!(!is_safe_int(int_min(bits) - 1, bits), "min - 1 of int{bits}");
        }
    }

    assert_eq!(int_max(Width::W8), 127);
    assert_eq!(int_min(Width::W16), -32_768);
    assert_eq!(int_max(Width::W64), i64::MAX);
}

#[test]
fn unsigned_bounds_for_every_width() {
    for bits in WIDTHS {
        assert!(is_safe_uint(uint_max(bits), bits), "max of uint{bits}");
        if bits != Width::W64 {
            assert!(!is_safe_uint(uint_max(bits) + 1, bits), "max + 1 of uint{bits}");
        }
    }

    assert_eq!(uint_max(Width::W32), 4_294_967_295);
}

#[test]
fn signed_and_unsigned_cross() {
    assert!(is_safe_int_to_uint(0, Width::W8));
    assert!(is_safe_int_to_uint(255, Width::W8));
    assert!(!is_safe_int_to_uint(256, Width::W8));
    assert!(!is_safe_int_to_uint(-1, Width::W64));

    assert!(is_safe_uint_to_int(32_767, Width::W16));
    assert!(!is_safe_uint_to_int(32_768, Width::W16));
    assert!(is_safe_uint_to_int(i64::MAX as u64, Width::W64));
    assert!(!is_safe_uint_to_int(i64::MAX as u64 + 1, Width::W64));
}

#[test]
fn float_narrowing() {
    assert!(is_safe_float(0.0, Width::W32));
    assert!(is_safe_float(-0.0, Width::W32));
    assert!(is_safe_float(1.5, Width::W32));
    assert!(is_safe_float(f64::from(f32::MAX), Width::W32));
    assert!(!is_safe_float(f64::MAX, Width::W32));
    assert!(!is_safe_float(1e-50, Width::W32));
    assert!(is_safe_float(f64::MAX, Width::W64));

    assert!(is_safe_float(f64::NAN, Width::W32));
    assert!(is_safe_float(f64::INFINITY, Width::W32));
    assert!(is_safe_float(f64::NEG_INFINITY, Width::W32));
}

#[test]
fn integers_into_float_mantissas() {
    assert_eq!(MAX_SAFE_F32_INT, (1 << 24) - 1);
    assert_eq!(MAX_SAFE_F64_INT, (1 << 53) - 1);

    assert!(is_safe_uint_to_float(MAX_SAFE_F32_INT, Width::W32));
    assert!(!is_safe_uint_to_float(MAX_SAFE_F32_INT + 2, Width::W32));
    assert!(is_safe_uint_to_float(MAX_SAFE_F64_INT, Width::W64));
    assert!(!is_safe_uint_to_float(MAX_SAFE_F64_INT + 2, Width::W64));

    assert!(is_safe_int_to_float(-(MAX_SAFE_F32_INT as i64), Width::W32));
    assert!(!is_safe_int_to_float(i64::MAX, Width::W64));
    assert!(is_safe_int_to_float(0, Width::W32));
}

#[test]
fn floats_into_integers() {
    assert!(is_safe_float_to_int(3.0, Width::W64, Width::W64));
    assert!(!is_safe_float_to_int(3.5, Width::W64, Width::W64));
    assert!(is_safe_float_to_int(-128.0, Width::W64, Width::W8));
    assert!(!is_safe_float_to_int(-129.0, Width::W64, Width::W8));
    assert!(!is_safe_float_to_int(f64::NAN, Width::W64, Width::W64));
    assert!(!is_safe_float_to_int(f64::NEG_INFINITY, Width::W64, Width::W64));

    // f32 stops representing every integer at 2^24.
    assert!(is_safe_float_to_int(16_777_215.0, Width::W32, Width::W64));
    assert!(!is_safe_float_to_int(16_777_216.0, Width::W32, Width::W64));
    assert!(is_safe_float_to_int(16_777_216.0, Width::W64, Width::W64));

    assert!(is_safe_float_to_uint(255.0, Width::W64, Width::W8));
    assert!(!is_safe_float_to_uint(256.0, Width::W64, Width::W8));
    assert!(!is_safe_float_to_uint(-1.0, Width::W64, Width::W64));
    assert!(!is_safe_float_to_uint(0.5, Width::W64, Width::W64));
}

#[test]
fn complex_predicates() {
    let real = Complex128::new(5.0, 0.0);
    let tilted = Complex128::new(5.0, 0.0001);
    let nan_imaginary = Complex128::new(5.0, f64::NAN);

    assert!(is_safe_complex_to_float(real, Width::W64));
    assert!(!is_safe_complex_to_float(tilted, Width::W64));
    assert!(!is_safe_complex_to_float(nan_imaginary, Width::W64));

    assert!(is_safe_complex_to_int(real, Width::W64, Width::W8));
    assert!(!is_safe_complex_to_int(tilted, Width::W64, Width::W8));
    assert!(is_safe_complex_to_uint(real, Width::W64, Width::W8));
    assert!(!is_safe_complex_to_uint(Complex128::new(-5.0, 0.0), Width::W64, Width::W8));

    assert!(is_safe_complex(Complex128::new(0.5, f64::INFINITY), Width::W32));
    assert!(!is_safe_complex(Complex128::new(0.1, 0.5), Width::W32));
}

#[test]
fn wrapping_helpers() {
    assert_eq!(wrap_int(200, Width::W8), -56);
    assert_eq!(wrap_int(-129, Width::W8), 127);
    assert_eq!(wrap_int(70_000, Width::W16), 4_464);
    assert_eq!(wrap_uint(u64::MAX, Width::W16), 65_535);
    assert_eq!(wrap_uint(256, Width::W8), 0);
}

proptest! {
    #[test]
    fn every_f32_survives_narrowing(x in any::<f32>()) {
        prop_assert!(is_safe_float(f64::from(x), Width::W32));
    }

    #[test]
    fn safe_int_means_wrapping_is_identity(v in any::<i64>(), bits in width()) {
        prop_assert_eq!(is_safe_int(v, bits), wrap_int(v, bits) == v);
    }

    #[test]
    fn safe_uint_means_truncation_is_identity(v in any::<u64>(), bits in width()) {
        prop_assert_eq!(is_safe_uint(v, bits), wrap_uint(v, bits) == v);
    }

    #[test]
    fn safe_int_to_float_round_trips(v in -(1i64 << 53)..(1i64 << 53)) {
        if is_safe_int_to_float(v, Width::W64) {
            prop_assert_eq!(v as f64 as i64, v);
        }
    }

    #[test]
    fn safe_float_to_int_round_trips(v in -1e6f64..1e6f64) {
        if is_safe_float_to_int(v, Width::W64, Width::W32) {
            prop_assert_eq!(v as i64 as f64, v);
        }
        prop_assert!(is_safe_float_to_int(v.trunc(), Width::W64, Width::W32));
    }
}
