use exactcast::{
    error::{ErrorKind, LiteralError},
    grammar::{
        format::{FloatFormat, FormatOptions, MAX_PRECISION, format, format_complex, format_float,
                 format_int, format_uint},
        lexer::{Token, tokenize},
        parse::{parse_complex, parse_float, parse_int, parse_uint},
    },
    value::{
        complex::Complex128,
        core::Value,
        shape::Width::{self, W8, W16, W32, W64},
    },
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn assert_int(text: &str, bits: Width, expected: i64) {
    match parse_int(text, bits) {
        Ok(v) => assert_eq!(v, expected, "parsing {text:?}"),
        Err(e) => panic!("{text:?} failed to parse: {e}"),
    }
}

fn assert_syntax(result: Result<impl std::fmt::Debug, LiteralError>, text: &str) {
    match result {
        Err(LiteralError::Syntax { .. }) => {},
        other => panic!("{text:?} should be a syntax error, got {other:?}"),
    }
}

fn assert_range<T: std::fmt::Debug>(result: Result<T, LiteralError>, best_effort: f64) {
    match result {
        Err(e @ LiteralError::Range { .. }) => assert_eq!(e.best_effort(), Some(best_effort)),
        other => panic!("expected a range error, got {other:?}"),
    }
}

fn float(value: f64, format: char, precision: Option<usize>) -> String {
    let format = FloatFormat::try_from(format).unwrap();
    format_float(value, format, precision, W64)
}

#[test]
fn lexer_splits_signs_from_literals() {
    assert_eq!(tokenize("+1_000").unwrap(), vec![(Token::Plus, "+"), (Token::Decimal, "1_000")]);
    assert_eq!(tokenize("0b1010").unwrap(), vec![(Token::Binary, "0b1010")]);
    assert_eq!(tokenize("0O17").unwrap(), vec![(Token::Octal, "0O17")]);
    assert_eq!(tokenize("2.5e-3").unwrap(), vec![(Token::Real, "2.5e-3")]);
    assert_eq!(tokenize("Infinity").unwrap(), vec![(Token::Special, "Infinity")]);
    assert!(tokenize("").unwrap().is_empty());

    assert!(tokenize("1 2").is_err());
    assert!(tokenize("1_").is_err());
    assert!(tokenize("12px").is_err());
}

#[test]
fn integers_in_every_base() {
    assert_int("42", W64, 42);
    assert_int("-42", W64, -42);
    assert_int("+42", W64, 42);
    assert_int("0x2A", W64, 42);
    assert_int("0X2a", W64, 42);
    assert_int("0o52", W64, 42);
    assert_int("052", W64, 42);
    assert_int("0b101010", W64, 42);
    assert_int("0", W8, 0);
    assert_int("-0", W8, 0);
}

#[test]
fn integer_underscores() {
    assert_int("1_000_000", W32, 1_000_000);
    assert_int("0x_FF", W16, 255);
    assert_int("0b_1_0", W8, 2);

    assert_syntax(parse_int("1__0", W64), "1__0");
    assert_syntax(parse_int("_1", W64), "_1");
    assert_syntax(parse_int("1_", W64), "1_");
}

#[test]
fn integer_syntax_errors() {
    for text in ["", "-", "--1", "+-1", "0x", "08", "1.0", "1e3", " 42", "42 ", "abc", "0xG"] {
        assert_syntax(parse_int(text, W64), text);
    }
}

#[test]
fn integer_range_errors() {
    assert_int("127", W8, 127);
    assert_int("-128", W8, -128);
    assert_range(parse_int("128", W8), 127.0);
    assert_range(parse_int("-129", W8), -128.0);
    assert_range(parse_int("0x8000", W16), 32_767.0);

    assert_int("-9223372036854775808", W64, i64::MIN);
    assert_int("9223372036854775807", W64, i64::MAX);
    assert_range(parse_int("9223372036854775808", W64), i64::MAX as f64);
    assert_range(parse_int("-99999999999999999999", W64), i64::MIN as f64);
}

#[test]
fn unsigned_integers() {
    assert_eq!(parse_uint("255", W8).unwrap(), 255);
    assert_eq!(parse_uint("0xffff", W16).unwrap(), 65_535);
    assert_eq!(parse_uint("18446744073709551615", W64).unwrap(), u64::MAX);

    assert_range(parse_uint("256", W8), 255.0);
    assert_range(parse_uint("18446744073709551616", W64), u64::MAX as f64);
    assert_syntax(parse_uint("-1", W64), "-1");
    assert_syntax(parse_uint("+1", W64), "+1");
}

#[test]
fn floats() {
    assert_eq!(parse_float("3.14", W64).unwrap(), 3.14);
    assert_eq!(parse_float(".5", W64).unwrap(), 0.5);
    assert_eq!(parse_float("5.", W64).unwrap(), 5.0);
    assert_eq!(parse_float("1e10", W64).unwrap(), 1e10);
    assert_eq!(parse_float("-2.5E-3", W64).unwrap(), -2.5e-3);
    assert_eq!(parse_float("7", W64).unwrap(), 7.0);
    assert_eq!(parse_float("+7", W32).unwrap(), 7.0);
    assert_eq!(parse_float("0.1", W32).unwrap(), f64::from(0.1f32));

    assert_eq!(parse_float("inf", W64).unwrap(), f64::INFINITY);
    assert_eq!(parse_float("-Infinity", W32).unwrap(), f64::NEG_INFINITY);
    assert!(parse_float("NaN", W64).unwrap().is_nan());
    assert!(parse_float("+nan", W64).unwrap().is_nan());
}

#[test]
fn float_errors() {
    for text in ["", "0x10", "1_000", "1_000.5", "abc", "1.5.5", "1e", "e5", "in"] {
        assert_syntax(parse_float(text, W64), text);
    }

    assert_range(parse_float("1e400", W64), f64::INFINITY);
    assert_range(parse_float("-1e39", W32), f64::NEG_INFINITY);
    assert!(parse_float("1e39", W64).is_ok());
}

#[test]
fn complex_literals() {
    let cases = [("(3+4i)", 3.0, 4.0),
                 ("3+4i", 3.0, 4.0),
                 ("3.5-2.25i", 3.5, -2.25),
                 ("-1-1i", -1.0, -1.0),
                 ("(1.5e+3+2i)", 1500.0, 2.0),
                 ("3+4I", 3.0, 4.0),
                 ("0+0i", 0.0, 0.0)];

    for (text, real, imaginary) in cases {
        let outcome = parse_complex(text, W64);
        assert!(outcome.is_exact(), "{text:?}: {:?}", outcome.error());
        assert_eq!(outcome.value(), Some(&Complex128::new(real, imaginary)), "{text:?}");
    }
}

#[test]
fn complex_literal_rejections() {
    for text in ["3+4j", "3", "4i", "(3+4i))", "3 + 4i", "1e5+2i", "3+4", ""] {
        let outcome = parse_complex(text, W64);
        assert_eq!(outcome.value(), None, "{text:?}");
        assert_eq!(outcome.error().map(|e| e.kind()), Some(ErrorKind::Convert), "{text:?}");
    }
}

#[test]
fn complex_literals_must_span_the_whole_text() {
    for text in ["x3+4i", "3+4ix", "(3+4i) ", " 3+4i", "a(1-1i)"] {
        let outcome = parse_complex(text, W64);
        assert_eq!(outcome.value(), None, "{text:?}");
        assert_eq!(outcome.error().map(|e| e.kind()), Some(ErrorKind::Convert), "{text:?}");
    }
}

#[test]
fn complex_component_out_of_range_keeps_partial_value() {
    let outcome = parse_complex("1.0e+39+1i", W32);

    assert_eq!(outcome.value(), Some(&Complex128::new(f64::INFINITY, 1.0)));
    assert_eq!(outcome.error().map(|e| e.kind()), Some(ErrorKind::UnexpectedValue));

    assert!(parse_complex("1.0e+39+1i", W64).is_exact());
}

#[test]
fn integer_formatting() {
    assert_eq!(format_int(42, 10), "42");
    assert_eq!(format_int(-255, 16), "-ff");
    assert_eq!(format_int(0, 2), "0");
    assert_eq!(format_int(i64::MIN, 16), "-8000000000000000");
    assert_eq!(format_uint(35, 36), "z");
    assert_eq!(format_uint(u64::MAX, 2), "1".repeat(64));
    assert_eq!(format_uint(8, 8), "10");
}

#[test]
fn shortest_floats() {
    assert_eq!(float(42.0, 'g', None), "42");
    assert_eq!(float(3.14, 'g', None), "3.14");
    assert_eq!(float(123_456.0, 'g', None), "123456");
    assert_eq!(float(1_234_567.0, 'g', None), "1.234567e+06");
    assert_eq!(float(1e6, 'g', None), "1e+06");
    assert_eq!(float(0.0001, 'g', None), "0.0001");
    assert_eq!(float(0.00001, 'g', None), "1e-05");
    assert_eq!(float(1e100, 'g', None), "1e+100");
    assert_eq!(float(1e-5, 'G', None), "1E-05");
    assert_eq!(float(0.0, 'g', None), "0");
    assert_eq!(float(-0.0, 'g', None), "-0");
    assert_eq!(float(-1.5, 'g', None), "-1.5");

    assert_eq!(float(100.0, 'e', None), "1e+02");
    assert_eq!(float(1234.5, 'e', None), "1.2345e+03");
    assert_eq!(float(1e6, 'E', None), "1E+06");

    assert_eq!(float(2.5, 'f', None), "2.5");
    assert_eq!(float(1e-7, 'f', None), "0.0000001");
    assert_eq!(float(1e21, 'f', None), "1000000000000000000000");
}

#[test]
fn floats_with_precision() {
    assert_eq!(float(3.14159, 'f', Some(2)), "3.14");
    assert_eq!(float(2.7, 'f', Some(0)), "3");
    assert_eq!(float(1.0, 'f', Some(3)), "1.000");

    assert_eq!(float(1.5, 'e', Some(3)), "1.500e+00");
    assert_eq!(float(0.0, 'e', Some(2)), "0.00e+00");
    assert_eq!(float(123_456.0, 'e', Some(0)), "1e+05");

    assert_eq!(float(123_456.0, 'g', Some(3)), "1.23e+05");
    assert_eq!(float(100.0, 'g', Some(5)), "100");
    assert_eq!(float(0.000_012_345, 'g', Some(2)), "1.2e-05");
    assert_eq!(float(3.14159, 'g', Some(3)), "3.14");
}

#[test]
fn special_floats_ignore_the_format() {
    for format in ['b', 'e', 'E', 'f', 'g', 'G'] {
        assert_eq!(float(f64::NAN, format, None), "NaN");
        assert_eq!(float(f64::INFINITY, format, Some(2)), "+Inf");
        assert_eq!(float(f64::NEG_INFINITY, format, None), "-Inf");
    }
}

#[test]
fn binary_exponent_format() {
    assert_eq!(float(1.0, 'b', None), "4503599627370496p-52");
    assert_eq!(float(-2.0, 'b', None), "-4503599627370496p-51");
    assert_eq!(format_float(1.0, FloatFormat::Binary, None, W32), "8388608p-23");
    assert_eq!(format_float(0.0, FloatFormat::Binary, None, W32), "0p-149");
}

#[test]
fn float32_formatting_uses_the_f32_value() {
    assert_eq!(format_float(0.1, FloatFormat::General, None, W32), "0.1");
    assert_eq!(format_float(f64::from(0.1f32), FloatFormat::General, None, W64),
               "0.10000000149011612");
    assert_eq!(format_float(16_777_217.0, FloatFormat::Fixed, None, W32), "16777216");
}

#[test]
fn complex_formatting() {
    assert_eq!(format_complex(Complex128::new(3.0, 4.0), W64), "(3+4i)");
    assert_eq!(format_complex(Complex128::new(1.5, -2.0), W64), "(1.5-2i)");
    assert_eq!(format_complex(Complex128::new(1e6, 1e-5), W64), "(1e+06+1e-05i)");
    assert_eq!(format_complex(Complex128::new(0.0, f64::INFINITY), W64), "(0+Infi)");
    assert_eq!(format_complex(Complex128::new(0.1, 0.2), W32), "(0.1+0.2i)");
}

#[test]
fn format_dispatches_on_shape() {
    let shortest = FormatOptions::new(10, 'g', -1).unwrap();
    let fixed = FormatOptions::new(10, 'f', 2).unwrap();
    let hex = FormatOptions::new(16, 'g', -1).unwrap();

    assert_eq!(format(&Value::Int64(42), &shortest).as_deref(), Some("42"));
    assert_eq!(format(&Value::Float64(3.14), &fixed).as_deref(), Some("3.14"));
    assert_eq!(format(&Value::Uint8(255), &hex).as_deref(), Some("ff"));
    assert_eq!(format(&Value::Int8(-1), &hex).as_deref(), Some("-1"));
    assert_eq!(format(&Value::Float32(0.25), &fixed).as_deref(), Some("0.25"));
    assert_eq!(format(&Value::Complex128(Complex128::new(1.0, 1.0)), &fixed).as_deref(),
               Some("(1+1i)"));
    assert_eq!(format(&Value::Bool(true), &shortest).as_deref(), Some("true"));
    assert_eq!(format(&Value::from("x"), &shortest), None);
    assert_eq!(format(&Value::Null, &shortest), None);
}

#[test]
fn format_options() {
    assert_eq!(FormatOptions::default(), FormatOptions::new(10, 'g', -1).unwrap());
    assert_eq!(FormatOptions::new(2, 'b', 0).unwrap().precision, Some(0));

    for (base, format) in [(1, 'g'), (37, 'g'), (10, 'x'), (10, 'F')] {
        let err = FormatOptions::new(base, format, -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    let options: FormatOptions =
        serde_json::from_str(r#"{"base": 16, "format": "e", "precision": 4}"#).unwrap();
    assert_eq!(options, FormatOptions::new(16, 'e', 4).unwrap());

    let options: FormatOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, FormatOptions::default());

    assert!(serde_json::from_str::<FormatOptions>(r#"{"format": "q"}"#).is_err());

    let widest = FormatOptions { precision: Some(MAX_PRECISION),
                                 ..FormatOptions::default() };
    assert!(widest.validate().is_ok());

    let too_wide = FormatOptions { precision: Some(MAX_PRECISION + 1),
                                   ..FormatOptions::default() };
    assert_eq!(too_wide.validate().unwrap_err().kind(), ErrorKind::InvalidArgument);
}

proptest! {
    #[test]
    fn shortest_float_text_reads_back(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        for format in [FloatFormat::General, FloatFormat::Exponent, FloatFormat::Fixed] {
            let text = format_float(x, format, None, W64);
            prop_assert_eq!(parse_float(&text, W64).unwrap().to_bits(), x.to_bits(), "{}", text);
        }
    }

    #[test]
    fn shortest_f32_text_reads_back(x in any::<f32>().prop_filter("finite", |x| x.is_finite())) {
        let text = format_float(f64::from(x), FloatFormat::General, None, W32);
        prop_assert_eq!(parse_float(&text, W32).unwrap(), f64::from(x), "{}", text);
    }

    #[test]
    fn integer_text_reads_back(v in any::<i64>(), base in prop::sample::select(vec![2u32, 8, 10, 16])) {
        let text = format_int(v, base);
        let literal = match base {
            2 => format!("0b{}", text.trim_start_matches('-')),
            8 => format!("0o{}", text.trim_start_matches('-')),
            16 => format!("0x{}", text.trim_start_matches('-')),
            _ => text.trim_start_matches('-').to_string(),
        };
        let literal = if v < 0 { format!("-{literal}") } else { literal };
        prop_assert_eq!(parse_int(&literal, W64).unwrap(), v);
    }

    #[test]
    fn parse_int_never_panics(text in "\\PC{0,12}", bits in prop::sample::select(vec![W8, W16, W32, W64])) {
        let _ = parse_int(&text, bits);
        let _ = parse_uint(&text, bits);
        let _ = parse_float(&text, bits);
        let _ = parse_complex(&text, bits);
    }
}
