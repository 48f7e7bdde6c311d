use std::{
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{
    error::ConvertError,
    grammar::{format::format_complex, parse::parse_complex},
    value::shape::Width,
};

/// Generates a complex number type over one float component type.
///
/// Both generated types share:
/// - `new`, `is_real`, the `ZERO` constant and `From` the component type,
/// - `Display` as `(re±imi)` and `FromStr` through the complex grammar,
/// - total equality, hashing and ordering through `OrderedFloat`,
/// - serde support as the displayed string.
macro_rules! complex_number {
    ($(#[$meta:meta])* $name:ident, $float:ty, $width:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name {
            /// The real part of the number.
            pub real:      $float,
            /// The imaginary part of the number.
            pub imaginary: $float,
        }

        impl $name {
            /// `0+0i`.
            pub const ZERO: Self = Self::new(0.0, 0.0);

            /// Constructs a new complex number from real and imaginary
            /// components.
            #[must_use]
            pub const fn new(real: $float, imaginary: $float) -> Self {
                Self { real, imaginary }
            }

            /// Returns `true` if the imaginary part is exactly zero.
            ///
            /// A NaN imaginary part is never zero.
            #[must_use]
            pub fn is_real(&self) -> bool {
                self.imaginary == 0.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", format_complex(Complex128::from(*self), $width))
            }
        }

        impl FromStr for $name {
            type Err = ConvertError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_complex(s, $width).into_result().map(Self::from)
            }
        }

        impl From<$float> for $name {
            fn from(value: $float) -> Self {
                Self { real:      value,
                       imaginary: 0.0, }
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                OrderedFloat(self.real) == OrderedFloat(other.real)
                && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                OrderedFloat(self.real).hash(state);
                OrderedFloat(self.imaginary).hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                let real_cmp = OrderedFloat(self.real).cmp(&OrderedFloat(other.real));
                if real_cmp == Ordering::Equal {
                    OrderedFloat(self.imaginary).cmp(&OrderedFloat(other.imaginary))
                } else {
                    real_cmp
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(de::Error::custom)
            }
        }
    };
}

complex_number! {
    /// A complex number with `f32` components (`complex64`).
    ///
    /// # Example
    /// ```
    /// use exactcast::value::complex::Complex64;
    ///
    /// let c: Complex64 = "(1.5-2i)".parse().unwrap();
    /// assert_eq!(c, Complex64::new(1.5, -2.0));
    /// assert_eq!(c.to_string(), "(1.5-2i)");
    /// ```
    Complex64, f32, Width::W32
}

complex_number! {
    /// A complex number with `f64` components (`complex128`).
    ///
    /// # Example
    /// ```
    /// use exactcast::value::complex::Complex128;
    ///
    /// let c = Complex128::new(3.0, 4.0);
    /// assert_eq!(c.to_string(), "(3+4i)");
    /// assert!(!c.is_real());
    /// assert!(Complex128::from(5.0).is_real());
    /// ```
    Complex128, f64, Width::W64
}

impl From<Complex64> for Complex128 {
    fn from(c: Complex64) -> Self {
        Self { real:      f64::from(c.real),
               imaginary: f64::from(c.imaginary), }
    }
}

impl Complex128 {
    /// Rounds both components to `f32`.
    ///
    /// This is lossy; use
    /// [`is_safe_complex`](crate::util::num::is_safe_complex) first to know
    /// whether it is exact.
    ///
    /// # Example
    /// ```
    /// use exactcast::value::complex::{Complex128, Complex64};
    ///
    /// assert_eq!(Complex128::new(0.5, -2.0).narrow(), Complex64::new(0.5, -2.0));
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn narrow(self) -> Complex64 {
        Complex64 { real:      self.real as f32,
                    imaginary: self.imaginary as f32, }
    }
}

impl From<Complex128> for Complex64 {
    fn from(c: Complex128) -> Self {
        c.narrow()
    }
}
