use std::fmt;

use num_complex::Complex64;

use crate::{interpreter::value::core::format_number, util::num::nearly_equal};

/// `Display` adapter printing a complex number the way expressions write it.
///
/// # Example
/// ```
/// use mathexpr::interpreter::value::complex::Displayed;
/// use num_complex::Complex64;
///
/// assert_eq!(Displayed(Complex64::new(0.0, 2.0)).to_string(), "2i");
/// assert_eq!(Displayed(Complex64::new(3.0, -4.0)).to_string(), "3 - 4i");
/// assert_eq!(Displayed(Complex64::new(1.0, 1.0)).to_string(), "1 + i");
/// assert_eq!(Displayed(Complex64::new(5.0, 0.0)).to_string(), "5");
/// ```
pub struct Displayed(pub Complex64);

impl fmt::Display for Displayed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Complex64 { re, im } = self.0;
        match (re, im) {
            (0.0, 0.0) => write!(f, "0"),
            (re, 0.0) => write!(f, "{}", format_number(re)),
            (0.0, im) => write!(f, "{}", imaginary(im)),
            (re, im) if im > 0.0 => write!(f, "{} + {}", format_number(re), imaginary(im)),
            (re, im) => write!(f, "{} - {}", format_number(re), imaginary(-im)),
        }
    }
}

fn imaginary(im: f64) -> String {
    match im {
        1.0 => "i".to_string(),
        -1.0 => "-i".to_string(),
        im => format!("{}i", format_number(im)),
    }
}

/// Compares both components of two complex numbers with [`nearly_equal`].
#[must_use]
pub fn nearly_equal_complex(x: Complex64, y: Complex64, epsilon: f64) -> bool {
    nearly_equal(x.re, y.re, epsilon) && nearly_equal(x.im, y.im, epsilon)
}

/// Builds a complex number with a zero imaginary part.
#[must_use]
pub const fn from_real(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}
