use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Scientific formatting with a signed, zero-padded exponent
    ///
    /// The `{:e}` formatter drops the sign of positive exponents and never
    /// pads them, which makes columns of threshold levels awkward to read.
    ///
    /// ```rust
    /// # use pictools_utils::ValueExt;
    /// assert_eq!((-1.0_f64).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!(0.00125_f64.sci(3, 2), "1.250e-03".to_string());
    /// assert_eq!(2.5e12_f64.sci(2, 3), "2.50e+012".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let raw = f!("{:.precision$e}", self, precision = precision);
        match raw.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                f!("{mantissa}e{sign}{digits:0>exp_pad$}")
            }
            // inf and NaN have no exponent to pad
            None => raw,
        }
    }
}
