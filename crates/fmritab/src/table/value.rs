//! Cell values and numeric helpers.

/// A single cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Not available: an absent or unparseable cell.
    #[default]
    Missing,
    /// A floating-point number.
    Number(f64),
    /// Text kept exactly as read.
    Text(String),
}

impl Value {
    /// Build a number, mapping NaN to [`Value::Missing`].
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Value::Missing
        } else {
            Value::Number(value)
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric view of the cell. Only `Number` yields a value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Apply `f` to a number; `Missing` and `Text` become `Missing`.
    pub fn map_number(&self, f: impl FnOnce(f64) -> f64) -> Value {
        match self.as_f64() {
            Some(v) => Value::number(f(v)),
            None => Value::Missing,
        }
    }

    /// Render the cell for a delimited file, using `na_rep` for missing values.
    pub fn render<'a>(&'a self, na_rep: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            Value::Missing => na_rep.into(),
            Value::Number(v) => match format_float(*v) {
                Some(s) => s.into(),
                None => na_rep.into(),
            },
            Value::Text(s) => s.as_str().into(),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Option<f64>> for Value {
    fn from(value: Option<f64>) -> Self {
        value.map(Value::number).unwrap_or(Value::Missing)
    }
}

/// Magnitude from which every `f64` is already an integer.
const INTEGRAL_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round to `decimals` places, ties to even on the scaled value.
///
/// Scaling happens in binary floating point, so `2.00005` (stored slightly
/// below the tie but scaled to exactly `20000.5`) rounds to `2.0`. Values
/// the scale cannot represent are returned unchanged.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let Ok(exponent) = i32::try_from(decimals) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() || scaled.abs() >= INTEGRAL_LIMIT {
        return value;
    }
    scaled.round_ties_even() / factor
}

/// Format a float the way pandas writes float64 columns: shortest
/// round-trip digits, always with a fractional part, exponent form below
/// `1e-4` and from `1e16`, `inf`/`-inf` for infinities. NaN has no textual
/// form and returns `None`.
pub fn format_float(value: f64) -> Option<String> {
    if value.is_nan() {
        return None;
    }
    if value.is_infinite() {
        return Some(if value > 0.0 { "inf" } else { "-inf" }.to_string());
    }

    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        return Some(exponent_form(value));
    }

    let mut s = value.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    Some(s)
}

/// `1e200` as `1e+200`, `1e-5` as `1e-05`.
fn exponent_form(value: f64) -> String {
    let s = format!("{:e}", value);
    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_even_ties() {
        assert_eq!(round_half_even(2.5, 0), 2.0);
        assert_eq!(round_half_even(3.5, 0), 4.0);
        assert_eq!(round_half_even(-2.5, 0), -2.0);
        assert_eq!(round_half_even(2.00005, 4), 2.0);
        assert_eq!(round_half_even(1.00025, 4), 1.0002);
    }

    #[test]
    fn test_round_half_even_non_ties() {
        assert_eq!(round_half_even(1.23456, 4), 1.2346);
        assert_eq!(round_half_even(0.00015, 4), 0.0001);
        assert_eq!(round_half_even(16.0, 4), 16.0);
    }

    #[test]
    fn test_round_with_unrepresentable_scale_keeps_value() {
        assert_eq!(round_half_even(1.5, 3_000_000_000), 1.5);
        assert_eq!(round_half_even(1.5, 400), 1.5);
        assert_eq!(round_half_even(1e200, 4), 1e200);
    }

    #[test]
    fn test_round_passes_non_finite_through() {
        assert!(round_half_even(f64::NAN, 4).is_nan());
        assert_eq!(round_half_even(f64::INFINITY, 4), f64::INFINITY);
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.0).as_deref(), Some("1.0"));
        assert_eq!(format_float(16.0).as_deref(), Some("16.0"));
        assert_eq!(format_float(0.0001).as_deref(), Some("0.0001"));
        assert_eq!(format_float(-0.0).as_deref(), Some("-0.0"));
        assert_eq!(format_float(1.2346).as_deref(), Some("1.2346"));
        assert_eq!(format_float(123456789012345.0).as_deref(), Some("123456789012345.0"));
        assert_eq!(format_float(f64::NAN), None);
    }

    #[test]
    fn test_format_float_exponent_and_infinity() {
        assert_eq!(format_float(1e200).as_deref(), Some("1e+200"));
        assert_eq!(format_float(-1.5e16).as_deref(), Some("-1.5e+16"));
        assert_eq!(format_float(1e-5).as_deref(), Some("1e-05"));
        assert_eq!(format_float(f64::INFINITY).as_deref(), Some("inf"));
        assert_eq!(format_float(f64::NEG_INFINITY).as_deref(), Some("-inf"));
    }

    #[test]
    fn test_number_normalises_nan() {
        assert_eq!(Value::number(f64::NAN), Value::Missing);
        assert_eq!(Value::from(None::<f64>), Value::Missing);
        assert_eq!(Value::Missing.map_number(|v| v * v), Value::Missing);
        assert_eq!(Value::Number(3.0).map_number(|v| v * v), Value::Number(9.0));
    }

    #[test]
    fn test_render() {
        assert_eq!(Value::Missing.render("n/a"), "n/a");
        assert_eq!(Value::Number(2.0).render("n/a"), "2.0");
        assert_eq!(Value::Number(f64::INFINITY).render(""), "inf");
        assert_eq!(Value::Number(f64::NAN).render("n/a"), "n/a");
        assert_eq!(Value::Text("1.50".into()).render("n/a"), "1.50");
    }
}
