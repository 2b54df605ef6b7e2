
//! Conversion between numeric literal text and `f64` values.

/// Parses the text of a numeric literal, reading the longest prefix
/// which forms a number and ignoring the rest. Text with no numeric
/// prefix (an empty literal, or an error marker left behind by a
/// failed evaluation) reads as NaN rather than failing.
///
/// The spellings produced by [`format_number`] for the special values
/// (`Infinity`, `-Infinity`, `NaN`) read back as those values, even
/// with more keystrokes appended, as in `Infinity.`.
pub fn parse_number(text: &str) -> f64 {
  text.char_indices()
    .map(|(i, c)| i + c.len_utf8())
    .rev()
    .find_map(|end| text[..end].parse::<f64>().ok())
    .unwrap_or(f64::NAN)
}

/// Formats a computed value for display. Finite values use the
/// shortest decimal text which reads back as the same value, without
/// exponent notation. Negative zero is shown as `0`.
pub fn format_number(value: f64) -> String {
  if value.is_nan() {
    String::from("NaN")
  } else if value == f64::INFINITY {
    String::from("Infinity")
  } else if value == f64::NEG_INFINITY {
    String::from("-Infinity")
  } else if value == 0.0 {
    String::from("0")
  } else {
    value.to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_plain_literals() {
    assert_eq!(parse_number("12"), 12.0);
    assert_eq!(parse_number("0.5"), 0.5);
    assert_eq!(parse_number("3."), 3.0);
  }

  #[test]
  fn test_parse_reads_longest_numeric_prefix() {
    assert_eq!(parse_number("Infinity."), f64::INFINITY);
    assert_eq!(parse_number("-Infinity5"), f64::NEG_INFINITY);
    assert_eq!(parse_number("-4.5x"), -4.5);
    assert!(parse_number("NaN.").is_nan());
  }

  #[test]
  fn test_parse_unreadable_text_is_nan() {
    assert!(parse_number("").is_nan());
    assert!(parse_number("ERROR").is_nan());
  }

  #[test]
  fn test_format_finite_values() {
    assert_eq!(format_number(3.0), "3");
    assert_eq!(format_number(-2.5), "-2.5");
    assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_number(-0.0), "0");
  }

  #[test]
  fn test_format_special_values() {
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(format_number(f64::NAN), "NaN");
  }

  #[test]
  fn test_special_values_read_back() {
    assert_eq!(parse_number(&format_number(f64::INFINITY)), f64::INFINITY);
    assert_eq!(parse_number(&format_number(f64::NEG_INFINITY)), f64::NEG_INFINITY);
    assert!(parse_number(&format_number(f64::NAN)).is_nan());
  }
}
