// Formatting helpers shared by the view-model and the GUI.

// Brazilian Real / pt-BR display rules: "R$ 1.234,56" and "dd/mm/yyyy".
pub mod brazilian_format {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    use crate::error::FormatError;

    pub const CURRENCY_CODE: &str = "BRL";
    pub const CURRENCY_SYMBOL: &str = "R$";
    pub const THOUSANDS_SEPARATOR: char = '.';
    pub const DECIMAL_SEPARATOR: char = ',';
    pub const DATE_FORMAT: &str = "%d/%m/%Y";

    // Offsets RFC 3339 does not allow: "+0300" and hour-only "+03".
    const OFFSET_DATETIME_FORMATS: [&str; 2] = [
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%dT%H:%M:%S%.f%#z",
    ];

    // Timestamps without an offset, most specific first.
    const NAIVE_DATETIME_FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];

    // Formats a value as "R$ 1.234,56", negatives as "-R$ 1.234,56".
    // Rounds half away from zero to the nearest centavo. The sign comes from
    // the unrounded value, so -0.004 renders "-R$ 0,00" while 0.0 and -0.0
    // render "R$ 0,00".
    pub fn format_currency(value: f64) -> Result<String, FormatError> {
        if !value.is_finite() {
            return Err(FormatError::NonFiniteAmount);
        }

        // Whole centavos as decimal digits; no integer cast, so large amounts keep every digit.
        let cents = format!("{:03.0}", (value.abs() * 100.0).round());
        let (reais, centavos) = cents.split_at(cents.len() - 2);
        let body = format!("{}{}{}", group_thousands(reais), DECIMAL_SEPARATOR, centavos);

        if value < 0.0 {
            Ok(format!("-{} {}", CURRENCY_SYMBOL, body))
        } else {
            Ok(format!("{} {}", CURRENCY_SYMBOL, body))
        }
    }

    // Inserts a space after the first minus sign: "-R$ 10,00" -> "- R$ 10,00".
    // Strings without a minus are returned unchanged.
    pub fn space_after_minus(formatted: &str) -> String {
        formatted.replacen('-', "- ", 1)
    }

    // Currency string for a transaction row: sign applied before formatting,
    // then the minus spacing normalized.
    pub fn format_signed_currency(value: f64, sign: f64) -> Result<String, FormatError> {
        format_currency(value * sign).map(|s| space_after_minus(&s))
    }

    // Accepts RFC 3339 ("2020-05-10T12:00:00Z"), offset-less date-times and
    // bare dates. The calendar date is taken as written in the timestamp.
    pub fn parse_timestamp(s: &str) -> Result<NaiveDate, FormatError> {
        let trimmed = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt.date_naive());
        }

        for fmt in OFFSET_DATETIME_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(trimmed, fmt) {
                return Ok(dt.date_naive());
            }
        }

        for fmt in NAIVE_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return Ok(dt.date());
            }
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|_| FormatError::InvalidDate(s.to_string()))
    }

    pub fn format_date(s: &str) -> Result<String, FormatError> {
        parse_timestamp(s).map(|date| date.format(DATE_FORMAT).to_string())
    }

    fn group_thousands(digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(THOUSANDS_SEPARATOR);
            }
            grouped.push(ch);
        }
        grouped
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_currency_simple() {
            assert_eq!(format_currency(10.0).unwrap(), "R$ 10,00");
            assert_eq!(format_currency(0.5).unwrap(), "R$ 0,50");
        }

        #[test]
        fn test_format_currency_with_thousands() {
            assert_eq!(format_currency(1234.56).unwrap(), "R$ 1.234,56");
            assert_eq!(format_currency(600822115.84).unwrap(), "R$ 600.822.115,84");
            assert_eq!(format_currency(100000.0).unwrap(), "R$ 100.000,00");
        }

        #[test]
        fn test_format_currency_negative() {
            assert_eq!(format_currency(-1234.5).unwrap(), "-R$ 1.234,50");
        }

        #[test]
        fn test_format_currency_rounds_to_cents() {
            assert_eq!(format_currency(2.346).unwrap(), "R$ 2,35");
            assert_eq!(format_currency(0.125).unwrap(), "R$ 0,13");
            assert_eq!(format_currency(-0.001).unwrap(), "-R$ 0,00");
        }

        #[test]
        fn test_format_currency_zero_has_no_sign() {
            assert_eq!(format_currency(0.0).unwrap(), "R$ 0,00");
            assert_eq!(format_currency(-0.0).unwrap(), "R$ 0,00");
        }

        #[test]
        fn test_format_currency_large_amounts_keep_all_digits() {
            assert_eq!(format_currency(1e20).unwrap(), "R$ 100.000.000.000.000.000.000,00");
            assert_eq!(format_currency(-1e20).unwrap(), "-R$ 100.000.000.000.000.000.000,00");
        }

        #[test]
        fn test_format_currency_rejects_nan() {
            assert_eq!(format_currency(f64::NAN), Err(FormatError::NonFiniteAmount));
            assert!(format_currency(f64::INFINITY).is_err());
        }

        #[test]
        fn test_space_after_minus() {
            assert_eq!(space_after_minus("-R$ 10,00"), "- R$ 10,00");
            assert_eq!(space_after_minus("R$ 10,00"), "R$ 10,00");
            // Only the first minus is touched.
            assert_eq!(space_after_minus("-a-b"), "- a-b");
        }

        #[test]
        fn test_format_signed_currency() {
            assert_eq!(format_signed_currency(10.0, -1.0).unwrap(), "- R$ 10,00");
            assert_eq!(format_signed_currency(10.0, 1.0).unwrap(), "R$ 10,00");
            assert_eq!(format_signed_currency(0.0, -1.0).unwrap(), "R$ 0,00");
            assert_eq!(format_signed_currency(0.004, -1.0).unwrap(), "- R$ 0,00");
        }

        #[test]
        fn test_format_date_rfc3339() {
            assert_eq!(format_date("2020-05-10T12:00:00Z").unwrap(), "10/05/2020");
            assert_eq!(format_date("2020-05-10T23:30:00.000-03:00").unwrap(), "10/05/2020");
        }

        #[test]
        fn test_format_date_compact_offsets() {
            assert_eq!(format_date("2020-05-10T23:30:00+0300").unwrap(), "10/05/2020");
            assert_eq!(format_date("2020-05-10T01:00:00.250-03").unwrap(), "10/05/2020");
        }

        #[test]
        fn test_format_date_naive_forms() {
            assert_eq!(format_date("2021-01-02T08:15:00").unwrap(), "02/01/2021");
            assert_eq!(format_date("2021-01-02 08:15:00.123").unwrap(), "02/01/2021");
            assert_eq!(format_date("2021-01-02").unwrap(), "02/01/2021");
        }

        #[test]
        fn test_format_date_invalid() {
            assert_eq!(
                format_date("not a date"),
                Err(FormatError::InvalidDate("not a date".to_string()))
            );
            assert!(format_date("2020-13-40T00:00:00Z").is_err());
        }
    }
}
