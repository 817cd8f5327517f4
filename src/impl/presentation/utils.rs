use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use regex::Regex;

/// Standard number of decimal places for the given currency
/// (ex. JPY/IDR display = 0 or 2 per ISO 4217 exponent).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format a cash amount with the currency symbol, ISO decimal places,
/// and thousands separators.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    // Group and split on the magnitude; the sign would otherwise get
    // lost for values in (-1, 0) and mangle the fractional digits.
    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();
    let decimal_places = decimal_places(currency);
    if decimal_places == 0 {
        let amount_rounded = (magnitude.round() as i64).to_formatted_string(&Locale::en);
        format!("{} {}{}", currency.symbol(), sign, amount_rounded)
    } else {
        let amount_integer_part = (magnitude.trunc() as i64).to_formatted_string(&Locale::en);
        let amount_fractional_part = format!("{:.decimal_places$}", magnitude.fract())
            .split('.')
            .nth(1)
            .map(|f| f.to_string())
            .unwrap_or_default();
        format!(
            "{} {}{}.{:0decimal_places$}",
            currency.symbol(),
            sign,
            amount_integer_part,
            amount_fractional_part,
        )
    }
}

/// Strip filesystem-hostile characters so the value is safe inside an
/// output filename: runs of reserved characters and whitespace collapse
/// into single underscores.
pub(crate) fn sanitize_filename(name: &str) -> String {
    let reserved =
        Regex::new(r#"[<>:"/\\|?*[:space:][:cntrl:]]+"#).expect("hardcoded regex should be valid");
    reserved
        .replace_all(name.trim(), "_")
        .trim_matches('_')
        .to_string()
}

/// Wrap a free-text value for a fixed-width layout; blank values render
/// as a single dash so the slot never disappears.
pub(crate) fn wrap_value(text: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return vec!["-".to_string()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn formats_idr_with_en_grouping() {
        assert_eq!(format_amount(100_000.0, Currency::IDR), "Rp 100,000.00");
        assert_eq!(format_amount(1_234_567.5, Currency::IDR), "Rp 1,234,567.50");
    }

    #[test]
    fn formats_zero_exponent_currencies_without_decimals() {
        assert_eq!(format_amount(1_000.4, Currency::JPY), "¥ 1,000");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_amount(-100_000.0, Currency::IDR), "Rp -100,000.00");
        assert_eq!(format_amount(-0.5, Currency::IDR), "Rp -0.50");
        assert_eq!(format_amount(-1_000.4, Currency::JPY), "¥ -1,000");
    }

    #[test]
    fn sanitizes_reserved_characters_and_whitespace() {
        assert_eq!(sanitize_filename("Budi Santoso"), "Budi_Santoso");
        assert_eq!(sanitize_filename("  a/b\\c:d  "), "a_b_c_d");
        assert_eq!(sanitize_filename("__"), "");
    }

    #[test]
    fn blank_values_wrap_to_a_dash() {
        assert_eq!(wrap_value("   ", 40), vec!["-"]);
        assert_eq!(wrap_value("short", 40), vec!["short"]);
    }
}
