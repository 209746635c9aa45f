//! Russian-locale number rendering used by the export snapshot and the
//! presentation layer: NBSP thousands grouping, comma decimal separator.

use rust_decimal::{Decimal, RoundingStrategy};

/// Thousands separator (non-breaking space, as rendered by ru-RU locales).
const GROUP_SEPARATOR: char = '\u{a0}';

/// Render a number with the given number of decimal places, grouped
/// thousands and a comma decimal separator.
pub fn format_number(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = rounded.abs().to_string();

    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (plain, String::new()),
    };

    let mut frac = frac_part;
    while (frac.chars().count() as u32) < decimals {
        frac.push('0');
    }

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(*d);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if decimals > 0 {
        out.push(',');
        out.push_str(&frac);
    }
    out
}

/// Money amount with the rouble suffix, two decimal places.
pub fn format_money(value: Decimal) -> String {
    format!("{} руб.", format_number(value, 2))
}

/// Percentage value (15.5 = 15.5%), two decimal places.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_number(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_thousands_with_nbsp() {
        assert_eq!(format_number(dec!(1234567.891), 2), "1\u{a0}234\u{a0}567,89");
    }

    #[test]
    fn pads_to_requested_decimals() {
        assert_eq!(format_number(dec!(10), 2), "10,00");
        assert_eq!(format_number(dec!(10.5), 2), "10,50");
    }

    #[test]
    fn rounds_midpoint_away_from_zero() {
        assert_eq!(format_number(dec!(2.655), 2), "2,66");
        assert_eq!(format_number(dec!(-2.655), 2), "-2,66");
    }

    #[test]
    fn zero_decimals_has_no_separator() {
        assert_eq!(format_number(dec!(999.6), 0), "1\u{a0}000");
    }

    #[test]
    fn money_and_percent_suffixes() {
        assert_eq!(format_money(dec!(2.5)), "2,50 руб.");
        assert_eq!(format_percent(dec!(2.6535)), "2,65%");
    }
}
