use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Formats money the way the price tags read: `42 000 ₽`, `-7 250 ₽`, `12,5 ₽`.
pub fn format_money(amount: Decimal, currency: &str) -> String {
    format!("{} {}", group_thousands(amount), currency)
}

pub fn group_thousands(amount: Decimal) -> String {
    let normalized = amount.round_dp(2).normalize().to_string();
    let (sign, digits) = match normalized.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", normalized.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped},{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `46,2%`: one decimal at most, comma separator like money amounts.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.round_dp(1).normalize().to_string().replace('.', ","))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(group_thousands(Decimal::from(0)), "0");
        assert_eq!(group_thousands(Decimal::from(890)), "890");
        assert_eq!(group_thousands(Decimal::from(1250)), "1 250");
        assert_eq!(group_thousands(Decimal::from(150_000)), "150 000");
        assert_eq!(group_thousands(Decimal::from(1_234_567)), "1 234 567");
    }

    #[test]
    fn keeps_sign_and_fraction() {
        assert_eq!(group_thousands(Decimal::from(-7250)), "-7 250");
        assert_eq!(group_thousands(Decimal::from_str("1250.50").unwrap()), "1 250,5");
    }

    #[test]
    fn money_carries_currency() {
        assert_eq!(format_money(Decimal::from(69_250), "₽"), "69 250 ₽");
    }

    #[test]
    fn percent_uses_comma_separator() {
        assert_eq!(format_percent(Decimal::from_str("138.5").unwrap()), "138,5%");
        assert_eq!(format_percent(Decimal::from_str("46.16666").unwrap()), "46,2%");
        assert_eq!(format_percent(Decimal::from(25)), "25%");
    }

    #[test]
    fn dates_use_day_first() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(format_date(date), "15.01.2025");
    }
}
