//! Display formatting for table cells.

/// Format a number with a thousands separator (space) and the given number
/// of decimal places.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Money display: fixed 2 decimals. Formatting only; the sums stay f64.
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// ISO 8601 date(-time) to `dd.mm.yyyy`.
pub fn format_date(iso_date: &str) -> String {
    if let Some(date_part) = iso_date.split('T').next() {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                return format!("{}.{}.{}", day, month, year);
            }
        }
    }
    iso_date.to_string() // fallback
}

/// Optional date with the `"-"` placeholder.
pub fn format_date_opt(iso_date: Option<&str>) -> String {
    match iso_date {
        Some(d) if !d.trim().is_empty() => format_date(d),
        _ => "-".to_string(),
    }
}

/// Optional count with the `"-"` placeholder.
pub fn format_count(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-08-26T10:15:00Z"), "26.08.2026");
        assert_eq!(format_date("2026-08-26"), "26.08.2026");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_optional_displays() {
        assert_eq!(format_date_opt(None), "-");
        assert_eq!(format_date_opt(Some("2026-01-02")), "02.01.2026");
        assert_eq!(format_count(None), "-");
        assert_eq!(format_count(Some(7)), "7");
    }
}
