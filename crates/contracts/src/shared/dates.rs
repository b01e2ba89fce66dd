//! Wire-date parsing. The backend sends dates either bare (`2026-08-26`)
//! or as a full ISO datetime; forms validate against this before submit.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Parse a backend date string, tolerating a trailing time part.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| anyhow!("bad date {value:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_and_datetime_forms() {
        assert_eq!(
            parse_iso_date("2026-08-26").unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
        );
        assert_eq!(
            parse_iso_date("2026-08-26T10:15:00Z").unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_iso_date("").is_err());
        assert!(parse_iso_date("26.08.2026").is_err());
        assert!(parse_iso_date("2026-13-01").is_err());
    }
}
