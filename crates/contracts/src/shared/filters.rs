//! Structured filter payload submitted by the filter panels.
//!
//! Filters are flat `field -> scalar` pairs. Only non-empty values are
//! forwarded to the backend; multi-select id lists travel as comma-joined
//! strings (backend convention).

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterPayload(BTreeMap<String, String>);

impl FilterPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Set a value only when present; `None` is the same as never setting it.
    pub fn set_opt(self, key: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    /// Multi-select ids travel as a single comma-joined parameter.
    pub fn set_ids(self, key: &str, ids: &[String]) -> Self {
        if ids.is_empty() {
            self
        } else {
            self.set(key, ids.join(","))
        }
    }

    /// Drop entries whose value is empty after trimming. This is what goes
    /// on the wire: a blank input is the same as "no filter on this field".
    pub fn compact(&self) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(_, v)| !v.trim().is_empty())
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.compact().0.is_empty()
    }

    /// Number of effective (non-blank) filters, for the panel badge.
    pub fn active_count(&self) -> usize {
        self.compact().0.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    /// Render as a query-string fragment (`a=1&b=2`), percent-encoding
    /// values. Only compacted entries are emitted.
    pub fn to_query(&self) -> String {
        self.compact()
            .0
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_drops_blank_values() {
        let payload = FilterPayload::new()
            .set("region_id", "5")
            .set("note", "")
            .set("status", "   ");
        let compacted = payload.compact();
        assert_eq!(compacted.get("region_id"), Some("5"));
        assert_eq!(compacted.get("note"), None);
        assert_eq!(compacted.get("status"), None);
        assert_eq!(payload.active_count(), 1);
    }

    #[test]
    fn ids_are_comma_joined() {
        let payload =
            FilterPayload::new().set_ids("warehouse_ids", &["a".into(), "b".into(), "c".into()]);
        assert_eq!(payload.get("warehouse_ids"), Some("a,b,c"));

        let untouched = FilterPayload::new().set_ids("warehouse_ids", &[]);
        assert!(untouched.is_empty());
    }

    #[test]
    fn query_string_is_sorted_and_encoded() {
        let payload = FilterPayload::new()
            .set("date_to", "2026-08-31")
            .set("date_from", "2026-08-01")
            .set("q", "main depot");
        assert_eq!(
            payload.to_query(),
            "date_from=2026-08-01&date_to=2026-08-31&q=main%20depot"
        );
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let payload = FilterPayload::new().set("warehouse_ids", "a,b&c=d");
        assert_eq!(payload.to_query(), "warehouse_ids=a%2Cb%26c%3Dd");
    }

    #[test]
    fn set_opt_skips_none() {
        let payload = FilterPayload::new()
            .set_opt("salesman_id", Some("s1"))
            .set_opt("route_id", None::<String>);
        assert_eq!(payload.get("salesman_id"), Some("s1"));
        assert_eq!(payload.get("route_id"), None);
    }
}
