//! Response envelope used by every backend endpoint.
//!
//! The API always answers with `{ data, pagination?, error? }`. A set
//! `error` field means the request failed even when the HTTP status is 200,
//! so decoding goes through [`Envelope::into_result`] instead of trusting
//! `data` directly.

use serde::{Deserialize, Serialize};

/// Pagination block returned by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "totalRecords")]
    pub total_records: usize,
}

/// Generic `{ data, pagination, error }` wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope, treating a set `error` field or missing `data`
    /// as a failure.
    pub fn into_result(self) -> Result<(T, Option<Pagination>), String> {
        if let Some(err) = self.error {
            return Err(match err {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            });
        }
        match self.data {
            Some(data) => Ok((data, self.pagination)),
            None => Err("empty response: no data field".to_string()),
        }
    }
}

/// One page of rows as consumed by the list controller.
///
/// `current_page` comes from the backend and is authoritative: the
/// controller displays whatever page the API says it returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<R> {
    pub data: Vec<R>,
    pub total_pages: usize,
    pub total_records: usize,
    pub current_page: usize,
    pub page_size: usize,
}

impl<R> ListPage<R> {
    /// Safe fallback shown after a failed fetch.
    pub fn empty(page_size: usize) -> Self {
        Self {
            data: Vec::new(),
            total_pages: 1,
            total_records: 0,
            current_page: 1,
            page_size,
        }
    }

    /// Build a page from a decoded envelope. When the backend omits the
    /// pagination block (some detail-ish endpoints do) the page collapses
    /// to a single page holding everything it sent.
    pub fn from_envelope(envelope: Envelope<Vec<R>>, requested_size: usize) -> Result<Self, String> {
        let (data, pagination) = envelope.into_result()?;
        Ok(match pagination {
            Some(p) => Self {
                data,
                total_pages: p.total_pages.max(1),
                total_records: p.total_records,
                current_page: p.page.max(1),
                page_size: p.limit.max(1),
            },
            None => {
                let total_records = data.len();
                Self {
                    data,
                    total_pages: 1,
                    total_records,
                    current_page: 1,
                    page_size: requested_size,
                }
            }
        })
    }
}

/// Export endpoints generate the file server-side and answer with a URL
/// to download.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportTicket {
    pub download_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_list_envelope_with_pagination() {
        let json = r#"{
            "data": [{"uuid": "u1"}, {"uuid": "u2"}],
            "pagination": {"page": 2, "limit": 10, "totalPages": 3, "totalRecords": 27}
        }"#;
        let env: Envelope<Vec<serde_json::Value>> = serde_json::from_str(json).unwrap();
        let page = ListPage::from_envelope(env, 10).unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_records, 27);
        assert_eq!(page.data.len(), 2);
    }

    #[test]
    fn missing_pagination_collapses_to_single_page() {
        let json = r#"{"data": [1, 2, 3]}"#;
        let env: Envelope<Vec<i32>> = serde_json::from_str(json).unwrap();
        let page = ListPage::from_envelope(env, 50).unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_records, 3);
        assert_eq!(page.page_size, 50);
    }

    #[test]
    fn error_field_wins_over_data() {
        let json = r#"{"data": [], "error": "route not found"}"#;
        let env: Envelope<Vec<i32>> = serde_json::from_str(json).unwrap();
        assert_eq!(env.into_result().unwrap_err(), "route not found");
    }

    #[test]
    fn empty_fallback_shape() {
        let page = ListPage::<()>::empty(10);
        assert!(page.data.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_size, 10);
    }
}
