//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// A resolved page/limit pair. Both values are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request, raising zero values to 1.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Resolve raw `page`/`limit` query values.
    ///
    /// A value that is absent or not a positive integer falls back to
    /// page 1 and `default_limit`. A limit above `max_limit` is clamped.
    pub fn from_raw(
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: u64,
        max_limit: u64,
    ) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let limit = parse_positive(limit)
            .unwrap_or(default_limit)
            .min(max_limit.max(1));
        Self::new(page, limit)
    }

    /// Number of records to skip before this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of matching items across all pages.
    pub total: u64,
    /// Total number of pages, `ceil(total / limit)`.
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// Assemble the envelope for one page of a result set.
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total_pages(total, request.limit),
        }
    }
}

/// `ceil(total / limit)`, or 0 when `limit` is 0.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 { 0 } else { total.div_ceil(limit) }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.parse::<u64>().ok()).filter(|n| *n >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 20).offset(), 0);
        assert_eq!(PageRequest::new(2, 10).offset(), 10);
        assert_eq!(PageRequest::new(5, 7).offset(), 28);
    }

    #[test]
    fn test_from_raw_defaults() {
        let req = PageRequest::from_raw(None, None, 20, 1000);
        assert_eq!(req, PageRequest { page: 1, limit: 20 });
    }

    #[test]
    fn test_from_raw_rejects_non_positive() {
        for bad in ["0", "-1", "abc", "2.5", ""] {
            let req = PageRequest::from_raw(Some(bad), Some(bad), 20, 1000);
            assert_eq!(req, PageRequest { page: 1, limit: 20 }, "input {bad:?}");
        }
    }

    #[test]
    fn test_from_raw_clamps_limit() {
        let req = PageRequest::from_raw(Some("3"), Some("5000"), 20, 1000);
        assert_eq!(req, PageRequest { page: 3, limit: 1000 });
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_envelope_serializes_camel_case() {
        let page = PageResponse::new(vec![1, 2], PageRequest::new(2, 2), 5);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["total"], 5);
        assert_eq!(json["items"], serde_json::json!([1, 2]));
    }
}
