//! Common types used across the platform

use serde::{Deserialize, Serialize};

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

/// Pagination parameters, defaulting to the first page of 20
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.per_page)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(pagination: &Pagination, total_items: u64) -> Self {
        let per_page = u64::from(pagination.per_page.max(1));
        let total_pages = total_items.div_ceil(per_page) as u32;
        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            total_items,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pagination_is_first_page() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 20);
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.limit(), 20);
    }

    #[test]
    fn offset_counts_full_pages() {
        let pagination = Pagination {
            page: 3,
            per_page: 10,
        };
        assert_eq!(pagination.offset(), 20);
    }

    #[test]
    fn page_zero_does_not_underflow() {
        let pagination = Pagination {
            page: 0,
            per_page: 10,
        };
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn meta_rounds_page_count_up() {
        let pagination = Pagination {
            page: 1,
            per_page: 20,
        };
        let meta = PaginationMeta::new(&pagination, 41);
        assert_eq!(meta.total_pages, 3);

        let empty = PaginationMeta::new(&pagination, 0);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn missing_query_fields_fall_back_to_defaults() {
        let pagination: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 20);
    }
}
