use crate::{model::api::PaginationMetaDto, server::error::AppError};

/// Validated one-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// One-based page number.
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Validates raw query values, applying defaults for missing ones.
    ///
    /// # Arguments
    /// - `page` - Requested page, at least 1 (default 1)
    /// - `limit` - Requested page size within `1..=max_limit` (default `default_limit`)
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Validated request
    /// - `Err(AppError::BadRequest)` - Page or limit outside the allowed range, or a page
    ///   whose row offset does not fit a SQL `OFFSET`
    pub fn new(
        page: Option<u64>,
        limit: Option<u64>,
        default_limit: u64,
        max_limit: u64,
    ) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(default_limit);

        if page < 1 {
            return Err(AppError::BadRequest("page must be at least 1".to_string()));
        }
        if limit < 1 || limit > max_limit {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                max_limit
            )));
        }

        let offset = (page - 1).checked_mul(limit);
        if !offset.is_some_and(|offset| offset <= i64::MAX as u64) {
            return Err(AppError::BadRequest("page is too large".to_string()));
        }

        Ok(Self { page, limit })
    }

    /// Zero-based page index as used by SeaORM paginators.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    pub fn offset(&self) -> u64 {
        self.index().saturating_mul(self.limit)
    }

    /// Builds response metadata after a page of `returned` items was fetched.
    pub fn meta(&self, total: u64, returned: usize) -> PaginationMetaDto {
        PaginationMetaDto {
            page: self.page,
            limit: self.limit,
            total,
            has_more: self.offset().saturating_add(returned as u64) < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_defaults() {
        let request = PageRequest::new(None, None, 12, 50).unwrap();

        assert_eq!(request, PageRequest { page: 1, limit: 12 });
        assert_eq!(request.index(), 0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(PageRequest::new(Some(0), None, 12, 50).is_err());
        assert!(PageRequest::new(None, Some(0), 12, 50).is_err());
        assert!(PageRequest::new(None, Some(51), 12, 50).is_err());
    }

    #[test]
    fn rejects_pages_whose_offset_overflows() {
        assert!(matches!(
            PageRequest::new(Some(u64::MAX), None, 12, 50),
            Err(AppError::BadRequest(_))
        ));
        assert!(PageRequest::new(Some(u64::MAX / 50 + 2), Some(50), 12, 50).is_err());

        let largest = PageRequest::new(Some(i64::MAX as u64 / 50 + 1), Some(50), 12, 50).unwrap();
        assert!(!largest.meta(10, 0).has_more);
    }

    #[test]
    fn has_more_is_false_once_a_short_page_is_returned() {
        let request = PageRequest::new(Some(2), Some(10), 12, 50).unwrap();

        assert!(request.meta(25, 10).has_more);
        assert!(!request.meta(15, 5).has_more);
        assert!(!request.meta(20, 10).has_more);
    }
}
