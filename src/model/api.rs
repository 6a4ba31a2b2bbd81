use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MessageDto {
    pub message: String,
}

/// Pagination envelope metadata returned alongside every paginated list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginationMetaDto {
    /// One-based page number.
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    /// Whether another page exists after this one.
    pub has_more: bool,
}

impl PaginationMetaDto {
    /// Total number of pages for the current `total` and `limit`, at least one.
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 1;
        }
        self.total.div_ceil(self.limit).max(1)
    }
}
