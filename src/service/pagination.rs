//! Page number parsing and the offset window it selects.

use crate::error::AppError;

/// `page` query value: absent or non-numeric means page 1, numbers below 1 are rejected.
pub fn parse_page(raw: Option<&str>) -> Result<u64, AppError> {
    let Some(raw) = raw else {
        return Ok(1);
    };
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 1 => Ok(n as u64),
        Ok(n) => Err(AppError::BadRequest(format!("page must be at least 1, got {}", n))),
        Err(_) => Ok(1),
    }
}

/// Rows `[offset, offset + limit)` for a 1-based page.
pub fn page_window(page: u64, per_page: u32) -> (u64, u64) {
    let per_page = u64::from(per_page);
    let offset = page.saturating_sub(1).saturating_mul(per_page);
    (offset, per_page)
}
