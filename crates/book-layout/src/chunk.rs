use crate::types::{BookError, Result};

/// Split `entries` into consecutive pages of at most `capacity` entries.
///
/// Order is preserved and only the last page may be short. An empty list
/// yields no pages.
pub fn chunk<T>(entries: &[T], capacity: usize) -> Result<Vec<&[T]>> {
    if capacity == 0 {
        return Err(BookError::Config(
            "Page capacity must be at least 1".to_string(),
        ));
    }
    Ok(entries.chunks(capacity).collect())
}

/// Number of pages `len` entries occupy at `capacity` per page
pub fn page_count(len: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    len.div_ceil(capacity)
}
