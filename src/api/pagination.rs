use std::future::Future;

use log::trace;

use crate::error::{Error, Result};

/// Runs a listing.
///
/// A nonzero `page` is fetched once and returned as-is. Otherwise pages
/// 1, 2, 3... are fetched in order until one comes back empty; the first
/// failure discards whatever was collected. With `max_pages` set, hitting
/// that many requests without an empty page is an error.
pub(crate) async fn collect_pages<T, F, Fut>(
    page: i32,
    max_pages: Option<u32>,
    mut fetch: F,
) -> Result<Vec<T>>
where
    F: FnMut(i32) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    if page != 0 {
        return fetch(page).await;
    }

    let mut items = Vec::new();
    let mut page: i32 = 1;
    let mut fetched: u32 = 0;

    loop {
        if let Some(limit) = max_pages {
            if fetched >= limit {
                return Err(Error::PageLimitExceeded { limit });
            }
        }

        let batch = fetch(page).await?;
        fetched += 1;
        trace!("page {} returned {} items", page, batch.len());

        if batch.is_empty() {
            return Ok(items);
        }

        items.extend(batch);
        page = next_page(page)?;
    }
}

pub(crate) fn next_page(page: i32) -> Result<i32> {
    page.checked_add(1).ok_or(Error::PageOverflow { page })
}
