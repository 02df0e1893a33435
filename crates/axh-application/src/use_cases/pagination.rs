//! Paginated Fetch Merger
//!
//! Page 0 is fetched by the caller. When it reports more data, the remaining
//! pages are requested concurrently, each one after a start slot from the
//! throttle gate, and merged in page order. Failed pages are logged and
//! skipped.
//!
//! An upstream that says more pages exist without reporting a total is
//! walked one page at a time until a page reports none after it. Either way
//! no more than `max_pages` pages are fetched for one listing.

use crate::ports::providers::throttle::ThrottleGate;
use axh_domain::constants::DEFAULT_MAX_PAGES;
use axh_domain::{ApiResult, Page, PageMetadata};
use futures::future::join_all;
use std::collections::HashSet;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// How merged items are de-duplicated
pub enum DedupStrategy<T> {
    /// Keep every item, duplicates included
    KeepAll,
    /// Keep the first item for each logical key
    ByKey(fn(&T) -> String),
}

impl<T> DedupStrategy<T> {
    pub fn apply(&self, items: Vec<T>) -> Vec<T> {
        match self {
            Self::KeepAll => items,
            Self::ByKey(key_of) => {
                let mut seen = HashSet::with_capacity(items.len());
                items
                    .into_iter()
                    .filter(|item| seen.insert(key_of(item)))
                    .collect()
            }
        }
    }
}

impl<T> Clone for DedupStrategy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DedupStrategy<T> {}

impl<T> fmt::Debug for DedupStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeepAll => f.write_str("KeepAll"),
            Self::ByKey(_) => f.write_str("ByKey"),
        }
    }
}

/// Merges the pages of one listing
#[derive(Debug, Clone)]
pub struct PageMerger {
    gate: Arc<dyn ThrottleGate>,
    max_pages: u32,
}

impl PageMerger {
    pub fn new(gate: Arc<dyn ThrottleGate>) -> Self {
        Self {
            gate,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Cap the pages fetched per listing, the first page included
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn gate(&self) -> &Arc<dyn ThrottleGate> {
        &self.gate
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Complete `first` with the pages after it
    ///
    /// `fetch_page` receives the offset to request. Page `i` is requested at
    /// `first.metadata.offset + i * limit` for `i` in `1..total_pages`,
    /// bounded by the page cap.
    pub async fn merge<T, F, Fut>(
        &self,
        first: Page<T>,
        dedup: DedupStrategy<T>,
        fetch_page: F,
    ) -> Vec<T>
    where
        F: Fn(u32) -> Fut,
        Fut: Future<Output = ApiResult<Page<T>>>,
    {
        let metadata = first.metadata;
        let mut items = first.items;

        if !metadata.has_next {
            return dedup.apply(items);
        }

        if metadata.total_unknown() {
            self.walk(metadata, &mut items, &fetch_page).await;
            return dedup.apply(items);
        }

        let total_pages = metadata.total_pages();
        if total_pages > self.max_pages {
            warn!(
                total = metadata.total,
                total_pages,
                max_pages = self.max_pages,
                "listing exceeds the page cap, truncating"
            );
        }
        let pages = total_pages.min(self.max_pages);
        debug!(
            total = metadata.total,
            limit = metadata.limit,
            pages,
            "fetching remaining pages"
        );

        let fetch_page = &fetch_page;
        let requests = (1..pages).map(|page| {
            let offset = metadata.offset_of_page(page);
            async move {
                self.gate.acquire().await;
                (page, fetch_page(offset).await)
            }
        });

        for (page, result) in join_all(requests).await {
            match result {
                Ok(next) => items.extend(next.items),
                Err(err) => warn!(page, error = %err, "page fetch failed, skipping"),
            }
        }

        dedup.apply(items)
    }

    /// Follow `has_next` page by page when the total is unknown
    ///
    /// A failed page ends the walk: without a total there is no telling
    /// whether anything lies beyond it.
    async fn walk<T, F, Fut>(&self, first: PageMetadata, items: &mut Vec<T>, fetch_page: &F)
    where
        F: Fn(u32) -> Fut,
        Fut: Future<Output = ApiResult<Page<T>>>,
    {
        debug!(limit = first.limit, "total unknown, fetching pages in sequence");
        for page in 1..self.max_pages {
            self.gate.acquire().await;
            match fetch_page(first.offset_of_page(page)).await {
                Ok(next) => {
                    let more = next.metadata.has_next && !next.items.is_empty();
                    items.extend(next.items);
                    if !more {
                        return;
                    }
                }
                Err(err) => {
                    warn!(page, error = %err, "page fetch failed, ending sequential fetch");
                    return;
                }
            }
        }
        warn!(max_pages = self.max_pages, "listing exceeds the page cap, truncating");
    }
}
