//! Paginated response envelope
//!
//! Upstreams disagree on pagination shape. The gateway and game APIs answer
//! `{ _items, _metadata: { limit, offset, total, hasNext } }` while listing
//! endpoints answer `{ data, total }`. Both deserialize through [`Envelope`]
//! and are unified into a [`Page`].

use serde::{Deserialize, Serialize};

/// Pagination metadata of one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Page size requested
    pub limit: u32,
    /// Offset of the first item of this page
    pub offset: u32,
    /// Total number of items across all pages (0 when the upstream omits it)
    #[serde(default)]
    pub total: u32,
    /// Whether more items exist after this page
    #[serde(default)]
    pub has_next: bool,
}

impl PageMetadata {
    /// Build metadata for a page, deriving `has_next` from the counts
    pub fn new(limit: u32, offset: u32, total: u32, item_count: usize) -> Self {
        let seen = u64::from(offset) + item_count as u64;
        Self {
            limit,
            offset,
            total,
            has_next: seen < u64::from(total),
        }
    }

    /// Number of pages needed to cover `total` items
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        self.total.div_ceil(self.limit).max(1)
    }

    /// More pages exist but the upstream did not say how many
    pub fn total_unknown(&self) -> bool {
        self.has_next && self.total == 0
    }

    /// Offset of the `page`th page relative to this one
    pub fn offset_of_page(&self, page: u32) -> u32 {
        self.offset.saturating_add(page.saturating_mul(self.limit))
    }
}

/// One page of items with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub metadata: PageMetadata,
}

impl<T> Page<T> {
    /// Build a page whose `has_next` flag follows from the counts
    pub fn new(items: Vec<T>, limit: u32, offset: u32, total: u32) -> Self {
        let metadata = PageMetadata::new(limit, offset, total, items.len());
        Self { items, metadata }
    }

    /// A page that is known to be the last one
    pub fn last(items: Vec<T>) -> Self {
        let len = u32::try_from(items.len()).unwrap_or(u32::MAX);
        Self::new(items, len, 0, len)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Wire envelope accepted from paginated upstreams
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// `{ _items, _metadata }`
    Gateway {
        #[serde(rename = "_items")]
        items: Vec<T>,
        #[serde(rename = "_metadata")]
        metadata: PageMetadata,
    },
    /// `{ data, total }`
    Listing {
        data: Vec<T>,
        #[serde(default)]
        total: u32,
    },
}

impl<T> Envelope<T> {
    /// Unify into a [`Page`]
    ///
    /// `limit` and `offset` are the request parameters; they fill in the
    /// metadata the listing shape does not carry. A gateway envelope on its
    /// last page that reports no `total` is given one from the items seen.
    /// One that reports `hasNext` without a `total` keeps `total` at 0, see
    /// [`PageMetadata::total_unknown`].
    pub fn into_page(self, limit: u32, offset: u32) -> Page<T> {
        match self {
            Self::Gateway { items, mut metadata } => {
                if metadata.limit == 0 {
                    metadata.limit = limit;
                }
                if metadata.total == 0 && !metadata.has_next {
                    let seen = metadata.offset as usize + items.len();
                    metadata.total = u32::try_from(seen).unwrap_or(u32::MAX);
                }
                Page { items, metadata }
            }
            Self::Listing { data, total } => Page::new(data, limit, offset, total),
        }
    }
}
