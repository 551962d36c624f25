use serde::{Deserialize, Serialize};

use crate::domain::{article::Article, listing::ListingPage};

/// One rendering of the listing: the revealed prefix plus the counters the
/// page shows around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct ListingPageDto<T> {
    pub items: Vec<T>,
    pub has_more: bool,
    pub total_matched: usize,
    pub catalog_size: usize,
    pub remaining: usize,
    pub page_count: usize,
    pub page_size: usize,
}

impl<T> ListingPageDto<T> {
    pub fn from_page<'a>(page: &ListingPage<'a>, map: impl FnMut(&&'a Article) -> T) -> Self {
        Self {
            items: page.visible.iter().map(map).collect(),
            has_more: page.has_more,
            total_matched: page.total_matched,
            catalog_size: page.catalog_size,
            remaining: page.remaining(),
            page_count: page.page_count.get(),
            page_size: page.page_size.get(),
        }
    }

    /// Items appended after `previous_page_count` pages were shown.
    pub fn newly_revealed(&self, previous_page_count: usize) -> &[T] {
        let start = previous_page_count
            .saturating_mul(self.page_size)
            .min(self.items.len());
        &self.items[start..]
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
