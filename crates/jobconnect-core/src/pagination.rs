//! Zero-based page requests and the pages returned for them.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// A zero-based page index plus a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    /// Build a request, clamping the size into `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results together with the totals of the underlying query.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total_items,
            total_pages: total_items.div_ceil(request.size),
        }
    }

    /// Slice an already materialized, already ordered collection.
    pub fn from_all(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size as usize)
            .collect();
        Self::new(items, request, total)
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_clamped() {
        assert_eq!(PageRequest::new(0, 0).size, 1);
        assert_eq!(PageRequest::new(0, 500).size, MAX_PAGE_SIZE);
    }

    #[test]
    fn from_all_slices_and_counts() {
        let page = Page::from_all((0..25).collect::<Vec<_>>(), PageRequest::new(2, 10));
        assert_eq!(page.items, vec![20, 21, 22, 23, 24]);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = Page::from_all(vec![1, 2, 3], PageRequest::new(5, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }
}
