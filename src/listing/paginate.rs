//! Pagination: page sizes, page slices and the metadata a pager needs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroUsize;

use super::ListingError;

/// Number of items per listing page, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Create a page size, rejecting zero
    pub fn new(size: usize) -> Result<Self, ListingError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(ListingError::InvalidPageSize(size))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl From<NonZeroUsize> for PageSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ListingError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.get() as u64)
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let size = usize::deserialize(deserializer)?;
        PageSize::new(size).map_err(serde::de::Error::custom)
    }
}

/// Number of pages needed to show `len` items, `ceil(len / size)`
pub fn total_pages(len: usize, size: PageSize) -> usize {
    len.div_ceil(size.get())
}

/// Return the 1-based page `number` of `items`.
///
/// A page past the end is empty rather than an error; page 0 is rejected.
pub fn page<T>(items: &[T], size: PageSize, number: usize) -> Result<&[T], ListingError> {
    if number == 0 {
        return Err(ListingError::InvalidPageNumber(number));
    }

    let per_page = size.get();
    let start = (number - 1).saturating_mul(per_page);
    if start >= items.len() {
        return Ok(&[]);
    }
    let end = start.saturating_add(per_page).min(items.len());
    Ok(&items[start..end])
}

/// Pager metadata for "page X of Y" and previous/next links.
///
/// `prev` and `next` are 0 and their links empty when there is no such page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub per_page: usize,
    pub total: usize,
    pub current: usize,
    pub current_url: String,
    pub prev: usize,
    pub prev_link: String,
    pub next: usize,
    pub next_link: String,
}

impl Pagination {
    /// Build pager metadata for page `current` of `total`.
    ///
    /// Page 1 lives at `base`, page N at `base/<pagination_dir>/N/`.
    /// Past the last page, `prev` points back at the last real page.
    pub fn new(
        per_page: PageSize,
        total: usize,
        current: usize,
        base: &str,
        pagination_dir: &str,
    ) -> Self {
        let prev = if current > total {
            total
        } else if current > 1 {
            current - 1
        } else {
            0
        };
        let next = if current < total { current + 1 } else { 0 };
        let link = |n: usize| {
            if n == 0 {
                String::new()
            } else {
                page_url(base, pagination_dir, n)
            }
        };

        Self {
            per_page: per_page.get(),
            total,
            current,
            current_url: page_url(base, pagination_dir, current),
            prev,
            prev_link: link(prev),
            next,
            next_link: link(next),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.prev > 0
    }

    pub fn has_next(&self) -> bool {
        self.next > 0
    }
}

/// URL of page `number` under `base`
fn page_url(base: &str, pagination_dir: &str, number: usize) -> String {
    let base = format!("/{}", base.trim_matches('/'));
    let base = base.trim_end_matches('/');
    if number <= 1 {
        format!("{}/", base)
    } else {
        format!(
            "{}/{}/{}/",
            base,
            pagination_dir.trim_matches('/'),
            number
        )
    }
}

/// A sequence paired with its page size
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    size: PageSize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], size: PageSize) -> Self {
        Self { items, size }
    }

    pub fn page_size(&self) -> PageSize {
        self.size
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.size)
    }

    /// Items on the 1-based page `number`
    pub fn page(&self, number: usize) -> Result<&'a [T], ListingError> {
        page(self.items, self.size, number)
    }

    /// Pager metadata for page `number`
    pub fn pagination(&self, number: usize, base: &str, pagination_dir: &str) -> Pagination {
        Pagination::new(self.size, self.total_pages(), number, base, pagination_dir)
    }

    /// Iterate over every non-empty page in order
    pub fn pages(&self) -> std::slice::Chunks<'a, T> {
        self.items.chunks(self.size.get())
    }
}
