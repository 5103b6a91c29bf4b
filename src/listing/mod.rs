//! Listing helpers - ordering, featured filtering and pagination
//!
//! Every function here is a pure transformation over a borrowed sequence of
//! [`ContentItem`](crate::content::ContentItem)s. Inputs are never mutated;
//! callers get a fresh vector or a sub-slice back.

mod featured;
mod order;
mod paginate;

use thiserror::Error;

pub use featured::{featured, has_featured};
pub use order::{newest_first, sort_newest_first, sort_newest_first_owned};
pub use paginate::{page, total_pages, PageSize, Pagination, Paginator};

/// Contract violations raised by the listing helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListingError {
    /// Page sizes must be at least one
    #[error("invalid page size {0}: must be a positive integer")]
    InvalidPageSize(usize),

    /// Page numbers are 1-based
    #[error("invalid page number {0}: pages are numbered from 1")]
    InvalidPageNumber(usize),
}
