//! Newest-first ordering

use std::cmp::Ordering;

use crate::content::ContentItem;

/// Compare two items so that the later publish date sorts first.
///
/// Equal dates compare as [`Ordering::Equal`], which together with a stable
/// sort keeps their relative input order.
pub fn newest_first<T: ContentItem + ?Sized>(a: &T, b: &T) -> Ordering {
    b.publish_date().cmp(&a.publish_date())
}

/// Return the items ordered newest first, leaving `items` untouched
pub fn sort_newest_first<T: ContentItem>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| newest_first(*a, *b));
    sorted
}

/// Owned variant of [`sort_newest_first`] for callers that own the collection
pub fn sort_newest_first_owned<T: ContentItem>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by(newest_first);
    items
}
