//! Featured filtering

use crate::content::ContentItem;

/// Return the featured items, in their input order
pub fn featured<T: ContentItem>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| item.is_featured()).collect()
}

/// Whether any item is featured (pages hide the section otherwise)
pub fn has_featured<T: ContentItem>(items: &[T]) -> bool {
    items.iter().any(ContentItem::is_featured)
}
