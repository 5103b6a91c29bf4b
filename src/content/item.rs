//! Content items: the capability the listing helpers work on, and the
//! concrete entry loaded from a collection

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Anything that can be listed: a dated, optionally featured record.
///
/// Everything else an item carries (title, excerpt, tags...) is opaque to
/// the ordering, filtering and pagination helpers.
pub trait ContentItem {
    /// Calendar date the item was published on
    fn publish_date(&self) -> NaiveDate;

    /// Whether the item is flagged for prominent display
    fn is_featured(&self) -> bool {
        false
    }
}

impl<T: ContentItem + ?Sized> ContentItem for &T {
    fn publish_date(&self) -> NaiveDate {
        (**self).publish_date()
    }

    fn is_featured(&self) -> bool {
        (**self).is_featured()
    }
}

impl<T: ContentItem + ?Sized> ContentItem for Box<T> {
    fn publish_date(&self) -> NaiveDate {
        (**self).publish_date()
    }

    fn is_featured(&self) -> bool {
        (**self).is_featured()
    }
}

/// A blog post or project entry read from a content collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry title
    pub title: String,

    /// Publication date, fixed at construction
    #[serde(rename = "publishDate")]
    publish_date: NaiveDate,

    /// Featured flag
    #[serde(rename = "isFeatured", default)]
    pub featured: bool,

    /// Short summary shown in previews
    pub excerpt: Option<String>,

    /// Entry tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Slug (URL-friendly name, from the file name)
    pub slug: String,

    /// Source file path relative to the content directory
    pub source: String,

    /// Raw markdown body
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub body: String,

    /// Whether the entry is a draft
    #[serde(default)]
    pub draft: bool,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Entry {
    /// Create a new entry with minimal required fields
    pub fn new(title: String, publish_date: NaiveDate, source: String) -> Self {
        let slug = slug::slugify(&title);
        Self {
            title,
            publish_date,
            featured: false,
            excerpt: None,
            tags: Vec::new(),
            slug,
            source,
            body: String::new(),
            draft: false,
            extra: HashMap::new(),
        }
    }

    /// Builder-style featured flag
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }
}

impl ContentItem for Entry {
    fn publish_date(&self) -> NaiveDate {
        self.publish_date
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}
