//! List a content collection: newest first, optionally featured-only, one page at a time

use anyhow::Result;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{ContentItem, Entry};
use crate::listing::{self, Pagination, Paginator};
use crate::Folio;

/// What to list
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub collection: String,
    /// 1-based page to show; all items when absent
    pub page: Option<usize>,
    pub featured: bool,
    pub drafts: bool,
    pub json: bool,
}

impl ListOptions {
    pub fn new(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            page: None,
            featured: false,
            drafts: false,
            json: false,
        }
    }
}

/// A derived view over a collection, ready to print or serialize
#[derive(Debug, Serialize)]
pub struct CollectionView<'a> {
    pub collection: String,
    pub total_items: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    pub items: Vec<&'a Entry>,
}

/// Build the view for `options` over already loaded `entries`
pub fn view<'a>(
    entries: &'a [Entry],
    config: &SiteConfig,
    options: &ListOptions,
) -> Result<CollectionView<'a>> {
    let sorted = listing::sort_newest_first(entries);
    let selected: Vec<&Entry> = if options.featured {
        listing::featured(&sorted).into_iter().copied().collect()
    } else {
        sorted
    };

    let total_items = selected.len();
    let (pagination, items) = match options.page {
        Some(number) => {
            let paginator = Paginator::new(&selected, config.page_size(&options.collection));
            let items = paginator.page(number)?.to_vec();
            let pagination = paginator.pagination(
                number,
                &config.listing_base(&options.collection),
                &config.pagination_dir,
            );
            (Some(pagination), items)
        }
        None => (None, selected),
    };

    Ok(CollectionView {
        collection: options.collection.clone(),
        total_items,
        pagination,
        items,
    })
}

/// Load and print a collection
pub fn run(folio: &Folio, options: &ListOptions) -> Result<()> {
    let entries = folio
        .loader()
        .include_drafts(options.drafts)
        .load(&options.collection)?;
    tracing::info!(
        "Loaded {} entries from {}",
        entries.len(),
        options.collection
    );

    let view = view(&entries, &folio.config, options)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print!("{}", render(&view));
    Ok(())
}

/// Plain-text rendering of a view
pub fn render(view: &CollectionView<'_>) -> String {
    let mut out = format!("{} ({}):\n", capitalize(&view.collection), view.total_items);

    for entry in &view.items {
        out.push_str(&format!(
            "  {} - {}{} [{}]\n",
            entry.publish_date().format("%Y-%m-%d"),
            entry.title,
            if entry.is_featured() { " *" } else { "" },
            entry.source
        ));
    }

    if let Some(pagination) = &view.pagination {
        out.push_str(&format!(
            "Page {} of {}\n",
            pagination.current, pagination.total
        ));
        if pagination.has_prev() {
            out.push_str(&format!("  prev: {}\n", pagination.prev_link));
        }
        if pagination.has_next() {
            out.push_str(&format!("  next: {}\n", pagination.next_link));
        }
    }

    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
