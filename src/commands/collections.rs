//! List the collections under the content directory

use anyhow::Result;

use crate::listing;
use crate::Folio;

/// Counts shown for one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub name: String,
    pub entries: usize,
    pub featured: usize,
    pub pages: usize,
    pub per_page: usize,
}

/// Entry, featured and page counts for every collection
pub fn summarize(folio: &Folio) -> Result<Vec<CollectionSummary>> {
    let loader = folio.loader();

    loader
        .collections()?
        .into_iter()
        .map(|name| -> Result<CollectionSummary> {
            let entries = loader.load(&name)?;
            let size = folio.config.page_size(&name);
            Ok(CollectionSummary {
                entries: entries.len(),
                featured: listing::featured(&entries).len(),
                pages: listing::total_pages(entries.len(), size),
                per_page: size.get(),
                name,
            })
        })
        .collect()
}

/// Print each collection with its entry, featured and page counts
pub fn run(folio: &Folio) -> Result<()> {
    let summaries = summarize(folio)?;

    println!("Collections ({}):", summaries.len());
    for summary in summaries {
        println!(
            "  {} - {} entries, {} featured, {} page(s) of {}",
            summary.name, summary.entries, summary.featured, summary.pages, summary.per_page
        );
    }

    Ok(())
}
