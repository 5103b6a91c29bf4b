//! Collection loader - reads content items from `<content_dir>/<collection>`

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, Entry, FrontMatter};
use crate::listing;

/// Keys `Entry` serializes itself; front-matter copies are dropped from `extra`
const ENTRY_KEYS: [&str; 3] = ["slug", "source", "body"];

/// Loads entries from the collections under a content directory
pub struct CollectionLoader {
    content_dir: PathBuf,
    include_drafts: bool,
}

impl CollectionLoader {
    /// Create a new loader rooted at `content_dir`
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            include_drafts: false,
        }
    }

    /// Also load entries marked `draft: true`
    pub fn include_drafts(mut self, include: bool) -> Self {
        self.include_drafts = include;
        self
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Names of the collection directories, sorted
    pub fn collections(&self) -> Result<Vec<String>, ContentError> {
        if !self.content_dir.exists() {
            return Ok(Vec::new());
        }

        let read_dir = fs::read_dir(&self.content_dir).map_err(|source| ContentError::Io {
            path: self.content_dir.clone(),
            source,
        })?;

        let mut names: Vec<String> = read_dir
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .filter(|name| !name.starts_with('.') && !name.starts_with('_'))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Load every entry of `collection`, newest first.
    ///
    /// Files that cannot be read or lack a valid publish date are skipped
    /// with a warning. A missing collection directory yields no entries.
    pub fn load(&self, collection: &str) -> Result<Vec<Entry>, ContentError> {
        let dir = self.content_dir.join(collection);
        if !dir.exists() {
            tracing::debug!("Collection directory {:?} does not exist", dir);
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        // Sorted walk so equal dates keep a stable, file-name based order
        for entry in WalkDir::new(&dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_entry(path) {
                Ok(item) => {
                    if item.draft && !self.include_drafts {
                        tracing::debug!("Skipping draft {:?}", path);
                        continue;
                    }
                    tracing::debug!("Loaded {:?}", path);
                    entries.push(item);
                }
                Err(e) => {
                    tracing::warn!("Failed to load entry {:?}: {}", path, e);
                }
            }
        }

        Ok(listing::sort_newest_first_owned(entries))
    }

    /// Load a single entry from a file
    fn load_entry(&self, path: &Path) -> Result<Entry, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (fm, body) = FrontMatter::parse(&content)?;
        let publish_date = fm.parse_publish_date()?;

        // Title falls back to the file name, and so does the slug
        let file_stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();
        let title = fm.title.unwrap_or_else(|| file_stem.clone());

        let source = path
            .strip_prefix(&self.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        let mut entry = Entry::new(title, publish_date, source);
        entry.featured = fm.featured;
        entry.excerpt = fm.excerpt;
        entry.tags = fm.tags;
        entry.slug = slug::slugify(fm.slug.as_deref().unwrap_or(&file_stem));
        entry.body = body.to_string();
        entry.draft = fm.draft;
        entry.extra = fm.extra;
        entry
            .extra
            .retain(|key, _| !ENTRY_KEYS.contains(&key.as_str()));

        Ok(entry)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
