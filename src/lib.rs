//! folio: content listing for a personal blog and portfolio
//!
//! The [`listing`] module orders, filters and paginates any collection of
//! dated, optionally featured [`content::ContentItem`]s. Around it sit a
//! front-matter based collection loader, the site configuration that holds
//! the per-collection page sizes, and the commands used by the CLI.

pub mod commands;
pub mod config;
pub mod content;
pub mod listing;

use anyhow::Result;
use std::path::Path;

/// A site directory: its configuration plus where its content lives
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory holding one sub-directory per collection
    pub content_dir: std::path::PathBuf,
}

impl Folio {
    /// Open a site directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Loader for this site's collections
    pub fn loader(&self) -> content::CollectionLoader {
        content::CollectionLoader::new(&self.content_dir)
    }

    /// List a collection
    pub fn list(&self, options: &commands::list::ListOptions) -> Result<()> {
        commands::list::run(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_without_config() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.content_dir, tmp.path().join("content"));
        assert_eq!(folio.config.posts_per_page.get(), 10);
    }

    #[test]
    fn test_new_with_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "content_dir: src/content\npostsPerPage: 3\n",
        )
        .unwrap();
        fs::create_dir_all(tmp.path().join("src/content/posts")).unwrap();
        fs::write(
            tmp.path().join("src/content/posts/hello.md"),
            "---\ntitle: Hello\npublishDate: 2024-01-01\n---\n",
        )
        .unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.config.page_size("posts").get(), 3);
        let entries = folio.loader().load("posts").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Hello");
    }
}
