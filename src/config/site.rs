//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::listing::PageSize;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,

    // Pagination
    #[serde(alias = "postsPerPage")]
    pub posts_per_page: PageSize,
    #[serde(alias = "projectsPerPage")]
    pub projects_per_page: PageSize,
    pub pagination_dir: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),

            posts_per_page: PageSize::default(),
            projects_per_page: PageSize::default(),
            pagination_dir: "page".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }

    /// Page size configured for a collection.
    ///
    /// `projects` uses `projects_per_page`; every other collection uses
    /// `posts_per_page`.
    pub fn page_size(&self, collection: &str) -> PageSize {
        match collection {
            "projects" => self.projects_per_page,
            _ => self.posts_per_page,
        }
    }

    /// Base URL path of a collection's listing pages
    pub fn listing_base(&self, collection: &str) -> String {
        format!("{}/{}", self.root.trim_end_matches('/'), collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Folio");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.posts_per_page.get(), 10);
        assert_eq!(config.projects_per_page.get(), 10);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
postsPerPage: 8
projects_per_page: 6
heroTitle: Hi there
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.page_size("posts").get(), 8);
        assert_eq!(config.page_size("projects").get(), 6);
        assert_eq!(config.page_size("notes").get(), 8);
        assert!(config.extra.contains_key("heroTitle"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let yaml = "postsPerPage: 0\n";
        assert!(serde_yaml::from_str::<SiteConfig>(yaml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("_config.yml");
        fs::write(&path, "title: Portfolio\nprojectsPerPage: 4\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "Portfolio");
        assert_eq!(config.projects_per_page.get(), 4);

        fs::write(&path, "projectsPerPage: 0\n").unwrap();
        assert!(SiteConfig::load(&path).is_err());
    }

    #[test]
    fn test_listing_base() {
        let mut config = SiteConfig::default();
        assert_eq!(config.listing_base("posts"), "/posts");
        config.root = "/site/".to_string();
        assert_eq!(config.listing_base("projects"), "/site/projects");
    }
}
