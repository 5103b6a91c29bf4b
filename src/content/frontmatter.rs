//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::ContentError;

/// `tags: rust` and `tags: [rust, blog]` both mean a list of tags
#[derive(Deserialize)]
#[serde(untagged)]
enum Tags {
    One(String),
    Many(Vec<String>),
}

fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Tags>::deserialize(deserializer)? {
        Some(Tags::One(tag)) => vec![tag],
        Some(Tags::Many(tags)) => tags,
        None => Vec::new(),
    })
}

/// Front-matter of a blog post or project entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    #[serde(rename = "publishDate", alias = "pubDate", alias = "date")]
    pub publish_date: Option<String>,
    #[serde(rename = "isFeatured", alias = "featured")]
    pub featured: bool,
    #[serde(alias = "description")]
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    pub draft: bool,
    /// Overrides the file-name slug
    pub slug: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str), ContentError> {
        let rest = content[3..].trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        // A `---` thematic break followed by prose is not front-matter
        if !yaml_content.lines().any(looks_like_yaml_key) {
            return Ok((FrontMatter::default(), content));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)?;
        Ok((fm, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str), ContentError> {
        if let Some(rest) = content.strip_prefix(";;;") {
            let end_pos = rest.find(";;;").ok_or(ContentError::UnterminatedJson)?;
            let fm: FrontMatter = serde_json::from_str(&rest[..end_pos])?;
            let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);
            return Ok((fm, remaining));
        }

        // Bare JSON object: find the matching closing brace
        let mut depth = 0usize;
        let mut end_pos = None;
        for (i, c) in content.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        end_pos = Some(i + 1);
                        break;
                    }
                }
                _ => {}
            }
        }

        let end_pos = end_pos.ok_or(ContentError::UnterminatedJson)?;
        let fm: FrontMatter = serde_json::from_str(&content[..end_pos])?;
        let remaining = content[end_pos..].trim_start_matches(['\n', '\r']);
        Ok((fm, remaining))
    }

    /// Parse the publish date, keeping only the calendar day
    pub fn parse_publish_date(&self) -> Result<NaiveDate, ContentError> {
        let raw = self
            .publish_date
            .as_deref()
            .ok_or(ContentError::MissingDate)?;
        parse_date_string(raw).ok_or_else(|| ContentError::InvalidDate(raw.to_string()))
    }
}

/// `key: value` with a plain identifier key (URLs like `https://` don't count)
fn looks_like_yaml_key(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }
    let Some(colon_pos) = trimmed.find(':') else {
        return false;
    };
    let key = &trimmed[..colon_pos];
    let is_valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !matches!(key, "http" | "https" | "ftp");
    let after_colon = &trimmed[colon_pos + 1..];
    is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
    const DATETIME_FORMATS: [&str; 6] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 keeps the author's local calendar day
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
publishDate: 2024-01-15
isFeatured: true
tags:
  - rust
  - blog
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert!(fm.featured);
        assert_eq!(fm.tags, vec!["rust", "blog"]);
        assert_eq!(fm.parse_publish_date().unwrap(), date(2024, 1, 15));
        assert!(remaining.contains("This is the content."));
    }

    #[test]
    fn test_featured_defaults_to_false() {
        let content = "---\ntitle: Plain\npubDate: 2023/06/01\n---\nBody\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(!fm.featured);
        assert_eq!(fm.parse_publish_date().unwrap(), date(2023, 6, 1));
    }

    #[test]
    fn test_aliases() {
        let content = "---\ntitle: Project\ndate: 2022-03-04 10:30:00\nfeatured: true\ndescription: Short\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(fm.featured);
        assert_eq!(fm.excerpt.as_deref(), Some("Short"));
        assert_eq!(fm.parse_publish_date().unwrap(), date(2022, 3, 4));
    }

    #[test]
    fn test_parse_json_frontmatter() {
        let content = r#"{"title": "Test Post", "publishDate": "2024-02-01", "tags": ["a", "b"]}

This is content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Test Post".to_string()));
        assert_eq!(fm.tags, vec!["a", "b"]);
        assert!(remaining.contains("This is content."));
    }

    #[test]
    fn test_fenced_json_frontmatter() {
        let content = ";;;\n{\"title\": \"Fenced\", \"isFeatured\": true}\n;;;\nBody";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Fenced"));
        assert!(fm.featured);
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_single_string_tags() {
        let content = "---\ntitle: One\ntags: Notes\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["Notes"]);
    }

    #[test]
    fn test_empty_tags() {
        let content = "---\ntitle: None\ntags:\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_slug_is_not_an_extra_field() {
        let content = "---\ntitle: One\nslug: custom-one\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.slug.as_deref(), Some("custom-one"));
        assert!(!fm.extra.contains_key("slug"));
    }

    #[test]
    fn test_extra_fields_kept() {
        let content = "---\ntitle: One\nheroImage: /img/one.png\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(fm.extra.contains_key("heroImage"));
    }

    #[test]
    fn test_markdown_separator_not_yaml() {
        let content = r#"
---

Check out https://example.com/path and http://test.com

---
More content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(remaining.contains("https://example.com"));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\n";
        assert!(matches!(
            FrontMatter::parse(content),
            Err(ContentError::Yaml(_))
        ));
    }

    #[test]
    fn test_date_errors() {
        let fm = FrontMatter::default();
        assert!(matches!(
            fm.parse_publish_date(),
            Err(ContentError::MissingDate)
        ));

        let fm = FrontMatter {
            publish_date: Some("next tuesday".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            fm.parse_publish_date(),
            Err(ContentError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_rfc3339_keeps_calendar_day() {
        assert_eq!(
            parse_date_string("2024-03-01T23:30:00+09:00"),
            Some(date(2024, 3, 1))
        );
        assert_eq!(
            parse_date_string("2024-03-01T08:00:00.250"),
            Some(date(2024, 3, 1))
        );
    }
}
