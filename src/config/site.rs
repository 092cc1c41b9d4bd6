//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::ContentType;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,

    // Directory
    pub source_dir: String,
    pub i18n_dir: String,

    // Report block
    /// Extra class on the report wrapper element
    pub class_name: String,

    /// Registered content types, in registration order
    pub content_types: Vec<ContentType>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Site Counts".to_string(),
            language: "en".to_string(),

            source_dir: "source".to_string(),
            i18n_dir: "languages".to_string(),

            class_name: String::new(),

            content_types: ContentType::defaults(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `_config.yml` from a site directory, falling back to defaults
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let path = base_dir.as_ref().join("_config.yml");
        if path.exists() {
            tracing::debug!("Loading config from {:?}", path);
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.source_dir, "source");
        let slugs: Vec<_> = config.content_types.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["post", "page", "attachment", "revision"]);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
language: fr
class_name: is-style-compact
content_types:
  - slug: post
    name: Posts
    singular_name: Post
  - slug: attachment
    name: Media
    singular_name: Media
  - slug: note
    name: Notes
    singular_name: Note
    public: false
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.language, "fr");
        assert_eq!(config.class_name, "is-style-compact");
        assert_eq!(config.content_types.len(), 3);
        assert!(!config.content_types[2].public);
        assert_eq!(config.i18n_dir, "languages");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.title, "Site Counts");
    }
}
