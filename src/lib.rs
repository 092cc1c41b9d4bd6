//! site-counts: publication counts and related posts for a file-based site
//!
//! The report logic lives in [`report`] and only talks to the content
//! repository through the capability traits in [`content`]. This crate also
//! ships a file-backed repository, a CLI and a small preview server.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod i18n;
pub mod report;
pub mod server;

use anyhow::Result;
use std::path::Path;

use content::{loader::ContentLoader, ItemId, MemoryRepository};
use i18n::I18n;
use report::Report;

/// A site directory and its configuration
#[derive(Clone)]
pub struct SiteCounts {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source (content) directory
    pub source_dir: std::path::PathBuf,
    /// Language catalog directory
    pub i18n_dir: std::path::PathBuf,
}

impl SiteCounts {
    /// Open a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::SiteConfig::load_or_default(&base_dir)?;

        let source_dir = base_dir.join(&config.source_dir);
        let i18n_dir = base_dir.join(&config.i18n_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            i18n_dir,
        })
    }

    /// Read the current content from disk
    pub fn load_repository(&self) -> Result<MemoryRepository> {
        ContentLoader::new(self).load()
    }

    /// Message catalogs for the configured language
    pub fn i18n(&self) -> Result<I18n> {
        let mut i18n = I18n::new(&self.config.language);
        i18n.load_languages(&self.i18n_dir)?;
        Ok(i18n)
    }

    /// Build the report data against freshly loaded content
    pub fn build_report(&self, current: ItemId) -> Result<Report> {
        let repo = self.load_repository()?;
        Ok(report::build_report(current, &repo, &repo, &repo)?)
    }

    /// Render the report HTML; `class_name` overrides the configured class
    pub fn render_report(&self, current: ItemId, class_name: Option<&str>) -> Result<String> {
        let repo = self.load_repository()?;
        let i18n = self.i18n()?;
        let class_name = class_name.unwrap_or(&self.config.class_name);
        Ok(report::render_report(
            current, &repo, &repo, &repo, &i18n, class_name,
        )?)
    }
}
