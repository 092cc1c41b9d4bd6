//! Content loader - builds the repository from the source directory

use anyhow::Result;
use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentItem, FrontMatter, ItemId, MemoryRepository, PostStatus};
use crate::SiteCounts;

/// Where a source file lives, which decides its default type and status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Post,
    Draft,
    Media,
    Page,
}

impl SourceKind {
    /// Classify a path relative to the source dir; `None` means skip
    fn classify(relative: &Path) -> Option<Self> {
        let first = relative.components().next()?.as_os_str().to_str()?;
        let kind = match first {
            "_posts" => SourceKind::Post,
            "_drafts" => SourceKind::Draft,
            "_media" => return Some(SourceKind::Media),
            _ if first.starts_with('_') => return None,
            _ => SourceKind::Page,
        };
        is_markdown_file(relative).then_some(kind)
    }

    fn content_type(&self) -> &'static str {
        match self {
            SourceKind::Post | SourceKind::Draft => "post",
            SourceKind::Media => "attachment",
            SourceKind::Page => "page",
        }
    }

    fn default_status(&self) -> PostStatus {
        match self {
            SourceKind::Draft => PostStatus::Draft,
            SourceKind::Media => PostStatus::Inherit,
            SourceKind::Post | SourceKind::Page => PostStatus::Publish,
        }
    }
}

/// An item read from disk before identifiers are settled
struct LoadedItem {
    id: Option<ItemId>,
    item: ContentItem,
}

/// Loads content from the source directory
pub struct ContentLoader<'a> {
    site: &'a SiteCounts,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a SiteCounts) -> Self {
        Self { site }
    }

    /// Read every content file into a fresh repository
    pub fn load(&self) -> Result<MemoryRepository> {
        let mut repo = MemoryRepository::new(self.site.config.content_types.clone());
        for item in self.load_items()? {
            repo.insert(item);
        }
        tracing::debug!("Loaded {} items", repo.items().len());
        Ok(repo)
    }

    /// Load all items, with identifiers assigned
    pub fn load_items(&self) -> Result<Vec<ContentItem>> {
        let source_dir = &self.site.source_dir;
        if !source_dir.exists() {
            return Ok(Vec::new());
        }

        let mut files: Vec<(PathBuf, SourceKind)> = WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let relative = e.path().strip_prefix(source_dir).ok()?;
                let kind = SourceKind::classify(relative)?;
                Some((e.path().to_path_buf(), kind))
            })
            .collect();

        // Sorted paths keep generated ids stable between runs
        files.sort_by(|a, b| a.0.cmp(&b.0));

        let mut loaded = Vec::with_capacity(files.len());
        for (path, kind) in files {
            match self.load_file(&path, kind) {
                Ok(item) => loaded.push(item),
                Err(e) => tracing::warn!("Failed to load {:?}: {}", path, e),
            }
        }

        Ok(assign_ids(loaded))
    }

    fn load_file(&self, path: &Path, kind: SourceKind) -> Result<LoadedItem> {
        let file_modified = fs::metadata(path)?
            .modified()
            .ok()
            .map(DateTime::<Local>::from);

        let source = path
            .strip_prefix(&self.site.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let file_title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled")
            .to_string();

        if kind == SourceKind::Media {
            let date = file_modified.unwrap_or_else(Local::now);
            let mut item = ContentItem::new(0, &file_title, kind.content_type(), date);
            item.status = kind.default_status();
            item.source = source;
            return Ok(LoadedItem { id: None, item });
        }

        let content = fs::read_to_string(path)?;
        let (fm, _body) = FrontMatter::parse(&content)?;

        let date = fm
            .parse_date()
            .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));

        let status = fm.parse_status().unwrap_or_else(|| {
            if fm.published {
                kind.default_status()
            } else {
                PostStatus::Draft
            }
        });

        let content_type = fm
            .content_type
            .clone()
            .unwrap_or_else(|| kind.content_type().to_string());

        let title = fm.title.clone().unwrap_or(file_title);

        let mut item = ContentItem::new(0, &title, &content_type, date);
        item.status = status;
        item.tags = fm.tags;
        item.categories = fm.categories;
        item.sticky = fm.sticky;
        item.source = source;

        Ok(LoadedItem { id: fm.id, item })
    }
}

/// Keep explicit ids; number the rest after the largest explicit one
fn assign_ids(loaded: Vec<LoadedItem>) -> Vec<ContentItem> {
    let mut next = loaded
        .iter()
        .filter_map(|l| l.id)
        .max()
        .unwrap_or(0)
        .checked_add(1);
    let mut seen = HashSet::new();

    loaded
        .into_iter()
        .filter_map(|LoadedItem { id, mut item }| {
            item.id = match id.or(next) {
                Some(id) => id,
                None => {
                    tracing::warn!("No free id left for {}, skipping", item.source);
                    return None;
                }
            };
            if id.is_none() {
                next = item.id.checked_add(1);
            }
            if !seen.insert(item.id) {
                tracing::warn!("Duplicate id {} in {}, later file wins", item.id, item.source);
            }
            Some(item)
        })
        .collect()
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
