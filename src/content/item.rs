//! Content items and their publication status

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a stored content item
pub type ItemId = u64;

/// Publication status of a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostStatus {
    Publish,
    Future,
    Draft,
    Pending,
    Private,
    Trash,
    AutoDraft,
    /// Attachments inherit the status of their parent
    Inherit,
}

impl PostStatus {
    /// The status name as stored in the repository
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Publish => "publish",
            PostStatus::Future => "future",
            PostStatus::Draft => "draft",
            PostStatus::Pending => "pending",
            PostStatus::Private => "private",
            PostStatus::Trash => "trash",
            PostStatus::AutoDraft => "auto-draft",
            PostStatus::Inherit => "inherit",
        }
    }

    /// Whether an `any` status search skips items with this status
    pub fn excluded_from_any(&self) -> bool {
        matches!(self, PostStatus::Trash | PostStatus::AutoDraft)
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "publish" | "published" => Ok(PostStatus::Publish),
            "future" => Ok(PostStatus::Future),
            "draft" => Ok(PostStatus::Draft),
            "pending" => Ok(PostStatus::Pending),
            "private" => Ok(PostStatus::Private),
            "trash" => Ok(PostStatus::Trash),
            "auto-draft" | "auto_draft" => Ok(PostStatus::AutoDraft),
            "inherit" => Ok(PostStatus::Inherit),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

/// A stored content item (post, page, attachment, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique identifier
    pub id: ItemId,

    /// Item title
    pub title: String,

    /// Content type slug (`post`, `page`, `attachment`, ...)
    pub content_type: String,

    /// Publication status
    pub status: PostStatus,

    /// Publication date
    pub date: DateTime<Local>,

    /// Tag names
    pub tags: Vec<String>,

    /// Category names
    pub categories: Vec<String>,

    /// Pinned to the top of date-ordered listings
    pub sticky: bool,

    /// Source file path (relative to the source dir)
    pub source: String,
}

impl ContentItem {
    /// Create a published item with no taxonomy terms
    pub fn new(id: ItemId, title: &str, content_type: &str, date: DateTime<Local>) -> Self {
        Self {
            id,
            title: title.to_string(),
            content_type: content_type.to_string(),
            status: PostStatus::Publish,
            date,
            tags: Vec::new(),
            categories: Vec::new(),
            sticky: false,
            source: String::new(),
        }
    }

    /// Hour of the local publication time (0-23)
    pub fn hour(&self) -> u32 {
        self.date.hour()
    }

    /// Whether one of the item's tags has the given slug
    pub fn has_tag(&self, tag_slug: &str) -> bool {
        self.tags.iter().any(|t| slug::slugify(t) == tag_slug)
    }

    /// Whether one of the item's categories has the given slug
    pub fn has_category(&self, category_slug: &str) -> bool {
        self.categories
            .iter()
            .any(|c| slug::slugify(c) == category_slug)
    }
}
