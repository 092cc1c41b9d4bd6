//! Content repository capabilities and the in-memory repository

use std::collections::HashMap;
use thiserror::Error;

use super::item::{ContentItem, ItemId};
use super::query::ContentQuery;
use super::types::{ContentType, StatusCounts};

/// A repository call failed outright
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    Query(String),
}

/// Lists and describes registered content types
pub trait ContentTypeRegistry {
    /// Slugs of public content types, in registration order
    fn public_content_types(&self) -> Result<Vec<String>, RepositoryError>;

    /// Metadata for a type, `None` if it is not registered (anymore)
    fn content_type(&self, slug: &str) -> Option<ContentType>;
}

/// Counts items of a content type per status
pub trait StatusCounter {
    fn count_by_status(&self, content_type: &str) -> Result<StatusCounts, RepositoryError>;
}

/// Runs bounded content searches
pub trait ContentSearch {
    /// Identifiers of matching items, in repository order
    fn search(&self, query: &ContentQuery<'_>) -> Result<Vec<ItemId>, RepositoryError>;

    fn lookup_title(&self, id: ItemId) -> Option<String>;
}

/// Repository holding every item in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    types: Vec<ContentType>,
    items: Vec<ContentItem>,
    by_id: HashMap<ItemId, usize>,
}

impl MemoryRepository {
    pub fn new(types: Vec<ContentType>) -> Self {
        Self {
            types,
            items: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Add an item, replacing any item with the same id
    pub fn insert(&mut self, item: ContentItem) {
        match self.by_id.get(&item.id) {
            Some(&idx) => self.items[idx] = item,
            None => {
                self.by_id.insert(item.id, self.items.len());
                self.items.push(item);
            }
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = ContentItem>) -> Self {
        for item in items {
            self.insert(item);
        }
        self
    }

    pub fn get(&self, id: ItemId) -> Option<&ContentItem> {
        self.by_id.get(&id).map(|&idx| &self.items[idx])
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn types(&self) -> &[ContentType] {
        &self.types
    }
}

impl ContentTypeRegistry for MemoryRepository {
    fn public_content_types(&self) -> Result<Vec<String>, RepositoryError> {
        Ok(self
            .types
            .iter()
            .filter(|t| t.public)
            .map(|t| t.slug.clone())
            .collect())
    }

    fn content_type(&self, slug: &str) -> Option<ContentType> {
        self.types.iter().find(|t| t.slug == slug).cloned()
    }
}

impl StatusCounter for MemoryRepository {
    fn count_by_status(&self, content_type: &str) -> Result<StatusCounts, RepositoryError> {
        let mut counts = StatusCounts::new();
        for item in self.items.iter().filter(|i| i.content_type == content_type) {
            counts.increment(item.status.as_str());
        }
        Ok(counts)
    }
}

impl ContentSearch for MemoryRepository {
    fn search(&self, query: &ContentQuery<'_>) -> Result<Vec<ItemId>, RepositoryError> {
        tracing::trace!(
            "search hints: no_found_rows={} update_meta_cache={} fields={:?}",
            query.no_found_rows,
            query.update_meta_cache,
            query.fields
        );

        let mut matched: Vec<&ContentItem> =
            self.items.iter().filter(|i| query.matches(i)).collect();

        // Newest first, ties broken by the higher id
        matched.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        if !query.ignore_sticky {
            // Stable sort keeps date order inside each group
            matched.sort_by_key(|i| !i.sticky);
        }

        Ok(matched
            .into_iter()
            .take(query.page_size)
            .map(|i| i.id)
            .collect())
    }

    fn lookup_title(&self, id: ItemId) -> Option<String> {
        self.get(id).map(|i| i.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::item::PostStatus;
    use crate::content::query::{Fields, StatusFilter};
    use chrono::{Local, TimeZone};

    fn item(id: ItemId, ty: &str, day: u32, status: PostStatus) -> ContentItem {
        let date = Local.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap();
        let mut item = ContentItem::new(id, &format!("Item {}", id), ty, date);
        item.status = status;
        item
    }

    fn repo() -> MemoryRepository {
        MemoryRepository::new(ContentType::defaults()).with_items(vec![
            item(1, "post", 1, PostStatus::Publish),
            item(2, "post", 3, PostStatus::Draft),
            item(3, "page", 2, PostStatus::Publish),
            item(4, "attachment", 2, PostStatus::Inherit),
            item(5, "post", 2, PostStatus::Publish),
        ])
    }

    fn all_posts(ignore_sticky: bool, page_size: usize) -> ContentQuery<'static> {
        ContentQuery {
            content_types: &["post", "page"],
            status: StatusFilter::Any,
            page_size,
            fields: Fields::Ids,
            date_query: &[],
            tag: None,
            category: None,
            no_found_rows: true,
            update_meta_cache: false,
            ignore_sticky,
        }
    }

    #[test]
    fn test_public_types_skip_hidden() {
        let repo = repo();
        assert_eq!(
            repo.public_content_types().unwrap(),
            vec!["post", "page", "attachment"]
        );
        assert!(repo.content_type("revision").is_some());
        assert!(repo.content_type("nope").is_none());
    }

    #[test]
    fn test_count_by_status() {
        let repo = repo();
        let posts = repo.count_by_status("post").unwrap();
        assert_eq!(posts.get("publish"), Some(2));
        assert_eq!(posts.get("draft"), Some(1));

        let media = repo.count_by_status("attachment").unwrap();
        assert_eq!(media.get("inherit"), Some(1));
        assert_eq!(media.get("publish"), None);

        assert!(repo.count_by_status("product").unwrap().is_empty());
    }

    #[test]
    fn test_search_orders_by_date_desc() {
        let repo = repo();
        let ids = repo.search(&all_posts(true, 10)).unwrap();
        // Item 3 and 5 share a date; the higher id comes first
        assert_eq!(ids, vec![2, 5, 3, 1]);
    }

    #[test]
    fn test_search_respects_page_size() {
        let repo = repo();
        assert_eq!(repo.search(&all_posts(true, 2)).unwrap(), vec![2, 5]);
    }

    #[test]
    fn test_sticky_items_lead_unless_ignored() {
        let mut sticky = item(1, "post", 1, PostStatus::Publish);
        sticky.sticky = true;
        let mut repo = repo();
        repo.insert(sticky);

        assert_eq!(repo.search(&all_posts(false, 10)).unwrap(), vec![1, 2, 5, 3]);
        assert_eq!(repo.search(&all_posts(true, 10)).unwrap(), vec![2, 5, 3, 1]);
    }

    #[test]
    fn test_lookup_title() {
        let repo = repo();
        assert_eq!(repo.lookup_title(3), Some("Item 3".to_string()));
        assert_eq!(repo.lookup_title(99), None);
    }
}
