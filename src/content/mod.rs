//! Content module - items, content types, queries and the repository

mod frontmatter;
mod item;
pub mod loader;
mod query;
mod repository;
mod types;

pub use frontmatter::FrontMatter;
pub use item::{ContentItem, ItemId, PostStatus};
pub use query::{Compare, ContentQuery, DateClause, Fields, StatusFilter};
pub use repository::{
    ContentSearch, ContentTypeRegistry, MemoryRepository, RepositoryError, StatusCounter,
};
pub use types::{ContentType, StatusCounts, TypeLabels};
