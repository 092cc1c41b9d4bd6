//! Related posts: tagged `foo`, filed under `baz`, minus the current item

use serde::Serialize;

use crate::content::{
    Compare, ContentQuery, ContentSearch, DateClause, Fields, ItemId, RepositoryError,
    StatusFilter,
};
use crate::i18n::Plurality;

/// Maximum number of related items shown
pub const PRESENTATION_CAP: usize = 5;

/// Related-posts search.
///
/// Business rule, not a bug: only items published between 09:00 and 17:59
/// (hour >= 9 and hour <= 17, two clauses on the same date) qualify. Any
/// status matches so drafts and private items count too. One more result
/// than the presentation cap is fetched to absorb excluding the current item.
pub const RELATED_POSTS_QUERY: ContentQuery<'static> = ContentQuery {
    content_types: &["post", "page"],
    status: StatusFilter::Any,
    page_size: 6,
    fields: Fields::Ids,
    date_query: &[
        DateClause::Hour(Compare::Ge, 9),
        DateClause::Hour(Compare::Le, 17),
    ],
    tag: Some("foo"),
    category: Some("baz"),
    no_found_rows: true,
    update_meta_cache: false,
    ignore_sticky: true,
};

/// Surviving identifiers after exclusion and truncation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedList {
    pub ids: Vec<ItemId>,
    /// `min(remaining, PRESENTATION_CAP)`
    pub display_count: usize,
}

impl RelatedList {
    pub fn plurality(&self) -> Plurality {
        Plurality::of(self.display_count as u64)
    }
}

/// Drop every occurrence of `current` and cap the rest, keeping order
pub fn filter_related(raw: &[ItemId], current: ItemId) -> RelatedList {
    let remaining: Vec<ItemId> = raw.iter().copied().filter(|&id| id != current).collect();
    let display_count = remaining.len().min(PRESENTATION_CAP);
    let mut ids = remaining;
    ids.truncate(PRESENTATION_CAP);
    RelatedList { ids, display_count }
}

/// Run the related search for `current`
///
/// Returns `Ok(None)` when the search matched nothing at all, so the section
/// is left out. A search failure is returned to the caller.
pub fn find_related<S>(search: &S, current: ItemId) -> Result<Option<RelatedList>, RepositoryError>
where
    S: ContentSearch + ?Sized,
{
    let raw = search.search(&RELATED_POSTS_QUERY)?;
    if raw.is_empty() {
        return Ok(None);
    }
    tracing::debug!("Related search returned {} ids", raw.len());
    Ok(Some(filter_related(&raw, current)))
}
