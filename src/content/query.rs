//! Structured content queries

use serde::Serialize;

use super::item::{ContentItem, PostStatus};

/// Which statuses a query matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusFilter<'a> {
    /// Every status except the ones hidden from searches (trash, auto-draft)
    Any,
    /// Only the listed statuses
    Only(&'a [PostStatus]),
}

impl StatusFilter<'_> {
    pub fn matches(&self, status: PostStatus) -> bool {
        match self {
            StatusFilter::Any => !status.excluded_from_any(),
            StatusFilter::Only(list) => list.contains(&status),
        }
    }
}

/// Shape of the query result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fields {
    /// Full records
    All,
    /// Identifiers only
    Ids,
}

/// Comparison operator of a date clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Compare {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Compare {
    pub fn holds(&self, lhs: u32, rhs: u32) -> bool {
        match self {
            Compare::Eq => lhs == rhs,
            Compare::Ne => lhs != rhs,
            Compare::Lt => lhs < rhs,
            Compare::Le => lhs <= rhs,
            Compare::Gt => lhs > rhs,
            Compare::Ge => lhs >= rhs,
        }
    }
}

/// One clause of a date query, evaluated against the publication date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DateClause {
    /// Compare the local publication hour (0-23)
    Hour(Compare, u32),
}

impl DateClause {
    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            DateClause::Hour(cmp, hour) => cmp.holds(item.hour(), *hour),
        }
    }
}

/// A bounded content search
///
/// All clauses are combined with AND. The last three fields are performance
/// hints for the repository and never change which items match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentQuery<'a> {
    /// Content type slugs to search
    pub content_types: &'a [&'a str],
    pub status: StatusFilter<'a>,
    /// Maximum number of results
    pub page_size: usize,
    pub fields: Fields,
    pub date_query: &'a [DateClause],
    /// Tag slug
    pub tag: Option<&'a str>,
    /// Category slug
    pub category: Option<&'a str>,
    /// Skip computing the total number of matches
    pub no_found_rows: bool,
    /// Prefetch item metadata
    pub update_meta_cache: bool,
    /// Do not move sticky items to the front
    pub ignore_sticky: bool,
}

impl ContentQuery<'_> {
    /// Whether an item satisfies every filter clause
    pub fn matches(&self, item: &ContentItem) -> bool {
        self.content_types.contains(&item.content_type.as_str())
            && self.status.matches(item.status)
            && self.date_query.iter().all(|clause| clause.matches(item))
            && self.tag.map_or(true, |tag| item.has_tag(tag))
            && self.category.map_or(true, |cat| item.has_category(cat))
    }
}
