//! Site counts report
//!
//! A report has two independent sections: publication counts per public
//! content type, and a short list of related posts that never includes the
//! item currently being viewed. `build_report` gathers the data from the
//! repository capabilities; `markup::render` turns it into HTML.

mod counts;
pub mod markup;
mod related;

pub use counts::{aggregate_counts, counted_status, CountEntry, ReportSection};
pub use related::{filter_related, find_related, RelatedList, PRESENTATION_CAP, RELATED_POSTS_QUERY};

use serde::Serialize;
use thiserror::Error;

use crate::content::{ContentSearch, ContentTypeRegistry, ItemId, RepositoryError, StatusCounter};
use crate::i18n::I18n;

/// Report building failed
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Listing content types failed: {0}")]
    ContentTypes(#[source] RepositoryError),

    #[error("Related posts search failed: {0}")]
    Search(#[source] RepositoryError),
}

/// A related item with its title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedEntry {
    pub id: ItemId,
    /// Raw title as stored; empty when the item has none
    pub title: String,
}

/// Related posts section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedSection {
    /// Heading count, `min(remaining, PRESENTATION_CAP)`
    pub display_count: usize,
    pub entries: Vec<RelatedEntry>,
}

/// Everything the report shows, before markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub current_id: ItemId,
    pub counts: ReportSection,
    /// `None` when the related search found nothing at all
    pub related: Option<RelatedSection>,
}

/// Gather the report data for the item being viewed
pub fn build_report<R, C, S>(
    current: ItemId,
    registry: &R,
    counter: &C,
    search: &S,
) -> Result<Report, ReportError>
where
    R: ContentTypeRegistry + ?Sized,
    C: StatusCounter + ?Sized,
    S: ContentSearch + ?Sized,
{
    let public_types = registry
        .public_content_types()
        .map_err(ReportError::ContentTypes)?;
    let counts = aggregate_counts(registry, counter, &public_types);

    let related = find_related(search, current)
        .map_err(ReportError::Search)?
        .map(|list| RelatedSection {
            display_count: list.display_count,
            entries: list
                .ids
                .into_iter()
                .map(|id| RelatedEntry {
                    id,
                    title: search.lookup_title(id).unwrap_or_default(),
                })
                .collect(),
        });

    Ok(Report {
        current_id: current,
        counts,
        related,
    })
}

/// Build the report and render it as HTML
pub fn render_report<R, C, S>(
    current: ItemId,
    registry: &R,
    counter: &C,
    search: &S,
    i18n: &I18n,
    class_name: &str,
) -> Result<String, ReportError>
where
    R: ContentTypeRegistry + ?Sized,
    C: StatusCounter + ?Sized,
    S: ContentSearch + ?Sized,
{
    let report = build_report(current, registry, counter, search)?;
    Ok(markup::render(&report, i18n, class_name))
}
