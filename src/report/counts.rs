//! Per-content-type publication counts

use serde::Serialize;

use crate::content::{ContentTypeRegistry, PostStatus, StatusCounter};
use crate::i18n::Plurality;

/// Content types whose live items are not counted under `publish`
const COUNTED_STATUS_OVERRIDES: &[(&str, PostStatus)] = &[("attachment", PostStatus::Inherit)];

/// The status that means "live" for a content type
pub fn counted_status(content_type: &str) -> PostStatus {
    COUNTED_STATUS_OVERRIDES
        .iter()
        .find(|(slug, _)| *slug == content_type)
        .map_or(PostStatus::Publish, |(_, status)| *status)
}

/// One line of the counts section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub content_type: String,
    /// Singular display name when `count == 1`, plural otherwise
    pub label: String,
    pub count: u64,
}

impl CountEntry {
    /// Grammatical number for message selection
    pub fn plurality(&self) -> Plurality {
        Plurality::of(self.count)
    }

    /// Nothing published, rendered as "No ... found."
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Counts section, one entry per public content type in registry order
pub type ReportSection = Vec<CountEntry>;

/// Count the live items of every public content type
///
/// Types that disappear between enumeration and lookup are skipped, and a
/// failing count degrades to zero.
pub fn aggregate_counts<R, C>(registry: &R, counter: &C, public_types: &[String]) -> ReportSection
where
    R: ContentTypeRegistry + ?Sized,
    C: StatusCounter + ?Sized,
{
    public_types
        .iter()
        .filter_map(|slug| {
            let Some(ty) = registry.content_type(slug) else {
                tracing::debug!("Skipping unregistered content type {}", slug);
                return None;
            };

            let status = counted_status(slug);
            let count = match counter.count_by_status(slug) {
                Ok(counts) => counts.get(status.as_str()).unwrap_or(0),
                Err(e) => {
                    tracing::warn!("Counting {} failed, reporting 0: {}", slug, e);
                    0
                }
            };

            let label = if count == 1 {
                ty.labels.singular_name
            } else {
                ty.labels.name
            };

            Some(CountEntry {
                content_type: ty.slug,
                label,
                count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentType, RepositoryError, StatusCounts};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Registry and counter backed by fixed maps
    #[derive(Default)]
    struct FakeRepo {
        types: Vec<ContentType>,
        counts: HashMap<String, StatusCounts>,
        failing: Vec<String>,
        calls: RefCell<Vec<String>>,
    }

    impl ContentTypeRegistry for FakeRepo {
        fn public_content_types(&self) -> Result<Vec<String>, RepositoryError> {
            Ok(self.types.iter().map(|t| t.slug.clone()).collect())
        }

        fn content_type(&self, slug: &str) -> Option<ContentType> {
            self.types.iter().find(|t| t.slug == slug).cloned()
        }
    }

    impl StatusCounter for FakeRepo {
        fn count_by_status(&self, slug: &str) -> Result<StatusCounts, RepositoryError> {
            self.calls.borrow_mut().push(slug.to_string());
            if self.failing.iter().any(|f| f == slug) {
                return Err(RepositoryError::Unavailable("db down".to_string()));
            }
            Ok(self.counts.get(slug).cloned().unwrap_or_default())
        }
    }

    fn repo() -> FakeRepo {
        let mut counts = HashMap::new();
        counts.insert(
            "post".to_string(),
            [("publish", 3), ("draft", 2)].into_iter().collect(),
        );
        counts.insert(
            "page".to_string(),
            [("publish", 1)].into_iter().collect(),
        );
        counts.insert(
            "attachment".to_string(),
            [("inherit", 7), ("publish", 100)].into_iter().collect(),
        );
        FakeRepo {
            types: vec![
                ContentType::new("post", "Posts", "Post", true),
                ContentType::new("page", "Pages", "Page", true),
                ContentType::new("attachment", "Media", "Media Item", true),
            ],
            counts,
            ..Default::default()
        }
    }

    fn slugs(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_counted_status_rule() {
        assert_eq!(counted_status("attachment"), PostStatus::Inherit);
        assert_eq!(counted_status("post"), PostStatus::Publish);
        assert_eq!(counted_status("product"), PostStatus::Publish);
    }

    #[test]
    fn test_attachment_counts_inherit() {
        let repo = repo();
        let section = aggregate_counts(&repo, &repo, &slugs(&["post", "page", "attachment"]));

        assert_eq!(
            section,
            vec![
                CountEntry {
                    content_type: "post".to_string(),
                    label: "Posts".to_string(),
                    count: 3,
                },
                CountEntry {
                    content_type: "page".to_string(),
                    label: "Page".to_string(),
                    count: 1,
                },
                CountEntry {
                    content_type: "attachment".to_string(),
                    label: "Media".to_string(),
                    count: 7,
                },
            ]
        );
        assert_eq!(section[0].plurality(), Plurality::Other);
        assert_eq!(section[1].plurality(), Plurality::One);
    }

    #[test]
    fn test_missing_status_counts_as_zero() {
        let mut repo = repo();
        repo.counts
            .insert("post".to_string(), [("draft", 4)].into_iter().collect());
        let section = aggregate_counts(&repo, &repo, &slugs(&["post"]));

        assert_eq!(section[0].count, 0);
        assert!(section[0].is_empty());
        assert_eq!(section[0].label, "Posts");
        assert_eq!(section[0].plurality(), Plurality::Other);
    }

    #[test]
    fn test_vanished_type_is_skipped() {
        let repo = repo();
        let section = aggregate_counts(&repo, &repo, &slugs(&["post", "gone", "page"]));

        let types: Vec<_> = section.iter().map(|e| e.content_type.as_str()).collect();
        assert_eq!(types, vec!["post", "page"]);
        assert!(!repo.calls.borrow().contains(&"gone".to_string()));
    }

    #[test]
    fn test_count_failure_degrades_to_zero() {
        let mut repo = repo();
        repo.failing.push("page".to_string());
        let section = aggregate_counts(&repo, &repo, &slugs(&["post", "page"]));

        assert_eq!(section[0].count, 3);
        assert_eq!(section[1].count, 0);
        assert_eq!(section[1].label, "Pages");
    }

    #[test]
    fn test_each_type_counted_once() {
        let repo = repo();
        aggregate_counts(&repo, &repo, &slugs(&["post", "page", "attachment"]));
        assert_eq!(
            *repo.calls.borrow(),
            slugs(&["post", "page", "attachment"])
        );
    }
}
