//! Content type registry entries and per-type status counts

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Display labels of a content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeLabels {
    /// Plural display name ("Posts")
    pub name: String,
    /// Singular display name ("Post")
    pub singular_name: String,
}

/// A registered kind of storable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    pub slug: String,
    #[serde(flatten)]
    pub labels: TypeLabels,
    #[serde(default = "default_public")]
    pub public: bool,
}

fn default_public() -> bool {
    true
}

impl ContentType {
    pub fn new(slug: &str, name: &str, singular_name: &str, public: bool) -> Self {
        Self {
            slug: slug.to_string(),
            labels: TypeLabels {
                name: name.to_string(),
                singular_name: singular_name.to_string(),
            },
            public,
        }
    }

    /// The built-in types every site has
    pub fn defaults() -> Vec<ContentType> {
        vec![
            ContentType::new("post", "Posts", "Post", true),
            ContentType::new("page", "Pages", "Page", true),
            ContentType::new("attachment", "Media", "Media", true),
            ContentType::new("revision", "Revisions", "Revision", false),
        ]
    }
}

/// Status name -> number of items, for one content type
///
/// Keys keep insertion order so listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCounts(IndexMap<String, u64>);

impl StatusCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a status, if the status is present at all
    pub fn get(&self, status: &str) -> Option<u64> {
        self.0.get(status).copied()
    }

    /// Add one item with the given status
    pub fn increment(&mut self, status: &str) {
        *self.0.entry(status.to_string()).or_insert(0) += 1;
    }

    pub fn insert(&mut self, status: &str, count: u64) {
        self.0.insert(status.to_string(), count);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, u64)> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut counts = StatusCounts::new();
        for (status, count) in iter {
            counts.insert(status, count);
        }
        counts
    }
}
