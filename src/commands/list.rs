//! List site content

use anyhow::Result;

use crate::content::{ContentTypeRegistry, StatusCounter};
use crate::report::counted_status;
use crate::SiteCounts;

/// List site content by kind
pub fn run(site: &SiteCounts, kind: &str) -> Result<()> {
    let repo = site.load_repository()?;

    match kind {
        "type" | "types" => {
            println!("Content types ({}):", repo.types().len());
            for ty in repo.types() {
                let counts = repo.count_by_status(&ty.slug)?;
                let breakdown: Vec<String> = counts
                    .iter()
                    .map(|(status, n)| format!("{}={}", status, n))
                    .collect();
                println!(
                    "  {} ({}){} counted as {} [{}]",
                    ty.slug,
                    ty.labels.name,
                    if ty.public { "" } else { " hidden," },
                    counted_status(&ty.slug),
                    breakdown.join(", ")
                );
            }
            tracing::debug!("Public types: {:?}", repo.public_content_types()?);
        }
        "item" | "items" => {
            println!("Items ({}):", repo.items().len());
            let mut items: Vec<_> = repo.items().iter().collect();
            items.sort_by_key(|i| i.id);
            for item in items {
                println!(
                    "  #{} {} - {} {} [{}] {}",
                    item.id,
                    item.date.format("%Y-%m-%d %H:%M"),
                    item.content_type,
                    item.status,
                    item.source,
                    item.title
                );
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: types, items", kind);
        }
    }

    Ok(())
}
