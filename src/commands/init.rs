//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

const CONFIG: &str = r#"# Site Counts configuration

# Site
title: Site Counts
language: en

# Directory
source_dir: source
i18n_dir: languages

# Report block
class_name: ''

# Content types, in the order they are reported
content_types:
  - slug: post
    name: Posts
    singular_name: Post
  - slug: page
    name: Pages
    singular_name: Page
  - slug: attachment
    name: Media
    singular_name: Media
  - slug: revision
    name: Revisions
    singular_name: Revision
    public: false
"#;

const LANGUAGE_EN: &str = r#"# Source message -> translation
"Post Counts": "Post Counts"
"There is only %1$d %2$s.":
  one: "There is only %1$d %2$s."
  other: "There are %1$d %2$s."
"%1$d post with the tag of foo and the category of baz.":
  one: "%1$d post with the tag of foo and the category of baz."
  other: "%1$d posts with the tag of foo and the category of baz."
number_format:
  thousands_sep: ","
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    fs::create_dir_all(target_dir.join("source/_posts"))?;
    fs::create_dir_all(target_dir.join("source/_drafts"))?;
    fs::create_dir_all(target_dir.join("source/_media"))?;
    fs::create_dir_all(target_dir.join("languages"))?;

    fs::write(&config_path, CONFIG)?;
    fs::write(target_dir.join("languages/en.yml"), LANGUAGE_EN)?;

    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
id: 1
title: Hello World
date: {}
tags: foo
categories: baz
---

Posts tagged `foo` in the `baz` category, published between 09:00 and
17:59, show up in the related list of other posts' reports.
"#,
        now.format("%Y-%m-%d 10:00:00")
    );
    fs::write(target_dir.join("source/_posts/hello-world.md"), sample_post)?;

    let about = r#"---
id: 2
title: About
---
"#;
    fs::create_dir_all(target_dir.join("source/about"))?;
    fs::write(target_dir.join("source/about/index.md"), about)?;

    tracing::debug!("Initialized site in {:?}", target_dir);
    Ok(())
}
