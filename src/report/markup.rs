//! HTML markup for a built report

use super::{CountEntry, RelatedSection, Report};
use crate::helpers::{esc_attr, html_escape, kses_post};
use crate::i18n::{format_message, Arg, I18n};

const HEADING: &str = "Post Counts";
const COUNT_ONE: &str = "There is only %1$d %2$s.";
const COUNT_OTHER: &str = "There are %1$d %2$s.";
const COUNT_NONE: &str = "No %1$s found.";
const CURRENT_ID: &str = "The current post ID is %d.";
const RELATED_ONE: &str = "%1$d post with the tag of foo and the category of baz.";
const RELATED_OTHER: &str = "%1$d posts with the tag of foo and the category of baz.";

/// Render a report as an HTML fragment
pub fn render(report: &Report, i18n: &I18n, class_name: &str) -> String {
    let mut html = format!("<div class=\"{}\">\n", esc_attr(class_name));

    html.push_str(&format!(
        "<h2>{}</h2>\n<ul>\n",
        html_escape(&i18n.translate(HEADING))
    ));
    for entry in &report.counts {
        html.push_str(&format!("<li>{}</li>\n", count_message(entry, i18n)));
    }
    html.push_str("</ul>\n");

    let current = format_message(&i18n.translate(CURRENT_ID), &[Arg::Int(report.current_id)]);
    html.push_str(&format!("<p>{}</p>\n", html_escape(&current)));

    if let Some(related) = &report.related {
        render_related(&mut html, related, i18n);
    }

    html.push_str("</div>\n");
    html
}

/// The escaped text of one counts line
pub fn count_message(entry: &CountEntry, i18n: &I18n) -> String {
    let label = html_escape(&entry.label);

    if entry.is_empty() {
        return format_message(&i18n.translate(COUNT_NONE), &[Arg::Str(&label)]);
    }

    let number = i18n.format_number(entry.count);
    format_message(
        &i18n.translate_plural(COUNT_ONE, COUNT_OTHER, entry.count),
        &[Arg::Str(&number), Arg::Str(&label)],
    )
}

/// Heading text of the related section
pub fn related_heading(related: &RelatedSection, i18n: &I18n) -> String {
    let n = related.display_count as u64;
    format_message(
        &i18n.translate_plural(RELATED_ONE, RELATED_OTHER, n),
        &[Arg::Int(n)],
    )
}

fn render_related(html: &mut String, related: &RelatedSection, i18n: &I18n) {
    html.push_str(&format!(
        "<h2>{}</h2>\n<ul>\n",
        html_escape(&related_heading(related, i18n))
    ));
    for entry in &related.entries {
        html.push_str(&format!("<li>{}</li>\n", kses_post(&entry.title)));
    }
    html.push_str("</ul>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RelatedEntry;

    fn entry(label: &str, count: u64) -> CountEntry {
        CountEntry {
            content_type: "post".to_string(),
            label: label.to_string(),
            count,
        }
    }

    fn report(related: Option<RelatedSection>) -> Report {
        Report {
            current_id: 12,
            counts: vec![entry("Posts", 1234), entry("Page", 1), entry("Media", 0)],
            related,
        }
    }

    #[test]
    fn test_count_messages() {
        let i18n = I18n::default();
        assert_eq!(
            count_message(&entry("Posts", 1234), &i18n),
            "There are 1,234 Posts."
        );
        assert_eq!(
            count_message(&entry("Post", 1), &i18n),
            "There is only 1 Post."
        );
        assert_eq!(count_message(&entry("Media", 0), &i18n), "No Media found.");
        assert_eq!(
            count_message(&entry("<Docs>", 2), &i18n),
            "There are 2 &lt;Docs&gt;."
        );
    }

    #[test]
    fn test_render_full_report() {
        let related = RelatedSection {
            display_count: 2,
            entries: vec![
                RelatedEntry {
                    id: 3,
                    title: "Hello <em>there</em>".to_string(),
                },
                RelatedEntry {
                    id: 4,
                    title: "Sneaky<script>x()</script>".to_string(),
                },
            ],
        };
        let html = render(&report(Some(related)), &I18n::default(), "a\"b");

        assert_eq!(
            html,
            "<div class=\"a&quot;b\">\n\
             <h2>Post Counts</h2>\n\
             <ul>\n\
             <li>There are 1,234 Posts.</li>\n\
             <li>There is only 1 Page.</li>\n\
             <li>No Media found.</li>\n\
             </ul>\n\
             <p>The current post ID is 12.</p>\n\
             <h2>2 posts with the tag of foo and the category of baz.</h2>\n\
             <ul>\n\
             <li>Hello <em>there</em></li>\n\
             <li>Sneaky</li>\n\
             </ul>\n\
             </div>\n"
        );
    }

    #[test]
    fn test_empty_related_has_heading_but_no_items() {
        let related = RelatedSection {
            display_count: 0,
            entries: Vec::new(),
        };
        let html = render(&report(Some(related)), &I18n::default(), "");
        assert!(html.contains(
            "<h2>0 posts with the tag of foo and the category of baz.</h2>\n<ul>\n</ul>\n</div>"
        ));
        // Unlike the counts, an empty related list gets no "not found" line
        assert_eq!(html.matches("found.").count(), 1);
    }

    #[test]
    fn test_related_titles_cannot_smuggle_markup() {
        let related = RelatedSection {
            display_count: 2,
            entries: vec![
                RelatedEntry {
                    id: 3,
                    title: "<<x>script>alert(1)<</x>/script>".to_string(),
                },
                RelatedEntry {
                    id: 4,
                    title: "<<x>img src=x onerror=alert(1)>".to_string(),
                },
            ],
        };
        let html = render(&report(Some(related)), &I18n::default(), "");
        assert!(!html.contains("<script"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_singular_related_heading() {
        let related = RelatedSection {
            display_count: 1,
            entries: vec![RelatedEntry {
                id: 3,
                title: "Only one".to_string(),
            }],
        };
        assert_eq!(
            related_heading(&related, &I18n::default()),
            "1 post with the tag of foo and the category of baz."
        );
    }

    #[test]
    fn test_missing_related_section_renders_no_heading() {
        let html = render(&report(None), &I18n::default(), "");
        assert_eq!(html.matches("<h2>").count(), 1);
        assert!(html.ends_with("<p>The current post ID is 12.</p>\n</div>\n"));
    }
}
