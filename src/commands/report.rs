//! Print the report for one item

use anyhow::Result;
use clap::ValueEnum;

use crate::content::ItemId;
use crate::SiteCounts;

/// Output format of the report command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

/// Render the report for `current` in the requested format
pub fn render(
    site: &SiteCounts,
    current: ItemId,
    format: OutputFormat,
    class_name: Option<&str>,
) -> Result<String> {
    match format {
        OutputFormat::Html => site.render_report(current, class_name),
        OutputFormat::Json => {
            let report = site.build_report(current)?;
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

/// Print the report to stdout
pub fn run(
    site: &SiteCounts,
    current: ItemId,
    format: OutputFormat,
    class_name: Option<&str>,
) -> Result<()> {
    let output = render(site, current, format, class_name)?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::init_site;

    #[test]
    fn test_json_output() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();
        let site = SiteCounts::new(dir.path()).unwrap();

        let json = render(&site, 2, OutputFormat::Json, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["current_id"], 2);
        assert_eq!(value["counts"][0]["content_type"], "post");
        assert_eq!(value["counts"][0]["label"], "Post");
        assert_eq!(value["related"]["display_count"], 1);
        assert_eq!(value["related"]["entries"][0]["id"], 1);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::from_str("json", false), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("HTML", true), Ok(OutputFormat::Html));
        assert!(OutputFormat::from_str("xml", false).is_err());
    }
}
