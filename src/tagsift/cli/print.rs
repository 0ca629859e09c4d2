use colored::Colorize;
use serde::Serialize;
use tagsift::error::Result;
use tagsift::model::{FilterResult, FilterSummary};
use tagsift::tags::Tag;

#[derive(Serialize)]
struct JsonReport<'a> {
    tags: &'a [Tag],
    summary: FilterSummary,
    results: Vec<&'a FilterResult>,
}

/// One line per shown item: `<id>. <rendered>`. Hidden items are dimmed and
/// only included with `show_hidden`.
pub(super) fn render_results(results: &[FilterResult], show_hidden: bool) -> String {
    let mut out = String::new();
    for result in results {
        let index = format!("{}.", result.id);
        if result.visible {
            out.push_str(&format!("{} {}\n", index.yellow(), result.rendered));
        } else if show_hidden {
            out.push_str(&format!(
                "{} {}\n",
                index.dimmed(),
                result.rendered.as_str().dimmed()
            ));
        }
    }
    out
}

pub(super) fn render_summary(summary: &FilterSummary, tags: &[Tag]) -> String {
    if tags.is_empty() {
        return format!("No tags, showing all {} items.", summary.total);
    }
    let tag_list = tags
        .iter()
        .map(Tag::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} of {} items match [{}].",
        summary.visible, summary.total, tag_list
    )
}

pub(super) fn render_json(
    tags: &[Tag],
    results: &[FilterResult],
    show_hidden: bool,
) -> Result<String> {
    let report = JsonReport {
        tags,
        summary: FilterSummary::from_results(results),
        results: results
            .iter()
            .filter(|r| r.visible || show_hidden)
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub(super) fn print_results(results: &[FilterResult], tags: &[Tag], show_hidden: bool) {
    print!("{}", render_results(results, show_hidden));
    let summary = FilterSummary::from_results(results);
    println!("{}", render_summary(&summary, tags).dimmed());
}

pub(super) fn print_tags(tags: &[Tag]) {
    if tags.is_empty() {
        println!("No tags.");
        return;
    }
    for (i, tag) in tags.iter().enumerate() {
        println!("{} {}", format!("{}.", i + 1).yellow(), tag);
    }
}

pub(super) fn print_success(message: &str) {
    println!("{}", message.green());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<FilterResult> {
        vec![
            FilterResult::shown("1".into(), "a [cache] here".into()),
            FilterResult::hidden("2".into(), "cats".into()),
        ]
    }

    fn tags() -> Vec<Tag> {
        vec![Tag::new("cache").unwrap()]
    }

    #[test]
    fn renders_visible_only_by_default() {
        colored::control::set_override(false);
        let out = render_results(&results(), false);
        assert_eq!(out, "1. a [cache] here\n");
    }

    #[test]
    fn renders_hidden_on_request() {
        colored::control::set_override(false);
        let out = render_results(&results(), true);
        assert_eq!(out, "1. a [cache] here\n2. cats\n");
    }

    #[test]
    fn summary_lists_tags() {
        let summary = FilterSummary::from_results(&results());
        assert_eq!(
            render_summary(&summary, &tags()),
            "1 of 2 items match [cache]."
        );
        assert_eq!(
            render_summary(&summary, &[]),
            "No tags, showing all 2 items."
        );
    }

    #[test]
    fn json_report_shape() {
        let json = render_json(&tags(), &results(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tags"][0], "cache");
        assert_eq!(value["summary"]["visible"], 1);
        assert_eq!(value["results"].as_array().unwrap().len(), 1);
        assert_eq!(value["results"][0]["id"], "1");
    }
}
