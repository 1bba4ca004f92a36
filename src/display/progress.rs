//! Slide and progress display formatting
//!
//! Tables for `onboard status` and `onboard slides`.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::SlideDescriptor;
use crate::services::ProgressSummary;

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Slide")]
    name: String,
    #[tabled(rename = "Doctype")]
    doctype: String,
    #[tabled(rename = "Records")]
    records: usize,
    #[tabled(rename = "Status")]
    status: &'static str,
}

#[derive(Tabled)]
struct SlideRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Fields")]
    fields: String,
    #[tabled(rename = "Repeat")]
    repeat: String,
}

/// Format the progress summary with a trailing percentage line
pub fn format_status(summary: &ProgressSummary) -> String {
    let rows = summary.slides.iter().enumerate().map(|(i, slide)| StatusRow {
        index: i + 1,
        name: slide.name.clone(),
        doctype: slide.doctype.clone().unwrap_or_else(|| "-".into()),
        records: slide.records,
        status: if slide.done { "done" } else { "pending" },
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push_str(&format!(
        "\n{}/{} slides done ({}%)",
        summary.done,
        summary.slides.len(),
        summary.percent
    ));
    if summary.is_complete() {
        output.push_str("\nSetup is complete.");
    }
    output
}

/// Format slide descriptors as a table
pub fn format_slide_list(slides: &[SlideDescriptor]) -> String {
    let rows = slides.iter().enumerate().map(|(i, slide)| SlideRow {
        index: i + 1,
        name: slide.name.clone(),
        title: slide.title.clone(),
        method: slide.method.clone(),
        fields: slide
            .fields
            .iter()
            .map(|f| {
                if f.reqd {
                    format!("{}*", f.fieldname)
                } else {
                    f.fieldname.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", "),
        repeat: if slide.add_more {
            format!("up to {}", slide.max_count)
        } else {
            "-".into()
        },
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlideSet;
    use crate::services::SlideStatus;

    #[test]
    fn test_status_footer() {
        let summary = ProgressSummary {
            slides: vec![SlideStatus {
                name: "Users".into(),
                title: "Add Users".into(),
                method: "create_users".into(),
                doctype: Some("User".into()),
                records: 2,
                done: true,
            }],
            done: 1,
            percent: 100,
        };
        let output = format_status(&summary);
        assert!(output.contains("Users"));
        assert!(output.contains("1/1 slides done (100%)"));
        assert!(output.contains("Setup is complete."));
    }

    #[test]
    fn test_slide_list_marks_repeats() {
        let set = SlideSet::builtin().unwrap();
        let output = format_slide_list(&set.slides);
        assert!(output.contains("create_customers"));
        assert!(output.contains("up to 5"));
    }
}
