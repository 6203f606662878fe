use anyhow::Result;

use super::Cards;
use crate::domain::models::ProjectSpecification;

fn specs() -> Vec<ProjectSpecification> {
    return serde_json::from_str(&test_utils::specifications_json()).unwrap();
}

fn flatten(lines: &[ratatui::text::Line<'_>]) -> Vec<String> {
    return lines
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| return span.content.to_string())
                .collect::<String>();
        })
        .collect();
}

#[test]
fn it_wraps_lines_to_the_requested_width() -> Result<()> {
    let lines = Cards::as_lines(&specs(), 40);

    for line in flatten(&lines) {
        assert!(line.chars().count() <= 40, "line too wide: {line:?}");
    }

    return Ok(());
}

#[test]
fn it_renders_every_section_header() -> Result<()> {
    let text = flatten(&Cards::as_lines(&specs(), 60)).join("\n");

    for header in [
        "The Challenge",
        "The Solution",
        "Real World Impact",
        "Target Users",
        "Key Features",
        "Tech Stack",
        "Tools & AI",
        "Implementation",
        "UX Tips",
        "Security",
        "Risks",
        "Limitations",
    ] {
        assert!(text.contains(header), "missing header: {header}");
    }

    return Ok(());
}

#[test]
fn it_renders_a_title_line_per_card() -> Result<()> {
    let text = flatten(&Cards::as_lines(&specs(), 80)).join("\n");

    assert!(text.contains("LedgerLens  [Advanced]"));
    assert!(text.contains("AuditTrail Copilot  [Intermediate]"));

    return Ok(());
}

#[test]
fn it_divides_cards_with_a_rule() -> Result<()> {
    let lines = flatten(&Cards::as_lines(&specs(), 30));

    let dividers = lines
        .iter()
        .filter(|line| return line.chars().count() == 30 && line.chars().all(|c| return c == '─'))
        .count();

    assert_eq!(dividers, 1);

    return Ok(());
}

#[test]
fn it_prefixes_list_and_step_items() -> Result<()> {
    let text = flatten(&Cards::as_lines(&specs(), 80)).join("\n");

    assert!(text.contains("- Treasury Operations Lead"));
    assert!(text.contains("1. Model the ledger schema"));

    return Ok(());
}

#[test]
fn it_joins_markdown_for_the_clipboard() -> Result<()> {
    let markdown = Cards::as_markdown(&specs());

    assert!(markdown.starts_with("# LedgerLens"));
    assert!(markdown.contains("\n\n---\n\n# AuditTrail Copilot"));

    return Ok(());
}
