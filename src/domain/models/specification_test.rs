use anyhow::Result;

use super::ComplexityLevel;
use super::ProjectSpecification;

#[test]
fn it_deserializes_camel_case_payloads() -> Result<()> {
    let spec: ProjectSpecification = serde_json::from_str(test_utils::specification_json())?;

    assert_eq!(spec.title, "LedgerLens");
    assert_eq!(spec.complexity, ComplexityLevel::Advanced);
    assert_eq!(spec.tools_and_ai.len(), 2);
    assert_eq!(spec.target_users[0], "Treasury Operations Lead");

    return Ok(());
}

#[test]
fn it_serializes_back_to_camel_case() -> Result<()> {
    let spec: ProjectSpecification = serde_json::from_str(test_utils::specification_json())?;
    let json = serde_json::to_string(&spec)?;

    assert!(json.contains("\"shortDescription\""));
    assert!(json.contains("\"toolsAndAI\""));
    assert!(json.contains("\"implementationSteps\""));
    assert!(json.contains("\"realWorldImpact\""));

    return Ok(());
}

#[test]
fn it_rejects_payloads_with_missing_fields() {
    let res = serde_json::from_str::<ProjectSpecification>(r#"{"title": "Half a spec"}"#);
    assert!(res.is_err());
}

#[test]
fn it_rejects_unknown_complexity_labels() {
    let json = test_utils::specification_json().replace("\"Advanced\"", "\"Heroic\"");
    let res = serde_json::from_str::<ProjectSpecification>(&json);
    assert!(res.is_err());
}

#[test]
fn it_renders_clipboard_markdown() -> Result<()> {
    let spec: ProjectSpecification = serde_json::from_str(test_utils::specification_json())?;

    insta::assert_snapshot!(spec.to_markdown(), @r###"
    # LedgerLens
    **Complexity**: Advanced
    **Description**: Real-time reconciliation dashboard for mid-market trading desks.

    ## The Challenge
    Trade breaks surface hours after markets close, forcing manual spreadsheet triage.

    ## The Solution
    Stream fills and ledger entries into a matching engine that surfaces breaks as they happen.

    ## Tech Stack
    React, TypeScript, Vite, TanStack Query, Recharts

    ## Implementation
    1. Model the ledger schema
    2. Build the ingest worker
    3. Ship the dashboard
    "###);

    return Ok(());
}

#[test]
fn it_renders_a_full_document() -> Result<()> {
    let spec: ProjectSpecification = serde_json::from_str(test_utils::specification_json())?;
    let document = spec.to_document();

    assert!(document.starts_with("# LedgerLens"));
    for header in [
        "## The Challenge",
        "## The Solution",
        "## Real World Impact",
        "## Target Users",
        "## Key Features",
        "## Tech Stack",
        "## Tools & AI",
        "## Implementation",
        "## UX Tips",
        "## Security",
        "## Risks",
        "## Limitations",
    ] {
        assert!(document.contains(header), "missing section: {header}");
    }
    assert!(document.contains("- Treasury Operations Lead"));
    assert!(document.contains("1. Model the ledger schema"));

    return Ok(());
}
