use strum::IntoEnumIterator;

use super::ComplexityLevel;
use super::GenerationRequest;
use super::Industry;
use super::DEFAULT_FOCUS_AREA;

#[test]
fn it_keeps_a_provided_focus_area() {
    let request = GenerationRequest::build(
        Industry::FinTech,
        ComplexityLevel::Advanced,
        "Latency-sensitive order routing",
    );

    assert_eq!(request.industry, Industry::FinTech);
    assert_eq!(request.complexity, ComplexityLevel::Advanced);
    assert_eq!(request.focus_area, "Latency-sensitive order routing");
}

#[test]
fn it_defaults_an_empty_focus_area() {
    let request = GenerationRequest::build(Industry::FinTech, ComplexityLevel::Advanced, "");
    assert_eq!(request.focus_area, DEFAULT_FOCUS_AREA);
}

#[test]
fn it_defaults_a_whitespace_focus_area() {
    let request = GenerationRequest::build(Industry::Healthcare, ComplexityLevel::Expert, "   \t ");
    assert_eq!(request.focus_area, DEFAULT_FOCUS_AREA);
}

#[test]
fn it_trims_a_padded_focus_area() {
    let request =
        GenerationRequest::build(Industry::EdTech, ComplexityLevel::Intermediate, "  GraphQL  ");
    assert_eq!(request.focus_area, "GraphQL");
}

#[test]
fn it_embeds_every_field_in_the_prompt() {
    let request = GenerationRequest::build(
        Industry::Iot,
        ComplexityLevel::Expert,
        "Edge telemetry pipelines",
    );
    let prompt = request.to_prompt();

    assert!(prompt.contains("Target Industry: Internet of Things (IoT)"));
    assert!(prompt.contains("Complexity Level: Expert"));
    assert!(prompt.contains("Technical Focus: Edge telemetry pipelines"));
    assert!(prompt.starts_with("Act as a Senior Principal Software Architect."));
}

#[test]
fn it_displays_industry_labels() {
    assert_eq!(Industry::AiMl.to_string(), "AI & Machine Learning");
    assert_eq!(Industry::ArVr.to_string(), "AR / VR / Metaverse");
    assert_eq!(Industry::ECommerce.to_string(), "E-Commerce");
    assert_eq!(Industry::FinTech.to_string(), "FinTech");
    assert_eq!(Industry::CloudInfra.to_string(), "Cloud & Infrastructure");
}

#[test]
fn it_lists_fifteen_industries() {
    assert_eq!(Industry::iter().count(), 15);
}

#[test]
fn it_builds_a_summary_label() {
    let request = GenerationRequest::build(Industry::DevOps, ComplexityLevel::Intermediate, "");
    assert_eq!(request.summary(), "DevOps & Automation / Intermediate");
}
