#[cfg(test)]
#[path = "request_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;

/// Substituted for the focus area when the user leaves the field blank.
pub const DEFAULT_FOCUS_AREA: &str = "Modern Tech Stack";

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, strum::Display, Serialize, Deserialize)]
pub enum Industry {
    #[strum(serialize = "AI & Machine Learning")]
    AiMl,
    #[strum(serialize = "Web Application")]
    WebApp,
    Cybersecurity,
    #[strum(serialize = "Blockchain & Web3")]
    Blockchain,
    #[strum(serialize = "Internet of Things (IoT)")]
    Iot,
    #[strum(serialize = "AR / VR / Metaverse")]
    ArVr,
    #[strum(serialize = "Data & Analytics")]
    DataAnalytics,
    FinTech,
    Healthcare,
    #[strum(serialize = "E-Commerce")]
    ECommerce,
    EdTech,
    #[strum(serialize = "Social & Collaboration")]
    Social,
    #[strum(serialize = "Cloud & Infrastructure")]
    CloudInfra,
    #[strum(serialize = "Embedded Systems")]
    Embedded,
    #[strum(serialize = "DevOps & Automation")]
    DevOps,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, strum::Display, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Intermediate,
    Advanced,
    Expert,
}

/// The normalized tuple sent to the generation service. Built once through
/// [`GenerationRequest::build`] and never mutated afterwards; regenerate
/// reuses the stored value verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub industry: Industry,
    pub complexity: ComplexityLevel,
    pub focus_area: String,
}

impl GenerationRequest {
    pub fn build(
        industry: Industry,
        complexity: ComplexityLevel,
        raw_focus_area: &str,
    ) -> GenerationRequest {
        let mut focus_area = raw_focus_area.trim().to_string();
        if focus_area.is_empty() {
            focus_area = DEFAULT_FOCUS_AREA.to_string();
        }

        return GenerationRequest {
            industry,
            complexity,
            focus_area,
        };
    }

    /// Renders the instruction the generation service receives. The
    /// constraint list is fixed; only the three request fields vary.
    pub fn to_prompt(&self) -> String {
        return format!(
            r#"Act as a Senior Principal Software Architect.
Create 2 comprehensive technical specifications for React web applications tailored to the following requirements:

Target Industry: {industry}
Complexity Level: {complexity}
Technical Focus: {focus}

Constraints:
1. REAL WORLD PROBLEMS ONLY. Focus on complex workflows, data visualization, real-time collaboration, or system optimization.
2. The "Tech Architecture" must include modern, specific libraries.
3. **Target Users**: Define specific user personas (e.g., "Radiology Department Head", "High-Frequency Trader").
4. **Suggested Tools**: Recommend external tools, APIs, or AI models to accelerate dev (e.g. "Sentry for monitoring", "Gemini API for summarization").
5. **Risk & Security**: Provide real analysis on risks (e.g. "GDPR Compliance") and security (e.g. "End-to-end encryption").
6. **Implementation**: A concrete step-by-step roadmap.
7. **Future**: Limitations of the MVP and future scale-up ideas."#,
            industry = self.industry,
            complexity = self.complexity,
            focus = self.focus_area
        );
    }

    /// Short label used by the history sidebar and `history list`.
    pub fn summary(&self) -> String {
        return format!("{} / {}", self.industry, self.complexity);
    }
}
