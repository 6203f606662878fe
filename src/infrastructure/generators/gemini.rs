#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;

use std::time::Duration;

use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::json;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::GenerationError;
use crate::domain::models::GenerationRequest;
use crate::domain::models::Generator;
use crate::domain::models::GeneratorName;
use crate::domain::models::ProjectSpecification;

/// Schema attached to every request so Gemini answers with a JSON array of
/// specifications instead of prose. Field names must match
/// [`ProjectSpecification`].
fn response_schema() -> serde_json::Value {
    return json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING", "description": "Catchy, professional project name" },
                "shortDescription": { "type": "STRING", "description": "One sentence pitch" },
                "problem": { "type": "STRING", "description": "The specific real-world business problem being solved" },
                "solution": { "type": "STRING", "description": "How the app solves it technically" },
                "targetUsers": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Specific user personas who would use this app" },
                "features": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Key technical features" },
                "techStack": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Specific libraries and tools" },
                "toolsAndAI": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Recommended external tools, APIs or AI models to help build and run it" },
                "implementationSteps": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Step by step guide to build the MVP" },
                "userExperienceTips": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "UX considerations for the target users" },
                "security": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Security measures and considerations" },
                "risks": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Project risks and mitigation strategies" },
                "limitations": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Current limitations and future improvements" },
                "complexity": { "type": "STRING", "description": "Intermediate, Advanced, or Expert" },
                "realWorldImpact": { "type": "STRING", "description": "How this project impacts the industry" }
            },
            "required": [
                "title", "shortDescription", "problem", "solution", "targetUsers",
                "features", "techStack", "toolsAndAI", "implementationSteps",
                "userExperienceTips", "security", "risks", "limitations",
                "complexity", "realWorldImpact"
            ]
        }
    });
}

#[derive(Debug, Clone, Serialize)]
struct ContentPart {
    text: String,
}

#[derive(Debug, Clone, Serialize)]
struct Content {
    role: String,
    parts: Vec<ContentPart>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletionRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct ResponseCandidate {
    #[serde(default)]
    content: ResponseContent,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

pub struct Gemini {
    url: String,
    token: String,
    timeout: String,
    model: String,
}

impl Default for Gemini {
    fn default() -> Gemini {
        return Gemini {
            url: Config::get(ConfigKey::GeminiURL),
            token: Config::get(ConfigKey::GeminiToken),
            timeout: Config::get(ConfigKey::RequestTimeout),
            model: Config::get(ConfigKey::Model),
        };
    }
}

#[async_trait]
impl Generator for Gemini {
    fn name(&self) -> GeneratorName {
        return GeneratorName::Gemini;
    }

    #[allow(clippy::implicit_return)]
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<ProjectSpecification>, GenerationError> {
        if self.token.is_empty() {
            return Err(GenerationError::MissingCredential);
        }

        let req = CompletionRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![ContentPart {
                    text: request.to_prompt(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        };

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/v1beta/models/{model}:generateContent?key={key}",
                url = self.url,
                model = self.model,
                key = self.token,
            ))
            .timeout(Duration::from_millis(
                self.timeout.parse::<u64>().unwrap_or(120000),
            ))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make generation request to Gemini"
            );
        }
        let payload = res.error_for_status()?.text().await?;

        let envelope = serde_json::from_str::<GenerateContentResponse>(&payload)
            .map_err(|err| return GenerationError::MalformedResponse(err.to_string()))?;

        let text = envelope
            .candidates
            .first()
            .map(|candidate| {
                return candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| return part.text.as_str())
                    .collect::<String>();
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        let specs = serde_json::from_str::<Vec<ProjectSpecification>>(&text)
            .map_err(|err| return GenerationError::MalformedResponse(err.to_string()))?;

        if specs.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        tracing::debug!(count = specs.len(), "Gemini generation succeeded");
        return Ok(specs);
    }
}
