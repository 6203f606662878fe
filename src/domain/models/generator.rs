use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use thiserror::Error;

use super::GenerationRequest;
use super::ProjectSpecification;

pub type GeneratorBox = Box<dyn Generator + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GeneratorName {
    Gemini,
}

impl GeneratorName {
    pub fn parse(text: String) -> Option<GeneratorName> {
        return GeneratorName::iter().find(|name| {
            return name.to_string() == text;
        });
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Gemini API key is missing. Set --gemini-token or the SPECFORGE_GEMINI_TOKEN environment variable")]
    MissingCredential,
    #[error("no response received from Gemini")]
    EmptyResponse,
    #[error("Gemini returned a malformed specification payload: {0}")]
    MalformedResponse(String),
    #[error("request to Gemini failed: {0}")]
    NetworkFailure(#[from] reqwest::Error),
}

#[async_trait]
pub trait Generator {
    /// Identifies which provider an instance talks to.
    fn name(&self) -> GeneratorName;

    /// Sends a single schema-constrained generation call and returns the
    /// parsed specifications. One attempt per call; retrying is the
    /// caller's decision.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<ProjectSpecification>, GenerationError>;
}
