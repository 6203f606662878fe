use super::GenerationRequest;

pub enum Action {
    CopyText(String),
    ExportDocument(String, String),
    Generate(u64, GenerationRequest),
}
