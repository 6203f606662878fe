pub mod gemini;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::GeneratorBox;
use crate::domain::models::GeneratorName;

pub struct GeneratorManager {}

impl GeneratorManager {
    pub fn get(name: &str) -> Result<GeneratorBox> {
        if let Some(generator_name) = GeneratorName::parse(name.to_string()) {
            match generator_name {
                GeneratorName::Gemini => return Ok(Box::<gemini::Gemini>::default()),
            }
        }

        bail!(format!("No generator implemented for {name}"))
    }
}
