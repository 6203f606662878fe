#[cfg(test)]
#[path = "specification_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::ComplexityLevel;

/// One generated project blueprint as returned by the generation service.
/// Field names mirror the JSON schema sent with every request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpecification {
    pub title: String,
    pub short_description: String,
    pub problem: String,
    pub solution: String,
    pub target_users: Vec<String>,
    pub features: Vec<String>,
    pub tech_stack: Vec<String>,
    #[serde(rename = "toolsAndAI")]
    pub tools_and_ai: Vec<String>,
    pub implementation_steps: Vec<String>,
    pub user_experience_tips: Vec<String>,
    pub security: Vec<String>,
    pub risks: Vec<String>,
    pub limitations: Vec<String>,
    pub complexity: ComplexityLevel,
    pub real_world_impact: String,
}

fn bullets(items: &[String]) -> String {
    return items
        .iter()
        .map(|item| return format!("- {item}"))
        .collect::<Vec<String>>()
        .join("\n");
}

fn numbered(items: &[String]) -> String {
    return items
        .iter()
        .enumerate()
        .map(|(idx, item)| return format!("{}. {item}", idx + 1))
        .collect::<Vec<String>>()
        .join("\n");
}

impl ProjectSpecification {
    /// Compact markdown summary placed on the clipboard.
    pub fn to_markdown(&self) -> String {
        return format!(
            r#"# {title}
**Complexity**: {complexity}
**Description**: {description}

## The Challenge
{problem}

## The Solution
{solution}

## Tech Stack
{tech_stack}

## Implementation
{steps}"#,
            title = self.title,
            complexity = self.complexity,
            description = self.short_description,
            problem = self.problem,
            solution = self.solution,
            tech_stack = self.tech_stack.join(", "),
            steps = numbered(&self.implementation_steps)
        );
    }

    /// Full markdown document covering every field, used for file exports.
    pub fn to_document(&self) -> String {
        return format!(
            r#"# {title}
**Complexity**: {complexity}
**Description**: {description}

## The Challenge
{problem}

## The Solution
{solution}

## Real World Impact
{impact}

## Target Users
{target_users}

## Key Features
{features}

## Tech Stack
{tech_stack}

## Tools & AI
{tools}

## Implementation
{steps}

## UX Tips
{ux_tips}

## Security
{security}

## Risks
{risks}

## Limitations
{limitations}"#,
            title = self.title,
            complexity = self.complexity,
            description = self.short_description,
            problem = self.problem,
            solution = self.solution,
            impact = self.real_world_impact,
            target_users = bullets(&self.target_users),
            features = bullets(&self.features),
            tech_stack = self.tech_stack.join(", "),
            tools = bullets(&self.tools_and_ai),
            steps = numbered(&self.implementation_steps),
            ux_tips = bullets(&self.user_experience_tips),
            security = bullets(&self.security),
            risks = bullets(&self.risks),
            limitations = bullets(&self.limitations)
        );
    }
}
