#[cfg(test)]
#[path = "cards_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::ProjectSpecification;

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = vec![];
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    return lines;
}

fn push_header(lines: &mut Vec<Line<'static>>, text: &str) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        text.to_string(),
        Style {
            fg: Some(Color::Cyan),
            add_modifier: Modifier::BOLD,
            ..Style::default()
        },
    )));
}

fn push_paragraph(lines: &mut Vec<Line<'static>>, header: &str, body: &str, width: usize) {
    push_header(lines, header);
    for line in wrap(body, width) {
        lines.push(Line::from(line));
    }
}

fn push_list(lines: &mut Vec<Line<'static>>, header: &str, items: &[String], width: usize) {
    push_header(lines, header);
    for item in items {
        for (idx, line) in wrap(item, width.saturating_sub(2)).iter().enumerate() {
            let prefix = if idx == 0 { "- " } else { "  " };
            lines.push(Line::from(format!("{prefix}{line}")));
        }
    }
}

fn push_numbered(lines: &mut Vec<Line<'static>>, header: &str, items: &[String], width: usize) {
    push_header(lines, header);
    for (n, item) in items.iter().enumerate() {
        let prefix = format!("{}. ", n + 1);
        for (idx, line) in wrap(item, width.saturating_sub(prefix.len()))
            .iter()
            .enumerate()
        {
            if idx == 0 {
                lines.push(Line::from(format!("{prefix}{line}")));
            } else {
                lines.push(Line::from(format!("{}{line}", " ".repeat(prefix.len()))));
            }
        }
    }
}

pub struct Cards {}

impl Cards {
    /// Flattens specifications into styled lines wrapped to `width`, ready
    /// for a scrolled paragraph.
    pub fn as_lines(specs: &[ProjectSpecification], width: usize) -> Vec<Line<'static>> {
        let width = width.max(20);
        let mut lines: Vec<Line<'static>> = vec![];

        for (idx, spec) in specs.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::from(""));
                lines.push(Line::from("─".repeat(width)));
                lines.push(Line::from(""));
            }

            lines.push(Line::from(vec![
                Span::styled(
                    spec.title.clone(),
                    Style {
                        fg: Some(Color::LightGreen),
                        add_modifier: Modifier::BOLD,
                        ..Style::default()
                    },
                ),
                Span::from("  "),
                Span::styled(
                    format!("[{}]", spec.complexity),
                    Style {
                        fg: Some(Color::Yellow),
                        ..Style::default()
                    },
                ),
            ]));

            for line in wrap(&spec.short_description, width) {
                lines.push(Line::from(Span::styled(
                    line,
                    Style {
                        add_modifier: Modifier::ITALIC,
                        ..Style::default()
                    },
                )));
            }

            push_paragraph(&mut lines, "The Challenge", &spec.problem, width);
            push_paragraph(&mut lines, "The Solution", &spec.solution, width);
            push_paragraph(&mut lines, "Real World Impact", &spec.real_world_impact, width);
            push_list(&mut lines, "Target Users", &spec.target_users, width);
            push_list(&mut lines, "Key Features", &spec.features, width);
            push_paragraph(&mut lines, "Tech Stack", &spec.tech_stack.join(", "), width);
            push_list(&mut lines, "Tools & AI", &spec.tools_and_ai, width);
            push_numbered(&mut lines, "Implementation", &spec.implementation_steps, width);
            push_list(&mut lines, "UX Tips", &spec.user_experience_tips, width);
            push_list(&mut lines, "Security", &spec.security, width);
            push_list(&mut lines, "Risks", &spec.risks, width);
            push_list(&mut lines, "Limitations", &spec.limitations, width);
        }

        return lines;
    }

    /// Clipboard payload for the whole result set.
    pub fn as_markdown(specs: &[ProjectSpecification]) -> String {
        return specs
            .iter()
            .map(|spec| return spec.to_markdown())
            .collect::<Vec<String>>()
            .join("\n\n---\n\n");
    }

    /// File export payload for the whole result set.
    pub fn as_document(specs: &[ProjectSpecification]) -> String {
        return specs
            .iter()
            .map(|spec| return spec.to_document())
            .collect::<Vec<String>>()
            .join("\n\n---\n\n");
    }
}
