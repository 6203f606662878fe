use anyhow::Result;
use chrono::Local;
use tokio::fs;
use tokio::sync::mpsc;

use super::clipboard::ClipboardService;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::infrastructure::generators::GeneratorManager;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Enter - Continue from the landing screen, or submit the current briefing.
- Up/Down arrows - Move through industries, or scroll the results.
- Left/Right arrows - Cycle the complexity level.
- Page Up/Page Down - Page through the results.
- CTRL+R - Regenerate specifications for the last briefing.
- CTRL+Y - Copy the current specifications to the clipboard as markdown.
- CTRL+E - Export the current specifications to a markdown file.
- CTRL+P / CTRL+N - Move through saved history entries.
- CTRL+O - Open the selected history entry.
- CTRL+L - Clear saved history. Press twice to confirm.
- CTRL+G - Start a new briefing.
- CTRL+D - Show developer info.
- ESC - Leave developer info.
- CTRL+C - Quit.
        "#;

    return text.trim().to_string();
}

fn copy_text(text: String, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    if let Err(err) = ClipboardService::set(text) {
        tracing::error!(error = ?err, "Failed to copy to the clipboard");
        tx.send(Event::Notice(format!("Copy failed: {err}")))?;
        return Ok(());
    }

    tx.send(Event::Notice(
        "Copied specifications to clipboard.".to_string(),
    ))?;

    return Ok(());
}

async fn export_document(
    stem: String,
    contents: String,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let filename = format!("{stem}-{}.md", Local::now().format("%Y%m%d-%H%M%S"));

    if let Err(err) = fs::write(&filename, contents).await {
        tracing::error!(error = ?err, "Failed to export specifications");
        tx.send(Event::Notice(format!("Export failed: {err}")))?;
        return Ok(());
    }

    tx.send(Event::Notice(format!(
        "Exported specifications to {filename}."
    )))?;

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let event = rx.recv().await;
            if event.is_none() {
                continue;
            }

            let worker_tx = tx.clone();
            match event.unwrap() {
                Action::CopyText(text) => {
                    copy_text(text, &tx)?;
                }
                Action::ExportDocument(stem, contents) => {
                    export_document(stem, contents, &tx).await?;
                }
                Action::Generate(seq, request) => {
                    tokio::spawn(async move {
                        let generator = match GeneratorManager::get(&Config::get(ConfigKey::Generator)) {
                            Ok(generator) => generator,
                            Err(err) => {
                                worker_tx.send(Event::GenerationFailed(seq, err.to_string()))?;
                                return Ok::<(), anyhow::Error>(());
                            }
                        };

                        match generator.generate(&request).await {
                            Ok(specifications) => {
                                worker_tx.send(Event::GenerationCompleted(
                                    seq,
                                    request,
                                    specifications,
                                ))?;
                            }
                            Err(err) => {
                                tracing::error!(error = ?err, "Generation request failed");
                                worker_tx.send(Event::GenerationFailed(seq, err.to_string()))?;
                            }
                        }

                        return Ok(());
                    });
                }
            }
        }
    }
}
