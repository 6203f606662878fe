use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::KeyCode;
use crossterm::event::KeyModifiers;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Margin;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Frame;
use ratatui::Terminal;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::ComplexityLevel;
use crate::domain::models::Event;
use crate::domain::models::GenerationRequest;
use crate::domain::models::Industry;
use crate::domain::models::View;
use crate::domain::models::DEFAULT_FOCUS_AREA;
use crate::domain::services::events::EventsService;
use crate::domain::services::Cards;
use crate::domain::services::HistoryStore;
use crate::domain::services::Scroll;
use crate::domain::services::SessionController;

const LOADING_MESSAGES: [&str; 5] = [
    "Analyzing industry pain points...",
    "Consulting with virtual architects...",
    "Drafting technical blueprints...",
    "Evaluating security vectors...",
    "Finalizing implementation steps...",
];

const FOCUS_INPUT_LIMIT: usize = 100;

#[derive(Default)]
struct UiState {
    focus_input: String,
    industry_idx: usize,
    complexity_idx: usize,
    history_idx: Option<usize>,
    notice: Option<String>,
    pending_clear: bool,
    loading_frame: usize,
    scroll: Scroll,
}

fn section(text: &str) -> Line<'static> {
    return Line::from(Span::styled(
        text.to_string(),
        Style {
            fg: Some(Color::Cyan),
            add_modifier: Modifier::BOLD,
            ..Style::default()
        },
    ));
}

fn dim(text: &str) -> Span<'static> {
    return Span::styled(
        text.to_string(),
        Style {
            fg: Some(Color::DarkGray),
            ..Style::default()
        },
    );
}

fn export_stem(summary: &str) -> String {
    let slug = summary
        .to_lowercase()
        .split(|c: char| return !c.is_ascii_alphanumeric())
        .filter(|part| return !part.is_empty())
        .collect::<Vec<&str>>()
        .join("-");

    if slug.is_empty() {
        return "specifications".to_string();
    }

    return slug;
}

fn sync_form(state: &mut UiState, request: &GenerationRequest) {
    state.industry_idx = Industry::iter()
        .position(|industry| return industry == request.industry)
        .unwrap_or(0);
    state.complexity_idx = ComplexityLevel::iter()
        .position(|level| return level == request.complexity)
        .unwrap_or(0);
    state.focus_input = request.focus_area.to_string();
}

fn draw_landing<B: Backend>(frame: &mut Frame<'_, B>, rect: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Percentage(35),
            Constraint::Min(9),
            Constraint::Percentage(35),
        ])
        .split(rect);

    let lines = vec![
        Line::from(Span::styled(
            "SPECFORGE",
            Style {
                fg: Some(Color::LightGreen),
                add_modifier: Modifier::BOLD,
                ..Style::default()
            },
        )),
        Line::from(""),
        Line::from("Generate complete project specifications from a short briefing."),
        Line::from(""),
        Line::from(dim("Press Enter to begin. Press q to quit.")),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .padding(Padding::new(1, 1, 0, 0)),
        ),
        layout[1],
    );
}

fn draw_history<B: Backend>(
    frame: &mut Frame<'_, B>,
    rect: Rect,
    controller: &SessionController,
    state: &UiState,
) {
    let mut lines: Vec<Line<'static>> = vec![];
    if controller.history.is_empty() {
        lines.push(Line::from(dim("No history yet.")));
    }

    let width = rect.width.saturating_sub(2) as usize;
    for (idx, entry) in controller.history.iter().enumerate() {
        let mut prefix = "  ";
        if controller.active_history_id.as_deref() == Some(entry.id.as_str()) {
            prefix = "* ";
        }

        let label = format!("{prefix}{}", entry.label())
            .chars()
            .take(width)
            .collect::<String>();

        let mut style = Style::default();
        if state.history_idx == Some(idx) {
            style = Style {
                add_modifier: Modifier::REVERSED,
                ..Style::default()
            };
        }

        lines.push(Line::from(Span::styled(label, style)));
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" History ")),
        rect,
    );
}

fn draw_form<B: Backend>(frame: &mut Frame<'_, B>, rect: Rect, state: &UiState) {
    let industries = Industry::iter().collect::<Vec<Industry>>();
    let complexities = ComplexityLevel::iter().collect::<Vec<ComplexityLevel>>();

    let mut focus_line = Line::from(format!("  {}_", state.focus_input));
    if state.focus_input.is_empty() {
        focus_line = Line::from(Span::styled(
            format!("  {DEFAULT_FOCUS_AREA} (default)"),
            Style {
                fg: Some(Color::DarkGray),
                add_modifier: Modifier::ITALIC,
                ..Style::default()
            },
        ));
    }

    let lines = vec![
        section("Industry"),
        Line::from(format!(
            "  < {} >  ({}/{})",
            industries[state.industry_idx],
            state.industry_idx + 1,
            industries.len()
        )),
        Line::from(""),
        section("Complexity"),
        Line::from(format!("  < {} >", complexities[state.complexity_idx])),
        Line::from(""),
        section("Technical Focus"),
        focus_line,
        Line::from(""),
        Line::from(dim(
            "Enter submits the briefing and generates two specifications.",
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" New Briefing ")
                .padding(Padding::new(1, 1, 0, 0)),
        ),
        rect,
    );
}

fn draw_results<B: Backend>(
    frame: &mut Frame<'_, B>,
    rect: Rect,
    controller: &SessionController,
    state: &mut UiState,
) {
    let width = rect.width.saturating_sub(4) as usize;
    let lines = Cards::as_lines(&controller.current_result, width);
    state.scroll
        .set_state(lines.len() as u16, rect.height.saturating_sub(2));

    let mut title = " Results ".to_string();
    if let Some(request) = &controller.last_request {
        title = format!(" {} ", request.summary());
    }

    frame.render_widget(
        Paragraph::new(lines)
            .scroll((state.scroll.position, 0))
            .block(Block::default().borders(Borders::ALL).title(title)),
        rect,
    );

    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        rect.inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut state.scroll.scrollbar_state,
    );
}

fn draw_developer<B: Backend>(frame: &mut Frame<'_, B>, rect: Rect, controller: &SessionController) {
    let log_path = dirs::cache_dir().unwrap().join("specforge/debug.log");
    let mut last_briefing = "None".to_string();
    if let Some(request) = &controller.last_request {
        last_briefing = format!("{}, focus: {}", request.summary(), request.focus_area);
    }

    let lines = vec![
        Line::from(format!(
            "Version: {} ({})",
            env!("CARGO_PKG_VERSION"),
            env!("VERGEN_GIT_DESCRIBE")
        )),
        Line::from(""),
        Line::from(format!("Generator: {}", Config::get(ConfigKey::Generator))),
        Line::from(format!("Model: {}", Config::get(ConfigKey::Model))),
        Line::from(format!("Gemini URL: {}", Config::get(ConfigKey::GeminiURL))),
        Line::from(format!(
            "Request timeout: {}ms",
            Config::get(ConfigKey::RequestTimeout)
        )),
        Line::from(""),
        Line::from(format!("History entries: {}", controller.history.len())),
        Line::from(format!(
            "Loaded specifications: {}",
            controller.current_result.len()
        )),
        Line::from(format!("Last briefing: {last_briefing}")),
        Line::from(""),
        Line::from(format!("Log file: {}", log_path.to_string_lossy())),
        Line::from(""),
        Line::from(dim("ESC returns to the briefing form.")),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Developer Info ")
                .padding(Padding::new(1, 1, 0, 0)),
        ),
        rect,
    );
}

fn draw_footer<B: Backend>(
    frame: &mut Frame<'_, B>,
    rect: Rect,
    controller: &SessionController,
    state: &UiState,
) {
    let mut status = Line::from("");
    if controller.loading {
        status = Line::from(Span::styled(
            LOADING_MESSAGES[(state.loading_frame / 4) % LOADING_MESSAGES.len()].to_string(),
            Style {
                fg: Some(Color::Yellow),
                ..Style::default()
            },
        ));
    } else if let Some(error) = &controller.error {
        status = Line::from(Span::styled(
            format!("Error: {error}"),
            Style {
                fg: Some(Color::Red),
                ..Style::default()
            },
        ));
    } else if let Some(notice) = &state.notice {
        status = Line::from(Span::styled(
            notice.to_string(),
            Style {
                fg: Some(Color::Green),
                ..Style::default()
            },
        ));
    }

    let hints = match controller.view {
        View::Landing => "Enter: begin  q: quit",
        View::Home => {
            "Enter: generate  Up/Down: industry  Left/Right: complexity  CTRL+O: open history  CTRL+C: quit"
        }
        View::Results => {
            "CTRL+Y: copy  CTRL+E: export  CTRL+R: regenerate  CTRL+G: new briefing  CTRL+C: quit"
        }
        View::Developer => "ESC: back  CTRL+C: quit",
    };

    let lines = vec![status, Line::from(dim(hints))];
    frame.render_widget(Paragraph::new(lines), rect);
}

fn draw<B: Backend>(frame: &mut Frame<'_, B>, controller: &SessionController, state: &mut UiState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Max(2)])
        .split(frame.size());

    match controller.view {
        View::Landing => {
            draw_landing(frame, layout[0]);
        }
        View::Developer => {
            draw_developer(frame, layout[0], controller);
        }
        View::Home | View::Results => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Max(32), Constraint::Min(1)])
                .split(layout[0]);

            draw_history(frame, columns[0], controller, state);
            if controller.view == View::Home {
                draw_form(frame, columns[1], state);
            } else {
                draw_results(frame, columns[1], controller, state);
            }
        }
    }

    draw_footer(frame, layout[1], controller, state);
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut SessionController,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut state = UiState::default();

    let history_id = Config::get(ConfigKey::HistoryID);
    if !history_id.is_empty() && controller.load_from_history(&history_id) {
        if let Some(request) = controller.last_request.clone() {
            sync_form(&mut state, &request);
        }
        state.history_idx = controller
            .history
            .iter()
            .position(|entry| return entry.id == history_id);
    }

    loop {
        terminal.draw(|frame| {
            draw(frame, controller, &mut state);
        })?;

        match events.next().await? {
            Event::GenerationCompleted(seq, request, specifications) => {
                controller
                    .complete_generation(seq, request, specifications)
                    .await;
                state.history_idx = None;
                state.scroll.reset();
            }
            Event::GenerationFailed(seq, message) => {
                controller.fail_generation(seq, message);
            }
            Event::Notice(text) => {
                state.notice = Some(text);
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCTRLR() => {
                if let Some((seq, request)) = controller.regenerate() {
                    state.notice = None;
                    tx.send(Action::Generate(seq, request))?;
                }
            }
            Event::KeyboardEnter() => match controller.view {
                View::Landing => {
                    controller.start();
                }
                View::Home => {
                    let industries = Industry::iter().collect::<Vec<Industry>>();
                    let complexities = ComplexityLevel::iter().collect::<Vec<ComplexityLevel>>();
                    let request = GenerationRequest::build(
                        industries[state.industry_idx],
                        complexities[state.complexity_idx],
                        &state.focus_input,
                    );

                    if let Some(seq) = controller.submit(request.clone()) {
                        state.notice = None;
                        tx.send(Action::Generate(seq, request))?;
                    }
                }
                _ => {}
            },
            Event::UIScrollUp() => match controller.view {
                View::Home => {
                    let count = Industry::iter().count();
                    state.industry_idx = (state.industry_idx + count - 1) % count;
                }
                View::Results => {
                    state.scroll.up();
                }
                _ => {}
            },
            Event::UIScrollDown() => match controller.view {
                View::Home => {
                    let count = Industry::iter().count();
                    state.industry_idx = (state.industry_idx + 1) % count;
                }
                View::Results => {
                    state.scroll.down();
                }
                _ => {}
            },
            Event::UIScrollPageUp() => {
                if controller.view == View::Results {
                    state.scroll.page_up();
                }
            }
            Event::UIScrollPageDown() => {
                if controller.view == View::Results {
                    state.scroll.page_down();
                }
            }
            Event::UITick() => {
                if controller.loading {
                    state.loading_frame += 1;
                }
            }
            Event::UIResize() => {}
            Event::KeyboardCharInput(keyevent) => {
                if state.pending_clear
                    && !(keyevent.code == KeyCode::Char('l')
                        && keyevent.modifiers.contains(KeyModifiers::CONTROL))
                {
                    state.pending_clear = false;
                }

                if keyevent.modifiers.contains(KeyModifiers::CONTROL) {
                    match keyevent.code {
                        KeyCode::Char('y') => {
                            if controller.current_result.is_empty() {
                                state.notice =
                                    Some("There are no specifications to copy yet.".to_string());
                            } else {
                                tx.send(Action::CopyText(Cards::as_markdown(
                                    &controller.current_result,
                                )))?;
                            }
                        }
                        KeyCode::Char('e') => {
                            if controller.current_result.is_empty() {
                                state.notice =
                                    Some("There are no specifications to export yet.".to_string());
                            } else {
                                let mut stem = "specifications".to_string();
                                if let Some(request) = &controller.last_request {
                                    stem = export_stem(&request.summary());
                                }
                                tx.send(Action::ExportDocument(
                                    stem,
                                    Cards::as_document(&controller.current_result),
                                ))?;
                            }
                        }
                        KeyCode::Char('p') => {
                            if matches!(controller.view, View::Home | View::Results)
                                && !controller.history.is_empty()
                            {
                                state.history_idx = Some(match state.history_idx {
                                    Some(idx) => idx.saturating_sub(1),
                                    None => 0,
                                });
                            }
                        }
                        KeyCode::Char('n') => {
                            if matches!(controller.view, View::Home | View::Results)
                                && !controller.history.is_empty()
                            {
                                let last = controller.history.len() - 1;
                                state.history_idx = Some(match state.history_idx {
                                    Some(idx) => (idx + 1).min(last),
                                    None => 0,
                                });
                            }
                        }
                        KeyCode::Char('o') => {
                            if matches!(controller.view, View::Home | View::Results) {
                                if let Some(idx) = state.history_idx {
                                    if let Some(entry) = controller.history.get(idx) {
                                        let id = entry.id.to_string();
                                        if controller.load_from_history(&id) {
                                            if let Some(request) = controller.last_request.clone()
                                            {
                                                sync_form(&mut state, &request);
                                            }
                                            state.scroll.reset();
                                            state.notice = None;
                                        }
                                    }
                                }
                            }
                        }
                        KeyCode::Char('l') => {
                            if matches!(controller.view, View::Home | View::Results) {
                                if state.pending_clear {
                                    controller.clear_history().await;
                                    state.pending_clear = false;
                                    state.history_idx = None;
                                    state.notice = Some("History cleared.".to_string());
                                } else {
                                    state.pending_clear = true;
                                    state.notice = Some(
                                        "Press CTRL+L again to clear all history.".to_string(),
                                    );
                                }
                            }
                        }
                        KeyCode::Char('g') => {
                            if matches!(controller.view, View::Home | View::Results) {
                                controller.new_project();
                                state.notice = None;
                            }
                        }
                        KeyCode::Char('d') => {
                            if controller.view == View::Developer {
                                controller.close_developer_info();
                            } else if matches!(controller.view, View::Home | View::Results) {
                                controller.open_developer_info();
                            }
                        }
                        _ => {}
                    }
                } else {
                    match keyevent.code {
                        KeyCode::Esc => {
                            controller.close_developer_info();
                        }
                        KeyCode::Left => {
                            if controller.view == View::Home {
                                let count = ComplexityLevel::iter().count();
                                state.complexity_idx = (state.complexity_idx + count - 1) % count;
                            }
                        }
                        KeyCode::Right => {
                            if controller.view == View::Home {
                                let count = ComplexityLevel::iter().count();
                                state.complexity_idx = (state.complexity_idx + 1) % count;
                            }
                        }
                        KeyCode::Backspace => {
                            if controller.view == View::Home {
                                state.focus_input.pop();
                            }
                        }
                        KeyCode::Char('q') if controller.view == View::Landing => {
                            break;
                        }
                        KeyCode::Char(c) => {
                            if controller.view == View::Home
                                && state.focus_input.chars().count() < FOCUS_INPUT_LIMIT
                            {
                                state.focus_input.push(c);
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut controller = SessionController::new(HistoryStore::default()).await;
    start_loop(&mut terminal, &mut controller, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
