// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal demo shell.
//!
//! Drives the hint engine against a candidate list the way an embedding
//! browser layer would: `f` opens hints, typed characters narrow them, `/`
//! applies a text filter first, and a resolution is shown as the follow event
//! the embedding layer would receive.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::event::follow_event;
use crate::model::{
    Alphabet, Candidate, CandidateClass, CandidateId, CandidateSet, FollowMode,
};
use crate::query::text::TextFilter;
use crate::session::{HintSession, SessionView, UpdateOutcome};

const HINT_TYPED_COLOR: Color = Color::DarkGray;
const HINT_RESIDUAL_COLOR: Color = Color::LightGreen;
const URI_COLOR: Color = Color::DarkGray;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🆃 🅷 🅰 🅻 🅰 🆂 🆂 🅰 ";

/// Runs the interactive demo over `candidates`.
pub fn run(
    candidates: CandidateSet,
    alphabet: Alphabet,
    mode: FollowMode,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(candidates, alphabet, mode);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// A small built-in page: the element mix a real document would report.
pub fn demo_candidates() -> CandidateSet {
    fn id(value: &str) -> CandidateId {
        CandidateId::new(value).expect("candidate id")
    }

    CandidateSet::new(vec![
        Candidate::new(id("link:home"), CandidateClass::Clickable)
            .with_uri("https://example.net/")
            .with_text("Home"),
        Candidate::new(id("link:docs"), CandidateClass::Clickable)
            .with_uri("https://example.net/docs")
            .with_text("Documentation"),
        Candidate::new(id("link:releases"), CandidateClass::Clickable)
            .with_uri("https://example.net/releases")
            .with_text("Releases"),
        Candidate::new(id("link:issue-41"), CandidateClass::Clickable)
            .with_uri("https://example.net/issues/41")
            .with_text("Issue 41: labels overlap on narrow panes"),
        Candidate::new(id("link:issue-57"), CandidateClass::Clickable)
            .with_uri("https://example.net/issues/57")
            .with_text("Issue 57: filter drops first match"),
        Candidate::new(id("input:search"), CandidateClass::TextInput)
            .with_text("Search"),
        Candidate::new(id("input:token"), CandidateClass::TextInput)
            .with_text("API token"),
        Candidate::new(id("select:branch"), CandidateClass::Selectable)
            .with_text("Branch picker"),
        Candidate::new(id("textarea:comment"), CandidateClass::Selectable)
            .with_text("Comment"),
        Candidate::new(id("button:submit"), CandidateClass::Clickable)
            .with_text("Submit"),
        Candidate::new(id("link:login"), CandidateClass::Clickable)
            .with_uri("javascript:openLogin()")
            .with_text("Log in"),
        Candidate::new(id("link:footer"), CandidateClass::Clickable)
            .with_uri("https://example.net/imprint")
            .with_text("Imprint")
            .with_in_viewport(false),
    ])
}

struct Toast {
    message: String,
    expires_at: Instant,
}

enum UiMode {
    Browse,
    Hinting(HintSession),
    Query { buffer: String },
}

struct App {
    all: CandidateSet,
    narrowed: Option<CandidateSet>,
    alphabet: Alphabet,
    mode: FollowMode,
    ui_mode: UiMode,
    last_event: Option<String>,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(all: CandidateSet, alphabet: Alphabet, mode: FollowMode) -> Self {
        Self {
            all,
            narrowed: None,
            alphabet,
            mode,
            ui_mode: UiMode::Browse,
            last_event: None,
            toast: None,
            should_quit: false,
        }
    }

    fn current_candidates(&self) -> &CandidateSet {
        self.narrowed.as_ref().unwrap_or(&self.all)
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(2),
        });
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ui_mode = std::mem::replace(&mut self.ui_mode, UiMode::Browse);
        match ui_mode {
            UiMode::Browse => self.handle_browse_key(key.code),
            UiMode::Hinting(session) => self.handle_hinting_key(session, key.code),
            UiMode::Query { buffer } => self.handle_query_key(buffer, key.code),
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('f') => self.open_hints(),
            KeyCode::Char('/') => self.ui_mode = UiMode::Query { buffer: String::new() },
            KeyCode::Char('m') => {
                self.mode = match self.mode {
                    FollowMode::Click => FollowMode::NewWindow,
                    FollowMode::NewWindow => FollowMode::ReturnUri,
                    FollowMode::ReturnUri => FollowMode::Click,
                };
                self.set_toast(format!("Mode: {}", self.mode));
            }
            KeyCode::Esc => {
                if self.narrowed.take().is_some() {
                    self.set_toast("Filter cleared");
                }
            }
            _ => {}
        }
    }

    fn open_hints(&mut self) {
        let session = HintSession::open(
            self.current_candidates().clone(),
            self.alphabet.clone(),
            self.mode,
        );
        self.step_session(session, String::new());
    }

    fn handle_hinting_key(&mut self, mut session: HintSession, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                session.cancel();
                self.set_toast("Hints cancelled");
            }
            KeyCode::Backspace => {
                let mut typed = session.typed().to_owned();
                typed.pop();
                self.step_session(session, typed);
            }
            KeyCode::Char(ch) => {
                let mut typed = session.typed().to_owned();
                typed.push(ch);
                self.step_session(session, typed);
            }
            _ => self.ui_mode = UiMode::Hinting(session),
        }
    }

    fn step_session(&mut self, mut session: HintSession, typed: String) {
        match session.update(&typed) {
            UpdateOutcome::Open(_) => self.ui_mode = UiMode::Hinting(session),
            UpdateOutcome::Resolved(resolution) => {
                let message = match follow_event(&resolution.candidate, resolution.mode) {
                    Some(event) => event.to_string(),
                    None => format!(
                        "nothing to do for {} in {} mode",
                        resolution.candidate.candidate_id(),
                        resolution.mode
                    ),
                };
                self.set_toast(message.clone());
                self.last_event = Some(message);
            }
            UpdateOutcome::NoMatch => self.set_toast("No matching hint"),
        }
    }

    fn handle_query_key(&mut self, mut buffer: String, code: KeyCode) {
        match code {
            KeyCode::Esc => {}
            KeyCode::Enter => self.apply_query(&buffer),
            KeyCode::Backspace => {
                buffer.pop();
                self.ui_mode = UiMode::Query { buffer };
            }
            KeyCode::Char(ch) => {
                buffer.push(ch);
                self.ui_mode = UiMode::Query { buffer };
            }
            _ => self.ui_mode = UiMode::Query { buffer },
        }
    }

    fn apply_query(&mut self, query: &str) {
        let filter = match TextFilter::parse(query) {
            Ok(filter) => filter,
            Err(err) => {
                self.set_toast(err.to_string());
                return;
            }
        };

        let narrowed = filter.filter(&self.all);
        if narrowed.is_empty() {
            self.set_toast(format!("No matches for '{query}'"));
            return;
        }

        self.narrowed = Some(narrowed);
        // Filter first, then label the survivors.
        self.open_hints();
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let lines = match &app.ui_mode {
        UiMode::Hinting(session) => hint_lines(session),
        _ => browse_lines(app.current_candidates()),
    };
    let title = match &app.ui_mode {
        UiMode::Hinting(session) => format!(
            "Candidates — hinting ({} of width {})",
            session.typed().chars().count(),
            session.width()
        ),
        _ => format!("Candidates ({})", app.current_candidates().len()),
    };
    let list = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default().borders(Borders::ALL).title(title),
    );
    frame.render_widget(list, main_area);

    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => format!(" | {message}"),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };

    if let UiMode::Query { buffer } = &app.ui_mode {
        let status = Paragraph::new(query_footer_line(buffer, &toast_suffix));
        frame.render_widget(status, status_area);
        let cursor_x = status_area
            .x
            .saturating_add(1)
            .saturating_add(buffer.chars().count() as u16)
            .min(status_area.x.saturating_add(status_area.width.saturating_sub(1)));
        frame.set_cursor(cursor_x, status_area.y);
        return;
    }

    let status = Paragraph::new(footer_help_line(app, &toast_suffix));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);
}

fn class_tag(class: CandidateClass) -> &'static str {
    match class {
        CandidateClass::TextInput => "input",
        CandidateClass::Selectable => "select",
        CandidateClass::Clickable => "link",
    }
}

fn candidate_spans(candidate: &Candidate) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::raw(format!("[{}] ", class_tag(candidate.class()))),
        Span::raw(candidate.text().to_owned()),
    ];
    if let Some(uri) = candidate.uri() {
        spans.push(Span::styled(
            format!("  ({uri})"),
            Style::default().fg(URI_COLOR),
        ));
    }
    spans
}

fn browse_lines(candidates: &CandidateSet) -> Vec<Line<'static>> {
    candidates
        .iter()
        .filter(|candidate| candidate.in_viewport())
        .map(|candidate| Line::from(candidate_spans(candidate)))
        .collect()
}

fn hint_lines(session: &HintSession) -> Vec<Line<'static>> {
    let view: SessionView = session.view();
    let mut lines = Vec::with_capacity(view.items.len());

    for item in &view.items {
        let Some(candidate) = session.candidates().get_by_id(&item.candidate_id) else {
            continue;
        };
        let typed_part = &item.full_label[..item.full_label.len() - item.residual.len()];

        let mut spans = Vec::with_capacity(5);
        if !typed_part.is_empty() {
            spans.push(Span::styled(
                typed_part.to_owned(),
                Style::default().fg(HINT_TYPED_COLOR),
            ));
        }
        spans.push(Span::styled(
            item.residual.to_string(),
            Style::default().fg(HINT_RESIDUAL_COLOR).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
        spans.extend(candidate_spans(candidate));
        lines.push(Line::from(spans));
    }

    lines
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, key: &str) {
    spans.push(Span::styled(
        format!("{label} "),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        format!("{key}  "),
        Style::default().fg(FOOTER_KEY_COLOR),
    ));
}

fn footer_help_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    match app.ui_mode {
        UiMode::Hinting(_) => {
            push_footer_entry(&mut spans, "TYPE", "label");
            push_footer_entry(&mut spans, "UNDO", "⌫");
            push_footer_entry(&mut spans, "CANCEL", "esc");
        }
        _ => {
            push_footer_entry(&mut spans, "HINT", "f");
            push_footer_entry(&mut spans, "FILTER", "/");
            push_footer_entry(&mut spans, "MODE", &format!("m ({})", app.mode));
            push_footer_entry(&mut spans, "QUIT", "q");
        }
    }

    if let Some(event) = &app.last_event {
        spans.push(Span::styled(
            format!("| {event}"),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    if !toast_suffix.is_empty() {
        spans.push(Span::raw(toast_suffix.to_owned()));
    }

    Line::from(spans)
}

fn query_footer_line(buffer: &str, toast_suffix: &str) -> Line<'static> {
    let mut spans = vec![
        Span::styled("/", Style::default().fg(FOOTER_KEY_COLOR)),
        Span::raw(buffer.to_owned()),
    ];
    if !toast_suffix.is_empty() {
        spans.push(Span::styled(
            toast_suffix.to_owned(),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    Line::from(spans)
}

fn footer_brand_line() -> Line<'static> {
    Line::from(Span::styled(
        FOOTER_BRAND,
        Style::default().fg(FOOTER_BRAND_COLOR),
    ))
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
