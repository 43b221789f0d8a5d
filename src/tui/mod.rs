// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Two champion lists (ally/enemy) on the left, the rendered cards and matchup on the right
//! (ratatui + crossterm). All selection logic lives in [`ViewCoordinator`]; this module only
//! maps keys to [`UiEvent`]s and draws the coordinator's output.

use std::{
    error::Error,
    io,
    process::{Command, Stdio},
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::model::Catalog;
use crate::render::text::truncate_with_ellipsis;
use crate::slug::LinkTemplates;
use crate::store::{load_catalog, CatalogSource, LoadOptions};
use crate::ui::{Slot, UiEvent, ViewCoordinator, ViewOutput};

const FOCUS_COLOR: Color = Color::LightGreen;
const NOTICE_COLOR: Color = Color::LightYellow;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅻 🅰 🅽 🅴 ";
const EMPTY_OPTION_LABEL: &str = "— none —";
const EMPTY_DETAIL_HINT: &str = "Pick a champion in either list to see its card.";

/// Runs the interactive terminal UI over an already-loaded catalog.
///
/// `source` and `load_options` are kept so the catalog can be reloaded from inside the UI.
pub fn run(
    catalog: Catalog,
    links: LinkTemplates,
    source: CatalogSource,
    load_options: LoadOptions,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(ViewCoordinator::new(catalog, links), source, load_options);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                    if let Some(action) = app.take_external_action() {
                        if let Err(err) = app.execute_external_action(action) {
                            app.set_toast(format!("External action failed: {err}"));
                        }
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let compact_footer = stack_main_panes_vertically(main_area);
    let direction = if compact_footer { Direction::Vertical } else { Direction::Horizontal };
    let panes = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_area);
    let lists = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(panes[0]);

    for (slot, list_area) in Slot::ALL.into_iter().zip(lists.iter().copied()) {
        draw_slot_list(frame, app, slot, list_area);
    }
    draw_detail(frame, app, panes[1]);

    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => format!(" | {message}"),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };
    if app.search_mode != SearchMode::Inactive {
        let query = app.search_query.as_str();
        let status = Paragraph::new(search_footer_line(app, &toast_suffix));
        frame.render_widget(status, status_area);
        if app.search_mode == SearchMode::Editing {
            let cursor_x = status_area
                .x
                .saturating_add(1)
                .saturating_add(query.chars().count() as u16)
                .min(status_area.x.saturating_add(status_area.width.saturating_sub(1)));
            frame.set_cursor_position((cursor_x, status_area.y));
        }
    } else {
        let status = Paragraph::new(footer_help_line(app, &toast_suffix, compact_footer));
        frame.render_widget(status, status_area);
        let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
        frame.render_widget(brand, status_area);
    }

    if let Some(message) = app.notice.clone() {
        render_notice(frame, &message, main_area);
    } else if app.show_help {
        render_help(frame, app, main_area);
    }
}

fn draw_slot_list(frame: &mut Frame<'_>, app: &mut App, slot: Slot, area: Rect) {
    let panel = Focus::for_slot(slot);
    let has_focus = app.focus == panel;
    let selected = app.coordinator.selection().get(slot).map(ToOwned::to_owned);
    let cursor = app.list_state(slot).selected();
    let label_width = area.width.saturating_sub(4) as usize;
    let marker_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let items = app
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let is_selected = option.as_deref() == selected.as_deref();
            let is_cursor = cursor == Some(idx);
            let label = option.as_deref().unwrap_or(EMPTY_OPTION_LABEL);
            let label_style = if option.is_none() {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::White)
            };

            let marker = if is_selected { "◼" } else { "◻" };
            let line = Line::from(vec![
                Span::styled(marker, marker_style),
                Span::raw(" "),
                Span::styled(truncate_with_ellipsis(label, label_width), label_style),
            ]);
            let mut item = ListItem::new(line);
            if let Some(bg) = list_item_bg(is_cursor, is_selected, has_focus) {
                item = item.style(Style::default().bg(bg));
            }
            item
        })
        .collect::<Vec<_>>();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(slot_list_title(slot, selected.as_deref()))
            .border_style(panel_border_style_for_focus(app.focus, panel)),
    );
    frame.render_stateful_widget(list, area, app.list_state_mut(slot));
}

fn draw_detail(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let viewport = area.height.saturating_sub(2) as usize;
    app.detail_viewport_height = viewport as u16;

    let layout = detail_layout(app.coordinator.output(), width);
    let total = layout.lines.len();
    if app.center_matchup_on_next_draw {
        app.center_matchup_on_next_draw = false;
        if let Some((start, len)) = layout.matchup_span {
            app.detail_scroll = centered_scroll(start, len, viewport, total);
        }
    }
    let max_scroll = total.saturating_sub(viewport.max(1)).min(u16::MAX as usize) as u16;
    app.detail_scroll = app.detail_scroll.min(max_scroll);

    let tail = match app.coordinator.output().cards.as_slice() {
        [] => None,
        [card] => Some(format!("— {}", card.name)),
        [first, second, ..] => Some(format!("— {} vs {}", first.name, second.name)),
    };
    let paragraph = Paragraph::new(Text::from(layout.lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Details", '3', tail.as_deref()))
                .border_style(panel_border_style_for_focus(app.focus, Focus::Detail)),
        )
        .scroll((app.detail_scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Detail pane content plus the line range occupied by the matchup, if shown.
struct DetailLayout {
    lines: Vec<Line<'static>>,
    matchup_span: Option<(usize, usize)>,
}

fn detail_layout(output: &ViewOutput, width: usize) -> DetailLayout {
    let mut lines = Vec::<Line<'static>>::new();
    if output.is_empty() {
        lines.push(Line::from(Span::styled(EMPTY_DETAIL_HINT, Style::default().fg(Color::DarkGray))));
        return DetailLayout { lines, matchup_span: None };
    }

    let rule = Line::from(Span::styled(
        "─".repeat(width.max(1)),
        Style::default().fg(Color::DarkGray),
    ));

    for (idx, card) in output.cards.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::default());
            lines.push(rule.clone());
        }
        lines.extend(card.to_lines(width));
    }

    let mut matchup_span = None;
    if let Some(matchup) = &output.matchup {
        if !lines.is_empty() {
            lines.push(Line::default());
            lines.push(rule);
        }
        let matchup_lines = matchup.to_lines(width);
        matchup_span = Some((lines.len(), matchup_lines.len()));
        lines.extend(matchup_lines);
    }

    DetailLayout { lines, matchup_span }
}

// Extracted panel/header/footer/help rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Inactive,
    Editing,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchKind {
    Regular,
    Fuzzy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExternalAction {
    OpenPage(String),
    ReloadCatalog,
}

struct App {
    coordinator: ViewCoordinator,
    catalog_source: CatalogSource,
    load_options: LoadOptions,
    /// Entries shown in both lists: the empty option, then names in sorted order.
    options: Vec<Option<String>>,
    list_states: [ListState; 2],
    focus: Focus,
    detail_scroll: u16,
    detail_viewport_height: u16,
    center_matchup_on_next_draw: bool,
    notice: Option<String>,
    show_help: bool,
    help_scroll: u16,
    help_viewport_height: u16,
    toast: Option<Toast>,
    search_mode: SearchMode,
    search_kind: SearchKind,
    search_slot: Slot,
    search_query: String,
    search_results: Vec<usize>,
    search_result_index: usize,
    pending_external_action: Option<ExternalAction>,
    should_quit: bool,
}

impl App {
    fn new(
        coordinator: ViewCoordinator,
        catalog_source: CatalogSource,
        load_options: LoadOptions,
    ) -> Self {
        let options = list_options(coordinator.catalog());
        let mut list_states = [ListState::default(), ListState::default()];
        for state in &mut list_states {
            state.select(Some(0));
        }

        Self {
            coordinator,
            catalog_source,
            load_options,
            options,
            list_states,
            focus: Focus::Primary,
            detail_scroll: 0,
            detail_viewport_height: 0,
            center_matchup_on_next_draw: false,
            notice: None,
            show_help: false,
            help_scroll: 0,
            help_viewport_height: 0,
            toast: None,
            search_mode: SearchMode::Inactive,
            search_kind: SearchKind::Regular,
            search_slot: Slot::Primary,
            search_query: String::new(),
            search_results: Vec::new(),
            search_result_index: 0,
            pending_external_action: None,
            should_quit: false,
        }
    }

    fn list_state(&self, slot: Slot) -> &ListState {
        &self.list_states[slot_index(slot)]
    }

    fn list_state_mut(&mut self, slot: Slot) -> &mut ListState {
        &mut self.list_states[slot_index(slot)]
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.notice.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return false;
        }

        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => {
                    self.show_help = false;
                }
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => self.help_scroll_by(1),
                KeyCode::Up | KeyCode::Char('k') => self.help_scroll_by(-1),
                KeyCode::PageDown => self.help_scroll_page(1),
                KeyCode::PageUp => self.help_scroll_page(-1),
                KeyCode::Home => self.help_scroll = 0,
                KeyCode::End => self.help_scroll = u16::MAX,
                _ => {}
            }
            return false;
        }

        match self.search_mode {
            SearchMode::Editing => {
                self.handle_search_edit_key(code);
                return false;
            }
            SearchMode::Results => {
                if matches!(code, KeyCode::Esc) {
                    self.clear_search();
                    return false;
                }
            }
            SearchMode::Inactive => {}
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('1') => self.focus = Focus::Primary,
            KeyCode::Char('2') => self.focus = Focus::Secondary,
            KeyCode::Char('3') => self.focus = Focus::Detail,
            KeyCode::Tab => self.focus = self.focus.cycle(),
            KeyCode::BackTab => self.focus = self.focus.cycle_back(),
            KeyCode::Char('a') => self.request_analyze(),
            KeyCode::Char('o') => self.queue_open_page(Slot::Primary),
            KeyCode::Char('O') => self.queue_open_page(Slot::Secondary),
            KeyCode::Char('y') => self.yank_page_url(),
            KeyCode::Char('r') => {
                self.pending_external_action = Some(ExternalAction::ReloadCatalog);
            }
            KeyCode::Char('/') => self.enter_search_mode(SearchKind::Regular),
            KeyCode::Char('\\') => self.enter_search_mode(SearchKind::Fuzzy),
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Char('n') => self.search_next(),
            KeyCode::Char('N') => self.search_prev(),
            _ => match self.focus.slot() {
                Some(slot) => self.handle_list_key(slot, code),
                None => self.handle_detail_key(code),
            },
        }

        false
    }

    fn handle_list_key(&mut self, slot: Slot, code: KeyCode) {
        match code {
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(slot, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(slot, -1),
            KeyCode::PageDown => self.move_cursor(slot, 10),
            KeyCode::PageUp => self.move_cursor(slot, -10),
            KeyCode::Home | KeyCode::Char('g') => self.set_cursor(slot, 0),
            KeyCode::End | KeyCode::Char('G') => {
                self.set_cursor(slot, self.options.len().saturating_sub(1))
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select_cursor(slot),
            KeyCode::Char('x') | KeyCode::Backspace | KeyCode::Delete => {
                self.change_selection(slot, None);
                self.set_cursor(slot, 0);
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        let page = self.detail_viewport_height.max(2).saturating_sub(1);
        match code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.detail_scroll = self.detail_scroll.saturating_add(1)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1)
            }
            KeyCode::PageDown => self.detail_scroll = self.detail_scroll.saturating_add(page),
            KeyCode::PageUp => self.detail_scroll = self.detail_scroll.saturating_sub(page),
            KeyCode::Home | KeyCode::Char('g') => self.detail_scroll = 0,
            KeyCode::End | KeyCode::Char('G') => self.detail_scroll = u16::MAX,
            _ => {}
        }
    }

    fn move_cursor(&mut self, slot: Slot, delta: i32) {
        let current = self.list_state(slot).selected().unwrap_or(0) as i64;
        let last = self.options.len().saturating_sub(1) as i64;
        let next = (current + i64::from(delta)).clamp(0, last.max(0));
        self.set_cursor(slot, next as usize);
    }

    fn set_cursor(&mut self, slot: Slot, idx: usize) {
        let idx = idx.min(self.options.len().saturating_sub(1));
        self.list_state_mut(slot).select(Some(idx));
    }

    fn select_cursor(&mut self, slot: Slot) {
        let Some(idx) = self.list_state(slot).selected() else {
            return;
        };
        let name = self.options.get(idx).cloned().flatten();
        self.change_selection(slot, name);
    }

    fn change_selection(&mut self, slot: Slot, name: Option<String>) {
        // Selection changes never fail; only analyze reports errors.
        let _ = self.coordinator.handle(UiEvent::SelectionChanged { slot, name });
        self.detail_scroll = 0;
        self.center_matchup_on_next_draw = false;
    }

    fn request_analyze(&mut self) {
        match self.coordinator.handle(UiEvent::AnalyzeRequested) {
            Ok(()) => {
                if self.coordinator.take_scroll_request() {
                    self.center_matchup_on_next_draw = true;
                }
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    fn page_url(&self, slot: Slot) -> Option<String> {
        self.coordinator.output().card(slot).map(|card| card.page_url.clone())
    }

    fn queue_open_page(&mut self, slot: Slot) {
        match self.page_url(slot) {
            Some(url) => self.pending_external_action = Some(ExternalAction::OpenPage(url)),
            None => self.set_toast(format!("No {} card shown", slot.label().to_lowercase())),
        }
    }

    fn take_external_action(&mut self) -> Option<ExternalAction> {
        self.pending_external_action.take()
    }

    fn execute_external_action(&mut self, action: ExternalAction) -> Result<(), String> {
        match action {
            ExternalAction::OpenPage(url) => match open_in_browser(&url) {
                Ok(()) => {
                    self.set_toast("Opened abilities page");
                    Ok(())
                }
                Err(err) => {
                    tracing::debug!(url = %url, error = %err, "could not launch browser");
                    let backend = copy_to_clipboard(&url)?;
                    self.set_toast(format!("No browser available; URL copied ({backend})"));
                    Ok(())
                }
            },
            ExternalAction::ReloadCatalog => {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(|err| format!("failed to start runtime: {err}"))?;
                let catalog =
                    runtime.block_on(load_catalog(&self.catalog_source, &self.load_options));
                self.apply_catalog(catalog);
                Ok(())
            }
        }
    }

    /// Swaps in a freshly loaded catalog and rebuilds both lists from it. Cursors follow the
    /// selected name when it is still listed and are clamped otherwise.
    fn apply_catalog(&mut self, catalog: Catalog) {
        let summary = format!("Reloaded {} champions from {}", catalog.len(), catalog.origin());
        self.coordinator.replace_catalog(catalog);
        self.options = list_options(self.coordinator.catalog());

        for slot in Slot::ALL {
            let selected = self.coordinator.selection().get(slot).map(ToOwned::to_owned);
            let listed = selected.and_then(|name| {
                self.options.iter().position(|option| option.as_deref() == Some(name.as_str()))
            });
            let idx = listed.or_else(|| self.list_state(slot).selected()).unwrap_or(0);
            self.set_cursor(slot, idx);
        }

        self.clear_search();
        self.detail_scroll = 0;
        self.center_matchup_on_next_draw = false;
        let catalog = self.coordinator.catalog();
        tracing::info!(count = catalog.len(), origin = %catalog.origin(), "catalog reloaded");
        self.set_toast(summary);
    }

    fn yank_page_url(&mut self) {
        let Some(url) = self.page_url(Slot::Primary).or_else(|| self.page_url(Slot::Secondary))
        else {
            self.set_toast("No card shown");
            return;
        };

        match copy_to_clipboard(&url) {
            Ok(backend) => self.set_toast(format!("Yanked abilities URL ({backend})")),
            Err(err) => self.set_toast(format!("Clipboard error: {err}")),
        }
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            if self.search_mode != SearchMode::Inactive {
                self.clear_search();
            }
            self.help_scroll = 0;
        }
    }

    fn help_scroll_by(&mut self, delta: i32) {
        if delta < 0 {
            self.help_scroll = self.help_scroll.saturating_sub((-delta) as u16);
        } else {
            self.help_scroll = self.help_scroll.saturating_add(delta as u16);
        }
    }

    fn help_scroll_page(&mut self, direction: i32) {
        let page = self.help_viewport_height.max(1).saturating_sub(1) as i32;
        let step = page.max(1);
        self.help_scroll_by(direction.signum() * step);
    }

    fn enter_search_mode(&mut self, kind: SearchKind) {
        self.search_slot = self.focus.slot().unwrap_or(Slot::Primary);
        self.focus = Focus::for_slot(self.search_slot);
        self.search_mode = SearchMode::Editing;
        self.search_kind = kind;
        self.search_query.clear();
        self.search_result_index = 0;
        self.search_results.clear();
    }

    fn handle_search_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.clear_search(),
            KeyCode::Enter => self.commit_search(),
            KeyCode::Backspace => {
                self.search_query.pop();
                self.update_search_results();
            }
            KeyCode::Char(ch) => {
                self.search_query.push(ch);
                self.update_search_results();
            }
            _ => {}
        }
    }

    fn commit_search(&mut self) {
        if self.search_results.len() > 1 {
            self.search_mode = SearchMode::Results;
        } else {
            self.search_mode = SearchMode::Inactive;
        }
    }

    fn clear_search(&mut self) {
        self.search_mode = SearchMode::Inactive;
        self.search_query.clear();
        self.search_results.clear();
        self.search_result_index = 0;
    }

    fn update_search_results(&mut self) {
        self.search_results =
            ranked_search_results(&self.options, &self.search_query, self.search_kind);
        self.search_result_index = 0;
        self.jump_to_current_search_result();
    }

    fn search_prefix(&self) -> char {
        match self.search_kind {
            SearchKind::Regular => '/',
            SearchKind::Fuzzy => '\\',
        }
    }

    fn jump_to_current_search_result(&mut self) {
        let Some(idx) = self.search_results.get(self.search_result_index).copied() else {
            return;
        };
        self.set_cursor(self.search_slot, idx);
    }

    fn search_next(&mut self) {
        let len = self.search_results.len();
        if len <= 1 {
            return;
        }

        self.search_result_index = (self.search_result_index + 1) % len;
        self.jump_to_current_search_result();
    }

    fn search_prev(&mut self) {
        let len = self.search_results.len();
        if len <= 1 {
            return;
        }

        self.search_result_index = match self.search_result_index {
            0 => len - 1,
            n => n - 1,
        };
        self.jump_to_current_search_result();
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(2),
        });
    }
}

fn slot_index(slot: Slot) -> usize {
    match slot {
        Slot::Primary => 0,
        Slot::Secondary => 1,
    }
}

fn list_options(catalog: &Catalog) -> Vec<Option<String>> {
    std::iter::once(None).chain(catalog.names_sorted().into_iter().map(Some)).collect()
}

/// Option indices matching `query`, best first. The empty option never matches.
fn ranked_search_results(options: &[Option<String>], query: &str, kind: SearchKind) -> Vec<usize> {
    let needle = query.trim();
    if needle.is_empty() {
        return Vec::new();
    }

    let needle = needle.to_lowercase();
    let mut matches = options
        .iter()
        .enumerate()
        .filter_map(|(idx, option)| {
            let haystack = option.as_deref()?.to_lowercase();
            let score = match kind {
                SearchKind::Regular => regular_score(&needle, &haystack),
                SearchKind::Fuzzy => fuzzy_score(&needle, &haystack),
            }?;
            Some((score, idx))
        })
        .collect::<Vec<_>>();

    // Options are already in display order, so ties keep it.
    matches.sort_by(|(score_a, idx_a), (score_b, idx_b)| {
        score_b.cmp(score_a).then_with(|| idx_a.cmp(idx_b))
    });
    matches.into_iter().map(|(_, idx)| idx).collect()
}

fn regular_score(needle: &str, haystack: &str) -> Option<i64> {
    let first = haystack.find(needle)?;
    let starts = first == 0;
    let start_boundary =
        if starts { true } else { haystack[..first].chars().last().is_some_and(is_boundary_char) };

    let mut score = 200_000i64.saturating_sub((first as i64) * 1000);
    score -= haystack.chars().count() as i64;
    if starts {
        score += 50_000;
    }
    if start_boundary {
        score += 20_000;
    }
    if haystack == needle {
        score += 100_000;
    }

    Some(score)
}

fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    let subseq = subsequence_stats(needle, haystack)?;
    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let ratio_score = (ratio * 1000.0).round() as i64;

    let mut score = ratio_score;
    score -= subseq.span as i64;
    score -= (subseq.first as i64) / 4;
    score += (subseq.consecutive as i64) * 40;
    if subseq.start_boundary {
        score += 150;
    }
    if haystack.contains(needle) {
        score += 2000;
    } else {
        score += 500;
    }

    Some(score)
}

struct SubsequenceStats {
    first: usize,
    span: usize,
    consecutive: usize,
    start_boundary: bool,
}

fn subsequence_stats(needle: &str, haystack: &str) -> Option<SubsequenceStats> {
    let mut needle_iter = needle.chars().peekable();
    let mut first: Option<usize> = None;
    let mut last: usize = 0;
    let mut prev_match: Option<usize> = None;
    let mut consecutive: usize = 0;
    let mut start_boundary = false;
    let mut prev_hay: Option<char> = None;

    for (idx, ch) in haystack.chars().enumerate() {
        let Some(&want) = needle_iter.peek() else {
            break;
        };

        if ch == want {
            needle_iter.next();

            if first.is_none() {
                first = Some(idx);
                start_boundary = prev_hay.map_or(true, is_boundary_char);
            }

            if prev_match.is_some_and(|prev| idx == prev + 1) {
                consecutive += 1;
            }
            prev_match = Some(idx);
            last = idx;
        }

        prev_hay = Some(ch);
    }

    if needle_iter.peek().is_some() {
        return None;
    }

    let first = first?;
    Some(SubsequenceStats {
        first,
        span: last.saturating_sub(first).saturating_add(1),
        consecutive,
        start_boundary,
    })
}

fn is_boundary_char(ch: char) -> bool {
    matches!(ch, ' ' | '\'' | '.' | '&' | '-')
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

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Platform opener invocation for a URL: program plus arguments.
fn browser_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_owned()])
    } else if cfg!(target_os = "windows") {
        ("cmd", vec!["/C".to_owned(), "start".to_owned(), String::new(), url.to_owned()])
    } else {
        ("xdg-open", vec![url.to_owned()])
    }
}

/// Hands the URL to the platform opener without waiting for it.
fn open_in_browser(url: &str) -> Result<(), String> {
    let (program, args) = browser_command(url);
    Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|err| format!("failed to launch {program}: {err}"))
}
