// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer, help, and style helpers used by TUI rendering.
fn stack_main_panes_vertically(area: Rect) -> bool {
    area.width < 90
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Primary,
    Secondary,
    Detail,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Detail,
            Self::Detail => Self::Primary,
        }
    }

    fn cycle_back(self) -> Self {
        match self {
            Self::Primary => Self::Detail,
            Self::Secondary => Self::Primary,
            Self::Detail => Self::Secondary,
        }
    }

    fn slot(self) -> Option<Slot> {
        match self {
            Self::Primary => Some(Slot::Primary),
            Self::Secondary => Some(Slot::Secondary),
            Self::Detail => None,
        }
    }

    fn for_slot(slot: Slot) -> Self {
        match slot {
            Slot::Primary => Self::Primary,
            Slot::Secondary => Self::Secondary,
        }
    }
}

fn panel_border_style_for_focus(active: Focus, panel: Focus) -> Style {
    if active != panel {
        return Style::default();
    }

    Style::default().fg(FOCUS_COLOR)
}

fn view_title(label: &str, key: char, tail: Option<&str>) -> String {
    let mut title = format!("─[{key}]─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn slot_list_title(slot: Slot, selected: Option<&str>) -> String {
    let key = match slot {
        Slot::Primary => '1',
        Slot::Secondary => '2',
    };
    let tail = selected.map(|name| format!("— {name}"));
    view_title(slot.label(), key, tail.as_deref())
}

fn list_item_bg(is_cursor: bool, is_selected: bool, list_has_focus: bool) -> Option<Color> {
    if is_cursor && list_has_focus {
        Some(FOCUS_COLOR)
    } else if is_cursor || is_selected {
        Some(Color::DarkGray)
    } else {
        None
    }
}

/// Scroll offset that puts the span `[start, start + len)` in the vertical middle of a
/// viewport `viewport` rows tall, clamped so the content never scrolls past its end.
fn centered_scroll(start: usize, len: usize, viewport: usize, total: usize) -> u16 {
    let center = start + len / 2;
    let offset = center.saturating_sub(viewport / 2);
    let max_offset = total.saturating_sub(viewport.max(1));
    offset.min(max_offset).min(u16::MAX as usize) as u16
}

fn footer_help_line(app: &App, toast_suffix: &str, compact: bool) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    if compact {
        push_footer_entry_with_separator(&mut spans, "ANALYZE", "a", " | ");
        push_footer_entry_with_separator(&mut spans, "HELP", "?", " | ");
        push_footer_entry_with_separator(&mut spans, "QUIT", "q", " | ");
    } else {
        match app.focus {
            Focus::Primary | Focus::Secondary => {
                push_footer_entry(&mut spans, "SELECT", "⏎");
                push_footer_entry(&mut spans, "CLEAR", "x");
                push_footer_entry(&mut spans, "SEARCH", "/");
            }
            Focus::Detail => {
                push_footer_entry(&mut spans, "SCROLL", "j/k");
            }
        }

        push_footer_entry(&mut spans, "ANALYZE", "a");
        push_footer_entry(&mut spans, "ABILITIES", "o/O");
        push_footer_entry(&mut spans, "YANK", "y");
        push_footer_entry(&mut spans, "RELOAD", "r");
        push_footer_entry(&mut spans, "HELP", "?");
        push_footer_entry(&mut spans, "QUIT", "q");
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::styled(catalog_label(app), Style::default().fg(FOOTER_LABEL_COLOR)));
    }

    push_toast_spans(&mut spans, toast_suffix);
    Line::from(spans)
}

fn catalog_label(app: &App) -> String {
    let catalog = app.coordinator.catalog();
    format!("{} ({})", catalog.origin(), catalog.len())
}

fn search_footer_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let query = app.search_query.as_str();
    let search_prefix = app.search_prefix();
    let (idx, total) = match app.search_results.len() {
        0 => (0usize, 0usize),
        n => (app.search_result_index.saturating_add(1), n),
    };

    let count = if query.is_empty() {
        None
    } else if total == 0 {
        Some("0".to_owned())
    } else {
        Some(format!("{idx}/{total}"))
    };

    let mut spans = vec![
        Span::styled(
            search_prefix.to_string(),
            Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
        ),
        Span::raw(query.to_owned()),
        Span::raw("   "),
    ];
    if let Some(count) = count {
        spans.push(Span::styled(count, Style::default().fg(Color::LightGreen)));
    }

    if app.search_mode == SearchMode::Results {
        push_footer_entry_with_separator(&mut spans, "Next", "n/N", " | ");
    }
    push_footer_entry_with_separator(&mut spans, "Accept", "Enter", " | ");
    push_footer_entry_with_separator(&mut spans, "Close", "Esc", " | ");

    push_toast_spans(&mut spans, toast_suffix);
    Line::from(spans)
}

fn push_toast_spans(spans: &mut Vec<Span<'static>>, toast_suffix: &str) {
    let toast_message = toast_suffix.strip_prefix(" | ").unwrap_or(toast_suffix).trim();
    if !toast_message.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::styled("Toast:".to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::raw(toast_message.to_owned()));
    }
}

fn footer_brand_line() -> Line<'static> {
    Line::from(vec![Span::styled(FOOTER_BRAND.to_owned(), Style::default().fg(FOOTER_BRAND_COLOR))])
}

fn help_key_style() -> Style {
    Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD)
}

fn help_header_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

fn help_lines() -> Vec<Line<'static>> {
    let key_style = help_key_style();
    let header_style = help_header_style();
    let dim_style = Style::default().fg(Color::DarkGray);

    let key_col_width = ["Tab/Shift-Tab", "j/k, ↑/↓, PgUp/PgDn, Home/End", "Enter/Space"]
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();

    lines.push(Line::from(Span::styled("--- Global ---", header_style)));
    lines.push(help_kv("?", "Help (toggle)", key_col_width, key_style));
    lines.push(help_kv("q", "Quit", key_col_width, key_style));
    lines.push(help_kv("1/2/3", "Focus Ally/Enemy/Details", key_col_width, key_style));
    lines.push(help_kv("Tab/Shift-Tab", "Focus next/previous panel", key_col_width, key_style));
    lines.push(help_kv("a", "Analyze matchup", key_col_width, key_style));
    lines.push(help_kv("o/O", "Open ally/enemy abilities page", key_col_width, key_style));
    lines.push(help_kv("y", "Yank abilities page URL", key_col_width, key_style));
    lines.push(help_kv("r", "Reload catalog", key_col_width, key_style));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("--- Champion lists ---", header_style)));
    lines.push(help_kv("↑/↓ or j/k", "Move cursor", key_col_width, key_style));
    lines.push(help_kv("g/G, Home/End", "First/last entry", key_col_width, key_style));
    lines.push(help_kv("Enter/Space", "Pick entry (\"none\" clears)", key_col_width, key_style));
    lines.push(help_kv("x/Backspace", "Clear this slot", key_col_width, key_style));
    lines.push(help_kv("/", "Regular search", key_col_width, key_style));
    lines.push(help_kv("\\", "Fuzzy search", key_col_width, key_style));
    lines.push(help_kv("n/N", "Next/previous search result", key_col_width, key_style));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("--- Details ---", header_style)));
    lines.push(help_kv("j/k, ↑/↓, PgUp/PgDn, Home/End", "Scroll", key_col_width, key_style));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("--- Help ---", header_style)));
    lines.push(help_kv("Esc/?", "Close help", key_col_width, key_style));
    lines.push(Line::from(vec![
        Span::styled("Note: ", dim_style),
        Span::styled("a", key_style),
        Span::styled(" needs a champion in both lists.", dim_style),
    ]));
    lines
}

fn render_help(frame: &mut Frame<'_>, app: &mut App, main_area: Rect) {
    let area = centered_rect(82, 84, main_area);
    frame.render_widget(Clear, area);

    let lines = help_lines();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Help ─")
        .border_style(Style::default().fg(FOCUS_COLOR))
        .title_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    app.help_viewport_height = inner.height;
    let max_scroll =
        lines.len().saturating_sub(inner.height.max(1) as usize).min(u16::MAX as usize) as u16;
    app.help_scroll = app.help_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_notice(frame: &mut Frame<'_>, message: &str, main_area: Rect) {
    let area = centered_rect(60, 30, main_area);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_owned(), Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", help_key_style()),
            Span::styled(" OK", Style::default().fg(FOOTER_LABEL_COLOR)),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Notice ─")
        .border_style(Style::default().fg(NOTICE_COLOR))
        .title_style(Style::default().fg(NOTICE_COLOR).add_modifier(Modifier::BOLD));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_with_separator(spans, label, value, " | ");
}

fn push_footer_entry_with_separator(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    separator: &'static str,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(separator.to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        value.to_owned(),
        Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
