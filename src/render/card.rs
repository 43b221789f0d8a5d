// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use ratatui::prelude::*;

use super::text::wrap_words;
use crate::model::Champion;
use crate::slug::LinkTemplates;
use crate::ui::Slot;

pub const FIELD_PLACEHOLDER: &str = "-";
pub const LORE_PLACEHOLDER: &str = "Lore not available.";
pub const DESCRIPTION_PLACEHOLDER: &str = "Description not available.";
pub const LIST_PLACEHOLDER: &str = "—";

const LIST_BULLET: &str = "• ";
const BODY_INDENT: &str = "  ";

/// Display-ready card for one champion in one slot.
///
/// Every field is already resolved to its placeholder, so consumers never branch on missing
/// data. The abilities page is carried as a URL; opening it is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFragment {
    pub id: String,
    pub slot: Slot,
    pub name: String,
    pub lane: String,
    pub class: String,
    pub lore: String,
    pub description: String,
    pub strong_against: Vec<String>,
    pub weak_against: Vec<String>,
    pub synergy_with: Vec<String>,
    pub splash_url: String,
    pub page_url: String,
}

pub fn render_card(champion: &Champion, slot: Slot, links: &LinkTemplates) -> CardFragment {
    CardFragment {
        id: card_id(slot),
        slot,
        name: champion.name.clone(),
        lane: text_or(champion.lane.as_deref(), FIELD_PLACEHOLDER),
        class: text_or(champion.class.as_deref(), FIELD_PLACEHOLDER),
        lore: text_or(champion.lore.as_deref(), LORE_PLACEHOLDER),
        description: text_or(champion.description.as_deref(), DESCRIPTION_PLACEHOLDER),
        strong_against: list_or_placeholder(&champion.strong_against),
        weak_against: list_or_placeholder(&champion.weak_against),
        synergy_with: list_or_placeholder(&champion.synergy_with),
        splash_url: links.splash_url(&champion.name),
        page_url: links.champion_page_url(&champion.name),
    }
}

pub fn card_id(slot: Slot) -> String {
    format!("card-{}", slot.id())
}

fn text_or(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => placeholder.to_owned(),
    }
}

fn list_or_placeholder(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        vec![LIST_PLACEHOLDER.to_owned()]
    } else {
        items.to_vec()
    }
}

impl CardFragment {
    /// Styled lines for a pane `width` cells wide (0 disables wrapping).
    pub fn to_lines(&self, width: usize) -> Vec<Line<'static>> {
        let accent = slot_color(self.slot);
        let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let label = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(Color::DarkGray);
        let body_width = width.saturating_sub(BODY_INDENT.len());

        let mut lines = Vec::<Line<'static>>::new();
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", self.slot.label()), Style::default().fg(accent)),
            Span::styled(self.name.clone(), heading.fg(accent)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Lane: ", label),
            Span::raw(self.lane.clone()),
            Span::raw("   "),
            Span::styled("Class: ", label),
            Span::raw(self.class.clone()),
        ]));
        lines.push(Line::default());

        push_paragraph(&mut lines, "Lore", &self.lore, label, body_width);
        push_list(&mut lines, "Strong against", &self.strong_against, label, Color::Green);
        push_list(&mut lines, "Weak against", &self.weak_against, label, Color::Red);
        push_list(&mut lines, "Synergy", &self.synergy_with, label, Color::Cyan);
        push_paragraph(&mut lines, "Description", &self.description, label, body_width);

        lines.push(Line::from(vec![
            Span::styled("Splash: ", muted),
            Span::styled(self.splash_url.clone(), muted),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", self.slot.open_key()), Style::default().fg(Color::Cyan)),
            Span::styled("ABILITIES ", label),
            Span::styled(self.page_url.clone(), Style::default().fg(Color::Blue)),
        ]));
        lines
    }

    pub fn to_text(&self, width: usize) -> Text<'static> {
        Text::from(self.to_lines(width))
    }
}

fn push_paragraph(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    body: &str,
    label: Style,
    width: usize,
) {
    lines.push(Line::from(Span::styled(format!("{title}:"), label)));
    for row in wrap_words(body, width) {
        lines.push(Line::from(format!("{BODY_INDENT}{row}")));
    }
}

fn push_list(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    items: &[String],
    label: Style,
    bullet: Color,
) {
    lines.push(Line::from(Span::styled(format!("{title}:"), label)));
    for item in items {
        lines.push(Line::from(vec![
            Span::raw(BODY_INDENT),
            Span::styled(LIST_BULLET, Style::default().fg(bullet)),
            Span::raw(item.clone()),
        ]));
    }
}

fn slot_color(slot: Slot) -> Color {
    match slot {
        Slot::Primary => Color::LightGreen,
        Slot::Secondary => Color::LightRed,
    }
}

impl fmt::Display for CardFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.id, self.name)?;
        writeln!(f, "Lane: {}", self.lane)?;
        writeln!(f, "Class: {}", self.class)?;
        writeln!(f, "Lore: {}", self.lore)?;
        for (title, items) in [
            ("Strong against", &self.strong_against),
            ("Weak against", &self.weak_against),
            ("Synergy", &self.synergy_with),
        ] {
            writeln!(f, "{title}:")?;
            for item in items {
                writeln!(f, "{BODY_INDENT}{LIST_BULLET}{item}")?;
            }
        }
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Splash: {}", self.splash_url)?;
        write!(f, "Abilities: {}", self.page_url)
    }
}
