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
use crate::model::Catalog;

pub const TIPS_PLACEHOLDER: &str = "Micro/macro tips can be added here.";

/// Relation of the primary champion towards the secondary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Favorable,
    Unfavorable,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchupError {
    /// Both slots must name a champion from the active catalog.
    SelectBoth,
}

impl fmt::Display for MatchupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectBoth => f.write_str("Select both champions to analyze the matchup."),
        }
    }
}

impl std::error::Error for MatchupError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupFragment {
    pub primary: String,
    pub secondary: String,
    pub verdict: Verdict,
}

/// Computes the matchup verdict from the primary champion's lists.
///
/// `strong_against` is checked before `weak_against`; a name in both reads as favorable.
/// Unresolvable names are rejected the same way as empty ones.
pub fn analyze(
    catalog: &Catalog,
    primary: &str,
    secondary: &str,
) -> Result<MatchupFragment, MatchupError> {
    if primary.is_empty() || secondary.is_empty() {
        return Err(MatchupError::SelectBoth);
    }

    let (Some(primary_champion), Some(secondary_champion)) =
        (catalog.find_by_name(primary), catalog.find_by_name(secondary))
    else {
        tracing::debug!(primary, secondary, "matchup requested for unknown champion");
        return Err(MatchupError::SelectBoth);
    };

    let verdict = if primary_champion.is_strong_against(&secondary_champion.name) {
        Verdict::Favorable
    } else if primary_champion.is_weak_against(&secondary_champion.name) {
        Verdict::Unfavorable
    } else {
        Verdict::Neutral
    };

    Ok(MatchupFragment {
        primary: primary_champion.name.clone(),
        secondary: secondary_champion.name.clone(),
        verdict,
    })
}

impl MatchupFragment {
    pub fn heading(&self) -> String {
        format!("{} vs {}", self.primary, self.secondary)
    }

    pub fn summary(&self) -> String {
        match self.verdict {
            Verdict::Favorable => {
                format!("{} has the lane advantage against {}.", self.primary, self.secondary)
            }
            Verdict::Unfavorable => format!("{} struggles against {}.", self.primary, self.secondary),
            Verdict::Neutral => "Neutral matchup: depends on playstyle and execution.".to_owned(),
        }
    }

    pub fn tips(&self) -> &'static str {
        TIPS_PLACEHOLDER
    }

    pub fn to_lines(&self, width: usize) -> Vec<Line<'static>> {
        let verdict_color = match self.verdict {
            Verdict::Favorable => Color::LightGreen,
            Verdict::Unfavorable => Color::LightRed,
            Verdict::Neutral => Color::Yellow,
        };
        let summary_label = "Summary: ";

        let mut lines = vec![Line::from(Span::styled(
            self.heading(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))];

        let summary_rows = wrap_words(&self.summary(), width.saturating_sub(summary_label.len()));
        for (idx, row) in summary_rows.into_iter().enumerate() {
            let lead = if idx == 0 {
                Span::styled(summary_label, Style::default().add_modifier(Modifier::BOLD))
            } else {
                Span::raw(" ".repeat(summary_label.len()))
            };
            lines.push(Line::from(vec![lead, Span::styled(row, Style::default().fg(verdict_color))]));
        }

        for row in wrap_words(self.tips(), width) {
            lines.push(Line::from(Span::styled(row, Style::default().fg(Color::DarkGray))));
        }
        lines
    }
}

impl fmt::Display for MatchupFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;
        writeln!(f, "Summary: {}", self.summary())?;
        write!(f, "{}", self.tips())
    }
}
