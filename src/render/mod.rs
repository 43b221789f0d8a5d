// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for champion cards and matchup verdicts.
//!
//! Renderers are pure: they take a champion (or the catalog plus two names) and produce a
//! fragment that carries every display string already resolved. Fragments convert to styled
//! ratatui lines for the TUI and implement `Display` for plain-text output.

pub mod card;
pub mod matchup;
pub(crate) mod text;

pub use card::{
    card_id, render_card, CardFragment, DESCRIPTION_PLACEHOLDER, FIELD_PLACEHOLDER,
    LIST_PLACEHOLDER, LORE_PLACEHOLDER,
};
pub use matchup::{analyze, MatchupError, MatchupFragment, Verdict, TIPS_PLACEHOLDER};
