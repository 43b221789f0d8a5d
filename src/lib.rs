// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lanedex: champion cards and lane matchups in the terminal.
//!
//! The catalog is loaded once ([`store`]), selections flow through the
//! [`ui::ViewCoordinator`], and [`render`] turns them into cards and matchup verdicts.

pub mod model;
pub mod render;
pub mod slug;
pub mod store;
pub mod tui;
pub mod ui;
