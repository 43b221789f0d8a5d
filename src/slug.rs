// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Champion name slugs and the external links derived from them.
//!
//! A slug is the identifier the upstream asset hosts use for a champion: ASCII letters and
//! digits only, case preserved. Names whose slug cannot be derived mechanically (apostrophes
//! that fold differently, renames, multi-word titles) live in [`SLUG_EXCEPTIONS`].

use unicode_normalization::UnicodeNormalization;

/// Names whose slug is not the mechanical fold of the display name.
pub const SLUG_EXCEPTIONS: &[(&str, &str)] = &[
    ("Cho'Gath", "Chogath"),
    ("Kai'Sa", "Kaisa"),
    ("Kha'Zix", "Khazix"),
    ("Vel'Koz", "Velkoz"),
    ("Rek'Sai", "RekSai"),
    ("Wukong", "MonkeyKing"),
    ("Jarvan IV", "JarvanIV"),
    ("Renata Glasc", "Renata"),
    ("Miss Fortune", "MissFortune"),
    ("Dr. Mundo", "DrMundo"),
    ("Tahm Kench", "TahmKench"),
    ("Twisted Fate", "TwistedFate"),
    ("Xin Zhao", "XinZhao"),
    ("Lee Sin", "LeeSin"),
    ("Master Yi", "MasterYi"),
    ("Aurelion Sol", "AurelionSol"),
    ("Nunu & Willump", "Nunu"),
    ("Kog'Maw", "KogMaw"),
    ("Bel'Veth", "Belveth"),
];

pub const DEFAULT_IMAGE_HOST: &str = "ddragon.leagueoflegends.com";
pub const DEFAULT_DOC_HOST: &str = "www.leagueoflegends.com";
pub const DEFAULT_LOCALE: &str = "pt-br";

/// Derives the asset slug for a champion display name.
///
/// Exception-table hits are returned verbatim. Everything else is NFD-decomposed, stripped of
/// combining diacritical marks (U+0300..=U+036F) and then of every character that is not an
/// ASCII letter or digit.
pub fn derive_slug(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    if let Some(slug) = exception_slug(name) {
        return slug.to_owned();
    }

    name.nfd()
        .filter(|ch| !is_combining_diacritic(*ch))
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

fn exception_slug(name: &str) -> Option<&'static str> {
    SLUG_EXCEPTIONS.iter().find(|(display, _)| *display == name).map(|(_, slug)| *slug)
}

pub(crate) fn is_combining_diacritic(ch: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&ch)
}

/// Host and locale configuration for the links shown on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplates {
    pub image_host: String,
    pub doc_host: String,
    pub locale: String,
}

impl Default for LinkTemplates {
    fn default() -> Self {
        Self {
            image_host: DEFAULT_IMAGE_HOST.to_owned(),
            doc_host: DEFAULT_DOC_HOST.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
        }
    }
}

impl LinkTemplates {
    /// Splash illustration URL; the slug is used as-is.
    pub fn splash_url(&self, name: &str) -> String {
        let slug = derive_slug(name);
        format!("https://{}/cdn/img/champion/splash/{slug}_0.jpg", self.image_host)
    }

    /// Champion documentation page; the slug is lower-cased.
    pub fn champion_page_url(&self, name: &str) -> String {
        let slug = derive_slug(name).to_lowercase();
        format!("https://{}/{}/champions/{slug}/", self.doc_host, self.locale)
    }
}
