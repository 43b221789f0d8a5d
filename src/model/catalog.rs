// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use unicode_normalization::UnicodeNormalization;

use super::Champion;
use crate::slug::is_combining_diacritic;

/// Where the active catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    Source(String),
    Fallback,
}

impl fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(source) => f.write_str(source),
            Self::Fallback => f.write_str("built-in"),
        }
    }
}

/// The single active champion collection for a session.
///
/// Entries keep load order. Lookups and the sorted listing are read views over that order; a
/// new catalog replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    champions: Vec<Champion>,
    origin: CatalogOrigin,
}

impl Catalog {
    pub fn new(champions: Vec<Champion>, origin: CatalogOrigin) -> Self {
        Self { champions, origin }
    }

    pub fn origin(&self) -> &CatalogOrigin {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Champion> {
        self.champions.iter()
    }

    /// All champions ordered by name, ignoring case and accents. Ties keep load order.
    pub fn list_sorted(&self) -> Vec<&Champion> {
        let mut keyed = self
            .champions
            .iter()
            .map(|champion| (collation_key(&champion.name), champion))
            .collect::<Vec<_>>();
        keyed.sort_by(|(key_a, _), (key_b, _)| key_a.cmp(key_b));
        keyed.into_iter().map(|(_, champion)| champion).collect()
    }

    pub fn names_sorted(&self) -> Vec<String> {
        self.list_sorted().into_iter().map(|champion| champion.name.clone()).collect()
    }

    /// Exact-name lookup; the first entry in load order wins when names repeat.
    pub fn find_by_name(&self, name: &str) -> Option<&Champion> {
        if name.is_empty() {
            return None;
        }
        self.champions.iter().find(|champion| champion.name == name)
    }
}

fn collation_key(name: &str) -> String {
    name.nfd().filter(|ch| !is_combining_diacritic(*ch)).flat_map(char::to_lowercase).collect()
}
