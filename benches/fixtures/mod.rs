// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{json, Map, Value};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("lanedex_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Large,
}

impl Case {
    pub fn len(self) -> usize {
        match self {
            Self::Small => 40,
            Self::Large => 2_000,
        }
    }
}

const SYLLABLES: &[&str] =
    &["ka", "ri", "vel", "zo", "sha", "mun", "dé", "thra", "o", "lux", "gal", "'ve", "ny", "é"];
const LANES: &[&str] = &["TOP", "JUNGLE", "MID", "ADC", "SUPPORT", "MID/TOP"];
const CLASSES: &[&str] = &["Assassin", "Mage", "Tank", "Marksman", "Fighter", "Enchanter"];

/// Deterministic display name for index `idx`; some names carry accents and apostrophes.
pub fn name(idx: usize) -> String {
    let mut out = String::new();
    let mut n = idx + 7;
    for _ in 0..3 {
        out.push_str(SYLLABLES[n % SYLLABLES.len()]);
        n = n / SYLLABLES.len() + idx * 31 + 3;
    }
    let mut chars = out.chars();
    let head = chars.next().map(|ch| ch.to_uppercase().collect::<String>()).unwrap_or_default();
    format!("{head}{} {idx}", chars.as_str())
}

fn entry(idx: usize, len: usize, keyed: bool) -> Value {
    let neighbours = |offset: usize| -> Vec<String> {
        (1..=3).map(|step| name((idx + step * offset) % len)).collect()
    };

    let mut object = Map::new();
    if !keyed || idx % 2 == 0 {
        object.insert("name".to_owned(), json!(name(idx)));
    }
    // Alternate keys so normalization walks every candidate list.
    let (lane_key, lore_key) = if idx % 3 == 0 { ("role", "bio") } else { ("lane", "lore") };
    object.insert(lane_key.to_owned(), json!(LANES[idx % LANES.len()]));
    object.insert("class".to_owned(), json!(CLASSES[idx % CLASSES.len()]));
    object.insert(lore_key.to_owned(), json!(format!("Lore entry {idx} ").repeat(12)));
    object.insert("forte_contra".to_owned(), json!(neighbours(7)));
    object.insert("weak_against".to_owned(), json!(neighbours(11)));
    object.insert("sinergia_com".to_owned(), json!(neighbours(13)));
    Value::Object(object)
}

/// Catalog document as a JSON array of champion objects.
pub fn array_payload(case: Case) -> Value {
    let len = case.len();
    Value::Array((0..len).map(|idx| entry(idx, len, false)).collect())
}

/// Catalog document as an object keyed by champion name.
pub fn keyed_payload(case: Case) -> Value {
    let len = case.len();
    let map = (0..len).map(|idx| (name(idx), entry(idx, len, true))).collect::<Map<_, _>>();
    Value::Object(map)
}
