// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;

use crate::model::{Catalog, CatalogOrigin, Champion};

pub const DEFAULT_CATALOG_PATH: &str = "champions.json";
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Location of the catalog document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Http(String),
    /// Skip fetching and use the built-in champions.
    Builtin,
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_CATALOG_PATH))
    }
}

impl CatalogSource {
    /// `http://` and `https://` locations are fetched over the network; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Http(raw.to_owned())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => f.write_str(url),
            Self::Builtin => f.write_str("built-in"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { timeout: DEFAULT_LOAD_TIMEOUT }
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Io { path: PathBuf, source: io::Error },
    Http { url: String, source: reqwest::Error },
    Status { url: String, status: u16 },
    Json { origin: String, source: serde_json::Error },
    UnsupportedShape { origin: String, kind: &'static str },
    Empty { origin: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Http { url, source } => write!(f, "request to {url} failed: {source}"),
            Self::Status { url, status } => write!(f, "request to {url} returned status {status}"),
            Self::Json { origin, source } => write!(f, "invalid catalog JSON in {origin}: {source}"),
            Self::UnsupportedShape { origin, kind } => {
                write!(f, "catalog in {origin} must be an array or object, found {kind}")
            }
            Self::Empty { origin } => write!(f, "catalog in {origin} contains no champions"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Http { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Status { .. } | Self::UnsupportedShape { .. } | Self::Empty { .. } => None,
        }
    }
}

/// Loads the catalog, substituting the built-in champions on any failure.
///
/// Single attempt, no retry. Failures are logged and never surfaced to the caller.
pub async fn load_catalog(source: &CatalogSource, options: &LoadOptions) -> Catalog {
    match try_load_catalog(source, options).await {
        Ok(catalog) => {
            tracing::info!(source = %source, champions = catalog.len(), "catalog loaded");
            catalog
        }
        Err(err) => {
            tracing::warn!(
                source = %source,
                error = %err,
                "could not load catalog; using built-in champions"
            );
            fallback_catalog()
        }
    }
}

pub async fn try_load_catalog(
    source: &CatalogSource,
    options: &LoadOptions,
) -> Result<Catalog, CatalogError> {
    let bytes = match source {
        CatalogSource::Builtin => return Ok(fallback_catalog()),
        CatalogSource::File(path) => read_file(path)?,
        CatalogSource::Http(url) => fetch_http(url, options).await?,
    };

    let origin = source.to_string();
    let champions = parse_catalog(&bytes, &origin)?;
    Ok(Catalog::new(champions, CatalogOrigin::Source(origin)))
}

fn read_file(path: &Path) -> Result<Vec<u8>, CatalogError> {
    std::fs::read(path).map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })
}

async fn fetch_http(url: &str, options: &LoadOptions) -> Result<Vec<u8>, CatalogError> {
    let http_err = |source| CatalogError::Http { url: url.to_owned(), source };

    let client = reqwest::Client::builder().timeout(options.timeout).build().map_err(http_err)?;
    let response = client
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .header(reqwest::header::PRAGMA, "no-cache")
        .send()
        .await
        .map_err(http_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status { url: url.to_owned(), status: status.as_u16() });
    }

    let body = response.bytes().await.map_err(http_err)?;
    Ok(body.to_vec())
}

/// Parses and normalizes a catalog document. `origin` only labels errors.
pub fn parse_catalog(bytes: &[u8], origin: &str) -> Result<Vec<Champion>, CatalogError> {
    let value = serde_json::from_slice::<Value>(bytes)
        .map_err(|source| CatalogError::Json { origin: origin.to_owned(), source })?;
    let champions = normalize_payload(value, origin)?;
    if champions.is_empty() {
        return Err(CatalogError::Empty { origin: origin.to_owned() });
    }
    Ok(champions)
}

/// Folds an array or name-keyed object payload into canonical champions.
///
/// Object payloads keep document order; an entry without its own name takes the mapping key.
/// Entries that are not JSON objects are skipped.
pub fn normalize_payload(value: Value, origin: &str) -> Result<Vec<Champion>, CatalogError> {
    match value {
        Value::Array(items) => Ok(items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| match item {
                Value::Object(object) => Some(Champion::from_json_object(object, None)),
                other => {
                    tracing::debug!(origin, index = idx, kind = json_kind(other), "skipping entry");
                    None
                }
            })
            .collect()),
        Value::Object(entries) => Ok(entries
            .iter()
            .filter_map(|(key, item)| match item {
                Value::Object(object) => Some(Champion::from_json_object(object, Some(key))),
                other => {
                    tracing::debug!(origin, key = %key, kind = json_kind(other), "skipping entry");
                    None
                }
            })
            .collect()),
        other => {
            Err(CatalogError::UnsupportedShape { origin: origin.to_owned(), kind: json_kind(&other) })
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Built-in champions used whenever no catalog document can be loaded.
pub fn fallback_catalog() -> Catalog {
    Catalog::new(fallback_champions(), CatalogOrigin::Fallback)
}

fn fallback_champions() -> Vec<Champion> {
    vec![
        Champion::new("Akali")
            .with_lane("MID/TOP")
            .with_class("Assassin")
            .with_lore("Akali was a disciple of the Kinkou order...")
            .with_strong_against(["Ryze", "Orianna", "Lux"])
            .with_weak_against(["Lissandra", "Galio", "Rumble"])
            .with_synergy_with(["Shen", "Lee Sin", "Rakan"])
            .with_description("Akali is an extremely mobile assassin..."),
        Champion::new("Bel'Veth")
            .with_lane("JUNGLE")
            .with_class("Fighter")
            .with_lore("Bel'Veth is an empress of the Void...")
            .with_strong_against(["Slow junglers", "Teams without crowd control"])
            .with_weak_against(["Heavy crowd control", "Comps that isolate her"])
            .with_synergy_with(["Orianna", "Leona", "Miss Fortune"])
            .with_description("Bel'Veth is a Void hunter who scales brutally..."),
    ]
}
