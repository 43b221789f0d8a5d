// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Catalog loading.
//!
//! Reads the champion catalog from a file or URL, folds its loose JSON shapes into canonical
//! champions, and falls back to a built-in set when nothing usable arrives.

pub mod catalog_source;

pub use catalog_source::{
    fallback_catalog, load_catalog, normalize_payload, parse_catalog, try_load_catalog,
    CatalogError, CatalogSource, LoadOptions, DEFAULT_CATALOG_PATH, DEFAULT_LOAD_TIMEOUT,
};
