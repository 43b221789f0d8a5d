// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A catalog holds champions in canonical shape; selection lookups and the sorted listing read
//! from it.

pub mod catalog;
pub mod champion;

pub use catalog::{Catalog, CatalogOrigin};
pub use champion::{Champion, FieldKeys, FIELD_KEYS};
