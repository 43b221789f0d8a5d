// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One catalogued champion in canonical shape.
///
/// Catalog files use a handful of alternate field names; [`Champion::from_json_object`] folds
/// them into this shape once, so nothing downstream has to probe alternate keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lore: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strong_against: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weak_against: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synergy_with: Vec<String>,
}

/// Candidate keys for each canonical field, in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKeys {
    pub name: &'static [&'static str],
    pub lane: &'static [&'static str],
    pub class: &'static [&'static str],
    pub lore: &'static [&'static str],
    pub description: &'static [&'static str],
    pub strong_against: &'static [&'static str],
    pub weak_against: &'static [&'static str],
    pub synergy_with: &'static [&'static str],
}

pub const FIELD_KEYS: FieldKeys = FieldKeys {
    name: &["name", "nome"],
    lane: &["lane", "role", "role_pt", "cargo"],
    class: &["class", "classe", "type"],
    lore: &["lore", "bio", "historia"],
    description: &["description", "desc", "descricao"],
    strong_against: &["forte_contra", "strong_against", "strong"],
    weak_against: &["fraco_contra", "weak_against", "weak"],
    synergy_with: &["sinergia_com", "synergy_with", "synergy"],
};

impl Champion {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_lane(mut self, lane: impl Into<String>) -> Self {
        self.lane = Some(lane.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_lore(mut self, lore: impl Into<String>) -> Self {
        self.lore = Some(lore.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_strong_against<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strong_against = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_weak_against<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weak_against = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_synergy_with<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synergy_with = names.into_iter().map(Into::into).collect();
        self
    }

    /// Builds a champion from one loosely-shaped catalog object.
    ///
    /// The own `name` wins. Without one, `fallback_name` (the mapping key for object-keyed
    /// catalogs) is assigned first, and only then is an alternate name such as `nome` promoted.
    /// Missing or wrongly-typed optional fields become empty.
    pub fn from_json_object(object: &Map<String, Value>, fallback_name: Option<&str>) -> Self {
        let keys = FIELD_KEYS;
        let (own_name, promoted_names) = keys.name.split_at(1);
        let name = first_text(object, own_name)
            .or_else(|| fallback_name.map(ToOwned::to_owned))
            .or_else(|| first_text(object, promoted_names))
            .unwrap_or_default();

        Self {
            name,
            lane: first_text(object, keys.lane),
            class: first_text(object, keys.class),
            lore: first_text(object, keys.lore),
            description: first_text(object, keys.description),
            strong_against: first_list(object, keys.strong_against),
            weak_against: first_list(object, keys.weak_against),
            synergy_with: first_list(object, keys.synergy_with),
        }
    }

    pub fn is_strong_against(&self, name: &str) -> bool {
        self.strong_against.iter().any(|candidate| candidate == name)
    }

    pub fn is_weak_against(&self, name: &str) -> bool {
        self.weak_against.iter().any(|candidate| candidate == name)
    }
}

/// Text of the first present candidate. A candidate is present unless it is missing, `null`,
/// `false`, `0` or an empty string; the chain stops there even if the value is not text.
fn first_text(object: &Map<String, Value>, candidates: &[&str]) -> Option<String> {
    match first_present(object, candidates)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Entries of the first present candidate. Any array counts as present, an empty one included,
/// and a lone string reads as one entry.
fn first_list(object: &Map<String, Value>, candidates: &[&str]) -> Vec<String> {
    match first_present(object, candidates) {
        Some(Value::Array(items)) => items.iter().map(list_entry_text).collect(),
        Some(Value::String(text)) => vec![text.clone()],
        _ => Vec::new(),
    }
}

fn first_present<'a>(object: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a Value> {
    candidates.iter().filter_map(|key| object.get(*key)).find(|value| is_present(value))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn list_entry_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::Champion;

    fn object(value: Value) -> serde_json::Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn canonical_keys_are_read_directly() {
        let champion = Champion::from_json_object(
            &object(json!({
                "name": "Akali",
                "lane": "MID/TOP",
                "class": "Assassin",
                "lore": "A rogue ninja.",
                "description": "Very mobile.",
                "strong_against": ["Ryze"],
                "weak_against": ["Galio"],
                "synergy_with": ["Shen"]
            })),
            None,
        );

        assert_eq!(
            champion,
            Champion::new("Akali")
                .with_lane("MID/TOP")
                .with_class("Assassin")
                .with_lore("A rogue ninja.")
                .with_description("Very mobile.")
                .with_strong_against(["Ryze"])
                .with_weak_against(["Galio"])
                .with_synergy_with(["Shen"])
        );
    }

    #[test]
    fn alternate_keys_fill_missing_fields() {
        let champion = Champion::from_json_object(
            &object(json!({
                "nome": "Garen",
                "cargo": "TOP",
                "classe": "Lutador",
                "historia": "Demaciano.",
                "descricao": "Simples.",
                "forte_contra": ["Teemo"],
                "fraco": ["Darius"],
                "weak": ["Darius"],
                "sinergia_com": ["Lux"]
            })),
            None,
        );

        assert_eq!(champion.name, "Garen");
        assert_eq!(champion.lane.as_deref(), Some("TOP"));
        assert_eq!(champion.class.as_deref(), Some("Lutador"));
        assert_eq!(champion.lore.as_deref(), Some("Demaciano."));
        assert_eq!(champion.description.as_deref(), Some("Simples."));
        assert_eq!(champion.strong_against, vec!["Teemo"]);
        assert_eq!(champion.weak_against, vec!["Darius"]);
        assert_eq!(champion.synergy_with, vec!["Lux"]);
    }

    #[test]
    fn list_keys_prefer_localized_names_first() {
        let champion = Champion::from_json_object(
            &object(json!({
                "name": "Zed",
                "forte_contra": ["Lux"],
                "strong_against": ["Xerath"]
            })),
            None,
        );
        assert_eq!(champion.strong_against, vec!["Lux"]);
    }

    #[test]
    fn empty_strings_and_falsy_scalars_fall_through_to_later_keys() {
        let champion = Champion::from_json_object(
            &object(json!({
                "name": "",
                "nome": "Ahri",
                "lane": "",
                "role": 0,
                "role_pt": false,
                "cargo": "MID",
                "class": null,
                "classe": "Mage",
                "fraco_contra": "",
                "weak_against": ["Yasuo"]
            })),
            None,
        );
        assert_eq!(champion.name, "Ahri");
        assert_eq!(champion.lane.as_deref(), Some("MID"));
        assert_eq!(champion.class.as_deref(), Some("Mage"));
        assert_eq!(champion.weak_against, vec!["Yasuo"]);
    }

    #[test]
    fn empty_list_stops_the_fallback_chain() {
        let champion = Champion::from_json_object(
            &object(json!({
                "name": "Zed",
                "forte_contra": [],
                "strong_against": ["Lux"],
                "sinergia_com": [],
                "synergy": "Shen"
            })),
            None,
        );
        assert!(champion.strong_against.is_empty());
        assert!(champion.synergy_with.is_empty());
        assert!(!champion.is_strong_against("Lux"));
    }

    #[test]
    fn present_value_of_the_wrong_type_stops_the_chain() {
        let champion = Champion::from_json_object(
            &object(json!({
                "name": "Zed",
                "lane": ["MID"],
                "role": "TOP",
                "forte_contra": 5,
                "strong": ["Lux"]
            })),
            None,
        );
        assert_eq!(champion.lane, None);
        assert!(champion.strong_against.is_empty());
    }

    #[test]
    fn mapping_key_wins_over_promoted_alternate_name() {
        let champion =
            Champion::from_json_object(&object(json!({ "nome": "Garen the Might" })), Some("Garen"));
        assert_eq!(champion.name, "Garen");

        let champion = Champion::from_json_object(
            &object(json!({ "name": "", "nome": "Garen the Might" })),
            Some("Garen"),
        );
        assert_eq!(champion.name, "Garen");
    }

    #[test]
    fn missing_and_mistyped_fields_become_empty() {
        let champion = Champion::from_json_object(
            &object(json!({ "lore": null, "class": {}, "weak_against": 7 })),
            Some("Ornn"),
        );
        assert_eq!(champion, Champion::new("Ornn"));
    }

    #[test]
    fn own_name_beats_fallback_name() {
        let champion = Champion::from_json_object(&object(json!({ "name": "Jinx" })), Some("key"));
        assert_eq!(champion.name, "Jinx");
    }

    #[test]
    fn scalar_list_and_non_string_entries_are_tolerated() {
        let champion = Champion::from_json_object(
            &object(json!({ "name": "Nami", "synergy": "Lucian", "strong": ["Draven", 3] })),
            None,
        );
        assert_eq!(champion.synergy_with, vec!["Lucian"]);
        assert_eq!(champion.strong_against, vec!["Draven", "3"]);
    }

    #[test]
    fn serialized_shape_uses_canonical_keys_and_reloads_unchanged() {
        let champion = Champion::from_json_object(
            &object(json!({
                "nome": "Vel'Koz",
                "cargo": "MID",
                "forte_contra": ["Xerath"],
                "sinergia_com": []
            })),
            None,
        );

        let value = serde_json::to_value(&champion).expect("serialize");
        assert_eq!(
            value,
            json!({ "name": "Vel'Koz", "lane": "MID", "strong_against": ["Xerath"] })
        );

        let decoded: Champion = serde_json::from_value(value.clone()).expect("deserialize");
        assert_eq!(decoded, champion);
        assert_eq!(Champion::from_json_object(&object(value), None), champion);
    }

    #[test]
    fn membership_checks_are_exact() {
        let champion =
            Champion::new("Akali").with_strong_against(["Ryze"]).with_weak_against(["Galio"]);
        assert!(champion.is_strong_against("Ryze"));
        assert!(!champion.is_strong_against("ryze"));
        assert!(champion.is_weak_against("Galio"));
        assert!(!champion.is_weak_against("Ryze"));
    }
}
