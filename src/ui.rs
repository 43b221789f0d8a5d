// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selection state and the view coordinator.
//!
//! The coordinator owns the catalog and the two selection slots, consumes [`UiEvent`]s, and
//! keeps the rendered [`ViewOutput`] in sync. It has no terminal dependency, so the whole
//! selection/analyze flow can be driven headless.

use crate::model::Catalog;
use crate::render::{analyze, render_card, CardFragment, MatchupError, MatchupFragment};
use crate::slug::LinkTemplates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Primary,
    Secondary,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Primary, Slot::Secondary];

    /// Stable identifier used for fragment ids.
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "Ally",
            Self::Secondary => "Enemy",
        }
    }

    /// Key that opens this slot's abilities page in the TUI.
    pub fn open_key(self) -> char {
        match self {
            Self::Primary => 'o',
            Self::Secondary => 'O',
        }
    }
}

/// Which slots currently hold a name. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    None,
    PrimaryOnly,
    SecondaryOnly,
    Both,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    primary: Option<String>,
    secondary: Option<String>,
}

impl SelectionState {
    pub fn get(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Primary => self.primary.as_deref(),
            Slot::Secondary => self.secondary.as_deref(),
        }
    }

    /// Sets a slot; empty names clear it.
    pub fn set(&mut self, slot: Slot, name: Option<String>) {
        let name = name.filter(|name| !name.is_empty());
        match slot {
            Slot::Primary => self.primary = name,
            Slot::Secondary => self.secondary = name,
        }
    }

    pub fn view_state(&self) -> ViewState {
        match (self.primary.is_some(), self.secondary.is_some()) {
            (false, false) => ViewState::None,
            (true, false) => ViewState::PrimaryOnly,
            (false, true) => ViewState::SecondaryOnly,
            (true, true) => ViewState::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SelectionChanged { slot: Slot, name: Option<String> },
    AnalyzeRequested,
}

/// What the detail pane shows: 0–2 cards (primary first) and an optional matchup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOutput {
    pub cards: Vec<CardFragment>,
    pub matchup: Option<MatchupFragment>,
}

impl ViewOutput {
    pub fn card(&self, slot: Slot) -> Option<&CardFragment> {
        self.cards.iter().find(|card| card.slot == slot)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.matchup.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ViewCoordinator {
    catalog: Catalog,
    links: LinkTemplates,
    selection: SelectionState,
    output: ViewOutput,
    scroll_to_matchup: bool,
    rev: u64,
}

impl ViewCoordinator {
    pub fn new(catalog: Catalog, links: LinkTemplates) -> Self {
        Self {
            catalog,
            links,
            selection: SelectionState::default(),
            output: ViewOutput::default(),
            scroll_to_matchup: false,
            rev: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn links(&self) -> &LinkTemplates {
        &self.links
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn view_state(&self) -> ViewState {
        self.selection.view_state()
    }

    pub fn output(&self) -> &ViewOutput {
        &self.output
    }

    /// Bumped whenever `output` changes.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    /// One-shot request to bring the matchup into view, raised by a successful analyze.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_matchup)
    }

    pub fn handle(&mut self, event: UiEvent) -> Result<(), MatchupError> {
        match event {
            UiEvent::SelectionChanged { slot, name } => {
                self.selection.set(slot, name);
                self.refresh_cards();
                Ok(())
            }
            UiEvent::AnalyzeRequested => self.analyze(),
        }
    }

    /// Swaps the catalog wholesale. The selection is kept; names that no longer resolve simply
    /// stop rendering.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.refresh_cards();
    }

    fn analyze(&mut self) -> Result<(), MatchupError> {
        let primary = self.selection.get(Slot::Primary).unwrap_or_default();
        let secondary = self.selection.get(Slot::Secondary).unwrap_or_default();
        let matchup = analyze(&self.catalog, primary, secondary)?;

        self.output.matchup = Some(matchup);
        self.scroll_to_matchup = true;
        self.bump_rev();
        Ok(())
    }

    fn refresh_cards(&mut self) {
        let slots: &[Slot] = match self.selection.view_state() {
            ViewState::None => &[],
            ViewState::PrimaryOnly => &[Slot::Primary],
            ViewState::SecondaryOnly => &[Slot::Secondary],
            ViewState::Both => &Slot::ALL,
        };

        let cards = slots
            .iter()
            .filter_map(|&slot| {
                let name = self.selection.get(slot)?;
                let champion = self.catalog.find_by_name(name)?;
                Some(render_card(champion, slot, &self.links))
            })
            .collect();

        self.output = ViewOutput { cards, matchup: None };
        self.scroll_to_matchup = false;
        self.bump_rev();
    }

    fn bump_rev(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{SelectionState, Slot, UiEvent, ViewCoordinator, ViewState};
    use crate::model::{Catalog, CatalogOrigin, Champion};
    use crate::render::{MatchupError, Verdict};
    use crate::slug::LinkTemplates;

    #[fixture]
    fn coordinator() -> ViewCoordinator {
        let catalog = Catalog::new(
            vec![
                Champion::new("Akali").with_strong_against(["Ryze"]).with_weak_against(["Galio"]),
                Champion::new("Ryze"),
                Champion::new("Galio"),
                Champion::new("Shen"),
            ],
            CatalogOrigin::Fallback,
        );
        ViewCoordinator::new(catalog, LinkTemplates::default())
    }

    fn select(coordinator: &mut ViewCoordinator, slot: Slot, name: &str) {
        coordinator
            .handle(UiEvent::SelectionChanged { slot, name: Some(name.to_owned()) })
            .expect("selection never fails");
    }

    fn card_ids(coordinator: &ViewCoordinator) -> Vec<&str> {
        coordinator.output().cards.iter().map(|card| card.id.as_str()).collect()
    }

    #[test]
    fn view_state_is_structural() {
        let mut selection = SelectionState::default();
        assert_eq!(selection.view_state(), ViewState::None);
        selection.set(Slot::Secondary, Some("Ryze".to_owned()));
        assert_eq!(selection.view_state(), ViewState::SecondaryOnly);
        selection.set(Slot::Primary, Some("Akali".to_owned()));
        assert_eq!(selection.view_state(), ViewState::Both);
        selection.set(Slot::Secondary, Some(String::new()));
        assert_eq!(selection.view_state(), ViewState::PrimaryOnly);
        assert_eq!(selection.get(Slot::Secondary), None);
    }

    #[rstest]
    fn starts_empty(coordinator: ViewCoordinator) {
        assert_eq!(coordinator.view_state(), ViewState::None);
        assert!(coordinator.output().is_empty());
    }

    #[rstest]
    fn primary_only_renders_one_primary_card(mut coordinator: ViewCoordinator) {
        select(&mut coordinator, Slot::Primary, "Akali");

        assert_eq!(coordinator.view_state(), ViewState::PrimaryOnly);
        assert_eq!(card_ids(&coordinator), vec!["card-primary"]);
        assert!(coordinator.output().matchup.is_none());
    }

    #[rstest]
    fn secondary_only_renders_one_secondary_card(mut coordinator: ViewCoordinator) {
        select(&mut coordinator, Slot::Secondary, "Ryze");

        assert_eq!(coordinator.view_state(), ViewState::SecondaryOnly);
        assert_eq!(card_ids(&coordinator), vec!["card-secondary"]);
        assert_eq!(
            coordinator.output().card(Slot::Secondary).map(|card| card.name.as_str()),
            Some("Ryze")
        );
    }

    #[rstest]
    fn both_render_primary_then_secondary(mut coordinator: ViewCoordinator) {
        select(&mut coordinator, Slot::Secondary, "Ryze");
        select(&mut coordinator, Slot::Primary, "Akali");

        assert_eq!(coordinator.view_state(), ViewState::Both);
        assert_eq!(card_ids(&coordinator), vec!["card-primary", "card-secondary"]);
    }

    #[rstest]
    fn stale_name_renders_nothing_for_its_slot(mut coordinator: ViewCoordinator) {
        select(&mut coordinator, Slot::Primary, "Teemo");
        assert_eq!(coordinator.view_state(), ViewState::PrimaryOnly);
        assert!(coordinator.output().cards.is_empty());

        select(&mut coordinator, Slot::Secondary, "Ryze");
        assert_eq!(card_ids(&coordinator), vec!["card-secondary"]);
    }

    #[rstest]
    #[case("Ryze", Verdict::Favorable)]
    #[case("Galio", Verdict::Unfavorable)]
    #[case("Shen", Verdict::Neutral)]
    fn analyze_shows_matchup_and_requests_scroll(
        mut coordinator: ViewCoordinator,
        #[case] secondary: &str,
        #[case] expected: Verdict,
    ) {
        select(&mut coordinator, Slot::Primary, "Akali");
        select(&mut coordinator, Slot::Secondary, secondary);
        assert!(coordinator.output().matchup.is_none(), "matchup is never shown automatically");

        coordinator.handle(UiEvent::AnalyzeRequested).expect("analyze");

        let matchup = coordinator.output().matchup.as_ref().expect("matchup");
        assert_eq!(matchup.verdict, expected);
        assert_eq!(matchup.primary, "Akali");
        assert_eq!(matchup.secondary, secondary);
        assert!(coordinator.take_scroll_request());
        assert!(!coordinator.take_scroll_request());
    }

    #[rstest]
    fn analyze_without_secondary_is_rejected_without_side_effects(
        mut coordinator: ViewCoordinator,
    ) {
        select(&mut coordinator, Slot::Primary, "Akali");
        let before = coordinator.output().clone();
        let rev = coordinator.rev();

        assert_eq!(coordinator.handle(UiEvent::AnalyzeRequested), Err(MatchupError::SelectBoth));

        assert_eq!(coordinator.output(), &before);
        assert_eq!(coordinator.rev(), rev);
        assert!(!coordinator.take_scroll_request());
    }

    #[rstest]
    fn analyze_with_stale_selection_is_rejected(mut coordinator: ViewCoordinator) {
        select(&mut coordinator, Slot::Primary, "Akali");
        select(&mut coordinator, Slot::Secondary, "Teemo");

        assert_eq!(coordinator.handle(UiEvent::AnalyzeRequested), Err(MatchupError::SelectBoth));
        assert!(coordinator.output().matchup.is_none());
    }

    #[rstest]
    fn any_selection_change_hides_the_matchup(mut coordinator: ViewCoordinator) {
        select(&mut coordinator, Slot::Primary, "Akali");
        select(&mut coordinator, Slot::Secondary, "Ryze");
        coordinator.handle(UiEvent::AnalyzeRequested).unwrap();
        assert!(coordinator.output().matchup.is_some());

        select(&mut coordinator, Slot::Secondary, "Ryze");
        assert!(coordinator.output().matchup.is_none());
        assert!(!coordinator.take_scroll_request());
    }

    #[rstest]
    fn clearing_both_slots_returns_to_none(mut coordinator: ViewCoordinator) {
        select(&mut coordinator, Slot::Primary, "Akali");
        select(&mut coordinator, Slot::Secondary, "Ryze");
        coordinator.handle(UiEvent::AnalyzeRequested).unwrap();

        coordinator.handle(UiEvent::SelectionChanged { slot: Slot::Primary, name: None }).unwrap();
        coordinator
            .handle(UiEvent::SelectionChanged { slot: Slot::Secondary, name: Some(String::new()) })
            .unwrap();

        assert_eq!(coordinator.view_state(), ViewState::None);
        assert!(coordinator.output().is_empty());
    }

    #[rstest]
    fn replacing_the_catalog_drops_unresolvable_cards(mut coordinator: ViewCoordinator) {
        select(&mut coordinator, Slot::Primary, "Akali");
        select(&mut coordinator, Slot::Secondary, "Ryze");

        coordinator.replace_catalog(Catalog::new(
            vec![Champion::new("Ryze").with_lane("MID")],
            CatalogOrigin::Source("next.json".to_owned()),
        ));

        assert_eq!(coordinator.view_state(), ViewState::Both);
        assert_eq!(card_ids(&coordinator), vec!["card-secondary"]);
        assert_eq!(coordinator.output().cards[0].lane, "MID");
    }
}
