use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::config::SCROLL_CONDENSE_THRESHOLD;
use crate::content::FEATURES;

/// Feature detail modal. `flipped` only exists while a feature is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureModal {
    #[default]
    Closed,
    Open { index: usize, flipped: bool },
}

/// Everything on the page that reacts to the visitor. Reset on every reload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    pub scrolled_past_threshold: bool,
    pub mobile_menu_open: bool,
    pub origin_flipped: bool,
    pub feature_modal: FeatureModal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiAction {
    /// Current vertical scroll offset in px.
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
    FlipOrigin,
    OpenFeature(usize),
    CloseModal,
    ToggleModalFlip,
}

pub fn is_condensed(scroll_offset: f64) -> bool {
    scroll_offset > SCROLL_CONDENSE_THRESHOLD
}

impl UiState {
    pub fn selected_feature(&self) -> Option<usize> {
        match self.feature_modal {
            FeatureModal::Open { index, .. } => Some(index),
            FeatureModal::Closed => None,
        }
    }

    pub fn feature_modal_flipped(&self) -> bool {
        matches!(self.feature_modal, FeatureModal::Open { flipped: true, .. })
    }

    pub fn apply(mut self, action: UiAction) -> Self {
        match action {
            UiAction::Scrolled(offset) => {
                self.scrolled_past_threshold = is_condensed(offset);
            }
            UiAction::ToggleMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
            }
            UiAction::CloseMenu => {
                self.mobile_menu_open = false;
            }
            UiAction::FlipOrigin => {
                self.origin_flipped = !self.origin_flipped;
            }
            UiAction::OpenFeature(index) => {
                if index < FEATURES.len() {
                    self.feature_modal = FeatureModal::Open { index, flipped: false };
                } else {
                    debug!("Ignoring request to open unknown feature {}", index);
                }
            }
            UiAction::CloseModal => {
                self.feature_modal = FeatureModal::Closed;
            }
            UiAction::ToggleModalFlip => {
                if let FeatureModal::Open { index, flipped } = self.feature_modal {
                    self.feature_modal = FeatureModal::Open { index, flipped: !flipped };
                }
            }
        }
        self
    }
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).clone().apply(action);
        // Scroll events fire constantly; only log when something visible changed.
        if next == *self {
            return self;
        }
        if log::log_enabled!(log::Level::Debug) {
            if let Ok(json) = serde_json::to_string(&next) {
                debug!("{:?} -> {}", action, json);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[UiAction]) -> UiState {
        actions.iter().fold(UiState::default(), |state, action| state.apply(*action))
    }

    #[test]
    fn initial_state_is_all_closed() {
        let state = UiState::default();
        assert!(!state.scrolled_past_threshold);
        assert!(!state.mobile_menu_open);
        assert!(!state.origin_flipped);
        assert_eq!(state.selected_feature(), None);
        assert!(!state.feature_modal_flipped());
    }

    #[test]
    fn condensed_boundary_is_exact_at_fifty() {
        assert!(!is_condensed(0.0));
        assert!(!is_condensed(50.0));
        assert!(is_condensed(50.5));
        assert!(is_condensed(51.0));
    }

    #[test]
    fn scroll_is_level_triggered() {
        let state = run(&[UiAction::Scrolled(800.0), UiAction::Scrolled(10.0)]);
        assert!(!state.scrolled_past_threshold);
        let state = run(&[UiAction::Scrolled(10.0), UiAction::Scrolled(51.0)]);
        assert!(state.scrolled_past_threshold);
    }

    #[test]
    fn menu_toggles_and_close_is_idempotent() {
        assert!(run(&[UiAction::ToggleMenu]).mobile_menu_open);
        assert!(!run(&[UiAction::ToggleMenu, UiAction::ToggleMenu]).mobile_menu_open);
        assert!(!run(&[UiAction::ToggleMenu, UiAction::CloseMenu]).mobile_menu_open);
        assert!(!run(&[UiAction::CloseMenu, UiAction::CloseMenu]).mobile_menu_open);
    }

    #[test]
    fn origin_flip_twice_returns_to_front() {
        assert!(run(&[UiAction::FlipOrigin]).origin_flipped);
        assert_eq!(run(&[UiAction::FlipOrigin, UiAction::FlipOrigin]), UiState::default());
    }

    #[test]
    fn opening_another_feature_resets_the_flip() {
        let state = run(&[
            UiAction::OpenFeature(1),
            UiAction::ToggleModalFlip,
            UiAction::ToggleModalFlip,
            UiAction::ToggleModalFlip,
            UiAction::OpenFeature(4),
        ]);
        assert_eq!(state.feature_modal, FeatureModal::Open { index: 4, flipped: false });
    }

    #[test]
    fn reopening_the_same_feature_also_resets_the_flip() {
        let state = run(&[UiAction::OpenFeature(3), UiAction::ToggleModalFlip, UiAction::OpenFeature(3)]);
        assert!(!state.feature_modal_flipped());
    }

    #[test]
    fn modal_flip_is_ignored_while_closed() {
        let state = run(&[UiAction::ToggleModalFlip]);
        assert_eq!(state.feature_modal, FeatureModal::Closed);
        assert!(!state.feature_modal_flipped());
    }

    #[test]
    fn unknown_feature_index_leaves_state_alone() {
        let state = run(&[UiAction::OpenFeature(2), UiAction::OpenFeature(6)]);
        assert_eq!(state.selected_feature(), Some(2));
        assert_eq!(run(&[UiAction::OpenFeature(usize::MAX)]).selected_feature(), None);
    }

    #[test]
    fn close_then_open_any_feature() {
        for k in 0..FEATURES.len() {
            let state = run(&[UiAction::OpenFeature(5), UiAction::ToggleModalFlip, UiAction::CloseModal]);
            assert_eq!(state.selected_feature(), None);
            let state = state.apply(UiAction::OpenFeature(k));
            assert_eq!(state.selected_feature(), Some(k));
            assert!(!state.feature_modal_flipped());
        }
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let state = Rc::new(UiState::default());
        let next = state.clone().reduce(UiAction::Scrolled(20.0));
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(UiAction::Scrolled(200.0));
        assert!(!Rc::ptr_eq(&state, &next));
        assert!(next.scrolled_past_threshold);
    }

    #[test]
    fn state_serializes_for_inspection() {
        let state = run(&[UiAction::OpenFeature(2), UiAction::ToggleModalFlip]);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["feature_modal"]["Open"]["index"], 2);
        assert_eq!(json["feature_modal"]["Open"]["flipped"], true);
        let back: UiState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn action() -> impl Strategy<Value = UiAction> {
        prop_oneof![
            (0.0f64..5000.0).prop_map(UiAction::Scrolled),
            Just(UiAction::ToggleMenu),
            Just(UiAction::CloseMenu),
            Just(UiAction::FlipOrigin),
            (0usize..8).prop_map(UiAction::OpenFeature),
            Just(UiAction::CloseModal),
            Just(UiAction::ToggleModalFlip),
        ]
    }

    proptest! {
        #[test]
        fn condensed_iff_above_threshold(offset in -100.0f64..10_000.0) {
            let state = UiState::default().apply(UiAction::Scrolled(offset));
            prop_assert_eq!(state.scrolled_past_threshold, offset > 50.0);
        }

        #[test]
        fn selection_is_always_a_valid_index(actions in proptest::collection::vec(action(), 0..64)) {
            let state = actions.into_iter().fold(UiState::default(), UiState::apply);
            if let Some(index) = state.selected_feature() {
                prop_assert!(index < FEATURES.len());
            } else {
                prop_assert!(!state.feature_modal_flipped());
            }
        }

        #[test]
        fn close_from_anywhere_clears_selection(
            actions in proptest::collection::vec(action(), 0..64),
            k in 0usize..6,
        ) {
            let state = actions.into_iter().fold(UiState::default(), UiState::apply);
            let closed = state.apply(UiAction::CloseModal);
            prop_assert_eq!(closed.selected_feature(), None);
            let reopened = closed.apply(UiAction::OpenFeature(k));
            prop_assert_eq!(reopened.feature_modal, FeatureModal::Open { index: k, flipped: false });
        }
    }
}
