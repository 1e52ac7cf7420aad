use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::flip_card::FlipCard;
use crate::config::asset_url;
use crate::content::{FeatureDescriptor, FEATURES};
use crate::state::{FeatureModal, UiAction};

/// Where a click inside the open modal landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalRegion {
    /// The dimmed overlay around the dialog.
    Backdrop,
    /// The dialog itself or anything inside it.
    Content,
}

/// What a region's own click handler does with the event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickOutcome {
    pub action: Option<UiAction>,
    pub stop_propagation: bool,
}

impl ModalRegion {
    pub fn handle_click(self) -> ClickOutcome {
        match self {
            ModalRegion::Backdrop => ClickOutcome {
                action: Some(UiAction::CloseModal),
                stop_propagation: false,
            },
            // Keeps clicks on the dialog from bubbling to the backdrop.
            ModalRegion::Content => ClickOutcome {
                action: None,
                stop_propagation: true,
            },
        }
    }

    /// Handlers a click starting here passes through, innermost first.
    fn bubble_path(self) -> &'static [ModalRegion] {
        match self {
            ModalRegion::Backdrop => &[ModalRegion::Backdrop],
            ModalRegion::Content => &[ModalRegion::Content, ModalRegion::Backdrop],
        }
    }
}

/// Actions emitted while a click bubbles out from `origin`.
pub fn resolve_click(origin: ModalRegion) -> Vec<UiAction> {
    let mut actions = Vec::new();
    for region in origin.bubble_path() {
        let outcome = region.handle_click();
        actions.extend(outcome.action);
        if outcome.stop_propagation {
            break;
        }
    }
    actions
}

/// What the open modal shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalView {
    pub badge: String,
    pub feature: &'static FeatureDescriptor,
    pub flipped: bool,
}

impl ModalView {
    pub fn from_modal(modal: FeatureModal) -> Option<Self> {
        match modal {
            FeatureModal::Closed => None,
            FeatureModal::Open { index, flipped } => FEATURES.get(index).map(|feature| ModalView {
                badge: format!("Feature .0{}", index + 1),
                feature,
                flipped,
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureGridProps {
    pub modal: FeatureModal,
    pub on_action: Callback<UiAction>,
}

#[function_component(FeatureGrid)]
pub fn feature_grid(props: &FeatureGridProps) -> Html {
    let tiles = FEATURES.iter().enumerate().map(|(index, feature)| {
        let onclick = {
            let on_action = props.on_action.clone();
            Callback::from(move |_: MouseEvent| on_action.emit(UiAction::OpenFeature(index)))
        };
        html! {
            <div class="feature-cell" key={index}>
                <div class="feature-tile" onclick={onclick}>
                    <img class="feature-icon" src={asset_url(&format!("icons/{}", feature.icon))} alt={feature.title} />
                    <h3>{feature.title}</h3>
                    <p>{feature.desc}</p>
                    <span class="tile-arrow">{"→"}</span>
                </div>
            </div>
        }
    });

    html! {
        <>
            <div class="feature-grid">
                { for tiles }
            </div>
            {
                match ModalView::from_modal(props.modal) {
                    Some(view) => html! {
                        <FeatureDetailModal view={view} on_action={props.on_action.clone()} />
                    },
                    None => html! {},
                }
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureDetailModalProps {
    pub view: ModalView,
    pub on_action: Callback<UiAction>,
}

#[function_component(FeatureDetailModal)]
pub fn feature_detail_modal(props: &FeatureDetailModalProps) -> Html {
    let FeatureDetailModalProps { view, on_action } = props;
    let feature = view.feature;

    let on_backdrop_click = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| {
            for action in resolve_click(ModalRegion::Backdrop) {
                on_action.emit(action);
            }
        })
    };

    let on_content_click = Callback::from(|e: MouseEvent| {
        if ModalRegion::Content.handle_click().stop_propagation {
            e.stop_propagation();
        }
    });

    let on_close = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(UiAction::CloseModal))
    };

    let on_flip = {
        let on_action = on_action.clone();
        Callback::from(move |_: ()| on_action.emit(UiAction::ToggleModalFlip))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <style>
                {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                        background: rgba(17, 24, 39, 0.8);
                        backdrop-filter: blur(12px);
                        animation: fadeIn 0.3s ease-out;
                    }
                    .modal-content {
                        position: relative;
                        display: flex;
                        width: 100%;
                        max-width: 72rem;
                        height: 80vh;
                        background: white;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        animation: rise 0.4s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    .modal-close {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        z-index: 20;
                        width: 2.5rem;
                        height: 2.5rem;
                        border: none;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.8);
                        color: var(--kaa-navy);
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .modal-text {
                        flex: 1;
                        padding: 4rem;
                        overflow-y: auto;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .modal-badge {
                        display: inline-block;
                        align-self: flex-start;
                        padding: 0.25rem 0.75rem;
                        margin-bottom: 1rem;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: rgba(30, 41, 59, 0.7);
                        background: rgba(212, 175, 55, 0.1);
                        border: 1px solid rgba(212, 175, 55, 0.2);
                    }
                    .modal-title {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        font-family: var(--serif);
                        font-size: 2.75rem;
                        margin: 0 0 1.5rem;
                    }
                    .modal-title img {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        object-fit: contain;
                    }
                    .modal-desc {
                        font-size: 1.25rem;
                        color: var(--kaa-slate);
                    }
                    .modal-details {
                        line-height: 2;
                        color: #4b5563;
                        text-align: justify;
                    }
                    .modal-enter {
                        display: inline-block;
                        margin-top: 1.5rem;
                        padding: 0.75rem 2rem;
                        background: var(--kaa-navy);
                        color: white;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-decoration: none;
                    }
                    .modal-enter:hover {
                        background: var(--kaa-gold);
                        color: var(--kaa-navy);
                    }
                    .modal-image {
                        flex: 1;
                        background: #f3f4f6;
                    }
                    .flip-badge {
                        position: absolute;
                        right: 2rem;
                        bottom: 2rem;
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        color: white;
                        background: rgba(255, 255, 255, 0.2);
                        border: 1px solid rgba(255, 255, 255, 0.4);
                    }
                    .flip-face.back .flip-badge {
                        color: var(--kaa-navy);
                        background: rgba(212, 175, 55, 0.8);
                    }
                    @keyframes rise {
                        from { transform: translateY(30px) scale(0.95); opacity: 0; }
                        to { transform: translateY(0) scale(1); opacity: 1; }
                    }
                    @media (max-width: 768px) {
                        .modal-content { flex-direction: column-reverse; }
                        .modal-image { flex: none; height: 12rem; }
                        .modal-text { padding: 2.5rem; justify-content: flex-start; }
                        .modal-title { font-size: 2.25rem; }
                    }
                "#}
            </style>
            <div class="modal-content" role="dialog" aria-modal="true" onclick={on_content_click}>
                <button class="modal-close" aria-label="close" onclick={on_close}>{"✕"}</button>

                <div class="modal-text">
                    <div class="modal-badge">{view.badge.clone()}</div>
                    <h3 class="modal-title">
                        <img src={asset_url(&format!("icons/{}", feature.icon))} alt={feature.title} />
                        {feature.title}
                    </h3>
                    <div class="gold-rule"></div>
                    <p class="modal-desc">{feature.desc}</p>
                    <p class="modal-details">{feature.details}</p>
                    <div>
                        <a href={feature.link_href()} target="_blank" rel="noopener noreferrer" class="modal-enter">
                            {"ENTER →"}
                        </a>
                    </div>
                </div>

                <FlipCard
                    class={classes!("modal-image")}
                    flipped={view.flipped}
                    on_flip={on_flip}
                    front={html! {
                        <>
                            <img src={feature.images.front} alt={feature.title} />
                            <span class="flip-badge">{"⟳ 點擊翻轉"}</span>
                        </>
                    }}
                    back={html! {
                        <>
                            <img src={feature.images.back} alt={format!("{} Details", feature.title)} />
                            <span class="flip-badge">{"⟳ 返回正面"}</span>
                        </>
                    }}
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UiState;

    /// Image on the face currently turned toward the visitor.
    fn visible_image(view: &ModalView) -> &'static str {
        if view.flipped {
            view.feature.images.back
        } else {
            view.feature.images.front
        }
    }

    #[test]
    fn content_click_stops_before_the_backdrop() {
        assert_eq!(resolve_click(ModalRegion::Content), Vec::<UiAction>::new());
        assert!(ModalRegion::Content.handle_click().stop_propagation);
    }

    #[test]
    fn backdrop_click_closes() {
        assert_eq!(resolve_click(ModalRegion::Backdrop), vec![UiAction::CloseModal]);
        assert!(!ModalRegion::Backdrop.handle_click().stop_propagation);
    }

    #[test]
    fn content_click_without_stopping_would_close() {
        // Same bubbling with the dialog's handler letting the event through.
        let leaky: Vec<UiAction> = [ModalRegion::Content, ModalRegion::Backdrop]
            .iter()
            .filter_map(|region| region.handle_click().action)
            .collect();
        assert_eq!(leaky, vec![UiAction::CloseModal]);
    }

    #[test]
    fn closed_modal_has_no_view() {
        assert_eq!(ModalView::from_modal(FeatureModal::Closed), None);
        assert_eq!(ModalView::from_modal(FeatureModal::Open { index: 6, flipped: false }), None);
    }

    #[test]
    fn badge_numbers_from_one() {
        let view = ModalView::from_modal(FeatureModal::Open { index: 0, flipped: false }).unwrap();
        assert_eq!(view.badge, "Feature .01");
        let view = ModalView::from_modal(FeatureModal::Open { index: 5, flipped: false }).unwrap();
        assert_eq!(view.badge, "Feature .06");
    }

    #[test]
    fn refund_feature_walkthrough() {
        let state = UiState::default().apply(UiAction::OpenFeature(2));
        let view = ModalView::from_modal(state.feature_modal).unwrap();
        assert_eq!(view.feature.title, "查詢退費");
        assert_eq!(view.feature.desc, "線上查詢掛號與退費進度");
        assert_eq!(visible_image(&view), FEATURES[2].images.front);

        let state = state.apply(UiAction::ToggleModalFlip);
        let view = ModalView::from_modal(state.feature_modal).unwrap();
        assert_eq!(visible_image(&view), FEATURES[2].images.back);

        // Clicking the dialog body first does nothing, then the overlay closes it.
        let state = resolve_click(ModalRegion::Content)
            .into_iter()
            .fold(state, UiState::apply);
        assert_eq!(state.selected_feature(), Some(2));
        assert!(state.feature_modal_flipped());
        let state = resolve_click(ModalRegion::Backdrop)
            .into_iter()
            .fold(state, UiState::apply);
        assert_eq!(state.selected_feature(), None);
        assert_eq!(ModalView::from_modal(state.feature_modal), None);
    }
}
