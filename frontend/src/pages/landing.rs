use yew::prelude::*;
use yew::functional::UseReducerDispatcher;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Timeout;
use log::{info, warn};

use crate::components::bot::BotSection;
use crate::components::feature_grid::FeatureGrid;
use crate::components::hero::Hero;
use crate::components::nav::Nav;
use crate::components::origin::OriginSection;
use crate::components::timeline::TimelineSection;
use crate::config::{self, asset_url};
use crate::content::TIMELINE;
use crate::scroll::{scroll_to_section, scroll_to_top, Viewport, WindowViewport};
use crate::section::Section;
use crate::state::{UiAction, UiState};
use crate::timeline::{current_phase_index, today_in_taipei};

/// Closes the mobile menu, then scrolls to the anchor if it exists.
pub fn navigate_to<V: Viewport + ?Sized>(viewport: &V, id: &str, dispatch: impl Fn(UiAction)) -> Option<f64> {
    dispatch(UiAction::CloseMenu);
    scroll_to_section(viewport, id)
}

/// Follows a `#section` location hash. Hashes that name no section are left alone.
pub fn follow_hash<V: Viewport + ?Sized>(viewport: &V, hash: &str, dispatch: impl Fn(UiAction)) -> Option<f64> {
    let section = Section::from_hash(hash)?;
    info!("Deep link to #{}", section.id());
    navigate_to(viewport, section.id(), dispatch)
}

fn scroll_to_location_hash(dispatcher: &UseReducerDispatcher<UiState>) {
    let Some(viewport) = WindowViewport::current() else {
        return;
    };
    if let Some(hash) = viewport.hash() {
        follow_hash(&viewport, &hash, |action| dispatcher.dispatch(action));
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(UiState::default);
    let current_phase = use_state(|| current_phase_index(&TIMELINE, config::CURRENT_PHASE_RULE, today_in_taipei()));

    // Track scroll position for the nav bar
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let state = state.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    state.dispatch(UiAction::Scrolled(scroll_y));
                                }
                            }
                        }
                    });
                    if let Err(err) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        warn!("Could not watch scroll position: {:?}", err);
                    }
                    // Initial check
                    if let Ok(scroll_y) = window.scroll_y() {
                        state.dispatch(UiAction::Scrolled(scroll_y));
                    }
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Honour #section links on load and on later hash changes
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                // Give the sections a moment to lay out before measuring them
                let initial = Timeout::new(100, {
                    let dispatcher = dispatcher.clone();
                    move || scroll_to_location_hash(&dispatcher)
                });

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || scroll_to_location_hash(&dispatcher));
                    if let Err(err) = window.add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref()) {
                        warn!("Could not watch location hash: {:?}", err);
                    }
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref());
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    initial.cancel();
                    destructor();
                }
            },
            (),
        );
    }

    let on_action = {
        let state = state.clone();
        Callback::from(move |action: UiAction| state.dispatch(action))
    };

    let on_navigate = {
        let state = state.clone();
        Callback::from(move |section: Section| {
            info!("Navigating to #{}", section.id());
            match WindowViewport::current() {
                Some(viewport) => {
                    navigate_to(&viewport, section.id(), |action| state.dispatch(action));
                }
                None => state.dispatch(UiAction::CloseMenu),
            }
        })
    };

    let on_logo = Callback::from(|_: ()| {
        if let Some(viewport) = WindowViewport::current() {
            scroll_to_top(&viewport);
        }
    });

    html! {
        <div class="landing-page">
            <Nav
                condensed={state.scrolled_past_threshold}
                menu_open={state.mobile_menu_open}
                on_action={on_action.clone()}
                on_navigate={on_navigate.clone()}
                on_logo={on_logo}
            />

            <Hero on_navigate={on_navigate} />

            <main>
                <OriginSection flipped={state.origin_flipped} on_action={on_action.clone()} />

                <section id={Section::Features.id()} class="features-section">
                    <div class="blueprint-grid" aria-hidden="true"></div>
                    <div class="container">
                        <div class="section-heading">
                            <div class="eyebrow">{"Core Functions"}</div>
                            <h2 class="section-title large">{"六大核心服務功能"}</h2>
                            <p class="lead">{"針對建築師日常需求量身訂製，整合公會所有核心業務至單一數位入口。"}</p>
                        </div>
                        <FeatureGrid modal={state.feature_modal} on_action={on_action} />
                    </div>
                </section>

                <BotSection />

                <TimelineSection current={*current_phase} />

                <section id={Section::Join.id()} class="join-section">
                    <div class="container">
                        <div class="join-card">
                            <div class="join-copy">
                                <h2>{"現在就加入公會"}<br />{"官方 LINE"}</h2>
                                <p>
                                    {"掌握最新建築脈動，體驗最便捷的數位會務服務。"}<br />
                                    {"公會與您一同邁向智慧建築新視界。"}
                                </p>
                                <div class="join-actions">
                                    <a href={config::LINE_INVITE_URL} target="_blank" rel="noopener noreferrer">
                                        <img src={config::LINE_ADD_FRIEND_BUTTON} alt="加入好友" height="36" />
                                    </a>
                                    <span class="line-id">{format!("或搜尋 ID: {}", config::LINE_ID)}</span>
                                </div>
                            </div>
                            <div class="join-qr">
                                <div class="qr-frame">
                                    <img src={config::LINE_QR_CODE_URL} alt="LINE QR Code" />
                                </div>
                                <span class="qr-caption">{"掃描 QR Code 加入"}</span>
                            </div>
                        </div>
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <div class="container footer-content">
                    <div>
                        <a href={config::ASSOCIATION_URL} target="_blank" rel="noopener noreferrer" class="footer-brand">
                            <img src={asset_url("logo.png")} alt="Logo" />
                            {"高雄市建築師公會"}
                        </a>
                        <p>{"807高雄市三民區博愛一路366號23樓"}<br />{"Tel: 07 323 7248"}</p>
                    </div>
                </div>
                <div class="footer-legal">
                    {"© 2026 KAOHSIUNG ASSOCIATION OF ARCHITECTS. DIGITAL TRANSFORMATION PROJECT."}
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::scroll::testing::FakeViewport;

    fn page() -> FakeViewport {
        FakeViewport::with_sections(&[
            ("origin", 960.0),
            ("features", 2400.0),
            ("bot", 3600.0),
            ("planning", 4700.0),
            ("join", 6100.0),
        ])
    }

    #[test]
    fn scroll_then_jump_to_features() {
        let viewport = page();
        let state = RefCell::new(UiState::default().apply(UiAction::ToggleMenu));
        let dispatch = |action| {
            state.replace_with(|s| s.clone().apply(action));
        };

        viewport.scroll_y.set(800.0);
        dispatch(UiAction::Scrolled(viewport.scroll_y()));
        assert!(state.borrow().scrolled_past_threshold);
        assert!(state.borrow().mobile_menu_open);

        let target = navigate_to(&viewport, Section::Features.id(), dispatch);
        assert!(!state.borrow().mobile_menu_open);
        assert_eq!(target, Some(2320.0));
        assert_eq!(viewport.element_top("features"), Some(config::HEADER_OFFSET));
    }

    #[test]
    fn every_nav_target_lands_under_the_header() {
        for section in Section::ALL {
            let viewport = page();
            viewport.scroll_y.set(150.0);
            navigate_to(&viewport, section.id(), |_| {});
            assert_eq!(viewport.element_top(section.id()), Some(80.0), "{:?}", section);
        }
    }

    #[test]
    fn missing_anchor_still_closes_the_menu() {
        let viewport = page();
        let state = RefCell::new(UiState::default().apply(UiAction::ToggleMenu));
        let target = navigate_to(&viewport, "nonexistent-id", |action| {
            state.replace_with(|s| s.clone().apply(action));
        });
        assert_eq!(target, None);
        assert!(viewport.requests.borrow().is_empty());
        assert!(!state.borrow().mobile_menu_open);
    }

    #[test]
    fn hash_change_closes_the_menu_before_scrolling() {
        let viewport = page();
        viewport.scroll_y.set(5000.0);
        let state = RefCell::new(UiState::default().apply(UiAction::ToggleMenu));
        let target = follow_hash(&viewport, "#origin", |action| {
            state.replace_with(|s| s.clone().apply(action));
        });
        assert_eq!(target, Some(880.0));
        assert!(!state.borrow().mobile_menu_open);
        assert_eq!(viewport.element_top("origin"), Some(config::HEADER_OFFSET));
    }

    #[test]
    fn unknown_hash_is_ignored() {
        let viewport = page();
        let state = RefCell::new(UiState::default().apply(UiAction::ToggleMenu));
        let target = follow_hash(&viewport, "#pricing", |action| {
            state.replace_with(|s| s.clone().apply(action));
        });
        assert_eq!(target, None);
        assert!(viewport.requests.borrow().is_empty());
        assert!(state.borrow().mobile_menu_open);
    }
}
