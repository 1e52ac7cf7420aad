use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config::asset_url;
use crate::section::Section;
use crate::state::UiAction;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub condensed: bool,
    pub menu_open: bool,
    pub on_action: Callback<UiAction>,
    /// Closes the mobile menu and scrolls to the section.
    pub on_navigate: Callback<Section>,
    pub on_logo: Callback<()>,
}

fn nav_link(section: Section, class: &'static str, on_navigate: &Callback<Section>, label: Html) -> Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };
    html! {
        <a href={section.href()} class={class} onclick={onclick}>{label}</a>
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { condensed, menu_open, on_action, on_navigate, on_logo } = props;

    let toggle_menu = {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(UiAction::ToggleMenu);
        })
    };

    let close_menu = {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(UiAction::CloseMenu);
        })
    };

    let logo_click = {
        let on_logo = on_logo.clone();
        Callback::from(move |_: MouseEvent| on_logo.emit(()))
    };

    let content_sections = &Section::ALL[..Section::ALL.len() - 1];

    html! {
        <>
            <nav class={classes!("top-nav", condensed.then(|| "condensed"))}>
                <div class="nav-content">
                    <div class="nav-logo" onclick={logo_click}>
                        <img src={asset_url("logo.png")} alt="Logo" />
                        <div class="nav-logo-text">
                            <span class="nav-title">{"高雄市建築師公會官方LINE"}</span>
                            <span class="nav-subtitle">{"OFFICIAL LINE SERVICE"}</span>
                        </div>
                    </div>

                    <div class="nav-links">
                        { for content_sections.iter().map(|s| nav_link(*s, "nav-link", on_navigate, html! { <>{ s.label() }</> })) }
                        { nav_link(Section::Join, "nav-join line-gradient", on_navigate, html! { <>{"💬 "}{Section::Join.label()}</> }) }
                    </div>

                    <button class="burger-menu" aria-label="menu" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </nav>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for content_sections.iter().map(|s| nav_link(*s, "mobile-link", on_navigate, html! { <>{ s.label() }</> })) }
                            { nav_link(Section::Join, "mobile-join line-gradient", on_navigate, html! { <>{"立即加入 LINE"}</> }) }
                            <button class="mobile-close" onclick={close_menu}>{"✕ 關閉選單"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
