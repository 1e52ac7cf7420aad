use yew::prelude::*;

use crate::components::flip_card::FlipCard;
use crate::config::asset_url;
use crate::content::{NarrativePoint, GROUP_LIMITATIONS, OFFICIAL_UPGRADES};
use crate::section::Section;
use crate::state::UiAction;

#[derive(Properties, PartialEq)]
pub struct OriginProps {
    pub flipped: bool,
    pub on_action: Callback<UiAction>,
}

fn intro() -> Html {
    html! {
        <>
            <p class="origin-quote">{"「擺脫洗版困擾，讓公會服務回歸專業與精準。」"}</p>
            <p>
                {"過去我們依賴 LINE 群組進行溝通，雖然方便，卻也帶來了訊息紛雜、重要公告容易被覆蓋、以及隱私權無法保障等問題。官方 LINE 服務的建置，正是為了解決這些溝通挑戰。"}
            </p>
        </>
    }
}

fn point_list(points: &[NarrativePoint], bullet: &'static str) -> Html {
    html! {
        <ul class="narrative-list">
            { for points.iter().map(|point| html! {
                <li>
                    <span class={classes!("bullet", bullet)}></span>
                    <div>
                        <strong>{point.heading}</strong>
                        <span>{point.body}</span>
                    </div>
                </li>
            }) }
        </ul>
    }
}

#[function_component(OriginSection)]
pub fn origin_section(props: &OriginProps) -> Html {
    let on_flip = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: ()| on_action.emit(UiAction::FlipOrigin))
    };

    // Keyed by side so the fade-in animation replays on every flip.
    let narrative = if props.flipped {
        html! {
            <div key="official" class="narrative fade-slide">
                <div class="narrative-header">
                    <div class="narrative-icon gold">{"⚡"}</div>
                    <h3>{"官方 LINE 服務"}</h3>
                </div>
                <p class="narrative-lead strong">{"數位轉型帶來的全面升級："}</p>
                { point_list(&OFFICIAL_UPGRADES, "gold") }
            </div>
        }
    } else {
        html! {
            <div key="group" class="narrative fade-slide">
                <div class="narrative-header">
                    <div class="narrative-icon">{"👥"}</div>
                    <h3>{"一般 LINE 群組"}</h3>
                </div>
                <p class="narrative-lead">{"傳統通訊方式的侷限性："}</p>
                { point_list(&GROUP_LIMITATIONS, "gray") }
            </div>
        }
    };

    html! {
        <section id={Section::Origin.id()} class="origin-section">
            <div class="container origin-grid">
                <div class="origin-left">
                    <div class="eyebrow">{"Origin & Vision"}</div>
                    <h2 class="section-title">
                        <span class="title-en">{"WHY WE NEED"}<br /><small>{"OFFICIAL LINE"}</small></span>
                        {"為什麼我們需要"}<br /><span class="gold-text">{"官方 LINE"}</span>{" 而非群組？"}
                    </h2>
                    <div class="gold-rule"></div>
                    <div class="origin-intro mobile-only">{ intro() }</div>
                    <FlipCard
                        class={classes!("origin-card")}
                        flipped={props.flipped}
                        on_flip={on_flip}
                        front={html! { <img src={asset_url("origin-group.png")} alt="Traditional Messy Group" /> }}
                        back={html! { <img src={asset_url("origin-official.png")} alt="Official Digital Service" /> }}
                    />
                    <div class="origin-hint">
                        {"提示：點擊上方圖片，體驗從傳統群組到官方智慧服務的翻轉進化。"}
                    </div>
                </div>
                <div class="origin-right">
                    <div class="origin-intro desktop-only">{ intro() }</div>
                    <div class="divider desktop-only"></div>
                    { narrative }
                </div>
            </div>
        </section>
    }
}
