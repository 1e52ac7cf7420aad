use yew::prelude::*;

use crate::content::TIMELINE;
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    /// Phase carrying the "We are here" marker.
    pub current: Option<usize>,
}

#[function_component(TimelineSection)]
pub fn timeline_section(props: &TimelineProps) -> Html {
    let phases = TIMELINE.iter().enumerate().map(|(i, phase)| {
        let is_current = props.current == Some(i);
        html! {
            <div class={classes!("timeline-row", (i % 2 == 0).then(|| "reverse"))} key={i}>
                <div class="timeline-card-slot">
                    <div class={classes!("timeline-card", is_current.then(|| "current"))}>
                        {
                            if is_current {
                                html! {
                                    <div class="here-marker">
                                        <div class="here-pill">
                                            <span class="ping"></span>
                                            <span>{"We are here"}</span>
                                        </div>
                                        <div class="here-arrow"></div>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <div class="phase-date">{phase.date_range}</div>
                        <div class="phase-label">{phase.label}</div>
                        <h3>{phase.title}</h3>
                        <ul>
                            { for phase.items.iter().map(|item| html! { <li>{*item}</li> }) }
                        </ul>
                    </div>
                </div>
                <div class="timeline-node">{(i + 1).to_string()}</div>
                <div class="timeline-spacer"></div>
            </div>
        }
    });

    html! {
        <section id={Section::Planning.id()} class="planning-section">
            <div class="container">
                <div class="section-heading">
                    <div class="eyebrow">{"Roadmap"}</div>
                    <h2 class="section-title">{"製作方法與未來規劃"}</h2>
                    <p class="lead">{"公會官方 LINE 採取分階段開發模式，確保系統穩定並持續根據會員反饋優化。"}</p>
                </div>
                <div class="timeline">
                    <div class="timeline-line"></div>
                    { for phases }
                </div>
            </div>
        </section>
    }
}
