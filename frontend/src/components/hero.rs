use yew::prelude::*;

use crate::section::Section;

// (left %, width px, height px, delay s)
const BLOCKS: [(u32, u32, u32, f32); 7] = [
    (8, 60, 180, 0.0),
    (18, 90, 260, 1.2),
    (31, 50, 140, 0.4),
    (62, 80, 220, 2.0),
    (72, 110, 300, 0.8),
    (84, 55, 170, 1.6),
    (92, 70, 120, 2.4),
];

/// Floating light blobs and a skyline of slowly bobbing blocks. Purely decorative.
#[function_component(ArchitectureBackdrop)]
pub fn architecture_backdrop() -> Html {
    html! {
        <div class="architecture-backdrop" aria-hidden="true">
            <style>
                {r#"
                    .architecture-backdrop {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                        z-index: 0;
                    }
                    .blob {
                        position: absolute;
                        width: 70vw;
                        height: 70vw;
                        border-radius: 50%;
                        filter: blur(80px);
                    }
                    .blob.gold {
                        top: -10%;
                        left: -10%;
                        background: rgba(250, 204, 21, 0.2);
                        animation: drift 10s ease-in-out infinite;
                    }
                    .blob.blue {
                        bottom: -10%;
                        right: -10%;
                        background: rgba(96, 165, 250, 0.2);
                        animation: drift 12s ease-in-out 2s infinite reverse;
                    }
                    .light-beam {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 60%;
                        background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.8), transparent);
                        transform: skewX(-25deg);
                        filter: blur(24px);
                        animation: sweep 6s linear infinite;
                    }
                    .skyline-block {
                        position: absolute;
                        bottom: 0;
                        background: linear-gradient(180deg, rgba(30, 41, 59, 0.18), rgba(30, 41, 59, 0.05));
                        border: 1px solid rgba(30, 41, 59, 0.12);
                        animation: bob 6s ease-in-out infinite;
                    }
                    @keyframes drift {
                        0%, 100% { transform: translate(0, 0) scale(1); }
                        50% { transform: translate(100px, 50px) scale(1.2); }
                    }
                    @keyframes sweep {
                        from { left: -150%; }
                        to { left: 150%; }
                    }
                    @keyframes bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-8px); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .blob, .light-beam, .skyline-block { animation: none; }
                    }
                "#}
            </style>
            <div class="blob gold"></div>
            <div class="blob blue"></div>
            <div class="light-beam"></div>
            {
                BLOCKS.iter().map(|(left, width, height, delay)| {
                    let style = format!(
                        "left: {}%; width: {}px; height: {}px; animation-delay: {}s;",
                        left, width, height, delay
                    );
                    html! { <div class="skyline-block" style={style}></div> }
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let go_to = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    html! {
        <header class="hero">
            <ArchitectureBackdrop />
            <div class="hero-fade"></div>
            <div class="hero-content">
                <div class="hero-badge">{"Digital Transformation 2026"}</div>
                <h1>
                    <span>{"智慧公會"}</span>
                    <span class="hero-dot">{"·"}</span>
                    <span class="gold-text">{"官方LINE"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"打破空間與時間限制，高雄市建築師公會官方 LINE 服務正式啟動。為會員打造最即時、最便利的會務數位門戶。"}
                </p>
                <div class="hero-cta-group">
                    <a href={Section::Join.href()} class="hero-cta" onclick={go_to(Section::Join)}>
                        {"💬 立即加入"}
                    </a>
                </div>
                <a href={Section::Origin.href()} class="explore-link" onclick={go_to(Section::Origin)}>
                    <span>{"向下探索"}</span>
                    <span class="explore-arrow">{"↓"}</span>
                </a>
            </div>
        </header>
    }
}
