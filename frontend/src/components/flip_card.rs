use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FlipCardProps {
    pub flipped: bool,
    pub on_flip: Callback<()>,
    pub front: Html,
    pub back: Html,
    #[prop_or_default]
    pub class: Classes,
}

/// Two-faced panel rotated with CSS; a click anywhere on it asks for a flip.
#[function_component(FlipCard)]
pub fn flip_card(props: &FlipCardProps) -> Html {
    let onclick = {
        let on_flip = props.on_flip.clone();
        Callback::from(move |_: MouseEvent| on_flip.emit(()))
    };

    html! {
        <div class={classes!("flip-card", props.class.clone())} onclick={onclick}>
            <style>
                {r#"
                    .flip-card {
                        perspective: 1000px;
                        cursor: pointer;
                    }
                    .flip-card-inner {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        transform-style: preserve-3d;
                        transition: transform 0.8s ease-in-out;
                    }
                    .flip-card-inner.flipped {
                        transform: rotateY(180deg);
                    }
                    .flip-face {
                        position: absolute;
                        inset: 0;
                        backface-visibility: hidden;
                        -webkit-backface-visibility: hidden;
                        overflow: hidden;
                    }
                    .flip-face.back {
                        transform: rotateY(180deg);
                    }
                    .flip-face img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                "#}
            </style>
            <div class={classes!("flip-card-inner", props.flipped.then(|| "flipped"))}>
                <div class="flip-face front" aria-hidden={props.flipped.to_string()}>
                    { props.front.clone() }
                </div>
                <div class="flip-face back" aria-hidden={(!props.flipped).to_string()}>
                    { props.back.clone() }
                </div>
            </div>
        </div>
    }
}
