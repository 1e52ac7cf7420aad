use yew::prelude::*;

use crate::autolink::{segments, Segment};
use crate::config::asset_url;
use crate::content::{ChatMessage, Sender, CHAT_TRANSCRIPT, KEYWORD_CATEGORIES};
use crate::section::Section;

fn message_body(text: &str) -> Html {
    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => html! { <>{ text.to_string() }</> },
            Segment::Link(url) => html! {
                <a href={url.to_string()} target="_blank" rel="noopener noreferrer" class="chat-link">{url.to_string()}</a>
            },
        })
        .collect::<Html>()
}

fn bubble(message: &ChatMessage) -> Html {
    match message.sender {
        Sender::Bot => html! {
            <div class="chat-row bot">
                <img src={asset_url("logo.png")} alt="Bot Avatar" class="chat-avatar" />
                <div class="chat-bubble bot">{ message_body(message.text) }</div>
            </div>
        },
        Sender::User => html! {
            <div class="chat-row user">
                <div class="chat-bubble user">{ message_body(message.text) }</div>
            </div>
        },
    }
}

/// Phone mock-up replaying the welcome conversation. The input row is decoration only.
#[function_component(ChatPreview)]
pub fn chat_preview() -> Html {
    html! {
        <div class="phone-frame">
            <div class="phone-screen">
                <div class="chat-header">
                    <div class="chat-header-avatar">{"高"}</div>
                    <div class="chat-header-text">
                        <span class="chat-name">{"社團法人高雄市建築師公會"}</span>
                        <span class="chat-status">{"● 在線上"}</span>
                    </div>
                </div>
                <div class="chat-messages">
                    { for CHAT_TRANSCRIPT.iter().map(bubble) }
                </div>
                <div class="chat-input">
                    <div class="chat-input-box">{"請輸入您的問題..."}</div>
                    <div class="chat-send" aria-hidden="true">{"➤"}</div>
                </div>
            </div>
        </div>
    }
}

#[function_component(KeywordCategories)]
pub fn keyword_categories() -> Html {
    html! {
        <div class="keyword-categories">
            { for KEYWORD_CATEGORIES.iter().map(|category| html! {
                <div class={classes!("keyword-row", category.tone.class())}>
                    <div class="keyword-badge">{category.name}</div>
                    <div class="keyword-tags">
                        { for category.keywords.iter().map(|keyword| html! {
                            <span class="keyword-tag">{format!("#{}", keyword)}</span>
                        }) }
                    </div>
                </div>
            }) }
        </div>
    }
}

#[function_component(BotSection)]
pub fn bot_section() -> Html {
    html! {
        <section id={Section::Bot.id()} class="bot-section">
            <div class="container bot-grid">
                <div class="bot-preview">
                    <ChatPreview />
                </div>
                <div class="bot-copy">
                    <div class="pill">{"AI ASSISTANT"}</div>
                    <h2 class="section-title">{"24/7 LINE機器人"}</h2>
                    <p class="lead">
                        {"不再需要等待上班時間撥打電話。公會 LINE 整合了強大的自動回覆機器人，能針對常見問題提供即時回覆。"}
                    </p>
                    <KeywordCategories />
                </div>
            </div>
        </section>
    }
}
