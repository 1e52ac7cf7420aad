use crate::timeline::CurrentPhaseRule;

/// Scroll offset (px) past which the nav bar switches to its condensed style.
pub const SCROLL_CONDENSE_THRESHOLD: f64 = 50.0;

/// Height of the fixed nav bar; anchor scrolls land this far below the top.
pub const HEADER_OFFSET: f64 = 80.0;

pub const LINE_INVITE_URL: &str = "https://lin.ee/Y2TbPdj";
pub const LINE_ADD_FRIEND_BUTTON: &str = "https://scdn.line-apps.com/n/line_add_friends/btn/zh-Hant.png";
pub const LINE_QR_CODE_URL: &str = "https://qr-official.line.me/gs/M_536fdiax_BW.png?oat_content=qr";
pub const LINE_ID: &str = "@kaa.org";

pub const ASSOCIATION_URL: &str = "https://www.kaa.org.tw/";

// Roadmap marker stays on the first phase until the association confirms the schedule.
pub const CURRENT_PHASE_RULE: CurrentPhaseRule = CurrentPhaseRule::Pinned(0);

#[cfg(debug_assertions)]
pub fn get_public_url() -> &'static str {
    ""  // Trunk serve from the root
}

#[cfg(not(debug_assertions))]
pub fn get_public_url() -> &'static str {
    match option_env!("PUBLIC_URL") {
        Some(url) => url,
        None => "",
    }
}

pub fn asset_url(path: &str) -> String {
    format!("{}/assets/{}", get_public_url().trim_end_matches('/'), path.trim_start_matches('/'))
}
