use crate::timeline::{Quarter, TimelinePhase};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImagePair {
    pub front: &'static str,
    pub back: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureDescriptor {
    pub title: &'static str,
    /// File under `/assets/icons/`.
    pub icon: &'static str,
    pub desc: &'static str,
    pub details: &'static str,
    /// Empty when the feature has no external page yet.
    pub link: &'static str,
    pub images: ImagePair,
}

impl FeatureDescriptor {
    pub fn link_href(&self) -> &'static str {
        if self.link.is_empty() {
            "#"
        } else {
            self.link
        }
    }
}

pub static FEATURES: [FeatureDescriptor; 6] = [
    FeatureDescriptor {
        title: "最新消息",
        icon: "news.jpg",
        desc: "即時掌握公會公告與業界動態",
        details: "透過官方 LINE NEWS，您將第一時間收到公會發布的最新公告、會議通知以及建築業界的重要動態。",
        link: "https://thinklab-architects.github.io/news/",
        images: ImagePair {
            front: "https://images.unsplash.com/photo-1504711434969-e33886168f5c?auto=format&fit=crop&q=80&w=1200",
            back: "https://images.unsplash.com/photo-1495020689067-958852a7765e?auto=format&fit=crop&q=80&w=1200",
        },
    },
    FeatureDescriptor {
        title: "法規資訊",
        icon: "regulations.jpg",
        desc: "建築法規數據庫快速檢索",
        details: "整合全國與高雄市在地建築法規新消息。輸入關鍵字即可快速檢索相關法規資訊。提供手機版最佳化閱讀體驗。",
        link: "https://thinklab-architects.github.io/line-code/",
        images: ImagePair {
            front: "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?auto=format&fit=crop&q=80&w=1200",
            back: "https://images.unsplash.com/photo-1450101499163-c8848c66ca85?auto=format&fit=crop&q=80&w=1200",
        },
    },
    FeatureDescriptor {
        title: "查詢退費",
        icon: "refund.jpg",
        desc: "線上查詢掛號與退費進度",
        details: "輸入案件掛號號碼，即可即時查詢案件審查進度與退費辦理情形。省去電話詢問的等待時間，隨時隨地掌握案件流向，提升事務所行政效率。",
        link: "",
        images: ImagePair {
            front: "https://images.unsplash.com/photo-1554224155-8d04cb21cd6c?auto=format&fit=crop&q=80&w=1200",
            back: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?auto=format&fit=crop&q=80&w=1200",
        },
    },
    FeatureDescriptor {
        title: "活動訊息",
        icon: "events.jpg",
        desc: "公會活動與講座行事曆",
        details: "公會舉辦的各類參訪活動、會員聯誼等行程一目了然。確保您不錯過任何精彩活動，讓您的行程安排更加從容。",
        link: "https://thinklab-architects.github.io/line-event/",
        images: ImagePair {
            front: "https://images.unsplash.com/photo-1540317580384-e5d43867caa6?auto=format&fit=crop&q=80&w=1200",
            back: "https://images.unsplash.com/photo-1511578314322-379afb476865?auto=format&fit=crop&q=80&w=1200",
        },
    },
    FeatureDescriptor {
        title: "研討課程",
        icon: "courses.jpg",
        desc: "專業進修課程報名與紀錄",
        details: "瀏覽最新的專業進修課程資訊，並可直接連結線上報名。方便隨時查看最新課程的積分。",
        link: "https://thinklab-architects.github.io/line-courses/",
        images: ImagePair {
            front: "https://images.unsplash.com/photo-1524178232363-1fb2b075b955?auto=format&fit=crop&q=80&w=1200",
            back: "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?auto=format&fit=crop&q=80&w=1200",
        },
    },
    FeatureDescriptor {
        title: "社交媒體",
        icon: "social.jpg",
        desc: "連結公會 Facebook 與 YouTube",
        details: "匯集公會所有的社群媒體頻道。可以與其他會員進行線上互動。建立更緊密的專業社群網絡，分享執業心得，並獲取第一手的活動花絮。",
        link: "https://thinklab-architects.github.io/line-social/",
        images: ImagePair {
            front: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?auto=format&fit=crop&q=80&w=1200",
            back: "https://images.unsplash.com/photo-1611926653458-09294b3142bf?auto=format&fit=crop&q=80&w=1200",
        },
    },
];

pub static TIMELINE: [TimelinePhase; 3] = [
    TimelinePhase {
        label: "第一階段",
        title: "基礎平台建立",
        date_range: "2026 Q1",
        start: Quarter::new(2026, 1),
        end: Quarter::new(2026, 1),
        items: &["官方帳號認證", "基礎選單架設", "會務公告串接"],
    },
    TimelinePhase {
        label: "第二階段",
        title: "互動服務上線",
        date_range: "2026 Q2",
        start: Quarter::new(2026, 2),
        end: Quarter::new(2026, 2),
        items: &["講習報名系統", "積分即時查詢", "自動回覆機器人"],
    },
    TimelinePhase {
        label: "第三階段",
        title: "深度會員整合",
        date_range: "2026 Q3-Q4",
        start: Quarter::new(2026, 3),
        end: Quarter::new(2026, 4),
        items: &["線上金流繳費", "數位證書核發", "AI 法規助手"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: &'static str,
}

pub static CHAT_TRANSCRIPT: [ChatMessage; 3] = [
    ChatMessage {
        sender: Sender::Bot,
        text: "我是社團法人高雄市建築師公會。\n感謝您加入好友😉",
    },
    ChatMessage {
        sender: Sender::User,
        text: "理監事",
    },
    ChatMessage {
        sender: Sender::Bot,
        text: "有關第十七屆\"理監事\"相關資訊請參考以下網址\nhttps://www.kaa.org.tw/aboutkaa03.php",
    },
];

/// Colour family used for a keyword category's badge and tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Emerald,
    Orange,
    Rose,
    Violet,
    Pink,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Blue => "tone-blue",
            Tone::Emerald => "tone-emerald",
            Tone::Orange => "tone-orange",
            Tone::Rose => "tone-rose",
            Tone::Violet => "tone-violet",
            Tone::Pink => "tone-pink",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeywordCategory {
    pub name: &'static str,
    pub tone: Tone,
    pub keywords: &'static [&'static str],
}

pub static KEYWORD_CATEGORIES: [KeywordCategory; 6] = [
    KeywordCategory {
        name: "會務與會員服務",
        tone: Tone::Blue,
        keywords: &["會員輪值", "會員名錄", "委員會", "理監事", "建築師", "社團", "建築師委任"],
    },
    KeywordCategory {
        name: "財務相關",
        tone: Tone::Emerald,
        keywords: &["收費標準", "匯款", "繳費", "本月退款", "報價", "酬金", "合約"],
    },
    KeywordCategory {
        name: "教育與活動",
        tone: Tone::Orange,
        keywords: &["專業進階課程", "活動行事曆", "積分", "金質獎", "仁和賞"],
    },
    KeywordCategory {
        name: "法規與實務",
        tone: Tone::Rose,
        keywords: &["法規訊息", "綠建築", "危老", "建管", "鑑定委託", "業務申辦", "招標公告", "招標疑義", "大林蒲"],
    },
    KeywordCategory {
        name: "資訊與聯絡",
        tone: Tone::Violet,
        keywords: &["電話", "網站首頁", "地圖", "大東", "最新消息", "下載", "Default"],
    },
    KeywordCategory {
        name: "社群媒體",
        tone: Tone::Pink,
        keywords: &["FACEBOOK", "INSTGRAM", "Youtube"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NarrativePoint {
    pub heading: &'static str,
    pub body: &'static str,
}

// Front of the origin card: why a plain LINE group falls short.
pub static GROUP_LIMITATIONS: [NarrativePoint; 3] = [
    NarrativePoint {
        heading: "訊息洗版嚴重",
        body: "重要會務公告常被日常閒聊覆蓋，導致會員漏掉重要資訊。",
    },
    NarrativePoint {
        heading: "隱私權缺乏保障",
        body: "所有成員皆可看到彼此的個資與發言，對於專業諮詢並不理想。",
    },
    NarrativePoint {
        heading: "缺乏系統化整合",
        body: "無法串接公會數據庫，所有問題皆需依賴人工手動回覆。",
    },
];

// Back of the origin card.
pub static OFFICIAL_UPGRADES: [NarrativePoint; 4] = [
    NarrativePoint {
        heading: "分眾推播技術",
        body: "依據會員需求分類訊息，確保您只收到與您執業相關的精準資訊。",
    },
    NarrativePoint {
        heading: "一對一保密諮詢",
        body: "建立與公會的專屬對話窗口，諮詢過程完全保密，維護專業尊嚴。",
    },
    NarrativePoint {
        heading: "24/7 AI 智慧助理",
        body: "隨時查詢法規、積分與表單，即刻獲得解答，服務不打烊。",
    },
    NarrativePoint {
        heading: "整合會務系統",
        body: "串連線上報名、繳費與圖書預約，手機就是您的行動事務所。",
    },
];
