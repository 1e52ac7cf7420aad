/// In-page anchor targets. Their ids are public: deep links and the nav bar both rely on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Origin,
    Features,
    Bot,
    Planning,
    Join,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Origin,
        Section::Features,
        Section::Bot,
        Section::Planning,
        Section::Join,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Origin => "origin",
            Section::Features => "features",
            Section::Bot => "bot",
            Section::Planning => "planning",
            Section::Join => "join",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Origin => "服務緣起",
            Section::Features => "六大功能",
            Section::Bot => "智能助手",
            Section::Planning => "時程規劃",
            Section::Join => "立即加入",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Parses a `location.hash` value such as `#planning`.
    pub fn from_hash(hash: &str) -> Option<Section> {
        Self::from_id(hash.strip_prefix('#').unwrap_or(hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_ids_match_the_published_names() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["origin", "features", "bot", "planning", "join"]);
    }

    #[test]
    fn hash_parsing() {
        assert_eq!(Section::from_hash("#features"), Some(Section::Features));
        assert_eq!(Section::from_hash("join"), Some(Section::Join));
        assert_eq!(Section::from_hash("#"), None);
        assert_eq!(Section::from_hash("#pricing"), None);
    }
}
