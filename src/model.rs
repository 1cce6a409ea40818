// src/model.rs
//! Static catalog shown by the dashboard: sections, servers, history,
//! profile and support content. Nothing here is mutated at runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Servers,
    Stats,
    Settings,
    History,
    Profile,
    Support,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Servers,
        Section::Stats,
        Section::Settings,
        Section::History,
        Section::Profile,
        Section::Support,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(i: usize) -> Option<Section> {
        Self::ALL.get(i).copied()
    }

    pub fn next(self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Servers => "Servers",
            Section::Stats => "Stats",
            Section::Settings => "Settings",
            Section::History => "History",
            Section::Profile => "Profile",
            Section::Support => "Support",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Home => "🏠",
            Section::Servers => "🌍",
            Section::Stats => "📊",
            Section::Settings => "⚙",
            Section::History => "📜",
            Section::Profile => "👤",
            Section::Support => "💬",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Server {
    pub id: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub ping_ms: u32,
    pub load: u16,
}

pub static SERVERS: [Server; 6] = [
    Server { id: "mc", name: "Monaco", flag: "🇲🇨", ping_ms: 12, load: 23 },
    Server { id: "lu", name: "Luxembourg", flag: "🇱🇺", ping_ms: 8, load: 45 },
    Server { id: "ch", name: "Switzerland", flag: "🇨🇭", ping_ms: 15, load: 67 },
    Server { id: "nl", name: "Netherlands", flag: "🇳🇱", ping_ms: 10, load: 34 },
    Server { id: "sg", name: "Singapore", flag: "🇸🇬", ping_ms: 45, load: 56 },
    Server { id: "is", name: "Iceland", flag: "🇮🇸", ping_ms: 25, load: 12 },
];

/// Look up a catalog entry by id.
pub fn find_server(id: &str) -> Option<&'static Server> {
    SERVERS.iter().find(|s| s.id == id)
}

pub struct HistoryEntry {
    pub server: &'static str,
    pub flag: &'static str,
    pub date: &'static str,
    pub duration: &'static str,
}

pub static HISTORY: [HistoryEntry; 4] = [
    HistoryEntry { server: "Monaco", flag: "🇲🇨", date: "17 Dec 2024, 14:30", duration: "2h 15m" },
    HistoryEntry { server: "Luxembourg", flag: "🇱🇺", date: "17 Dec 2024, 10:15", duration: "1h 45m" },
    HistoryEntry { server: "Switzerland", flag: "🇨🇭", date: "16 Dec 2024, 18:00", duration: "3h 20m" },
    HistoryEntry { server: "Netherlands", flag: "🇳🇱", date: "16 Dec 2024, 12:30", duration: "45m" },
];

pub struct SettingDef {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SETTING_COUNT: usize = 4;
pub const SETTING_DARK_THEME: usize = 3;

pub static SETTINGS: [SettingDef; SETTING_COUNT] = [
    SettingDef { title: "Auto-connect", description: "Connect automatically on startup" },
    SettingDef { title: "Kill Switch", description: "Block internet access if the VPN drops" },
    SettingDef { title: "Notifications", description: "Show connection notifications" },
    SettingDef { title: "Dark theme", description: "Use the dark interface theme" },
];

pub struct Profile {
    pub avatar: &'static str,
    pub display_name: &'static str,
    pub plan: &'static str,
    pub email: &'static str,
    pub subscription: &'static str,
    pub registered: &'static str,
    pub total_connections: &'static str,
}

pub static PROFILE: Profile = Profile {
    avatar: "🎅",
    display_name: "VPN User",
    plan: "Premium account",
    email: "user@snowvpn.com",
    subscription: "Premium until 31.12.2024",
    registered: "01.01.2024",
    total_connections: "1,234",
};

pub static FAQ: [&str; 4] = [
    "How do I connect to the VPN?",
    "What if the connection does not work?",
    "How do I change the server?",
    "How do I cancel my subscription?",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle_wraps() {
        assert_eq!(Section::Home.prev(), Section::Support);
        assert_eq!(Section::Support.next(), Section::Home);
        let mut s = Section::Home;
        for _ in 0..Section::ALL.len() {
            s = s.next();
        }
        assert_eq!(s, Section::Home);
    }

    #[test]
    fn test_find_server() {
        assert_eq!(find_server("sg").map(|s| s.name), Some("Singapore"));
        assert!(find_server("xx").is_none());
        assert!(find_server("").is_none());
    }

    #[test]
    fn test_catalog_ids_unique() {
        for (i, a) in SERVERS.iter().enumerate() {
            for b in SERVERS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
