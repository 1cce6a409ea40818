//! Dashboard view-state
//!
//! All UI state lives in [`Session`]. Every transition goes through
//! [`Session::apply`], which mutates the state and hands back the side
//! effects (timers, links) for the event loop to run.

use crate::consts::{DOWNLOAD_STEP_MB, TELEGRAM_URL, UPLOAD_STEP_MB, USAGE_BARS};
use crate::error::ConnectError;
use crate::model::{
    find_server, Section, Server, SERVERS, SETTINGS, SETTING_COUNT, SETTING_DARK_THEME,
};
use crate::random::RandomSource;
use crate::search::matching_servers;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataUsed {
    pub download: f64,
    pub upload: f64,
}

/// Blocking message shown over the dashboard until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Rejected(ConnectError),
    LinkUnavailable { url: String },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Rejected(err) => err.to_string(),
            Notice::LinkUnavailable { url } => format!("Could not open {url}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SelectServer(String),
    ToggleConnection,
    SetSection(Section),
    NextSection,
    PrevSection,
    CursorUp,
    CursorDown,
    /// Context action for the item under the cursor.
    Activate,
    OpenSupportLink,
    ToggleSetting(usize),
    FilterStart,
    FilterInput(char),
    FilterBackspace,
    FilterEnd,
    FilterClear,
    /// One connection-ticker period elapsed.
    Tick,
    Notify(Notice),
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartTicker,
    StopTicker,
    OpenLink(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub query: String,
    pub editing: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    active_section: Section,
    connected: bool,
    selected_server: Option<&'static Server>,
    connection_time: u64,
    data_used: DataUsed,
    notice: Option<Notice>,
    server_cursor: usize,
    settings_cursor: usize,
    settings: [bool; SETTING_COUNT],
    filter: Filter,
    usage_bars: [u64; USAGE_BARS],
}

impl Session {
    /// Fresh session. The stats chart is sampled once from `rng`.
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        let mut usage_bars = [0u64; USAGE_BARS];
        for bar in usage_bars.iter_mut() {
            *bar = (rng.unit() * 100.0) as u64;
        }
        Self {
            active_section: Section::default(),
            connected: false,
            selected_server: None,
            connection_time: 0,
            data_used: DataUsed::default(),
            notice: None,
            server_cursor: 0,
            settings_cursor: 0,
            settings: [false; SETTING_COUNT],
            filter: Filter::default(),
            usage_bars,
        }
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn selected_server(&self) -> Option<&'static Server> {
        self.selected_server
    }

    pub fn connection_time(&self) -> u64 {
        self.connection_time
    }

    pub fn data_used(&self) -> DataUsed {
        self.data_used
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn server_cursor(&self) -> usize {
        self.server_cursor
    }

    pub fn settings_cursor(&self) -> usize {
        self.settings_cursor
    }

    pub fn settings(&self) -> &[bool] {
        &self.settings
    }

    pub fn dark_theme(&self) -> bool {
        self.settings[SETTING_DARK_THEME]
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn usage_bars(&self) -> &[u64] {
        &self.usage_bars
    }

    /// Servers listed by the active section, in display order.
    pub fn visible_servers(&self) -> Vec<&'static Server> {
        match self.active_section {
            Section::Servers => matching_servers(&self.filter.query),
            _ => SERVERS.iter().collect(),
        }
    }

    /// Apply one event and return the side effects it requires.
    pub fn apply(&mut self, event: Event, rng: &mut dyn RandomSource) -> Vec<Effect> {
        match event {
            Event::SelectServer(id) => {
                self.select_server(&id);
                Vec::new()
            }
            Event::ToggleConnection => self.toggle_connection(),
            Event::SetSection(section) => {
                self.set_section(section);
                Vec::new()
            }
            Event::NextSection => {
                self.set_section(self.active_section.next());
                Vec::new()
            }
            Event::PrevSection => {
                self.set_section(self.active_section.prev());
                Vec::new()
            }
            Event::CursorUp => {
                self.move_cursor(false);
                Vec::new()
            }
            Event::CursorDown => {
                self.move_cursor(true);
                Vec::new()
            }
            Event::Activate => match self.activation() {
                Some(event) => self.apply(event, rng),
                None => Vec::new(),
            },
            Event::OpenSupportLink => vec![Effect::OpenLink(TELEGRAM_URL)],
            Event::ToggleSetting(i) => {
                self.toggle_setting(i);
                Vec::new()
            }
            Event::FilterStart => {
                self.filter.editing = true;
                Vec::new()
            }
            Event::FilterInput(c) => {
                if self.filter.editing {
                    self.filter.query.push(c);
                    self.server_cursor = 0;
                }
                Vec::new()
            }
            Event::FilterBackspace => {
                if self.filter.editing {
                    self.filter.query.pop();
                    self.server_cursor = 0;
                }
                Vec::new()
            }
            Event::FilterEnd => {
                self.filter.editing = false;
                Vec::new()
            }
            Event::FilterClear => {
                self.filter = Filter::default();
                self.server_cursor = 0;
                Vec::new()
            }
            Event::Tick => {
                self.tick(rng);
                Vec::new()
            }
            Event::Notify(notice) => {
                self.notice = Some(notice);
                Vec::new()
            }
            Event::DismissNotice => {
                self.notice = None;
                Vec::new()
            }
        }
    }

    fn select_server(&mut self, id: &str) {
        if self.connected {
            return;
        }
        if let Some(server) = find_server(id) {
            debug!(server = server.id, "server selected");
            self.selected_server = Some(server);
        }
    }

    fn toggle_connection(&mut self) -> Vec<Effect> {
        if self.connected {
            self.connected = false;
            self.connection_time = 0;
            self.data_used = DataUsed::default();
            info!("disconnected");
            return vec![Effect::StopTicker];
        }

        match self.selected_server {
            Some(server) => {
                self.connected = true;
                info!(server = server.id, "connected");
                vec![Effect::StartTicker]
            }
            None => {
                warn!("connect rejected: no server selected");
                self.notice = Some(Notice::Rejected(ConnectError::NoServerSelected));
                Vec::new()
            }
        }
    }

    fn set_section(&mut self, section: Section) {
        if section != self.active_section {
            debug!(section = section.label(), "section changed");
        }
        self.active_section = section;
        self.server_cursor = 0;
        self.filter.editing = false;
    }

    fn toggle_setting(&mut self, i: usize) {
        if let Some(on) = self.settings.get_mut(i) {
            *on = !*on;
            debug!(setting = SETTINGS[i].title, enabled = *on, "setting toggled");
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let len = match self.active_section {
            Section::Home | Section::Servers => self.visible_servers().len(),
            Section::Settings => SETTINGS.len(),
            _ => return,
        };
        let cursor = match self.active_section {
            Section::Settings => &mut self.settings_cursor,
            _ => &mut self.server_cursor,
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = if down {
            if *cursor >= len - 1 { 0 } else { *cursor + 1 }
        } else if *cursor == 0 {
            len - 1
        } else {
            *cursor - 1
        };
    }

    /// The event the context action stands for in the active section.
    fn activation(&self) -> Option<Event> {
        match self.active_section {
            Section::Home | Section::Servers => self
                .visible_servers()
                .get(self.server_cursor)
                .map(|server| Event::SelectServer(server.id.to_string())),
            Section::Settings => Some(Event::ToggleSetting(self.settings_cursor)),
            Section::Support => Some(Event::OpenSupportLink),
            _ => None,
        }
    }

    fn tick(&mut self, rng: &mut dyn RandomSource) {
        // A tick can still be queued after the ticker was stopped.
        if !self.connected {
            return;
        }
        self.connection_time += 1;
        self.data_used.download += rng.unit() * DOWNLOAD_STEP_MB;
        self.data_used.upload += rng.unit() * UPLOAD_STEP_MB;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Sequence;

    fn session() -> (Session, Sequence) {
        let mut rng = Sequence::constant(0.5);
        (Session::new(&mut rng), rng)
    }

    #[test]
    fn test_defaults() {
        let (s, _) = session();
        assert_eq!(s.active_section(), Section::Home);
        assert!(!s.is_connected());
        assert!(s.selected_server().is_none());
        assert_eq!(s.connection_time(), 0);
        assert_eq!(s.data_used(), DataUsed::default());
        assert!(s.notice().is_none());
        assert!(s.usage_bars().iter().all(|b| *b == 50));
    }

    #[test]
    fn test_connect_without_server_is_rejected() {
        let (mut s, mut rng) = session();
        let effects = s.apply(Event::ToggleConnection, &mut rng);
        assert!(effects.is_empty());
        assert!(!s.is_connected());
        assert_eq!(s.connection_time(), 0);
        assert_eq!(s.data_used(), DataUsed::default());
        assert_eq!(s.notice(), Some(&Notice::Rejected(ConnectError::NoServerSelected)));
        assert_eq!(s.notice().map(Notice::message).as_deref(), Some("Select a server first"));

        s.apply(Event::DismissNotice, &mut rng);
        assert!(s.notice().is_none());
    }

    #[test]
    fn test_select_then_connect_starts_ticker() {
        let (mut s, mut rng) = session();
        s.apply(Event::SelectServer("ch".into()), &mut rng);
        assert_eq!(s.selected_server().map(|x| x.id), Some("ch"));

        let effects = s.apply(Event::ToggleConnection, &mut rng);
        assert_eq!(effects, vec![Effect::StartTicker]);
        assert!(s.is_connected());

        s.apply(Event::Tick, &mut rng);
        s.apply(Event::Tick, &mut rng);
        assert_eq!(s.connection_time(), 2);
    }

    #[test]
    fn test_tick_uses_injected_random_source() {
        let (mut s, _) = session();
        let mut rng = Sequence::new(&[0.2, 0.5]);
        s.apply(Event::SelectServer("mc".into()), &mut rng);
        s.apply(Event::ToggleConnection, &mut rng);
        for _ in 0..4 {
            s.apply(Event::Tick, &mut rng);
        }
        let used = s.data_used();
        assert!((used.download - 4.0 * 0.2 * DOWNLOAD_STEP_MB).abs() < 1e-9);
        assert!((used.upload - 4.0 * 0.5 * UPLOAD_STEP_MB).abs() < 1e-9);
    }

    #[test]
    fn test_disconnect_resets_counters() {
        let (mut s, mut rng) = session();
        s.apply(Event::SelectServer("nl".into()), &mut rng);
        s.apply(Event::ToggleConnection, &mut rng);
        for _ in 0..90 {
            s.apply(Event::Tick, &mut rng);
        }
        assert_eq!(s.connection_time(), 90);

        let effects = s.apply(Event::ToggleConnection, &mut rng);
        assert_eq!(effects, vec![Effect::StopTicker]);
        assert!(!s.is_connected());
        assert_eq!(s.connection_time(), 0);
        assert_eq!(s.data_used(), DataUsed::default());
        // Selection survives a disconnect.
        assert_eq!(s.selected_server().map(|x| x.id), Some("nl"));
    }

    #[test]
    fn test_stale_tick_after_disconnect_is_ignored() {
        let (mut s, mut rng) = session();
        s.apply(Event::Tick, &mut rng);
        assert_eq!(s.connection_time(), 0);

        s.apply(Event::SelectServer("lu".into()), &mut rng);
        s.apply(Event::ToggleConnection, &mut rng);
        s.apply(Event::ToggleConnection, &mut rng);
        s.apply(Event::Tick, &mut rng);
        assert_eq!(s.connection_time(), 0);
        assert_eq!(s.data_used(), DataUsed::default());
    }

    #[test]
    fn test_select_server_ignored_while_connected() {
        let (mut s, mut rng) = session();
        s.apply(Event::SelectServer("mc".into()), &mut rng);
        s.apply(Event::ToggleConnection, &mut rng);
        s.apply(Event::SelectServer("sg".into()), &mut rng);
        assert_eq!(s.selected_server().map(|x| x.id), Some("mc"));

        // Activate on the list is a no-op too.
        s.apply(Event::CursorDown, &mut rng);
        s.apply(Event::Activate, &mut rng);
        assert_eq!(s.selected_server().map(|x| x.id), Some("mc"));
    }

    #[test]
    fn test_select_unknown_server_is_noop() {
        let (mut s, mut rng) = session();
        s.apply(Event::SelectServer("xx".into()), &mut rng);
        assert!(s.selected_server().is_none());

        s.apply(Event::SelectServer("is".into()), &mut rng);
        s.apply(Event::SelectServer("".into()), &mut rng);
        assert_eq!(s.selected_server().map(|x| x.id), Some("is"));
    }

    #[test]
    fn test_set_section_any_value() {
        let (mut s, mut rng) = session();
        for from in Section::ALL {
            for to in Section::ALL {
                s.apply(Event::SetSection(from), &mut rng);
                s.apply(Event::SetSection(to), &mut rng);
                assert_eq!(s.active_section(), to);
            }
        }
    }

    #[test]
    fn test_section_cycling() {
        let (mut s, mut rng) = session();
        s.apply(Event::PrevSection, &mut rng);
        assert_eq!(s.active_section(), Section::Support);
        s.apply(Event::NextSection, &mut rng);
        s.apply(Event::NextSection, &mut rng);
        assert_eq!(s.active_section(), Section::Servers);
    }

    #[test]
    fn test_cursor_wraps_and_activate_selects() {
        let (mut s, mut rng) = session();
        s.apply(Event::CursorUp, &mut rng);
        assert_eq!(s.server_cursor(), SERVERS.len() - 1);
        s.apply(Event::Activate, &mut rng);
        assert_eq!(s.selected_server().map(|x| x.id), Some("is"));

        s.apply(Event::CursorDown, &mut rng);
        assert_eq!(s.server_cursor(), 0);
        s.apply(Event::Activate, &mut rng);
        assert_eq!(s.selected_server().map(|x| x.id), Some("mc"));
    }

    #[test]
    fn test_settings_toggle() {
        let (mut s, mut rng) = session();
        s.apply(Event::SetSection(Section::Settings), &mut rng);
        s.apply(Event::CursorDown, &mut rng);
        s.apply(Event::Activate, &mut rng);
        assert_eq!(s.settings(), &[false, true, false, false]);

        s.apply(Event::ToggleSetting(SETTING_DARK_THEME), &mut rng);
        assert!(s.dark_theme());
        s.apply(Event::ToggleSetting(99), &mut rng);
        assert_eq!(s.settings(), &[false, true, false, true]);
    }

    #[test]
    fn test_support_activate_opens_link() {
        let (mut s, mut rng) = session();
        s.apply(Event::SetSection(Section::Support), &mut rng);
        assert_eq!(s.apply(Event::Activate, &mut rng), vec![Effect::OpenLink(TELEGRAM_URL)]);
    }

    #[test]
    fn test_link_failure_notice_message() {
        let (mut s, mut rng) = session();
        s.apply(
            Event::Notify(Notice::LinkUnavailable { url: TELEGRAM_URL.to_string() }),
            &mut rng,
        );
        assert_eq!(
            s.notice().map(Notice::message).as_deref(),
            Some("Could not open https://t.me/vkqeex")
        );
    }

    #[test]
    fn test_filter_narrows_servers_section() {
        let (mut s, mut rng) = session();
        s.apply(Event::SetSection(Section::Servers), &mut rng);
        s.apply(Event::FilterStart, &mut rng);
        for c in "sing".chars() {
            s.apply(Event::FilterInput(c), &mut rng);
        }
        let ids: Vec<&str> = s.visible_servers().iter().map(|x| x.id).collect();
        assert_eq!(ids.first(), Some(&"sg"));

        s.apply(Event::FilterEnd, &mut rng);
        assert!(!s.filter().editing);
        s.apply(Event::FilterInput('x'), &mut rng);
        assert_eq!(s.filter().query, "sing");

        s.apply(Event::Activate, &mut rng);
        assert_eq!(s.selected_server().map(|x| x.id), Some("sg"));

        s.apply(Event::FilterClear, &mut rng);
        assert_eq!(s.visible_servers().len(), SERVERS.len());
    }

    #[test]
    fn test_filter_does_not_apply_on_home() {
        let (mut s, mut rng) = session();
        s.apply(Event::SetSection(Section::Servers), &mut rng);
        s.apply(Event::FilterStart, &mut rng);
        s.apply(Event::FilterInput('z'), &mut rng);
        s.apply(Event::FilterInput('z'), &mut rng);
        s.apply(Event::FilterInput('z'), &mut rng);
        assert!(s.visible_servers().is_empty());

        s.apply(Event::SetSection(Section::Home), &mut rng);
        assert_eq!(s.visible_servers().len(), SERVERS.len());
    }
}
