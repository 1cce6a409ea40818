//! Key bindings
//!
//! Maps terminal key presses to session events. Kept free of I/O so the
//! bindings can be tested directly.

use crate::model::Section;
use crate::session::{Event, Session};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Dispatch(Event),
}

pub fn map_key(key: KeyEvent, session: &Session) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    // A notice blocks everything until it is dismissed.
    if session.notice().is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                Some(Command::Dispatch(Event::DismissNotice))
            }
            _ => None,
        };
    }

    if session.filter().editing {
        let event = match key.code {
            KeyCode::Char(c) => Event::FilterInput(c),
            KeyCode::Backspace => Event::FilterBackspace,
            KeyCode::Enter => Event::FilterEnd,
            KeyCode::Esc => Event::FilterClear,
            _ => return None,
        };
        return Some(Command::Dispatch(event));
    }

    let event = match key.code {
        KeyCode::Char('q') => return Some(Command::Quit),
        KeyCode::Esc => {
            if session.active_section() == Section::Servers && !session.filter().query.is_empty() {
                Event::FilterClear
            } else {
                return Some(Command::Quit);
            }
        }
        KeyCode::Tab | KeyCode::Right => Event::NextSection,
        KeyCode::BackTab | KeyCode::Left => Event::PrevSection,
        KeyCode::Char(c @ '1'..='7') => {
            let i = c as usize - '1' as usize;
            Event::SetSection(Section::from_index(i)?)
        }
        KeyCode::Up | KeyCode::Char('k') => Event::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => Event::CursorDown,
        KeyCode::Enter | KeyCode::Char(' ') => Event::Activate,
        KeyCode::Char('c') => Event::ToggleConnection,
        KeyCode::Char('/') if session.active_section() == Section::Servers => Event::FilterStart,
        _ => return None,
    };
    Some(Command::Dispatch(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Sequence;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session() -> (Session, Sequence) {
        let mut rng = Sequence::constant(0.0);
        (Session::new(&mut rng), rng)
    }

    #[test]
    fn test_navigation_keys() {
        let (s, _) = session();
        assert_eq!(map_key(key(KeyCode::Tab), &s), Some(Command::Dispatch(Event::NextSection)));
        assert_eq!(map_key(key(KeyCode::Left), &s), Some(Command::Dispatch(Event::PrevSection)));
        assert_eq!(
            map_key(key(KeyCode::Char('3')), &s),
            Some(Command::Dispatch(Event::SetSection(Section::Stats)))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('7')), &s),
            Some(Command::Dispatch(Event::SetSection(Section::Support)))
        );
        assert_eq!(map_key(key(KeyCode::Char('8')), &s), None);
        assert_eq!(map_key(key(KeyCode::Char('c')), &s), Some(Command::Dispatch(Event::ToggleConnection)));
        assert_eq!(map_key(key(KeyCode::Char('q')), &s), Some(Command::Quit));
    }

    #[test]
    fn test_notice_blocks_other_keys() {
        let (mut s, mut rng) = session();
        s.apply(Event::ToggleConnection, &mut rng);
        assert!(s.notice().is_some());

        assert_eq!(map_key(key(KeyCode::Tab), &s), None);
        assert_eq!(map_key(key(KeyCode::Char('q')), &s), None);
        assert_eq!(map_key(key(KeyCode::Enter), &s), Some(Command::Dispatch(Event::DismissNotice)));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &s),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_filter_mode_captures_text() {
        let (mut s, mut rng) = session();
        // '/' only starts a search on the servers section.
        assert_eq!(map_key(key(KeyCode::Char('/')), &s), None);

        s.apply(Event::SetSection(Section::Servers), &mut rng);
        assert_eq!(map_key(key(KeyCode::Char('/')), &s), Some(Command::Dispatch(Event::FilterStart)));
        s.apply(Event::FilterStart, &mut rng);

        assert_eq!(map_key(key(KeyCode::Char('q')), &s), Some(Command::Dispatch(Event::FilterInput('q'))));
        assert_eq!(map_key(key(KeyCode::Backspace), &s), Some(Command::Dispatch(Event::FilterBackspace)));
        assert_eq!(map_key(key(KeyCode::Enter), &s), Some(Command::Dispatch(Event::FilterEnd)));
        assert_eq!(map_key(key(KeyCode::Esc), &s), Some(Command::Dispatch(Event::FilterClear)));
    }

    #[test]
    fn test_esc_clears_filter_before_quitting() {
        let (mut s, mut rng) = session();
        s.apply(Event::SetSection(Section::Servers), &mut rng);
        s.apply(Event::FilterStart, &mut rng);
        s.apply(Event::FilterInput('m'), &mut rng);
        s.apply(Event::FilterEnd, &mut rng);

        assert_eq!(map_key(key(KeyCode::Esc), &s), Some(Command::Dispatch(Event::FilterClear)));
        s.apply(Event::FilterClear, &mut rng);
        assert_eq!(map_key(key(KeyCode::Esc), &s), Some(Command::Quit));
    }

    #[test]
    fn test_release_events_ignored() {
        let (s, _) = session();
        let mut k = key(KeyCode::Tab);
        k.kind = KeyEventKind::Release;
        assert_eq!(map_key(k, &s), None);
    }
}
