//! Terminal lifecycle guard
//!
//! [`TerminalGuard`] turns on raw mode and the alternate screen, and puts the
//! terminal back on drop. That covers early error returns as well as normal
//! exit. A panic hook restores the terminal before the panic message is
//! printed so the message lands on a usable screen.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the terminal is in dashboard mode. Restoration only runs once.
static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen. On partial failure the part
    /// already set up is undone when the guard is dropped.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        TERMINAL_ACTIVE.store(true, Ordering::SeqCst);
        let guard = Self { _private: () };

        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_best_effort();
            prev(info);
        }));

        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_best_effort();
    }
}

/// Leave the alternate screen, show the cursor and drop raw mode. Every step
/// runs even if an earlier one fails; errors are ignored.
fn restore_best_effort() {
    if TERMINAL_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}
