//! Event loop
//!
//! Drains timer messages, feeds key presses through the key map, runs the
//! effects returned by the session and redraws.

use crate::config::Config;
use crate::consts::{CONNECTION_TICK, SNOW_SPAWN_INTERVAL};
use crate::error::AppError;
use crate::input::{map_key, Command};
use crate::random::{RandomSource, ThreadRandom};
use crate::session::{Effect, Event, Notice, Session};
use crate::snowfall::Snowfall;
use crate::timer::{Timer, TimerEvent};
use crate::ui;
use crossterm::event::{self, Event as TermEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

pub struct App {
    config: Config,
    session: Session,
    snowfall: Snowfall,
    rng: Box<dyn RandomSource>,
    started: Instant,
    timer_tx: UnboundedSender<TimerEvent>,
    timer_rx: UnboundedReceiver<TimerEvent>,
    /// Connection ticker, present only while connected.
    ticker: Option<Timer>,
    /// Snowfall spawner, alive for the whole run.
    _ambient: Option<Timer>,
    /// Hands a URL to the desktop. Swapped out in tests.
    opener: fn(&str) -> io::Result<()>,
}

fn system_opener(url: &str) -> io::Result<()> {
    open::that(url)
}

impl App {
    /// Must be called from within a tokio runtime.
    pub fn new(config: Config) -> Self {
        let mut rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(ThreadRandom::seeded(seed)),
            None => Box::new(ThreadRandom::from_entropy()),
        };
        let session = Session::new(rng.as_mut());
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let ambient = config
            .snow
            .then(|| Timer::spawn(SNOW_SPAWN_INTERVAL, TimerEvent::Ambient, timer_tx.clone()));

        Self {
            config,
            session,
            snowfall: Snowfall::default(),
            rng,
            started: Instant::now(),
            timer_tx,
            timer_rx,
            ticker: None,
            _ambient: ambient,
            opener: system_opener,
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        info!(seed = ?self.config.seed, snow = self.config.snow, "dashboard started");
        terminal.clear()?;
        loop {
            self.drain_timers();
            let now = self.started.elapsed();
            self.snowfall.prune(now);

            terminal.draw(|f| ui::render(f, &self.session, &self.snowfall, now))?;

            if event::poll(self.config.frame)? {
                if let TermEvent::Key(key) = event::read()? {
                    match map_key(key, &self.session) {
                        Some(Command::Quit) => break,
                        Some(Command::Dispatch(event)) => self.dispatch(event),
                        None => {}
                    }
                }
            }
        }
        info!("dashboard closed");
        Ok(())
    }

    /// Apply every timer message received since the last call.
    pub fn drain_timers(&mut self) {
        while let Ok(msg) = self.timer_rx.try_recv() {
            match msg {
                TimerEvent::Connection => self.dispatch(Event::Tick),
                TimerEvent::Ambient => {
                    let now = self.started.elapsed();
                    self.snowfall.spawn(now, self.rng.as_mut());
                }
            }
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        for effect in self.session.apply(event, self.rng.as_mut()) {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::StartTicker => {
                self.ticker = Some(Timer::spawn(
                    CONNECTION_TICK,
                    TimerEvent::Connection,
                    self.timer_tx.clone(),
                ));
            }
            Effect::StopTicker => {
                if let Some(ticker) = self.ticker.take() {
                    ticker.stop();
                }
            }
            Effect::OpenLink(url) => {
                if let Err(err) = open_link(self.opener, url) {
                    warn!(%err, "could not open link");
                    self.dispatch(Event::Notify(Notice::LinkUnavailable { url: url.to_string() }));
                }
            }
        }
    }
}

fn open_link(opener: fn(&str) -> io::Result<()>, url: &str) -> Result<(), AppError> {
    info!(url, "opening link");
    opener(url).map_err(|source| AppError::OpenLink {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_FRAME_MS, TELEGRAM_URL};
    use crate::model::Section;
    use std::time::Duration;

    fn config(snow: bool) -> Config {
        Config {
            seed: Some(1),
            snow,
            frame: Duration::from_millis(DEFAULT_FRAME_MS),
            log_file: std::env::temp_dir().join("snowvpn-test.log"),
            debug: false,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_runs_ticker_until_disconnect() {
        let mut app = App::new(config(false));
        app.dispatch(Event::SelectServer("ch".into()));
        app.dispatch(Event::ToggleConnection);
        assert!(app.ticker.is_some());

        tokio::time::sleep(Duration::from_millis(3500)).await;
        app.drain_timers();
        assert_eq!(app.session.connection_time(), 3);
        assert!(app.session.data_used().download > 0.0);

        app.dispatch(Event::ToggleConnection);
        assert!(app.ticker.is_none());
        tokio::time::sleep(Duration::from_secs(5)).await;
        app.drain_timers();
        assert_eq!(app.session.connection_time(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_connect_starts_nothing() {
        let mut app = App::new(config(false));
        app.dispatch(Event::ToggleConnection);
        assert!(app.ticker.is_none());
        assert!(app.session.notice().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ambient_timer_spawns_flakes() {
        let mut app = App::new(config(true));
        tokio::time::sleep(Duration::from_millis(1000)).await;
        app.drain_timers();
        assert_eq!(app.snowfall.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_link_raises_rendered_notice() {
        let mut app = App::new(config(false));
        app.opener = |_| Err(io::Error::new(io::ErrorKind::NotFound, "no opener"));
        app.dispatch(Event::SetSection(Section::Support));
        app.dispatch(Event::Activate);

        assert_eq!(
            app.session.notice(),
            Some(&Notice::LinkUnavailable {
                url: TELEGRAM_URL.to_string()
            })
        );
        let screen = crate::ui::tests::draw(&app.session, &app.snowfall);
        assert!(screen.contains("Could not open https://t.me/vkqeex"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_opened_link_leaves_no_notice() {
        let mut app = App::new(config(false));
        app.opener = |_| Ok(());
        app.dispatch(Event::SetSection(Section::Support));
        app.dispatch(Event::Activate);
        assert!(app.session.notice().is_none());
    }
}
