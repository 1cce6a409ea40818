use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};

/// Message sent by a periodic timer to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Connection ticker fired.
    Connection,
    /// Time to spawn another snowflake.
    Ambient,
}

/// A periodic background task. The task is aborted when the handle is
/// stopped or dropped, so no tick is sent after that point.
#[derive(Debug)]
pub struct Timer {
    kind: TimerEvent,
    handle: JoinHandle<()>,
}

impl Timer {
    /// Start sending `kind` every `period`. The first message goes out one
    /// full period after the call.
    pub fn spawn(period: Duration, kind: TimerEvent, tx: UnboundedSender<TimerEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                // Receiver gone means the event loop has shut down.
                if tx.send(kind).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(?kind, ?period, "timer started");
        Self { kind, handle }
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(kind = ?self.kind, "timer stopped");
    }
}
