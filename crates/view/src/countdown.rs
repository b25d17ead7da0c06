//! Auction countdown pill.

use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// What the countdown pill should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownState {
    /// No end time; render nothing.
    Hidden,
    /// Live remaining-time label.
    Running(String),
    Ended,
}

impl CountdownState {
    pub fn is_running(&self) -> bool {
        matches!(self, CountdownState::Running(_))
    }
}

/// Milliseconds remaining until `end_ms`, clamped so it never goes
/// negative.
pub fn remaining_millis(end_ms: i64, now_ms: i64) -> i64 {
    (end_ms - now_ms).max(0)
}

/// `"{h}h {mm}m {ss}s"`: hours unpadded and allowed past 24, minutes and
/// seconds zero-padded to two digits.
pub fn format_remaining(remaining_ms: i64) -> String {
    let total = remaining_ms.max(0) / 1000;
    let seconds = total % 60;
    let minutes = (total / 60) % 60;
    let hours = total / 3600;
    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Display state for `end_ms` at `now_ms`.
pub fn state_at(end_ms: Option<i64>, now_ms: i64) -> CountdownState {
    match end_ms {
        None => CountdownState::Hidden,
        Some(end) => {
            let left = remaining_millis(end, now_ms);
            if left == 0 {
                CountdownState::Ended
            } else {
                CountdownState::Running(format_remaining(left))
            }
        }
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

/// A ticking countdown bound to one card.
///
/// The initial state is computed synchronously at `start`, so there is no
/// blank first second. The tick task updates once per second, stops
/// itself when the countdown reaches `Ended`, and is aborted when the
/// handle drops, so a card that left the screen never keeps a timer alive.
pub struct Countdown {
    rx: watch::Receiver<CountdownState>,
    task: Option<JoinHandle<()>>,
}

impl Countdown {
    /// Start a countdown to `end_ms`; `None` yields a permanently hidden
    /// pill with no task behind it.
    pub fn start(end_ms: Option<i64>) -> Self {
        let initial = state_at(end_ms, now_millis());
        let (tx, rx) = watch::channel(initial.clone());

        let task = match (end_ms, initial) {
            (Some(end), CountdownState::Running(_)) => Some(tokio::spawn(async move {
                let mut ticker = interval(Duration::from_secs(1));
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                // The first interval tick completes immediately and the
                // initial value is already published.
                ticker.tick().await;
                loop {
                    ticker.tick().await;
                    let state = state_at(Some(end), now_millis());
                    let ended = state == CountdownState::Ended;
                    if tx.send(state).is_err() {
                        break;
                    }
                    if ended {
                        break;
                    }
                }
            })),
            _ => None,
        };

        Self { rx, task }
    }

    /// Current display state.
    pub fn state(&self) -> CountdownState {
        self.rx.borrow().clone()
    }

    /// Watch side of the timer for reactive consumers.
    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.rx.clone()
    }

    /// Whether the tick task already stopped (or never ran).
    pub fn is_stopped(&self) -> bool {
        self.task.as_ref().map(JoinHandle::is_finished).unwrap_or(true)
    }

    /// Stop ticking immediately.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.stop();
    }
}
