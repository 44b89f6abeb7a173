//! Cancellable timers for component-owned animation loops.
//!
//! Provides `after()` and `every()` as plain futures. Nothing here spawns:
//! the owner drives the future on its own executor (the Dioxus scheduler in
//! the app, a paused tokio runtime in tests) and hands in a
//! [`CancellationToken`] so the callback never runs after teardown.
//!
//! ```ignore
//! let scope = TaskScope::new();
//! spawn(scheduler::every(Duration::from_millis(50), scope.token(), move || {
//!     field.write().decay();
//!     Flow::Continue
//! }));
//! // dropping `scope` stops the loop before its next tick
//! ```

use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Shortest period `every()` will schedule; a zero period would spin.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Whether a repeating callback wants to keep running
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Break,
}

/// Run `f` once after `delay` unless `token` is cancelled first.
///
/// Returns `true` if the callback ran.
pub async fn after<F>(delay: Duration, token: CancellationToken, f: F) -> bool
where
    F: FnOnce(),
{
    let elapsed = tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    };

    if elapsed && !token.is_cancelled() {
        f();
        true
    } else {
        false
    }
}

/// Run `tick` every `period` until it returns [`Flow::Break`] or `token` is
/// cancelled. The first call happens one full period after start.
///
/// Returns the number of times `tick` ran.
pub async fn every<F>(period: Duration, token: CancellationToken, mut tick: F) -> u64
where
    F: FnMut() -> Flow,
{
    let period = period.max(MIN_PERIOD);
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut runs = 0;
    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        runs += 1;
        if tick() == Flow::Break {
            break;
        }
    }
    runs
}

/// Owner of every timer a component starts.
///
/// Hands out child tokens; cancelling the scope (explicitly or by dropping
/// it) cancels all of them.
#[derive(Debug, Default)]
pub struct TaskScope {
    token: CancellationToken,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that is cancelled together with this scope
    pub fn token(&self) -> CancellationToken {
        self.token.child_token()
    }

    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("Cancelling task scope");
        }
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test(start_paused = true)]
    async fn after_runs_once_delay_elapses() {
        let ran = Cell::new(false);
        let start = Instant::now();

        let fired = after(Duration::from_millis(800), CancellationToken::new(), || ran.set(true)).await;

        assert!(fired);
        assert!(ran.get());
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn after_skips_callback_when_cancelled() {
        let ran = Cell::new(false);
        let token = CancellationToken::new();
        let canceller = token.clone();

        let (fired, _) = tokio::join!(
            after(Duration::from_millis(1000), token, || ran.set(true)),
            async move {
                tokio::time::sleep(Duration::from_millis(300)).await;
                canceller.cancel();
            }
        );

        assert!(!fired);
        assert!(!ran.get());
    }

    #[tokio::test(start_paused = true)]
    async fn every_stops_on_break() {
        let count = Cell::new(0);
        let runs = every(Duration::from_millis(50), CancellationToken::new(), || {
            count.set(count.get() + 1);
            if count.get() == 5 {
                Flow::Break
            } else {
                Flow::Continue
            }
        })
        .await;

        assert_eq!(runs, 5);
        assert_eq!(count.get(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn every_waits_one_period_before_first_tick() {
        let start = Instant::now();
        every(Duration::from_millis(100), CancellationToken::new(), || Flow::Break).await;
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_scope_stops_every() {
        let scope = TaskScope::new();
        let token = scope.token();
        let count = Cell::new(0u32);

        let (runs, _) = tokio::join!(
            every(Duration::from_millis(50), token, || {
                count.set(count.get() + 1);
                Flow::Continue
            }),
            async move {
                tokio::time::sleep(Duration::from_millis(175)).await;
                drop(scope);
            }
        );

        assert_eq!(runs, 3);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn scope_cancel_reaches_children() {
        let scope = TaskScope::new();
        let a = scope.token();
        let b = scope.token();
        assert!(!a.is_cancelled());

        scope.cancel();

        assert!(scope.is_cancelled());
        assert!(a.is_cancelled());
        assert!(b.is_cancelled());
    }
}
