//! Executor and timer capabilities.
//!
//! The core never runs deferred work itself. `deliver_on`/`subscribe_on`
//! hand units of [`Work`] to a [`Scheduler`], and `throttle` asks a
//! [`Timer`] to call back later. Adapters are provided for the executors
//! this crate can reach; anything else implements the two traits directly or
//! goes through [`ScheduleFn`].

use std::{cell::Cell, rc::Rc};

#[cfg(feature = "futures-scheduler")]
mod futures_scheduler;
pub mod test_scheduler;
#[cfg(feature = "tokio-scheduler")]
mod tokio_scheduler;
#[cfg(target_arch = "wasm32")]
mod wasm_scheduler;

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};

pub use test_scheduler::TestScheduler;
#[cfg(target_arch = "wasm32")]
pub use wasm_scheduler::WasmScheduler;
#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};

/// A zero-argument unit of work.
pub type Work = Box<dyn FnOnce() + 'static>;

/// A Scheduler is an object to order work and run it later.
///
/// Implementations must run work submitted to one scheduler in submission
/// order; `deliver_on` relies on that to keep signals ordered. There is no
/// cancellation and no priority.
pub trait Scheduler {
  fn schedule(&self, work: Work);
}

impl<T: Scheduler + ?Sized> Scheduler for Rc<T> {
  #[inline]
  fn schedule(&self, work: Work) { (**self).schedule(work) }
}

/// Adapts a plain dispatch function into a [`Scheduler`].
#[derive(Clone)]
pub struct ScheduleFn<F>(pub F);

impl<F> Scheduler for ScheduleFn<F>
where
  F: Fn(Work),
{
  #[inline]
  fn schedule(&self, work: Work) { (self.0)(work) }
}

/// Turn a scheduler into the dispatch function accepted by `deliver_with`
/// and `subscribe_with`.
pub fn schedule_on<SD>(scheduler: SD) -> impl Fn(Work) + Clone
where
  SD: Scheduler + Clone,
{
  move |work| scheduler.schedule(work)
}

/// Start-once relative timer.
pub trait Timer {
  /// Run `callback` once after `delay`, unless the returned handle is
  /// cancelled first. Dropping the handle does not cancel.
  fn start(&self, delay: Duration, callback: Work) -> TimerHandle;
}

impl<T: Timer + ?Sized> Timer for Rc<T> {
  #[inline]
  fn start(&self, delay: Duration, callback: Work) -> TimerHandle {
    (**self).start(delay, callback)
  }
}

/// Cancellation handle of a started timer.
///
/// Clones share one state. Dropping a handle does not cancel the timer.
#[derive(Clone, Default)]
pub struct TimerHandle(Rc<TimerState>);

#[derive(Default)]
struct TimerState {
  cancelled: Cell<bool>,
  on_cancel: Cell<Option<Work>>,
}

impl TimerHandle {
  pub fn new() -> Self { Self::default() }

  /// Cancel the timer. Only the first call has an effect.
  pub fn cancel(&self) {
    if !self.0.cancelled.replace(true) {
      if let Some(release) = self.0.on_cancel.take() {
        release()
      }
    }
  }

  #[inline]
  pub fn is_cancelled(&self) -> bool { self.0.cancelled.get() }

  /// Wrap `callback` so it does nothing once this handle is cancelled.
  pub(crate) fn guard(&self, callback: Work) -> Work {
    let handle = self.clone();
    Box::new(move || {
      if !handle.is_cancelled() {
        callback()
      }
    })
  }

  /// Register how the timer backend releases a pending timer on cancel.
  ///
  /// Runs `release` right away if the handle is already cancelled. A later
  /// registration replaces an earlier one.
  pub(crate) fn on_cancel(&self, release: Work) {
    if self.is_cancelled() {
      release()
    } else {
      self.0.on_cancel.set(Some(release));
    }
  }
}

impl std::fmt::Debug for TimerHandle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TimerHandle")
      .field("cancelled", &self.is_cancelled())
      .finish()
  }
}

/// Monotonic clock measuring time since the clock was created.
pub fn system_clock() -> impl Fn() -> Duration + Clone {
  let start = Instant::now();
  move || start.elapsed()
}
