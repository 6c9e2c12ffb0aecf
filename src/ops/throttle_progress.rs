//! Rate limiting for `f32` progress streams.

use std::{cell::Cell, rc::Rc};

use crate::{
  observable::{empty, of, AnyObservable, Observable, ObservableExt},
  observer::Observer,
  scheduler::Duration,
};

/// Thresholds a progress update has to clear to be emitted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressThrottle {
  /// An update must exceed the last emitted progress by more than this.
  pub min_step: f32,
  /// An update must arrive more than this long after the last emitted one.
  pub min_interval: Duration,
}

impl Default for ProgressThrottle {
  fn default() -> Self { Self { min_step: 0.002, min_interval: Duration::from_millis(10) } }
}

#[derive(Clone, Copy, Default)]
struct LastUpdate {
  progress: f32,
  at: Option<Duration>,
}

/// Emits a progress value only when it clears both [`ProgressThrottle`]
/// thresholds relative to the last value emitted.
///
/// The last emitted progress and time are kept per subscription. Cloning the
/// operator or subscribing it twice starts each subscriber from a clean
/// slate, so one subscriber's emissions never suppress another's.
pub struct ThrottleProgressOp<S, C> {
  pub(crate) source: S,
  pub(crate) clock: Rc<C>,
  pub(crate) config: ProgressThrottle,
}

impl<S, C> ThrottleProgressOp<S, C> {
  pub(crate) fn new(source: S, clock: C, config: ProgressThrottle) -> Self {
    Self { source, clock: Rc::new(clock), config }
  }
}

impl<S: Clone, C> Clone for ThrottleProgressOp<S, C> {
  fn clone(&self) -> Self {
    Self {
      source: self.source.clone(),
      clock: self.clock.clone(),
      config: self.config,
    }
  }
}

impl<S, C> Observable for ThrottleProgressOp<S, C>
where
  S: Observable<Item = f32>,
  S::Err: 'static,
  C: Fn() -> Duration + 'static,
{
  type Item = f32;
  type Err = S::Err;

  fn actual_subscribe<O>(self, observer: O)
  where
    O: Observer<f32, S::Err> + 'static,
  {
    let Self { source, clock, config } = self;
    let last = Cell::new(LastUpdate::default());

    let gate = move |p: f32| -> AnyObservable<f32, S::Err> {
      let prev = last.get();
      if p > prev.progress + config.min_step {
        let now = clock();
        if prev.at.map_or(true, |at| now > at + config.min_interval) {
          last.set(LastUpdate { progress: p, at: Some(now) });
          return of(p).into_any();
        }
      }
      tracing::trace!(progress = p, "progress update throttled");
      empty().into_any()
    };
    source.bind(gate).actual_subscribe(observer)
  }
}
