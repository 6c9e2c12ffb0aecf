//! Observable trait and the combinator surface.
//!
//! An observable is a description of a producer: it owns one on-subscribe
//! action and does nothing until [`Observable::actual_subscribe`] runs that
//! action with an observer. Subscribing consumes the description; clone it
//! first to subscribe again. Each subscription of a cold observable starts
//! the producer afresh.

use crate::{
  observer::{make_observer, make_observer_all, make_observer_err, Observer},
  ops::{
    bind::BindOp,
    catch_to::CatchToOp,
    deliver_on::DeliverOnOp,
    map::MapOp,
    subscribe_on::SubscribeOnOp,
    throttle::ThrottleOp,
    throttle_progress::{ProgressThrottle, ThrottleProgressOp},
  },
  scheduler::{Duration, ScheduleFn, Scheduler, Timer, Work},
};

mod boxed;
mod create;
mod of;
mod trivial;

pub use boxed::*;
pub use create::*;
pub use of::*;
pub use trivial::*;

/// A representation of any set of values over any amount of time.
pub trait Observable {
  type Item;
  type Err;

  /// Run the on-subscribe action, pushing signals into `observer`.
  fn actual_subscribe<O>(self, observer: O)
  where
    O: Observer<Self::Item, Self::Err> + 'static;
}

/// Operators and subscribe helpers available on every [`Observable`].
pub trait ObservableExt: Observable + Sized {
  /// Subscribe with a `next` handler; errors and completion are ignored.
  fn subscribe<N>(self, next: N)
  where
    N: FnMut(Self::Item) + 'static,
    Self::Err: 'static,
  {
    self.actual_subscribe(make_observer::<Self::Err, N>(next))
  }

  /// Subscribe with `next` and `error` handlers.
  fn subscribe_err<N, E>(self, next: N, error: E)
  where
    N: FnMut(Self::Item) + 'static,
    E: FnMut(Self::Err) + 'static,
  {
    self.actual_subscribe(make_observer_err(next, error))
  }

  /// Subscribe with `next`, `error` and `complete` handlers.
  fn subscribe_all<N, E, C>(self, next: N, error: E, complete: C)
  where
    N: FnMut(Self::Item) + 'static,
    E: FnMut(Self::Err) + 'static,
    C: FnMut() + 'static,
  {
    self.actual_subscribe(make_observer_all(next, error, complete))
  }

  /// Transform every value with `f`.
  ///
  /// This is `bind(|x| of(f(x)))`: the signal count and order are those of
  /// the source, with each value replaced by `f(value)`.
  fn map<B, F>(self, f: F) -> MapOp<Self, F>
  where
    F: Fn(Self::Item) -> B,
  {
    MapOp { source: self, func: f }
  }

  /// Flat-chain: subscribe `f(value)` for every value of the source and
  /// merge what those inner observables emit.
  ///
  /// Inner completions are swallowed; the merged stream completes when the
  /// source does. Errors from the source or any inner observable propagate.
  fn bind<R, F>(self, f: F) -> BindOp<Self, F>
  where
    F: Fn(Self::Item) -> R,
    R: Observable<Err = Self::Err>,
  {
    BindOp { source: self, func: f }
  }

  /// On error, drop the error and continue with `fallback` using the same
  /// downstream observer. Values and completion pass through.
  fn catch_to<F>(self, fallback: F) -> CatchToOp<Self, F>
  where
    F: Observable<Item = Self::Item, Err = Self::Err>,
  {
    CatchToOp { source: self, fallback }
  }

  /// Hand every signal to `dispatch` as a unit of work instead of calling
  /// the downstream observer inline.
  fn deliver_with<F>(self, dispatch: F) -> DeliverOnOp<Self, ScheduleFn<F>>
  where
    F: Fn(Work),
  {
    self.deliver_on(ScheduleFn(dispatch))
  }

  /// Deliver every signal through `scheduler`. Ordering is preserved iff the
  /// scheduler runs work in submission order.
  fn deliver_on<SD>(self, scheduler: SD) -> DeliverOnOp<Self, SD>
  where
    SD: Scheduler,
  {
    DeliverOnOp { source: self, scheduler }
  }

  /// Defer the act of subscribing to `dispatch`.
  fn subscribe_with<F>(self, dispatch: F) -> SubscribeOnOp<Self, ScheduleFn<F>>
  where
    F: Fn(Work),
  {
    self.subscribe_on(ScheduleFn(dispatch))
  }

  /// Defer the act of subscribing to `scheduler`.
  fn subscribe_on<SD>(self, scheduler: SD) -> SubscribeOnOp<Self, SD>
  where
    SD: Scheduler,
  {
    SubscribeOnOp { source: self, scheduler }
  }

  /// Erase the concrete observable type.
  fn into_any(self) -> AnyObservable<Self::Item, Self::Err>
  where
    Self: Clone + 'static,
    Self::Item: 'static,
    Self::Err: 'static,
  {
    AnyObservable::new(self)
  }

  /// Emit at most one value per `interval`: the first value of a window is
  /// held until the window's timer fires, later values in the window are
  /// dropped.
  fn throttle<T>(self, timer: T, interval: Duration) -> ThrottleOp<Self, T>
  where
    T: Timer,
  {
    ThrottleOp { source: self, timer, interval }
  }

  /// Rate-limit a progress stream, see [`ProgressThrottle`].
  ///
  /// Throttle state lives in each subscription, not in the returned
  /// operator.
  fn throttle_progress<C>(self, clock: C, config: ProgressThrottle) -> ThrottleProgressOp<Self, C>
  where
    Self: Observable<Item = f32>,
    C: Fn() -> Duration,
  {
    ThrottleProgressOp::new(self, clock, config)
  }
}

impl<T: Observable> ObservableExt for T {}
