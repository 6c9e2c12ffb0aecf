//! Observer trait and implementations
//!
//! The Observer trait defines the consumer of data in the reactive pattern.
//! It provides three methods: next (for values), error (for errors), and
//! complete (for stream completion).

use std::{any::Any, cell::RefCell, rc::Rc};

// ============================================================================
// Observer Trait
// ============================================================================

/// Observer trait: The consumer of data in reactive programming
///
/// `next` may be called any number of times. `error` and `complete` are
/// terminal: a well-behaved producer calls at most one of them, once, and
/// never calls `next` afterwards. Observers in general do not check this;
/// [`ReplaySubject`](crate::subject::ReplaySubject) is the one place it is
/// enforced.
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable
  fn next(&mut self, value: Item);

  /// Handle an error from the observable
  fn error(&mut self, err: Err);

  /// Handle completion of the observable
  fn complete(&mut self);
}

// ============================================================================
// FnObserver - Closure adapter
// ============================================================================

/// Observer assembled from up to three independent closures.
///
/// Handlers that were not supplied are no-ops. Build one with
/// [`make_observer`], [`make_observer_err`] or [`make_observer_all`], or let
/// `subscribe`, `subscribe_err` and `subscribe_all` do it.
#[derive(Clone)]
pub struct FnObserver<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

fn ignore_err<Err>(_: Err) {}

fn ignore_complete() {}

/// Observer with only a `next` handler.
pub fn make_observer<Err, N>(next: N) -> FnObserver<N, fn(Err), fn()> {
  FnObserver {
    next,
    error: ignore_err::<Err> as fn(Err),
    complete: ignore_complete as fn(),
  }
}

/// Observer with `next` and `error` handlers.
pub fn make_observer_err<N, E>(next: N, error: E) -> FnObserver<N, E, fn()> {
  FnObserver { next, error, complete: ignore_complete as fn() }
}

/// Observer with all three handlers.
pub fn make_observer_all<N, E, C>(next: N, error: E, complete: C) -> FnObserver<N, E, C> {
  FnObserver { next, error, complete }
}

impl<Item, Err, N, E, C> Observer<Item, Err> for FnObserver<N, E, C>
where
  N: FnMut(Item),
  E: FnMut(Err),
  C: FnMut(),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.next)(value) }

  #[inline]
  fn error(&mut self, err: Err) { (self.error)(err) }

  #[inline]
  fn complete(&mut self) { (self.complete)() }
}

// ============================================================================
// AnyObserver - reference-counted type erasure
// ============================================================================

/// Type-erased observer behind one shared, reference-counted handle.
///
/// Cloning an `AnyObserver` does not clone the observer: every clone drives
/// the same underlying instance. This is what lets a producer keep the
/// observer after `subscribe` returns, and lets heterogeneous observables be
/// combined without the concrete observer type leaking into their
/// signatures.
pub struct AnyObserver<Item, Err>(Rc<RefCell<dyn Observer<Item, Err>>>);

impl<Item: 'static, Err: 'static> AnyObserver<Item, Err> {
  /// Erase `observer`.
  ///
  /// Passing an `AnyObserver` returns it unchanged instead of wrapping it a
  /// second time, so identity survives repeated erasure.
  pub fn new<O>(observer: O) -> Self
  where
    O: Observer<Item, Err> + 'static,
  {
    let mut slot = Some(observer);
    let reused = (&mut slot as &mut dyn Any)
      .downcast_mut::<Option<Self>>()
      .and_then(Option::take);
    match (reused, slot) {
      (Some(any), _) => any,
      (None, Some(observer)) => Self(Rc::new(RefCell::new(observer))),
      (None, None) => unreachable!("the slot is only emptied by a successful downcast"),
    }
  }
}

impl<Item, Err> AnyObserver<Item, Err> {
  /// Returns true if both handles drive the same observer.
  #[inline]
  pub fn ptr_eq(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }

  /// Number of live handles to the underlying observer.
  #[inline]
  pub fn handle_count(&self) -> usize { Rc::strong_count(&self.0) }
}

impl<Item, Err> Clone for AnyObserver<Item, Err> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<Item, Err> Observer<Item, Err> for AnyObserver<Item, Err> {
  #[inline]
  fn next(&mut self, value: Item) { self.0.borrow_mut().next(value) }

  #[inline]
  fn error(&mut self, err: Err) { self.0.borrow_mut().error(err) }

  #[inline]
  fn complete(&mut self) { self.0.borrow_mut().complete() }
}

// ============================================================================
// Forwarding observers
// ============================================================================

/// Forwards `next` and `error`, swallows `complete`.
///
/// Used for the inner subscriptions of `bind`: only the outer source may end
/// the merged stream.
pub struct UncompletableObserver<O>(pub O);

impl<Item, Err, O> Observer<Item, Err> for UncompletableObserver<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) { self.0.next(value) }

  #[inline]
  fn error(&mut self, err: Err) { self.0.error(err) }

  #[inline]
  fn complete(&mut self) {}
}

/// Option observer - None ignores all events, Some delegates to inner.
///
/// A terminal signal takes the inner observer out, so nothing reaches it
/// after `error` or `complete`.
impl<O, Item, Err> Observer<Item, Err> for Option<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if let Some(inner) = self {
      inner.next(value);
    }
  }

  fn error(&mut self, err: Err) {
    if let Some(mut inner) = self.take() {
      inner.error(err);
    }
  }

  fn complete(&mut self) {
    if let Some(mut inner) = self.take() {
      inner.complete();
    }
  }
}

// ============================================================================
// Tests
// ============================================================================
