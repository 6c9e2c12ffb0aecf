use std::{cell::RefCell, rc::Rc};

use smallvec::SmallVec;

use super::{Event, Terminal};
use crate::{
  error::SubjectError,
  observable::Observable,
  observer::{AnyObserver, Observer},
};

/// A hot observable that records every event and replays the whole history
/// to each new subscriber before it sees live events.
///
/// The subject is a cheap handle; clones share one buffer and one list of
/// observers. It is also an [`Observer`], so a cold source can be
/// multicast with `source.actual_subscribe(subject.clone())`.
///
/// At most one terminal event is accepted. [`next`](Self::next),
/// [`error`](Self::error) and [`complete`](Self::complete) panic when the
/// subject has already terminated; the `try_*` variants report the same
/// condition as [`SubjectError::Terminated`].
///
/// # Examples
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use rxlite::prelude::*;
///
/// let subject = ReplaySubject::<i32, ()>::new();
/// subject.next(1);
/// subject.next(2);
/// subject.complete();
///
/// let seen = Rc::new(RefCell::new(vec![]));
/// let c_seen = seen.clone();
/// subject.subscribe(move |v| c_seen.borrow_mut().push(v));
/// assert_eq!(*seen.borrow(), vec![1, 2]);
/// ```
pub struct ReplaySubject<Item, Err>(Rc<RefCell<ReplayState<Item, Err>>>);

struct ReplayState<Item, Err> {
  events: Vec<Event<Item, Err>>,
  observers: SmallVec<[Attached<Item, Err>; 2]>,
  terminal: Terminal,
  draining: bool,
}

// `cursor` is the index of the next event this observer has to receive.
struct Attached<Item, Err> {
  observer: AnyObserver<Item, Err>,
  cursor: usize,
}

impl<Item, Err> Default for ReplaySubject<Item, Err> {
  fn default() -> Self {
    Self(Rc::new(RefCell::new(ReplayState {
      events: vec![],
      observers: SmallVec::new(),
      terminal: Terminal::Open,
      draining: false,
    })))
  }
}

impl<Item, Err> Clone for ReplaySubject<Item, Err> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<Item, Err> ReplaySubject<Item, Err> {
  pub fn new() -> Self { Self::default() }

  #[inline]
  pub fn terminal(&self) -> Terminal { self.0.borrow().terminal }

  #[inline]
  pub fn is_terminated(&self) -> bool { !self.terminal().is_open() }

  /// Observers that have not yet received the terminal event.
  #[inline]
  pub fn observer_count(&self) -> usize { self.0.borrow().observers.len() }

  /// Returns true if both handles share the same state.
  #[inline]
  pub fn ptr_eq(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }

  /// Snapshot of the recorded history.
  pub fn events(&self) -> Vec<Event<Item, Err>>
  where
    Item: Clone,
    Err: Clone,
  {
    self.0.borrow().events.clone()
  }

  fn record(&self, event: Event<Item, Err>) -> Result<(), SubjectError> {
    let mut state = self.0.borrow_mut();
    if !state.terminal.is_open() {
      return Err(SubjectError::Terminated(state.terminal));
    }
    if event.is_terminal() {
      state.terminal = Terminal::after(&event);
      tracing::debug!(
        terminal = %state.terminal,
        events = state.events.len(),
        observers = state.observers.len(),
        "replay subject terminated"
      );
    }
    state.events.push(event);
    Ok(())
  }
}

impl<Item, Err> ReplaySubject<Item, Err>
where
  Item: Clone + 'static,
  Err: Clone + 'static,
{
  /// Record and deliver a value.
  ///
  /// # Panics
  ///
  /// If the subject has already terminated.
  pub fn next(&self, value: Item) { self.try_next(value).unwrap_or_else(contract_violation) }

  /// Record and deliver an error, terminating the subject.
  ///
  /// # Panics
  ///
  /// If the subject has already terminated.
  pub fn error(&self, err: Err) { self.try_error(err).unwrap_or_else(contract_violation) }

  /// Record and deliver completion, terminating the subject.
  ///
  /// # Panics
  ///
  /// If the subject has already terminated.
  pub fn complete(&self) { self.try_complete().unwrap_or_else(contract_violation) }

  pub fn try_next(&self, value: Item) -> Result<(), SubjectError> {
    self.emit(Event::Next(value))
  }

  pub fn try_error(&self, err: Err) -> Result<(), SubjectError> { self.emit(Event::Error(err)) }

  pub fn try_complete(&self) -> Result<(), SubjectError> { self.emit(Event::Completed) }

  fn emit(&self, event: Event<Item, Err>) -> Result<(), SubjectError> {
    self.record(event)?;
    self.drain();
    Ok(())
  }

  /// Deliver recorded events until every attached observer has caught up.
  ///
  /// Emissions and subscriptions made from inside an observer callback only
  /// touch the buffer; the outermost drain delivers them. Each pass hands
  /// the lowest pending event to every observer waiting on it, in
  /// attachment order, so an event reaches every attached observer before
  /// the following one reaches any.
  fn drain(&self) {
    {
      let mut state = self.0.borrow_mut();
      if state.draining {
        return;
      }
      state.draining = true;
    }
    let _guard = DrainGuard(&self.0);

    while let Some(level) = self.lowest_pending() {
      self.deliver_level(level);
    }
  }

  fn lowest_pending(&self) -> Option<usize> {
    let state = self.0.borrow();
    let recorded = state.events.len();
    state
      .observers
      .iter()
      .map(|attached| attached.cursor)
      .filter(|&cursor| cursor < recorded)
      .min()
  }

  // Observers attached during the pass are appended, so `idx` stays valid;
  // only this loop removes entries.
  fn deliver_level(&self, level: usize) {
    let mut idx = 0;
    loop {
      let (mut observer, event) = {
        let mut state = self.0.borrow_mut();
        let ReplayState { events, observers, .. } = &mut *state;
        let Some(attached) = observers.get_mut(idx) else { break };
        if attached.cursor != level {
          idx += 1;
          continue;
        }
        let event = events[level].clone();
        if event.is_terminal() {
          (observers.remove(idx).observer, event)
        } else {
          attached.cursor += 1;
          idx += 1;
          (attached.observer.clone(), event)
        }
      };
      event.deliver(&mut observer);
    }
  }
}

struct DrainGuard<'a, Item, Err>(&'a RefCell<ReplayState<Item, Err>>);

impl<Item, Err> Drop for DrainGuard<'_, Item, Err> {
  fn drop(&mut self) {
    if let Ok(mut state) = self.0.try_borrow_mut() {
      state.draining = false;
    }
  }
}

fn contract_violation(err: SubjectError) {
  tracing::error!(%err, "replay subject contract violated");
  panic!("{err}");
}

impl<Item, Err> Observable for ReplaySubject<Item, Err>
where
  Item: Clone + 'static,
  Err: Clone + 'static,
{
  type Item = Item;
  type Err = Err;

  fn actual_subscribe<O>(self, observer: O)
  where
    O: Observer<Item, Err> + 'static,
  {
    {
      let mut state = self.0.borrow_mut();
      tracing::trace!(
        replay = state.events.len(),
        terminal = %state.terminal,
        "replay subject subscribed"
      );
      state
        .observers
        .push(Attached { observer: AnyObserver::new(observer), cursor: 0 });
    }
    self.drain();
  }
}

impl<Item, Err> Observer<Item, Err> for ReplaySubject<Item, Err>
where
  Item: Clone + 'static,
  Err: Clone + 'static,
{
  #[inline]
  fn next(&mut self, value: Item) { ReplaySubject::next(self, value) }

  #[inline]
  fn error(&mut self, err: Err) { ReplaySubject::error(self, err) }

  #[inline]
  fn complete(&mut self) { ReplaySubject::complete(self) }
}
