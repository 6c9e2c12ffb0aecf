use crate::{
  observable::Observable,
  observer::Observer,
  rc::MutRc,
  scheduler::{Duration, Timer, TimerHandle},
};

#[derive(Clone)]
pub struct ThrottleOp<S, T> {
  pub(crate) source: S,
  pub(crate) timer: T,
  pub(crate) interval: Duration,
}

impl<S, T> Observable for ThrottleOp<S, T>
where
  S: Observable,
  S::Item: 'static,
  S::Err: 'static,
  T: Timer + 'static,
{
  type Item = S::Item;
  type Err = S::Err;

  fn actual_subscribe<O>(self, observer: O)
  where
    O: Observer<S::Item, S::Err> + 'static,
  {
    let Self { source, timer, interval } = self;
    source.actual_subscribe(ThrottleObserver {
      observer: MutRc::own(Some(observer)),
      pending: MutRc::own(None),
      handle: None,
      timer,
      interval,
    })
  }
}

/// A window opens with the first value and closes when the timer fires.
/// `pending` holds that value while the window is open.
pub struct ThrottleObserver<O, Item, T> {
  observer: MutRc<Option<O>>,
  pending: MutRc<Option<Item>>,
  handle: Option<TimerHandle>,
  timer: T,
  interval: Duration,
}

impl<O, Item, T> ThrottleObserver<O, Item, T> {
  fn cancel_timer(&mut self) {
    if let Some(handle) = self.handle.take() {
      handle.cancel()
    }
  }
}

impl<Item, Err, O, T> Observer<Item, Err> for ThrottleObserver<O, Item, T>
where
  Item: 'static,
  O: Observer<Item, Err> + 'static,
  T: Timer,
{
  fn next(&mut self, value: Item) {
    if self.pending.rc_deref().is_some() {
      tracing::trace!("throttle window open, value dropped");
      return;
    }
    *self.pending.rc_deref_mut() = Some(value);

    let mut observer = self.observer.clone();
    let pending = self.pending.clone();
    let handle = self.timer.start(
      self.interval,
      Box::new(move || {
        if let Some(value) = pending.take() {
          observer.next(value)
        }
      }),
    );
    self.handle = Some(handle);
  }

  fn error(&mut self, err: Err) {
    self.cancel_timer();
    self.pending.take();
    if let Some(mut observer) = self.observer.take() {
      observer.error(err)
    }
  }

  fn complete(&mut self) {
    self.cancel_timer();
    if let Some(mut observer) = self.observer.take() {
      if let Some(value) = self.pending.take() {
        observer.next(value)
      }
      observer.complete()
    }
  }
}
