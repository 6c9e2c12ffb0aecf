use crate::{
  observable::Observable,
  observer::{Observer, UncompletableObserver},
  rc::MutRc,
};

#[derive(Clone)]
pub struct BindOp<S, F> {
  pub(crate) source: S,
  pub(crate) func: F,
}

impl<S, F, R> Observable for BindOp<S, F>
where
  S: Observable,
  F: Fn(S::Item) -> R + 'static,
  R: Observable<Err = S::Err>,
{
  type Item = R::Item;
  type Err = S::Err;

  fn actual_subscribe<O>(self, observer: O)
  where
    O: Observer<R::Item, S::Err> + 'static,
  {
    self
      .source
      .actual_subscribe(BindObserver::new(observer, self.func))
  }
}

/// Subscribes the observable `func` returns for each value, routing what
/// it emits into the one shared downstream observer.
///
/// The first error, from the source or any inner observable, and the
/// source's completion take the downstream out of the shared cell. Later
/// values are not mapped at all.
pub struct BindObserver<O, F> {
  observer: MutRc<Option<O>>,
  func: F,
}

impl<O, F> BindObserver<O, F> {
  pub(crate) fn new(observer: O, func: F) -> Self {
    Self { observer: MutRc::own(Some(observer)), func }
  }
}

impl<Item, Err, O, F, R> Observer<Item, Err> for BindObserver<O, F>
where
  F: Fn(Item) -> R,
  R: Observable<Err = Err>,
  O: Observer<R::Item, Err> + 'static,
{
  fn next(&mut self, value: Item) {
    if self.observer.rc_deref().is_none() {
      return;
    }
    (self.func)(value).actual_subscribe(UncompletableObserver(self.observer.clone()))
  }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(&mut self) { self.observer.complete() }
}
