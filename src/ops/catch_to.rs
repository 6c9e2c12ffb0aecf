use crate::{observable::Observable, observer::Observer};

#[derive(Clone)]
pub struct CatchToOp<S, F> {
  pub(crate) source: S,
  pub(crate) fallback: F,
}

impl<S, F> Observable for CatchToOp<S, F>
where
  S: Observable,
  F: Observable<Item = S::Item, Err = S::Err> + 'static,
{
  type Item = S::Item;
  type Err = S::Err;

  fn actual_subscribe<O>(self, observer: O)
  where
    O: Observer<S::Item, S::Err> + 'static,
  {
    self.source.actual_subscribe(CatchToObserver {
      observer: Some(observer),
      fallback: Some(self.fallback),
    })
  }
}

/// Switches the downstream observer over to the fallback on the first
/// error. Nothing from the source reaches the observer after that.
pub struct CatchToObserver<O, F> {
  observer: Option<O>,
  fallback: Option<F>,
}

impl<Item, Err, O, F> Observer<Item, Err> for CatchToObserver<O, F>
where
  O: Observer<Item, Err> + 'static,
  F: Observable<Item = Item, Err = Err>,
{
  fn next(&mut self, value: Item) {
    if let Some(observer) = &mut self.observer {
      observer.next(value)
    }
  }

  fn error(&mut self, _err: Err) {
    if let (Some(observer), Some(fallback)) = (self.observer.take(), self.fallback.take()) {
      fallback.actual_subscribe(observer)
    }
  }

  fn complete(&mut self) {
    if let Some(mut observer) = self.observer.take() {
      observer.complete()
    }
  }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, rc::Rc};

  use crate::prelude::*;

  #[test]
  fn chained_fallbacks() {
    let log = Rc::new(RefCell::new(vec![]));
    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());

    observable::throw_err::<i32, _>("boom")
      .catch_to(observable::throw_err("splat"))
      .catch_to(observable::create(|mut s: AnyObserver<i32, &'static str>| {
        s.next(7);
        s.complete();
      }))
      .subscribe_all(
        move |v| l1.borrow_mut().push(format!("next {v}")),
        move |e| l2.borrow_mut().push(format!("error {e}")),
        move || l3.borrow_mut().push("complete".to_string()),
      );

    assert_eq!(*log.borrow(), vec!["next 7", "complete"]);
  }

  #[test]
  fn values_before_the_error_are_kept() {
    let seen = Rc::new(RefCell::new(vec![]));
    let c_seen = seen.clone();

    observable::create(|mut s: AnyObserver<i32, ()>| {
      s.next(1);
      s.next(2);
      s.error(());
      s.next(99);
    })
    .catch_to(observable::from_iter(vec![3, 4]))
    .subscribe(move |v| c_seen.borrow_mut().push(v));

    assert_eq!(*seen.borrow(), vec![1, 2, 3, 4]);
  }

  #[test]
  fn fallback_unused_without_error() {
    let subscribed = Rc::new(RefCell::new(false));
    let c_subscribed = subscribed.clone();
    let completed = Rc::new(RefCell::new(0));
    let c_completed = completed.clone();

    observable::of::<_, ()>(1)
      .catch_to(observable::create(move |_: AnyObserver<i32, ()>| {
        *c_subscribed.borrow_mut() = true;
      }))
      .subscribe_all(|_| {}, |_| {}, move || *c_completed.borrow_mut() += 1);

    assert!(!*subscribed.borrow());
    assert_eq!(*completed.borrow(), 1);
  }

  #[test]
  fn fallback_error_reaches_observer() {
    let err = Rc::new(RefCell::new(None));
    let c_err = err.clone();

    observable::throw_err::<i32, _>("first")
      .catch_to(observable::throw_err("second"))
      .subscribe_err(|_| {}, move |e| *c_err.borrow_mut() = Some(e));

    assert_eq!(*err.borrow(), Some("second"));
  }
}
