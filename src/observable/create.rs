use std::marker::PhantomData;

use crate::{
  observable::Observable,
  observer::{AnyObserver, Observer},
};

/// Creates an observable from an on-subscribe action.
///
/// `f` runs once per subscription and receives the subscriber behind an
/// [`AnyObserver`], which it may emit into right away or keep for later.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::create(|mut s: AnyObserver<i32, ()>| {
///   s.next(1);
///   s.next(2);
///   s.complete();
/// })
/// .subscribe(|v| println!("{v}"));
/// ```
pub fn create<Item, Err, F>(f: F) -> Create<F, Item, Err>
where
  F: Fn(AnyObserver<Item, Err>),
{
  Create { f, _marker: PhantomData }
}

/// Observable created from a function.
///
/// This struct is created by [`create`].
pub struct Create<F, Item, Err> {
  f: F,
  _marker: PhantomData<fn() -> (Item, Err)>,
}

impl<F: Clone, Item, Err> Clone for Create<F, Item, Err> {
  fn clone(&self) -> Self { Self { f: self.f.clone(), _marker: PhantomData } }
}

impl<F, Item, Err> Observable for Create<F, Item, Err>
where
  F: Fn(AnyObserver<Item, Err>),
  Item: 'static,
  Err: 'static,
{
  type Item = Item;
  type Err = Err;

  fn actual_subscribe<O>(self, observer: O)
  where
    O: Observer<Item, Err> + 'static,
  {
    (self.f)(AnyObserver::new(observer))
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use crate::prelude::*;

  #[test]
  fn test_create_next_complete() {
    let emitted = Rc::new(RefCell::new(vec![]));
    let emitted_clone = emitted.clone();
    let completed = Rc::new(RefCell::new(0));
    let completed_clone = completed.clone();

    observable::create(|mut emitter: AnyObserver<i32, ()>| {
      emitter.next(1);
      emitter.next(2);
      emitter.complete();
    })
    .subscribe_all(
      move |v| emitted_clone.borrow_mut().push(v),
      |_| {},
      move || *completed_clone.borrow_mut() += 1,
    );

    assert_eq!(*emitted.borrow(), vec![1, 2]);
    assert_eq!(*completed.borrow(), 1);
  }

  #[test]
  fn test_create_error() {
    let error = Rc::new(RefCell::new(None));
    let error_clone = error.clone();

    observable::create(|mut emitter: AnyObserver<(), &str>| emitter.error("oops"))
      .subscribe_err(|_| {}, move |e| *error_clone.borrow_mut() = Some(e));

    assert_eq!(*error.borrow(), Some("oops"));
  }

  #[test]
  fn cold_per_subscription() {
    let runs = Rc::new(RefCell::new(0));
    let c_runs = runs.clone();
    let source = observable::create(move |mut s: AnyObserver<i32, ()>| {
      *c_runs.borrow_mut() += 1;
      s.next(*c_runs.borrow());
      s.complete();
    });

    let seen = Rc::new(RefCell::new(vec![]));
    for _ in 0..3 {
      let c_seen = seen.clone();
      source.clone().subscribe(move |v| c_seen.borrow_mut().push(v));
    }
    assert_eq!(*seen.borrow(), vec![1, 2, 3]);
  }

  #[test]
  fn observer_may_outlive_the_action() {
    let kept: Rc<RefCell<Option<AnyObserver<i32, ()>>>> = Rc::default();
    let c_kept = kept.clone();
    let seen = Rc::new(RefCell::new(vec![]));
    let c_seen = seen.clone();

    observable::create(move |s| *c_kept.borrow_mut() = Some(s))
      .subscribe(move |v| c_seen.borrow_mut().push(v));

    let mut observer = kept.borrow_mut().take().unwrap();
    observer.next(7);
    assert_eq!(*seen.borrow(), vec![7]);
  }
}
