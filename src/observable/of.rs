use std::marker::PhantomData;

use crate::{observable::Observable, observer::Observer};

/// Creates an observable producing a single value.
///
/// Emits `v` and completes, synchronously, on subscription. Never emits an
/// error.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::of::<_, ()>(123).subscribe(|v| println!("{v}"));
/// ```
pub fn of<Item, Err>(v: Item) -> Of<Item, Err> { Of(v, PhantomData) }

pub struct Of<Item, Err>(Item, PhantomData<fn() -> Err>);

impl<Item: Clone, Err> Clone for Of<Item, Err> {
  fn clone(&self) -> Self { Of(self.0.clone(), PhantomData) }
}

impl<Item, Err> Observable for Of<Item, Err> {
  type Item = Item;
  type Err = Err;

  fn actual_subscribe<O>(self, mut observer: O)
  where
    O: Observer<Item, Err> + 'static,
  {
    observer.next(self.0);
    observer.complete();
  }
}

/// Creates an observable producing the values of an iterator, then
/// completes.
pub fn from_iter<I, Err>(iter: I) -> FromIter<I, Err>
where
  I: IntoIterator,
{
  FromIter(iter, PhantomData)
}

pub struct FromIter<I, Err>(I, PhantomData<fn() -> Err>);

impl<I: Clone, Err> Clone for FromIter<I, Err> {
  fn clone(&self) -> Self { FromIter(self.0.clone(), PhantomData) }
}

impl<I, Err> Observable for FromIter<I, Err>
where
  I: IntoIterator,
{
  type Item = I::Item;
  type Err = Err;

  fn actual_subscribe<O>(self, mut observer: O)
  where
    O: Observer<I::Item, Err> + 'static,
  {
    for v in self.0 {
      observer.next(v);
    }
    observer.complete();
  }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, rc::Rc};

  use crate::prelude::*;

  #[test]
  fn of_emits_once_then_completes() {
    let log = Rc::new(RefCell::new(vec![]));
    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());

    observable::of(100).subscribe_all(
      move |v| l1.borrow_mut().push(format!("next {v}")),
      move |e: &str| l2.borrow_mut().push(format!("error {e}")),
      move || l3.borrow_mut().push("complete".to_string()),
    );

    assert_eq!(*log.borrow(), vec!["next 100", "complete"]);
  }

  #[test]
  fn of_is_repeatable_through_clone() {
    let sum = Rc::new(RefCell::new(0));
    let o = observable::of::<_, ()>(5);
    for _ in 0..2 {
      let c_sum = sum.clone();
      o.clone().subscribe(move |v| *c_sum.borrow_mut() += v);
    }
    assert_eq!(*sum.borrow(), 10);
  }

  #[test]
  fn from_iter_in_order() {
    let seen = Rc::new(RefCell::new(vec![]));
    let c_seen = seen.clone();
    let done = Rc::new(RefCell::new(false));
    let c_done = done.clone();

    observable::from_iter(vec!['a', 'b', 'c']).subscribe_all(
      move |v| c_seen.borrow_mut().push(v),
      |_: ()| {},
      move || *c_done.borrow_mut() = true,
    );

    assert_eq!(*seen.borrow(), vec!['a', 'b', 'c']);
    assert!(*done.borrow());
  }
}
