use std::marker::PhantomData;

use crate::{observable::Observable, observer::Observer};

/// Creates an observable that emits no items, just terminates with an error.
///
/// # Arguments
///
/// * `e` - An error to emit and terminate with
pub fn throw_err<Item, Err>(e: Err) -> ThrowErr<Item, Err> { ThrowErr(e, PhantomData) }

pub struct ThrowErr<Item, Err>(Err, PhantomData<fn() -> Item>);

impl<Item, Err: Clone> Clone for ThrowErr<Item, Err> {
  fn clone(&self) -> Self { ThrowErr(self.0.clone(), PhantomData) }
}

impl<Item, Err> Observable for ThrowErr<Item, Err> {
  type Item = Item;
  type Err = Err;

  fn actual_subscribe<O>(self, mut observer: O)
  where
    O: Observer<Item, Err> + 'static,
  {
    observer.error(self.0);
  }
}

/// Creates an observable that produces no values.
///
/// Completes immediately. Never emits an error.
///
/// # Examples
/// ```
/// use rxlite::prelude::*;
///
/// observable::empty::<i32, ()>().subscribe(|v| println!("{v}"));
///
/// // Result: nothing printed
/// ```
pub fn empty<Item, Err>() -> Empty<Item, Err> { Empty(PhantomData) }

pub struct Empty<Item, Err>(PhantomData<fn() -> (Item, Err)>);

impl<Item, Err> Clone for Empty<Item, Err> {
  fn clone(&self) -> Self { Empty(PhantomData) }
}

impl<Item, Err> Observable for Empty<Item, Err> {
  type Item = Item;
  type Err = Err;

  fn actual_subscribe<O>(self, mut observer: O)
  where
    O: Observer<Item, Err> + 'static,
  {
    observer.complete();
  }
}
