use std::{
  cell::{Ref, RefCell, RefMut},
  rc::Rc,
};

use crate::observer::Observer;

/// Shared, mutable cell used to let several producers push into one
/// downstream observer.
///
/// Every combinator that needs to hand the same observer to more than one
/// place (the inner subscriptions of `bind`, work items queued by
/// `deliver_on`, timer callbacks of `throttle`) wraps it in a `MutRc`.
#[derive(Default)]
pub struct MutRc<T>(Rc<RefCell<T>>);

impl<T> MutRc<T> {
  pub fn own(t: T) -> Self { Self(Rc::new(RefCell::new(t))) }

  #[inline]
  pub fn rc_deref(&self) -> Ref<'_, T> { self.0.borrow() }

  #[inline]
  pub fn rc_deref_mut(&self) -> RefMut<'_, T> { self.0.borrow_mut() }

  /// Returns true if both handles point at the same cell.
  #[inline]
  pub fn ptr_eq(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }
}

impl<T> MutRc<Option<T>> {
  /// Take the value out of the cell, leaving `None` behind.
  ///
  /// The borrow ends before the caller touches the returned value, so it is
  /// safe to call back into the taken observer.
  #[inline]
  pub fn take(&self) -> Option<T> { self.0.borrow_mut().take() }
}

impl<T> Clone for MutRc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T, Item, Err> Observer<Item, Err> for MutRc<T>
where
  T: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) { self.rc_deref_mut().next(value) }

  #[inline]
  fn error(&mut self, err: Err) { self.rc_deref_mut().error(err) }

  #[inline]
  fn complete(&mut self) { self.rc_deref_mut().complete() }
}
