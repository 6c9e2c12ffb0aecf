//! Type-erased observable.
//!
//! [`AnyObservable`] hides the concrete on-subscribe action behind one
//! reference-counted handle, so heterogeneous observables can be stored in
//! one collection, returned from different branches, or compared by
//! identity.

use std::rc::Rc;

use crate::{
  observable::Observable,
  observer::{AnyObserver, Observer},
};

/// Object-safe observable trait for type erasure.
///
/// Subscription goes through an [`AnyObserver`], so the concrete observer
/// type never appears in the vtable.
pub trait DynObservable<Item, Err> {
  fn dyn_subscribe(&self, observer: AnyObserver<Item, Err>);
}

impl<S> DynObservable<S::Item, S::Err> for S
where
  S: Observable + Clone,
  S::Item: 'static,
  S::Err: 'static,
{
  fn dyn_subscribe(&self, observer: AnyObserver<S::Item, S::Err>) {
    self.clone().actual_subscribe(observer)
  }
}

/// Type-erased, cloneable observable. Built by
/// [`ObservableExt::into_any`](crate::observable::ObservableExt::into_any).
pub struct AnyObservable<Item, Err>(Rc<dyn DynObservable<Item, Err>>);

impl<Item: 'static, Err: 'static> AnyObservable<Item, Err> {
  pub fn new<S>(source: S) -> Self
  where
    S: Observable<Item = Item, Err = Err> + Clone + 'static,
  {
    Self(Rc::new(source))
  }
}

impl<Item, Err> AnyObservable<Item, Err> {
  /// Returns true if both handles erase the same observable instance.
  #[inline]
  pub fn ptr_eq(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }
}

impl<Item, Err> Clone for AnyObservable<Item, Err> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<Item: 'static, Err: 'static> Observable for AnyObservable<Item, Err> {
  type Item = Item;
  type Err = Err;

  fn actual_subscribe<O>(self, observer: O)
  where
    O: Observer<Item, Err> + 'static,
  {
    self.0.dyn_subscribe(AnyObserver::new(observer))
  }
}
