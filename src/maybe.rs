//! Value-or-absent container.
//!
//! `Maybe<T>` is the native [`Option`]; [`MaybeExt`] adds the monadic
//! vocabulary the rest of the crate speaks (`bind`, `cond`, `or_null`, ...).
//! Absence is a first-class state, never an error.

use std::{
  borrow::Borrow,
  collections::{BTreeMap, HashMap},
  hash::{BuildHasher, Hash},
  ops::Deref,
};

pub type Maybe<T> = Option<T>;

#[inline]
pub fn just<T>(x: T) -> Maybe<T> { Some(x) }

#[inline]
pub fn nothing<T>() -> Maybe<T> { None }

pub trait MaybeExt<T> {
  fn is_just(&self) -> bool;

  fn is_nothing(&self) -> bool;

  /// The payload, or `fallback` when absent.
  fn or_default_to(self, fallback: T) -> T;

  /// Borrow the payload without taking ownership. An absent value yields an
  /// empty handle.
  fn or_null(&self) -> Option<&T>;

  /// Chain a computation that may itself produce nothing.
  fn bind<U, F>(self, f: F) -> Maybe<U>
  where
    F: FnOnce(T) -> Maybe<U>;

  /// Fold both cases into one result.
  fn cond<R, F, G>(self, on_just: F, on_nothing: G) -> R
  where
    F: FnOnce(T) -> R,
    G: FnOnce() -> R;

  /// The existing payload, or a freshly built one owned by the caller.
  ///
  /// `ctor` runs at most once, and only when the value is absent. The
  /// container itself is left untouched either way.
  fn or_construct_default<F>(&self, ctor: F) -> Payload<'_, T>
  where
    F: FnOnce() -> T;
}

impl<T> MaybeExt<T> for Maybe<T> {
  #[inline]
  fn is_just(&self) -> bool { self.is_some() }

  #[inline]
  fn is_nothing(&self) -> bool { self.is_none() }

  #[inline]
  fn or_default_to(self, fallback: T) -> T { self.unwrap_or(fallback) }

  #[inline]
  fn or_null(&self) -> Option<&T> { self.as_ref() }

  #[inline]
  fn bind<U, F>(self, f: F) -> Maybe<U>
  where
    F: FnOnce(T) -> Maybe<U>,
  {
    self.and_then(f)
  }

  #[inline]
  fn cond<R, F, G>(self, on_just: F, on_nothing: G) -> R
  where
    F: FnOnce(T) -> R,
    G: FnOnce() -> R,
  {
    match self {
      Some(x) => on_just(x),
      None => on_nothing(),
    }
  }

  fn or_construct_default<F>(&self, ctor: F) -> Payload<'_, T>
  where
    F: FnOnce() -> T,
  {
    match self {
      Some(x) => Payload::Existing(x),
      None => Payload::Constructed(ctor()),
    }
  }
}

/// Result of [`MaybeExt::or_construct_default`]: either a borrow of the
/// payload that was already there, or a new value the caller now owns.
#[derive(Debug)]
pub enum Payload<'a, T> {
  Existing(&'a T),
  Constructed(T),
}

impl<T> Payload<'_, T> {
  pub fn is_constructed(&self) -> bool { matches!(self, Payload::Constructed(_)) }

  pub fn into_owned(self) -> T
  where
    T: Clone,
  {
    match self {
      Payload::Existing(x) => x.clone(),
      Payload::Constructed(x) => x,
    }
  }
}

impl<T> Deref for Payload<'_, T> {
  type Target = T;

  fn deref(&self) -> &T {
    match self {
      Payload::Existing(x) => x,
      Payload::Constructed(x) => x,
    }
  }
}

/// Keyed containers [`find_maybe`] can search.
pub trait MapLookup<Q: ?Sized> {
  type Value;

  fn lookup(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, Q, S> MapLookup<Q> for HashMap<K, V, S>
where
  K: Borrow<Q> + Hash + Eq,
  Q: Hash + Eq + ?Sized,
  S: BuildHasher,
{
  type Value = V;

  #[inline]
  fn lookup(&self, key: &Q) -> Option<&V> { self.get(key) }
}

impl<K, V, Q> MapLookup<Q> for BTreeMap<K, V>
where
  K: Borrow<Q> + Ord,
  Q: Ord + ?Sized,
{
  type Value = V;

  #[inline]
  fn lookup(&self, key: &Q) -> Option<&V> { self.get(key) }
}

/// Look `key` up in `map`, copying the value out.
pub fn find_maybe<M, Q>(map: &M, key: &Q) -> Maybe<M::Value>
where
  M: MapLookup<Q>,
  M::Value: Clone,
  Q: ?Sized,
{
  map.lookup(key).cloned()
}
