use crate::{
  observable::{of, Observable},
  observer::Observer,
  ops::bind::BindObserver,
};

#[derive(Clone)]
pub struct MapOp<S, M> {
  pub(crate) source: S,
  pub(crate) func: M,
}

impl<B, S, M> Observable for MapOp<S, M>
where
  S: Observable,
  M: Fn(S::Item) -> B + 'static,
{
  type Item = B;
  type Err = S::Err;

  fn actual_subscribe<O>(self, observer: O)
  where
    O: Observer<B, S::Err> + 'static,
  {
    let map = self.func;
    // `map(f)` is `bind(|x| of(f(x)))`.
    let pure = move |v: S::Item| of::<B, S::Err>(map(v));
    self.source.actual_subscribe(BindObserver::new(observer, pure))
  }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, rc::Rc};

  use crate::prelude::*;

  #[test]
  fn primitive_type() {
    let i = Rc::new(RefCell::new(0));
    let c_i = i.clone();
    observable::from_iter::<_, ()>(100..101)
      .map(|v| v * 2)
      .subscribe(move |v| *c_i.borrow_mut() += v);
    assert_eq!(*i.borrow(), 200);
  }

  #[test]
  fn functor_law_on_of() {
    let log = Rc::new(RefCell::new(vec![]));
    let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());

    observable::of(3).map(|x| x * 2).subscribe_all(
      move |v| l1.borrow_mut().push(format!("next {v}")),
      move |_: ()| l2.borrow_mut().push("error".to_string()),
      move || l3.borrow_mut().push("complete".to_string()),
    );

    assert_eq!(*log.borrow(), vec!["next 6", "complete"]);
  }

  #[test]
  fn map_types_mixed() {
    let i = Rc::new(RefCell::new(0));
    let c_i = i.clone();
    observable::from_iter::<_, ()>(vec!['a', 'b', 'c'])
      .map(|_v| 1)
      .subscribe(move |v| *c_i.borrow_mut() += v);
    assert_eq!(*i.borrow(), 3);
  }

  #[test]
  fn map_keeps_error() {
    let err = Rc::new(RefCell::new(None));
    let c_err = err.clone();
    observable::throw_err::<i32, _>(7u8)
      .map(|v| v.to_string())
      .subscribe_err(|_| {}, move |e| *c_err.borrow_mut() = Some(e));
    assert_eq!(*err.borrow(), Some(7u8));
  }

  #[test]
  fn no_clone_needed_on_output() {
    struct NotClone(i32);

    let i = Rc::new(RefCell::new(0));
    let c_i = i.clone();
    observable::of::<_, ()>(4)
      .map(NotClone)
      .subscribe(move |v| *c_i.borrow_mut() = v.0);
    assert_eq!(*i.borrow(), 4);
  }
}
