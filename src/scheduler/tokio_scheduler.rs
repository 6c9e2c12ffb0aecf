//! `tokio` executor adapter.
//!
//! Work is spawned onto a [`LocalSet`] so it may hold `!Send` handles. Share
//! the set through an `Rc` to pass it to `deliver_on`/`subscribe_on`.

use tokio::task::LocalSet;

use super::{Scheduler, Work};

impl Scheduler for LocalSet {
  fn schedule(&self, work: Work) {
    // Detached: the join handle is not needed to run the task.
    drop(self.spawn_local(async move { work() }));
  }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, rc::Rc};

  use tokio::task::LocalSet;

  use crate::prelude::*;

  #[test]
  fn deliver_on_local_set() {
    let rt = tokio::runtime::Builder::new_current_thread()
      .build()
      .unwrap();
    let local = Rc::new(LocalSet::new());
    let seen = Rc::new(RefCell::new(vec![]));
    let c_seen = seen.clone();

    observable::of::<_, ()>("hi")
      .deliver_on(local.clone())
      .subscribe(move |v| c_seen.borrow_mut().push(v));
    assert!(seen.borrow().is_empty());

    let Ok(local) = Rc::try_unwrap(local) else {
      panic!("the subscription should have released its scheduler handle");
    };
    rt.block_on(local);
    assert_eq!(*seen.borrow(), vec!["hi"]);
  }
}
