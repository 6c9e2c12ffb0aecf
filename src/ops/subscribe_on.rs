use crate::{observable::Observable, observer::Observer, scheduler::Scheduler};

#[derive(Clone)]
pub struct SubscribeOnOp<S, SD> {
  pub(crate) source: S,
  pub(crate) scheduler: SD,
}

impl<S, SD> Observable for SubscribeOnOp<S, SD>
where
  S: Observable + 'static,
  SD: Scheduler,
{
  type Item = S::Item;
  type Err = S::Err;

  fn actual_subscribe<O>(self, observer: O)
  where
    O: Observer<S::Item, S::Err> + 'static,
  {
    let source = self.source;
    self
      .scheduler
      .schedule(Box::new(move || source.actual_subscribe(observer)));
  }
}

#[cfg(test)]
mod test {
  use std::{cell::RefCell, rc::Rc};

  use crate::prelude::*;

  #[test]
  fn subscription_waits_for_scheduler() {
    let scheduler = TestScheduler::new();
    let started = Rc::new(RefCell::new(0));
    let c_started = started.clone();
    let seen = Rc::new(RefCell::new(vec![]));
    let c_seen = seen.clone();

    observable::create(move |mut s: AnyObserver<i32, ()>| {
      *c_started.borrow_mut() += 1;
      s.next(1);
      s.complete();
    })
    .subscribe_on(scheduler.clone())
    .subscribe(move |v| c_seen.borrow_mut().push(v));

    assert_eq!(*started.borrow(), 0);
    scheduler.run_ready();
    assert_eq!(*started.borrow(), 1);
    assert_eq!(*seen.borrow(), vec![1]);
  }

  #[cfg(feature = "futures-scheduler")]
  #[test]
  fn values_are_then_delivered_inline() {
    let mut pool = futures::executor::LocalPool::new();
    let seen = Rc::new(RefCell::new(vec![]));
    let c_seen = seen.clone();

    let spawner = pool.spawner();
    observable::from_iter::<_, ()>(1..5)
      .subscribe_with(move |work| spawner.schedule(work))
      .subscribe(move |v| c_seen.borrow_mut().push(v));

    assert!(seen.borrow().is_empty());
    pool.run();
    assert_eq!(*seen.borrow(), (1..5).collect::<Vec<_>>());
  }
}
