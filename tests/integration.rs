//! Integration tests for rxlite
//!
//! Exercises operator chains against the replay subject and the executor
//! adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use rxlite::prelude::*;

#[test]
fn pipeline_over_a_replayed_history() {
  let subject = ReplaySubject::<i32, String>::new();
  subject.next(1);
  subject.next(2);

  let result = Rc::new(RefCell::new(Vec::new()));
  let result_clone = result.clone();
  subject
    .clone()
    .map(|x| x * 10)
    .bind(|x| observable::from_iter(vec![x, x + 1]))
    .subscribe(move |v| result_clone.borrow_mut().push(v));

  subject.next(3);
  assert_eq!(*result.borrow(), vec![10, 11, 20, 21, 30, 31]);
}

#[test]
fn subject_error_recovered_by_fallback() {
  let subject = ReplaySubject::<&'static str, &'static str>::new();
  let log = Rc::new(RefCell::new(Vec::new()));
  let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());

  subject
    .clone()
    .catch_to(observable::of("fallback"))
    .subscribe_all(
      move |v| l1.borrow_mut().push(v.to_string()),
      move |e| l2.borrow_mut().push(format!("error {e}")),
      move || l3.borrow_mut().push("complete".to_string()),
    );

  subject.next("live");
  subject.error("disk full");
  assert_eq!(*log.borrow(), vec!["live", "fallback", "complete"]);
}

#[test]
fn heterogeneous_branches_behind_any() {
  let lookup: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
  let source = |key: &str| -> AnyObservable<i32, ()> {
    find_maybe(&lookup, key).cond(
      |v| observable::of(v).into_any(),
      || observable::empty().into_any(),
    )
  };

  let result = Rc::new(RefCell::new(Vec::new()));
  for key in ["a", "missing", "b"] {
    let result_clone = result.clone();
    source(key).subscribe(move |v| result_clone.borrow_mut().push(v));
  }
  assert_eq!(*result.borrow(), vec![1, 2]);
}

#[test]
fn deferred_subscribe_and_delivery_on_one_scheduler() {
  let scheduler = TestScheduler::new();
  let subject = ReplaySubject::<i32, ()>::new();
  subject.next(1);

  let result = Rc::new(RefCell::new(Vec::new()));
  let result_clone = result.clone();
  subject
    .clone()
    .subscribe_on(scheduler.clone())
    .deliver_with(schedule_on(scheduler.clone()))
    .subscribe(move |v| result_clone.borrow_mut().push(v));

  subject.next(2);
  assert!(result.borrow().is_empty());
  scheduler.flush();
  assert_eq!(*result.borrow(), vec![1, 2]);

  subject.next(3);
  assert_eq!(*result.borrow(), vec![1, 2]);
  scheduler.flush();
  assert_eq!(*result.borrow(), vec![1, 2, 3]);
}

#[test]
fn progress_reporting_chain() {
  let scheduler = TestScheduler::new();
  let progress = ReplaySubject::<f32, ()>::new();
  let shown = Rc::new(RefCell::new(Vec::new()));
  let shown_clone = shown.clone();
  let clock = scheduler.clone();

  progress
    .clone()
    .throttle_progress(move || clock.now(), ProgressThrottle::default())
    .map(|p| (p * 100.0).round() as u32)
    .subscribe(move |p| shown_clone.borrow_mut().push(p));

  for step in 1..=100 {
    scheduler.advance_by(Duration::from_millis(4));
    progress.next(step as f32 / 100.0);
  }
  progress.complete();

  let shown = shown.borrow();
  assert_eq!(shown.first(), Some(&1));
  assert!(shown.len() < 40);
  assert!(shown.windows(2).all(|w| w[0] < w[1]));
}

#[cfg(feature = "futures-scheduler")]
#[test]
fn replay_through_local_pool() {
  use futures::executor::LocalPool;

  let mut pool = LocalPool::new();
  let subject = ReplaySubject::<i32, ()>::new();
  let result = Rc::new(RefCell::new(Vec::new()));
  let completed = Rc::new(RefCell::new(false));
  let (result_clone, completed_clone) = (result.clone(), completed.clone());

  subject.next(1);
  subject
    .clone()
    .deliver_on(pool.spawner())
    .subscribe_all(
      move |v| result_clone.borrow_mut().push(v),
      |_| {},
      move || *completed_clone.borrow_mut() = true,
    );
  subject.next(2);
  subject.complete();

  assert!(result.borrow().is_empty());
  pool.run();
  assert_eq!(*result.borrow(), vec![1, 2]);
  assert!(*completed.borrow());
}

#[cfg(feature = "tokio-scheduler")]
#[tokio::test(flavor = "current_thread")]
async fn replay_through_tokio_local_set() {
  use tokio::task::LocalSet;

  let local = Rc::new(LocalSet::new());
  let subject = ReplaySubject::<i32, ()>::new();
  let result = Rc::new(RefCell::new(Vec::new()));
  let result_clone = result.clone();

  subject
    .clone()
    .deliver_on(local.clone())
    .subscribe(move |v| result_clone.borrow_mut().push(v));
  subject.next(7);
  subject.next(8);
  subject.complete();
  assert!(result.borrow().is_empty());

  let local =
    Rc::try_unwrap(local).unwrap_or_else(|_| panic!("scheduled work still holds the set"));
  local.await;
  assert_eq!(*result.borrow(), vec![7, 8]);
}
