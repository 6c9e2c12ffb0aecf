//! Test Scheduler for deterministic testing of deferred delivery and timers.
//!
//! Provides virtual time that only advances when explicitly instructed.
//! Nothing runs until the test calls [`TestScheduler::run_ready`],
//! [`TestScheduler::advance_by`] or [`TestScheduler::flush`].
//!
//! # Usage
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//!
//! use rxlite::prelude::*;
//!
//! let scheduler = TestScheduler::new();
//! let seen = Rc::new(RefCell::new(vec![]));
//! let c_seen = seen.clone();
//!
//! observable::of::<_, ()>(42)
//!   .deliver_on(scheduler.clone())
//!   .subscribe(move |v| c_seen.borrow_mut().push(v));
//!
//! assert!(seen.borrow().is_empty());
//! scheduler.flush();
//! assert_eq!(*seen.borrow(), vec![42]);
//! ```

use std::{
  cell::RefCell,
  cmp::Ordering,
  collections::BinaryHeap,
  rc::Rc,
};

use super::{Duration, Scheduler, Timer, TimerHandle, Work};

// ==================== Internal State ====================

#[derive(Default)]
struct TestSchedulerState {
  virtual_time: Duration,
  task_queue: BinaryHeap<ScheduledTask>,
  next_task_id: usize,
}

struct ScheduledTask {
  scheduled_time: Duration,
  task_id: usize,
  work: Work,
  handle: TimerHandle,
}

impl PartialEq for ScheduledTask {
  fn eq(&self, other: &Self) -> bool {
    self.scheduled_time == other.scheduled_time && self.task_id == other.task_id
  }
}

impl Eq for ScheduledTask {}

impl PartialOrd for ScheduledTask {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for ScheduledTask {
  fn cmp(&self, other: &Self) -> Ordering {
    // Min-heap: earlier times first, then FIFO by task_id
    other
      .scheduled_time
      .cmp(&self.scheduled_time)
      .then_with(|| other.task_id.cmp(&self.task_id))
  }
}

// ==================== TestScheduler ====================

/// A virtual time scheduler for deterministic testing.
///
/// Clones share the same clock and queue. Work scheduled through
/// [`Scheduler`] is due immediately; timers started through [`Timer`] are
/// due `delay` after the current virtual time. Tasks due at the same
/// instant run in submission order.
#[derive(Clone, Default)]
pub struct TestScheduler(Rc<RefCell<TestSchedulerState>>);

impl TestScheduler {
  pub fn new() -> Self { Self::default() }

  /// Current virtual time.
  pub fn now(&self) -> Duration { self.0.borrow().virtual_time }

  /// Number of queued tasks that have not been cancelled.
  pub fn pending(&self) -> usize {
    self
      .0
      .borrow()
      .task_queue
      .iter()
      .filter(|task| !task.handle.is_cancelled())
      .count()
  }

  /// Run every task that is due at the current virtual time, including
  /// tasks those tasks schedule for "now".
  pub fn run_ready(&self) { self.advance_by(Duration::ZERO) }

  /// Advance virtual time by `duration`, running due tasks in time order.
  pub fn advance_by(&self, duration: Duration) {
    let target = self.now() + duration;
    while let Some(task) = self.pop_due(Some(target)) {
      (task.work)();
    }
    self.0.borrow_mut().virtual_time = target;
  }

  /// Run everything queued, moving the clock forward as far as needed.
  pub fn flush(&self) {
    while let Some(task) = self.pop_due(None) {
      (task.work)();
    }
  }

  fn push(&self, delay: Duration, work: Work, handle: TimerHandle) {
    let mut state = self.0.borrow_mut();
    let task = ScheduledTask {
      scheduled_time: state.virtual_time + delay,
      task_id: state.next_task_id,
      work,
      handle,
    };
    state.next_task_id += 1;
    state.task_queue.push(task);
  }

  // The borrow is released before the caller runs the task, so tasks may
  // schedule more work.
  fn pop_due(&self, limit: Option<Duration>) -> Option<ScheduledTask> {
    let mut state = self.0.borrow_mut();
    loop {
      let due = state.task_queue.peek()?.scheduled_time;
      if limit.is_some_and(|limit| due > limit) {
        return None;
      }
      let task = state.task_queue.pop()?;
      if task.handle.is_cancelled() {
        continue;
      }
      if due > state.virtual_time {
        state.virtual_time = due;
      }
      return Some(task);
    }
  }
}

impl Scheduler for TestScheduler {
  fn schedule(&self, work: Work) { self.push(Duration::ZERO, work, TimerHandle::new()) }
}

impl Timer for TestScheduler {
  fn start(&self, delay: Duration, callback: Work) -> TimerHandle {
    let handle = TimerHandle::new();
    self.push(delay, callback, handle.clone());
    handle
  }
}
