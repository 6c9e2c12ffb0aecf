//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

// Observable core and factories
pub use crate::observable;
pub use crate::observable::{
  create, empty, from_iter, of, throw_err, AnyObservable, Observable, ObservableExt,
};
// Observer
pub use crate::observer::{
  make_observer, make_observer_all, make_observer_err, AnyObserver, Observer,
};
// Optional container
pub use crate::maybe::{find_maybe, just, nothing, Maybe, MaybeExt, Payload};
// Scheduler
pub use crate::scheduler::{
  schedule_on, system_clock, Duration, ScheduleFn, Scheduler, TestScheduler, Timer, TimerHandle,
  Work,
};
#[cfg(target_arch = "wasm32")]
pub use crate::scheduler::WasmScheduler;
// Subject
pub use crate::subject::{Event, ReplaySubject, Terminal};
pub use crate::{error::SubjectError, ops::throttle_progress::ProgressThrottle};
