//! `futures` executor adapters.
//!
//! Work is spawned onto a [`LocalSpawner`]; it runs when the owning
//! `LocalPool` is driven. `LocalPool` polls newly spawned futures in spawn
//! order, which gives the FIFO guarantee `deliver_on` needs.

#[cfg(all(feature = "timer", not(target_arch = "wasm32")))]
use futures::future::{AbortHandle, Abortable};
use futures::{executor::LocalSpawner, task::LocalSpawnExt};

#[cfg(all(feature = "timer", not(target_arch = "wasm32")))]
use super::{Duration, Timer, TimerHandle};
use super::{Scheduler, Work};

impl Scheduler for LocalSpawner {
  fn schedule(&self, work: Work) {
    if let Err(err) = self.spawn_local(async move { work() }) {
      tracing::warn!(%err, "local pool is shut down, work dropped");
    }
  }
}

#[cfg(all(feature = "timer", not(target_arch = "wasm32")))]
impl Timer for LocalSpawner {
  fn start(&self, delay: Duration, callback: Work) -> TimerHandle {
    let handle = TimerHandle::new();
    let callback = handle.guard(callback);
    let (abort, registration) = AbortHandle::new_pair();
    handle.on_cancel(Box::new(move || abort.abort()));
    let fire = Abortable::new(
      async move {
        futures_time::task::sleep(delay.into()).await;
        callback();
      },
      registration,
    );
    if let Err(err) = self.spawn_local(async move {
      let _ = fire.await;
    }) {
      tracing::warn!(%err, "local pool is shut down, timer dropped");
    }
    handle
  }
}
