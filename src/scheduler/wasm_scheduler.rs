//! Browser executor adapter.

use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::TimeoutFuture;

use super::{Duration, Scheduler, Timer, TimerHandle, Work};

/// Runs work on the browser's microtask queue and timers on `setTimeout`.
///
/// Cancelling a timer aborts its task, which clears the pending timeout.
#[derive(Clone, Copy, Default, Debug)]
pub struct WasmScheduler;

impl Scheduler for WasmScheduler {
  fn schedule(&self, work: Work) { wasm_bindgen_futures::spawn_local(async move { work() }) }
}

impl Timer for WasmScheduler {
  fn start(&self, delay: Duration, callback: Work) -> TimerHandle {
    let handle = TimerHandle::new();
    let callback = handle.guard(callback);
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    let (abort, registration) = AbortHandle::new_pair();
    handle.on_cancel(Box::new(move || abort.abort()));
    let fire = Abortable::new(
      async move {
        TimeoutFuture::new(millis).await;
        callback();
      },
      registration,
    );
    wasm_bindgen_futures::spawn_local(async move {
      let _ = fire.await;
    });
    handle
  }
}
