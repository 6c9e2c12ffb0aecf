//! Hot, stateful observables.
//!
//! [`ReplaySubject`] is the one producer in this crate that enforces the
//! terminal-once contract of [`Observer`](crate::observer::Observer): it
//! records every event and replays the full history to late subscribers.

mod event;
mod replay_subject;

pub use event::{Event, Terminal};
pub use replay_subject::ReplaySubject;
