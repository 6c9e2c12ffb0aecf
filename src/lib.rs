//! # rxlite: a small push-based reactive stream core
//!
//! Cold observables built from one on-subscribe action, a handful of
//! combinators, an executor-agnostic scheduling contract and a replay
//! subject that enforces the terminal-once protocol.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxlite::prelude::*;
//!
//! observable::from_iter::<_, ()>(1..4)
//!   .map(|v| v * 10)
//!   .bind(|v| observable::from_iter(vec![v, v + 1]))
//!   .subscribe(|v| println!("Value: {}", v));
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A cold producer, activated once per subscription |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`Scheduler`] | Runs deferred units of work in submission order |
//! | [`ReplaySubject`] | Hot producer that replays its whole history |
//! | [`Maybe`] | Value-or-absent container |
//!
//! ## Feature Flags
//!
//! - **`futures-scheduler`** (default): `Scheduler` for `futures`'
//!   `LocalSpawner`
//! - **`timer`** (default): `Timer` for `LocalSpawner`, backed by
//!   `futures-time`
//! - **`tokio-scheduler`**: `Scheduler` for tokio's `LocalSet`
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Scheduler`]: scheduler::Scheduler
//! [`ReplaySubject`]: subject::ReplaySubject
//! [`Maybe`]: maybe::Maybe

pub mod error;
pub mod maybe;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub mod scheduler;
pub mod subject;
