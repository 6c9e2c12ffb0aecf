//! Crate error type.
//!
//! Stream errors are the observable's own `Err` type and never pass
//! through here. [`SubjectError`] only reports misuse of a subject through
//! its non-panicking `try_*` methods.

use thiserror::Error;

use crate::subject::Terminal;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubjectError {
  /// An event was sent after the subject had already errored or completed.
  #[error("replay subject already {0}")]
  Terminated(Terminal),
}
