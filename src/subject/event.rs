use std::fmt;

use crate::observer::Observer;

/// One recorded signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event<Item, Err> {
  Next(Item),
  Error(Err),
  Completed,
}

impl<Item, Err> Event<Item, Err> {
  /// `Error` and `Completed` end a signal sequence.
  #[inline]
  pub fn is_terminal(&self) -> bool { !matches!(self, Event::Next(_)) }

  /// Push this event into `observer`.
  pub fn deliver<O>(self, observer: &mut O)
  where
    O: Observer<Item, Err> + ?Sized,
  {
    match self {
      Event::Next(value) => observer.next(value),
      Event::Error(err) => observer.error(err),
      Event::Completed => observer.complete(),
    }
  }
}

/// Lifecycle of a subject. No transition leaves `Errored` or `Completed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Terminal {
  #[default]
  Open,
  Errored,
  Completed,
}

impl Terminal {
  #[inline]
  pub fn is_open(self) -> bool { self == Terminal::Open }

  pub(crate) fn after<Item, Err>(event: &Event<Item, Err>) -> Self {
    match event {
      Event::Next(_) => Terminal::Open,
      Event::Error(_) => Terminal::Errored,
      Event::Completed => Terminal::Completed,
    }
  }
}

impl fmt::Display for Terminal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Terminal::Open => "open",
      Terminal::Errored => "errored",
      Terminal::Completed => "completed",
    };
    f.write_str(name)
  }
}
