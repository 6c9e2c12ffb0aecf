use crate::{
  observable::Observable,
  observer::Observer,
  rc::MutRc,
  scheduler::Scheduler,
};

#[derive(Clone)]
pub struct DeliverOnOp<S, SD> {
  pub(crate) source: S,
  pub(crate) scheduler: SD,
}

impl<S, SD> Observable for DeliverOnOp<S, SD>
where
  S: Observable,
  S::Item: 'static,
  S::Err: 'static,
  SD: Scheduler + 'static,
{
  type Item = S::Item;
  type Err = S::Err;

  fn actual_subscribe<O>(self, observer: O)
  where
    O: Observer<S::Item, S::Err> + 'static,
  {
    self.source.actual_subscribe(DeliverOnObserver {
      observer: MutRc::own(Some(observer)),
      scheduler: self.scheduler,
    })
  }
}

/// Turns each signal into a unit of work for the scheduler.
///
/// The downstream observer is released by the work item that delivers the
/// terminal signal.
pub struct DeliverOnObserver<O, SD> {
  observer: MutRc<Option<O>>,
  scheduler: SD,
}

impl<Item, Err, O, SD> Observer<Item, Err> for DeliverOnObserver<O, SD>
where
  Item: 'static,
  Err: 'static,
  O: Observer<Item, Err> + 'static,
  SD: Scheduler,
{
  fn next(&mut self, value: Item) {
    let mut observer = self.observer.clone();
    self
      .scheduler
      .schedule(Box::new(move || observer.next(value)));
  }

  fn error(&mut self, err: Err) {
    let observer = self.observer.clone();
    self.scheduler.schedule(Box::new(move || {
      if let Some(mut observer) = observer.take() {
        observer.error(err)
      }
    }));
  }

  fn complete(&mut self) {
    let observer = self.observer.clone();
    self.scheduler.schedule(Box::new(move || {
      if let Some(mut observer) = observer.take() {
        observer.complete()
      }
    }));
  }
}
