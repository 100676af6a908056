use std::any::{Any, TypeId, type_name};

use flume::{Receiver, Sender};
use log::warn;
use tokio_util::sync::CancellationToken;

use crate::State;

/// A boxed replacement value tagged with the `TypeId` of the state it targets.
pub type StateUpdate = (TypeId, Box<dyn Any + Send>);

/// Channel between async tasks and the thread that owns the [`StateCtx`](crate::StateCtx).
#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<StateUpdate>,
    recv: Receiver<StateUpdate>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }

    /// An updater bound to `cancel`: once the token fires, `set` becomes a no-op.
    pub fn updater(&self, cancel: CancellationToken) -> Updater {
        Updater {
            send: self.send.clone(),
            cancel,
        }
    }

    /// Drain every update queued so far without blocking.
    pub fn drain(&self) -> impl Iterator<Item = StateUpdate> + '_ {
        self.recv.try_iter()
    }
}

/// Send side handed to async work.
///
/// Updates are applied on the next [`StateCtx::sync`](crate::StateCtx::sync).
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<StateUpdate>,
    cancel: CancellationToken,
}

impl Updater {
    /// Queue `value` as the new content of state `T`.
    ///
    /// Dropped silently when the owning task was cancelled, and dropped with a
    /// warning when the context is already gone.
    pub fn set<T: State + Send>(&self, value: T) {
        if self.cancel.is_cancelled() {
            return;
        }
        if self
            .send
            .send((TypeId::of::<T>(), Box::new(value)))
            .is_err()
        {
            warn!("Updater: context dropped before {} arrived", type_name::<T>());
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
