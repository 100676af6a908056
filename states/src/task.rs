//! Task bookkeeping for async work started from a [`StateCtx`](crate::StateCtx).
//!
//! Every spawned task gets a [`TaskId`] (the kind it belongs to plus a generation
//! counter) and a [`CancellationToken`]. Spawning a new task of the same kind
//! cancels the previous one, and [`TaskRegistry::cancel_all`] stops everything
//! when the owning context goes away.

use std::any::TypeId;
use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

/// Identifies one spawned task: which kind of work, and which run of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    kind: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(kind: TypeId, generation: u64) -> Self {
        Self { kind, generation }
    }

    pub fn kind(&self) -> TypeId {
        self.kind
    }

    /// Higher means spawned later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A task id paired with the token that stops it.
///
/// Cancellation is cooperative: the task observes it at its next await on
/// `cancelled()`, and any [`Updater`](crate::Updater) bound to the token stops
/// delivering.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// Latest task handle per kind.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    next_generation: u64,
    active: BTreeMap<TypeId, TaskHandle>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh task of `kind`, cancelling the one it supersedes.
    pub fn start(&mut self, kind: TypeId) -> TaskHandle {
        self.next_generation += 1;
        let handle = TaskHandle::new(
            TaskId::new(kind, self.next_generation),
            CancellationToken::new(),
        );
        if let Some(previous) = self.active.insert(kind, handle.clone()) {
            previous.cancel();
        }
        handle
    }

    pub fn get(&self, kind: TypeId) -> Option<&TaskHandle> {
        self.active.get(&kind)
    }

    /// Cancel the task of `kind`, if one is registered. Returns whether one was.
    pub fn cancel(&mut self, kind: TypeId) -> bool {
        match self.active.remove(&kind) {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in std::mem::take(&mut self.active) {
            handle.cancel();
        }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
