use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;

use log::{debug, warn};

use crate::{Error, State, StateRuntime, TaskHandle, TaskRegistry, Updater};

/// Owner of every piece of application state, keyed by concrete type.
///
/// Reads and writes happen on the thread that owns the context. Async work is
/// started through [`StateCtx::spawn`] and reports back through an
/// [`Updater`]; the queued values land on the next [`StateCtx::sync`].
///
/// Dropping the context cancels every task it spawned.
pub struct StateCtx {
    runtime: StateRuntime,
    states: BTreeMap<TypeId, Box<dyn State>>,
    tasks: TaskRegistry,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("tasks", &self.tasks)
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self {
            runtime: StateRuntime::new(),
            states: BTreeMap::new(),
            tasks: TaskRegistry::new(),
        }
    }

    /// Register `state`, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn has_state<T: State>(&self) -> bool {
        self.states.contains_key(&TypeId::of::<T>())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was never registered with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|_| panic!("State {} is not registered", type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never registered with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>()
            .unwrap_or_else(|_| panic!("State {} is not registered", type_name::<T>()))
    }

    /// Mutate state `T` in place.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Spawn async work of kind `K` on the current tokio runtime.
    ///
    /// The closure receives an [`Updater`] bound to the task's cancellation
    /// token. A previous task of the same kind is cancelled first.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn spawn<K, F, Fut>(&mut self, task: F) -> TaskHandle
    where
        K: 'static,
        F: FnOnce(Updater) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = self.tasks.start(TypeId::of::<K>());
        let token = handle.cancellation_token();
        let work = task(self.runtime.updater(token.clone()));
        let kind = type_name::<K>();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => debug!("StateCtx: task {kind} cancelled"),
                _ = work => {}
            }
        });

        handle
    }

    /// Cancel the running task of kind `K`. Returns whether one was registered.
    pub fn cancel<K: 'static>(&mut self) -> bool {
        self.tasks.cancel(TypeId::of::<K>())
    }

    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    /// Apply every update queued by spawned tasks. Returns how many were applied.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        for (id, value) in self.runtime.drain() {
            match self.states.get_mut(&id) {
                Some(state) => {
                    state.assign_box(value);
                    applied += 1;
                }
                None => warn!("StateCtx: dropping update for unregistered state {id:?}"),
            }
        }
        applied
    }
}

impl Drop for StateCtx {
    fn drop(&mut self) {
        self.tasks.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::time::Duration;

    use super::*;
    use crate::state_assign_impl;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Greeting(String);

    impl State for Greeting {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            state_assign_impl(self, new_self);
        }
    }

    #[test]
    fn add_and_read_state() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Greeting("hi".into()));

        assert_eq!(ctx.state::<Greeting>().0, "hi");
        ctx.update::<Greeting>(|g| g.0.push('!'));
        assert_eq!(ctx.state::<Greeting>().0, "hi!");
    }

    #[test]
    fn missing_state_is_an_error() {
        let ctx = StateCtx::new();
        assert!(matches!(
            ctx.try_state::<Greeting>(),
            Err(Error::StateNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn spawned_update_lands_on_sync() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Greeting::default());

        ctx.spawn::<Greeting, _, _>(|updater| async move {
            updater.set(Greeting("from task".into()));
        });

        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(ctx.state::<Greeting>().0, "", "not applied before sync");
        assert_eq!(ctx.sync(), 1);
        assert_eq!(ctx.state::<Greeting>().0, "from task");
    }

    #[tokio::test]
    async fn cancelled_task_never_updates() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Greeting::default());

        ctx.spawn::<Greeting, _, _>(|updater| async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            updater.set(Greeting("late".into()));
        });
        assert!(ctx.cancel::<Greeting>());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(ctx.sync(), 0);
        assert_eq!(ctx.state::<Greeting>().0, "");
    }

    #[tokio::test]
    async fn dropping_ctx_cancels_tasks() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Greeting::default());

        let handle = ctx.spawn::<Greeting, _, _>(|updater| async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            updater.set(Greeting("late".into()));
        });
        drop(ctx);

        assert!(handle.is_cancelled());
    }

    #[tokio::test]
    async fn respawn_supersedes_previous_task() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Greeting::default());

        let first = ctx.spawn::<Greeting, _, _>(|updater| async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            updater.set(Greeting("first".into()));
        });
        ctx.spawn::<Greeting, _, _>(|updater| async move {
            updater.set(Greeting("second".into()));
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        ctx.sync();

        assert!(first.is_cancelled());
        assert_eq!(ctx.state::<Greeting>().0, "second");
    }
}
