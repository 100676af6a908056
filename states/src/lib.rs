//! Typed state container used by the podium crates.
//!
//! - [`StateCtx`] owns all state, keyed by type.
//! - [`Updater`] carries values back from async tasks.
//! - [`TaskRegistry`] tracks spawned tasks so they can be cancelled.
//! - [`Time`] is the virtual clock.

mod ctx;
mod error;
mod runtime;
mod state;
mod task;
mod time;

pub use ctx::StateCtx;
pub use error::Error;
pub use runtime::{StateRuntime, StateUpdate, Updater};
pub use state::{State, state_assign_impl};
pub use task::{TaskHandle, TaskId, TaskRegistry};
pub use time::Time;
