use std::any::{Any, type_name};

use log::error;

/// A value stored in [`StateCtx`](crate::StateCtx), keyed by its concrete type.
///
/// Implementors expose themselves as `Any` so the context can hand out typed
/// references, and accept whole-value replacements coming back from async
/// tasks through [`Updater`](crate::Updater).
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a boxed value of the same concrete type.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body: downcast and overwrite.
///
/// A value of the wrong type is dropped and logged, never applied.
pub fn state_assign_impl<T: Any>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => error!(
            "state_assign_impl: update for {} carried a different type",
            type_name::<T>()
        ),
    }
}
