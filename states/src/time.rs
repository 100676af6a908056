use std::any::Any;

use chrono::{DateTime, TimeDelta, Utc};

use crate::{State, state_assign_impl};

/// Virtual clock shared by everything that reasons about elapsed time.
///
/// The UI writes the wall clock into it each frame; tests move it by hand.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { virt: now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }

    pub fn set(&mut self, now: DateTime<Utc>) {
        self.virt = now;
    }

    pub fn advance(&mut self, delta: TimeDelta) {
        self.virt += delta;
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}

impl State for Time {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_forward() {
        let mut time = Time::default();
        let start = time.now();

        time.advance(TimeDelta::milliseconds(250));

        assert_eq!(time.now() - start, TimeDelta::milliseconds(250));
    }
}
