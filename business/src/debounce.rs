//! Keystroke debouncing for the search box.

use std::any::Any;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use podium_states::{State, state_assign_impl};

/// Local draft of a text input plus the deadline of its pending propagation.
///
/// The draft follows every keystroke immediately. [`DebouncedInput::poll`]
/// releases it once `quiet` has passed since the last keystroke; a keystroke
/// before that pushes the deadline out again, so only the value typed last
/// before a pause is ever released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebouncedInput {
    quiet: TimeDelta,
    draft: String,
    /// Last value released or received from outside.
    external: String,
    deadline: Option<DateTime<Utc>>,
}

impl Default for DebouncedInput {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_QUIET_PERIOD)
    }
}

impl DebouncedInput {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet: TimeDelta::from_std(quiet).unwrap_or(TimeDelta::MAX),
            draft: String::new(),
            external: String::new(),
            deadline: None,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn quiet_period(&self) -> TimeDelta {
        self.quiet
    }

    /// Record a keystroke at `now` and restart the quiet period.
    pub fn keystroke(&mut self, value: impl Into<String>, now: DateTime<Utc>) {
        self.draft = value.into();
        self.deadline = Some(
            now.checked_add_signed(self.quiet)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        );
    }

    /// Take the draft if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<String> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        self.external.clone_from(&self.draft);
        Some(self.draft.clone())
    }

    /// Adopt an externally supplied value if it differs from the last one seen.
    ///
    /// The draft is replaced at once and any pending propagation dropped.
    /// Returns whether the value was new.
    pub fn sync_external(&mut self, value: &str) -> bool {
        if self.external == value {
            return false;
        }
        self.external = value.to_string();
        self.draft = value.to_string();
        self.deadline = None;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before a pending draft is released, if any.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        let left = self.deadline? - now;
        Some(left.to_std().unwrap_or(Duration::ZERO))
    }
}

impl State for DebouncedInput {
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

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    fn input() -> DebouncedInput {
        DebouncedInput::new(Duration::from_millis(500))
    }

    #[test]
    fn only_last_keystroke_after_pause_is_released() {
        let mut input = input();
        input.keystroke("n", at(0));
        assert_eq!(input.poll(at(100)), None);
        input.keystroke("no", at(100));
        assert_eq!(input.poll(at(200)), None);
        input.keystroke("nor", at(200));

        assert_eq!(input.draft(), "nor");
        assert_eq!(input.poll(at(699)), None);
        assert_eq!(input.poll(at(700)), Some("nor".to_string()));
        assert_eq!(input.poll(at(5_000)), None, "released once");
    }

    #[test]
    fn draft_is_updated_synchronously() {
        let mut input = input();
        input.keystroke("k", at(0));
        assert_eq!(input.draft(), "k");
        assert!(input.is_pending());
    }

    #[test]
    fn sync_external_resets_pending_draft() {
        let mut input = input();
        input.keystroke("typed", at(0));

        assert!(input.sync_external("reset"));
        assert_eq!(input.draft(), "reset");
        assert!(!input.is_pending());
        assert_eq!(input.poll(at(1_000)), None);
    }

    #[test]
    fn released_value_is_not_treated_as_external_change() {
        let mut input = input();
        input.keystroke("kenya", at(0));
        assert_eq!(input.poll(at(500)).as_deref(), Some("kenya"));

        assert!(!input.sync_external("kenya"));
        assert_eq!(input.draft(), "kenya");
    }

    #[test]
    fn remaining_counts_down() {
        let mut input = input();
        assert_eq!(input.remaining(at(0)), None);

        input.keystroke("a", at(0));
        assert_eq!(input.remaining(at(200)), Some(Duration::from_millis(300)));
        assert_eq!(input.remaining(at(900)), Some(Duration::ZERO));
    }
}
