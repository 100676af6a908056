use std::any::Any;
use std::time::Duration;

use podium_states::{State, state_assign_impl};
use ustr::Ustr;

use crate::edit::CommitTrigger;

/// Source of the athlete dataset in production builds.
pub const DEFAULT_ENDPOINT: &str = "https://www.ag-grid.com/example-assets/olympic-winners.json";

/// Quiet period before a search draft reaches the filter.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

pub const DEFAULT_PAGE_SIZES: [usize; 4] = [10, 20, 30, 50];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub endpoint: Ustr,
    pub quiet_period: Duration,
    /// Page sizes the user may pick from; the first is used if `initial_page_size` is not among them.
    pub page_sizes: Vec<usize>,
    pub initial_page_size: usize,
    pub commit_trigger: CommitTrigger,
}

impl TableConfig {
    pub fn new(endpoint: impl AsRef<str>) -> Self {
        Self {
            endpoint: Ustr::from(endpoint.as_ref()),
            ..Self::default()
        }
    }

    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    pub fn with_commit_trigger(mut self, trigger: CommitTrigger) -> Self {
        self.commit_trigger = trigger;
        self
    }

    pub fn with_page_sizes(mut self, page_sizes: Vec<usize>, initial: usize) -> Self {
        self.page_sizes = page_sizes;
        self.initial_page_size = initial;
        self
    }

    /// `initial_page_size` if allowed, else the first allowed size, else 10.
    pub fn page_size(&self) -> usize {
        if self.page_sizes.contains(&self.initial_page_size) {
            self.initial_page_size
        } else {
            self.page_sizes
                .first()
                .copied()
                .unwrap_or(DEFAULT_PAGE_SIZES[0])
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            endpoint: Ustr::from(DEFAULT_ENDPOINT),
            quiet_period: DEFAULT_QUIET_PERIOD,
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            initial_page_size: DEFAULT_PAGE_SIZES[0],
            commit_trigger: CommitTrigger::default(),
        }
    }
}

impl State for TableConfig {
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
