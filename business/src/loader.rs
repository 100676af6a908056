//! One-shot fetch of the athlete dataset.
//!
//! `RecordsFetch` is a state-shaped cache that only ever changes through
//! [`load_records`] (which spawns the request) and [`apply_loaded`] (which
//! hands the result to the [`TableController`]). The network task reports
//! back through an [`Updater`](podium_states::Updater), so its result lands
//! on the next `StateCtx::sync`.

use std::any::Any;

use log::{debug, error, info};
use podium_states::{State, StateCtx, state_assign_impl};

use crate::config::TableConfig;
use crate::controller::TableController;
use crate::error::LoadError;
use crate::http::Client;
use crate::record::{Record, project_records};

/// GET `url` and project the body onto [`Record`]s.
pub async fn fetch_records(url: &str) -> Result<Vec<Record>, LoadError> {
    let response = Client::get(url).send().await?;
    if !response.is_success() {
        return Err(LoadError::Transport {
            status: response.status,
        });
    }
    project_records(&response.body)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchStatus {
    /// No fetch attempted yet.
    #[default]
    Idle,
    Loading,
    /// Records arrived and wait for [`apply_loaded`].
    Ready(Vec<Record>),
    /// Records were moved into the row store.
    Applied { rows: usize },
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordsFetch {
    pub status: FetchStatus,
}

impl RecordsFetch {
    pub fn is_idle(&self) -> bool {
        matches!(self.status, FetchStatus::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    pub fn is_applied(&self) -> bool {
        matches!(self.status, FetchStatus::Applied { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        if let FetchStatus::Failed(ref msg) = self.status {
            Some(msg)
        } else {
            None
        }
    }

    /// Move the records out, leaving `Applied`. Returns `None` unless `Ready`.
    pub fn take_ready(&mut self) -> Option<Vec<Record>> {
        match std::mem::take(&mut self.status) {
            FetchStatus::Ready(records) => {
                self.status = FetchStatus::Applied {
                    rows: records.len(),
                };
                Some(records)
            }
            other => {
                self.status = other;
                None
            }
        }
    }
}

impl State for RecordsFetch {
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

/// Start the fetch. Only the first call on a context does anything.
///
/// Needs [`TableConfig`] and [`RecordsFetch`] registered, and a tokio runtime.
pub fn load_records(ctx: &mut StateCtx) {
    if !ctx.state::<RecordsFetch>().is_idle() {
        debug!("load_records: already started, ignoring");
        return;
    }

    let url = ctx.state::<TableConfig>().endpoint;
    ctx.state_mut::<RecordsFetch>().status = FetchStatus::Loading;
    info!("load_records: fetching {url}");

    ctx.spawn::<RecordsFetch, _, _>(move |updater| async move {
        let status = match fetch_records(url.as_str()).await {
            Ok(records) => {
                info!("load_records: fetched {} records", records.len());
                FetchStatus::Ready(records)
            }
            Err(err) => {
                error!("load_records: {err}");
                FetchStatus::Failed(err.to_string())
            }
        };
        updater.set(RecordsFetch { status });
    });
}

/// Abandon an in-flight fetch. Its result, if it still arrives, is dropped.
pub fn cancel_load(ctx: &mut StateCtx) -> bool {
    let cancelled = ctx.cancel::<RecordsFetch>();
    let fetch = ctx.state_mut::<RecordsFetch>();
    if cancelled && fetch.is_loading() {
        fetch.status = FetchStatus::Failed("Load cancelled".to_string());
    }
    cancelled
}

/// Move fetched records into the controller. Returns whether anything moved.
///
/// Call after `StateCtx::sync`.
pub fn apply_loaded(ctx: &mut StateCtx) -> bool {
    let Some(records) = ctx.state_mut::<RecordsFetch>().take_ready() else {
        return false;
    };
    ctx.state_mut::<TableController>().replace_rows(records);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_ready_moves_records_once() {
        let mut fetch = RecordsFetch {
            status: FetchStatus::Ready(vec![Record::new("A", 2000, "X", 20)]),
        };

        assert_eq!(fetch.take_ready().map(|r| r.len()), Some(1));
        assert_eq!(fetch.status, FetchStatus::Applied { rows: 1 });
        assert!(fetch.is_applied());
        assert_eq!(fetch.take_ready(), None);
    }

    #[test]
    fn take_ready_ignores_other_states() {
        let mut fetch = RecordsFetch {
            status: FetchStatus::Failed("API returned status: 500".into()),
        };
        assert_eq!(fetch.take_ready(), None);
        assert_eq!(fetch.error_message(), Some("API returned status: 500"));

        let mut fetch = RecordsFetch::default();
        assert_eq!(fetch.take_ready(), None);
        assert!(fetch.is_idle());
    }

    #[test]
    fn apply_loaded_without_result_is_noop() {
        let mut ctx = StateCtx::new();
        ctx.add_state(RecordsFetch::default());
        ctx.add_state(TableController::default());

        assert!(!apply_loaded(&mut ctx));
        assert!(ctx.state::<TableController>().records().is_empty());
    }

    #[test]
    fn apply_loaded_replaces_rows() {
        let mut ctx = StateCtx::new();
        ctx.add_state(RecordsFetch {
            status: FetchStatus::Ready(vec![
                Record::new("A", 2000, "X", 20),
                Record::new("B", 2004, "Y", 21),
            ]),
        });
        ctx.add_state(TableController::default());

        assert!(apply_loaded(&mut ctx));
        assert_eq!(ctx.state::<TableController>().records().len(), 2);
        assert!(ctx.state::<RecordsFetch>().is_applied());
    }
}
