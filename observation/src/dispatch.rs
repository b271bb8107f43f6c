//! Tracks outbound observation deliveries.
//!
//! Submissions are fire-and-forget from the engine's point of view: the
//! submit path never awaits delivery, never retries, and never sees a
//! transport failure. What this module adds is bookkeeping: every hand-off
//! gets a job id and a status the hosting application can poll or log.
//!
//! The pieces:
//! - `DispatchState`: clonable shared state, a job-id map behind an
//!   `Arc<RwLock>` plus the sender side of the update channel.
//! - `DispatchUpdate`: message from a delivery task back to the updater.
//! - `start_dispatch_updater`: long-running task draining the channel into
//!   the shared map.

use common::jobs::DispatchStatus;
use common::model::observation::ObservationRecord;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

use crate::editor::ObservationForm;
use crate::submit::{self, SubmitInput};
use crate::validate::ErrorMap;

/// Shared, clonable container for the status of all deliveries.
#[derive(Clone)]
pub struct DispatchState {
    /// Job id to current status. Single source of truth for delivery state.
    pub jobs: Arc<RwLock<HashMap<String, DispatchStatus>>>,

    /// Sender used by delivery tasks to report terminal status without
    /// needing write access to the map.
    pub tx: mpsc::Sender<DispatchUpdate>,
}

/// Status report for one delivery job.
#[derive(Debug)]
pub struct DispatchUpdate {
    pub(crate) job_id: String,
    pub(crate) status: DispatchStatus,
}

impl DispatchState {
    /// Creates the state and the receiver to hand to
    /// [`start_dispatch_updater`].
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<DispatchUpdate>) {
        let (tx, rx) = mpsc::channel(buffer);
        (
            Self {
                jobs: Arc::new(RwLock::new(HashMap::new())),
                tx,
            },
            rx,
        )
    }
}

/// Drains status updates into the shared map. Spawn once, alongside the
/// application's other long-running tasks.
pub async fn start_dispatch_updater(state: DispatchState, mut rx: mpsc::Receiver<DispatchUpdate>) {
    while let Some(update) = rx.recv().await {
        let mut jobs = state.jobs.write().await;
        jobs.insert(update.job_id, update.status);
    }
}

/// Hands a composed record to the delivery collaborator.
///
/// Registers the job as `Pending`, spawns the caller-supplied send future,
/// and returns the job id immediately. The terminal `Sent`/`Failed` status
/// flows through the update channel; callers wanting richer guarantees plug
/// them into `send` itself.
pub async fn send_observation<F, Fut>(
    state: &DispatchState,
    record: ObservationRecord,
    target_id: String,
    send: F,
) -> String
where
    F: FnOnce(ObservationRecord, String) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), String>> + Send + 'static,
{
    let job_id = uuid::Uuid::new_v4().to_string();
    state
        .jobs
        .write()
        .await
        .insert(job_id.clone(), DispatchStatus::Pending);

    let tx = state.tx.clone();
    let id = job_id.clone();
    tokio::spawn(async move {
        let status = match send(record, target_id).await {
            Ok(()) => {
                log::info!("observation {id} delivered");
                DispatchStatus::Sent
            }
            Err(err) => {
                log::warn!("observation {id} delivery failed: {err}");
                DispatchStatus::Failed(err)
            }
        };
        let _ = tx.send(DispatchUpdate { job_id: id, status }).await;
    });

    job_id
}

/// Full submit-intent path: assemble the record from the form's current
/// state and, only if that succeeds, hand it off for delivery. Exactly one
/// of the two things happens: the error map lands in the form state, or one
/// delivery job starts. Returns the job id on the success path.
pub async fn submit_observation<F, Fut>(
    form: &mut ObservationForm,
    input: &SubmitInput,
    target_id: &str,
    state: &DispatchState,
    send: F,
) -> Result<String, ErrorMap>
where
    F: FnOnce(ObservationRecord, String) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), String>> + Send + 'static,
{
    let record = submit::submit(form, input)?;
    Ok(send_observation(state, record, target_id.to_string(), send).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;
    use std::time::Duration;

    fn empty_record() -> ObservationRecord {
        ObservationRecord {
            data: Map::new(),
            attachments: Vec::new(),
        }
    }

    async fn wait_for_terminal(state: &DispatchState, job_id: &str) -> DispatchStatus {
        for _ in 0..100 {
            if let Some(status) = state.jobs.read().await.get(job_id).cloned() {
                if status != DispatchStatus::Pending {
                    return status;
                }
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("delivery never reached a terminal status");
    }

    #[tokio::test]
    async fn successful_delivery_is_marked_sent() {
        let (state, rx) = DispatchState::new(8);
        tokio::spawn(start_dispatch_updater(state.clone(), rx));

        let job_id = send_observation(&state, empty_record(), "quality".to_string(), |_, _| {
            async { Ok(()) }
        })
        .await;

        assert_eq!(
            wait_for_terminal(&state, &job_id).await,
            DispatchStatus::Sent
        );
    }

    #[tokio::test]
    async fn invalid_document_never_starts_a_delivery() {
        use crate::editor::ObservationFormProps;
        use common::model::location::LocationSelection;
        use serde_json::json;

        let (state, rx) = DispatchState::new(8);
        tokio::spawn(start_dispatch_updater(state.clone(), rx));

        let mut form = ObservationForm::new(ObservationFormProps {
            schema: serde_json::from_value(json!({
                "type": "object",
                "properties": {"name": {"type": "string", "required": true}}
            }))
            .expect("schema json"),
            initial_data: None,
            eligible_stations: Vec::new(),
        });
        let input = SubmitInput {
            location: LocationSelection::FreePoint {
                lng: 4.83,
                lat: 45.76,
            },
            date: "2024-05-01".to_string(),
            time: "14:30".to_string(),
            attachments: Default::default(),
        };

        let result = submit_observation(&mut form, &input, "quality", &state, |_, _| async {
            panic!("delivery must not run for an invalid document")
        })
        .await;

        assert!(result.is_err());
        assert!(state.jobs.read().await.is_empty());
    }

    #[tokio::test]
    async fn failed_delivery_is_recorded_not_raised() {
        let (state, rx) = DispatchState::new(8);
        tokio::spawn(start_dispatch_updater(state.clone(), rx));

        let job_id = send_observation(&state, empty_record(), "quality".to_string(), |_, _| {
            async { Err("connection reset".to_string()) }
        })
        .await;

        assert_eq!(
            wait_for_terminal(&state, &job_id).await,
            DispatchStatus::Failed("connection reset".to_string())
        );
    }
}
