//! One-shot station directory loading.
//!
//! The directory fetch itself belongs to the caller (HTTP, cache, fixture);
//! this module only owns the race between that fetch and the rest of the
//! form: the form renders immediately, label lookups miss until the
//! snapshot arrives, and a failed fetch degrades to missing labels instead
//! of an error.

use common::model::station::Station;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::editor::Msg;

/// Spawns the caller-supplied fetch and forwards the result into the form's
/// message channel as [`Msg::StationsLoaded`]. Called once per form mount;
/// never re-triggered, so no cancellation handling is needed.
pub fn load_stations<Fut>(fetch: Fut, tx: mpsc::Sender<Msg>) -> JoinHandle<()>
where
    Fut: Future<Output = Result<Vec<Station>, String>> + Send + 'static,
{
    tokio::spawn(async move {
        match fetch.await {
            Ok(stations) => {
                if tx.send(Msg::StationsLoaded(stations)).await.is_err() {
                    log::debug!("station list arrived after the form went away");
                }
            }
            Err(err) => {
                // Labels stay absent; the selector still works off ids.
                log::warn!("station directory unavailable: {err}");
            }
        }
    })
}
