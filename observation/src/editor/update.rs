//! Update function for the observation form state.
//!
//! Single `update` function in an Elm-style loop: it receives the current
//! [`ObservationForm`], applies one [`Msg`], and returns a `bool` telling the
//! caller whether dependent display (field widgets, error annotations,
//! station labels) needs re-rendering.
//!
//! Key behaviors
//! - Document edits arrive as complete replacement snapshots; each one is
//!   pushed onto the history, truncating any redo tail.
//! - Undo/redo walk the snapshot history without rebuilding documents.
//! - Error state is replaced, never merged: one validation pass is always
//!   authoritative for the snapshot it ran against.

use super::messages::Msg;
use super::state::ObservationForm;

/// Central update function for the form.
///
/// Contract
/// - Mutates `form` based on `msg`.
/// - Performs no validation and no I/O.
/// - Returns `true` to re-render dependent display, `false` when the message
///   changed nothing.
pub fn update(form: &mut ObservationForm, msg: Msg) -> bool {
    match msg {
        Msg::ReplaceDocument(next) => {
            if form.document == next {
                return false;
            }
            form.document = next.clone();
            form.history.truncate(form.history_index + 1);
            form.history.push(next);
            form.history_index = form.history.len() - 1;
            true
        }
        Msg::Undo => {
            if form.history_index == 0 {
                return false;
            }
            form.history_index -= 1;
            form.document = form.history[form.history_index].clone();
            true
        }
        Msg::Redo => {
            if form.history_index + 1 >= form.history.len() {
                return false;
            }
            form.history_index += 1;
            form.document = form.history[form.history_index].clone();
            true
        }
        Msg::SetErrorMap(map) => {
            form.error_map = map;
            true
        }
        Msg::ClearErrors => {
            if form.error_map.is_empty() {
                return false;
            }
            form.error_map.clear();
            true
        }
        Msg::StationsLoaded(stations) => {
            log::debug!("station directory loaded: {} entr(ies)", stations.len());
            form.stations = stations;
            true
        }
    }
}
