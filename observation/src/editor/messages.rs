use common::model::station::Station;
use serde_json::Value;

use crate::validate::ErrorMap;

#[derive(Clone)]
pub enum Msg {
    /// Replace the whole document with a new snapshot produced by the
    /// editing surface. Pushes onto the undo history; does not validate.
    ReplaceDocument(Value),
    Undo,
    Redo,
    /// Install a fresh validation result. Always a wholesale replacement.
    SetErrorMap(ErrorMap),
    ClearErrors,
    /// Station directory snapshot arrived from the one-shot fetch.
    StationsLoaded(Vec<Station>),
}
