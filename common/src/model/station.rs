use serde::{Deserialize, Serialize};

/// A fixed monitoring station, as served by the station directory.
///
/// The `label` is display-only: which station ids a contributor may pick
/// is governed by the per-form allow-list, never by this directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub label: String,
}
