use serde::{Deserialize, Serialize};

/// Which location input the form presents for a submission context.
///
/// The mode is structural: it is derived once from the eligible-station
/// allow-list and is not a user-facing toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationInputMode {
    /// A read-only coordinate pair supplied by the map surface.
    FreePoint,
    /// A selector over the allow-listed station ids.
    StationRef,
}

/// The location actually carried by a submission. Exactly one variant is
/// present by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LocationSelection {
    FreePoint { lng: f64, lat: f64 },
    StationRef { id: i64 },
}
