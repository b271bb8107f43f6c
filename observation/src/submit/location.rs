use common::model::location::LocationInputMode;

/// Picks the location input for a submission context.
///
/// One or more eligible station ids means the form must present a station
/// selector over exactly that allow-list; otherwise it presents the
/// read-only coordinate pair supplied by the map. Structural decision, made
/// once per context.
pub fn resolve_location_mode(eligible_station_ids: &[i64]) -> LocationInputMode {
    if eligible_station_ids.is_empty() {
        LocationInputMode::FreePoint
    } else {
        LocationInputMode::StationRef
    }
}
