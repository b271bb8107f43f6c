//! Submission assembly: turns the form's current state plus the native
//! inputs into one [`ObservationRecord`], or a stored error map.
//!
//! The assembly order is fixed: validate the schema document, compose the
//! timestamp, then merge location < `contributed_at` < document fields into
//! a flat object (later wins on a key collision, so a schema that declares
//! a structural name takes precedence on purpose), and finally attach the
//! filtered upload slots.

pub mod attachments;
pub mod location;
pub mod timestamp;

use common::model::attachment::AttachmentSlot;
use common::model::location::LocationSelection;
use common::model::observation::ObservationRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::editor::helpers::compute_md5;
use crate::editor::ObservationForm;
use crate::validate::{DataValidator, ErrorMap};

/// Everything the surrounding UI layer read from its native controls at
/// submit time. Constructed by the caller; the engine never touches a
/// widget or the DOM. Serializable so a bridge (wasm, IPC) can pass it as
/// plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitInput {
    pub location: LocationSelection,
    /// Date control value, `YYYY-MM-DD`.
    pub date: String,
    /// Time control value, `HH:MM` or `HH:MM:SS`.
    pub time: String,
    pub attachments: [AttachmentSlot; 5],
}

/// Runs one submit attempt against the form's current document snapshot.
///
/// On a schema-invalid document (or a malformed date/time pair) the error
/// map becomes the form's current error state and is returned; no record
/// exists and nothing may be sent. On success the error state is cleared,
/// the document counts as synced, and the composed record is returned
/// exactly once for hand-off to the dispatcher.
pub fn submit(
    form: &mut ObservationForm,
    input: &SubmitInput,
) -> Result<ObservationRecord, ErrorMap> {
    let validation = DataValidator::new(form.schema()).validate(form.document());
    if !validation.is_valid {
        log::debug!(
            "submit blocked: {} field error(s)",
            validation.error_map.len()
        );
        return Err(store_errors(form, validation.error_map));
    }

    let contributed_at = match timestamp::compose_contributed_at(&input.date, &input.time) {
        Ok(instant) => instant,
        Err(err) => {
            let mut map = ErrorMap::new();
            map.insert("contributed_at".to_string(), err.to_string());
            return Err(store_errors(form, map));
        }
    };

    let mut data = Map::new();
    match input.location {
        LocationSelection::FreePoint { lng, lat } => {
            data.insert("lat".to_string(), Value::from(lat));
            data.insert("lng".to_string(), Value::from(lng));
        }
        LocationSelection::StationRef { id } => {
            data.insert("station".to_string(), Value::from(id));
        }
    }
    data.insert("contributed_at".to_string(), Value::String(contributed_at));
    if let Value::Object(fields) = form.document() {
        for (name, value) in fields {
            data.insert(name.clone(), value.clone());
        }
    }

    let record = ObservationRecord {
        data,
        attachments: attachments::collect(&input.attachments),
    };

    form.error_map.clear();
    form.synced_md5 = compute_md5(&form.document);
    log::info!(
        "observation assembled with {} attachment(s)",
        record.attachments.len()
    );
    Ok(record)
}

fn store_errors(form: &mut ObservationForm, map: ErrorMap) -> ErrorMap {
    form.error_map = map.clone();
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{update, Msg, ObservationFormProps};
    use common::model::attachment::{FileCategory, FilePayload};
    use serde_json::json;

    fn form_with(schema: Value, initial: Option<Value>) -> ObservationForm {
        ObservationForm::new(ObservationFormProps {
            schema: serde_json::from_value(schema).expect("schema json"),
            initial_data: initial,
            eligible_stations: Vec::new(),
        })
    }

    fn free_point_input() -> SubmitInput {
        SubmitInput {
            location: LocationSelection::FreePoint {
                lng: 4.83,
                lat: 45.76,
            },
            date: "2024-05-01".to_string(),
            time: "14:30".to_string(),
            attachments: Default::default(),
        }
    }

    #[test]
    fn invalid_document_blocks_submission_and_stores_errors() {
        let mut form = form_with(
            json!({
                "type": "object",
                "properties": {"name": {"type": "string", "required": true}}
            }),
            None,
        );
        let result = submit(&mut form, &free_point_input());
        let returned = result.expect_err("document is invalid");
        assert_eq!(&returned, form.error_map());
        assert!(returned.contains_key("name"));
    }

    #[test]
    fn free_point_record_carries_coordinates_only() {
        let mut form = form_with(
            json!({
                "type": "object",
                "properties": {"name": {"type": "string"}}
            }),
            Some(json!({"name": "Loire"})),
        );
        let record = submit(&mut form, &free_point_input()).expect("valid document");
        assert_eq!(record.data.get("lat"), Some(&json!(45.76)));
        assert_eq!(record.data.get("lng"), Some(&json!(4.83)));
        assert!(!record.data.contains_key("station"));
        assert_eq!(
            record.data.get("contributed_at"),
            Some(&json!("2024-05-01T14:30:00Z"))
        );
        assert_eq!(record.data.get("name"), Some(&json!("Loire")));
    }

    #[test]
    fn station_record_carries_station_only() {
        let mut form = ObservationForm::new(ObservationFormProps {
            schema: serde_json::from_value(json!({"type": "object", "properties": {}}))
                .expect("schema json"),
            initial_data: None,
            eligible_stations: vec![12, 15],
        });
        let input = SubmitInput {
            location: LocationSelection::StationRef { id: 12 },
            ..free_point_input()
        };
        let record = submit(&mut form, &input).expect("valid document");
        assert_eq!(record.data.get("station"), Some(&json!(12)));
        assert!(!record.data.contains_key("lat"));
        assert!(!record.data.contains_key("lng"));
    }

    #[test]
    fn schema_fields_override_structural_keys() {
        let mut form = form_with(
            json!({
                "type": "object",
                "properties": {"contributed_at": {"type": "string"}}
            }),
            Some(json!({"contributed_at": "field-supplied"})),
        );
        let record = submit(&mut form, &free_point_input()).expect("valid document");
        assert_eq!(
            record.data.get("contributed_at"),
            Some(&json!("field-supplied"))
        );
    }

    #[test]
    fn malformed_timestamp_is_rejected_before_assembly() {
        let mut form = form_with(json!({"type": "object", "properties": {}}), None);
        let input = SubmitInput {
            date: "01/05/2024".to_string(),
            ..free_point_input()
        };
        let returned = submit(&mut form, &input).expect_err("date does not parse");
        assert!(returned.contains_key("contributed_at"));
        assert_eq!(&returned, form.error_map());
    }

    #[test]
    fn non_empty_slots_travel_with_the_record() {
        let mut form = form_with(json!({"type": "object", "properties": {}}), None);
        let mut input = free_point_input();
        input.attachments[1] = AttachmentSlot {
            file: Some(FilePayload {
                name: "station.jpg".to_string(),
                content: vec![0xFF, 0xD8],
            }),
            category: Some(FileCategory::PhotoStation),
        };
        let record = submit(&mut form, &input).expect("valid document");
        assert_eq!(record.attachments.len(), 1);
        assert_eq!(record.attachments[0].category, FileCategory::PhotoStation);
    }

    #[test]
    fn success_clears_previous_errors_and_marks_synced() {
        let mut form = form_with(
            json!({
                "type": "object",
                "properties": {"name": {"type": "string", "required": true}}
            }),
            None,
        );
        assert!(submit(&mut form, &free_point_input()).is_err());
        assert!(!form.error_map().is_empty());

        update(&mut form, Msg::ReplaceDocument(json!({"name": "Loire"})));
        assert!(form.is_dirty());
        let _record = submit(&mut form, &free_point_input()).expect("now valid");
        assert!(form.error_map().is_empty());
        assert!(!form.is_dirty());
    }
}
