//! State container for the observation form.
//!
//! Holds the schema, the live document tree, the undo/redo history, the
//! current validation errors, the submission context's station allow-list,
//! and the fetched station directory. Fields are `pub(crate)` where the
//! `update` and `submit` modules need them; read access for callers goes
//! through the accessor methods.

use common::model::location::LocationInputMode;
use common::model::schema::FieldSchema;
use common::model::station::Station;
use serde_json::Value;

use super::helpers::compute_md5;
use super::props::ObservationFormProps;
use crate::submit::location::resolve_location_mode;
use crate::validate::ErrorMap;

/// Main state container for one mounted observation form.
pub struct ObservationForm {
    /// Schema the document was created from. Never mutated.
    pub(crate) schema: FieldSchema,

    /// Current document snapshot. Replaced wholesale on every change, never
    /// mutated in place, so earlier history entries stay valid.
    pub(crate) document: Value,

    /// Linear history for undo/redo. Each entry is a full document snapshot.
    pub(crate) history: Vec<Value>,

    /// Index into `history` pointing at the active snapshot.
    pub(crate) history_index: usize,

    /// Errors from the most recent validation pass. Empty means the last
    /// pass was clean (or none ran yet).
    pub(crate) error_map: ErrorMap,

    /// Station ids this submission context may reference.
    pub(crate) eligible_stations: Vec<i64>,

    /// Directory entries for label display. Empty until the one-shot fetch
    /// resolves; lookups simply miss in the meantime.
    pub(crate) stations: Vec<Station>,

    /// MD5 of the document at creation or last successful submit. Used for
    /// dirty tracking.
    pub(crate) synced_md5: String,
}

impl ObservationForm {
    /// Creates the form state, deriving the initial document from the schema
    /// when no pre-filled data is supplied.
    pub fn new(props: ObservationFormProps) -> Self {
        let document = props
            .initial_data
            .unwrap_or_else(|| props.schema.default_document());
        let synced_md5 = compute_md5(&document);
        Self {
            schema: props.schema,
            history: vec![document.clone()],
            history_index: 0,
            document,
            error_map: ErrorMap::new(),
            eligible_stations: props.eligible_stations,
            stations: Vec::new(),
            synced_md5,
        }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn error_map(&self) -> &ErrorMap {
        &self.error_map
    }

    pub fn eligible_stations(&self) -> &[i64] {
        &self.eligible_stations
    }

    /// Which location input this form presents. Fixed for the lifetime of
    /// the form: it depends only on the allow-list supplied at mount.
    pub fn location_mode(&self) -> LocationInputMode {
        resolve_location_mode(&self.eligible_stations)
    }

    /// Display label for a station id. `None` until the directory fetch has
    /// resolved, or for ids the directory does not know. Presentation only;
    /// an unknown id is not an error here.
    pub fn station_label(&self, id: i64) -> Option<&str> {
        self.stations
            .iter()
            .find(|station| station.id == id)
            .map(|station| station.label.as_str())
    }

    /// Whether the document changed since creation or the last successful
    /// submit.
    pub fn is_dirty(&self) -> bool {
        compute_md5(&self.document) != self.synced_md5
    }
}
