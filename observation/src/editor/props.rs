//! Defines the construction parameters for an observation form.
//!
//! These mirror what the hosting page knows when it mounts the form: the
//! field schema to drive the editor, optional pre-filled data, and the
//! submission context's station allow-list.

use common::model::schema::FieldSchema;
use serde_json::Value;

/// Construction parameters consumed by `ObservationForm::new`.
pub struct ObservationFormProps {
    /// Root schema of the dynamic portion of the form. Expected to be an
    /// `object` variant; the document tree is created from it.
    pub schema: FieldSchema,

    /// Optional initial document. When `None`, a structurally-consistent
    /// default is derived from the schema.
    pub initial_data: Option<Value>,

    /// Station ids this submission context may reference. Non-empty means
    /// the form is in station mode; empty means free-coordinate mode. This
    /// list is the trust boundary for station selection, not the fetched
    /// station directory.
    pub eligible_stations: Vec<i64>,
}
