use crate::model::attachment::Attachment;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The single normalized payload produced by a successful submit.
///
/// `data` is the merged flat object: the location fields (`lat`/`lng` or
/// `station`, never both), the composed `contributed_at` instant, and every
/// field of the schema-driven document. Schema fields land last, so a schema
/// that deliberately declares one of the structural names overrides it.
///
/// A record is built exactly once per successful submit, handed to the
/// submission collaborator, and never kept around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub data: Map<String, Value>,
    pub attachments: Vec<Attachment>,
}
