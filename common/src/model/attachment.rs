use serde::{Deserialize, Serialize};

/// Category tag attached to an uploaded file.
///
/// Closed set shared with the receiving API; the wire names are the
/// snake_case forms (`croquis`, `photos_comp`, ...). `Croquis` is the
/// default when a slot carries a file but no explicit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    #[default]
    Croquis,
    PhotosComp,
    PhotoStation,
    PhotoEquipe,
    Photos,
    ScanFiche,
}

/// Raw file content handed over by the surrounding UI layer.
///
/// The bytes travel base64-encoded in JSON; the engine never inspects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilePayload {
    pub name: String,
    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
}

/// One of the five fixed upload positions on the form. A slot without a
/// file is dropped from the outgoing payload entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttachmentSlot {
    pub file: Option<FilePayload>,
    pub category: Option<FileCategory>,
}

/// A non-empty slot as it appears in the submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub category: FileCategory,
    pub file: FilePayload,
}

mod base64_bytes {
    use base64::{Engine as _, engine::general_purpose};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map_err(de::Error::custom)
    }
}
