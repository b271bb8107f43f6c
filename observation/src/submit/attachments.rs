use common::model::attachment::{Attachment, AttachmentSlot};

/// Gathers the non-empty upload slots, in declared slot order.
///
/// A slot with no file contributes nothing (not a null entry). A file
/// without an explicit category gets the default tag. File content is
/// passed through untouched.
pub fn collect(slots: &[AttachmentSlot; 5]) -> Vec<Attachment> {
    slots
        .iter()
        .filter_map(|slot| {
            slot.file.as_ref().map(|file| Attachment {
                category: slot.category.unwrap_or_default(),
                file: file.clone(),
            })
        })
        .collect()
}
