//! Embedded binary attachments (worksheet images).

/// A decoded attachment from a worksheet's binary section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// The worksheet's `item-id` for this attachment.
    pub item_id: String,
    /// MIME type.
    pub mime_type: String,
    /// Decoded (and decompressed) payload.
    pub data: Vec<u8>,
}

impl Resource {
    /// Create a new resource.
    pub fn new(item_id: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            item_id: item_id.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Create a PNG image resource.
    pub fn png(item_id: impl Into<String>, data: Vec<u8>) -> Self {
        Self::new(item_id, "image/png", data)
    }

    /// File name the attachment is written under, e.g. `item3.png`.
    ///
    /// Worksheets do not record the image format, so every attachment is
    /// named as a PNG.
    pub fn file_name(&self) -> String {
        format!("item{}.png", self.item_id)
    }
}
