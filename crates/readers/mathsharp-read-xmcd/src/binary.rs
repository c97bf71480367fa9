//! Worksheet attachments.
//!
//! Images pasted into a worksheet live in a `binaryContent` section below
//! the root, one base64 element per image, optionally gzip-compressed.

use base64::Engine;
use flate2::read::GzDecoder;
use mathsharp_core::{Document, NodeRef, ParseError, Resource};
use mathsharp_xmcd::{Classify, Kind, attr};
use std::io::Read;
use std::path::Path;

/// Decode every attachment of a parsed worksheet.
///
/// A worksheet without a binary section has no attachments.
pub fn collect(doc: &Document) -> Result<Vec<Resource>, ParseError> {
    let Some(section) = doc
        .root()
        .children()
        .find(|n| n.kind() == Kind::BinaryContent)
    else {
        return Ok(Vec::new());
    };

    section.children().map(decode_item).collect()
}

/// Write the attachments of the worksheet at `document` into
/// `<dst_dir>/bin/<stem>/item<id>.png`, returning how many were written.
pub fn extract(dst_dir: &Path, document: &Path) -> Result<usize, ParseError> {
    let doc = crate::parse_file(document)?.value;
    let resources = collect(&doc)?;
    let stem = document
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    write(dst_dir, &stem, &resources)
}

/// Write already decoded attachments into `<dst_dir>/bin/<stem>/`.
///
/// Nothing is created when `resources` is empty.
pub fn write(dst_dir: &Path, stem: &str, resources: &[Resource]) -> Result<usize, ParseError> {
    if resources.is_empty() {
        return Ok(0);
    }

    let dir = dst_dir.join("bin").join(stem);
    std::fs::create_dir_all(&dir)?;
    for resource in resources {
        std::fs::write(dir.join(resource.file_name()), &resource.data)?;
    }

    Ok(resources.len())
}

fn decode_item(item: NodeRef<'_>) -> Result<Resource, ParseError> {
    let Some(id) = item.attr(attr::ITEM_ID) else {
        return Err(ParseError::Invalid(format!(
            "binary item <{}> has no {} attribute",
            item.local_name(),
            attr::ITEM_ID
        )));
    };

    let encoded: String = item.text().split_whitespace().collect();
    let mut data = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| ParseError::Invalid(format!("binary item {id}: base64 error: {e}")))?;

    if item.attr(attr::CONTENT_ENCODING).is_some() {
        let mut inflated = Vec::new();
        GzDecoder::new(data.as_slice())
            .read_to_end(&mut inflated)
            .map_err(|e| ParseError::Invalid(format!("binary item {id}: gzip error: {e}")))?;
        data = inflated;
    }

    Ok(Resource::png(id, data))
}
