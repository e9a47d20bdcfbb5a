// veda-ingest-core/src/domain/thumbnail.rs

use crate::domain::error::DomainError;
use crate::domain::text::sanitize_filename;

/// Object key for an uploaded thumbnail: sanitized stem plus lower-cased extension.
///
/// `"my photo!.PNG"` becomes `"myphoto.png"`. A stem with nothing left after
/// sanitization is rejected.
pub fn thumbnail_key(filename: &str) -> Result<String, DomainError> {
    let (stem, extension) = match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (filename, None),
    };

    let stem = sanitize_filename(stem);
    if stem.is_empty() {
        return Err(DomainError::InvalidFilename(filename.to_string()));
    }

    let extension = extension
        .map(|ext| sanitize_filename(ext).to_ascii_lowercase())
        .filter(|ext| !ext.is_empty());

    Ok(match extension {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    })
}
