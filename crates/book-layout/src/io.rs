//! Loading everything a render needs before it starts: image bytes and fonts.

use crate::document::Document;
use crate::entry::{ImageId, ImageRef, ImageSource};
use crate::types::*;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::collections::HashMap;
use std::path::Path;

/// Raw image bytes keyed by image id
#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    images: HashMap<ImageId, Vec<u8>>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ImageId, bytes: Vec<u8>) {
        self.images.insert(id, bytes);
    }

    pub fn get(&self, id: ImageId) -> Option<&[u8]> {
        self.images.get(&id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Fetch the bytes of every image the document references.
///
/// Handles embedded data, `data:` URLs, `file://` URLs and plain paths.
/// Anything else fails: there is no retry and no fallback image. An id
/// shared by two different sources fails before anything is read.
pub async fn resolve_images(document: &Document) -> Result<ImageStore> {
    document.check_image_ids()?;

    let mut store = ImageStore::new();
    for image in document.images() {
        if store.get(image.id).is_some() {
            continue;
        }
        let bytes = load_image_bytes(image).await?;
        store.insert(image.id, bytes);
    }
    log::debug!("Resolved {} images", store.len());
    Ok(store)
}

/// Bytes for a single image reference
pub async fn load_image_bytes(image: &ImageRef) -> Result<Vec<u8>> {
    match &image.source {
        ImageSource::Data(bytes) => Ok(bytes.clone()),
        ImageSource::Url(url) => {
            if let Some(data_url) = url.strip_prefix("data:") {
                decode_data_url(image.id, data_url)
            } else if let Some(path) = url.strip_prefix("file://") {
                read_image_file(image.id, path).await
            } else if url.contains("://") {
                Err(BookError::Image {
                    id: image.id,
                    reason: format!("unsupported URL scheme in {}", url),
                })
            } else {
                read_image_file(image.id, url).await
            }
        }
    }
}

/// Decode the part of a `data:` URL after the scheme; only base64 payloads are accepted.
fn decode_data_url(id: ImageId, data_url: &str) -> Result<Vec<u8>> {
    let Some((meta, payload)) = data_url.split_once(',') else {
        return Err(BookError::Image {
            id,
            reason: "data URL has no payload".to_string(),
        });
    };

    if !meta.ends_with(";base64") {
        return Err(BookError::Image {
            id,
            reason: "data URL is not base64 encoded".to_string(),
        });
    }

    STANDARD.decode(payload.trim()).map_err(|e| BookError::Image {
        id,
        reason: format!("invalid base64: {}", e),
    })
}

async fn read_image_file(id: ImageId, path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    tokio::fs::read(path).await.map_err(|e| BookError::Image {
        id,
        reason: format!("{}: {}", path.display(), e),
    })
}

/// Read a TrueType font file
pub async fn load_font(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(tokio::fs::read(path).await?)
}
