//! JSON render requests: a header plus the entries to place.

use crate::document::TextSection;
use crate::entry::{DocumentHeader, Location, Role};
use crate::types::{BookError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRequest<E> {
    #[serde(default)]
    pub header: DocumentHeader,
    #[serde(default = "Vec::new")]
    pub entries: Vec<E>,
}

pub type LocationBookRequest = BookRequest<Location>;
pub type LookBookRequest = BookRequest<Role>;

/// The minimal LookBook: exactly two headed free-text sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionsRequest {
    pub sections: [TextSection; 2],
}

pub async fn load_location_request(path: impl AsRef<Path>) -> Result<LocationBookRequest> {
    load_json(path).await
}

pub async fn load_look_request(path: impl AsRef<Path>) -> Result<LookBookRequest> {
    load_json(path).await
}

pub async fn load_sections_request(path: impl AsRef<Path>) -> Result<SectionsRequest> {
    load_json(path).await
}

async fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| BookError::Request(format!("{}: {}", path.display(), e)))
}
