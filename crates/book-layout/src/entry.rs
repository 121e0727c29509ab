//! Entries placed onto book pages, and the header block shared by both books.

use crate::types::{BookError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type EntryId = u32;
pub type ImageId = u32;

/// Where the bytes of an image come from at render time
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ImageSource {
    /// Embedded bytes (PNG, JPEG, ...)
    Data(Vec<u8>),
    /// A `data:` URL, a `file://` URL or a local path
    Url(String),
}

/// An already-resolved image attached to an entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImageRef {
    pub id: ImageId,
    pub source: ImageSource,
}

impl ImageRef {
    pub fn url(id: ImageId, url: impl Into<String>) -> Self {
        Self {
            id,
            source: ImageSource::Url(url.into()),
        }
    }

    pub fn data(id: ImageId, bytes: Vec<u8>) -> Self {
        Self {
            id,
            source: ImageSource::Data(bytes),
        }
    }
}

/// Day or night shoot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Day => "Day",
            TimeOfDay::Night => "Night",
        }
    }

    /// Case-insensitive parse; anything unrecognised is unset
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" | "d" => Some(TimeOfDay::Day),
            "night" | "n" => Some(TimeOfDay::Night),
            _ => None,
        }
    }
}

/// Indoor or outdoor location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LocationType {
    Indoor,
    Outdoor,
}

impl LocationType {
    pub fn label(self) -> &'static str {
        match self {
            LocationType::Indoor => "Indoor",
            LocationType::Outdoor => "Outdoor",
        }
    }

    /// Case-insensitive parse; anything unrecognised is unset
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "indoor" | "int" | "i" => Some(LocationType::Indoor),
            "outdoor" | "ext" | "o" => Some(LocationType::Outdoor),
            _ => None,
        }
    }
}

/// A shooting location
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub id: EntryId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scene: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_of_day: Option<TimeOfDay>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub location_type: Option<LocationType>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub location_name: Option<String>,
    /// Up to three photos, in display order
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: Vec<ImageRef>,
}

/// A cast role in a LookBook
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Role {
    pub id: EntryId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub role_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub wardrobe_style: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color_palette: Option<ImageRef>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub styling_suggestions: Vec<ImageRef>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accessories: Vec<ImageRef>,
}

/// Anything the assemblers place on a page
pub trait Entry {
    fn id(&self) -> EntryId;
}

impl Entry for Location {
    fn id(&self) -> EntryId {
        self.id
    }
}

impl Entry for Role {
    fn id(&self) -> EntryId {
        self.id
    }
}

/// Project metadata printed on the cover (LocationBook) or header block (LookBook)
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DocumentHeader {
    pub project_name: Option<String>,
    pub crew_name: Option<String>,
    pub director_name: Option<String>,
    /// Pre-formatted display date, printed verbatim
    pub date: Option<String>,
}

impl DocumentHeader {
    pub fn new(
        project_name: impl Into<String>,
        crew_name: impl Into<String>,
        director_name: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            crew_name: Some(crew_name.into()),
            director_name: Some(director_name.into()),
            date: Some(date.into()),
        }
    }
}

/// Hands out fresh ids for entries and images.
///
/// Ids start at 1 and increase monotonically, so two ids from the same
/// generator never collide. Once `u32::MAX` has been handed out the
/// generator is exhausted and every further call fails.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: Option<u32>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Continue after the largest id already in use
    pub fn after(existing: impl IntoIterator<Item = u32>) -> Self {
        let max = existing.into_iter().max().unwrap_or(0);
        Self {
            next: max.checked_add(1),
        }
    }

    pub fn next_id(&mut self) -> Result<u32> {
        let id = self.next.ok_or(BookError::IdsExhausted)?;
        self.next = id.checked_add(1);
        Ok(id)
    }
}
