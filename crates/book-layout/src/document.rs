//! The assembled document tree.
//!
//! Plain data only: the assemblers produce it and a rendering backend turns
//! it into bytes. Nothing in here knows about PDF.

use crate::entry::{EntryId, ImageId, ImageRef, ImageSource};
use crate::types::{BookError, BookKind, Orientation, Result};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Image slots in every location card
pub const LOCATION_IMAGE_SLOTS: usize = 3;

/// Card slots on every LocationBook content page
pub const CARDS_PER_PAGE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Document {
    pub kind: BookKind,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every image referenced anywhere in the document, in page order
    pub fn images(&self) -> Vec<&ImageRef> {
        let mut images = Vec::new();
        for page in &self.pages {
            page.content.collect_images(&mut images);
        }
        images
    }

    /// Fail when one image id is attached to two different sources.
    ///
    /// Decoded images are keyed by id. Repeating an id with the same source
    /// is allowed.
    pub fn check_image_ids(&self) -> Result<()> {
        let mut seen: HashMap<ImageId, &ImageSource> = HashMap::new();
        for image in self.images() {
            if let Some(source) = seen.insert(image.id, &image.source) {
                if source != &image.source {
                    return Err(BookError::ConflictingImageId(image.id));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Page {
    pub orientation: Orientation,
    pub content: PageContent,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PageContent {
    /// Title page built from the header
    Cover(TitleBlock),
    /// Fixed grid of card slots, padded with empty slots
    Cards(Vec<CardSlot>),
    /// Continuous flow; the renderer decides where physical pages break
    Flow(Vec<FlowBlock>),
    /// Headed free-text sections on a single page
    Sections(Vec<TextSection>),
}

impl PageContent {
    fn collect_images<'a>(&'a self, out: &mut Vec<&'a ImageRef>) {
        match self {
            PageContent::Cover(_) | PageContent::Sections(_) => {}
            PageContent::Cards(slots) => {
                for slot in slots {
                    if let CardSlot::Filled(card) = slot {
                        card.collect_images(out);
                    }
                }
            }
            PageContent::Flow(blocks) => {
                for block in blocks {
                    if let FlowBlock::Card(card) = block {
                        card.collect_images(out);
                    }
                }
            }
        }
    }
}

/// Title, project metadata and date
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TitleBlock {
    pub title: &'static str,
    pub project_name: String,
    pub crew_name: String,
    pub director_name: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CardSlot {
    Filled(CardFragment),
    Empty,
}

impl CardSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, CardSlot::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum FlowBlock {
    Header(TitleBlock),
    Card(CardFragment),
}

/// One entry laid out on its card template
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CardFragment {
    Location(LocationCard),
    Role(RoleCard),
}

impl CardFragment {
    pub fn entry_id(&self) -> EntryId {
        match self {
            CardFragment::Location(card) => card.entry_id,
            CardFragment::Role(card) => card.entry_id,
        }
    }

    fn collect_images<'a>(&'a self, out: &mut Vec<&'a ImageRef>) {
        match self {
            CardFragment::Location(card) => {
                out.extend(card.images.iter().filter_map(ImageSlot::image));
            }
            CardFragment::Role(card) => {
                out.extend(card.color_palette.image());
                out.extend(card.styling_suggestions.iter());
                out.extend(card.accessories.iter());
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LabeledField {
    pub label: &'static str,
    pub value: String,
}

impl LabeledField {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ImageSlot {
    Filled(ImageRef),
    Empty,
}

impl ImageSlot {
    pub fn image(&self) -> Option<&ImageRef> {
        match self {
            ImageSlot::Filled(image) => Some(image),
            ImageSlot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ImageSlot::Empty)
    }
}

/// Scene, D/N, Indoor/Outdoor and Location fields plus a three-slot image column
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LocationCard {
    pub entry_id: EntryId,
    pub fields: [LabeledField; 4],
    pub images: [ImageSlot; LOCATION_IMAGE_SLOTS],
}

/// Role card. The two image strips are as long as the role's lists.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RoleCard {
    pub entry_id: EntryId,
    pub role_name: LabeledField,
    pub wardrobe_style: LabeledField,
    pub notes: LabeledField,
    pub color_palette: ImageSlot,
    pub styling_suggestions: Vec<ImageRef>,
    pub accessories: Vec<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextSection {
    pub heading: String,
    pub body: String,
}

impl TextSection {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}
