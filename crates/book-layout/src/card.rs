//! Mapping single entries onto their card templates.
//!
//! No field validation happens here: absent text prints empty.

use crate::document::{
    CardFragment, ImageSlot, LOCATION_IMAGE_SLOTS, LabeledField, LocationCard, RoleCard,
};
use crate::entry::{Location, Role};
use crate::script::format_text;

pub const SCENE_LABEL: &str = "Scene";
pub const TIME_OF_DAY_LABEL: &str = "D/N";
pub const LOCATION_TYPE_LABEL: &str = "Indoor/Outdoor";
pub const LOCATION_NAME_LABEL: &str = "Location";

pub const ROLE_NAME_LABEL: &str = "Role";
pub const WARDROBE_STYLE_LABEL: &str = "Wardrobe Style";
pub const NOTES_LABEL: &str = "Notes";
pub const COLOR_PALETTE_LABEL: &str = "Color Palette";
pub const STYLING_SUGGESTIONS_LABEL: &str = "Styling Suggestions";
pub const ACCESSORIES_LABEL: &str = "Accessories";

/// Lay out a location: four fields in fixed order and exactly
/// [`LOCATION_IMAGE_SLOTS`] image slots, real images first.
///
/// Images past the third have no slot and are left off the card.
pub fn layout_location(location: &Location) -> LocationCard {
    if location.images.len() > LOCATION_IMAGE_SLOTS {
        log::warn!(
            "Location {} has {} images, only the first {} are shown",
            location.id,
            location.images.len(),
            LOCATION_IMAGE_SLOTS
        );
    }

    let images = std::array::from_fn(|i| match location.images.get(i) {
        Some(image) => ImageSlot::Filled(image.clone()),
        None => ImageSlot::Empty,
    });

    LocationCard {
        entry_id: location.id,
        fields: [
            LabeledField::new(SCENE_LABEL, location.scene.clone().unwrap_or_default()),
            LabeledField::new(
                TIME_OF_DAY_LABEL,
                location.time_of_day.map(|t| t.label()).unwrap_or_default(),
            ),
            LabeledField::new(
                LOCATION_TYPE_LABEL,
                location.location_type.map(|t| t.label()).unwrap_or_default(),
            ),
            LabeledField::new(
                LOCATION_NAME_LABEL,
                format_text(location.location_name.as_deref()),
            ),
        ],
        images,
    }
}

/// Lay out a role. Role text is printed as entered, without CJK spacing,
/// and the image strips are neither capped nor padded.
pub fn layout_role(role: &Role) -> RoleCard {
    RoleCard {
        entry_id: role.id,
        role_name: LabeledField::new(ROLE_NAME_LABEL, role.role_name.clone().unwrap_or_default()),
        wardrobe_style: LabeledField::new(
            WARDROBE_STYLE_LABEL,
            role.wardrobe_style.clone().unwrap_or_default(),
        ),
        notes: LabeledField::new(NOTES_LABEL, role.notes.clone().unwrap_or_default()),
        color_palette: match &role.color_palette {
            Some(image) => ImageSlot::Filled(image.clone()),
            None => ImageSlot::Empty,
        },
        styling_suggestions: role.styling_suggestions.clone(),
        accessories: role.accessories.clone(),
    }
}

/// Entries that have a card template
pub trait CardLayout {
    fn layout(&self) -> CardFragment;
}

impl CardLayout for Location {
    fn layout(&self) -> CardFragment {
        CardFragment::Location(layout_location(self))
    }
}

impl CardLayout for Role {
    fn layout(&self) -> CardFragment {
        CardFragment::Role(layout_role(self))
    }
}
