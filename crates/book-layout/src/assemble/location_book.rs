use super::{ensure_unique_ids, title_block};
use crate::card::CardLayout;
use crate::chunk::{chunk, page_count};
use crate::document::{CARDS_PER_PAGE, CardSlot, Document, Page, PageContent};
use crate::entry::{DocumentHeader, Location};
use crate::types::{BookKind, Result};

/// Cover page followed by landscape pages of three location cards each
pub struct LocationBookDocument;

impl LocationBookDocument {
    pub fn assemble(header: &DocumentHeader, locations: &[Location]) -> Result<Document> {
        ensure_unique_ids(locations)?;

        let kind = BookKind::LocationBook;
        let orientation = kind.orientation();

        let mut pages = Vec::with_capacity(1 + page_count(locations.len(), CARDS_PER_PAGE));
        pages.push(Page {
            orientation,
            content: PageContent::Cover(title_block(kind.title(), header)),
        });

        for group in chunk(locations, CARDS_PER_PAGE)? {
            let mut slots: Vec<CardSlot> = group
                .iter()
                .map(|location| CardSlot::Filled(location.layout()))
                .collect();
            slots.resize(CARDS_PER_PAGE, CardSlot::Empty);

            pages.push(Page {
                orientation,
                content: PageContent::Cards(slots),
            });
        }

        log::debug!(
            "Assembled location book: {} locations on {} pages",
            locations.len(),
            pages.len()
        );

        let document = Document { kind, pages };
        document.check_image_ids()?;
        Ok(document)
    }
}
