use crate::document::{CardFragment, CardSlot, Document, FlowBlock, ImageSlot, PageContent};

/// Counts describing an assembled document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DocumentStatistics {
    /// Pages in the document tree (a flow counts once, however it breaks when printed)
    pub pages: usize,
    /// Pages holding card slots
    pub content_pages: usize,
    /// Card slots holding an entry
    pub filled_cards: usize,
    /// Card slots padded as empty placeholders
    pub empty_cards: usize,
    /// Fixed image slots holding an image
    pub filled_image_slots: usize,
    /// Fixed image slots rendered as placeholders
    pub empty_image_slots: usize,
    /// Images in variable-length strips
    pub strip_images: usize,
}

/// Calculate statistics for an assembled document
pub fn calculate_statistics(document: &Document) -> DocumentStatistics {
    let mut stats = DocumentStatistics {
        pages: document.page_count(),
        ..Default::default()
    };

    for page in &document.pages {
        match &page.content {
            PageContent::Cover(_) | PageContent::Sections(_) => {}
            PageContent::Cards(slots) => {
                stats.content_pages += 1;
                for slot in slots {
                    match slot {
                        CardSlot::Filled(card) => {
                            stats.filled_cards += 1;
                            count_card(card, &mut stats);
                        }
                        CardSlot::Empty => stats.empty_cards += 1,
                    }
                }
            }
            PageContent::Flow(blocks) => {
                stats.content_pages += 1;
                for block in blocks {
                    if let FlowBlock::Card(card) = block {
                        stats.filled_cards += 1;
                        count_card(card, &mut stats);
                    }
                }
            }
        }
    }

    stats
}

fn count_card(card: &CardFragment, stats: &mut DocumentStatistics) {
    let mut count_slot = |slot: &ImageSlot| match slot {
        ImageSlot::Filled(_) => stats.filled_image_slots += 1,
        ImageSlot::Empty => stats.empty_image_slots += 1,
    };

    match card {
        CardFragment::Location(card) => card.images.iter().for_each(&mut count_slot),
        CardFragment::Role(card) => {
            count_slot(&card.color_palette);
            stats.strip_images += card.styling_suggestions.len() + card.accessories.len();
        }
    }
}
