use book_layout::*;

fn pilot_header() -> DocumentHeader {
    DocumentHeader::new("Pilot", "Crew A", "Jane Lee", "1/1/2025")
}

fn location(id: u32) -> Location {
    Location {
        id,
        scene: Some(format!("{}A", id)),
        time_of_day: Some(TimeOfDay::Day),
        location_type: Some(LocationType::Indoor),
        location_name: Some("Diner".to_string()),
        images: Vec::new(),
    }
}

fn role(id: u32, name: &str) -> Role {
    Role {
        id,
        role_name: Some(name.to_string()),
        ..Default::default()
    }
}

fn card_slots(page: &Page) -> &[CardSlot] {
    match &page.content {
        PageContent::Cards(slots) => slots,
        other => panic!("Expected a cards page, got {:?}", other),
    }
}

fn location_card(slot: &CardSlot) -> &LocationCard {
    match slot {
        CardSlot::Filled(CardFragment::Location(card)) => card,
        other => panic!("Expected a location card, got {:?}", other),
    }
}

#[test]
fn test_single_location_gets_cover_and_padded_page() {
    let document = LocationBookDocument::assemble(&pilot_header(), &[location(1)]).unwrap();

    assert_eq!(document.kind, BookKind::LocationBook);
    assert_eq!(document.page_count(), 2);

    match &document.pages[0].content {
        PageContent::Cover(title) => {
            assert_eq!(title.title, "Location Book");
            assert_eq!(title.project_name, "Pilot");
            assert_eq!(title.crew_name, "Crew A");
            assert_eq!(title.director_name, "Jane Lee");
            assert_eq!(title.date, "1/1/2025");
        }
        other => panic!("Expected a cover page, got {:?}", other),
    }

    let slots = card_slots(&document.pages[1]);
    assert_eq!(slots.len(), CARDS_PER_PAGE);
    assert!(!slots[0].is_empty());
    assert!(slots[1].is_empty());
    assert!(slots[2].is_empty());

    let card = location_card(&slots[0]);
    assert_eq!(card.entry_id, 1);
    assert!(card.images.iter().all(ImageSlot::is_empty));
    assert_eq!(card.fields[0].value, "1A");
    assert_eq!(card.fields[1].value, "Day");
    assert_eq!(card.fields[2].value, "Indoor");
    assert_eq!(card.fields[3].value, "Diner");
}

#[test]
fn test_seven_locations_fill_three_pages() {
    let locations: Vec<Location> = (1..=7).map(location).collect();
    let document = LocationBookDocument::assemble(&pilot_header(), &locations).unwrap();

    assert_eq!(document.page_count(), 4);

    let filled: Vec<usize> = document.pages[1..]
        .iter()
        .map(|page| card_slots(page).iter().filter(|s| !s.is_empty()).count())
        .collect();
    assert_eq!(filled, vec![3, 3, 1]);

    for page in &document.pages[1..] {
        assert_eq!(card_slots(page).len(), CARDS_PER_PAGE);
    }

    // Input order is kept across pages
    let ids: Vec<u32> = document.pages[1..]
        .iter()
        .flat_map(|page| card_slots(page).iter())
        .filter_map(|slot| match slot {
            CardSlot::Filled(card) => Some(card.entry_id()),
            CardSlot::Empty => None,
        })
        .collect();
    assert_eq!(ids, (1..=7).collect::<Vec<_>>());
}

#[test]
fn test_empty_location_list_is_cover_only() {
    let document = LocationBookDocument::assemble(&pilot_header(), &[]).unwrap();
    assert_eq!(document.page_count(), 1);
    assert!(matches!(document.pages[0].content, PageContent::Cover(_)));
}

#[test]
fn test_location_pages_are_landscape() {
    let locations: Vec<Location> = (1..=4).map(location).collect();
    let document = LocationBookDocument::assemble(&pilot_header(), &locations).unwrap();
    assert!(
        document
            .pages
            .iter()
            .all(|page| page.orientation == Orientation::Landscape)
    );
}

#[test]
fn test_cjk_location_name_is_spaced() {
    let mut entry = location(1);
    entry.location_name = Some("北京摄影棚".to_string());

    let document = LocationBookDocument::assemble(&pilot_header(), &[entry]).unwrap();
    let card = location_card(&card_slots(&document.pages[1])[0]);
    assert_eq!(card.fields[3].label, "Location");
    assert_eq!(card.fields[3].value, "北 京 摄 影 棚 ");
}

#[test]
fn test_cjk_header_names_are_spaced_but_date_is_not() {
    let header = DocumentHeader::new("星空", "Crew", "张艺谋", "2025年1月1日");
    let document = LocationBookDocument::assemble(&header, &[]).unwrap();

    match &document.pages[0].content {
        PageContent::Cover(title) => {
            assert_eq!(title.project_name, "星 空 ");
            assert_eq!(title.director_name, "张 艺 谋 ");
            assert_eq!(title.date, "2025年1月1日");
        }
        other => panic!("Expected a cover page, got {:?}", other),
    }
}

#[test]
fn test_missing_header_fields_print_empty() {
    let document = LocationBookDocument::assemble(&DocumentHeader::default(), &[]).unwrap();
    match &document.pages[0].content {
        PageContent::Cover(title) => {
            assert_eq!(title.project_name, "");
            assert_eq!(title.crew_name, "");
            assert_eq!(title.director_name, "");
            assert_eq!(title.date, "");
        }
        other => panic!("Expected a cover page, got {:?}", other),
    }
}

#[test]
fn test_image_slots_are_always_three() {
    for count in 0..=5u32 {
        let mut entry = location(1);
        entry.images = (1..=count)
            .map(|i| ImageRef::url(i, format!("img{}.png", i)))
            .collect();

        let card = layout_location(&entry);
        let filled = card.images.iter().filter(|slot| !slot.is_empty()).count();
        assert_eq!(card.images.len(), 3);
        assert_eq!(filled, count.min(3) as usize);

        // Real images come first
        for (i, slot) in card.images.iter().enumerate().take(filled) {
            assert_eq!(slot.image().map(|image| image.id), Some(i as u32 + 1));
        }
    }
}

#[test]
fn test_duplicate_location_ids_rejected() {
    let locations = vec![location(1), location(2), location(1)];
    let result = LocationBookDocument::assemble(&pilot_header(), &locations);
    assert!(matches!(result, Err(BookError::DuplicateEntryId(1))));
}

#[test]
fn test_duplicate_role_ids_rejected() {
    let roles = vec![role(4, "Lead"), role(4, "Villain")];
    let result = LookBookDocument::assemble(&pilot_header(), &roles);
    assert!(matches!(result, Err(BookError::DuplicateEntryId(4))));
}

#[test]
fn test_assembly_is_deterministic() {
    let locations: Vec<Location> = (1..=5).map(location).collect();
    let first = LocationBookDocument::assemble(&pilot_header(), &locations).unwrap();
    let second = LocationBookDocument::assemble(&pilot_header(), &locations).unwrap();
    assert_eq!(first, second);

    let roles = vec![role(1, "Lead"), role(2, "Villain")];
    let first = LookBookDocument::assemble(&pilot_header(), &roles).unwrap();
    let second = LookBookDocument::assemble(&pilot_header(), &roles).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_look_book_is_one_portrait_flow() {
    let mut lead = role(1, "Lead");
    lead.wardrobe_style = Some("Vintage".to_string());
    lead.color_palette = Some(ImageRef::url(10, "palette.png"));
    lead.styling_suggestions = (11..=15).map(|i| ImageRef::url(i, "s.png")).collect();
    let roles = vec![lead, role(2, "Villain")];

    let document = LookBookDocument::assemble(&pilot_header(), &roles).unwrap();

    assert_eq!(document.kind, BookKind::LookBook);
    assert_eq!(document.page_count(), 1);
    assert_eq!(document.pages[0].orientation, Orientation::Portrait);

    let blocks = match &document.pages[0].content {
        PageContent::Flow(blocks) => blocks,
        other => panic!("Expected a flow page, got {:?}", other),
    };
    assert_eq!(blocks.len(), 3);
    assert!(matches!(&blocks[0], FlowBlock::Header(title) if title.title == "LookBook"));

    match &blocks[1] {
        FlowBlock::Card(CardFragment::Role(card)) => {
            assert_eq!(card.entry_id, 1);
            assert_eq!(card.role_name.value, "Lead");
            assert_eq!(card.wardrobe_style.value, "Vintage");
            assert_eq!(card.notes.value, "");
            assert!(!card.color_palette.is_empty());
            // Strips are not capped
            assert_eq!(card.styling_suggestions.len(), 5);
            assert!(card.accessories.is_empty());
        }
        other => panic!("Expected a role card, got {:?}", other),
    }

    match &blocks[2] {
        FlowBlock::Card(card) => assert_eq!(card.entry_id(), 2),
        other => panic!("Expected a card, got {:?}", other),
    }
}

#[test]
fn test_role_text_is_not_cjk_spaced() {
    let card = layout_role(&role(1, "女主角"));
    assert_eq!(card.role_name.value, "女主角");
}

#[test]
fn test_sections_document() {
    let sections = [
        TextSection::new("Concept", "Muted earth tones."),
        TextSection::new("Notes", "Fittings on Monday."),
    ];
    let document = LookBookDocument::assemble_sections(&sections);

    assert_eq!(document.page_count(), 1);
    assert_eq!(document.pages[0].orientation, Orientation::Portrait);
    match &document.pages[0].content {
        PageContent::Sections(found) => assert_eq!(found.as_slice(), &sections),
        other => panic!("Expected a sections page, got {:?}", other),
    }
}

#[test]
fn test_document_images_in_page_order() {
    let mut first = location(1);
    first.images = vec![ImageRef::url(7, "a.png"), ImageRef::url(8, "b.png")];
    let mut second = location(2);
    second.images = vec![ImageRef::url(9, "c.png")];

    let document = LocationBookDocument::assemble(&pilot_header(), &[first, second]).unwrap();
    let ids: Vec<u32> = document.images().iter().map(|image| image.id).collect();
    assert_eq!(ids, vec![7, 8, 9]);
}

#[test]
fn test_image_id_with_two_sources_rejected() {
    let mut first = location(1);
    first.images = vec![ImageRef::url(1, "a.jpg")];
    let mut second = location(2);
    second.images = vec![ImageRef::url(1, "b.jpg")];
    let result = LocationBookDocument::assemble(&pilot_header(), &[first, second]);
    assert!(matches!(result, Err(BookError::ConflictingImageId(1))));

    let mut lead = role(1, "Lead");
    lead.color_palette = Some(ImageRef::url(3, "palette.png"));
    lead.accessories = vec![ImageRef::url(3, "hat.png")];
    let result = LookBookDocument::assemble(&pilot_header(), &[lead]);
    assert!(matches!(result, Err(BookError::ConflictingImageId(3))));
}

#[test]
fn test_repeated_image_with_same_source_allowed() {
    let mut first = location(1);
    first.images = vec![ImageRef::url(1, "a.jpg")];
    let mut second = location(2);
    second.images = vec![ImageRef::url(1, "a.jpg")];
    assert!(LocationBookDocument::assemble(&pilot_header(), &[first, second]).is_ok());
}

#[test]
fn test_chunk_rejects_zero_capacity() {
    let entries = [1, 2, 3];
    assert!(matches!(chunk(&entries, 0), Err(BookError::Config(_))));
}
