use book_layout::*;

fn location_with_images(id: u32, images: u32) -> Location {
    Location {
        id,
        images: (0..images)
            .map(|i| ImageRef::url(id * 10 + i, "photo.jpg"))
            .collect(),
        ..Default::default()
    }
}

#[test]
fn test_location_book_statistics() {
    let locations = vec![
        location_with_images(1, 0),
        location_with_images(2, 3),
        location_with_images(3, 5),
        location_with_images(4, 1),
    ];
    let document = LocationBookDocument::assemble(&DocumentHeader::default(), &locations).unwrap();
    let stats = calculate_statistics(&document);

    assert_eq!(stats.pages, 3);
    assert_eq!(stats.content_pages, 2);
    assert_eq!(stats.filled_cards, 4);
    assert_eq!(stats.empty_cards, 2);
    // 0 + 3 + 3 (capped) + 1
    assert_eq!(stats.filled_image_slots, 7);
    assert_eq!(stats.empty_image_slots, 4 * 3 - 7);
    assert_eq!(stats.strip_images, 0);
}

#[test]
fn test_look_book_statistics() {
    let roles = vec![
        Role {
            id: 1,
            color_palette: Some(ImageRef::url(1, "palette.png")),
            styling_suggestions: vec![ImageRef::url(2, "a.png"), ImageRef::url(3, "b.png")],
            accessories: vec![ImageRef::url(4, "c.png")],
            ..Default::default()
        },
        Role {
            id: 2,
            ..Default::default()
        },
    ];
    let document = LookBookDocument::assemble(&DocumentHeader::default(), &roles).unwrap();
    let stats = calculate_statistics(&document);

    assert_eq!(stats.pages, 1);
    assert_eq!(stats.content_pages, 1);
    assert_eq!(stats.filled_cards, 2);
    assert_eq!(stats.empty_cards, 0);
    assert_eq!(stats.filled_image_slots, 1);
    assert_eq!(stats.empty_image_slots, 1);
    assert_eq!(stats.strip_images, 3);
}

#[test]
fn test_sections_statistics() {
    let sections = [TextSection::new("A", "a"), TextSection::new("B", "b")];
    let stats = calculate_statistics(&LookBookDocument::assemble_sections(&sections));
    assert_eq!(
        stats,
        DocumentStatistics {
            pages: 1,
            ..Default::default()
        }
    );
}
