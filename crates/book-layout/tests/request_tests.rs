#![cfg(feature = "serde")]

use book_layout::*;

#[tokio::test]
async fn test_load_location_request() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    let json = r#"{
        "header": { "project_name": "Pilot", "date": "1/1/2025" },
        "entries": [
            {
                "id": 1,
                "scene": "1A",
                "time_of_day": "Day",
                "location_type": "Indoor",
                "location_name": "Diner",
                "images": [
                    { "id": 5, "source": { "url": "photos/diner.jpg" } },
                    { "id": 6, "source": { "data": [137, 80, 78, 71] } }
                ]
            },
            { "id": 2 }
        ]
    }"#;
    tokio::fs::write(&path, json).await.unwrap();

    let request = load_location_request(&path).await.unwrap();
    assert_eq!(request.header.project_name.as_deref(), Some("Pilot"));
    assert_eq!(request.header.crew_name, None);
    assert_eq!(request.entries.len(), 2);

    let diner = &request.entries[0];
    assert_eq!(diner.time_of_day, Some(TimeOfDay::Day));
    assert_eq!(diner.images[0], ImageRef::url(5, "photos/diner.jpg"));
    assert_eq!(diner.images[1], ImageRef::data(6, vec![137, 80, 78, 71]));

    let bare = &request.entries[1];
    assert_eq!(bare.scene, None);
    assert!(bare.images.is_empty());
}

#[tokio::test]
async fn test_load_look_request_without_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    let json = r#"{
        "entries": [
            {
                "id": 1,
                "role_name": "Lead",
                "color_palette": { "id": 2, "source": { "url": "palette.png" } },
                "accessories": [{ "id": 3, "source": { "url": "hat.png" } }]
            }
        ]
    }"#;
    tokio::fs::write(&path, json).await.unwrap();

    let request = load_look_request(&path).await.unwrap();
    assert_eq!(request.header, DocumentHeader::default());
    assert_eq!(request.entries[0].role_name.as_deref(), Some("Lead"));
    assert_eq!(request.entries[0].accessories.len(), 1);
    assert!(request.entries[0].styling_suggestions.is_empty());
}

#[tokio::test]
async fn test_sections_request_needs_two_sections() {
    let dir = tempfile::tempdir().unwrap();

    let two = dir.path().join("two.json");
    tokio::fs::write(
        &two,
        r#"{ "sections": [
            { "heading": "Concept", "body": "Earth tones" },
            { "heading": "Notes", "body": "Fittings Monday" }
        ] }"#,
    )
    .await
    .unwrap();
    let request = load_sections_request(&two).await.unwrap();
    assert_eq!(request.sections[1].heading, "Notes");

    let one = dir.path().join("one.json");
    tokio::fs::write(&one, r#"{ "sections": [{ "heading": "Concept", "body": "" }] }"#)
        .await
        .unwrap();
    let result = load_sections_request(&one).await;
    assert!(matches!(result, Err(BookError::Request(_))));
}

#[tokio::test]
async fn test_malformed_request_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, "{ \"entries\": 3 }").await.unwrap();

    match load_location_request(&path).await {
        Err(BookError::Request(msg)) => assert!(msg.contains("broken.json")),
        other => panic!("Expected Request error, got {:?}", other.map(|_| ())),
    }
}
