//! Location lists from CSV.
//!
//! Expected columns, with a header row:
//! `scene, time_of_day, location_type, location_name, image...`
//! Any columns after the fourth are image URLs or paths; blank cells are skipped.

use crate::entry::{IdGenerator, ImageRef, Location, LocationType, TimeOfDay};
use crate::types::{BookError, Result};
use std::io::Read;
use std::path::Path;

pub async fn load_locations_from_csv(path: impl AsRef<Path>) -> Result<Vec<Location>> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let locations =
        tokio::task::spawn_blocking(move || parse_locations(contents.as_bytes())).await??;

    log::debug!("Loaded {} locations from {}", locations.len(), path.display());
    Ok(locations)
}

/// Parse location rows. Entry and image ids are assigned in row order starting at 1.
pub fn parse_locations(reader: impl Read) -> Result<Vec<Location>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entry_ids = IdGenerator::new();
    let mut image_ids = IdGenerator::new();
    let mut locations = Vec::new();

    for result in reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let cell = |i: usize| {
            record
                .get(i)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let images = record
            .iter()
            .skip(4)
            .filter(|value| !value.is_empty())
            .map(|value| Ok(ImageRef::url(image_ids.next_id()?, value)))
            .collect::<Result<Vec<_>>>()?;

        locations.push(Location {
            id: entry_ids.next_id()?,
            scene: cell(0),
            time_of_day: record.get(1).and_then(TimeOfDay::parse),
            location_type: record.get(2).and_then(LocationType::parse),
            location_name: cell(3),
            images,
        });
    }

    if locations.is_empty() {
        return Err(BookError::Request("CSV contains no locations".to_string()));
    }

    Ok(locations)
}
