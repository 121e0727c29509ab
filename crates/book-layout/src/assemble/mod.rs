//! Document assembly: header + ordered entries → [`Document`](crate::Document).
//!
//! Both assemblers are pure: the same input always yields the same tree.
//! The LocationBook paginates explicitly (three cards per page, padded);
//! the LookBook streams role cards into one flow and leaves page breaks to
//! the renderer.

mod location_book;
mod look_book;

pub use location_book::LocationBookDocument;
pub use look_book::LookBookDocument;

use crate::document::TitleBlock;
use crate::entry::{DocumentHeader, Entry};
use crate::script::format_text;
use crate::types::{BookError, Result};
use std::collections::HashSet;

/// Build the title block: names get CJK spacing, the date is printed verbatim.
pub(crate) fn title_block(title: &'static str, header: &DocumentHeader) -> TitleBlock {
    TitleBlock {
        title,
        project_name: format_text(header.project_name.as_deref()),
        crew_name: format_text(header.crew_name.as_deref()),
        director_name: format_text(header.director_name.as_deref()),
        date: header.date.clone().unwrap_or_default(),
    }
}

/// Fail on the first id seen twice
pub fn ensure_unique_ids<E: Entry>(entries: &[E]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id()) {
            return Err(BookError::DuplicateEntryId(entry.id()));
        }
    }
    Ok(())
}
