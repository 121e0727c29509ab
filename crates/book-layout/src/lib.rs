//! Production book layout: LookBooks (cast wardrobe) and Location Books
//! (shooting locations), assembled into a page tree and rendered to PDF.

pub mod assemble;
pub mod card;
pub mod chunk;
pub mod constants;
mod document;
mod entry;
mod import;
mod io;
mod options;
pub mod render;
#[cfg(feature = "serde")]
mod request;
pub mod script;
mod stats;
mod types;

pub use assemble::{LocationBookDocument, LookBookDocument, ensure_unique_ids};
pub use card::{CardLayout, layout_location, layout_role};
pub use chunk::chunk;
pub use document::*;
pub use entry::*;
pub use import::{load_locations_from_csv, parse_locations};
pub use io::{ImageStore, load_font, load_image_bytes, resolve_images};
pub use options::*;
pub use render::{generate_pdf, render_pdf_bytes};
#[cfg(feature = "serde")]
pub use request::*;
pub use script::format_text;
pub use stats::{DocumentStatistics, calculate_statistics};
pub use types::*;
