use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Image {id} cannot be rendered: {reason}")]
    Image { id: u32, reason: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid request: {0}")]
    Request(String),
    #[error("Entry id {0} is used more than once")]
    DuplicateEntryId(u32),
    #[error("Image id {0} refers to more than one image")]
    ConflictingImageId(u32),
    #[error("No ids left to assign")]
    IdsExhausted,
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, BookError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        let (short, long) = if w <= h { (w, h) } else { (h, w) };
        match orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }
}

/// The two kinds of production book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BookKind {
    /// Cast wardrobe reference, organized by role
    LookBook,
    /// Shooting-location reference, organized by location
    LocationBook,
}

impl BookKind {
    /// Title printed on the cover or header block
    pub fn title(self) -> &'static str {
        match self {
            BookKind::LookBook => "LookBook",
            BookKind::LocationBook => "Location Book",
        }
    }

    /// Orientation every page of this kind is printed in
    pub fn orientation(self) -> Orientation {
        match self {
            BookKind::LookBook => Orientation::Portrait,
            BookKind::LocationBook => Orientation::Landscape,
        }
    }
}
