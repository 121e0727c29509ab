use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page margins in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageMargins {
    pub top_mm: f32,
    pub bottom_mm: f32,
    pub left_mm: f32,
    pub right_mm: f32,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

impl PageMargins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            top_mm: margin_mm,
            bottom_mm: margin_mm,
            left_mm: margin_mm,
            right_mm: margin_mm,
        }
    }
}

/// Rendering configuration. Orientation is fixed per book kind; everything
/// else here is up to the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookOptions {
    pub paper_size: PaperSize,
    pub margins: PageMargins,

    // Typography
    pub title_font_size_pt: f32,
    pub heading_font_size_pt: f32,
    pub body_font_size_pt: f32,
    pub label_font_size_pt: f32,
    /// TrueType font with CJK coverage; Helvetica is used when unset
    pub font_path: Option<PathBuf>,

    // Cards
    pub card_spacing_mm: f32,
    /// Edge length of color palette and strip thumbnails in LookBook cards
    pub thumbnail_size_mm: f32,
}

impl Default for BookOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            margins: PageMargins::default(),
            title_font_size_pt: 32.0,
            heading_font_size_pt: 16.0,
            body_font_size_pt: 11.0,
            label_font_size_pt: 9.0,
            font_path: None,
            card_spacing_mm: 6.0,
            thumbnail_size_mm: 30.0,
        }
    }
}

impl BookOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (width_mm, height_mm) = self.paper_size.dimensions_mm();
        if width_mm <= 0.0 || height_mm <= 0.0 {
            return Err(BookError::Config(
                "Paper dimensions must be positive".to_string(),
            ));
        }

        let m = &self.margins;
        if [m.top_mm, m.bottom_mm, m.left_mm, m.right_mm]
            .iter()
            .any(|v| *v < 0.0)
        {
            return Err(BookError::Config("Margins cannot be negative".to_string()));
        }

        let short_side = width_mm.min(height_mm);
        if m.left_mm + m.right_mm >= short_side || m.top_mm + m.bottom_mm >= short_side {
            return Err(BookError::Config(
                "Margins leave no printable area".to_string(),
            ));
        }

        let sizes = [
            ("title", self.title_font_size_pt),
            ("heading", self.heading_font_size_pt),
            ("body", self.body_font_size_pt),
            ("label", self.label_font_size_pt),
        ];
        for (name, size) in sizes {
            if size <= 0.0 {
                return Err(BookError::Config(format!(
                    "The {} font size must be positive",
                    name
                )));
            }
        }

        if self.card_spacing_mm < 0.0 {
            return Err(BookError::Config(
                "Card spacing cannot be negative".to_string(),
            ));
        }
        if self.thumbnail_size_mm <= 0.0 {
            return Err(BookError::Config(
                "Thumbnail size must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
