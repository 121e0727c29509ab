//! Shared constants for rendering books
//!
//! This module centralizes magic numbers used by the PDF backend.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Text
// =============================================================================

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Ideographs are roughly square
pub const CJK_CHAR_WIDTH_RATIO: f32 = 1.0;

/// Baseline-to-baseline distance as a multiple of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.35;

/// Space between a field label and its value (points)
pub const LABEL_GAP: f32 = 2.0;

/// Space after each labeled field (points)
pub const FIELD_GAP: f32 = 6.0;

// =============================================================================
// Cards and Frames
// =============================================================================

/// Inner padding of a card frame (points)
pub const CARD_PADDING: f32 = 10.0;

/// Gap between image slots and thumbnails (points)
pub const IMAGE_GAP: f32 = 6.0;

/// Line width for card frames (points)
pub const FRAME_LINE_WIDTH: f32 = 0.75;

/// Line width for placeholder outlines and crosses (points)
pub const PLACEHOLDER_LINE_WIDTH: f32 = 0.5;

/// Gray level of card frames
pub const FRAME_GRAY: f32 = 0.55;

/// Gray level of placeholder fills
pub const PLACEHOLDER_FILL_GRAY: f32 = 0.93;

/// Gray level of placeholder outlines
pub const PLACEHOLDER_LINE_GRAY: f32 = 0.75;

/// Gray level of field labels
pub const LABEL_GRAY: f32 = 0.4;

/// Images are placed at 72 dpi so one pixel is one point before scaling
pub const IMAGE_DPI: f32 = 72.0;
