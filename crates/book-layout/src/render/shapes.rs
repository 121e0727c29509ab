//! Frames, placeholders and lines as printpdf ops.

use super::geometry::Rect;
use crate::constants::*;
use printpdf::{
    Color, Line, LinePoint, Op, PaintMode, Point, Polygon, PolygonRing, Pt, Rgb, WindingOrder,
};

pub fn gray(level: f32) -> Color {
    Color::Rgb(Rgb {
        r: level,
        g: level,
        b: level,
        icc_profile: None,
    })
}

fn point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: false,
    }
}

fn rect_op(rect: &Rect, mode: PaintMode) -> Op {
    let points = vec![
        point(rect.x, rect.y),
        point(rect.right(), rect.y),
        point(rect.right(), rect.top()),
        point(rect.x, rect.top()),
    ];
    Op::DrawPolygon {
        polygon: Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        },
    }
}

fn line_op(x1: f32, y1: f32, x2: f32, y2: f32) -> Op {
    Op::DrawLine {
        line: Line {
            points: vec![point(x1, y1), point(x2, y2)],
            is_closed: false,
        },
    }
}

/// Outline of a card
pub fn card_frame(rect: &Rect) -> Vec<Op> {
    vec![
        Op::SaveGraphicsState,
        Op::SetOutlineColor {
            col: gray(FRAME_GRAY),
        },
        Op::SetOutlineThickness {
            pt: Pt(FRAME_LINE_WIDTH),
        },
        rect_op(rect, PaintMode::Stroke),
        Op::RestoreGraphicsState,
    ]
}

/// An empty card slot: a frame with a light fill and nothing inside
pub fn empty_card(rect: &Rect) -> Vec<Op> {
    vec![
        Op::SaveGraphicsState,
        Op::SetFillColor {
            col: gray(PLACEHOLDER_FILL_GRAY),
        },
        Op::SetOutlineColor {
            col: gray(FRAME_GRAY),
        },
        Op::SetOutlineThickness {
            pt: Pt(FRAME_LINE_WIDTH),
        },
        rect_op(rect, PaintMode::FillStroke),
        Op::RestoreGraphicsState,
    ]
}

/// An empty image slot: filled box crossed corner to corner
pub fn image_placeholder(rect: &Rect) -> Vec<Op> {
    vec![
        Op::SaveGraphicsState,
        Op::SetFillColor {
            col: gray(PLACEHOLDER_FILL_GRAY),
        },
        Op::SetOutlineColor {
            col: gray(PLACEHOLDER_LINE_GRAY),
        },
        Op::SetOutlineThickness {
            pt: Pt(PLACEHOLDER_LINE_WIDTH),
        },
        rect_op(rect, PaintMode::FillStroke),
        line_op(rect.x, rect.y, rect.right(), rect.top()),
        line_op(rect.x, rect.top(), rect.right(), rect.y),
        Op::RestoreGraphicsState,
    ]
}

/// Thin horizontal rule
pub fn rule(x1: f32, x2: f32, y: f32) -> Vec<Op> {
    vec![
        Op::SaveGraphicsState,
        Op::SetOutlineColor {
            col: gray(FRAME_GRAY),
        },
        Op::SetOutlineThickness {
            pt: Pt(PLACEHOLDER_LINE_WIDTH),
        },
        line_op(x1, y, x2, y),
        Op::RestoreGraphicsState,
    ]
}
