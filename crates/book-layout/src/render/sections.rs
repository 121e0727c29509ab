use super::RenderContext;
use super::geometry::Rect;
use crate::constants::FIELD_GAP;
use crate::document::TextSection;
use printpdf::Op;

/// Headed free-text sections stacked on one page. Text past the bottom
/// margin is dropped.
pub(super) fn render_sections(
    ctx: &mut RenderContext,
    sections: &[TextSection],
    area: &Rect,
) -> Vec<Op> {
    let mut ops = Vec::new();
    let heading_size = ctx.options.heading_font_size_pt;
    let body_size = ctx.options.body_font_size_pt;
    let body_line = RenderContext::line_height(body_size);

    let mut top = area.top();
    let mut dropped = 0;

    for section in sections {
        if top - RenderContext::line_height(heading_size) < area.y {
            dropped += 1;
            continue;
        }
        ctx.text_line(&mut ops, &section.heading, area.x, top, heading_size, true, 0.0);
        top -= RenderContext::line_height(heading_size) + FIELD_GAP;

        for line in ctx.font.wrap(&section.body, body_size, area.width) {
            if top - body_line < area.y {
                dropped += 1;
                continue;
            }
            ctx.text_line(&mut ops, &line, area.x, top, body_size, false, 0.0);
            top -= body_line;
        }
        top -= 2.0 * FIELD_GAP;
    }

    if dropped > 0 {
        log::warn!("{} lines did not fit on the sections page", dropped);
    }

    ops
}
