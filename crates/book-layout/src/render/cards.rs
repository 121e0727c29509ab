use super::geometry::Rect;
use super::{RenderContext, flow, shapes};
use crate::constants::{CARD_PADDING, IMAGE_GAP, mm_to_pt};
use crate::document::{CardFragment, CardSlot, LocationCard};
use crate::types::Result;
use printpdf::Op;

/// A page of card slots side by side; empty slots draw as blank frames
pub(super) fn render_card_page(
    ctx: &mut RenderContext,
    slots: &[CardSlot],
    area: &Rect,
) -> Result<Vec<Op>> {
    let mut ops = Vec::new();
    let spacing = mm_to_pt(ctx.options.card_spacing_mm);

    for (slot, rect) in slots.iter().zip(area.columns(slots.len(), spacing)) {
        match slot {
            CardSlot::Filled(CardFragment::Location(card)) => {
                draw_location_card(ctx, &mut ops, card, &rect)?;
            }
            CardSlot::Filled(CardFragment::Role(card)) => {
                ops.extend(shapes::card_frame(&rect));
                flow::draw_role_card(ctx, &mut ops, card, &rect)?;
            }
            CardSlot::Empty => ops.extend(shapes::empty_card(&rect)),
        }
    }

    Ok(ops)
}

/// Fields stacked at the top, then the image column filling the rest
fn draw_location_card(
    ctx: &mut RenderContext,
    ops: &mut Vec<Op>,
    card: &LocationCard,
    rect: &Rect,
) -> Result<()> {
    ops.extend(shapes::card_frame(rect));
    let inner = rect.inset(CARD_PADDING);

    let mut top = inner.top();
    for field in &card.fields {
        top -= ctx.draw_field(ops, field, inner.x, top, inner.width);
    }

    let column = Rect::new(inner.x, inner.y, inner.width, (top - inner.y).max(0.0));
    if column.height <= 0.0 {
        log::warn!(
            "Location {} has no room left for its images",
            card.entry_id
        );
        return Ok(());
    }

    for (slot, slot_rect) in card.images.iter().zip(column.rows(card.images.len(), IMAGE_GAP)) {
        ctx.draw_slot(ops, slot, &slot_rect)?;
    }

    Ok(())
}
