//! LookBook flow rendering.
//!
//! The document leaves page breaks to us. Every block is broken into items
//! (the header, a label, one line of text, one row of thumbnails) and the
//! items are packed onto pages in order. A card that runs past the bottom
//! margin continues at the top of the next page and gets a frame on every
//! page it touches. Only a single item taller than a whole page is clipped.

use super::cover::credit_lines;
use super::geometry::Rect;
use super::{RenderContext, shapes};
use crate::card::{ACCESSORIES_LABEL, COLOR_PALETTE_LABEL, STYLING_SUGGESTIONS_LABEL};
use crate::constants::{CARD_PADDING, FIELD_GAP, IMAGE_GAP, LABEL_GAP, LABEL_GRAY, mm_to_pt};
use crate::document::{
    CardFragment, FlowBlock, ImageSlot, LabeledField, LocationCard, RoleCard, TitleBlock,
};
use crate::entry::ImageRef;
use crate::types::Result;
use printpdf::Op;

// =============================================================================
// Pagination
// =============================================================================

/// Height of one item in a block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    pub height: f32,
    /// Pure spacing; dropped rather than carried over a page break
    pub spacing: bool,
}

impl ItemMetrics {
    pub fn content(height: f32) -> Self {
        Self {
            height,
            spacing: false,
        }
    }

    pub fn spacing(height: f32) -> Self {
        Self {
            height,
            spacing: true,
        }
    }
}

/// A block as the paginator sees it: padding above and below its items on
/// every page it appears on
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMetrics {
    pub padding: f32,
    pub items: Vec<ItemMetrics>,
}

/// Where an item landed: its page and its distance below the top of the content area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPlacement {
    pub page: usize,
    pub offset: f32,
}

/// The part of a block that sits on one page, padding included
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub block: usize,
    pub page: usize,
    pub offset: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowLayout {
    pub pages: usize,
    /// Per block, per item; `None` for spacing dropped at a page break
    pub items: Vec<Vec<Option<ItemPlacement>>>,
    pub segments: Vec<Segment>,
}

/// Pack blocks onto pages of `available` height, `gap` apart.
///
/// A block starts on the current page when its padding and first item fit,
/// otherwise on a fresh one. Items then fill pages in order; the block
/// breaks between items and carries on after the next page's top padding.
/// An item that does not fit even on an empty page is placed anyway.
/// No blocks, no pages.
pub fn paginate_flow(blocks: &[BlockMetrics], available: f32, gap: f32) -> FlowLayout {
    let mut layout = FlowLayout::default();
    if blocks.is_empty() {
        return layout;
    }

    let mut page = 0;
    let mut used = 0.0;
    let mut page_has_content = false;

    for (index, block) in blocks.iter().enumerate() {
        let pad = block.padding;
        let first = block.items.first().map_or(0.0, |item| item.height);

        if page_has_content {
            if used + gap + 2.0 * pad + first > available {
                page += 1;
                used = 0.0;
            } else {
                used += gap;
            }
        }

        let mut segment_start = used;
        let mut segment_items = 0;
        used += pad;

        let mut placements = Vec::with_capacity(block.items.len());
        for item in &block.items {
            if segment_items > 0 && used + item.height + pad > available {
                if item.spacing {
                    placements.push(None);
                    continue;
                }
                layout.segments.push(Segment {
                    block: index,
                    page,
                    offset: segment_start,
                    height: used + pad - segment_start,
                });
                page += 1;
                segment_start = 0.0;
                segment_items = 0;
                used = pad;
            }

            placements.push(Some(ItemPlacement { page, offset: used }));
            used += item.height;
            segment_items += 1;
        }

        used += pad;
        layout.segments.push(Segment {
            block: index,
            page,
            offset: segment_start,
            height: used - segment_start,
        });
        layout.items.push(placements);
        page_has_content = true;
    }

    layout.pages = page + 1;
    layout
}

// =============================================================================
// Items
// =============================================================================

enum Thumb<'a> {
    Slot(&'a ImageSlot),
    Image(&'a ImageRef),
}

enum Item<'a> {
    Header(&'a TitleBlock),
    Label(&'static str),
    Line(String),
    Spacing(f32),
    Thumbs(Vec<Thumb<'a>>),
}

impl Item<'_> {
    fn metrics(&self, ctx: &RenderContext) -> ItemMetrics {
        let o = ctx.options;
        match self {
            Item::Header(title) => ItemMetrics::content(header_height(ctx, title)),
            Item::Label(_) => ItemMetrics::content(
                RenderContext::line_height(o.label_font_size_pt) + LABEL_GAP,
            ),
            Item::Line(_) => {
                ItemMetrics::content(RenderContext::line_height(o.body_font_size_pt))
            }
            Item::Spacing(height) => ItemMetrics::spacing(*height),
            Item::Thumbs(_) => {
                ItemMetrics::content(mm_to_pt(o.thumbnail_size_mm) + IMAGE_GAP)
            }
        }
    }
}

/// Padding and items of a block laid out at `width`
fn block_items<'a>(
    ctx: &RenderContext,
    block: &'a FlowBlock,
    width: f32,
) -> (f32, Vec<Item<'a>>) {
    let inner_width = (width - 2.0 * CARD_PADDING).max(0.0);
    match block {
        FlowBlock::Header(title) => (0.0, vec![Item::Header(title)]),
        FlowBlock::Card(CardFragment::Role(card)) => {
            (CARD_PADDING, role_items(ctx, card, inner_width))
        }
        FlowBlock::Card(CardFragment::Location(card)) => {
            (CARD_PADDING, location_items(ctx, card, inner_width))
        }
    }
}

fn field_items(ctx: &RenderContext, field: &LabeledField, width: f32, items: &mut Vec<Item>) {
    items.push(Item::Label(field.label));
    items.extend(ctx.field_lines(field, width).into_iter().map(Item::Line));
    items.push(Item::Spacing(FIELD_GAP));
}

/// Thumbnails that fit side by side in `width`
fn thumbs_per_row(thumb: f32, width: f32) -> usize {
    (((width + IMAGE_GAP) / (thumb + IMAGE_GAP)).floor() as usize).max(1)
}

/// Role text, the color palette slot, then the two unpadded image strips
fn role_items<'a>(ctx: &RenderContext, card: &'a RoleCard, width: f32) -> Vec<Item<'a>> {
    let mut items = Vec::new();
    for field in [&card.role_name, &card.wardrobe_style, &card.notes] {
        field_items(ctx, field, width, &mut items);
    }

    items.push(Item::Label(COLOR_PALETTE_LABEL));
    items.push(Item::Thumbs(vec![Thumb::Slot(&card.color_palette)]));
    items.push(Item::Spacing(FIELD_GAP));

    let per_row = thumbs_per_row(mm_to_pt(ctx.options.thumbnail_size_mm), width);
    for (label, images) in [
        (STYLING_SUGGESTIONS_LABEL, &card.styling_suggestions),
        (ACCESSORIES_LABEL, &card.accessories),
    ] {
        items.push(Item::Label(label));
        for row in images.chunks(per_row) {
            items.push(Item::Thumbs(row.iter().map(Thumb::Image).collect()));
        }
        items.push(Item::Spacing(FIELD_GAP));
    }

    items
}

/// Fields on top, the three image slots in a row below
fn location_items<'a>(ctx: &RenderContext, card: &'a LocationCard, width: f32) -> Vec<Item<'a>> {
    let mut items = Vec::new();
    for field in &card.fields {
        field_items(ctx, field, width, &mut items);
    }
    items.push(Item::Thumbs(card.images.iter().map(Thumb::Slot).collect()));
    items
}

// =============================================================================
// Drawing
// =============================================================================

pub(super) fn render_flow(
    ctx: &mut RenderContext,
    blocks: &[FlowBlock],
    area: &Rect,
) -> Result<Vec<Vec<Op>>> {
    let gap = mm_to_pt(ctx.options.card_spacing_mm);
    let laid_out: Vec<(f32, Vec<Item>)> = blocks
        .iter()
        .map(|block| block_items(ctx, block, area.width))
        .collect();
    let metrics: Vec<BlockMetrics> = laid_out
        .iter()
        .map(|(padding, items)| BlockMetrics {
            padding: *padding,
            items: items.iter().map(|item| item.metrics(ctx)).collect(),
        })
        .collect();

    let layout = paginate_flow(&metrics, area.height, gap);
    let mut pages: Vec<Vec<Op>> = (0..layout.pages.max(1)).map(|_| Vec::new()).collect();

    for segment in &layout.segments {
        if matches!(blocks[segment.block], FlowBlock::Card(_)) {
            let rect = Rect::new(
                area.x,
                area.top() - segment.offset - segment.height,
                area.width,
                segment.height,
            );
            pages[segment.page].extend(shapes::card_frame(&rect));
        }
    }

    for (index, ((padding, items), placements)) in
        laid_out.iter().zip(&layout.items).enumerate()
    {
        let x = area.x + padding;
        let width = area.width - 2.0 * padding;
        for ((item, placement), item_metrics) in
            items.iter().zip(placements).zip(&metrics[index].items)
        {
            let Some(placement) = placement else {
                continue;
            };
            if item_metrics.height > area.height {
                log::warn!("Flow block {} has an item taller than a page; it is clipped", index);
            }
            let top = area.top() - placement.offset;
            draw_item(ctx, &mut pages[placement.page], item, x, top, width)?;
        }
    }

    log::debug!("Flowed {} blocks onto {} pages", blocks.len(), pages.len());
    Ok(pages)
}

/// A role card in a fixed rect, as on a card page; items that do not fit are left off
pub(super) fn draw_role_card(
    ctx: &mut RenderContext,
    ops: &mut Vec<Op>,
    card: &RoleCard,
    rect: &Rect,
) -> Result<()> {
    let inner = rect.inset(CARD_PADDING);
    let mut top = inner.top();
    for item in role_items(ctx, card, inner.width) {
        let height = item.metrics(ctx).height;
        if top - height < inner.y {
            log::warn!("Role {} does not fit its card; the rest is left off", card.entry_id);
            break;
        }
        draw_item(ctx, ops, &item, inner.x, top, inner.width)?;
        top -= height;
    }
    Ok(())
}

fn draw_item(
    ctx: &mut RenderContext,
    ops: &mut Vec<Op>,
    item: &Item,
    x: f32,
    top: f32,
    width: f32,
) -> Result<()> {
    match item {
        Item::Header(title) => {
            let height = header_height(ctx, title);
            draw_header(ctx, ops, title, &Rect::new(x, top - height, width, height));
        }
        Item::Label(label) => {
            let size = ctx.options.label_font_size_pt;
            ctx.text_line(ops, label, x, top, size, true, LABEL_GRAY);
        }
        Item::Line(line) => {
            let size = ctx.options.body_font_size_pt;
            ctx.text_line(ops, line, x, top, size, false, 0.0);
        }
        Item::Spacing(_) => {}
        Item::Thumbs(thumbs) => {
            let size = mm_to_pt(ctx.options.thumbnail_size_mm);
            for (i, thumb) in thumbs.iter().enumerate() {
                let rect = Rect::new(x + i as f32 * (size + IMAGE_GAP), top - size, size, size);
                match thumb {
                    Thumb::Slot(slot) => ctx.draw_slot(ops, slot, &rect)?,
                    Thumb::Image(image) => ctx.draw_image(ops, image, &rect)?,
                }
            }
        }
    }
    Ok(())
}

fn header_height(ctx: &RenderContext, title: &TitleBlock) -> f32 {
    let o = ctx.options;
    RenderContext::line_height(o.title_font_size_pt)
        + RenderContext::line_height(o.heading_font_size_pt)
        + credit_lines(title).len() as f32 * RenderContext::line_height(o.body_font_size_pt)
        + FIELD_GAP
}

fn draw_header(ctx: &mut RenderContext, ops: &mut Vec<Op>, title: &TitleBlock, rect: &Rect) {
    let title_size = ctx.options.title_font_size_pt;
    let heading_size = ctx.options.heading_font_size_pt;
    let body_size = ctx.options.body_font_size_pt;

    let mut top = rect.top();
    ctx.text_line(ops, title.title, rect.x, top, title_size, true, 0.0);
    top -= RenderContext::line_height(title_size);

    ctx.text_line(ops, &title.project_name, rect.x, top, heading_size, true, 0.0);
    top -= RenderContext::line_height(heading_size);

    for line in credit_lines(title) {
        ctx.text_line(ops, &line, rect.x, top, body_size, false, LABEL_GRAY);
        top -= RenderContext::line_height(body_size);
    }

    ops.extend(shapes::rule(rect.x, rect.right(), rect.y + FIELD_GAP / 2.0));
}
