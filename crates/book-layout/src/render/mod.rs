//! PDF rendering backend
//!
//! Turns an assembled [`Document`] into PDF bytes with printpdf:
//! - Cover and card pages map one-to-one onto physical pages
//! - LookBook flows are measured and broken across as many pages as needed
//! - Image slots draw the resolved image, empty slots draw placeholders

mod cards;
mod cover;
mod flow;
mod geometry;
mod sections;
mod shapes;
mod text;

pub use flow::{BlockMetrics, FlowLayout, ItemMetrics, ItemPlacement, Segment, paginate_flow};
pub use geometry::{Rect, fit_centered, fit_scale};
pub use text::{PageFont, estimate_width};

use crate::constants::*;
use crate::document::{Document, ImageSlot, LabeledField, PageContent};
use crate::entry::{ImageId, ImageRef};
use crate::io::{ImageStore, load_font, resolve_images};
use crate::options::BookOptions;
use crate::script::contains_cjk;
use crate::types::*;
use printpdf::{
    Mm, Op, ParsedFont, PdfDocument, PdfPage, PdfSaveOptions, Pt, RawImage, XObjectId,
    XObjectTransform,
};
use std::collections::HashMap;
use std::path::Path;

/// Resolve images and font, render, and write the PDF to `output_path`
pub async fn generate_pdf(
    document: &Document,
    options: &BookOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    options.validate()?;

    let images = resolve_images(document).await?;
    let font = match &options.font_path {
        Some(path) => Some(load_font(path).await?),
        None => None,
    };

    let document = document.clone();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    let bytes = tokio::task::spawn_blocking(move || {
        render_pdf_bytes(&document, &options, &images, font.as_deref())
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Wrote {}", output_path.display());

    Ok(())
}

/// Render a document to PDF bytes.
///
/// Every image the document references must already be in `images`; a
/// missing or undecodable image fails the whole render.
pub fn render_pdf_bytes(
    document: &Document,
    options: &BookOptions,
    images: &ImageStore,
    font_bytes: Option<&[u8]>,
) -> Result<Vec<u8>> {
    options.validate()?;
    document.check_image_ids()?;

    let mut ctx = RenderContext::new(document.kind.title(), options, images, font_bytes)?;

    for page in &document.pages {
        let (width_mm, height_mm) = options
            .paper_size
            .dimensions_with_orientation(page.orientation);
        let area = content_area(width_mm, height_mm, options);

        let physical_pages = match &page.content {
            PageContent::Cover(title) => vec![cover::render_cover(&mut ctx, title, &area)],
            PageContent::Cards(slots) => vec![cards::render_card_page(&mut ctx, slots, &area)?],
            PageContent::Flow(blocks) => flow::render_flow(&mut ctx, blocks, &area)?,
            PageContent::Sections(sections) => {
                vec![sections::render_sections(&mut ctx, sections, &area)]
            }
        };

        for ops in physical_pages {
            ctx.doc
                .pages
                .push(PdfPage::new(Mm(width_mm), Mm(height_mm), ops));
        }
    }

    log::debug!(
        "Rendered {} document pages onto {} PDF pages",
        document.page_count(),
        ctx.doc.pages.len()
    );

    let mut warnings = Vec::new();
    let bytes = ctx.doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::warn!("PDF writer reported {} warnings", warnings.len());
    }

    Ok(bytes)
}

/// Printable area inside the margins, in points
fn content_area(width_mm: f32, height_mm: f32, options: &BookOptions) -> Rect {
    let m = &options.margins;
    Rect::new(
        mm_to_pt(m.left_mm),
        mm_to_pt(m.bottom_mm),
        mm_to_pt(width_mm - m.left_mm - m.right_mm),
        mm_to_pt(height_mm - m.top_mm - m.bottom_mm),
    )
}

/// State shared by all pages of one render
pub(crate) struct RenderContext<'a> {
    pub doc: PdfDocument,
    pub font: PageFont,
    pub options: &'a BookOptions,
    images: &'a ImageStore,
    xobjects: HashMap<ImageId, (XObjectId, f32, f32)>,
    warned_missing_glyphs: bool,
}

impl<'a> RenderContext<'a> {
    fn new(
        title: &str,
        options: &'a BookOptions,
        images: &'a ImageStore,
        font_bytes: Option<&[u8]>,
    ) -> Result<Self> {
        let mut doc = PdfDocument::new(title);

        let font = match font_bytes {
            Some(bytes) => {
                let mut font_warnings = Vec::new();
                let parsed = ParsedFont::from_bytes(bytes, 0, &mut font_warnings)
                    .ok_or_else(|| BookError::Pdf("Failed to parse font".to_string()))?;
                let id = doc.add_font(&parsed);
                PageFont::External { id, parsed }
            }
            None => PageFont::Builtin,
        };

        Ok(Self {
            doc,
            font,
            options,
            images,
            xobjects: HashMap::new(),
            warned_missing_glyphs: false,
        })
    }

    /// Line height for text at `size`
    pub fn line_height(size: f32) -> f32 {
        size * LINE_HEIGHT_FACTOR
    }

    /// One line of text whose line box starts at `top`
    #[allow(clippy::too_many_arguments)]
    pub fn text_line(
        &mut self,
        ops: &mut Vec<Op>,
        text: &str,
        x: f32,
        top: f32,
        size: f32,
        bold: bool,
        gray_level: f32,
    ) {
        if text.is_empty() {
            return;
        }
        if self.font.is_builtin() && !self.warned_missing_glyphs && contains_cjk(text) {
            log::warn!("CJK text rendered with the builtin font; set font_path to a CJK font");
            self.warned_missing_glyphs = true;
        }
        ops.push(Op::SetFillColor {
            col: shapes::gray(gray_level),
        });
        ops.extend(self.font.text_ops(text, x, top - size, size, bold));
    }

    /// Same as [`Self::text_line`] but centered on `center_x`
    pub fn centered_line(
        &mut self,
        ops: &mut Vec<Op>,
        text: &str,
        center_x: f32,
        top: f32,
        size: f32,
        bold: bool,
    ) {
        let width = self.font.text_width(text, size);
        self.text_line(ops, text, center_x - width / 2.0, top, size, bold, 0.0);
    }

    /// Wrapped lines of a field value
    pub fn field_lines(&self, field: &LabeledField, width: f32) -> Vec<String> {
        self.font
            .wrap(&field.value, self.options.body_font_size_pt, width)
    }

    /// Draw a label over its wrapped value; returns the height used
    pub fn draw_field(
        &mut self,
        ops: &mut Vec<Op>,
        field: &LabeledField,
        x: f32,
        top: f32,
        width: f32,
    ) -> f32 {
        let label_size = self.options.label_font_size_pt;
        let body_size = self.options.body_font_size_pt;

        self.text_line(ops, field.label, x, top, label_size, true, LABEL_GRAY);

        let mut y = top - Self::line_height(label_size) - LABEL_GAP;
        for line in self.field_lines(field, width) {
            self.text_line(ops, &line, x, y, body_size, false, 0.0);
            y -= Self::line_height(body_size);
        }

        top - y + FIELD_GAP
    }

    /// Draw an image slot: the image when filled, a placeholder when empty
    pub fn draw_slot(&mut self, ops: &mut Vec<Op>, slot: &ImageSlot, rect: &Rect) -> Result<()> {
        match slot {
            ImageSlot::Filled(image) => self.draw_image(ops, image, rect),
            ImageSlot::Empty => {
                ops.extend(shapes::image_placeholder(rect));
                Ok(())
            }
        }
    }

    /// Draw an image scaled to fit and centered in `rect`
    pub fn draw_image(&mut self, ops: &mut Vec<Op>, image: &ImageRef, rect: &Rect) -> Result<()> {
        let (id, width, height) = self.xobject(image.id)?;
        let placed = fit_centered(width, height, rect);
        let scale = fit_scale(width, height, rect.width, rect.height);

        ops.push(Op::UseXobject {
            id,
            transform: XObjectTransform {
                translate_x: Some(Pt(placed.x)),
                translate_y: Some(Pt(placed.y)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        });
        Ok(())
    }

    /// Decode an image once and register it with the document
    fn xobject(&mut self, id: ImageId) -> Result<(XObjectId, f32, f32)> {
        if let Some((xobject, w, h)) = self.xobjects.get(&id) {
            return Ok((xobject.clone(), *w, *h));
        }

        let bytes = self.images.get(id).ok_or_else(|| BookError::Image {
            id,
            reason: "image was not resolved before rendering".to_string(),
        })?;

        let mut warnings = Vec::new();
        let raw = RawImage::decode_from_bytes(bytes, &mut warnings)
            .map_err(|e| BookError::Image {
                id,
                reason: e.to_string(),
            })?;
        let (w, h) = (raw.width as f32, raw.height as f32);
        let xobject = self.doc.add_image(&raw);

        self.xobjects.insert(id, (xobject.clone(), w, h));
        Ok((xobject, w, h))
    }
}
