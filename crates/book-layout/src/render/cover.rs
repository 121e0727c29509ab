use super::geometry::Rect;
use super::{RenderContext, shapes};
use crate::document::TitleBlock;
use printpdf::Op;

pub const CREW_LABEL: &str = "Crew";
pub const DIRECTOR_LABEL: &str = "Director";
pub const DATE_LABEL: &str = "Date";

/// The cover: title, project name and a centered credits block
pub(super) fn render_cover(ctx: &mut RenderContext, title: &TitleBlock, area: &Rect) -> Vec<Op> {
    let mut ops = Vec::new();
    let center = area.center_x();
    let title_size = ctx.options.title_font_size_pt;
    let heading_size = ctx.options.heading_font_size_pt;
    let body_size = ctx.options.body_font_size_pt;

    let mut top = area.y + area.height * 0.7;
    ctx.centered_line(&mut ops, title.title, center, top, title_size, true);
    top -= RenderContext::line_height(title_size);

    ctx.centered_line(&mut ops, &title.project_name, center, top, heading_size * 1.5, true);
    top -= RenderContext::line_height(heading_size * 1.5) + body_size;

    ops.extend(shapes::rule(center - area.width / 6.0, center + area.width / 6.0, top));
    top -= body_size;

    for line in credit_lines(title) {
        ctx.centered_line(&mut ops, &line, center, top, body_size, false);
        top -= RenderContext::line_height(body_size) * 1.2;
    }

    ops
}

/// "Label: value" lines for the fields that have a value
pub(super) fn credit_lines(title: &TitleBlock) -> Vec<String> {
    [
        (CREW_LABEL, &title.crew_name),
        (DIRECTOR_LABEL, &title.director_name),
        (DATE_LABEL, &title.date),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{}: {}", label, value))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_lines_skip_empty() {
        let title = TitleBlock {
            title: "Location Book",
            project_name: "Pilot".to_string(),
            crew_name: "Crew A".to_string(),
            director_name: String::new(),
            date: "1/1/2025".to_string(),
        };
        assert_eq!(credit_lines(&title), vec!["Crew: Crew A", "Date: 1/1/2025"]);
    }
}
