//! Fonts, text measurement and line wrapping.

use crate::constants::{CJK_CHAR_WIDTH_RATIO, HELVETICA_CHAR_WIDTH_RATIO};
use crate::script::is_cjk_ideograph;
use printpdf::{BuiltinFont, FontId, Op, ParsedFont, Point, Pt, TextItem, TextMatrix};

/// Font every text run on a page is written with
pub enum PageFont {
    /// Helvetica; has no CJK glyphs
    Builtin,
    /// A registered TrueType font
    External { id: FontId, parsed: ParsedFont },
}

impl PageFont {
    pub fn is_builtin(&self) -> bool {
        matches!(self, PageFont::Builtin)
    }

    /// Width of `text` in points at `size`
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        match self {
            PageFont::Builtin => estimate_width(text, size),
            PageFont::External { parsed, .. } => {
                let mut width = 0.0;
                for ch in text.chars() {
                    if let Some(glyph_id) = parsed.lookup_glyph_index(ch as u32) {
                        let advance = parsed.get_horizontal_advance(glyph_id);
                        width += (advance as f32 / 1000.0) * size;
                    }
                }
                width
            }
        }
    }

    /// Ops writing one line of text with its baseline starting at (x, y)
    pub fn text_ops(&self, text: &str, x: f32, y: f32, size: f32, bold: bool) -> Vec<Op> {
        let item = vec![TextItem::Text(text.to_string())];
        match self {
            PageFont::Builtin => {
                let font = if bold {
                    BuiltinFont::HelveticaBold
                } else {
                    BuiltinFont::Helvetica
                };
                vec![
                    Op::StartTextSection,
                    Op::SetTextCursor {
                        pos: Point { x: Pt(x), y: Pt(y) },
                    },
                    Op::SetFontSizeBuiltinFont {
                        font,
                        size: Pt(size),
                    },
                    Op::WriteTextBuiltinFont { items: item, font },
                    Op::EndTextSection,
                ]
            }
            PageFont::External { id, .. } => vec![
                Op::StartTextSection,
                Op::SetFontSize {
                    font: id.clone(),
                    size: Pt(size),
                },
                Op::SetTextMatrix {
                    matrix: TextMatrix::Translate(Pt(x), Pt(y)),
                },
                Op::WriteText {
                    items: item,
                    font: id.clone(),
                },
                Op::EndTextSection,
            ],
        }
    }

    /// Greedy word wrap to `max_width`; words wider than a line are split by character
    pub fn wrap(&self, text: &str, size: f32, max_width: f32) -> Vec<String> {
        wrap_with(text, max_width, |s| self.text_width(s, size))
    }
}

/// Width estimate for the builtin font
pub fn estimate_width(text: &str, size: f32) -> f32 {
    text.chars()
        .map(|c| {
            if is_cjk_ideograph(c) {
                CJK_CHAR_WIDTH_RATIO
            } else {
                HELVETICA_CHAR_WIDTH_RATIO
            }
        })
        .sum::<f32>()
        * size
}

/// Break opportunities sit after whitespace. Spaces inside a line, and after
/// the last word of a paragraph, are printed as given; only the whitespace a
/// line breaks at is dropped.
fn wrap_with(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();

        for piece in paragraph.split_inclusive(char::is_whitespace) {
            let candidate = format!("{}{}", line, piece);
            if measure(candidate.trim_end()) <= max_width {
                line = candidate;
                continue;
            }

            let kept = line.trim_end().len();
            if kept > 0 {
                line.truncate(kept);
                lines.push(std::mem::take(&mut line));
            } else {
                line.clear();
            }

            if measure(piece.trim_end()) <= max_width {
                line = piece.to_string();
                continue;
            }

            // Word alone is too wide: break it between characters
            for c in piece.chars() {
                line.push(c);
                if measure(line.trim_end()) > max_width && line.chars().count() > 1 {
                    line.pop();
                    lines.push(std::mem::replace(&mut line, c.to_string()));
                }
            }
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_chars(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_wrap_words() {
        let lines = wrap_with("the quick brown fox", 10.0, by_chars);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_long_word() {
        let lines = wrap_with("abcdefghij xy", 4.0, by_chars);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_keeps_paragraphs() {
        let lines = wrap_with("one\n\ntwo", 10.0, by_chars);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_unspaced_cjk() {
        let lines = wrap_with("北京摄影棚", 2.0, by_chars);
        assert_eq!(lines, vec!["北京", "摄影", "棚"]);
    }

    #[test]
    fn test_wrap_keeps_formatter_spacing() {
        let lines = wrap_with("北 京 摄 影 棚 ", 20.0, by_chars);
        assert_eq!(lines, vec!["北 京 摄 影 棚 "]);

        let lines = wrap_with("北 京 摄 影 棚 ", 4.0, by_chars);
        assert_eq!(lines, vec!["北 京", "摄 影", "棚 "]);
    }

    #[test]
    fn test_wrap_keeps_inner_spaces() {
        let lines = wrap_with("a  b", 10.0, by_chars);
        assert_eq!(lines, vec!["a  b"]);
    }

    #[test]
    fn test_estimate_width() {
        assert_eq!(estimate_width("ab", 10.0), 10.0);
        assert_eq!(estimate_width("北京", 10.0), 20.0);
    }
}
