//! Script-aware formatting for free text placed on a page.
//!
//! Dense runs of CJK ideographs print better with a space after each
//! character, so text that is mostly ideographs gets one inserted. Other
//! text passes through untouched.

/// Share of ideographs at or above which text counts as mostly CJK
pub const CJK_THRESHOLD: f64 = 0.5;

/// Whether `c` is in the CJK Unified Ideographs range U+4E00..=U+9FA5
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

/// Fraction of code points in `text` that are CJK ideographs (0.0 for empty text)
pub fn cjk_ratio(text: &str) -> f64 {
    let (cjk, total) = text.chars().fold((0usize, 0usize), |(cjk, total), c| {
        (cjk + usize::from(is_cjk_ideograph(c)), total + 1)
    });
    if total == 0 {
        return 0.0;
    }
    cjk as f64 / total as f64
}

pub fn is_mostly_cjk(text: &str) -> bool {
    !text.is_empty() && cjk_ratio(text) >= CJK_THRESHOLD
}

/// Whether any ideograph appears at all
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk_ideograph)
}

/// Format a free-text field for print.
///
/// Absent text becomes the empty string. Mostly-CJK text gets a space after
/// every ideograph, including the last one; applying this twice doubles the
/// spacing.
pub fn format_text(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    if !is_mostly_cjk(text) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        out.push(c);
        if is_cjk_ideograph(c) {
            out.push(' ');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_cjk_is_spaced() {
        assert_eq!(format_text(Some("测试AB")), "测 试 AB");
    }

    #[test]
    fn test_minority_cjk_is_unchanged() {
        assert_eq!(format_text(Some("Hello 测试")), "Hello 测试");
    }

    #[test]
    fn test_all_cjk_keeps_trailing_space() {
        assert_eq!(format_text(Some("北京摄影棚")), "北 京 摄 影 棚 ");
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(format_text(None), "");
        assert_eq!(format_text(Some("")), "");
    }

    #[test]
    fn test_not_idempotent() {
        let once = format_text(Some("北京"));
        let twice = format_text(Some(&once));
        assert_eq!(once, "北 京 ");
        // 2 ideographs out of 4 code points still meets the threshold
        assert_eq!(twice, "北  京  ");
    }

    #[test]
    fn test_range_bounds() {
        assert!(is_cjk_ideograph('\u{4E00}'));
        assert!(is_cjk_ideograph('\u{9FA5}'));
        assert!(!is_cjk_ideograph('\u{9FA6}'));
        assert!(!is_cjk_ideograph('\u{3042}')); // hiragana
        assert!(!is_cjk_ideograph('A'));
    }

    #[test]
    fn test_ratio() {
        assert_eq!(cjk_ratio(""), 0.0);
        assert_eq!(cjk_ratio("测试AB"), 0.5);
        assert_eq!(cjk_ratio("Hello 测试"), 0.25);
    }
}
