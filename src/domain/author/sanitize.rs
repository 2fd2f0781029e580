//! 文本清洗
//!
//! 所有文本字段共用同一套规则：
//! 1. 去除首尾空白
//! 2. 删除控制字符
//! 3. 剥离标签 `<...>`，并丢弃残留的 `<` / `>`
//! 4. 再次去除首尾空白
//!
//! 引号保持原样。这一步只挡住明显畸形的输入，不等同于完整的 HTML 转义。

use regex::Regex;
use std::sync::OnceLock;

static MARKUP_RE: OnceLock<Regex> = OnceLock::new();

fn markup_regex() -> &'static Regex {
    MARKUP_RE.get_or_init(|| {
        Regex::new("<[^<>]*>")
            .unwrap_or_else(|error| panic!("markup regex failed to compile: {error}"))
    })
}

/// 清洗一段文本
///
/// 幂等：`sanitize_text(&sanitize_text(s)) == sanitize_text(s)`
pub fn sanitize_text(raw: &str) -> String {
    let without_controls: String = raw.trim().chars().filter(|c| !c.is_control()).collect();

    let without_tags = markup_regex().replace_all(&without_controls, "");

    without_tags
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize_text("  Testuser \t\n"), "Testuser");
        assert_eq!(sanitize_text("   "), "");
    }

    #[test]
    fn test_removes_control_characters() {
        assert_eq!(sanitize_text("test\u{0}user\u{7f}"), "testuser");
        assert_eq!(sanitize_text("a\u{1b}[31mb"), "a[31mb");
    }

    #[test]
    fn test_strips_markup() {
        assert_eq!(sanitize_text("<b>bold</b> name"), "bold name");
        assert_eq!(sanitize_text("<script>alert(1)</script>"), "alert(1)");
        assert_eq!(sanitize_text("a < b > c"), "a  c");
        assert_eq!(sanitize_text("1 < 2"), "1  2");
    }

    #[test]
    fn test_markup_only_input_becomes_empty() {
        assert_eq!(sanitize_text("<br/>"), "");
        assert_eq!(sanitize_text(" <p> </p> "), "");
    }

    #[test]
    fn test_keeps_quotes() {
        assert_eq!(sanitize_text(r#"O'Brien "the author""#), r#"O'Brien "the author""#);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "  www.google.com ",
            "<i>x</i>  <",
            "\u{7}  test@test.com",
            "plain",
            "<<a>>",
        ];
        for input in inputs {
            let once = sanitize_text(input);
            assert_eq!(sanitize_text(&once), once, "input: {input:?}");
        }
    }
}
