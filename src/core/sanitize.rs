// sanitize.rs - Per-cell sanitization

use crate::core::encoding::fix_encoding;
use scraper::node::Node;
use scraper::Html;

/// Sanitize one cell: strip markup when tags may be present, then repair
/// encoding. Pure; the input cell is never mutated.
pub fn sanitize_cell(cell: &str) -> String {
    // '<' is a cheap pre-filter; the parser itself decides what is markup.
    let text = if cell.contains('<') {
        strip_markup(cell)
    } else {
        cell.to_string()
    };

    fix_encoding(&text)
}

/// Extract the text content of a markup fragment, dropping `script` and
/// `style` elements with their entire subtrees. Text of all remaining nodes
/// is concatenated in document order, descendants included. The parser is
/// lenient; malformed markup yields best-effort text, never an error.
pub fn strip_markup(cell: &str) -> String {
    let fragment = Html::parse_fragment(cell);
    let mut text = String::new();

    for node in fragment.tree.root().descendants() {
        if let Node::Text(chunk) = node.value() {
            let excluded = node.ancestors().any(|ancestor| {
                matches!(ancestor.value(),
                         Node::Element(el) if matches!(el.name(), "script" | "style"))
            });
            if !excluded {
                text.push_str(chunk);
            }
        }
    }

    text
}

/// Rewrite every cell of a row in place; returns how many cells changed.
pub fn sanitize_row(row: &mut [String]) -> usize {
    let mut rewritten = 0;

    for cell in row.iter_mut() {
        let sanitized = sanitize_cell(cell);
        if sanitized != *cell {
            *cell = sanitized;
            rewritten += 1;
        }
    }

    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup_drops_tags_and_script_content() {
        assert_eq!(
            strip_markup("<b>Hi</b> <script>evil()</script>there"),
            "Hi there"
        );
    }

    #[test]
    fn test_strip_markup_drops_style_subtrees() {
        assert_eq!(strip_markup("<style>p { color: red }</style>x<i>y</i>"), "xy");
    }

    #[test]
    fn test_strip_markup_extracts_nested_text_in_document_order() {
        assert_eq!(strip_markup("<div><p>a<span>b</span></p>c</div>"), "abc");
    }

    #[test]
    fn test_strip_markup_tolerates_malformed_markup() {
        // Partial or broken markup must extract what it can, not error.
        let _ = strip_markup("<div <p unclosed");
        let _ = strip_markup("<<<>>>");
        assert_eq!(strip_markup("<b>open"), "open");
    }

    #[test]
    fn test_sanitize_cell_skips_stripping_without_angle_bracket() {
        assert_eq!(sanitize_cell("plain text, no markup"), "plain text, no markup");
    }

    #[test]
    fn test_sanitize_cell_strips_then_repairs() {
        assert_eq!(sanitize_cell("<i>CafÃ©</i>"), "Café");
        assert_eq!(sanitize_cell("price: â‚¬5"), "price: €5");
    }

    #[test]
    fn test_sanitize_row_preserves_cardinality() {
        let mut row = vec![
            "Alice".to_string(),
            "<b>bold</b>".to_string(),
            "CafÃ©".to_string(),
        ];
        let rewritten = sanitize_row(&mut row);

        assert_eq!(row.len(), 3);
        assert_eq!(row, vec!["Alice", "bold", "Café"]);
        assert_eq!(rewritten, 2);
    }
}
