// src/codegen/extract.rs — Clean source text out of raw model output

use regex::Regex;
use std::sync::OnceLock;

static FENCED_BLOCK: OnceLock<Regex> = OnceLock::new();

fn fenced_block() -> &'static Regex {
    FENCED_BLOCK.get_or_init(|| {
        // First fenced block, optionally tagged as markup/component syntax.
        Regex::new(r"(?s)```(?:html|jsx|tsx)?\n(.*?)```").expect("fenced block pattern")
    })
}

/// Turn raw generated text into clean source text.
///
/// The input is untrusted free text from an external system. This never
/// fails: on any miss it degrades toward returning the input itself, since
/// the worst case is showing raw text to the user.
///
/// 1. If a fenced code block is present, its trimmed interior is returned
///    verbatim — the common case, trusted as-is.
/// 2. Otherwise a line filter drops pure-commentary lines (leading `*`, `#`,
///    fence delimiters, and "key improvements" trailers). The filter only
///    removes whole lines; kept lines are never rewritten.
pub fn extract(raw: &str) -> String {
    if let Some(caps) = fenced_block().captures(raw) {
        return caps[1].trim().to_string();
    }

    raw.lines()
        .filter(|line| !is_commentary(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn is_commentary(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('*')
        || trimmed.starts_with('#')
        || trimmed.starts_with("```")
        || trimmed.to_lowercase().starts_with("key improvements")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fenced_block_html() {
        let raw = "Here is your page:\n```html\n<div class=\"p-4\">hi</div>\n```\nEnjoy!";
        assert_eq!(extract(raw), "<div class=\"p-4\">hi</div>");
    }

    #[test]
    fn test_fenced_block_jsx() {
        let raw = "```jsx\nexport default function App() { return <div />; }\n```";
        assert_eq!(
            extract(raw),
            "export default function App() { return <div />; }"
        );
    }

    #[test]
    fn test_fenced_block_untagged() {
        let raw = "```\n<p>plain</p>\n```";
        assert_eq!(extract(raw), "<p>plain</p>");
    }

    #[test]
    fn test_first_block_wins() {
        let raw = "```html\n<first/>\n```\ntext\n```html\n<second/>\n```";
        assert_eq!(extract(raw), "<first/>");
    }

    #[test]
    fn test_surrounding_commentary_ignored_with_fence() {
        let raw = "# Heading\n* bullet\n```html\n<div/>\n```\nKey improvements: none";
        assert_eq!(extract(raw), "<div/>");
    }

    #[test]
    fn test_interior_trimmed_but_verbatim() {
        let raw = "```html\n\n  <div>\n    spaced\n  </div>\n\n```";
        assert_eq!(extract(raw), "<div>\n    spaced\n  </div>");
    }

    #[test]
    fn test_fallback_drops_commentary_lines() {
        let raw = "# Title\n<div>kept</div>\n* a note\n<p>also kept</p>\nKey Improvements: blah";
        assert_eq!(extract(raw), "<div>kept</div>\n<p>also kept</p>");
    }

    #[test]
    fn test_fallback_keeps_non_matching_lines_untouched() {
        let raw = "<span># not a heading, starts with markup</span>";
        assert_eq!(extract(raw), raw);
    }

    #[test]
    fn test_fallback_drops_stray_fences() {
        // A lone fence with no closing partner: no block match, so the
        // fence line itself is filtered out.
        let raw = "```html\n<div>still here</div>";
        assert_eq!(extract(raw), "<div>still here</div>");
    }

    #[test]
    fn test_key_improvements_case_insensitive() {
        let raw = "<div/>\nKEY IMPROVEMENTS and such";
        assert_eq!(extract(raw), "<div/>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract(""), "");
    }

    #[test]
    fn test_pure_commentary_collapses_to_empty() {
        assert_eq!(extract("# a\n* b\n```"), "");
    }
}
