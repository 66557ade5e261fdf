use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::IntegrateError;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());
static BODY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<body[^>]*>(.*?)</body>").unwrap());
static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?html[^>]*>").unwrap());
static BODY_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?body[^>]*>").unwrap());
static STYLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>(.*?)</style>").unwrap());
static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*(?:src=["'][^"']*["']|type=["'][^"']*["'])*[^>]*>.*?</script>"#).unwrap()
});
static MODULE_SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*type=["']module["'][^>]*>.*?</script>"#).unwrap()
});

pub const DEFAULT_TITLE: &str = "Documentation";

/// Style blocks mentioning one of these are content styles; anything else is
/// treated as page layout and dropped so it can't fight the template CSS.
const STYLE_KEYWORDS: &[&str] = &["badge", "mermaid", "highlight", "code", "pre", "table", "img"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContent {
    pub title: String,
    pub body: String,
    pub styles: String,
    pub scripts: String,
}

/// Read a standalone page and pull out the parts that survive wrapping.
pub fn extract(path: &Path) -> Result<ExtractedContent, IntegrateError> {
    let html = std::fs::read_to_string(path).map_err(|source| IntegrateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_from_str(&html))
}

pub fn extract_from_str(html: &str) -> ExtractedContent {
    ExtractedContent {
        title: extract_title(html),
        body: extract_body(html),
        styles: extract_styles(html),
        scripts: extract_scripts(html),
    }
}

fn extract_title(html: &str) -> String {
    TITLE_RE
        .captures(html)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

fn extract_body(html: &str) -> String {
    if let Some(caps) = BODY_RE.captures(html) {
        return caps[1].trim().to_string();
    }

    // No <body>: take everything after the head and drop stray wrapper tags
    match html.find("</head>") {
        Some(idx) => {
            let rest = html[idx + "</head>".len()..].trim();
            let rest = HTML_TAG_RE.replace_all(rest, "");
            BODY_TAG_RE.replace_all(&rest, "").into_owned()
        }
        None => html.to_string(),
    }
}

fn extract_styles(html: &str) -> String {
    STYLE_RE
        .captures_iter(html)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
        .filter(|style| is_content_style(style))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_content_style(style: &str) -> bool {
    let lower = style.to_lowercase();
    STYLE_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Module scripts are collected on their own and placed first. They also match
/// the general pattern, so they appear twice in the output.
fn extract_scripts(html: &str) -> String {
    let scripts = SCRIPT_RE
        .find_iter(html)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let modules: Vec<&str> = MODULE_SCRIPT_RE.find_iter(html).map(|m| m.as_str()).collect();
    if modules.is_empty() {
        scripts
    } else {
        format!("{}\n{}", modules.join("\n"), scripts)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
    }

    #[test]
    fn title_is_trimmed_and_case_insensitive() {
        let c = extract_from_str("<HTML><head><TITLE>\n  Release Notes \n</Title></head></HTML>");
        assert_eq!(c.title, "Release Notes");
    }

    #[test]
    fn first_title_wins() {
        let c = extract_from_str("<title>One</title><title>Two</title>");
        assert_eq!(c.title, "One");
    }

    #[test]
    fn missing_title_defaults() {
        let c = extract_from_str("<body><p>x</p></body>");
        assert_eq!(c.title, DEFAULT_TITLE);
    }

    #[test]
    fn body_inner_html_trimmed() {
        let c = extract_from_str("<html><body class=\"page\">\n  <h1>Hi</h1>\n</body></html>");
        assert_eq!(c.body, "<h1>Hi</h1>");
    }

    #[test]
    fn body_fallback_after_head() {
        let html = "<html><head><title>T</title></head>\n<html lang=\"en\"><p>Loose</p></html>";
        let c = extract_from_str(html);
        assert_eq!(c.body, "<p>Loose</p>");
    }

    #[test]
    fn body_fallback_strips_unclosed_body_tag() {
        let c = extract_from_str("<head></head><BODY><p>Open</p>");
        assert_eq!(c.body, "<p>Open</p>");
    }

    #[test]
    fn no_body_no_head_keeps_everything() {
        let c = extract_from_str("<p>fragment</p>");
        assert_eq!(c.body, "<p>fragment</p>");
    }

    #[test]
    fn layout_styles_dropped() {
        let c = extract_from_str(&fixture("styled.html"));
        assert!(c.styles.contains("table"));
        assert!(c.styles.contains(".badge"));
        assert!(!c.styles.contains("margin: 0 auto"));
        assert_eq!(
            c.styles,
            "table { border-collapse: collapse; }\n  td, th { border: 1px solid #ccc; }\n.badge { display: inline-block; }"
        );
    }

    #[test]
    fn keyword_match_ignores_case() {
        let c = extract_from_str("<style>.x { } /* TABLE */</style>");
        assert_eq!(c.styles, ".x { } /* TABLE */");
    }

    #[test]
    fn no_content_styles_is_empty() {
        let c = extract_from_str("<style>body { margin: 0 }</style>");
        assert!(c.styles.is_empty());
    }

    #[test]
    fn module_scripts_prepended_and_duplicated() {
        let c = extract_from_str(&fixture("styled.html"));
        let module = r#"<script type="module">import mermaid from "./mermaid.mjs";</script>"#;
        assert!(c.scripts.starts_with(module));
        assert_eq!(c.scripts.matches(module).count(), 2);
        assert!(c.scripts.contains(r#"<script src="https://cdn.example.com/badges.js"></script>"#));
    }

    #[test]
    fn no_scripts_is_empty() {
        let c = extract_from_str("<body>plain</body>");
        assert!(c.scripts.is_empty());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let err = extract(Path::new("tests/fixtures/does-not-exist.html")).unwrap_err();
        assert!(matches!(err, IntegrateError::Read { .. }));
        assert!(!err.is_fatal());
    }
}
