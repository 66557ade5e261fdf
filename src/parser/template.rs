use std::path::Path;

use crate::error::IntegrateError;

pub const CONTENT_ANCHOR: &str = r#"<article id="content">"#;
pub const SIDEBAR_ANCHOR: &str = r#"<nav id="sidebar">"#;
pub const SIDEBAR_END: &str = "</nav>";
pub const FOOTER_ANCHOR: &str = r#"<footer id="footer">"#;
pub const DOCUMENT_END: &str = "</html>";

/// The reusable parts of the generated index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegions {
    /// Everything before `<article id="content">`.
    pub before_content: String,
    /// `<nav id="sidebar">` through its first `</nav>`.
    pub sidebar: String,
    /// `<footer id="footer">` up to, not including, `</html>`.
    pub footer: String,
}

pub fn load(index_path: &Path) -> Result<TemplateRegions, IntegrateError> {
    if !index_path.is_file() {
        return Err(IntegrateError::IndexMissing(index_path.to_path_buf()));
    }
    let html = std::fs::read_to_string(index_path).map_err(|source| IntegrateError::Read {
        path: index_path.to_path_buf(),
        source,
    })?;
    extract_regions(&html)
}

pub fn extract_regions(html: &str) -> Result<TemplateRegions, IntegrateError> {
    let content_start = find(html, CONTENT_ANCHOR, 0)?;

    let sidebar_start = find(html, SIDEBAR_ANCHOR, 0)?;
    let sidebar_end = find(html, SIDEBAR_END, sidebar_start)? + SIDEBAR_END.len();

    let footer_start = find(html, FOOTER_ANCHOR, 0)?;
    let footer_end = find(html, DOCUMENT_END, footer_start)?;

    Ok(TemplateRegions {
        before_content: html[..content_start].to_string(),
        sidebar: html[sidebar_start..sidebar_end].to_string(),
        footer: html[footer_start..footer_end].to_string(),
    })
}

fn find(html: &str, anchor: &'static str, from: usize) -> Result<usize, IntegrateError> {
    html[from..]
        .find(anchor)
        .map(|idx| from + idx)
        .ok_or(IntegrateError::AnchorMissing { anchor })
}
